//! Explicit position resolution from component annotations.
//!
//! Classifies every component as *placed* (both annotations parse) or
//! *unplaced* (both absent), and rejects anything in between. The
//! classification has no side effects; auto-placement fills the gaps
//! afterwards.

use weft_core::geometry::Point;

use crate::error::WeftError;
use crate::topology::{Component, Topology};

/// Resolves the explicit positions of all components, in declaration
/// order. `None` marks a component for auto-placement.
pub fn resolve_explicit(topology: &Topology) -> Result<Vec<Option<Point>>, WeftError> {
    topology.components.iter().map(resolve_component).collect()
}

fn resolve_component(component: &Component) -> Result<Option<Point>, WeftError> {
    let invalid = || WeftError::InvalidPosition {
        name: component.name.clone(),
    };

    match component.position_annotations() {
        (None, None) => Ok(None),
        (Some(x), Some(y)) => {
            let x = parse_coordinate(x).ok_or_else(invalid)?;
            let y = parse_coordinate(y).ok_or_else(invalid)?;
            Ok(Some(Point::new(x, y)))
        }
        // A half-set pair is user error, not an unplaced component.
        _ => Err(invalid()),
    }
}

fn parse_coordinate(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|parsed| parsed.is_finite() && *parsed >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Component;

    fn resolve(component: Component) -> Result<Option<Point>, WeftError> {
        let topology = Topology::new(vec![component], vec![]);
        resolve_explicit(&topology).map(|mut positions| positions.remove(0))
    }

    #[test]
    fn test_both_annotations_present() {
        let position = resolve(Component::at("mongodb", "icon", "940.5", "388.77"))
            .unwrap()
            .unwrap();
        assert_eq!(position, Point::new(940.5, 388.77));
    }

    #[test]
    fn test_both_annotations_absent_is_unplaced() {
        assert!(resolve(Component::new("mongodb", "icon")).unwrap().is_none());
    }

    #[test]
    fn test_blank_annotations_are_unplaced() {
        assert!(
            resolve(Component::at("mongodb", "icon", "", ""))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_half_set_pair_is_rejected() {
        let mut component = Component::new("charmworld", "icon");
        component
            .annotations
            .insert(crate::topology::X_ANNOTATION.to_string(), "10".to_string());

        let err = resolve(component).unwrap_err();
        assert_eq!(
            err.to_string(),
            "component \"charmworld\" does not have a valid position"
        );
    }

    #[test]
    fn test_unparseable_value_is_rejected() {
        let err = resolve(Component::at("charmworld", "icon", "bad", "112.23")).unwrap_err();
        assert!(matches!(err, WeftError::InvalidPosition { name } if name == "charmworld"));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let err = resolve(Component::at("charmworld", "icon", "-1", "5")).unwrap_err();
        assert!(matches!(err, WeftError::InvalidPosition { .. }));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let err = resolve(Component::at("charmworld", "icon", "inf", "5")).unwrap_err();
        assert!(matches!(err, WeftError::InvalidPosition { .. }));
    }
}
