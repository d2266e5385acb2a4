//! The validated topology model consumed by the layout engine.
//!
//! A [`Topology`] is an ordered list of named [`Component`]s plus the
//! [`Relation`]s between them. Parsing the topology from its external
//! representation is a collaborator concern; this module only carries
//! the structural validation the engine relies on (unique names,
//! resolvable relation endpoints). Declaration order is significant:
//! auto-placement and icon definition ids both follow it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WeftError;

/// Annotation key holding a component's explicit x-coordinate.
pub const X_ANNOTATION: &str = "x";
/// Annotation key holding a component's explicit y-coordinate.
pub const Y_ANNOTATION: &str = "y";

/// A named node in the topology, rendered as a circular glyph with an
/// icon and label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Unique component name, also used as the label text.
    pub name: String,

    /// Icon reference key, resolved to bytes or an external URL.
    pub icon: String,

    /// Free-form annotations; the engine reads only the position keys.
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl Component {
    /// Creates a component without annotations.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            annotations: BTreeMap::new(),
        }
    }

    /// Creates a component with an explicit position annotation pair.
    pub fn at(name: impl Into<String>, icon: impl Into<String>, x: &str, y: &str) -> Self {
        let mut component = Self::new(name, icon);
        component
            .annotations
            .insert(X_ANNOTATION.to_string(), x.to_string());
        component
            .annotations
            .insert(Y_ANNOTATION.to_string(), y.to_string());
        component
    }

    /// Returns the raw position annotation values, if set.
    ///
    /// Empty strings count as absent; the upstream editor clears
    /// annotations by blanking them rather than removing the keys.
    pub fn position_annotations(&self) -> (Option<&str>, Option<&str>) {
        let read = |key: &str| {
            self.annotations
                .get(key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };
        (read(X_ANNOTATION), read(Y_ANNOTATION))
    }
}

/// One end of a relation: a component name plus an optional role.
///
/// The role is carried through to the relation title only; it has no
/// effect on geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub component: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Endpoint {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            role: None,
        }
    }

    pub fn with_role(component: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            role: Some(role.into()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Some(role) => write!(f, "{}:{}", self.component, role),
            None => write!(f, "{}", self.component),
        }
    }
}

/// An unordered pair of endpoints, rendered as a line with a status
/// indicator gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    pub endpoints: [Endpoint; 2],
}

impl Relation {
    pub fn new(first: Endpoint, second: Endpoint) -> Self {
        Self {
            endpoints: [first, second],
        }
    }

    /// Stable textual title: both endpoint identifiers joined by one
    /// space. Useful for tooltips and debugging, parsed by nothing.
    pub fn title(&self) -> String {
        format!("{} {}", self.endpoints[0], self.endpoints[1])
    }
}

/// The full set of components and relations to lay out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topology {
    pub components: Vec<Component>,

    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Topology {
    pub fn new(components: Vec<Component>, relations: Vec<Relation>) -> Self {
        Self {
            components,
            relations,
        }
    }

    /// Returns the index of the named component, if present.
    pub fn component_index(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    /// Checks the structural invariants the engine depends on:
    /// component names are unique and every relation endpoint resolves
    /// to a declared component.
    pub fn validate(&self) -> Result<(), WeftError> {
        let mut seen = std::collections::HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(WeftError::Topology(format!(
                    "duplicate component name {:?}",
                    component.name
                )));
            }
        }

        for relation in &self.relations {
            for endpoint in &relation.endpoints {
                if self.component_index(&endpoint.component).is_none() {
                    return Err(WeftError::Topology(format!(
                        "relation endpoint {:?} does not match any component",
                        endpoint.component
                    )));
                }
            }
        }

        Ok(())
    }

    /// Relation endpoint pairs as component indices.
    ///
    /// Only valid after [`validate`](Self::validate) has passed.
    pub(crate) fn relation_indices(&self) -> Vec<(usize, usize)> {
        self.relations
            .iter()
            .filter_map(|relation| {
                let a = self.component_index(&relation.endpoints[0].component)?;
                let b = self.component_index(&relation.endpoints[1].component)?;
                Some((a, b))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topology {
        Topology::new(
            vec![
                Component::at("charmworld", "precise/charmworld-58", "813.5", "112.23"),
                Component::at("elasticsearch", "precise/elasticsearch-2", "490.5", "369.77"),
                Component::new("mongodb", "precise/mongodb-21"),
            ],
            vec![Relation::new(
                Endpoint::with_role("charmworld", "database"),
                Endpoint::with_role("mongodb", "database"),
            )],
        )
    }

    #[test]
    fn test_validate_accepts_well_formed_topology() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_endpoint() {
        let mut topology = sample();
        topology.relations.push(Relation::new(
            Endpoint::new("evil-unknown-component"),
            Endpoint::new("mongodb"),
        ));

        let err = topology.validate().unwrap_err();
        assert!(matches!(err, WeftError::Topology(_)));
        assert!(err.to_string().contains("evil-unknown-component"));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut topology = sample();
        topology
            .components
            .push(Component::new("mongodb", "precise/mongodb-22"));

        let err = topology.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate component name"));
    }

    #[test]
    fn test_position_annotations_blank_counts_as_absent() {
        let component = Component::at("charmworld", "precise/charmworld-58", "", "");
        assert_eq!(component.position_annotations(), (None, None));
    }

    #[test]
    fn test_relation_title_joins_endpoints() {
        let relation = Relation::new(
            Endpoint::with_role("charmworld", "essearch"),
            Endpoint::new("elasticsearch"),
        );
        assert_eq!(relation.title(), "charmworld:essearch elasticsearch");
    }

    #[test]
    fn test_topology_roundtrips_through_json() {
        let topology = sample();
        let json = serde_json::to_string(&topology).unwrap();
        let back: Topology = serde_json::from_str(&json).unwrap();
        assert_eq!(back.components.len(), 3);
        assert_eq!(back.relations[0].title(), topology.relations[0].title());
    }
}
