//! Strongly-typed string identifiers.

use std::fmt;

use crate::situation::SituationKind;

/// Identifies an experiment definition within the host's experiment catalog.
///
/// Matches the host's own experiment identifier (e.g. `"crewReport"`), so it
/// can be used directly against the tech-tree unlock registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExperimentId(String);

impl ExperimentId {
    /// Wrap a host experiment identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExperimentId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for ExperimentId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Identifies a celestial body by its host-facing name (e.g. `"Kerbin"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(String);

impl BodyId {
    /// Wrap a celestial body name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The body name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BodyId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for BodyId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Stable composite identifier for one (experiment, situation) pair.
///
/// This is the key into the subject ledger and the onboard-data inventory.
/// The format is `{experiment}@{body}{situation}{biome}` with all spaces
/// stripped from the biome component, matching the host's own subject
/// identifiers. A `SubjectId` is only constructed through
/// [`compose`](SubjectId::compose), never from a raw string, so every
/// instance is well-formed by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(String);

impl SubjectId {
    /// Build the composite identifier for an experiment in a situation.
    ///
    /// `biome` is the situation's normalized biome string (sub-biome if
    /// present, else biome, else empty); any remaining spaces are stripped
    /// here so that `"Northern Basin"` and `"NorthernBasin"` key the same
    /// subject.
    pub fn compose(
        experiment: &ExperimentId,
        body: &BodyId,
        kind: SituationKind,
        biome: &str,
    ) -> Self {
        let biome: String = biome.chars().filter(|c| *c != ' ').collect();
        Self(format!("{experiment}@{body}{kind}{biome}"))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
