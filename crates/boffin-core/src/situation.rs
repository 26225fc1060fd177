//! Where and how an experiment can be performed.

use std::fmt;

use crate::id::BodyId;

/// Discrete condition under which an experiment is run.
///
/// The `Display` form is the stable token used inside composite subject
/// identifiers and must never change; [`phrase`](SituationKind::phrase)
/// carries the human-readable wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SituationKind {
    /// Landed on the surface.
    SrfLanded,
    /// Splashed down in a liquid.
    SrfSplashed,
    /// Flying in the lower atmosphere.
    FlyingLow,
    /// Flying in the upper atmosphere.
    FlyingHigh,
    /// In space, below the high-orbit threshold.
    InSpaceLow,
    /// In space, above the high-orbit threshold.
    InSpaceHigh,
}

impl SituationKind {
    /// All situation kinds, in ledger display order.
    pub fn all() -> &'static [SituationKind] {
        &[
            Self::SrfLanded,
            Self::SrfSplashed,
            Self::FlyingLow,
            Self::FlyingHigh,
            Self::InSpaceLow,
            Self::InSpaceHigh,
        ]
    }

    /// Human-readable phrase for descriptions (e.g. `"landed at"`).
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::SrfLanded => "landed at",
            Self::SrfSplashed => "splashed down at",
            Self::FlyingLow => "flying low over",
            Self::FlyingHigh => "flying high over",
            Self::InSpaceLow => "in space near",
            Self::InSpaceHigh => "in space high over",
        }
    }
}

impl fmt::Display for SituationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::SrfLanded => "SrfLanded",
            Self::SrfSplashed => "SrfSplashed",
            Self::FlyingLow => "FlyingLow",
            Self::FlyingHigh => "FlyingHigh",
            Self::InSpaceLow => "InSpaceLow",
            Self::InSpaceHigh => "InSpaceHigh",
        };
        write!(f, "{token}")
    }
}

/// A concrete place and condition an experiment can be run in: a celestial
/// body, a [`SituationKind`], and an optional biome with an optional
/// sub-biome refinement.
///
/// Situations are immutable once constructed; the derived subject
/// identifier is recomputed from these fields on demand rather than cached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Situation {
    body: BodyId,
    kind: SituationKind,
    biome: Option<String>,
    sub_biome: Option<String>,
}

impl Situation {
    /// A situation with no biome distinction (global to the body).
    pub fn global(body: BodyId, kind: SituationKind) -> Self {
        Self {
            body,
            kind,
            biome: None,
            sub_biome: None,
        }
    }

    /// A situation tied to a specific biome.
    pub fn in_biome(body: BodyId, kind: SituationKind, biome: impl Into<String>) -> Self {
        Self {
            body,
            kind,
            biome: Some(biome.into()),
            sub_biome: None,
        }
    }

    /// A situation tied to a sub-biome within a biome (e.g. a landmark
    /// inside a larger region).
    pub fn in_sub_biome(
        body: BodyId,
        kind: SituationKind,
        biome: impl Into<String>,
        sub_biome: impl Into<String>,
    ) -> Self {
        Self {
            body,
            kind,
            biome: Some(biome.into()),
            sub_biome: Some(sub_biome.into()),
        }
    }

    /// The celestial body this situation is on or around.
    pub fn body(&self) -> &BodyId {
        &self.body
    }

    /// The discrete situation kind.
    pub fn kind(&self) -> SituationKind {
        self.kind
    }

    /// The biome, if this situation is biome-specific.
    pub fn biome(&self) -> Option<&str> {
        self.biome.as_deref()
    }

    /// The sub-biome refinement, if any.
    pub fn sub_biome(&self) -> Option<&str> {
        self.sub_biome.as_deref()
    }

    /// The biome string used for subject identification: the sub-biome if
    /// present, else the biome, else the empty string.
    ///
    /// A missing biome normalizes to `""` so that malformed or global
    /// situations still produce a well-formed subject identifier.
    pub fn normalized_biome(&self) -> &str {
        self.sub_biome
            .as_deref()
            .or(self.biome.as_deref())
            .unwrap_or("")
    }

    /// Human-readable description, e.g. `"landed at Kerbin's Highlands"`.
    pub fn description(&self) -> String {
        match self.normalized_biome() {
            "" => format!("{} {}", self.kind.phrase(), self.body),
            biome => format!("{} {}'s {}", self.kind.phrase(), self.body, biome),
        }
    }
}
