//! The immutable experiment definition.

use crate::error::ExperimentError;
use crate::id::ExperimentId;

/// Definition of a potential measurement, immutable for the process lifetime.
///
/// Experiments are admitted through [`Experiment::new`], which rejects
/// definitions that would poison the yield formula (`base_value /
/// science_cap` appears in every marginal-gain computation). Code holding
/// an `Experiment` may therefore assume `science_cap > 0` and both values
/// finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Experiment {
    id: ExperimentId,
    title: String,
    base_value: f32,
    science_cap: f32,
    applies_science_scale: bool,
}

impl Experiment {
    /// Admit an experiment definition, validating its numeric fields.
    ///
    /// `applies_science_scale` selects the diminishing-returns curve: when
    /// false, every measurement yields full marginal value regardless of
    /// prior collection.
    pub fn new(
        id: ExperimentId,
        title: impl Into<String>,
        base_value: f32,
        science_cap: f32,
        applies_science_scale: bool,
    ) -> Result<Self, ExperimentError> {
        if !base_value.is_finite() || !science_cap.is_finite() {
            return Err(ExperimentError::NonFiniteValue { id });
        }
        if science_cap <= 0.0 {
            return Err(ExperimentError::NonPositiveCap {
                id,
                cap: science_cap,
            });
        }
        if base_value < 0.0 {
            return Err(ExperimentError::NegativeBaseValue { id, base_value });
        }
        Ok(Self {
            id,
            title: title.into(),
            base_value,
            science_cap,
            applies_science_scale,
        })
    }

    /// The host-facing experiment identifier.
    pub fn id(&self) -> &ExperimentId {
        &self.id
    }

    /// Human-readable display title (e.g. `"Crew Report"`).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Science yielded by the first measurement at multiplier 1.
    pub fn base_value(&self) -> f32 {
        self.base_value
    }

    /// Maximum science obtainable from this experiment in one situation.
    pub fn science_cap(&self) -> f32 {
        self.science_cap
    }

    /// Whether yield follows the diminishing-returns curve.
    pub fn applies_science_scale(&self) -> bool {
        self.applies_science_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_valid_definition() {
        let exp = Experiment::new(ExperimentId::new("crewReport"), "Crew Report", 5.0, 10.0, true)
            .unwrap();
        assert_eq!(exp.id().as_str(), "crewReport");
        assert_eq!(exp.science_cap(), 10.0);
        assert!(exp.applies_science_scale());
    }

    #[test]
    fn rejects_zero_cap() {
        let err =
            Experiment::new(ExperimentId::new("bad"), "Bad", 5.0, 0.0, true).unwrap_err();
        assert!(matches!(err, ExperimentError::NonPositiveCap { .. }));
    }

    #[test]
    fn rejects_negative_cap() {
        let err =
            Experiment::new(ExperimentId::new("bad"), "Bad", 5.0, -1.0, true).unwrap_err();
        assert!(matches!(err, ExperimentError::NonPositiveCap { .. }));
    }

    #[test]
    fn rejects_negative_base_value() {
        let err =
            Experiment::new(ExperimentId::new("bad"), "Bad", -5.0, 10.0, true).unwrap_err();
        assert!(matches!(err, ExperimentError::NegativeBaseValue { .. }));
    }

    #[test]
    fn rejects_nan_fields() {
        let err =
            Experiment::new(ExperimentId::new("bad"), "Bad", f32::NAN, 10.0, true).unwrap_err();
        assert!(matches!(err, ExperimentError::NonFiniteValue { .. }));
        let err = Experiment::new(
            ExperimentId::new("bad"),
            "Bad",
            5.0,
            f32::INFINITY,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ExperimentError::NonFiniteValue { .. }));
    }
}
