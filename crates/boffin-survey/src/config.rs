//! Survey configuration.

use boffin_core::ConfigError;

/// Configuration applied to every record update.
///
/// `science_gain_multiplier` is the host's global (career) multiplier,
/// applied uniformly to banked and capped science at read time. The raw
/// ledger values are never multiplied in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurveyConfig {
    /// Global science gain multiplier. Default: 1.0.
    pub science_gain_multiplier: f32,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            science_gain_multiplier: 1.0,
        }
    }
}

impl SurveyConfig {
    /// Check structural invariants before the config is used.
    ///
    /// The multiplier must be finite and positive; anything else would
    /// poison every derived field with NaN or make all totals zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.science_gain_multiplier.is_finite() {
            return Err(ConfigError::NonFiniteMultiplier);
        }
        if self.science_gain_multiplier <= 0.0 {
            return Err(ConfigError::NonPositiveMultiplier {
                value: self.science_gain_multiplier,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SurveyConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_multiplier() {
        let cfg = SurveyConfig {
            science_gain_multiplier: 0.0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveMultiplier { .. })
        ));
    }

    #[test]
    fn rejects_nan_multiplier() {
        let cfg = SurveyConfig {
            science_gain_multiplier: f32::NAN,
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NonFiniteMultiplier));
    }
}
