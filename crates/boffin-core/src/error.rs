//! Error types for the Boffin science-progress engine.
//!
//! Organized by subsystem: experiment admission and engine configuration.
//! The update path itself has no error surface; a missing ledger subject
//! is self-healing and everything else is derived arithmetic.

use std::error::Error;
use std::fmt;

use crate::id::ExperimentId;

/// Errors rejecting an experiment definition at admission time.
///
/// The yield formula divides by the science cap, so definitions that would
/// propagate NaN or infinity through every downstream record are rejected
/// up front instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ExperimentError {
    /// The science cap is zero or negative.
    NonPositiveCap {
        /// The offending experiment.
        id: ExperimentId,
        /// The rejected cap value.
        cap: f32,
    },
    /// The base value is negative.
    NegativeBaseValue {
        /// The offending experiment.
        id: ExperimentId,
        /// The rejected base value.
        base_value: f32,
    },
    /// The base value or science cap is NaN or infinite.
    NonFiniteValue {
        /// The offending experiment.
        id: ExperimentId,
    },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCap { id, cap } => {
                write!(f, "experiment '{id}' has non-positive science cap {cap}")
            }
            Self::NegativeBaseValue { id, base_value } => {
                write!(f, "experiment '{id}' has negative base value {base_value}")
            }
            Self::NonFiniteValue { id } => {
                write!(f, "experiment '{id}' has a non-finite base value or science cap")
            }
        }
    }
}

impl Error for ExperimentError {}

/// Errors from survey configuration validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The science gain multiplier is zero or negative.
    NonPositiveMultiplier {
        /// The rejected multiplier.
        value: f32,
    },
    /// The science gain multiplier is NaN or infinite.
    NonFiniteMultiplier,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMultiplier { value } => {
                write!(f, "science gain multiplier must be positive, got {value}")
            }
            Self::NonFiniteMultiplier => {
                write!(f, "science gain multiplier must be finite")
            }
        }
    }
}

impl Error for ConfigError {}
