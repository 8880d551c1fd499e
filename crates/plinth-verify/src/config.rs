// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use plinth_trig::{COS_TOLERANCE, SIN_TOLERANCE};

use crate::error::ConfigError;

/// Largest message length a SHA-256 sweep will allocate (1 GiB)
pub const MAX_SWEEP_LEN: usize = 1 << 30;

/// Message lengths and fill byte for the SHA-256 sweep.
///
/// Every length in `0..max_len` is checked, then `extra_len` if set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha256SweepConfig {
    /// Exclusive upper bound of the contiguous length range
    pub max_len: usize,
    /// One additional, usually much larger, length
    pub extra_len: Option<usize>,
    /// Byte every message is filled with
    pub fill: u8,
}

impl Default for Sha256SweepConfig {
    fn default() -> Self {
        Self {
            max_len: 1 << 12,
            extra_len: Some(1 << 24),
            fill: b'a',
        }
    }
}

impl Sha256SweepConfig {
    /// Checks that every requested length fits under [`MAX_SWEEP_LEN`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let longest = self.max_len.max(self.extra_len.unwrap_or(0));
        if longest > MAX_SWEEP_LEN {
            return Err(ConfigError::LengthTooLarge {
                len: longest,
                max: MAX_SWEEP_LEN,
            });
        }

        Ok(())
    }

    /// Longest message the sweep will hash
    pub(crate) fn buffer_len(&self) -> usize {
        self.max_len
            .saturating_sub(1)
            .max(self.extra_len.unwrap_or(0))
    }
}

/// Interval, step and tolerances for the trig sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigSweepConfig {
    /// First sample
    pub start: f64,
    /// Sweep continues while `x <= end`
    pub end: f64,
    /// Added to `x` after every sample
    pub step: f64,
    /// Strict bound on `|sin(x) - platform sin(x)|`
    pub sin_tolerance: f64,
    /// Strict bound on `|cos(x) - platform cos(x)|`
    pub cos_tolerance: f64,
    /// Strict bound on `|sin²(x) + cos²(x) - 1|`
    pub identity_tolerance: f64,
}

impl Default for TrigSweepConfig {
    fn default() -> Self {
        Self {
            start: -10.0,
            end: 10.0,
            step: 1e-4,
            sin_tolerance: SIN_TOLERANCE,
            cos_tolerance: COS_TOLERANCE,
            identity_tolerance: 1e-15,
        }
    }
}

impl TrigSweepConfig {
    /// Rejects non-finite bounds, a non-positive step, a step too small to
    /// advance `x`, an inverted range and non-positive tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("start", self.start), ("end", self.end)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBound { name, value });
            }
        }

        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::InvalidStep { step: self.step });
        }

        // Spacing is coarsest at the bound farthest from zero. A step of at
        // least that spacing moves every x in the range up by one double.
        let at = if self.start.abs() >= self.end.abs() {
            self.start
        } else {
            self.end
        };
        let spacing = ulp(at);
        if self.step < spacing {
            return Err(ConfigError::StepBelowResolution {
                step: self.step,
                spacing,
                at,
            });
        }

        if self.start > self.end {
            return Err(ConfigError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }

        for (name, value) in [
            ("sin_tolerance", self.sin_tolerance),
            ("cos_tolerance", self.cos_tolerance),
            ("identity_tolerance", self.identity_tolerance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }

        Ok(())
    }
}

/// Distance from finite `x` to the next double away from zero
fn ulp(x: f64) -> f64 {
    let magnitude = x.abs();
    if magnitude == f64::MAX {
        return magnitude - f64::from_bits(magnitude.to_bits() - 1);
    }
    f64::from_bits(magnitude.to_bits() + 1) - magnitude
}
