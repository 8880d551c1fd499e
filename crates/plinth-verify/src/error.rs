// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use plinth_sha256::Digest;
use thiserror::Error;

/// Rejected sweep configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A sweep bound is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFiniteBound {
        /// Argument name
        name: &'static str,
        /// Supplied value
        value: f64,
    },

    /// Step is zero, negative or not finite
    #[error("step must be positive and finite, got {step}")]
    InvalidStep {
        /// Supplied step
        step: f64,
    },

    /// Step too small to move `x` somewhere in the range
    #[error("step {step:e} is below the float spacing {spacing:e} at {at:e}")]
    StepBelowResolution {
        /// Supplied step
        step: f64,
        /// Distance to the next double at `at`
        spacing: f64,
        /// Range bound with the coarsest spacing
        at: f64,
    },

    /// Sweep start lies above its end
    #[error("start {start} is greater than end {end}")]
    InvertedRange {
        /// Lower bound
        start: f64,
        /// Upper bound
        end: f64,
    },

    /// Tolerance is zero, negative or not finite
    #[error("{name} must be positive and finite, got {value}")]
    InvalidTolerance {
        /// Argument name
        name: &'static str,
        /// Supplied value
        value: f64,
    },

    /// Message length above [`crate::MAX_SWEEP_LEN`]
    #[error("message length {len} exceeds the limit of {max} bytes")]
    LengthTooLarge {
        /// Requested length
        len: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Fill character does not fit in a single byte
    #[error("fill character {0:?} is not a single byte")]
    FillNotByte(char),
}

/// First disagreement found by a sweep
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// `plinth-sha256` and the oracle produced different digests
    #[error("digest mismatch at length {len}: oracle {expected}, plinth {actual}")]
    DigestMismatch {
        /// Message length in bytes
        len: usize,
        /// Oracle digest
        expected: Digest,
        /// Digest under test
        actual: Digest,
    },

    /// Sine differs from the platform value by at least the tolerance
    #[error("sin({x:e}) = {actual:e}, platform {expected:e}, |diff| {diff:e} >= {tolerance:e}")]
    SinOutOfTolerance {
        /// Sample point
        x: f64,
        /// Platform sine
        expected: f64,
        /// Sine under test
        actual: f64,
        /// Absolute difference
        diff: f64,
        /// Bound that was violated
        tolerance: f64,
    },

    /// Cosine differs from the platform value by at least the tolerance
    #[error("cos({x:e}) = {actual:e}, platform {expected:e}, |diff| {diff:e} >= {tolerance:e}")]
    CosOutOfTolerance {
        /// Sample point
        x: f64,
        /// Platform cosine
        expected: f64,
        /// Cosine under test
        actual: f64,
        /// Absolute difference
        diff: f64,
        /// Bound that was violated
        tolerance: f64,
    },

    /// `sin² + cos²` strayed from 1
    #[error("sin²+cos² at {x:e} is off by {residual:e} >= {tolerance:e}")]
    IdentityViolated {
        /// Sample point
        x: f64,
        /// `|sin² + cos² - 1|`
        residual: f64,
        /// Bound that was violated
        tolerance: f64,
    },

    /// Sweep refused to start
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
