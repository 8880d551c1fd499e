// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing::{debug, error, info};

use crate::config::TrigSweepConfig;
use crate::error::VerifyError;

/// Samples between two progress lines
const MILESTONE: usize = 50_000;

/// Outcome of a passing trig sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigReport {
    /// Number of points sampled
    pub samples: usize,
    /// Largest `|sin - platform sin|` seen
    pub max_sin_error: f64,
    /// Largest `|cos - platform cos|` seen
    pub max_cos_error: f64,
}

/// Sweeps `plinth_trig::sin_cos` against `f64::sin` / `f64::cos`.
pub fn run_trig_sweep(config: &TrigSweepConfig) -> Result<TrigReport, VerifyError> {
    run_trig_sweep_with(config, plinth_trig::sin_cos)
}

/// Same sweep as [`run_trig_sweep`] with the `(sin, cos)` pair under test
/// supplied by the caller.
///
/// `x` advances by repeated addition of `step`, so the sample points carry
/// the accumulated rounding of that sum rather than `start + i * step`.
pub fn run_trig_sweep_with<F>(
    config: &TrigSweepConfig,
    sin_cos: F,
) -> Result<TrigReport, VerifyError>
where
    F: Fn(f64) -> (f64, f64),
{
    config.validate()?;

    info!(
        start = config.start,
        end = config.end,
        step = config.step,
        "starting trig sweep"
    );

    let mut report = TrigReport {
        samples: 0,
        max_sin_error: 0.0,
        max_cos_error: 0.0,
    };

    let mut x = config.start;
    while x <= config.end {
        let (s, c) = sin_cos(x);
        check_sample(config, x, s, c)?;

        report.max_sin_error = report.max_sin_error.max((s - x.sin()).abs());
        report.max_cos_error = report.max_cos_error.max((c - x.cos()).abs());
        report.samples += 1;

        if report.samples % MILESTONE == 0 {
            debug!(samples = report.samples, x, "trig samples verified");
        }

        x += config.step;
    }

    info!(
        samples = report.samples,
        max_sin_error = report.max_sin_error,
        max_cos_error = report.max_cos_error,
        "trig sweep passed"
    );

    Ok(report)
}

fn check_sample(config: &TrigSweepConfig, x: f64, s: f64, c: f64) -> Result<(), VerifyError> {
    let expected = x.sin();
    let diff = (s - expected).abs();
    // Negated so that a NaN result fails
    if !(diff < config.sin_tolerance) {
        error!(x, actual = s, expected, diff, "sin out of tolerance");
        return Err(VerifyError::SinOutOfTolerance {
            x,
            expected,
            actual: s,
            diff,
            tolerance: config.sin_tolerance,
        });
    }

    let expected = x.cos();
    let diff = (c - expected).abs();
    if !(diff < config.cos_tolerance) {
        error!(x, actual = c, expected, diff, "cos out of tolerance");
        return Err(VerifyError::CosOutOfTolerance {
            x,
            expected,
            actual: c,
            diff,
            tolerance: config.cos_tolerance,
        });
    }

    let residual = (s * s + c * c - 1.0).abs();
    if !(residual < config.identity_tolerance) {
        error!(x, residual, "sin²+cos² identity violated");
        return Err(VerifyError::IdentityViolated {
            x,
            residual,
            tolerance: config.identity_tolerance,
        });
    }

    Ok(())
}
