// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ConfigError, MAX_SWEEP_LEN, Sha256SweepConfig, TrigSweepConfig};

#[test]
fn test_sha256_defaults() {
    let config = Sha256SweepConfig::default();

    assert_eq!(config.max_len, 4096);
    assert_eq!(config.extra_len, Some(16_777_216));
    assert_eq!(config.fill, 0x61);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_sha256_buffer_len() {
    let config = Sha256SweepConfig::default();
    assert_eq!(config.buffer_len(), 1 << 24);

    let config = Sha256SweepConfig {
        max_len: 100,
        extra_len: None,
        fill: 0,
    };
    assert_eq!(config.buffer_len(), 99);

    let config = Sha256SweepConfig {
        max_len: 0,
        extra_len: None,
        fill: 0,
    };
    assert_eq!(config.buffer_len(), 0);
}

#[test]
fn test_sha256_length_limit() {
    let config = Sha256SweepConfig {
        extra_len: Some(MAX_SWEEP_LEN + 1),
        ..Sha256SweepConfig::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigError::LengthTooLarge {
            len: MAX_SWEEP_LEN + 1,
            max: MAX_SWEEP_LEN,
        })
    );

    let config = Sha256SweepConfig {
        extra_len: Some(MAX_SWEEP_LEN),
        ..Sha256SweepConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_trig_defaults() {
    let config = TrigSweepConfig::default();

    assert_eq!(config.start, -10.0);
    assert_eq!(config.end, 10.0);
    assert_eq!(config.step, 1e-4);
    assert_eq!(config.sin_tolerance, 7e-16);
    assert_eq!(config.cos_tolerance, 1.4e-15);
    assert_eq!(config.identity_tolerance, 1e-15);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_trig_rejects_bad_step() {
    for step in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
        let config = TrigSweepConfig {
            step,
            ..TrigSweepConfig::default()
        };

        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidStep { .. })),
            "step {step}"
        );
    }
}

#[test]
fn test_trig_rejects_step_below_resolution() {
    // Doubles near 1e17 are 16 apart, so x += 1 never moves
    let config = TrigSweepConfig {
        start: 1e17,
        end: 1e17 + 64.0,
        step: 1.0,
        ..TrigSweepConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::StepBelowResolution {
            step: 1.0,
            spacing: 16.0,
            at: 1e17 + 64.0,
        })
    );

    let config = TrigSweepConfig {
        step: 1e-300,
        ..TrigSweepConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::StepBelowResolution { at: -10.0, .. })
    ));

    // The farther bound decides, whichever side of zero it is on
    let config = TrigSweepConfig {
        start: -1e17,
        end: 0.0,
        step: 8.0,
        ..TrigSweepConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::StepBelowResolution { at: -1e17, .. })
    ));
}

#[test]
fn test_trig_accepts_step_equal_to_spacing() {
    let config = TrigSweepConfig {
        start: 1e17,
        end: 1e17 + 64.0,
        step: 16.0,
        ..TrigSweepConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));

    let config = TrigSweepConfig {
        start: 0.0,
        end: 0.0,
        step: f64::from_bits(1),
        ..TrigSweepConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_trig_rejects_non_finite_bounds() {
    let config = TrigSweepConfig {
        end: f64::INFINITY,
        ..TrigSweepConfig::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigError::NonFiniteBound {
            name: "end",
            value: f64::INFINITY,
        })
    );

    let config = TrigSweepConfig {
        start: f64::NAN,
        ..TrigSweepConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFiniteBound { name: "start", .. })
    ));
}

#[test]
fn test_trig_rejects_inverted_range() {
    let config = TrigSweepConfig {
        start: 1.0,
        end: -1.0,
        ..TrigSweepConfig::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigError::InvertedRange {
            start: 1.0,
            end: -1.0,
        })
    );
}

#[test]
fn test_trig_single_point_range_is_valid() {
    let config = TrigSweepConfig {
        start: 3.0,
        end: 3.0,
        ..TrigSweepConfig::default()
    };

    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_trig_rejects_bad_tolerances() {
    let config = TrigSweepConfig {
        cos_tolerance: 0.0,
        ..TrigSweepConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidTolerance {
            name: "cos_tolerance",
            value: 0.0,
        })
    );

    let config = TrigSweepConfig {
        identity_tolerance: -1.0,
        ..TrigSweepConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTolerance {
            name: "identity_tolerance",
            ..
        })
    ));

    let config = TrigSweepConfig {
        sin_tolerance: f64::NAN,
        ..TrigSweepConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTolerance {
            name: "sin_tolerance",
            ..
        })
    ));
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::InvalidStep { step: -1.0 }.to_string(),
        "step must be positive and finite, got -1"
    );
    assert_eq!(
        ConfigError::FillNotByte('é').to_string(),
        "fill character 'é' is not a single byte"
    );
}
