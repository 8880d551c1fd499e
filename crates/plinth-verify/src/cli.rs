// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line surface of `plinth-verify`

use clap::{ArgAction, Args, Parser, Subcommand};
use plinth_trig::{COS_TOLERANCE, SIN_TOLERANCE};

use crate::config::{Sha256SweepConfig, TrigSweepConfig};
use crate::error::{ConfigError, VerifyError};
use crate::sha256_sweep::run_sha256_sweep;
use crate::trig_sweep::run_trig_sweep;

/// Checks the plinth SHA-256 and trig kernels against trusted oracles.
///
/// Prints `success` when every check passes and exits non-zero on the
/// first disagreement.
#[derive(Parser, Debug)]
#[command(name = "plinth-verify", version, about)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Sweep to run; both when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Subcommand to execute, `all` with default arguments when none was given
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::All(AllArgs::default()))
    }

    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Harness subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compare SHA-256 digests with the sha2 crate over many message lengths.
    Sha256(Sha256Args),

    /// Compare sin and cos with the platform math library over an interval.
    Trig(TrigArgs),

    /// Run both sweeps.
    All(AllArgs),
}

impl Command {
    /// Runs the selected sweeps in order, stopping at the first failure.
    pub fn run(&self) -> Result<(), VerifyError> {
        match self {
            Self::Sha256(args) => {
                run_sha256_sweep(&args.to_config()?)?;
            }
            Self::Trig(args) => {
                run_trig_sweep(&args.to_config()?)?;
            }
            Self::All(args) => {
                // Validate both before spending time on either
                let sha256 = args.sha256.to_config()?;
                let trig = args.trig.to_config()?;
                run_sha256_sweep(&sha256)?;
                run_trig_sweep(&trig)?;
            }
        }

        Ok(())
    }
}

/// Arguments of the `sha256` sweep
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Sha256Args {
    /// Check every message length below this bound
    #[arg(long, default_value_t = 1 << 12)]
    pub max_len: usize,

    /// One more length checked after the contiguous range
    #[arg(long, default_value_t = 1 << 24)]
    pub extra_len: usize,

    /// Skip the extra length
    #[arg(long)]
    pub no_extra: bool,

    /// Character every message is filled with
    #[arg(long, default_value_t = 'a')]
    pub fill: char,
}

impl Default for Sha256Args {
    fn default() -> Self {
        let config = Sha256SweepConfig::default();
        Self {
            max_len: config.max_len,
            extra_len: config.extra_len.unwrap_or(0),
            no_extra: config.extra_len.is_none(),
            fill: char::from(config.fill),
        }
    }
}

impl Sha256Args {
    /// Validated sweep configuration
    pub fn to_config(&self) -> Result<Sha256SweepConfig, ConfigError> {
        let fill = u8::try_from(self.fill).map_err(|_| ConfigError::FillNotByte(self.fill))?;
        let config = Sha256SweepConfig {
            max_len: self.max_len,
            extra_len: (!self.no_extra).then_some(self.extra_len),
            fill,
        };
        config.validate()?;

        Ok(config)
    }
}

/// Arguments of the `trig` sweep
#[derive(Args, Debug, Clone, PartialEq)]
pub struct TrigArgs {
    /// First sample
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    pub start: f64,

    /// Last sample bound (inclusive)
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pub end: f64,

    /// Distance between samples
    #[arg(long, default_value_t = 1e-4)]
    pub step: f64,

    /// Allowed absolute sine error (exclusive)
    #[arg(long, default_value_t = SIN_TOLERANCE)]
    pub sin_tolerance: f64,

    /// Allowed absolute cosine error (exclusive)
    #[arg(long, default_value_t = COS_TOLERANCE)]
    pub cos_tolerance: f64,

    /// Allowed deviation of sin²+cos² from 1 (exclusive)
    #[arg(long, default_value_t = 1e-15)]
    pub identity_tolerance: f64,
}

impl Default for TrigArgs {
    fn default() -> Self {
        let config = TrigSweepConfig::default();
        Self {
            start: config.start,
            end: config.end,
            step: config.step,
            sin_tolerance: config.sin_tolerance,
            cos_tolerance: config.cos_tolerance,
            identity_tolerance: config.identity_tolerance,
        }
    }
}

impl TrigArgs {
    /// Validated sweep configuration
    pub fn to_config(&self) -> Result<TrigSweepConfig, ConfigError> {
        let config = TrigSweepConfig {
            start: self.start,
            end: self.end,
            step: self.step,
            sin_tolerance: self.sin_tolerance,
            cos_tolerance: self.cos_tolerance,
            identity_tolerance: self.identity_tolerance,
        };
        config.validate()?;

        Ok(config)
    }
}

/// Arguments of `all`: the union of both sweeps
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AllArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub sha256: Sha256Args,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub trig: TrigArgs,
}
