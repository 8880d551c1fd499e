// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verification harness for the plinth kernels
//!
//! Drives [`plinth_sha256`] against the `sha2` crate over a range of message
//! lengths, and [`plinth_trig`] against the platform math library over a
//! swept interval. Each sweep stops at the first disagreement and reports
//! where it happened.
//!
//! # Example
//!
//! ```
//! use plinth_verify::{Sha256SweepConfig, TrigSweepConfig, run_sha256_sweep, run_trig_sweep};
//!
//! let sha = Sha256SweepConfig {
//!     max_len: 130,
//!     extra_len: None,
//!     ..Sha256SweepConfig::default()
//! };
//! assert_eq!(run_sha256_sweep(&sha).unwrap().lengths_checked, 130);
//!
//! let trig = TrigSweepConfig {
//!     start: -1.0,
//!     end: 1.0,
//!     step: 0.25,
//!     ..TrigSweepConfig::default()
//! };
//! assert_eq!(run_trig_sweep(&trig).unwrap().samples, 9);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cli;
mod config;
mod error;
mod sha256_sweep;
mod trig_sweep;

pub use cli::{AllArgs, Cli, Command, Sha256Args, TrigArgs};
pub use config::{MAX_SWEEP_LEN, Sha256SweepConfig, TrigSweepConfig};
pub use error::{ConfigError, VerifyError};
pub use sha256_sweep::{Sha256Report, run_sha256_sweep, run_sha256_sweep_with};
pub use trig_sweep::{TrigReport, run_trig_sweep, run_trig_sweep_with};
