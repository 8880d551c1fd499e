// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Self-contained SHA-256 and sine/cosine kernels for Rust.</em></p>
//!
//! ---
//!
//! Plinth bundles two leaf primitives with no runtime setup and no shared
//! state:
//!
//! - **[`sha256`]**: FIPS 180-4 SHA-256, one-shot or incremental, with
//!   constant-time digest comparison and scrubbed working state.
//! - **[`trig`]**: `sin`, `cos` and `sin_cos` over every `f64`, with exact
//!   range reduction for arguments of any magnitude.
//!
//! Both are `no_std` and free of `unsafe` outside volatile scrubbing.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! plinth = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use plinth::sha256::{Sha256, sha256};
//! use plinth::trig::{cos, sin, sin_cos};
//!
//! let digest = sha256(b"");
//! assert_eq!(
//!     digest.to_hex(),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//!
//! let mut session = Sha256::new();
//! session.update(b"hello ");
//! session.update(b"world");
//! assert_eq!(session.finalize(), sha256(b"hello world"));
//!
//! let (s, c) = sin_cos(1e22);
//! assert_eq!((s, c), (sin(1e22), cos(1e22)));
//! assert!((s * s + c * c - 1.0).abs() < 1e-15);
//! ```
//!
//! # Accuracy
//!
//! Sine stays within [`trig::SIN_TOLERANCE`] and cosine within
//! [`trig::COS_TOLERANCE`] of the platform math library. NaN and ±∞ map to
//! NaN.

#![cfg_attr(not(test), no_std)]

pub use plinth_sha256 as sha256;
pub use plinth_trig as trig;
