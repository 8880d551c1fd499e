// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sine and cosine for `f64`
//!
//! Arguments are reduced modulo π/2 into [-π/4, π/4] as a double-double,
//! then evaluated with minimax polynomials. Medium arguments use a
//! three-stage Cody-Waite split of π/2; large arguments multiply the
//! significand by a window of the binary expansion of 2/π, so accuracy
//! holds across the whole finite range.
//!
//! Absolute error against the true value stays below one ulp of the result;
//! the published contract is |error| < 7e-16 for sine and < 1.4e-15 for
//! cosine. NaN and ±∞ produce NaN.
//!
//! All tables are `const`; there is no initialization step.
//!
//! References:
//! - K. C. Ng, "Argument Reduction for Huge Arguments: Good to the Last Bit" (1992)
//! - W. J. Cody, W. Waite, "Software Manual for the Elementary Functions" (1980)
//!
//! # Example
//!
//! ```
//! use plinth_trig::{cos, sin, sin_cos};
//!
//! assert_eq!(sin(0.0), 0.0);
//! assert_eq!(cos(0.0), 1.0);
//!
//! let (s, c) = sin_cos(1.0);
//! assert_eq!(s, sin(1.0));
//! assert_eq!(c, cos(1.0));
//! assert!(sin(f64::NAN).is_nan());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod kernel;
mod reduce;
mod trig;

pub use consts::{COS_TOLERANCE, SIN_TOLERANCE};
pub use reduce::{Reduction, reduce};
pub use trig::{cos, sin, sin_cos};
