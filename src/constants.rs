// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `stereoplot` does all of its
trigonometry in double precision.
 */

pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2, TAU};

/// The default level of confidence used for Fisher confidence cones [percent].
pub const DEFAULT_CONFIDENCE: f64 = 95.0;

/// If the mean resultant length (R / n) of a sample is smaller than this value,
/// the mean vector is statistically insignificant.
pub const INSIGNIFICANT_RAVE: f64 = 0.1;

/// Confidence cones are only reported when the mean resultant length (R / n) is
/// at least this value (and less than 1).
pub const MIN_CONE_RAVE: f64 = 0.65;

/// Samples smaller than this get the small-sample bias correction when
/// estimating the Fisher concentration factor.
pub const SMALL_SAMPLE_SIZE: usize = 16;

/// The relative tolerance used when comparing a sample's resultant length R
/// with its size n. If n - R is smaller than `n * RESULTANT_TOLERANCE`, the
/// sample is perfectly aligned (R == n).
pub const RESULTANT_TOLERANCE: f64 = 1e-10;
