// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::constants::TAU;

/// Constrain an azimuth to [0, 2π) radians. Any finite angle is accepted, e.g.
/// -π/2 becomes 3π/2 and 5π/2 becomes π/2. Non-finite input gives NaN.
///
/// # Examples
///
/// `assert_abs_diff_eq!(normalize_azimuth(-FRAC_PI_2), 3.0 * FRAC_PI_2);`
#[inline]
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let wrapped = azimuth.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// The Euclidean norm of a three-vector.
#[inline]
pub(crate) fn norm3(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}
