// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lower-hemisphere projections of lines onto a disk of unit radius.
//!
//! Two projections are supported: equal area (a.k.a. Schmidt net), which
//! preserves area, and equal angle (a.k.a. Wulff net), which preserves angles.
//! North is +y and east is +x.

mod error;
#[cfg(test)]
mod tests;

pub use error::ProjectionError;

use std::str::FromStr;

use itertools::Itertools;
use ndarray::prelude::*;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::{FRAC_PI_4, SQRT_2};

lazy_static::lazy_static! {
    pub static ref PROJECTION_KINDS_COMMA_SEPARATED: String = ProjectionKind::iter().join(", ");
}

/// The kind of stereographic projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ProjectionKind {
    /// Lambert azimuthal equal-area projection (Schmidt net).
    #[default]
    #[strum(to_string = "area", serialize = "equal-area")]
    EqualArea,

    /// Stereographic equal-angle projection (Wulff net).
    #[strum(to_string = "angle", serialize = "equal-angle")]
    EqualAngle,
}

impl ProjectionKind {
    /// Parse a projection kind from a user-supplied string. Unlike
    /// [`FromStr`], the error names the valid kinds.
    pub fn parse(s: &str) -> Result<ProjectionKind, ProjectionError> {
        ProjectionKind::from_str(s.trim()).map_err(|_| ProjectionError::UnknownKind(s.to_string()))
    }

    /// A caption describing this projection, e.g. for plots.
    pub fn caption(self) -> &'static str {
        match self {
            ProjectionKind::EqualArea => "Equal area projection\nLower hemisphere",
            ProjectionKind::EqualAngle => "Equal angle projection\nLower hemisphere",
        }
    }
}

/// Get the (x, y) coordinates of a line in an equal-area projection of unit
/// radius. Angles are in degrees. Lines with dips in [0, 90] land on or inside
/// the unit circle.
pub fn to_equal_area(azimuth: f64, dip: f64) -> (f64, f64) {
    let r = SQRT_2 * (FRAC_PI_4 - dip.to_radians() / 2.0).sin();
    polar_to_xy(r, azimuth)
}

/// Get the (x, y) coordinates of a line in an equal-angle projection of unit
/// radius. Angles are in degrees. The coordinates diverge as the dip approaches
/// -90°.
pub fn to_equal_angle(azimuth: f64, dip: f64) -> (f64, f64) {
    let r = (FRAC_PI_4 - dip.to_radians() / 2.0).tan();
    polar_to_xy(r, azimuth)
}

#[inline]
fn polar_to_xy(r: f64, azimuth: f64) -> (f64, f64) {
    let (s_az, c_az) = azimuth.to_radians().sin_cos();
    (r * s_az, r * c_az)
}

/// Project a single line with the specified kind of projection.
pub fn project(kind: ProjectionKind, azimuth: f64, dip: f64) -> (f64, f64) {
    match kind {
        ProjectionKind::EqualArea => to_equal_area(azimuth, dip),
        ProjectionKind::EqualAngle => to_equal_angle(azimuth, dip),
    }
}

/// Project many lines element-wise. The returned x and y arrays have the same
/// length as the inputs.
pub fn project_array(
    kind: ProjectionKind,
    azimuths: ArrayView1<f64>,
    dips: ArrayView1<f64>,
) -> Result<(Array1<f64>, Array1<f64>), ProjectionError> {
    if azimuths.len() != dips.len() {
        return Err(ProjectionError::LengthMismatch {
            azimuths: azimuths.len(),
            dips: dips.len(),
        });
    }

    let mut xs = Array1::zeros(azimuths.len());
    let mut ys = Array1::zeros(azimuths.len());
    ndarray::Zip::from(&mut xs)
        .and(&mut ys)
        .and(&azimuths)
        .and(&dips)
        .for_each(|x, y, &azimuth, &dip| {
            (*x, *y) = project(kind, azimuth, dip);
        });
    Ok((xs, ys))
}
