// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Directional statistics of lines.
//!
//! The mean vector and its Fisher statistics (concentration factor and cone of
//! confidence) follow Fisher, N. I., Lewis, T. and Embleton, B. J. J. (1987),
//! Statistical Analysis of Spherical Data.

mod error;

pub use error::MeanVectorError;

use log::{debug, trace, warn};
use serde::Serialize;
use vec1::Vec1;

use crate::{
    constants::{
        DEFAULT_CONFIDENCE, INSIGNIFICANT_RAVE, MIN_CONE_RAVE, RESULTANT_TOLERANCE,
        SMALL_SAMPLE_SIZE,
    },
    coord::{Direction, DirectionCosines},
};

/// A non-empty sample of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSet(Vec1<Direction>);

#[allow(clippy::len_without_is_empty)]
impl DirectionSet {
    pub fn new(directions: Vec<Direction>) -> Result<DirectionSet, MeanVectorError> {
        Vec1::try_from_vec(directions)
            .map(DirectionSet)
            .map_err(|_| MeanVectorError::EmptySample)
    }

    /// Pair up parallel sequences of azimuths and dips [degrees].
    pub fn from_slices(azimuths: &[f64], dips: &[f64]) -> Result<DirectionSet, MeanVectorError> {
        if azimuths.len() != dips.len() {
            return Err(MeanVectorError::LengthMismatch {
                azimuths: azimuths.len(),
                dips: dips.len(),
            });
        }

        DirectionSet::new(
            azimuths
                .iter()
                .zip(dips)
                .map(|(&azimuth, &dip)| Direction { azimuth, dip })
                .collect(),
        )
    }

    /// The number of lines in the sample. This is always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Direction] {
        self.0.as_slice()
    }
}

/// Whether a mean vector means anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Significance {
    Significant,

    /// The mean resultant length is so small that the sample has no preferred
    /// orientation. The mean direction is reported anyway, but it is
    /// unreliable.
    Insignificant,
}

/// The mean of a sample of lines and its Fisher statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanVector {
    /// The mean direction, always in the lower hemisphere.
    pub direction: Direction,

    /// The direction cosines of the mean direction (down >= 0).
    pub cosines: DirectionCosines,

    /// The number of lines in the sample (n).
    pub num_directions: usize,

    /// The length of the resultant vector (R), i.e. the sum of all of the
    /// sample's unit vectors.
    pub resultant_length: f64,

    /// The mean resultant length (R / n).
    pub rave: f64,

    /// The Fisher concentration factor (κ). Undefined if the sample is
    /// perfectly aligned (R == n).
    pub concentration: Option<f64>,

    /// The half-angle of the cone of confidence about the mean direction
    /// [degrees]. Only defined when 0.65 <= R / n < 1.
    pub cone_angle: Option<f64>,

    /// The level of confidence used for the cone [percent].
    pub confidence: f64,

    pub significance: Significance,
}

impl MeanVector {
    pub fn is_significant(&self) -> bool {
        matches!(self.significance, Significance::Significant)
    }
}

/// Estimate the mean vector of a sample of lines, using the default level of
/// confidence (95%) for the cone of confidence.
pub fn mean_vector_default(directions: &DirectionSet) -> Result<MeanVector, MeanVectorError> {
    mean_vector(directions, DEFAULT_CONFIDENCE)
}

/// Estimate the mean vector of a sample of lines, along with the Fisher
/// concentration factor and the cone of confidence at `confidence` percent.
///
/// `confidence` must be within (0, 100). An insignificant mean (R / n < 0.1)
/// is not an error; it is flagged on the result.
pub fn mean_vector(
    directions: &DirectionSet,
    confidence: f64,
) -> Result<MeanVector, MeanVectorError> {
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 100.0 {
        return Err(MeanVectorError::InvalidConfidence(confidence));
    }

    let num_directions = directions.len();
    let n = num_directions as f64;

    let resultant: DirectionCosines = directions.iter().map(|d| d.to_cosines()).sum();
    let r = resultant.norm();
    let rave = r / n;
    trace!("Resultant vector: {resultant:?}, R = {r}, R / n = {rave}");

    let significance = if rave < INSIGNIFICANT_RAVE {
        warn!("Mean vector is insignificant (R / n = {rave:.3})");
        Significance::Insignificant
    } else {
        Significance::Significant
    };

    // A resultant of exactly zero can't be normalised; its direction is as
    // meaningless as its significance suggests.
    let cosines = if r > 0.0 { resultant / r } else { resultant };
    let cosines = cosines.to_lower_hemisphere();
    let direction = cosines.to_direction();

    let aligned = n - r <= n * RESULTANT_TOLERANCE;

    let concentration = if aligned {
        debug!("Sample is perfectly aligned; concentration factor is undefined");
        None
    } else if num_directions < SMALL_SAMPLE_SIZE {
        let afact = 1.0 - 1.0 / n;
        Some((n / (n - r)) * afact * afact)
    } else {
        Some((n - 1.0) / (n - r))
    };

    let cone_angle = if !aligned && (MIN_CONE_RAVE..1.0).contains(&rave) {
        // n >= 2 here, as a single line is always aligned.
        let bfact = 1.0 / (n - 1.0);
        let afact = 1.0 / (1.0 - confidence / 100.0);
        let cos_d = 1.0 - ((n - r) / r) * afact.powf(bfact - 1.0);
        Some(cos_d.clamp(-1.0, 1.0).acos().to_degrees())
    } else {
        debug!("Cone of confidence is undefined (R / n = {rave})");
        None
    };

    Ok(MeanVector {
        direction,
        cosines,
        num_directions,
        resultant_length: r,
        rave,
        concentration,
        cone_angle,
        confidence,
        significance,
    })
}
