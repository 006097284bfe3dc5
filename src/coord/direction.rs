// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle the azimuth and dip of a line.
*/

use serde::{Deserialize, Serialize};

use super::{cosines::DirectionCosines, spherical_to_cartesian};

/// The orientation of a line. All units are in degrees.
///
/// The azimuth is measured clockwise from north and should be within [0, 360).
/// The dip (a.k.a. plunge) is measured downwards from the horizontal and should
/// be within [0, 90]. Values outside these ranges are not rejected, but
/// projections of them may fall outside the unit disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    /// Azimuth (a.k.a. trend) [degrees]
    pub azimuth: f64,
    /// Dip (a.k.a. plunge) [degrees]
    pub dip: f64,
}

impl Direction {
    pub fn new(azimuth: f64, dip: f64) -> Direction {
        Direction { azimuth, dip }
    }

    /// Get the north, east and down direction cosines of this line.
    pub fn to_cosines(self) -> DirectionCosines {
        let (north, east, down) = spherical_to_cartesian(self.azimuth, self.dip);
        DirectionCosines { north, east, down }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:05.1}/{:04.1}", self.azimuth, self.dip)
    }
}
