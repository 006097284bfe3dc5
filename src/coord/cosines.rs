// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle the (north, east, down) direction cosines of a line.
*/

use serde::{Deserialize, Serialize};

use super::{cartesian_to_spherical, direction::Direction};
use crate::math::norm3;

/// The direction cosines of a line in a north-east-down cartesian frame. A
/// line's cosines form a unit vector, but sums of cosines (e.g. a resultant
/// vector) are also stored in this type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionCosines {
    /// North direction cosine
    pub north: f64,
    /// East direction cosine
    pub east: f64,
    /// Down direction cosine
    pub down: f64,
}

impl DirectionCosines {
    pub fn new(north: f64, east: f64, down: f64) -> DirectionCosines {
        DirectionCosines { north, east, down }
    }

    /// The length of this vector.
    pub fn norm(self) -> f64 {
        norm3(self.north, self.east, self.down)
    }

    /// Get the azimuth and dip of this line. The vector does not need to be
    /// normalised for the azimuth to be correct, but the dip is only
    /// meaningful for unit vectors.
    pub fn to_direction(self) -> Direction {
        let (azimuth, dip) = cartesian_to_spherical(self.north, self.east, self.down);
        Direction { azimuth, dip }
    }

    pub fn dot(self, other: DirectionCosines) -> f64 {
        self.north * other.north + self.east * other.east + self.down * other.down
    }

    pub fn cross(self, other: DirectionCosines) -> DirectionCosines {
        DirectionCosines {
            north: self.east * other.down - self.down * other.east,
            east: self.down * other.north - self.north * other.down,
            down: self.north * other.east - self.east * other.north,
        }
    }

    /// Flip the vector so that it points into the lower hemisphere (down >=
    /// 0). Lines have no sense, so the flipped vector is the same line.
    pub fn to_lower_hemisphere(self) -> DirectionCosines {
        if self.down < 0.0 {
            -self
        } else {
            self
        }
    }
}

impl std::ops::Add for DirectionCosines {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        DirectionCosines {
            north: self.north + rhs.north,
            east: self.east + rhs.east,
            down: self.down + rhs.down,
        }
    }
}

impl std::ops::Mul<f64> for DirectionCosines {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        DirectionCosines {
            north: self.north * rhs,
            east: self.east * rhs,
            down: self.down * rhs,
        }
    }
}

impl std::ops::Div<f64> for DirectionCosines {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        DirectionCosines {
            north: self.north / rhs,
            east: self.east / rhs,
            down: self.down / rhs,
        }
    }
}

impl std::ops::Neg for DirectionCosines {
    type Output = Self;

    fn neg(self) -> Self {
        DirectionCosines {
            north: -self.north,
            east: -self.east,
            down: -self.down,
        }
    }
}

impl std::iter::Sum for DirectionCosines {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DirectionCosines::default(), |acc, c| acc + c)
    }
}
