// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Coordinate types and conversions between spherical (azimuth, dip) and cartesian
(north, east, down) representations of lines.
 */

mod cosines;
mod direction;

pub use cosines::DirectionCosines;
pub use direction::Direction;

use crate::{
    constants::{FRAC_PI_2, PI},
    math::normalize_azimuth,
};

/// Convert from spherical (azimuth, dip) coordinates to the north, east and
/// down direction cosines of a line. Both angles are in degrees. There is no
/// range checking; the result is a unit vector for any finite input.
pub fn spherical_to_cartesian(azimuth: f64, dip: f64) -> (f64, f64, f64) {
    let (s_az, c_az) = azimuth.to_radians().sin_cos();
    let (s_dip, c_dip) = dip.to_radians().sin_cos();

    let north = c_dip * c_az;
    let east = c_dip * s_az;
    let down = s_dip;
    (north, east, down)
}

/// Convert north, east and down direction cosines to the azimuth and dip of a
/// line [degrees]. The azimuth is in [0, 360).
///
/// A north cosine of exactly zero is special-cased: the azimuth is 270° if the
/// east cosine is negative and 90° otherwise. This includes a vertical line,
/// whose azimuth is meaningless.
pub fn cartesian_to_spherical(north: f64, east: f64, down: f64) -> (f64, f64) {
    // Rounding can push a renormalised down cosine just outside [-1, 1].
    let dip = down.clamp(-1.0, 1.0).asin();

    #[allow(clippy::float_cmp)]
    let azimuth = if north == 0.0 {
        if east < 0.0 {
            3.0 * FRAC_PI_2
        } else {
            FRAC_PI_2
        }
    } else {
        let mut azimuth = (east / north).atan();
        if north < 0.0 {
            azimuth += PI;
        }
        normalize_azimuth(azimuth)
    };

    (azimuth.to_degrees(), dip.to_degrees())
}

/// Get `num_points` lines evenly spaced around a small circle (a cone) with a
/// half-angle of `half_angle` degrees about `axis`. The points are not folded
/// into the lower hemisphere.
pub fn small_circle(
    axis: Direction,
    half_angle: f64,
    num_points: usize,
) -> Vec<DirectionCosines> {
    let m = axis.to_cosines();
    // Any vector not parallel to the axis will do to start a basis.
    let helper = if m.down.abs() < 0.9 {
        DirectionCosines::new(0.0, 0.0, 1.0)
    } else {
        DirectionCosines::new(1.0, 0.0, 0.0)
    };
    let u = m.cross(helper);
    let u = u / u.norm();
    let v = m.cross(u);

    let (s_half, c_half) = half_angle.to_radians().sin_cos();
    (0..num_points)
        .map(|i| {
            let phi = i as f64 / num_points as f64 * crate::constants::TAU;
            let (s_phi, c_phi) = phi.sin_cos();
            m * c_half + u * (s_half * c_phi) + v * (s_half * s_phi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn test_spherical_to_cartesian_cardinal_directions() {
        let (n, e, d) = spherical_to_cartesian(0.0, 0.0);
        assert_abs_diff_eq!(n, 1.0);
        assert_abs_diff_eq!(e, 0.0);
        assert_abs_diff_eq!(d, 0.0);

        let (n, e, d) = spherical_to_cartesian(90.0, 0.0);
        assert_abs_diff_eq!(n, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(e, 1.0);
        assert_abs_diff_eq!(d, 0.0);

        let (n, e, d) = spherical_to_cartesian(123.0, 90.0);
        assert_abs_diff_eq!(n, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(e, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(d, 1.0);
    }

    #[test]
    fn test_spherical_to_cartesian_is_unit_length() {
        for i_az in 0..72 {
            for i_dip in 0..=18 {
                let azimuth = i_az as f64 * 5.0;
                let dip = i_dip as f64 * 5.0;
                let (n, e, d) = spherical_to_cartesian(azimuth, dip);
                assert_abs_diff_eq!((n * n + e * e + d * d).sqrt(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_spherical_to_cartesian_out_of_range_is_still_unit_length() {
        let (n, e, d) = spherical_to_cartesian(-725.0, 135.0);
        assert_abs_diff_eq!((n * n + e * e + d * d).sqrt(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        // A vertical line has no recoverable azimuth, so stop short of 90°.
        for i_az in 0..360 {
            for i_dip in 0..90 {
                let azimuth = i_az as f64 + 0.25;
                let dip = i_dip as f64 + 0.5;
                let (n, e, d) = spherical_to_cartesian(azimuth, dip);
                let (result_az, result_dip) = cartesian_to_spherical(n, e, d);
                assert_abs_diff_eq!(result_az, azimuth, epsilon = 1e-9);
                assert_abs_diff_eq!(result_dip, dip, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_integer_azimuths() {
        for azimuth in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            let (n, e, d) = spherical_to_cartesian(azimuth, 30.0);
            let (result_az, result_dip) = cartesian_to_spherical(n, e, d);
            assert_abs_diff_eq!(result_az, azimuth, epsilon = 1e-9);
            assert_abs_diff_eq!(result_dip, 30.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cartesian_to_spherical_zero_north() {
        let (az, dip) = cartesian_to_spherical(0.0, -1.0, 0.0);
        assert_abs_diff_eq!(az, 270.0);
        assert_abs_diff_eq!(dip, 0.0);

        let (az, dip) = cartesian_to_spherical(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(az, 90.0);
        assert_abs_diff_eq!(dip, 0.0);

        // Vertical.
        let (az, dip) = cartesian_to_spherical(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(az, 90.0);
        assert_abs_diff_eq!(dip, 90.0);
    }

    #[test]
    fn test_cartesian_to_spherical_quadrants() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let (az, _) = cartesian_to_spherical(h, h, 0.0);
        assert_abs_diff_eq!(az, 45.0, epsilon = 1e-12);
        let (az, _) = cartesian_to_spherical(-h, h, 0.0);
        assert_abs_diff_eq!(az, 135.0, epsilon = 1e-12);
        let (az, _) = cartesian_to_spherical(-h, -h, 0.0);
        assert_abs_diff_eq!(az, 225.0, epsilon = 1e-12);
        let (az, _) = cartesian_to_spherical(h, -h, 0.0);
        assert_abs_diff_eq!(az, 315.0, epsilon = 1e-12);
        let (az, _) = cartesian_to_spherical(-1.0, 0.0, 0.0);
        assert_abs_diff_eq!(az, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_small_circle() {
        for axis in [
            Direction::new(45.0, 30.0),
            Direction::new(200.0, 85.0),
            Direction::new(0.0, 90.0),
        ] {
            let m = axis.to_cosines();
            let points = small_circle(axis, 10.0, 36);
            assert_eq!(points.len(), 36);
            for p in points {
                assert_abs_diff_eq!(p.norm(), 1.0, epsilon = 1e-12);
                assert_abs_diff_eq!(p.dot(m).acos().to_degrees(), 10.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_cartesian_to_spherical_clamps_down() {
        let (_, dip) = cartesian_to_spherical(0.0, 0.0, 1.0 + 1e-15);
        assert_abs_diff_eq!(dip, 90.0);
        let (_, dip) = cartesian_to_spherical(0.0, 0.0, -1.0 - 1e-15);
        assert_abs_diff_eq!(dip, -90.0);
    }
}
