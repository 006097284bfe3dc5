// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;

use super::*;

#[test]
fn test_horizontal_north_line() {
    let (x, y) = to_equal_area(0.0, 0.0);
    assert_abs_diff_eq!(x, 0.0);
    assert_abs_diff_eq!(y, 1.0, epsilon = 1e-15);

    let (x, y) = to_equal_angle(0.0, 0.0);
    assert_abs_diff_eq!(x, 0.0);
    assert_abs_diff_eq!(y, 1.0, epsilon = 1e-15);
}

#[test]
fn test_horizontal_east_line() {
    let (x, y) = to_equal_area(90.0, 0.0);
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-15);

    let (x, y) = to_equal_angle(270.0, 0.0);
    assert_abs_diff_eq!(x, -1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-15);
}

#[test]
fn test_vertical_line_is_at_the_centre() {
    for azimuth in [0.0, 33.0, 180.0, 359.0] {
        let (x, y) = to_equal_area(azimuth, 90.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-15);

        let (x, y) = to_equal_angle(azimuth, 90.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-15);
    }
}

#[test]
fn test_known_values() {
    // 45° dip: equal area radius is sqrt(2) * sin(22.5°), equal angle radius is
    // tan(22.5°).
    let (x, y) = to_equal_area(180.0, 45.0);
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(y, -0.5411961001461969, epsilon = 1e-12);

    let (x, y) = to_equal_angle(180.0, 45.0);
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(y, -0.41421356237309503, epsilon = 1e-12);
}

#[test]
fn test_points_are_inside_the_unit_disk() {
    for i_az in 0..36 {
        for i_dip in 0..=9 {
            let azimuth = i_az as f64 * 10.0;
            let dip = i_dip as f64 * 10.0;
            for kind in ProjectionKind::iter() {
                let (x, y) = project(kind, azimuth, dip);
                assert!(x * x + y * y <= 1.0 + 1e-12);
            }
        }
    }
}

#[test]
fn test_equal_angle_is_closer_to_the_centre() {
    // For intermediate dips, the stereographic radius is always smaller.
    for dip in [10.0, 30.0, 50.0, 70.0] {
        let (_, area_y) = to_equal_area(0.0, dip);
        let (_, angle_y) = to_equal_angle(0.0, dip);
        assert!(angle_y < area_y);
    }
}

#[test]
fn test_project_array() {
    let azimuths = array![0.0, 90.0, 45.0];
    let dips = array![0.0, 90.0, 30.0];
    let (xs, ys) = project_array(ProjectionKind::EqualArea, azimuths.view(), dips.view()).unwrap();
    let expected_xs = Array1::from_iter(
        azimuths
            .iter()
            .zip(dips.iter())
            .map(|(&az, &dip)| to_equal_area(az, dip).0),
    );
    let expected_ys = Array1::from_iter(
        azimuths
            .iter()
            .zip(dips.iter())
            .map(|(&az, &dip)| to_equal_area(az, dip).1),
    );
    assert_abs_diff_eq!(xs, expected_xs);
    assert_abs_diff_eq!(ys, expected_ys);
    assert_abs_diff_eq!(ys, array![1.0, 0.0, ys[2]], epsilon = 1e-12);
}

#[test]
fn test_project_empty_array() {
    let empty = Array1::<f64>::zeros(0);
    let (xs, ys) = project_array(ProjectionKind::EqualAngle, empty.view(), empty.view()).unwrap();
    assert!(xs.is_empty());
    assert!(ys.is_empty());
}

#[test]
fn test_project_array_length_mismatch() {
    let result = project_array(
        ProjectionKind::EqualArea,
        array![0.0, 1.0].view(),
        array![0.0].view(),
    );
    assert_eq!(
        result,
        Err(ProjectionError::LengthMismatch {
            azimuths: 2,
            dips: 1
        })
    );
}

#[test]
fn test_parse_kind() {
    assert_eq!(ProjectionKind::parse("area"), Ok(ProjectionKind::EqualArea));
    assert_eq!(ProjectionKind::parse("Equal-Area"), Ok(ProjectionKind::EqualArea));
    assert_eq!(ProjectionKind::parse("angle"), Ok(ProjectionKind::EqualAngle));
    assert_eq!(ProjectionKind::parse(" ANGLE "), Ok(ProjectionKind::EqualAngle));
    assert_eq!(ProjectionKind::EqualArea.to_string(), "area");
    assert_eq!(ProjectionKind::EqualAngle.to_string(), "angle");
}

#[test]
fn test_unknown_kind_names_the_valid_kinds() {
    let err = ProjectionKind::parse("mercator").unwrap_err();
    assert_eq!(err, ProjectionError::UnknownKind("mercator".to_string()));
    let msg = err.to_string();
    assert!(msg.contains("mercator"));
    assert!(msg.contains("area"));
    assert!(msg.contains("angle"));
}
