// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, stereoplot, EAST_CLUSTER_CSV};

/// Get the "x y" lines out of stdout, ignoring log lines.
fn parse_points(stdout: &str) -> Vec<(f64, f64)> {
    stdout
        .lines()
        .filter_map(|l| {
            let mut fields = l.split(' ');
            let x = fields.next()?.parse().ok()?;
            let y = fields.next()?.parse().ok()?;
            match fields.next() {
                None => Some((x, y)),
                Some(_) => None,
            }
        })
        .collect()
}

#[test]
fn test_project_equal_area() {
    let cmd = stereoplot()
        .args(["project", "--azimuths", "0", "90", "--dips", "0", "90"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    let points = parse_points(&stdout);
    assert_eq!(points.len(), 2, "{stdout}");
    assert_abs_diff_eq!(points[0].0, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].1, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].0, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].1, 0.0, epsilon = 1e-12);
}

#[test]
fn test_project_negative_azimuth() {
    let cmd = stereoplot()
        .args(["project", "--azimuths", "-90", "--dips", "0", "--kind", "angle"])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    let points = parse_points(&stdout);
    assert_eq!(points.len(), 1, "{stdout}");
    assert_abs_diff_eq!(points[0].0, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].1, 0.0, epsilon = 1e-12);
}

#[test]
fn test_project_equal_angle_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.csv", tmp_dir.path(), EAST_CLUSTER_CSV);

    let cmd = stereoplot()
        .args([
            "project",
            "--data",
            &data.display().to_string(),
            "--kind",
            "equal-angle",
        ])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    let points = parse_points(&stdout);
    assert_eq!(points.len(), 4, "{stdout}");
    // (90, 50) projects onto the positive x axis at tan(20°).
    assert_abs_diff_eq!(points[1].0, 20.0_f64.to_radians().tan(), epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].1, 0.0, epsilon = 1e-12);
}

#[test]
fn test_project_unknown_kind() {
    let cmd = stereoplot()
        .args(["project", "--azimuths", "0", "--dips", "0", "--kind", "polar"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Unknown projection kind 'polar'"), "{stderr}");
    assert!(stderr.contains("area, angle"), "{stderr}");
}

#[test]
fn test_project_mismatched_lengths() {
    let cmd = stereoplot()
        .args(["project", "--azimuths", "0", "10", "--dips", "0"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("2 azimuths but 1 dips"), "{stderr}");
}
