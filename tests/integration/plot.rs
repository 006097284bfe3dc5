// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, stereoplot, EAST_CLUSTER_CSV};

#[test]
#[cfg(feature = "plotting")]
fn test_plot_writes_png() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.csv", tmp_dir.path(), EAST_CLUSTER_CSV);
    let output = tmp_dir.path().join("net.png");

    #[rustfmt::skip]
    let cmd = stereoplot()
        .args([
            "plot",
            "--data", &data.display().to_string(),
            "--mean",
            "--no-label",
            "--size", "300",
            "--output", &output.display().to_string(),
        ])
        .ok();
    let ok = cmd.is_ok();
    let (_, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");

    // A PNG signature.
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
#[cfg(not(feature = "plotting"))]
fn test_plot_needs_feature() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.csv", tmp_dir.path(), EAST_CLUSTER_CSV);

    let cmd = stereoplot()
        .args(["plot", "--data", &data.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("\"plotting\" feature"), "{stderr}");
}
