// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;

use approx::assert_abs_diff_eq;
use indoc::{formatdoc, indoc};
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, stereoplot, EAST_CLUSTER_CSV};

#[test]
fn test_vector_mean_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.csv", tmp_dir.path(), EAST_CLUSTER_CSV);

    let cmd = stereoplot()
        .args(["vector-mean", "--data", &data.display().to_string()])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "vector-mean failed on simple test data: {stderr}");
    assert!(stdout.contains("Mean vector"), "{stdout}");
    assert!(stdout.contains("Number of directions (n): 4"), "{stdout}");
    assert!(stdout.contains("Cone of confidence (95%)"), "{stdout}");
}

#[test]
fn test_vector_mean_json_output() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("mean.json");

    #[rustfmt::skip]
    let cmd = stereoplot()
        .args([
            "vector-mean",
            "--azimuths", "80", "90", "100", "90",
            "--dips", "60", "50", "60", "70",
            "--confidence", "99",
            "--output", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let json: serde_json::Value = serde_json::from_reader(File::open(&output).unwrap()).unwrap();
    assert_eq!(json["num_directions"], 4);
    assert_abs_diff_eq!(json["confidence"].as_f64().unwrap(), 99.0);
    assert_abs_diff_eq!(
        json["direction"]["dip"].as_f64().unwrap(),
        60.0,
        epsilon = 1.0
    );
}

#[test]
fn test_vector_mean_undefined_statistics() {
    // All of the same direction; the concentration and cone aren't defined.
    let cmd = stereoplot()
        .args([
            "vector-mean",
            "--azimuths",
            "45",
            "45",
            "45",
            "--dips",
            "30",
            "30",
            "30",
        ])
        .ok();
    assert!(cmd.is_ok());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Concentration factor (κ): undefined"), "{stdout}");
}

#[test]
fn test_vector_mean_insignificant_warns() {
    let cmd = stereoplot()
        .args(["vector-mean", "--azimuths", "0", "180", "--dips", "0", "0"])
        .ok();
    assert!(cmd.is_ok());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("not significant"), "{stdout}");
}

#[test]
fn test_vector_mean_bad_confidence() {
    let cmd = stereoplot()
        .args([
            "vector-mean",
            "--azimuths",
            "10",
            "--dips",
            "20",
            "--confidence",
            "100",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("between 0 and 100"), "{stderr}");
}

#[test]
fn test_vector_mean_no_input() {
    let cmd = stereoplot().args(["vector-mean"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No input directions"), "{stderr}");
}

#[test]
fn test_vector_mean_bad_value_in_file() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir(
        "lineations.txt",
        tmp_dir.path(),
        indoc! {"
            10 20
            30 forty
        "},
    );

    let cmd = stereoplot()
        .args(["vector-mean", "--data", &data.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Line 2"), "{stderr}");
    assert!(stderr.contains("forty"), "{stderr}");
}

#[test]
fn test_vector_mean_bad_value_on_first_line() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.txt", tmp_dir.path(), "10,abc\n20,30\n");

    let cmd = stereoplot()
        .args(["vector-mean", "--data", &data.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Line 1"), "{stderr}");
    assert!(stderr.contains("abc"), "{stderr}");
}

#[test]
fn test_vector_mean_semicolon_csv() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir(
        "lineations.csv",
        tmp_dir.path(),
        &EAST_CLUSTER_CSV.replace(',', ";"),
    );

    let cmd = stereoplot()
        .args(["vector-mean", "--data", &data.display().to_string()])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("Number of directions (n): 4"), "{stdout}");
}

#[test]
fn test_vector_mean_arg_file_and_save_toml() {
    let tmp_dir = TempDir::new().unwrap();
    let data = make_file_in_dir("lineations.csv", tmp_dir.path(), EAST_CLUSTER_CSV);
    let arg_file = make_file_in_dir(
        "args.toml",
        tmp_dir.path(),
        &formatdoc! {r#"
            confidence = 90.0

            [data]
            file = "{}"
        "#, data.display()},
    );
    let saved = tmp_dir.path().join("saved.toml");

    let cmd = stereoplot()
        .args([
            "vector-mean",
            &arg_file.display().to_string(),
            "--save-toml",
            &saved.display().to_string(),
            "--dry-run",
        ])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("Dry run"), "{stdout}");

    // The saved arguments reproduce the run.
    let saved_contents = std::fs::read_to_string(&saved).unwrap();
    assert!(saved_contents.contains("confidence = 90.0"), "{saved_contents}");
    let cmd = stereoplot()
        .args(["vector-mean", &saved.display().to_string()])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(ok, "{stderr}");
    assert!(stdout.contains("Cone of confidence (90%)"), "{stdout}");
}
