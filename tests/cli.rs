use std::process::{Command, Output};

fn bearings(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bearings"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bearings")
}

#[test]
fn demo_without_arguments() {
    let out = bearings(&["--no-color"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert_eq!(
        lines[0],
        "The Rock Canyon Cave is south east of the River Bottoms"
    );
    assert!(lines[1].starts_with("Actual bearing of 15"), "{}", lines[1]);
    assert_eq!(lines[2], "The Luna Trail is south of the River Bottoms");
    assert!(lines[3].starts_with("Actual bearing of -16"), "{}", lines[3]);
}

#[test]
fn single_route_as_json() {
    let out = bearings(&["--json", "--from", "40.0,-111.0", "--to", "40.0,-110.9"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["direction"], "east");
    let bearing = reports[0]["bearing"].as_f64().unwrap();
    assert!((bearing - 90.0).abs() < 1.0, "{bearing}");
}

#[test]
fn negative_start_point() {
    let out = bearings(&["--no-color", "--from", "-33.9,151.2", "--to", "-34.0,151.2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("-34,151.2 is south of -33.9,151.2\n"), "{stdout}");
}

#[test]
fn malformed_coordinate_is_rejected() {
    let out = bearings(&["--from", "north", "--to", "40.0,-111.0"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid coordinate"), "{stderr}");
}

#[test]
fn missing_target_is_rejected() {
    let out = bearings(&["--from", "40.0,-111.0"]);
    assert!(!out.status.success());
}
