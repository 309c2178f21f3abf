//! CLI Tests
//!
//! Exercise the command layer end-to-end through temp files: design a
//! filter, feed the emitted spec back into the sweep commands, and check
//! the JSON that comes out.

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use filterlab::cli::commands;
use filterlab::cli::{DesignArgs, ImpulseArgs, ResponseArgs};
use filterlab::{Domain, FilterSpec};

fn design_args(dir: &std::path::Path) -> DesignArgs {
    DesignArgs {
        family: "butterworth".to_string(),
        band: "lowpass".to_string(),
        order: 4,
        domain: "digital".to_string(),
        cutoff: 0.3,
        cutoff2: None,
        ripple: None,
        atten: None,
        output: Some(dir.join("spec.json")),
    }
}

#[test]
fn test_design_writes_loadable_spec() {
    let dir = tempdir().unwrap();
    commands::design_filter(&design_args(dir.path())).unwrap();

    let text = std::fs::read_to_string(dir.path().join("spec.json")).unwrap();
    let spec: FilterSpec = serde_json::from_str(&text).unwrap();

    assert_eq!(spec.domain, Domain::Digital);
    assert_eq!(spec.poles.len(), 4);
    assert_eq!(spec.zeros.len(), 4);
    assert!(spec.is_stable());
}

#[test]
fn test_response_command_round_trip() {
    let dir = tempdir().unwrap();
    commands::design_filter(&design_args(dir.path())).unwrap();

    let out = dir.path().join("bode.json");
    commands::frequency_sweep(&ResponseArgs {
        spec: dir.path().join("spec.json"),
        start: None,
        stop: None,
        points: Some(64),
        output: Some(out.clone()),
    })
    .unwrap();

    let rows: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().expect("an array of sweep rows");
    assert_eq!(rows.len(), 64);

    // DC of a Butterworth lowpass sits at 0 dB
    let dc_db = rows[0]["magnitude_db"].as_f64().unwrap();
    assert!(dc_db.abs() < 1e-6, "DC magnitude {dc_db} dB");
    // Rows carry frequency and unwrapped phase
    assert!(rows[0]["frequency"].as_f64().is_some());
    assert!(rows[63]["phase_deg"].as_f64().is_some());
}

#[test]
fn test_impulse_command_round_trip() {
    let dir = tempdir().unwrap();
    commands::design_filter(&design_args(dir.path())).unwrap();

    let out = dir.path().join("impulse.json");
    commands::impulse(&ImpulseArgs {
        spec: dir.path().join("spec.json"),
        start: Some(-10.0),
        stop: Some(30.0),
        points: None,
        anti_causal: false,
        output: Some(out.clone()),
    })
    .unwrap();

    let resp: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let samples = resp["samples"].as_array().expect("sample rows");
    assert_eq!(samples.len(), 41);

    // Causal designed filter: nothing before n = 0
    for s in samples.iter().take(10) {
        assert_eq!(s["amplitude"].as_f64().unwrap(), 0.0);
    }
}

#[test]
fn test_missing_spec_file_is_io_error() {
    let err = commands::frequency_sweep(&ResponseArgs {
        spec: "/nonexistent/spec.json".into(),
        start: None,
        stop: None,
        points: None,
        output: None,
    })
    .unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");
}

#[test]
fn test_bad_family_is_parameter_error() {
    let dir = tempdir().unwrap();
    let mut args = design_args(dir.path());
    args.family = "elliptic".to_string();
    let err = commands::design_filter(&args).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");
}
