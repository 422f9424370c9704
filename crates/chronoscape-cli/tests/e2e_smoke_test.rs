use std::{fs, path::Path};

use tempfile::tempdir;

use chronoscape_cli::{Args, run};

/// A small three-timer document with far-future targets, so the derived
/// display text never flips to "Completed!" underneath the test.
const TIMERS_JSON: &str = r#"{
    "version": 1,
    "timers": [
        {"id": "launch", "label": "Launch", "target": "2999-03-01T00:00:00Z", "priority": 5},
        {"id": "review", "label": "Review", "target": "2999-11-15T09:30:00Z", "priority": 3},
        {"id": "trip", "label": "Trip", "target": "2999-06-20T12:00:00Z"}
    ]
}"#;

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        width: 800.0,
        height: 600.0,
        algorithm: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_renders_both_algorithms() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("timers.json");
    fs::write(&input, TIMERS_JSON).expect("Failed to write timer document");

    for algorithm in ["spiral", "vertical"] {
        let output = temp_dir.path().join(format!("{algorithm}.svg"));
        let mut args = args(&input, &output);
        args.algorithm = Some(algorithm.to_string());

        run(&args).expect("CLI run failed");

        let svg = fs::read_to_string(&output).expect("Output SVG missing");
        assert!(svg.contains("<svg"), "{algorithm}: not an SVG document");
        assert!(svg.contains("Launch:"), "{algorithm}: timer text missing");
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
    }
}

#[test]
fn e2e_smoke_test_document_algorithm_is_used() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("timers.json");
    // Record the vertical algorithm in the document itself
    let document = TIMERS_JSON.replacen(
        r#""version": 1,"#,
        r#""version": 1, "algorithm": "vertical","#,
        1,
    );
    fs::write(&input, document).expect("Failed to write timer document");

    let output = temp_dir.path().join("out.svg");
    run(&args(&input, &output)).expect("CLI run failed");

    // Vertical layout centers every label on the canvas midline
    let svg = fs::read_to_string(&output).expect("Output SVG missing");
    assert_eq!(svg.matches(r#"x="400""#).count(), 3);
}

#[test]
fn e2e_smoke_test_config_file_styles_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("timers.json");
    fs::write(&input, TIMERS_JSON).expect("Failed to write timer document");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r##"
[layout]
algorithm = "vertical"

[style]
background_color = "#101418"
font_family = "sans-serif"
"##,
    )
    .expect("Failed to write config file");

    let output = temp_dir.path().join("styled.svg");
    let mut args = args(&input, &output);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("CLI run failed");

    let svg = fs::read_to_string(&output).expect("Output SVG missing");
    assert!(svg.contains("<rect"), "background rect missing");
    assert!(svg.contains(r#"font-family="sans-serif""#));
    // Config algorithm applies when neither flag nor document picks one
    assert_eq!(svg.matches(r#"x="400""#).count(), 3);
}

#[test]
fn e2e_smoke_test_invalid_document_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("timers.json");
    fs::write(
        &input,
        r#"{
            "timers": [
                {"id": "t", "label": "A", "target": "2999-01-01T00:00:00Z"},
                {"id": "t", "label": "B", "target": "2999-06-01T00:00:00Z"}
            ]
        }"#,
    )
    .expect("Failed to write timer document");

    let output = temp_dir.path().join("out.svg");
    assert!(run(&args(&input, &output)).is_err());
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn e2e_smoke_test_unknown_algorithm_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("timers.json");
    fs::write(&input, TIMERS_JSON).expect("Failed to write timer document");

    let output = temp_dir.path().join("out.svg");
    let mut args = args(&input, &output);
    args.algorithm = Some("circular".to_string());

    assert!(run(&args).is_err());
}
