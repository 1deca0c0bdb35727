use clap::Parser;
use keywalk_core::config::ScoreWeights;
use keywalk_core::consts;
use keywalk_core::error::KeywalkError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    weights: ScoreWeights,
}

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_mirror_the_constants() {
    let w = ScoreWeights::default();
    assert_eq!(w.w_adjacency, consts::W_ADJACENCY);
    assert_eq!(w.w_low_entropy, consts::W_LOW_ENTROPY);
    assert_eq!(w.w_straight, consts::W_STRAIGHT);
    assert_eq!(w.w_pattern, consts::W_PATTERN);
    assert_eq!(w.w_low_cv, consts::W_LOW_CV);
    assert!(w.validate().is_ok());
}

#[test]
fn clap_defaults_match_plain_defaults() {
    let cli = TestCli::parse_from(["keywalk-test"]);
    assert_eq!(cli.weights, ScoreWeights::default());
}

#[test]
fn loads_a_full_weights_file() {
    let file = write_json(
        r#"{
            "w_adjacency": 0.5,
            "w_low_entropy": 0.2,
            "w_straight": 0.1,
            "w_pattern": 0.1,
            "w_low_cv": 0.1
        }"#,
    );
    let w = ScoreWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.w_adjacency, 0.5);
    assert_eq!(w.w_low_cv, 0.1);
}

#[test]
fn partial_files_keep_defaults_for_the_rest() {
    let file = write_json(r#"{ "w_pattern": 0.9 }"#);
    let w = ScoreWeights::load_from_file(file.path()).unwrap();
    assert_eq!(w.w_pattern, 0.9);
    assert_eq!(w.w_adjacency, consts::W_ADJACENCY);
    assert_eq!(w.w_straight, consts::W_STRAIGHT);
}

#[test]
fn malformed_json_is_a_json_error() {
    let file = write_json("{ not json ");
    match ScoreWeights::load_from_file(file.path()) {
        Err(KeywalkError::Json(_)) => {}
        other => panic!("expected Json error, got {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    match ScoreWeights::load_from_file("/definitely/not/here.json") {
        Err(KeywalkError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn cli_flags_override_only_what_was_passed() {
    let matches = <TestCli as clap::CommandFactory>::command()
        .get_matches_from(["keywalk-test", "--w-straight", "0.9"]);
    let cli = <TestCli as clap::FromArgMatches>::from_arg_matches(&matches).unwrap();

    let mut resolved = ScoreWeights {
        w_adjacency: 0.4,
        ..Default::default()
    };
    resolved.merge_from_cli(&cli.weights, &matches);

    assert_eq!(resolved.w_straight, 0.9, "explicit flag wins");
    assert_eq!(resolved.w_adjacency, 0.4, "file value survives the merge");
    assert_eq!(resolved.w_pattern, consts::W_PATTERN);
}

#[test]
fn validation_rejects_degenerate_weights() {
    let negative = ScoreWeights {
        w_pattern: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(KeywalkError::Validation(_))
    ));

    let zeroed = ScoreWeights {
        w_adjacency: 0.0,
        w_low_entropy: 0.0,
        w_straight: 0.0,
        w_pattern: 0.0,
        w_low_cv: 0.0,
    };
    assert!(matches!(zeroed.validate(), Err(KeywalkError::Validation(_))));

    let nan = ScoreWeights {
        w_low_cv: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(nan.validate(), Err(KeywalkError::Validation(_))));
}

#[test]
fn validation_error_reads_like_one() {
    let zeroed = ScoreWeights {
        w_adjacency: 0.0,
        w_low_entropy: 0.0,
        w_straight: 0.0,
        w_pattern: 0.0,
        w_low_cv: 0.0,
    };
    let message = zeroed.validate().unwrap_err().to_string();
    assert!(message.contains("Validation"), "got: {message}");
}
