use crate::detect::Detector;
use crate::errors::MweError;
use crate::pipeline::{PipelineConfig, ScoreKind, Stage, Strategy};
use crate::test_utils::{ids, open_index, tok};
use crate::token::Token;

const INDEX: &str = "\
world_record_N 5,0,3,1,0 world_records 2,0,1,0,0
record_player_N 1,0,4,0,0
look_up_V 4,2,0,0,1 looked_up 3,1,0,0,0
";

fn sentence() -> Vec<Token> {
    vec![
        tok("She", "PRP", &[]),
        tok("looked", "VBD", &["look"]),
        tok("the", "DT", &[]),
        tok("world", "NN", &[]),
        tok("record", "NN", &[]),
        tok("player", "NN", &[]),
        tok("up", "RP", &[]),
        tok(".", ".", &[]),
    ]
}

#[test]
fn standard_pipeline() {
    let detector = PipelineConfig::standard().build(open_index(INDEX)).unwrap();
    let found = detector.detect(&sentence()).unwrap();
    assert_eq!(
        ids(&found),
        vec!["look_up_V[1:looked 6:up]", "world_record_N[3:world 4:record]"]
    );
}

#[test]
fn consecutive_preset() {
    let detector = PipelineConfig::consecutive().build(open_index(INDEX)).unwrap();
    let found = detector.detect(&sentence()).unwrap();
    assert_eq!(
        ids(&found),
        vec![
            "world_record_N[3:world 4:record]",
            "record_player_N[4:record 5:player]"
        ]
    );
}

#[test]
fn toml_pipeline_with_proper_nouns() {
    let config = PipelineConfig::from_toml_str(
        r#"
        strategy = "exhaustive"
        proper_nouns = true

        [[stages]]
        kind = "continuity"

        [[stages]]
        kind = "longest-match"
        "#,
    )
    .unwrap();
    let mut sentence = sentence();
    sentence.insert(0, tok("Ada", "NNP", &[]));
    sentence.insert(1, tok("Lovelace", "NNP", &[]));

    let found = config.build(open_index(INDEX)).unwrap().detect(&sentence).unwrap();
    assert_eq!(
        ids(&found),
        vec![
            "ada_lovelace_N[0:Ada 1:Lovelace]",
            "world_record_N[5:world 6:record]"
        ]
    );
}

#[test]
fn custom_stop_words() {
    let config = PipelineConfig {
        stop_words: Some(vec!["up".to_string()]),
        ..PipelineConfig::exhaustive()
    };
    let detector = config.build(open_index("look_up_V 0,0,0,0,0")).unwrap();
    let sentence = vec![tok("up", "RP", &[]), tok("look", "VB", &[])];
    let found = detector.detect(&sentence).unwrap();
    assert_eq!(ids(&found), vec!["look_up_V[0:up 1:look]"]);
}

#[test]
fn invalid_configurations() {
    let index = open_index(INDEX);

    let stop_words_on_consecutive = PipelineConfig {
        stop_words: Some(vec!["up".to_string()]),
        ..PipelineConfig::consecutive()
    };
    assert!(matches!(
        stop_words_on_consecutive.build(index.clone()),
        Err(MweError::Config { .. })
    ));

    let bad_rule = PipelineConfig::from_toml_str(
        r#"
        [[stages]]
        kind = "inflection"
        rules = [{ pattern = "(", inflectable = ["last"] }]
        "#,
    )
    .unwrap();
    assert!(matches!(bad_rule.build(index.clone()), Err(MweError::Config { .. })));

    let bad_range = PipelineConfig::exhaustive().with_stage(Stage::Length {
        min: 4,
        max: Some(2),
    });
    assert!(matches!(bad_range.build(index), Err(MweError::Config { .. })));
}

#[test]
fn inverted_resolver_and_ratio_filter() {
    let config = PipelineConfig::exhaustive()
        .with_stage(Stage::MarkedRatio { min: 0.2 })
        .with_stage(Stage::ResolveByScore {
            score: ScoreKind::StartIndex,
            invert: true,
        });
    assert_eq!(config.strategy, Strategy::Exhaustive);
    let found = config
        .build(open_index(INDEX))
        .unwrap()
        .detect(&sentence())
        .unwrap();
    assert_eq!(
        ids(&found),
        vec!["look_up_V[1:looked 6:up]", "world_record_N[3:world 4:record]"]
    );
}

#[test]
fn closed_index_and_empty_sentence_are_errors() {
    let index = open_index(INDEX);
    let detector = PipelineConfig::standard().build(index.clone()).unwrap();
    assert!(matches!(
        detector.detect(&[]),
        Err(MweError::InvalidArgument { .. })
    ));

    index.close();
    assert!(matches!(
        detector.detect(&sentence()),
        Err(MweError::IndexClosed)
    ));

    index.open().unwrap();
    assert_eq!(detector.detect(&sentence()).unwrap().len(), 2);
}
