use qlime::config::VisualizationConfig;
use qlime::error::QLimeError;
use qlime::explanation::{Explainer, FixedOutcomeSampler};
use qlime::simulators::StatevectorBackend;
use qlime::visualization::{
    build_bar_chart, highlight_text_with_contributions, FeatureNames, Vocabulary,
};
use qlime::ExplainerConfig;

fn names(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn span(color: &str, word: &str) -> String {
    format!(
        r#"<span style="color:{}; background-color:yellow; font-weight:bold; ">{}</span>"#,
        color, word
    )
}

#[test]
fn test_highlight_good_bad_good() {
    let html = highlight_text_with_contributions(
        "good bad good",
        &[0.4, -0.3],
        &names(&["good", "bad"]),
        2,
    )
    .unwrap();

    let expected = format!("{} {} {}", span("blue", "good"), span("red", "bad"), span("blue", "good"));
    assert_eq!(html, expected);
}

#[test]
fn test_highlight_keeps_original_token_text() {
    let html = highlight_text_with_contributions(
        "  Good!   movie,  BAD ",
        &[0.4, -0.3, 0.0],
        &names(&["good", "bad", "movie"]),
        5,
    )
    .unwrap();

    // Whitespace collapses to single spaces; casing and punctuation survive
    let expected = format!("{} movie, {}", span("blue", "Good!"), span("red", "BAD"));
    assert_eq!(html, expected);
}

#[test]
fn test_highlight_respects_top_n() {
    let html = highlight_text_with_contributions(
        "good bad fine",
        &[0.4, -0.3, 0.1],
        &names(&["good", "bad", "fine"]),
        1,
    )
    .unwrap();
    assert_eq!(html, format!("{} bad fine", span("blue", "good")));

    let html = highlight_text_with_contributions(
        "good bad fine",
        &[0.4, -0.3, 0.1],
        &names(&["good", "bad", "fine"]),
        0,
    )
    .unwrap();
    assert_eq!(html, "good bad fine");
}

#[test]
fn test_highlight_without_contributions_is_plain_text() {
    let html = highlight_text_with_contributions("good bad", &[0.0, 0.0], &names(&["good", "bad"]), 5).unwrap();
    assert_eq!(html, "good bad");
}

#[test]
fn test_threshold_is_strict() {
    let config = VisualizationConfig::default();
    let chart = build_bar_chart(
        &[1e-7, -1e-7, 2e-7],
        &names(&["at", "at_negative", "above"]),
        &config,
    )
    .unwrap();

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["above"]);

    let html = highlight_text_with_contributions("at above", &[1e-7, 0.0, 2e-7], &names(&["at", "x", "above"]), 5).unwrap();
    assert_eq!(html, format!("at {}", span("blue", "above")));
}

#[test]
fn test_chart_sorts_negatives_after_positives() {
    let chart = build_bar_chart(
        &[-0.5, 0.2, 0.2, 0.1],
        &names(&["awful", "nice", "fine", "ok"]),
        &VisualizationConfig::default(),
    )
    .unwrap();

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    // Equal values keep feature order
    assert_eq!(labels, vec!["nice", "fine", "ok", "awful"]);
    assert_eq!(chart.bars[3].color, "red");
    assert_eq!(chart.bars[3].value, -0.5);
}

#[test]
fn test_chart_serializes_for_plotting_sinks() {
    let chart = build_bar_chart(&[0.25], &names(&["good"]), &VisualizationConfig::default()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["bars"][0]["label"], "good");
    assert_eq!(json["bars"][0]["color"], "blue");
    assert_eq!(json["invert_y"], true);
    assert_eq!(json["x_label"], "Contribution");
}

#[test]
fn test_name_count_must_match() {
    let err = build_bar_chart(&[0.1, 0.2], &names(&["one"]), &VisualizationConfig::default()).unwrap_err();
    assert!(matches!(err, QLimeError::DimensionMismatch { .. }));

    let err = highlight_text_with_contributions("one", &[0.1], &names(&["one", "two"]), 5).unwrap_err();
    assert!(matches!(err, QLimeError::DimensionMismatch { .. }));
}

#[test]
fn test_text_explanation_end_to_end() {
    let corpus = ["a good movie", "a bad movie", "good acting"];
    let vocab = Vocabulary::fit(corpus);
    assert_eq!(vocab.feature_names(), &["acting", "bad", "good", "movie"]);

    let text = "A good movie!";
    let vector = vocab.transform(text);
    assert_eq!(vector, vec![0.0, 0.0, 1.0, 1.0]);

    let weights = [0.2, -1.5, 2.0, 0.1];
    let mut explainer = Explainer::new(
        Box::new(StatevectorBackend::default()),
        FixedOutcomeSampler(0),
        ExplainerConfig::default(),
    );
    let explanation = explainer.explain(&vector, &weights).unwrap();

    let html = highlight_text_with_contributions(text, explanation.contributions(), &vocab, 1).unwrap();
    // Both active features tie; the lower index ("good") wins
    assert_eq!(html, format!("A {} movie!", span("blue", "good")));

    let chart = build_bar_chart(explanation.contributions(), &vocab, &VisualizationConfig::default()).unwrap();
    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["good", "movie"]);
}
