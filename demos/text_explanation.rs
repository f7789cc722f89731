// demos/text_explanation.rs
//! Example explaining a bag-of-words sentiment classifier
//!
//! Builds a vocabulary from a tiny corpus, explains one sentence with both
//! perturbation modes, and prints the bar chart and the highlighted HTML.

use qlime::prelude::*;
use qlime::visualization::highlight::highlight_with_config;

fn main() -> Result<()> {
    println!("Q-LIME Text Explanation Example");
    println!("===============================\n");

    let corpus = [
        "a truly great movie with great acting",
        "a boring plot and bad acting",
        "the soundtrack was great",
    ];
    let vocab = Vocabulary::fit(corpus);
    let weights: Vec<f64> = vocab
        .feature_names()
        .iter()
        .map(|word| match word.as_str() {
            "great" => 2.0,
            "truly" => 0.5,
            "bad" | "boring" => -2.0,
            _ => 0.1,
        })
        .collect();

    let config = QLimeConfig {
        explainer: ExplainerConfig {
            seed: Some(7),
            ..ExplainerConfig::default()
        },
        ..QLimeConfig::default()
    };

    let text = "A truly great movie, but the plot was boring.";
    let vector = vocab.transform(text);

    for full_superposition in [false, true] {
        let explainer_config = ExplainerConfig {
            full_superposition,
            ..config.explainer.clone()
        };
        let explanation = Explainer::from_config(explainer_config).explain(&vector, &weights)?;

        println!("full_superposition = {}", full_superposition);
        println!("original prediction: {:.4}\n", explanation.original_prediction());

        let chart = build_bar_chart(explanation.contributions(), &vocab, &config.visualization)?;
        println!("{}", chart.render_text(30));

        let html = highlight_with_config(text, explanation.contributions(), &vocab, &config.visualization)?;
        println!("{}\n", html);
    }

    Ok(())
}
