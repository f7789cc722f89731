//! HTML highlighting of the most influential words in a text

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::VisualizationConfig;
use crate::error::{ensure_same_len, Result};

use super::vocabulary::FeatureNames;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("Invalid non-word regex"));

/// Indices of the `top_n` largest contributions by magnitude
///
/// Only magnitudes strictly above `threshold` qualify. Equal magnitudes keep
/// feature order.
pub fn top_contributors(contributions: &[f64], threshold: f64, top_n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..contributions.len())
        .filter(|&i| contributions[i].abs() > threshold)
        .collect();
    indices.sort_by(|&a, &b| contributions[b].abs().total_cmp(&contributions[a].abs()));
    indices.truncate(top_n);
    indices
}

/// Lowercase `token` and strip everything but word characters
pub fn clean_token(token: &str) -> String {
    NON_WORD.replace_all(&token.to_lowercase(), "").into_owned()
}

/// Highlight the top `top_n` features in `text` with the default colors
pub fn highlight_text_with_contributions<N: FeatureNames + ?Sized>(
    text: &str,
    contributions: &[f64],
    names: &N,
    top_n: usize,
) -> Result<String> {
    let config = VisualizationConfig {
        top_n,
        ..VisualizationConfig::default()
    };
    highlight_with_config(text, contributions, names, &config)
}

/// Wrap every word of `text` that matches a top feature in a colored span
///
/// Words are split on whitespace and rejoined with single spaces, so the
/// original spacing is not preserved. Matching ignores case and punctuation
/// but the span keeps the word exactly as written.
pub fn highlight_with_config<N: FeatureNames + ?Sized>(
    text: &str,
    contributions: &[f64],
    names: &N,
    config: &VisualizationConfig,
) -> Result<String> {
    let names = names.feature_names();
    ensure_same_len(contributions.len(), names.len(), "highlight feature names")?;

    let word_colors: HashMap<&str, &str> =
        top_contributors(contributions, config.threshold, config.top_n)
            .into_iter()
            .map(|i| (names[i].as_str(), config.color_for(contributions[i])))
            .collect();

    let highlighted: Vec<String> = text
        .split_whitespace()
        .map(|word| match word_colors.get(clean_token(word).as_str()) {
            Some(color) => format!(
                r#"<span style="color:{}; background-color:{}; font-weight:bold; ">{}</span>"#,
                color, config.highlight_background, word
            ),
            None => word.to_string(),
        })
        .collect();

    Ok(highlighted.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_contributors_order_and_ties() {
        let contributions = [0.1, -0.5, 0.5, 0.0, 0.2];
        assert_eq!(top_contributors(&contributions, 1e-7, 3), vec![1, 2, 4]);
        assert_eq!(top_contributors(&contributions, 1e-7, 10), vec![1, 2, 4, 0]);
        assert!(top_contributors(&contributions, 1e-7, 0).is_empty());
    }

    #[test]
    fn test_clean_token() {
        assert_eq!(clean_token("Good!"), "good");
        assert_eq!(clean_token("(it's)"), "its");
        assert_eq!(clean_token("snake_case"), "snake_case");
        assert_eq!(clean_token("..."), "");
    }

    #[test]
    fn test_custom_colors() {
        let config = VisualizationConfig {
            positive_color: "green".to_string(),
            highlight_background: "white".to_string(),
            ..VisualizationConfig::default()
        };
        let names = vec!["good".to_string()];
        let html = highlight_with_config("so good", &[0.3], &names, &config).unwrap();
        assert_eq!(
            html,
            r#"so <span style="color:green; background-color:white; font-weight:bold; ">good</span>"#
        );
    }
}
