//! Bar chart of feature contributions
//!
//! [`build_bar_chart`] only decides what to draw. Plotting front ends consume
//! the [`BarChart`] description; [`BarChart::render_text`] is a plain-text
//! renderer for terminals and logs.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::VisualizationConfig;
use crate::error::{ensure_same_len, Result};

use super::vocabulary::FeatureNames;

pub const CHART_TITLE: &str = "Q-LIME Feature Contributions (Sorted by Magnitude)";
pub const CHART_X_LABEL: &str = "Contribution";

/// One horizontal bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Everything a plotting sink needs to draw the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    /// Bars in drawing order
    pub bars: Vec<Bar>,
    /// First bar at the top
    pub invert_y: bool,
    pub alpha: f64,
    pub bar_height: f64,
}

/// Describe the non-zero contributions as a bar chart
///
/// Contributions whose magnitude does not exceed `config.threshold` are
/// dropped. The rest are ordered by signed value, largest first, with equal
/// values kept in feature order.
pub fn build_bar_chart<N: FeatureNames + ?Sized>(
    contributions: &[f64],
    names: &N,
    config: &VisualizationConfig,
) -> Result<BarChart> {
    let names = names.feature_names();
    ensure_same_len(contributions.len(), names.len(), "chart feature names")?;

    let mut bars: Vec<Bar> = contributions
        .iter()
        .zip(names)
        .filter(|(value, _)| value.abs() > config.threshold)
        .map(|(&value, name)| Bar {
            label: name.clone(),
            value,
            color: config.color_for(value).to_string(),
        })
        .collect();
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));

    Ok(BarChart {
        title: CHART_TITLE.to_string(),
        x_label: CHART_X_LABEL.to_string(),
        bars,
        invert_y: true,
        alpha: 0.5,
        bar_height: 0.5,
    })
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Render as text, the longest bar `width` characters wide
    ///
    /// Positive bars are drawn with `#`, negative ones with `=`.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        if self.bars.is_empty() {
            let _ = writeln!(out, "(no contributions)");
            return out;
        }

        let label_width = self.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
        let max_abs = self.bars.iter().map(|b| b.value.abs()).fold(0.0, f64::max);

        let ordered: Box<dyn Iterator<Item = &Bar>> = if self.invert_y {
            Box::new(self.bars.iter())
        } else {
            Box::new(self.bars.iter().rev())
        };

        for bar in ordered {
            let length = if max_abs > 0.0 {
                ((bar.value.abs() / max_abs) * width as f64).round() as usize
            } else {
                0
            };
            let glyph = if bar.value > 0.0 { "#" } else { "=" };
            let _ = writeln!(
                out,
                "{:>label_width$} | {:<width$} {:+.4}",
                bar.label,
                glyph.repeat(length.max(1)),
                bar.value,
            );
        }

        let _ = writeln!(out, "{:>label_width$}   {}", "", self.x_label);
        out
    }
}
