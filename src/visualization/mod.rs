//! Rendering of explanations
//!
//! Renderers are pure: they return a chart description or a marked-up
//! string and leave drawing to the caller.

pub mod vocabulary;
pub mod chart;
pub mod highlight;

pub use vocabulary::{tokenize, FeatureNames, Vocabulary};
pub use chart::{build_bar_chart, Bar, BarChart};
pub use highlight::{
    clean_token,
    highlight_text_with_contributions,
    highlight_with_config,
    top_contributors,
};
