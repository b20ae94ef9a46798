//! Chart and summary exports of a calculation result.
//!
//! Rendering is left to the consumer; this module only produces the data a
//! pie chart needs and a printable text summary.

mod chart;
mod summary;

pub use chart::{ChartSlice, DeductionChart};
pub use summary::{SUMMARY_TITLE, render_summary};
