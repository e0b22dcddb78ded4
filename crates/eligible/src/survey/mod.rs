//! Survey generation: segmentation, per-unit transformation, numbering.

mod builder;
mod question;
mod segment;

pub use builder::{SurveyBuilder, SurveyConfig};
pub use question::{Survey, SurveyQuestion, SurveySummary};
pub use segment::{EligibilityUnit, segment, split_numbered};
