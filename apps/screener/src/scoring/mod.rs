pub mod matching;
pub mod report;
pub mod rules;
pub mod scorer;
pub mod tables;

pub use report::{Dimension, Report};
pub use scorer::CvScorer;
