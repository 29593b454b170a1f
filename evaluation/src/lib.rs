pub mod result;
pub mod scores;

pub use result::EvaluationResult;
pub use scores::normalize;
