pub mod candidates;
pub mod fit;
pub mod scoring;

pub use candidates::{CandidateSet, KeepRule, SplitCandidate, analyze_candidates};
pub use fit::{FitAnalysis, check_fit};
pub use scoring::{best_split, score_split};
