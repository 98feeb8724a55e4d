pub mod classify;
pub mod intercept;
pub mod pricing;
pub mod selection;

pub use classify::{classify, ThreatLevel};
pub use intercept::{solve, InterceptSolution};
pub use pricing::price_eur;
pub use selection::{evaluate_candidates, select, Decision, InterceptCandidate, SelectionResult};
