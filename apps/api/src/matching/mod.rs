// Resume vs job-description match scoring.
// `analyze_match` is the deterministic scorer; `MatchScorer` selects the backend.

pub mod criteria;
pub mod diagnostics;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod report;
pub mod scorer;
