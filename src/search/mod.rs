//! Search module - name filtering and rating comparison

mod engine;
mod outcome;

pub use engine::{search, Query, MAX_RESULTS};
pub use outcome::{Candidate, ComparisonOutcome, SearchOutcome, SearchResult};
