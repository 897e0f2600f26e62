//! Search Outcome Module
//! Per-query results and the cross-source comparison.

use crate::data::ProductRecord;
use serde::Serialize;

/// Matches from one source, in dataset order, capped at `MAX_RESULTS`.
pub type SearchResult<'a> = Vec<&'a ProductRecord>;

/// Highest-rated record of one source's result set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate<'a> {
    pub record: &'a ProductRecord,
    pub rating: f64,
}

impl<'a> Candidate<'a> {
    /// First record with the maximum rating, or `None` for an empty set.
    pub fn best_of(results: &[&'a ProductRecord]) -> Option<Self> {
        results.iter().fold(None, |best: Option<Self>, &record| match best {
            Some(b) if b.rating >= record.rating => Some(b),
            _ => Some(Candidate {
                record,
                rating: record.rating,
            }),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome<'a> {
    SourceAWins { winner: Candidate<'a> },
    SourceBWins { winner: Candidate<'a> },
    Tie { a: Candidate<'a>, b: Candidate<'a> },
    /// At least one source has no candidate.
    Incomparable,
}

impl<'a> ComparisonOutcome<'a> {
    pub fn decide(a: Option<Candidate<'a>>, b: Option<Candidate<'a>>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a.rating > b.rating => ComparisonOutcome::SourceAWins { winner: a },
            (Some(a), Some(b)) if b.rating > a.rating => ComparisonOutcome::SourceBWins { winner: b },
            (Some(a), Some(b)) => ComparisonOutcome::Tie { a, b },
            _ => ComparisonOutcome::Incomparable,
        }
    }

    /// The same outcome with the roles of source A and B exchanged.
    pub fn swapped(self) -> Self {
        match self {
            ComparisonOutcome::SourceAWins { winner } => ComparisonOutcome::SourceBWins { winner },
            ComparisonOutcome::SourceBWins { winner } => ComparisonOutcome::SourceAWins { winner },
            ComparisonOutcome::Tie { a, b } => ComparisonOutcome::Tie { a: b, b: a },
            ComparisonOutcome::Incomparable => ComparisonOutcome::Incomparable,
        }
    }

    pub fn winner(&self) -> Option<&Candidate<'a>> {
        match self {
            ComparisonOutcome::SourceAWins { winner } | ComparisonOutcome::SourceBWins { winner } => {
                Some(winner)
            }
            _ => None,
        }
    }
}

/// Everything one query produces.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    pub source_a: SearchResult<'a>,
    pub source_b: SearchResult<'a>,
    pub comparison: ComparisonOutcome<'a>,
}

impl SearchOutcome<'_> {
    /// Neither source matched the query.
    pub fn is_empty(&self) -> bool {
        self.source_a.is_empty() && self.source_b.is_empty()
    }
}
