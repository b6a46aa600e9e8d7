//! Repeatable indexing requests collected by the questionnaire

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Instructions to index, filtered by program and discriminator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionRequest {
    pub program_ids: Option<Vec<String>>,
    pub discriminators: Option<Vec<String>>,
}

/// Token balances to index, filtered by owner account and mint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalanceRequest {
    pub accounts: Option<Vec<String>>,
    pub mints: Option<Vec<String>>,
}

/// Split comma-separated identifiers, dropping blanks and repeats
///
/// First-seen order is kept. Returns `None` rather than an empty list so an
/// unanswered filter stays absent in the rendered project.
pub fn parse_identifiers(input: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let ids: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}
