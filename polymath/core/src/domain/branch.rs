// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Taxonomy Branches
//!
//! The 15 top-level categories of the knowledge taxonomy. Branch codes are
//! two-digit, zero-padded strings ("01".."15"); anything shorter is padded on
//! the way in so "7" and "07" name the same branch.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::knowledge_domain::{Domain, DomainStatus};

/// Reference table of every branch code and its display name, in code order.
pub const BRANCHES: [(&str, &str); 15] = [
    ("01", "Physical Sciences"),
    ("02", "Life Sciences"),
    ("03", "Formal Sciences"),
    ("04", "Mind Sciences"),
    ("05", "Social Sciences"),
    ("06", "Humanities"),
    ("07", "Engineering"),
    ("08", "Health Medicine"),
    ("09", "Business Management"),
    ("10", "Education"),
    ("11", "Arts Design Communication"),
    ("12", "Law Public Admin"),
    ("13", "Agriculture Environment"),
    ("14", "Trades Applied Tech"),
    ("15", "Religion Theology"),
];

/// Errors raised when parsing taxonomy identifiers from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Unknown branch id: '{0}'")]
    UnknownBranch(String),

    #[error("Malformed domain id: '{0}' (expected 'BB.DD')")]
    MalformedDomainId(String),
}

/// Left-pads a branch code with zeros to two characters.
pub fn normalize_branch_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.len() >= 2 {
        trimmed.to_string()
    } else {
        format!("{:0>2}", trimmed)
    }
}

/// Position of a normalized branch code in [`BRANCHES`].
pub(crate) fn branch_index(normalized: &str) -> Option<usize> {
    BRANCHES.iter().position(|(code, _)| *code == normalized)
}

/// Two-digit branch code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(String);

impl BranchId {
    /// Normalizes without checking the code against the taxonomy.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(normalize_branch_code(code.as_ref()))
    }

    /// Normalizes and rejects codes outside the 15 known branches.
    pub fn parse(code: &str) -> Result<Self, TaxonomyError> {
        let normalized = normalize_branch_code(code);
        match branch_index(&normalized) {
            Some(_) => Ok(Self(normalized)),
            None => Err(TaxonomyError::UnknownBranch(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name from the reference table, if the code is known.
    pub fn name(&self) -> Option<&'static str> {
        branch_index(&self.0).map(|i| BRANCHES[i].1)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BranchId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A taxonomy branch with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
}

impl Branch {
    /// All 15 branches in code order.
    pub fn all() -> Vec<Branch> {
        BRANCHES
            .iter()
            .map(|(code, name)| Branch {
                id: BranchId::new(code),
                name: (*name).to_string(),
            })
            .collect()
    }

    pub fn lookup(code: &str) -> Option<Branch> {
        let normalized = normalize_branch_code(code);
        branch_index(&normalized).map(|i| Branch {
            id: BranchId(normalized),
            name: BRANCHES[i].1.to_string(),
        })
    }
}

/// Per-branch progress rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchSummary {
    pub branch: Branch,
    pub domain_count: usize,
    /// Domains whose status has moved past `untouched`.
    pub touched_count: usize,
    pub total_books_read: u32,
}

impl BranchSummary {
    /// Summarizes every known branch, in code order. Domains filed under an
    /// unknown branch code are ignored.
    pub fn summarize(domains: &[Domain]) -> Vec<BranchSummary> {
        Branch::all()
            .into_iter()
            .map(|branch| {
                let members: Vec<&Domain> = domains
                    .iter()
                    .filter(|d| d.branch_id == branch.id)
                    .collect();

                BranchSummary {
                    domain_count: members.len(),
                    touched_count: members
                        .iter()
                        .filter(|d| d.status != DomainStatus::Untouched)
                        .count(),
                    total_books_read: members.iter().map(|d| d.books_read).sum(),
                    branch,
                }
            })
            .collect()
    }

    /// Percentage of domains touched; 0.0 for an empty branch.
    pub fn coverage_pct(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }
        self.touched_count as f64 / self.domain_count as f64 * 100.0
    }
}
