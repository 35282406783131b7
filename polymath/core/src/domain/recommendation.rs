// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Ephemeral results produced by the traversal engine and bisociation
//! generator. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hub_books::{books_for_slot, BookRecommendation};
use super::knowledge_domain::{Domain, StudySlot};

/// Books listed with a hub recommendation.
pub const SUGGESTED_BOOK_LIMIT: usize = 3;

/// Strategy the traversal engine is currently following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalPhase {
    /// Finish the hub domains first, with a weekly distant interleave.
    #[default]
    #[serde(alias = "hub_completion")]
    HubCompletion,
    /// Reserved for problem-led reading; currently follows hub completion.
    #[serde(alias = "problem_driven")]
    ProblemDriven,
    /// Weekly rhythm of strength days, distant days and a synthesis day.
    Bisociation,
}

impl TraversalPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalPhase::HubCompletion => "hub-completion",
            TraversalPhase::ProblemDriven => "problem-driven",
            TraversalPhase::Bisociation => "bisociation",
        }
    }
}

impl fmt::Display for TraversalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "hub-completion" | "hub" => Ok(TraversalPhase::HubCompletion),
            "problem-driven" | "problem" => Ok(TraversalPhase::ProblemDriven),
            "bisociation" => Ok(TraversalPhase::Bisociation),
            other => Err(format!("Unknown traversal phase: '{}'", other)),
        }
    }
}

/// What to read next and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: Domain,
    pub slot: StudySlot,
    pub reason: String,
    pub phase: TraversalPhase,
    /// True when the pick came from the distant-domain search.
    pub is_distant_interleave: bool,
    /// Minimum branch distance to the reader's strength branches; 0 unless distant.
    pub distance_from_strength: u8,
    /// Lower is more urgent. Hub = 0, strength = 5, distant = 10.
    pub priority: u32,
}

impl Recommendation {
    /// Curated books for the recommended slot when the domain is a hub.
    pub fn suggested_books(&self) -> Vec<&'static BookRecommendation> {
        if !self.domain.is_hub {
            return Vec::new();
        }
        let mut books = books_for_slot(self.domain.id.as_str(), self.slot);
        books.truncate(SUGGESTED_BOOK_LIMIT);
        books
    }
}

/// A familiar domain paired with a far one, plus a prompt to connect them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisociationPair {
    pub anchor: Domain,
    pub distant: Domain,
    pub distance: u8,
    pub synthesis_prompt: String,
    pub why_paired: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_parsing_accepts_both_separators() {
        assert_eq!("hub_completion".parse::<TraversalPhase>().unwrap(), TraversalPhase::HubCompletion);
        assert_eq!("problem-driven".parse::<TraversalPhase>().unwrap(), TraversalPhase::ProblemDriven);
        assert_eq!("Bisociation".parse::<TraversalPhase>().unwrap(), TraversalPhase::Bisociation);
        assert!("sprint".parse::<TraversalPhase>().is_err());
    }

    fn recommendation(domain: Domain, slot: StudySlot) -> Recommendation {
        Recommendation {
            domain,
            slot,
            reason: String::new(),
            phase: TraversalPhase::HubCompletion,
            is_distant_interleave: false,
            distance_from_strength: 0,
            priority: 0,
        }
    }

    #[test]
    fn test_suggested_books_follow_slot() {
        let genetics = Domain::new("02.04", "Evolutionary Biology", "02", "Life Sciences").with_hub(true);

        let books = recommendation(genetics.clone(), StudySlot::Foundation).suggested_books();
        let titles: Vec<&str> = books.iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["The Selfish Gene", "Darwin's Dangerous Idea"]);

        assert!(recommendation(genetics, StudySlot::History).suggested_books().is_empty());
    }

    #[test]
    fn test_no_suggested_books_outside_hubs() {
        // Listed in the table, but not flagged as a hub here.
        let genetics = Domain::new("02.04", "Evolutionary Biology", "02", "Life Sciences");
        assert!(recommendation(genetics, StudySlot::Foundation).suggested_books().is_empty());

        let religion = Domain::new("15.01", "Comparative Religion", "15", "Religion Theology").with_hub(true);
        assert!(recommendation(religion, StudySlot::Foundation).suggested_books().is_empty());
    }

    #[test]
    fn test_phase_serde_tokens() {
        assert_eq!(serde_json::to_string(&TraversalPhase::HubCompletion).unwrap(), "\"hub-completion\"");
        let parsed: TraversalPhase = serde_json::from_str("\"problem_driven\"").unwrap();
        assert_eq!(parsed, TraversalPhase::ProblemDriven);
    }
}
