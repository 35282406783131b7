// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Knowledge Domain Aggregate
//!
//! A [`Domain`] is a leaf of the taxonomy and the unit of reading progress.
//! Each one is created once when the taxonomy is seeded and afterwards only
//! mutated by the reading log workflow ([`Domain::record_reading`]); domains
//! are never deleted.
//!
//! ## Study Slots
//!
//! Every domain is read from six angles. The angle for the next book is a
//! pure function of `books_read`:
//!
//! | books_read | slot |
//! |-----------|------|
//! | 0 | Foundation |
//! | 1 | Heresy |
//! | 2 | Orthodoxy |
//! | 3 | Frontier |
//! | 4 | History |
//! | 5+ | Bridge |
//!
//! Heresy comes before Orthodoxy on purpose: the contrarian view is read while
//! the foundations are still fresh.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::branch::{BranchId, TaxonomyError};

/// Domain identifier: branch code, a dot, then a two-digit domain code ("02.04").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    /// Wraps an identifier without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Validates the `BB.DD` shape and that `BB` is a known branch.
    pub fn parse(id: &str) -> Result<Self, TaxonomyError> {
        let (branch, local) = id
            .split_once('.')
            .ok_or_else(|| TaxonomyError::MalformedDomainId(id.to_string()))?;

        let well_formed = branch.len() == 2
            && local.len() == 2
            && branch.chars().all(|c| c.is_ascii_digit())
            && local.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(TaxonomyError::MalformedDomainId(id.to_string()));
        }

        BranchId::parse(branch)?;
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Branch portion of the id.
    pub fn branch_code(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DomainId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DomainId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Depth of engagement with a domain, shallowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    #[default]
    Untouched,
    Surveying,
    Surveyed,
    Deepening,
    Specialized,
    Expert,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Untouched => "untouched",
            DomainStatus::Surveying => "surveying",
            DomainStatus::Surveyed => "surveyed",
            DomainStatus::Deepening => "deepening",
            DomainStatus::Specialized => "specialized",
            DomainStatus::Expert => "expert",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "untouched" => Ok(DomainStatus::Untouched),
            "surveying" => Ok(DomainStatus::Surveying),
            "surveyed" => Ok(DomainStatus::Surveyed),
            "deepening" => Ok(DomainStatus::Deepening),
            "specialized" => Ok(DomainStatus::Specialized),
            "expert" => Ok(DomainStatus::Expert),
            other => Err(format!("Unknown domain status: '{}'", other)),
        }
    }
}

/// Reading angle on a domain. Serialized as its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudySlot {
    #[serde(rename = "FND")]
    Foundation,
    #[serde(rename = "ORT")]
    Orthodoxy,
    #[serde(rename = "HRS")]
    Heresy,
    #[serde(rename = "FRN")]
    Frontier,
    #[serde(rename = "HST")]
    History,
    #[serde(rename = "BRG")]
    Bridge,
}

impl StudySlot {
    /// Order in which slots are filled as books accumulate.
    pub const PROGRESSION: [StudySlot; 6] = [
        StudySlot::Foundation,
        StudySlot::Heresy,
        StudySlot::Orthodoxy,
        StudySlot::Frontier,
        StudySlot::History,
        StudySlot::Bridge,
    ];

    /// Slot for the next book after `books_read` books; saturates at Bridge.
    pub fn for_books_read(books_read: u32) -> Self {
        let index = (books_read as usize).min(Self::PROGRESSION.len() - 1);
        Self::PROGRESSION[index]
    }

    pub fn code(&self) -> &'static str {
        match self {
            StudySlot::Foundation => "FND",
            StudySlot::Orthodoxy => "ORT",
            StudySlot::Heresy => "HRS",
            StudySlot::Frontier => "FRN",
            StudySlot::History => "HST",
            StudySlot::Bridge => "BRG",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudySlot::Foundation => "Foundation",
            StudySlot::Orthodoxy => "Orthodoxy",
            StudySlot::Heresy => "Heresy",
            StudySlot::Frontier => "Frontier",
            StudySlot::History => "History",
            StudySlot::Bridge => "Bridge",
        }
    }
}

impl fmt::Display for StudySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudySlot {
    type Err = String;

    /// Accepts either the code ("HRS") or the label ("Heresy"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::PROGRESSION
            .iter()
            .copied()
            .find(|slot| {
                slot.code().eq_ignore_ascii_case(wanted) || slot.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("Unknown study slot: '{}'", wanted))
    }
}

/// Leaf node of the knowledge taxonomy.
///
/// # Invariants
///
/// - `books_read` never decreases.
/// - `books_read == 0` should imply `status == Untouched`. Nothing here
///   enforces it; [`Domain::record_reading`] keeps the two in step for
///   callers that go through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    pub branch_id: BranchId,
    pub branch_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: DomainStatus,
    /// Priority domain targeted for early completion.
    #[serde(default)]
    pub is_hub: bool,
    /// User-declared area of strength.
    #[serde(default)]
    pub is_expert: bool,
    #[serde(default)]
    pub books_read: u32,
    #[serde(default)]
    pub last_read: Option<NaiveDate>,
}

impl Domain {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        branch_id: impl AsRef<str>,
        branch_name: impl Into<String>,
    ) -> Self {
        Self {
            id: DomainId::new(id),
            name: name.into(),
            branch_id: BranchId::new(branch_id),
            branch_name: branch_name.into(),
            description: String::new(),
            status: DomainStatus::Untouched,
            is_hub: false,
            is_expert: false,
            books_read: 0,
            last_read: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: DomainStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_hub(mut self, is_hub: bool) -> Self {
        self.is_hub = is_hub;
        self
    }

    pub fn with_expert(mut self, is_expert: bool) -> Self {
        self.is_expert = is_expert;
        self
    }

    pub fn with_books_read(mut self, books_read: u32) -> Self {
        self.books_read = books_read;
        self
    }

    pub fn with_last_read(mut self, last_read: NaiveDate) -> Self {
        self.last_read = Some(last_read);
        self
    }

    pub fn next_slot(&self) -> StudySlot {
        StudySlot::for_books_read(self.books_read)
    }

    /// Expert-flagged or at least two books in.
    pub fn is_strength(&self) -> bool {
        self.is_expert || self.books_read >= 2
    }

    pub fn is_untouched(&self) -> bool {
        self.status == DomainStatus::Untouched
    }

    /// Days between `last_read` and `today`; `None` if never read.
    pub fn days_since_read(&self, today: NaiveDate) -> Option<i64> {
        self.last_read.map(|last| (today - last).num_days())
    }

    /// Counts one more book read on `read_on` and advances the status:
    ///
    /// - untouched -> surveying
    /// - surveying -> surveyed once 2 books are in
    /// - surveyed -> deepening once 4 books are in
    ///
    /// Returns the previous status when it changed.
    pub fn record_reading(&mut self, read_on: NaiveDate) -> Option<DomainStatus> {
        self.books_read += 1;
        self.last_read = Some(read_on);

        let previous = self.status;
        let next = match previous {
            DomainStatus::Untouched => DomainStatus::Surveying,
            DomainStatus::Surveying if self.books_read >= 2 => DomainStatus::Surveyed,
            DomainStatus::Surveyed if self.books_read >= 4 => DomainStatus::Deepening,
            other => other,
        };

        if next == previous {
            return None;
        }
        self.status = next;
        Some(previous)
    }
}
