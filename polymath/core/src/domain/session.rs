// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::knowledge_domain::{DomainId, StudySlot};
use super::recommendation::TraversalPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One logged reading session. Sessions inside the repeat window are what
/// put a domain on cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSession {
    pub id: SessionId,
    pub date: NaiveDate,
    pub domain_id: DomainId,
    pub book_title: String,
    pub slot: StudySlot,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub reading_minutes: u32,
    pub phase: TraversalPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bisociation_partner: Option<DomainId>,
}

impl ReadingSession {
    pub fn new(
        date: NaiveDate,
        domain_id: DomainId,
        book_title: impl Into<String>,
        slot: StudySlot,
        phase: TraversalPhase,
    ) -> Self {
        Self {
            id: SessionId::new(),
            date,
            domain_id,
            book_title: book_title.into(),
            slot,
            pages_read: 0,
            reading_minutes: 0,
            phase,
            bisociation_partner: None,
        }
    }
}
