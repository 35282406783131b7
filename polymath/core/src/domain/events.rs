// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Domain events for reading progress.
//! Published to the EventBus so dashboards and mirrors can follow along
//! without the core knowing about them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::knowledge_domain::{DomainId, DomainStatus, StudySlot};
use super::session::SessionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolymathEvent {
    /// A reading session was recorded against a domain
    SessionLogged {
        session_id: SessionId,
        domain_id: DomainId,
        book_title: String,
        slot: StudySlot,
        books_read: u32,
        timestamp: DateTime<Utc>,
    },

    /// A domain moved to a deeper status after a session
    DomainStatusAdvanced {
        domain_id: DomainId,
        from: DomainStatus,
        to: DomainStatus,
        timestamp: DateTime<Utc>,
    },
}

impl PolymathEvent {
    pub fn domain_id(&self) -> &DomainId {
        match self {
            PolymathEvent::SessionLogged { domain_id, .. } => domain_id,
            PolymathEvent::DomainStatusAdvanced { domain_id, .. } => domain_id,
        }
    }
}
