// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Reading Log Service
//!
//! Records reading sessions and derives the cooldown list the traversal
//! engine and bisociation generator consume.
//!
//! # Flow
//!
//! 1. Load the domain from `DomainRepository`
//! 2. Resolve the slot (explicit, else the domain's next slot)
//! 3. Count the book and advance status in memory
//! 4. Append the `ReadingSession`, then persist the domain
//! 5. Publish `SessionLogged`, and `DomainStatusAdvanced` when status moved

use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::progress::reading_streak;
use crate::domain::events::PolymathEvent;
use crate::domain::knowledge_domain::{Domain, DomainId, DomainStatus, StudySlot};
use crate::domain::recommendation::TraversalPhase;
use crate::domain::repository::{DomainRepository, ReadingSessionRepository, RepositoryError};
use crate::domain::session::ReadingSession;
use crate::infrastructure::event_bus::EventBus;

#[derive(Debug, Clone)]
pub struct LogSessionRequest {
    pub domain_id: DomainId,
    pub book_title: String,
    pub date: NaiveDate,
    /// Detected from the domain's progress when absent.
    pub slot: Option<StudySlot>,
    pub phase: TraversalPhase,
    pub pages_read: u32,
    pub reading_minutes: u32,
    pub bisociation_partner: Option<DomainId>,
}

impl LogSessionRequest {
    pub fn new(domain_id: DomainId, book_title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            domain_id,
            book_title: book_title.into(),
            date,
            slot: None,
            phase: TraversalPhase::default(),
            pages_read: 0,
            reading_minutes: 0,
            bisociation_partner: None,
        }
    }

    pub fn with_slot(mut self, slot: StudySlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_phase(mut self, phase: TraversalPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_partner(mut self, partner: DomainId) -> Self {
        self.bisociation_partner = Some(partner);
        self
    }
}

#[derive(Debug, Clone)]
pub struct LoggedSession {
    pub session: ReadingSession,
    /// Domain as persisted after the update.
    pub domain: Domain,
    /// `(from, to)` when the session advanced the status.
    pub status_change: Option<(DomainStatus, DomainStatus)>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadingLogError {
    #[error("Domain not found: {0}")]
    DomainNotFound(DomainId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct ReadingLogService {
    domain_repository: Arc<dyn DomainRepository>,
    session_repository: Arc<dyn ReadingSessionRepository>,
    event_bus: Arc<EventBus>,
    repeat_window_days: u32,
}

impl ReadingLogService {
    pub fn new(
        domain_repository: Arc<dyn DomainRepository>,
        session_repository: Arc<dyn ReadingSessionRepository>,
        event_bus: Arc<EventBus>,
        repeat_window_days: u32,
    ) -> Self {
        Self {
            domain_repository,
            session_repository,
            event_bus,
            repeat_window_days,
        }
    }

    pub async fn log_session(&self, request: LogSessionRequest) -> Result<LoggedSession, ReadingLogError> {
        info!(
            domain_id = %request.domain_id,
            book = %request.book_title,
            date = %request.date,
            "Logging reading session"
        );

        let mut domain = self
            .domain_repository
            .find_by_id(&request.domain_id)
            .await?
            .ok_or_else(|| ReadingLogError::DomainNotFound(request.domain_id.clone()))?;

        let slot = request.slot.unwrap_or_else(|| domain.next_slot());
        let status_change = domain
            .record_reading(request.date)
            .map(|previous| (previous, domain.status));

        let mut session = ReadingSession::new(
            request.date,
            domain.id.clone(),
            request.book_title,
            slot,
            request.phase,
        );
        session.pages_read = request.pages_read;
        session.reading_minutes = request.reading_minutes;
        session.bisociation_partner = request.bisociation_partner;

        // Session before domain: a failed append leaves the stored domain untouched.
        self.session_repository.save(&session).await?;
        self.domain_repository.save(&domain).await?;

        let now = Utc::now();
        self.event_bus.publish(PolymathEvent::SessionLogged {
            session_id: session.id,
            domain_id: domain.id.clone(),
            book_title: session.book_title.clone(),
            slot,
            books_read: domain.books_read,
            timestamp: now,
        });

        if let Some((from, to)) = status_change {
            info!(domain_id = %domain.id, %from, %to, "Domain status advanced");
            self.event_bus.publish(PolymathEvent::DomainStatusAdvanced {
                domain_id: domain.id.clone(),
                from,
                to,
                timestamp: now,
            });
        }

        Ok(LoggedSession {
            session,
            domain,
            status_change,
        })
    }

    /// Distinct ids read within the repeat window ending on `today`
    /// (inclusive on both ends), in first-read order.
    pub async fn recent_domain_ids(&self, today: NaiveDate) -> Result<Vec<DomainId>, ReadingLogError> {
        let since = today - Duration::days(i64::from(self.repeat_window_days));
        let sessions = self.session_repository.find_since(since).await?;

        let mut ids: Vec<DomainId> = Vec::new();
        for session in sessions.into_iter().filter(|s| s.date <= today) {
            if !ids.contains(&session.domain_id) {
                ids.push(session.domain_id);
            }
        }

        debug!(since = %since, count = ids.len(), "Resolved recent domains");
        Ok(ids)
    }

    /// Consecutive reading days ending today (or yesterday).
    pub async fn current_streak(&self, today: NaiveDate) -> Result<u32, ReadingLogError> {
        let sessions = self.session_repository.find_since(NaiveDate::MIN).await?;
        Ok(reading_streak(sessions.into_iter().map(|s| s.date), today))
    }
}
