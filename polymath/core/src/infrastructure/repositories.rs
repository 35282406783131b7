// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// In-memory repository implementations. Used by tests and by hosts that load
// the vault once at startup and hand the records over.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::knowledge_domain::{Domain, DomainId};
use crate::domain::repository::{DomainRepository, ReadingSessionRepository, RepositoryError};
use crate::domain::session::ReadingSession;

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Storage("Mutex poisoned".to_string())
}

/// Domains keyed by id; `load_all` returns them in id order.
#[derive(Clone, Default)]
pub struct InMemoryDomainRepository {
    domains: Arc<Mutex<BTreeMap<DomainId, Domain>>>,
}

impl InMemoryDomainRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: impl IntoIterator<Item = Domain>) -> Self {
        let map = domains.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self {
            domains: Arc::new(Mutex::new(map)),
        }
    }
}

#[async_trait]
impl DomainRepository for InMemoryDomainRepository {
    async fn load_all(&self) -> Result<Vec<Domain>, RepositoryError> {
        let domains = self.domains.lock().map_err(poisoned)?;
        Ok(domains.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &DomainId) -> Result<Option<Domain>, RepositoryError> {
        let domains = self.domains.lock().map_err(poisoned)?;
        Ok(domains.get(id).cloned())
    }

    async fn save(&self, domain: &Domain) -> Result<(), RepositoryError> {
        let mut domains = self.domains.lock().map_err(poisoned)?;
        domains.insert(domain.id.clone(), domain.clone());
        Ok(())
    }
}

/// Append-only session log.
#[derive(Clone, Default)]
pub struct InMemoryReadingSessionRepository {
    sessions: Arc<Mutex<Vec<ReadingSession>>>,
}

impl InMemoryReadingSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: impl IntoIterator<Item = ReadingSession>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions.into_iter().collect())),
        }
    }
}

#[async_trait]
impl ReadingSessionRepository for InMemoryReadingSessionRepository {
    async fn save(&self, session: &ReadingSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.lock().map_err(poisoned)?;
        sessions.push(session.clone());
        Ok(())
    }

    async fn find_since(&self, since: NaiveDate) -> Result<Vec<ReadingSession>, RepositoryError> {
        let sessions = self.sessions.lock().map_err(poisoned)?;
        let mut found: Vec<ReadingSession> = sessions
            .iter()
            .filter(|s| s.date >= since)
            .cloned()
            .collect();
        found.sort_by_key(|s| s.date);
        Ok(found)
    }
}
