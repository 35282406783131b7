// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Domain Repository Interfaces
//!
//! Persistence contracts, defined in the domain layer and implemented in
//! `crate::infrastructure::repositories`.
//!
//! | Trait | Aggregate | Implementations |
//! |-------|-----------|----------------|
//! | `DomainRepository` | `Domain` | `InMemoryDomainRepository` |
//! | `ReadingSessionRepository` | `ReadingSession` | `InMemoryReadingSessionRepository` |
//!
//! The traversal and bisociation algorithms never see these traits; they take
//! the materialized `Vec<Domain>` a repository hands back. Vault files or a
//! remote database plug in here by composition.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::knowledge_domain::{Domain, DomainId};
use super::session::ReadingSession;

/// Repository interface for Domain aggregates
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Load every domain in the taxonomy
    async fn load_all(&self) -> Result<Vec<Domain>, RepositoryError>;

    /// Find domain by ID
    async fn find_by_id(&self, id: &DomainId) -> Result<Option<Domain>, RepositoryError>;

    /// Save domain (create or update)
    async fn save(&self, domain: &Domain) -> Result<(), RepositoryError>;
}

/// Repository interface for logged reading sessions
#[async_trait]
pub trait ReadingSessionRepository: Send + Sync {
    /// Append a session
    async fn save(&self, session: &ReadingSession) -> Result<(), RepositoryError>;

    /// Sessions dated on or after `since`, oldest first
    async fn find_since(&self, since: NaiveDate) -> Result<Vec<ReadingSession>, RepositoryError>;
}

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}
