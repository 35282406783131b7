// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Polymath Domain Layer
//!
//! Pure domain types. No I/O dependencies.
//!
//! | Module | Key Types |
//! |--------|-----------|
//! | [`branch`] | `BranchId`, `Branch`, `BranchSummary` |
//! | [`distance`] | branch distance matrix and lookups |
//! | [`isomorphism`] | `Isomorphism`, cross-domain concept catalog |
//! | [`hub_books`] | `BookRecommendation`, curated hub reading lists |
//! | [`knowledge_domain`] | `Domain`, `DomainId`, `DomainStatus`, `StudySlot` |
//! | [`recommendation`] | `Recommendation`, `TraversalPhase`, `BisociationPair` |
//! | [`session`] | `ReadingSession`, `SessionId` |
//! | [`events`] | `PolymathEvent` |
//! | [`repository`] | `DomainRepository`, `ReadingSessionRepository`, `RepositoryError` |
//! | [`polymath_config`] | `PolymathConfig`, `TraversalConfig`, `UserConfig` |

pub mod branch;
pub mod distance;
pub mod isomorphism;
pub mod hub_books;
pub mod knowledge_domain;
pub mod recommendation;
pub mod session;
pub mod events;
pub mod repository;
pub mod polymath_config;

pub use branch::*;
pub use distance::*;
pub use isomorphism::*;
pub use hub_books::*;
pub use knowledge_domain::*;
pub use recommendation::*;
pub use session::*;
pub use events::*;
pub use repository::*;
pub use polymath_config::*;
