// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # `polymath-core`: Reading Traversal & Bisociation Engine
//!
//! Decides what to read next across a fixed 15-branch knowledge taxonomy and
//! pairs familiar domains with distant ones to provoke cross-domain insight.
//!
//! ## Crate Layout
//!
//! | Module | Layer | Contents |
//! |--------|-------|----------|
//! | [`domain`] | Domain | `Domain`, `Branch`, distance matrix, isomorphisms, hub books, `Recommendation`, `BisociationPair`, repository contracts, config |
//! | [`application`] | Application | `TraversalEngine`, `BisociationGenerator`, `ReadingLogService`, gap analysis |
//! | [`infrastructure`] | Infrastructure | In-memory repositories, event bus |
//!
//! The traversal and bisociation algorithms never touch storage: callers hand
//! them already-loaded `Domain` records plus the ids read inside the cooldown
//! window, and get back `Option`s. "Nothing to recommend" is always `None`,
//! never an error.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
