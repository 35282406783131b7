// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Coverage gaps and progress statistics over a domain snapshot.
//!
//! Pure functions over already-loaded records; no repository access.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::domain::branch::Branch;
use crate::domain::knowledge_domain::{Domain, DomainStatus, StudySlot};

/// Days without reading after which a started domain counts as stale.
pub const DEFAULT_STALE_DAYS: u32 = 90;

#[derive(Debug, Clone, Serialize)]
pub struct IncompleteHub {
    pub domain: Domain,
    pub books_needed: u32,
    pub next_slot: StudySlot,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    /// Branches with no domain that has a book read.
    pub untouched_branches: Vec<Branch>,
    /// Hubs below target, most advanced first.
    pub incomplete_hubs: Vec<IncompleteHub>,
    /// Started, non-expert domains last read before the stale cutoff, oldest first.
    pub stale_domains: Vec<Domain>,
    pub untouched_domains: Vec<Domain>,
    /// Share of domains no longer untouched, 0-100.
    pub touched_pct: f64,
}

pub fn analyze_gaps(domains: &[Domain], today: NaiveDate, stale_days: u32, hub_target_books: u32) -> GapReport {
    let touched_branches: HashSet<&str> = domains
        .iter()
        .filter(|d| d.books_read > 0)
        .map(|d| d.branch_id.as_str())
        .collect();

    let untouched_branches = Branch::all()
        .into_iter()
        .filter(|b| !touched_branches.contains(b.id.as_str()))
        .collect();

    let mut hubs: Vec<&Domain> = domains
        .iter()
        .filter(|d| d.is_hub && d.books_read < hub_target_books)
        .collect();
    hubs.sort_by(|a, b| b.books_read.cmp(&a.books_read).then_with(|| a.id.cmp(&b.id)));
    let incomplete_hubs = hubs
        .into_iter()
        .map(|d| IncompleteHub {
            domain: d.clone(),
            books_needed: hub_target_books - d.books_read,
            next_slot: d.next_slot(),
        })
        .collect();

    let cutoff = today - Duration::days(i64::from(stale_days));
    let mut stale: Vec<&Domain> = domains
        .iter()
        .filter(|d| !matches!(d.status, DomainStatus::Untouched | DomainStatus::Expert))
        .filter(|d| d.last_read.is_some_and(|last| last < cutoff))
        .collect();
    stale.sort_by_key(|d| d.last_read);

    let untouched_domains: Vec<Domain> = domains.iter().filter(|d| d.is_untouched()).cloned().collect();

    let touched_pct = if domains.is_empty() {
        0.0
    } else {
        (domains.len() - untouched_domains.len()) as f64 / domains.len() as f64 * 100.0
    };

    GapReport {
        untouched_branches,
        incomplete_hubs,
        stale_domains: stale.into_iter().cloned().collect(),
        untouched_domains,
        touched_pct,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressStats {
    pub total_domains: usize,
    pub by_status: BTreeMap<DomainStatus, usize>,
    pub total_books_read: u32,
    pub branches_touched: usize,
    pub hubs_complete: usize,
    pub hubs_total: usize,
    pub current_streak: u32,
}

impl ProgressStats {
    pub fn count(&self, status: DomainStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Snapshot statistics. `session_dates` feeds the streak.
pub fn progress_stats<I>(domains: &[Domain], hub_target_books: u32, session_dates: I, today: NaiveDate) -> ProgressStats
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut by_status = BTreeMap::new();
    for d in domains {
        *by_status.entry(d.status).or_insert(0) += 1;
    }

    let branches_touched = domains
        .iter()
        .filter(|d| d.books_read > 0)
        .map(|d| d.branch_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    ProgressStats {
        total_domains: domains.len(),
        by_status,
        total_books_read: domains.iter().map(|d| d.books_read).sum(),
        branches_touched,
        hubs_complete: domains
            .iter()
            .filter(|d| d.is_hub && d.books_read >= hub_target_books)
            .count(),
        hubs_total: domains.iter().filter(|d| d.is_hub).count(),
        current_streak: reading_streak(session_dates, today),
    }
}

/// Consecutive days with at least one session, counting back from today.
/// A day with nothing logged yet does not break a streak ending yesterday.
pub fn reading_streak<I>(session_dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: HashSet<NaiveDate> = session_dates.into_iter().collect();

    let mut day = today;
    if !days.contains(&day) {
        day -= Duration::days(1);
    }

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
