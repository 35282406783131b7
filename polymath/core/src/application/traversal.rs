// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Traversal Engine
//!
//! Phase-based recommender that picks the single best next (domain, slot).
//!
//! # Phases
//!
//! | Phase | Behaviour |
//! |-------|-----------|
//! | `HubCompletion` | Closest-to-complete hub first; distant pick on the interleave day |
//! | `ProblemDriven` | Follows hub completion with `week_day = 0` |
//! | `Bisociation` | Mon-Wed strength, Thu-Sat distant, Sunday no reading |
//!
//! Every search may come back empty. That is `None`, not an error.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::domain::distance::branch_distance;
use crate::domain::knowledge_domain::{Domain, DomainId};
use crate::domain::polymath_config::TraversalConfig;
use crate::domain::recommendation::{Recommendation, TraversalPhase};

/// Branch assumed as the reader's strength before anything has been read.
pub const DEFAULT_STRENGTH_BRANCH: &str = "07";

/// Bisociation weekday reserved for synthesis; no reading is recommended.
pub const SYNTHESIS_DAY: u8 = 6;

const HUB_PRIORITY: u32 = 0;
const STRENGTH_PRIORITY: u32 = 5;
const DISTANT_PRIORITY: u32 = 10;

/// Weekday index used by [`TraversalEngine::recommend_next`]: 0 = Monday .. 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Recommends what to read next.
///
/// Config values are copied in at construction. The only mutable state is the
/// current phase; callers sharing an engine across threads must serialize
/// calls to [`TraversalEngine::set_phase`] themselves.
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    phase: TraversalPhase,
    hub_target_books: u32,
    cooldown_days: u32,
    min_distant_distance: u8,
    distant_interleave_day: u8,
}

impl TraversalEngine {
    pub fn new(config: &TraversalConfig) -> Self {
        Self {
            phase: config.current_phase,
            hub_target_books: config.hub_target_books,
            cooldown_days: config.max_domain_repeat_window,
            min_distant_distance: config.bisociation_min_distance,
            distant_interleave_day: config.distant_interleave_day,
        }
    }

    pub fn with_interleave_day(mut self, week_day: u8) -> Self {
        self.distant_interleave_day = week_day;
        self
    }

    pub fn phase(&self) -> TraversalPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: TraversalPhase) {
        info!(from = %self.phase, to = %phase, "Traversal phase changed");
        self.phase = phase;
    }

    pub fn hub_target_books(&self) -> u32 {
        self.hub_target_books
    }

    /// Days a domain stays out of rotation after being read.
    pub fn cooldown_days(&self) -> u32 {
        self.cooldown_days
    }

    pub fn min_distant_distance(&self) -> u8 {
        self.min_distant_distance
    }

    pub fn distant_interleave_day(&self) -> u8 {
        self.distant_interleave_day
    }

    /// Best next read for `week_day` (0 = Monday), skipping anything in
    /// `recent_domain_ids`.
    pub fn recommend_next(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
        week_day: u8,
    ) -> Option<Recommendation> {
        debug!(
            phase = %self.phase,
            week_day,
            domains = domains.len(),
            recent = recent_domain_ids.len(),
            "Computing next recommendation"
        );

        match self.phase {
            TraversalPhase::HubCompletion => {
                self.recommend_hub_completion(domains, recent_domain_ids, week_day)
            }
            // No problem data exists yet; hub completion without the interleave.
            TraversalPhase::ProblemDriven => {
                self.recommend_hub_completion(domains, recent_domain_ids, 0)
            }
            TraversalPhase::Bisociation => {
                self.recommend_bisociation(domains, recent_domain_ids, week_day)
            }
        }
    }

    /// Same as [`recommend_next`](Self::recommend_next) with the weekday taken from `today`.
    pub fn recommend_on(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
        today: NaiveDate,
    ) -> Option<Recommendation> {
        self.recommend_next(domains, recent_domain_ids, weekday_index(today))
    }

    /// True when every hub has at least `hub_target_books` books read.
    pub fn check_hub_completion(&self, domains: &[Domain]) -> bool {
        domains
            .iter()
            .filter(|d| d.is_hub)
            .all(|d| d.books_read >= self.hub_target_books)
    }

    fn recommend_hub_completion(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
        week_day: u8,
    ) -> Option<Recommendation> {
        if week_day == self.distant_interleave_day {
            if let Some(rec) = self.find_distant_domain(domains, recent_domain_ids) {
                debug!(domain_id = %rec.domain.id, "Distant interleave day");
                return Some(rec);
            }
        }

        let mut eligible: Vec<&Domain> = domains
            .iter()
            .filter(|d| d.is_hub)
            .filter(|d| !recent_domain_ids.contains(&d.id))
            .filter(|d| d.books_read < self.hub_target_books)
            .collect();

        if eligible.is_empty() {
            debug!("No eligible hubs, falling back to distant search");
            return self.find_distant_domain(domains, recent_domain_ids);
        }

        eligible.sort_by(|a, b| b.books_read.cmp(&a.books_read).then_with(|| a.id.cmp(&b.id)));
        let hub = eligible[0];

        Some(Recommendation {
            domain: hub.clone(),
            slot: hub.next_slot(),
            reason: self.hub_reason(hub),
            phase: TraversalPhase::HubCompletion,
            is_distant_interleave: false,
            distance_from_strength: 0,
            priority: HUB_PRIORITY,
        })
    }

    fn recommend_bisociation(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
        week_day: u8,
    ) -> Option<Recommendation> {
        match week_day {
            SYNTHESIS_DAY => None,
            0..=2 => self.find_strength_domain(domains, recent_domain_ids),
            _ => self.find_distant_domain(domains, recent_domain_ids),
        }
    }

    /// Domain furthest from the reader's strength branches.
    ///
    /// Strength branches are those holding an expert domain or one with two
    /// or more books; with none, [`DEFAULT_STRENGTH_BRANCH`] stands in. Ties
    /// on distance go to untouched domains, then to the lower id.
    pub fn find_distant_domain(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
    ) -> Option<Recommendation> {
        let mut strength_branches: BTreeSet<&str> = domains
            .iter()
            .filter(|d| d.is_strength())
            .map(|d| d.branch_id.as_str())
            .collect();

        if strength_branches.is_empty() {
            strength_branches.insert(DEFAULT_STRENGTH_BRANCH);
        }

        let mut candidates: Vec<(&Domain, u8, u8)> = domains
            .iter()
            .filter(|d| !recent_domain_ids.contains(&d.id))
            .filter_map(|d| {
                let distance = strength_branches
                    .iter()
                    .map(|sb| branch_distance(d.branch_id.as_str(), sb))
                    .min()?;
                let bonus = u8::from(d.is_untouched());
                (distance >= self.min_distant_distance).then_some((d, distance, bonus))
            })
            .collect();

        candidates.sort_by(|(da, dist_a, bonus_a), (db, dist_b, bonus_b)| {
            dist_b
                .cmp(dist_a)
                .then_with(|| bonus_b.cmp(bonus_a))
                .then_with(|| da.id.cmp(&db.id))
        });

        let (domain, distance, _) = candidates.into_iter().next()?;

        Some(Recommendation {
            domain: domain.clone(),
            slot: domain.next_slot(),
            reason: format!("Distant exploration (distance {} from your strengths)", distance),
            phase: self.phase,
            is_distant_interleave: true,
            distance_from_strength: distance,
            priority: DISTANT_PRIORITY,
        })
    }

    /// Most-read strength domain outside the cooldown, falling back to hubs.
    pub fn find_strength_domain(
        &self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
    ) -> Option<Recommendation> {
        let available = || domains.iter().filter(|d| !recent_domain_ids.contains(&d.id));

        let mut candidates: Vec<&Domain> = available().filter(|d| d.is_strength()).collect();
        if candidates.is_empty() {
            candidates = available().filter(|d| d.is_hub).collect();
        }

        candidates.sort_by(|a, b| b.books_read.cmp(&a.books_read).then_with(|| a.id.cmp(&b.id)));
        let best = candidates.into_iter().next()?;

        let reason = if best.is_expert {
            "Deepening strength area"
        } else {
            "Continuing hub completion"
        };

        Some(Recommendation {
            domain: best.clone(),
            slot: best.next_slot(),
            reason: reason.to_string(),
            phase: self.phase,
            is_distant_interleave: false,
            distance_from_strength: 0,
            priority: STRENGTH_PRIORITY,
        })
    }

    fn hub_reason(&self, hub: &Domain) -> String {
        let slot = hub.next_slot();
        if hub.books_read == 0 {
            let remaining = self.hub_target_books.saturating_sub(hub.books_read);
            format!("Start hub domain with {} slot ({} books to complete)", slot, remaining)
        } else {
            format!(
                "Continue hub ({}/{}), next: {} slot",
                hub.books_read, self.hub_target_books, slot
            )
        }
    }
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new(&TraversalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_domain::{DomainStatus, StudySlot};

    fn hub(id: &str, books: u32) -> Domain {
        let status = if books == 0 { DomainStatus::Untouched } else { DomainStatus::Surveying };
        Domain::new(id, format!("Hub {}", id), &id[..2], "Branch")
            .with_hub(true)
            .with_books_read(books)
            .with_status(status)
    }

    fn plain(id: &str) -> Domain {
        Domain::new(id, format!("Domain {}", id), &id[..2], "Branch")
    }

    #[test]
    fn test_weekday_index() {
        // 2026-10-12 is a Monday
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()), 0);
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()), 6);
    }

    #[test]
    fn test_engine_copies_config() {
        let config = TraversalConfig {
            current_phase: TraversalPhase::Bisociation,
            hub_target_books: 6,
            max_domain_repeat_window: 7,
            bisociation_min_distance: 4,
            distant_interleave_day: 2,
        };
        let engine = TraversalEngine::new(&config);
        assert_eq!(engine.phase(), TraversalPhase::Bisociation);
        assert_eq!(engine.hub_target_books(), 6);
        assert_eq!(engine.cooldown_days(), 7);
        assert_eq!(engine.min_distant_distance(), 4);
        assert_eq!(engine.distant_interleave_day(), 2);
    }

    #[test]
    fn test_hub_reasons() {
        let engine = TraversalEngine::default();

        let rec = engine.recommend_next(&[hub("01.02", 0)], &[], 0).unwrap();
        assert_eq!(rec.reason, "Start hub domain with Foundation slot (4 books to complete)");
        assert_eq!(rec.slot, StudySlot::Foundation);

        let rec = engine.recommend_next(&[hub("01.02", 1)], &[], 0).unwrap();
        assert_eq!(rec.reason, "Continue hub (1/4), next: Heresy slot");
        assert_eq!(rec.priority, 0);
    }

    #[test]
    fn test_hub_ties_break_on_id() {
        let engine = TraversalEngine::default();
        let domains = vec![hub("05.01", 1), hub("03.02", 1)];
        let rec = engine.recommend_next(&domains, &[], 0).unwrap();
        assert_eq!(rec.domain.id.as_str(), "03.02");
    }

    #[test]
    fn test_hub_cooldown_excludes_recent() {
        let engine = TraversalEngine::default();
        let domains = vec![hub("02.04", 3), hub("01.02", 0)];
        let rec = engine
            .recommend_next(&domains, &[DomainId::new("02.04")], 0)
            .unwrap();
        assert_eq!(rec.domain.id.as_str(), "01.02");
    }

    #[test]
    fn test_distant_defaults_to_engineering() {
        let engine = TraversalEngine::default();
        // Nothing read: 07 is the assumed strength, 15 sits at distance 4 from it.
        let domains = vec![plain("15.01"), plain("03.01"), plain("06.02")];
        let rec = engine.find_distant_domain(&domains, &[]).unwrap();
        assert_eq!(rec.domain.id.as_str(), "15.01");
        assert_eq!(rec.distance_from_strength, 4);
        assert_eq!(rec.reason, "Distant exploration (distance 4 from your strengths)");
        assert_eq!(rec.priority, 10);
        assert!(rec.is_distant_interleave);
    }

    #[test]
    fn test_distant_prefers_untouched_on_equal_distance() {
        let engine = TraversalEngine::default();
        let domains = vec![
            plain("15.01").with_status(DomainStatus::Surveying).with_books_read(1),
            plain("15.02"),
        ];
        let rec = engine.find_distant_domain(&domains, &[]).unwrap();
        assert_eq!(rec.domain.id.as_str(), "15.02");
    }

    #[test]
    fn test_distant_uses_min_distance_over_all_strengths() {
        let engine = TraversalEngine::default();
        // Strengths in 07 and 06: 15 is 4 from 07 but only 1 from 06.
        let domains = vec![
            plain("07.09").with_expert(true),
            plain("06.01").with_books_read(2),
            plain("15.01"),
        ];
        assert!(engine.find_distant_domain(&domains, &[]).is_none());
    }

    #[test]
    fn test_strength_falls_back_to_hubs() {
        let engine = TraversalEngine::default();
        let domains = vec![hub("01.02", 1), hub("02.04", 0), plain("15.01")];
        let rec = engine.find_strength_domain(&domains, &[]).unwrap();
        assert_eq!(rec.domain.id.as_str(), "01.02");
        assert_eq!(rec.reason, "Continuing hub completion");
        assert_eq!(rec.priority, 5);
    }

    #[test]
    fn test_strength_hub_fallback_skips_recent() {
        let engine = TraversalEngine::default();
        let domains = vec![hub("01.02", 1), hub("02.04", 0), plain("15.01")];

        let rec = engine
            .find_strength_domain(&domains, &[DomainId::new("01.02")])
            .unwrap();
        assert_eq!(rec.domain.id.as_str(), "02.04");

        let all_recent = [DomainId::new("01.02"), DomainId::new("02.04")];
        assert!(engine.find_strength_domain(&domains, &all_recent).is_none());
    }

    #[test]
    fn test_strength_reason_for_expert() {
        let engine = TraversalEngine::default();
        let domains = vec![plain("07.09").with_expert(true).with_books_read(10)];
        let rec = engine.find_strength_domain(&domains, &[]).unwrap();
        assert_eq!(rec.reason, "Deepening strength area");
    }

    #[test]
    fn test_problem_driven_skips_interleave() {
        let mut engine = TraversalEngine::default().with_interleave_day(0);
        engine.set_phase(TraversalPhase::ProblemDriven);

        let domains = vec![hub("01.02", 1), plain("15.01")];
        // Interleave day is 0 and problem-driven passes 0 through, so the
        // distant pick wins here; on any other day hubs still lead.
        let rec = engine.recommend_next(&domains, &[], 4).unwrap();
        assert!(rec.is_distant_interleave);

        let mut engine = TraversalEngine::default();
        engine.set_phase(TraversalPhase::ProblemDriven);
        let rec = engine.recommend_next(&domains, &[], 6).unwrap();
        assert_eq!(rec.domain.id.as_str(), "01.02");
        assert_eq!(rec.phase, TraversalPhase::HubCompletion);
    }

    #[test]
    fn test_empty_input_recommends_nothing() {
        let mut engine = TraversalEngine::default();
        assert!(engine.recommend_next(&[], &[], 0).is_none());
        engine.set_phase(TraversalPhase::Bisociation);
        assert!(engine.recommend_next(&[], &[], 1).is_none());
        assert!(engine.recommend_next(&[], &[], 4).is_none());
    }

    #[test]
    fn test_check_hub_completion_with_no_hubs() {
        let engine = TraversalEngine::default();
        assert!(engine.check_hub_completion(&[plain("15.01")]));
    }
}
