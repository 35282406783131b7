// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Bisociation Generator
//!
//! Pairs a familiar "anchor" domain with a far one and attaches a synthesis
//! question to bridge them.
//!
//! # Flow
//!
//! 1. Resolve the anchor: explicit id, else a random strength domain, else a random hub
//! 2. Distant candidates at `min_distance`, retried once at 2
//! 3. Drop recent ids, score, pick at random among the top five
//! 4. Render a random synthesis prompt and the "why paired" line
//!
//! Randomness comes from the generator's `R: Rng`. Production uses the
//! thread-local source; tests pass a seeded `StdRng`.

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::application::synthesis_prompts::SynthesisPromptEngine;
use crate::domain::distance::{branch_distance, find_distant_domains, MAX_BRANCH_DISTANCE};
use crate::domain::knowledge_domain::{Domain, DomainId};
use crate::domain::recommendation::BisociationPair;

/// Threshold used for the single retry when nothing clears `min_distance`.
pub const RELAXED_MIN_DISTANCE: u8 = 2;

/// How many of the best-scored partners the random pick draws from.
pub const TOP_CANDIDATES: usize = 5;

pub struct BisociationGenerator<R = ThreadRng> {
    rng: R,
    prompts: SynthesisPromptEngine,
}

impl BisociationGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for BisociationGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BisociationGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            prompts: SynthesisPromptEngine::new(),
        }
    }

    /// Swap in a different question bank.
    pub fn with_prompts(mut self, prompts: SynthesisPromptEngine) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn prompts(&self) -> &SynthesisPromptEngine {
        &self.prompts
    }

    /// Pair an anchor with a distant domain.
    ///
    /// An explicit `anchor_domain_id` is used even when it was read recently;
    /// if it is not in `domains` there is no pair. Without one, the anchor is
    /// drawn from non-recent strength domains, then from all hubs.
    pub fn generate_pair(
        &mut self,
        domains: &[Domain],
        recent_domain_ids: &[DomainId],
        min_distance: u8,
        anchor_domain_id: Option<&DomainId>,
    ) -> Option<BisociationPair> {
        let anchor = match anchor_domain_id {
            Some(id) => {
                let found = domains.iter().find(|d| &d.id == id);
                if found.is_none() {
                    debug!(anchor_id = %id, "Requested anchor not found");
                }
                found?
            }
            None => self.pick_anchor(domains, recent_domain_ids)?,
        };

        let all_ids = domains.iter().map(|d| d.id.as_str());
        let mut distant = find_distant_domains(anchor.id.as_str(), all_ids.clone(), min_distance);
        if distant.is_empty() && min_distance > RELAXED_MIN_DISTANCE {
            debug!(
                anchor_id = %anchor.id,
                min_distance,
                "No distant candidates, relaxing threshold"
            );
            distant = find_distant_domains(anchor.id.as_str(), all_ids, RELAXED_MIN_DISTANCE);
        }

        let mut scored: Vec<(&Domain, u8, u32)> = distant
            .into_iter()
            .filter(|(id, _)| !recent_domain_ids.contains(id))
            .filter_map(|(id, distance)| {
                let domain = domains.iter().find(|d| d.id == id)?;
                Some((domain, distance, partner_score(domain, distance)))
            })
            .collect();

        // Stable: equal scores keep the distance-then-id order.
        scored.sort_by(|a, b| b.2.cmp(&a.2));
        scored.truncate(TOP_CANDIDATES);

        let &(partner, distance, score) = scored.choose(&mut self.rng)?;
        debug!(
            anchor_id = %anchor.id,
            distant_id = %partner.id,
            distance,
            score,
            "Bisociation pair selected"
        );

        let synthesis_prompt = self.random_prompt(&anchor.name, &partner.name)?;

        Some(BisociationPair {
            anchor: anchor.clone(),
            distant: partner.clone(),
            distance,
            synthesis_prompt,
            why_paired: why_paired(anchor, partner, distance),
        })
    }

    /// `n` distinct questions for the pair, capped at the bank size.
    pub fn suggest_synthesis_questions(&mut self, anchor: &Domain, distant: &Domain, n: usize) -> Vec<String> {
        let templates = self.prompts.templates();
        let picked: Vec<&String> = templates.choose_multiple(&mut self.rng, n).collect();

        picked
            .into_iter()
            .filter_map(|template| match self.prompts.render(template, &anchor.name, &distant.name) {
                Ok(rendered) => Some(rendered),
                Err(e) => {
                    warn!("Skipping synthesis template: {:#}", e);
                    None
                }
            })
            .collect()
    }

    fn pick_anchor<'a>(&mut self, domains: &'a [Domain], recent_domain_ids: &[DomainId]) -> Option<&'a Domain> {
        let mut candidates: Vec<&Domain> = domains
            .iter()
            .filter(|d| d.is_strength() && !recent_domain_ids.contains(&d.id))
            .collect();

        // Hub fallback does not look at recency.
        if candidates.is_empty() {
            candidates = domains.iter().filter(|d| d.is_hub).collect();
        }

        candidates.choose(&mut self.rng).copied()
    }

    fn random_prompt(&mut self, anchor: &str, distant: &str) -> Option<String> {
        let template = self.prompts.templates().choose(&mut self.rng)?;
        match self.prompts.render(template, anchor, distant) {
            Ok(prompt) => Some(prompt),
            Err(e) => {
                warn!("Failed to render synthesis prompt: {:#}", e);
                None
            }
        }
    }
}

/// `distance * 10`, plus 5 when untouched and 3 when no books are read.
fn partner_score(domain: &Domain, distance: u8) -> u32 {
    let mut score = u32::from(distance) * 10;
    if domain.is_untouched() {
        score += 5;
    }
    if domain.books_read == 0 {
        score += 3;
    }
    score
}

fn why_paired(anchor: &Domain, distant: &Domain, distance: u8) -> String {
    let mut reasons = Vec::with_capacity(3);

    if anchor.is_expert {
        reasons.push(format!("Your expertise in {}", anchor.name));
    } else if anchor.books_read >= 2 {
        reasons.push(format!("Your progress in {} ({} books)", anchor.name, anchor.books_read));
    } else if anchor.is_hub {
        reasons.push(format!("Hub domain {}", anchor.name));
    }

    if distant.is_untouched() {
        reasons.push(format!("completely unexplored {}", distant.name));
    } else {
        reasons.push(format!("distant {}", distant.name));
    }

    reasons.push(format!("maximum conceptual distance ({})", distance));
    reasons.join(" + ")
}

/// Every unordered pair of distinct domains at the maximum branch distance.
pub fn all_max_distance_pairs(domains: &[Domain]) -> Vec<(Domain, Domain, u8)> {
    let mut seen: HashSet<(&DomainId, &DomainId)> = HashSet::new();
    let mut pairs = Vec::new();

    for a in domains {
        for b in domains {
            if a.id == b.id {
                continue;
            }
            let key = if a.id < b.id { (&a.id, &b.id) } else { (&b.id, &a.id) };
            if seen.contains(&key) {
                continue;
            }

            let distance = branch_distance(a.branch_id.as_str(), b.branch_id.as_str());
            if distance == MAX_BRANCH_DISTANCE {
                seen.insert(key);
                pairs.push((a.clone(), b.clone(), distance));
            }
        }
    }

    pairs
}
