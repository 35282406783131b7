// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Pair generation with a seeded random source.

use polymath_core::application::bisociation::{all_max_distance_pairs, BisociationGenerator};
use polymath_core::domain::{Domain, DomainId, DomainStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn seeded(seed: u64) -> BisociationGenerator<StdRng> {
    BisociationGenerator::with_rng(StdRng::seed_from_u64(seed))
}

fn domain(id: &str, name: &str) -> Domain {
    Domain::new(id, name, &id[..2], "Branch")
}

fn sample_domains() -> Vec<Domain> {
    vec![
        domain("02.04", "Genetics").with_hub(true).with_books_read(2).with_status(DomainStatus::Surveyed),
        domain("01.02", "Quantum Mechanics").with_hub(true),
        domain("07.09", "AI Machine Learning").with_expert(true).with_books_read(10).with_status(DomainStatus::Expert),
        domain("15.01", "Comparative Religion"),
        domain("03.09", "Statistics").with_hub(true).with_books_read(4).with_status(DomainStatus::Deepening),
    ]
}

/// Anchor 07.09 with partners at distances 4 (15.xx) and 3 (06.xx).
fn scoring_domains() -> Vec<Domain> {
    vec![
        domain("07.09", "AI Machine Learning").with_expert(true).with_books_read(10).with_status(DomainStatus::Expert),
        domain("15.01", "Comparative Religion"),
        domain("15.02", "Systematic Theology"),
        domain("15.03", "Mysticism"),
        domain("06.01", "Philosophy"),
        domain("06.02", "History").with_books_read(1).with_status(DomainStatus::Surveying),
        domain("06.03", "Literature"),
        domain("08.01", "Clinical Medicine"),
    ]
}

#[test]
fn test_explicit_anchor_is_always_used() {
    let domains = sample_domains();
    let anchor_id = DomainId::new("02.04");
    // Recency does not apply to an explicit anchor.
    let recent = vec![anchor_id.clone()];

    for seed in 0..20 {
        let pair = seeded(seed)
            .generate_pair(&domains, &recent, 3, Some(&anchor_id))
            .unwrap();
        assert_eq!(pair.anchor.id, anchor_id);
        assert_eq!(pair.distant.id.as_str(), "15.01");
        assert_eq!(pair.distance, 4);
        assert_eq!(
            pair.why_paired,
            "Your progress in Genetics (2 books) + completely unexplored Comparative Religion + maximum conceptual distance (4)"
        );
    }
}

#[test]
fn test_unknown_anchor_yields_nothing() {
    let pair = seeded(7).generate_pair(&sample_domains(), &[], 3, Some(&DomainId::new("09.99")));
    assert!(pair.is_none());
}

#[test]
fn test_same_seed_same_pair() {
    let domains = scoring_domains();

    let a = seeded(42).generate_pair(&domains, &[], 3, None).unwrap();
    let b = seeded(42).generate_pair(&domains, &[], 3, None).unwrap();

    assert_eq!(a.anchor.id, b.anchor.id);
    assert_eq!(a.distant.id, b.distant.id);
    assert_eq!(a.synthesis_prompt, b.synthesis_prompt);
}

#[test]
fn test_partner_drawn_from_top_five() {
    let domains = scoring_domains();
    let top_five: HashSet<&str> = ["15.01", "15.02", "15.03", "06.01", "06.03"].into_iter().collect();

    for seed in 0..50 {
        let pair = seeded(seed).generate_pair(&domains, &[], 3, None).unwrap();
        assert_eq!(pair.anchor.id.as_str(), "07.09");
        assert!(
            top_five.contains(pair.distant.id.as_str()),
            "seed {} picked {}",
            seed,
            pair.distant.id
        );
    }
}

#[test]
fn test_recent_partners_are_excluded() {
    let domains = scoring_domains();
    let recent = vec![DomainId::new("15.01"), DomainId::new("15.02")];

    for seed in 0..50 {
        let pair = seeded(seed).generate_pair(&domains, &recent, 3, None).unwrap();
        assert!(!recent.contains(&pair.distant.id));
    }
}

#[test]
fn test_relaxed_retry_at_distance_two() {
    // Branch 05 is never more than 3 away from anything.
    let domains = vec![
        domain("05.01", "Economics").with_expert(true),
        domain("01.01", "Classical Mechanics"),
        domain("03.01", "Logic"),
    ];

    let pair = seeded(1).generate_pair(&domains, &[], 4, None).unwrap();
    assert_eq!(pair.distant.id.as_str(), "01.01");
    assert_eq!(pair.distance, 2);
}

#[test]
fn test_no_partner_even_after_retry() {
    let domains = vec![
        domain("05.01", "Economics").with_expert(true),
        domain("03.01", "Logic"),
    ];
    assert!(seeded(1).generate_pair(&domains, &[], 4, None).is_none());
}

#[test]
fn test_no_anchor_candidates() {
    let domains = vec![domain("15.01", "Comparative Religion"), domain("07.01", "Civil Engineering")];
    assert!(seeded(3).generate_pair(&domains, &[], 3, None).is_none());
}

#[test]
fn test_hub_anchor_fallback_ignores_recency() {
    let domains = vec![
        domain("01.02", "Quantum Mechanics").with_hub(true),
        domain("15.01", "Comparative Religion"),
    ];
    let recent = vec![DomainId::new("01.02")];

    let pair = seeded(9).generate_pair(&domains, &recent, 3, None).unwrap();
    assert_eq!(pair.anchor.id.as_str(), "01.02");
    assert!(pair.why_paired.starts_with("Hub domain Quantum Mechanics"));
}

#[test]
fn test_synthesis_prompt_comes_from_bank() {
    let domains = sample_domains();
    let anchor_id = DomainId::new("07.09");

    let mut generator = seeded(11);
    let rendered: HashSet<String> = (0..generator.prompts().len())
        .map(|i| generator.prompts().render_at(i, "AI Machine Learning", "Comparative Religion").unwrap())
        .collect();

    for _ in 0..10 {
        let pair = generator.generate_pair(&domains, &[], 3, Some(&anchor_id)).unwrap();
        assert!(rendered.contains(&pair.synthesis_prompt), "unexpected prompt {}", pair.synthesis_prompt);
    }
}

#[test]
fn test_suggest_synthesis_questions() {
    let domains = sample_domains();
    let mut generator = seeded(5);

    let three = generator.suggest_synthesis_questions(&domains[2], &domains[3], 3);
    assert_eq!(three.len(), 3);
    assert_eq!(three.iter().collect::<HashSet<_>>().len(), 3);

    let capped = generator.suggest_synthesis_questions(&domains[2], &domains[3], 100);
    assert_eq!(capped.len(), 15);
    assert_eq!(capped.iter().collect::<HashSet<_>>().len(), 15);

    assert!(generator.suggest_synthesis_questions(&domains[2], &domains[3], 0).is_empty());
}

#[test]
fn test_all_max_distance_pairs() {
    let pairs = all_max_distance_pairs(&sample_domains());

    let mut seen = HashSet::new();
    for (a, b, distance) in &pairs {
        assert_eq!(*distance, 4);
        assert_ne!(a.id, b.id);
        let key = if a.id < b.id { (a.id.clone(), b.id.clone()) } else { (b.id.clone(), a.id.clone()) };
        assert!(seen.insert(key), "pair {} / {} returned twice", a.id, b.id);
    }

    // 15 sits at 4 from 01, 02 and 07; 03 is only 3 away.
    assert_eq!(pairs.len(), 3);
    assert!(pairs.iter().all(|(a, b, _)| a.id.as_str() == "15.01" || b.id.as_str() == "15.01"));
}
