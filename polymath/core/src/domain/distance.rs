// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Branch Distance Model
//!
//! Hand-curated epistemic distance between taxonomy branches.
//!
//! | Distance | Meaning |
//! |----------|---------|
//! | 0 | same branch |
//! | 1 | adjacent, closely related fields |
//! | 2 | moderate, some shared concepts |
//! | 3 | far, few connections |
//! | 4 | maximum, essentially unrelated |
//!
//! The matrix is editorial data, not the output of a formula, and is embedded
//! literally. Lookups for codes outside the taxonomy return
//! [`MAX_BRANCH_DISTANCE`] instead of failing.

use super::branch::{branch_index, normalize_branch_code, BRANCHES};
use super::knowledge_domain::DomainId;

/// Distance returned for the farthest pairs and for any unmapped pair.
pub const MAX_BRANCH_DISTANCE: u8 = 4;

/// Each shared isomorphism pulls two domains this much closer.
pub const ISOMORPHISM_DISCOUNT: f64 = 0.5;

/// Rows and columns follow [`BRANCHES`] order ("01".."15"). Symmetric, zero diagonal.
#[rustfmt::skip]
const DISTANCE_MATRIX: [[u8; 15]; 15] = [
    //01 02 03 04 05 06 07 08 09 10 11 12 13 14 15
    [0, 1, 1, 2, 2, 3, 1, 2, 3, 3, 3, 3, 2, 2, 4], // 01
    [1, 0, 2, 2, 2, 3, 2, 1, 3, 3, 3, 3, 1, 3, 4], // 02
    [1, 2, 0, 2, 1, 2, 1, 2, 1, 2, 2, 2, 2, 2, 3], // 03
    [2, 2, 2, 0, 1, 2, 2, 1, 2, 1, 2, 2, 3, 3, 3], // 04
    [2, 2, 1, 1, 0, 1, 2, 2, 2, 2, 2, 1, 2, 3, 2], // 05
    [3, 3, 2, 2, 1, 0, 3, 3, 2, 2, 1, 1, 3, 3, 1], // 06
    [1, 2, 1, 2, 2, 3, 0, 1, 2, 2, 2, 2, 2, 1, 4], // 07
    [2, 1, 2, 1, 2, 3, 1, 0, 2, 2, 3, 2, 2, 3, 3], // 08
    [3, 3, 1, 2, 2, 2, 2, 2, 0, 2, 2, 1, 2, 2, 3], // 09
    [3, 3, 2, 1, 2, 2, 2, 2, 2, 0, 2, 2, 3, 3, 2], // 10
    [3, 3, 2, 2, 2, 1, 2, 3, 2, 2, 0, 2, 3, 3, 2], // 11
    [3, 3, 2, 2, 1, 1, 2, 2, 1, 2, 2, 0, 2, 3, 2], // 12
    [2, 1, 2, 3, 2, 3, 2, 2, 2, 3, 3, 2, 0, 2, 3], // 13
    [2, 3, 2, 3, 3, 3, 1, 3, 2, 3, 3, 3, 2, 0, 4], // 14
    [4, 4, 3, 3, 2, 1, 4, 3, 3, 2, 2, 2, 3, 4, 0], // 15
];

/// Branch prefix of a domain id ("02.04" -> "02").
fn branch_prefix(domain_id: &str) -> &str {
    domain_id.split('.').next().unwrap_or(domain_id)
}

/// Distance between two branch codes in `0..=4`.
///
/// Both codes are zero-padded to two digits first. Identical codes are 0;
/// codes missing from the taxonomy fall back to [`MAX_BRANCH_DISTANCE`].
pub fn branch_distance(a: &str, b: &str) -> u8 {
    let a = normalize_branch_code(a);
    let b = normalize_branch_code(b);

    if a == b {
        return 0;
    }

    match (branch_index(&a), branch_index(&b)) {
        (Some(i), Some(j)) => DISTANCE_MATRIX[i][j],
        _ => MAX_BRANCH_DISTANCE,
    }
}

/// Distance between two domains: their branch distance less
/// [`ISOMORPHISM_DISCOUNT`] per shared isomorphism, floored at 0.0.
///
/// The shared count comes from the caller; nothing here looks concepts up.
pub fn domain_distance(domain_a: &str, domain_b: &str, shared_isomorphisms: u32) -> f64 {
    let base = f64::from(branch_distance(branch_prefix(domain_a), branch_prefix(domain_b)));
    (base - ISOMORPHISM_DISCOUNT * f64::from(shared_isomorphisms)).max(0.0)
}

/// Candidates at least `min_distance` away from `from_id`, excluding `from_id`
/// itself, ordered by distance descending then id ascending.
pub fn find_distant_domains<I, S>(from_id: &str, candidate_ids: I, min_distance: u8) -> Vec<(DomainId, u8)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let from_branch = branch_prefix(from_id);

    let mut results: Vec<(DomainId, u8)> = candidate_ids
        .into_iter()
        .filter(|id| id.as_ref() != from_id)
        .filter_map(|id| {
            let id = id.as_ref();
            let distance = branch_distance(from_branch, branch_prefix(id));
            (distance >= min_distance).then(|| (DomainId::new(id), distance))
        })
        .collect();

    results.sort_by(|(id_a, dist_a), (id_b, dist_b)| {
        dist_b.cmp(dist_a).then_with(|| id_a.cmp(id_b))
    });

    results
}

/// Branch codes at exactly [`MAX_BRANCH_DISTANCE`] from `from_branch`.
pub fn max_distant_branches(from_branch: &str) -> Vec<&'static str> {
    BRANCHES
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| branch_distance(from_branch, code) == MAX_BRANCH_DISTANCE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        for (a, _) in BRANCHES.iter() {
            assert_eq!(branch_distance(a, a), 0, "diagonal for {a}");
            for (b, _) in BRANCHES.iter() {
                assert_eq!(branch_distance(a, b), branch_distance(b, a), "{a} vs {b}");
                assert!(branch_distance(a, b) <= MAX_BRANCH_DISTANCE);
            }
        }
    }

    #[test]
    fn test_fixture_values() {
        assert_eq!(branch_distance("01", "15"), 4);
        assert_eq!(branch_distance("01", "02"), 1);
        assert_eq!(branch_distance("03", "07"), 1);
        assert_eq!(branch_distance("02", "04"), 2);
        assert_eq!(branch_distance("06", "15"), 1);
        assert_eq!(branch_distance("14", "15"), 4);
    }

    #[test]
    fn test_normalizes_single_digit_codes() {
        assert_eq!(branch_distance("1", "15"), 4);
        assert_eq!(branch_distance("7", "07"), 0);
    }

    #[test]
    fn test_unmapped_pair_defaults_to_max() {
        assert_eq!(branch_distance("01", "16"), MAX_BRANCH_DISTANCE);
        assert_eq!(branch_distance("xx", "03"), MAX_BRANCH_DISTANCE);
        assert_eq!(branch_distance("99", "99"), 0);
    }

    #[test]
    fn test_domain_distance_discount() {
        assert_eq!(domain_distance("01.02", "15.01", 0), 4.0);
        assert_eq!(domain_distance("01.02", "15.01", 1), 3.5);
        assert_eq!(domain_distance("01.02", "15.01", 3), 2.5);
        assert_eq!(domain_distance("01.02", "02.04", 1), 0.5);
        assert_eq!(domain_distance("01.02", "02.04", 5), 0.0);
        assert_eq!(domain_distance("07.09", "07.10", 2), 0.0);
    }

    #[test]
    fn test_domain_distance_never_negative() {
        for (a, _) in BRANCHES.iter() {
            for (b, _) in BRANCHES.iter() {
                for shared in 0..12 {
                    let from = format!("{a}.01");
                    let to = format!("{b}.02");
                    assert!(domain_distance(&from, &to, shared) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_find_distant_domains_ordering() {
        let candidates = ["15.08", "07.09", "06.01", "15.01", "14.02", "11.03", "01.02"];
        let results = find_distant_domains("01.02", candidates, 3);

        let ids: Vec<&str> = results.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["15.01", "15.08", "06.01", "11.03"]);
        assert!(results.iter().all(|(_, d)| *d >= 3));
        assert!(!ids.contains(&"01.02"));
    }

    #[test]
    fn test_find_distant_domains_empty_when_threshold_unreachable() {
        let results = find_distant_domains("03.01", ["07.01", "05.02"], 3);
        assert!(results.is_empty());
    }

    #[test]
    fn test_max_distant_branches() {
        assert_eq!(max_distant_branches("15"), vec!["01", "02", "07", "14"]);
        assert_eq!(max_distant_branches("1"), vec!["15"]);
        assert!(max_distant_branches("03").is_empty());
    }
}
