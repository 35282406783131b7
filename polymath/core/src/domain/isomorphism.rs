// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Concepts that recur across domains under different names.
//!
//! Each shared entry pulls two domains closer in [`catalog_domain_distance`].

use serde::Serialize;

use super::distance::domain_distance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Isomorphism {
    pub concept: &'static str,
    pub description: &'static str,
    /// `(domain id, local name)` in catalog order.
    pub appearances: &'static [(&'static str, &'static str)],
}

impl Isomorphism {
    pub fn mentions(&self, domain_id: &str) -> bool {
        self.appearances.iter().any(|(id, _)| *id == domain_id)
    }

    /// What the concept is called inside `domain_id`.
    pub fn local_name(&self, domain_id: &str) -> Option<&'static str> {
        self.appearances
            .iter()
            .find(|(id, _)| *id == domain_id)
            .map(|(_, name)| *name)
    }
}

pub const KNOWN_ISOMORPHISMS: &[Isomorphism] = &[
    Isomorphism {
        concept: "entropy",
        description: "Measure of disorder, uncertainty, or information content",
        appearances: &[
            ("01.02", "Thermodynamic entropy"),
            ("03.07", "Information entropy (Shannon)"),
            ("05.01", "Social entropy (disorder)"),
            ("09.02", "Market entropy (inefficiency)"),
        ],
    },
    Isomorphism {
        concept: "equilibrium",
        description: "Stable state where forces/pressures are balanced",
        appearances: &[
            ("01.01", "Mechanical equilibrium"),
            ("02.02", "Ecological equilibrium"),
            ("05.01", "Economic equilibrium"),
            ("03.09", "Nash equilibrium"),
        ],
    },
    Isomorphism {
        concept: "fitness",
        description: "Measure of adaptation/optimization success",
        appearances: &[
            ("02.04", "Biological fitness (reproduction)"),
            ("07.09", "Fitness function (ML optimization)"),
            ("09.02", "Market fitness (competitive advantage)"),
            ("03.10", "Decision fitness (utility)"),
        ],
    },
    Isomorphism {
        concept: "network_effects",
        description: "Value increases with connections/participants",
        appearances: &[
            ("03.06", "Graph connectivity"),
            ("05.01", "Social capital"),
            ("09.02", "Platform economics"),
            ("07.10", "Network topology"),
        ],
    },
    Isomorphism {
        concept: "feedback_loops",
        description: "Output affects input, creating self-reinforcing or self-correcting dynamics",
        appearances: &[
            ("07.14", "Control systems feedback"),
            ("02.02", "Ecological feedback"),
            ("05.01", "Economic feedback (boom/bust)"),
            ("04.01", "Cognitive feedback"),
        ],
    },
    Isomorphism {
        concept: "phase_transitions",
        description: "Sudden qualitative changes at critical thresholds",
        appearances: &[
            ("01.02", "Physical phase transitions"),
            ("05.07", "Social tipping points"),
            ("09.02", "Market regime changes"),
            ("04.05", "Cognitive state changes"),
        ],
    },
    Isomorphism {
        concept: "selection_pressure",
        description: "Environmental forces that favor certain variants over others",
        appearances: &[
            ("02.04", "Natural selection"),
            ("09.02", "Market selection"),
            ("05.06", "Organizational selection"),
            ("06.04", "Cultural selection"),
        ],
    },
    Isomorphism {
        concept: "signal_noise",
        description: "Distinguishing meaningful patterns from random variation",
        appearances: &[
            ("03.07", "Information signal/noise"),
            ("07.06", "Telecommunications SNR"),
            ("09.02", "Market signals"),
            ("04.01", "Cognitive signal detection"),
        ],
    },
];

pub fn isomorphisms_for(domain_id: &str) -> Vec<&'static Isomorphism> {
    KNOWN_ISOMORPHISMS.iter().filter(|iso| iso.mentions(domain_id)).collect()
}

pub fn shared_isomorphism_count(domain_a: &str, domain_b: &str) -> u32 {
    let shared = KNOWN_ISOMORPHISMS
        .iter()
        .filter(|iso| iso.mentions(domain_a) && iso.mentions(domain_b))
        .count();
    shared as u32
}

/// [`domain_distance`] with the shared count taken from [`KNOWN_ISOMORPHISMS`].
pub fn catalog_domain_distance(domain_a: &str, domain_b: &str) -> f64 {
    domain_distance(domain_a, domain_b, shared_isomorphism_count(domain_a, domain_b))
}
