// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Hub Book Reference
//!
//! Curated reading lists for the hub domains, grouped by study slot. The
//! traversal engine names a domain and slot; this table names the book.
//!
//! | Hub | Domain |
//! |-----|--------|
//! | 02.04 | Evolutionary Biology |
//! | 01.02 | Thermodynamics |
//! | 03.06 | Network Theory |
//! | 03.04 | Probability Statistics |
//! | 03.07 | Information Theory |
//! | 03.09 | Game Theory |
//! | 07.14 | Systems Engineering |

use serde::Serialize;
use std::fmt;

use super::knowledge_domain::StudySlot;
use self::BookDensity::{High, Low, Medium, VeryHigh};
use super::knowledge_domain::StudySlot::{Bridge, Foundation, Frontier, Heresy};

/// How hard a book is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookDensity {
    Low,
    Medium,
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl fmt::Display for BookDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BookDensity::Low => "low",
            BookDensity::Medium => "medium",
            BookDensity::High => "high",
            BookDensity::VeryHigh => "very high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookRecommendation {
    pub title: &'static str,
    pub author: &'static str,
    pub year: u16,
    pub why: &'static str,
    pub density: BookDensity,
    pub pages: u32,
    pub slot: StudySlot,
    /// Domain ids a bridge book connects the hub to. Empty otherwise.
    pub bridge_to: &'static [&'static str],
}

impl BookRecommendation {
    const fn new(
        title: &'static str,
        author: &'static str,
        year: u16,
        why: &'static str,
        density: BookDensity,
        pages: u32,
        slot: StudySlot,
    ) -> Self {
        Self {
            title,
            author,
            year,
            why,
            density,
            pages,
            slot,
            bridge_to: &[],
        }
    }

    const fn bridging(self, bridge_to: &'static [&'static str]) -> Self {
        Self { bridge_to, ..self }
    }
}

#[rustfmt::skip]
const HUB_BOOKS: &[(&str, &[BookRecommendation])] = &[
    ("02.04", &[
        BookRecommendation::new("The Selfish Gene", "Richard Dawkins", 1976,
            "Gene-centered view; introduces replicator/vehicle distinction", Medium, 360, Foundation),
        BookRecommendation::new("Darwin's Dangerous Idea", "Daniel Dennett", 1995,
            "Evolution as universal acid; philosophical implications", High, 586, Foundation),
        BookRecommendation::new("The Extended Phenotype", "Richard Dawkins", 1982,
            "Challenges organism-centered thinking", High, 307, Heresy),
        BookRecommendation::new("Not By Genes Alone", "Peter Richerson, Robert Boyd", 2005,
            "Cultural evolution challenges pure gene selection", High, 332, Heresy),
        BookRecommendation::new("The Origins of Order", "Stuart Kauffman", 1993,
            "Self-organization + selection; complexity theory meets evolution", VeryHigh, 709, Frontier),
        BookRecommendation::new("The Evolution of Cooperation", "Robert Axelrod", 1984,
            "Game theory + evolution; Prisoner's Dilemma tournaments", Medium, 241, Bridge)
            .bridging(&["03.09", "05.08"]),
    ]),
    ("01.02", &[
        BookRecommendation::new("The Second Law", "Peter Atkins", 1984,
            "Accessible introduction to entropy and its implications", Medium, 230, Foundation),
        BookRecommendation::new("An Introduction to Thermal Physics", "Daniel Schroeder", 2000,
            "Textbook; statistical mechanics foundation", High, 422, Foundation),
        BookRecommendation::new("Into the Cool", "Eric Schneider, Dorion Sagan", 2005,
            "Non-equilibrium thermodynamics; life as dissipative structure", Medium, 362, Heresy),
        BookRecommendation::new("Information, Physics, and Computation", "Marc Mézard, Andrea Montanari", 2009,
            "Statistical physics meets information theory meets CS", VeryHigh, 568, Frontier),
        BookRecommendation::new("The Information", "James Gleick", 2011,
            "History connecting thermodynamics to information theory", Low, 526, Bridge)
            .bridging(&["03.07", "06.15"]),
    ]),
    ("03.06", &[
        BookRecommendation::new("Networks: An Introduction", "Mark Newman", 2010,
            "Comprehensive textbook; social, biological, technical networks", High, 772, Foundation),
        BookRecommendation::new("Linked", "Albert-László Barabási", 2002,
            "Accessible intro; scale-free networks, hubs", Low, 280, Foundation),
        BookRecommendation::new("Six Degrees", "Duncan Watts", 2003,
            "Challenges simple scale-free models; small world nuances", Medium, 374, Heresy),
        BookRecommendation::new("Network Science", "Albert-László Barabási", 2016,
            "Modern textbook; dynamic networks, spreading", High, 456, Frontier),
        BookRecommendation::new("Social and Economic Networks", "Matthew Jackson", 2008,
            "Game theory on networks; economic applications", High, 504, Bridge)
            .bridging(&["03.09", "05.01"]),
    ]),
    ("03.04", &[
        BookRecommendation::new("Probability Theory: The Logic of Science", "E.T. Jaynes", 2003,
            "Bayesian foundations; probability as extended logic", VeryHigh, 727, Foundation),
        BookRecommendation::new("All of Statistics", "Larry Wasserman", 2004,
            "Concise graduate overview; frequentist and Bayesian", High, 442, Foundation),
        BookRecommendation::new("The Black Swan", "Nassim Taleb", 2007,
            "Challenges normal distribution assumptions; fat tails", Medium, 366, Heresy),
        BookRecommendation::new("Information Theory, Inference, and Learning Algorithms", "David MacKay", 2003,
            "Connects probability to information theory and ML", High, 628, Bridge)
            .bridging(&["03.07", "07.09"]),
    ]),
    ("03.07", &[
        BookRecommendation::new("Elements of Information Theory", "Thomas Cover, Joy Thomas", 1991,
            "Standard textbook; entropy, channels, coding", VeryHigh, 748, Foundation),
        BookRecommendation::new("The Information", "James Gleick", 2011,
            "Historical and accessible; Shannon, Babbage, Turing", Low, 526, Foundation),
        BookRecommendation::new("Entropy and Information Theory", "Robert Gray", 1990,
            "Connects to probability and ergodic theory", VeryHigh, 332, Bridge)
            .bridging(&["03.04", "01.02"]),
    ]),
    ("03.09", &[
        BookRecommendation::new("Game Theory", "Drew Fudenberg, Jean Tirole", 1991,
            "Standard graduate text; complete coverage", VeryHigh, 579, Foundation),
        BookRecommendation::new("Thinking Strategically", "Avinash Dixit, Barry Nalebuff", 1991,
            "Accessible intro; business applications", Low, 393, Foundation),
        BookRecommendation::new("Behavioral Game Theory", "Colin Camerer", 2003,
            "Challenges rationality assumptions; experimental evidence", High, 550, Heresy),
        BookRecommendation::new("Algorithmic Game Theory", "Nisan et al.", 2007,
            "Computational complexity of game-theoretic solutions", VeryHigh, 754, Frontier),
        BookRecommendation::new("The Evolution of Cooperation", "Robert Axelrod", 1984,
            "Game theory meets evolutionary biology", Medium, 241, Bridge)
            .bridging(&["02.04"]),
    ]),
    ("07.14", &[
        BookRecommendation::new("Thinking in Systems", "Donella Meadows", 2008,
            "Accessible systems thinking primer; leverage points", Low, 218, Foundation),
        BookRecommendation::new("Systems Engineering Handbook", "INCOSE", 2015,
            "Industry standard reference; lifecycle processes", High, 290, Foundation),
        BookRecommendation::new("An Introduction to Cybernetics", "W. Ross Ashby", 1956,
            "Classic foundation; variety, feedback, control", High, 295, Heresy),
        BookRecommendation::new("The Fifth Discipline", "Peter Senge", 1990,
            "Systems thinking applied to organizations", Medium, 445, Bridge)
            .bridging(&["09.06", "05.06"]),
    ]),
];

/// Every curated book for a hub, in table order. Empty for other domains.
pub fn hub_books(domain_id: &str) -> &'static [BookRecommendation] {
    HUB_BOOKS
        .iter()
        .find(|(id, _)| *id == domain_id)
        .map(|(_, books)| *books)
        .unwrap_or(&[])
}

/// Curated books for one slot of a hub.
pub fn books_for_slot(domain_id: &str, slot: StudySlot) -> Vec<&'static BookRecommendation> {
    hub_books(domain_id).iter().filter(|b| b.slot == slot).collect()
}

/// Books from any hub that bridge into `domain_id`.
pub fn bridge_books(domain_id: &str) -> Vec<&'static BookRecommendation> {
    HUB_BOOKS
        .iter()
        .flat_map(|(_, books)| books.iter())
        .filter(|b| b.bridge_to.iter().any(|id| *id == domain_id))
        .collect()
}
