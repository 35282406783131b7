// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod traversal;
pub mod synthesis_prompts;
pub mod bisociation;
pub mod reading_log;
pub mod progress;

pub use traversal::{weekday_index, TraversalEngine};
pub use synthesis_prompts::{SynthesisPromptEngine, DEFAULT_SYNTHESIS_TEMPLATES};
pub use bisociation::{all_max_distance_pairs, BisociationGenerator};
pub use reading_log::{LogSessionRequest, LoggedSession, ReadingLogError, ReadingLogService};
pub use progress::{analyze_gaps, progress_stats, reading_streak, GapReport, IncompleteHub, ProgressStats};
