//! Report Core - Weekly Match-Statistics Pipeline
//!
//! This module provides the computation pipeline that turns raw per-match
//! stat-lines into a rendered weekly report.
//!
//! # Architecture
//!
//! ```text
//! Reference instant → WeekWindow (Monday-aligned, zone-aware)
//!     ↓
//! MatchRecordProvider (one fetch per roster player)
//!     ↓
//! WeeklyAggregator (per-player totals + running kill/death/headshot sums)
//!     ↓
//! ratio (KD, HS%) → ranker (matches desc, nickname asc)
//!     ↓
//! reporter → fixed-column text table
//! ```

pub mod aggregator;
pub mod provider;
pub mod ranker;
pub mod ratio;
pub mod record;
pub mod reporter;
pub mod window;

pub use aggregator::{PlayerWeeklyAggregate, WeeklyAggregator};
pub use provider::{FetchError, MatchRecordProvider};
pub use ranker::rank;
pub use record::{MatchRecord, Player};
pub use reporter::render_table;
pub use window::WeekWindow;
