#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! # reserve_sizer_core
//!
//! Pure extraction and sizing logic:
//!
//! - [`counter`]: parsing of `name value` counter lines
//! - [`matcher`] / [`family`]: which counter names feed which metric
//! - [`extractor`]: one pass over counter text into a [`MetricSnapshot`]
//! - [`capacity`] / [`recommender`]: power-of-two table capacities
//!
//! Nothing in this crate performs I/O.

extern crate alloc;

pub mod capacity;
pub mod counter;
pub mod error;
pub mod extractor;
pub mod family;
pub mod matcher;
pub mod metrics;
pub mod recommender;

pub use capacity::recommend;
pub use counter::CounterLine;
pub use error::CapacityError;
pub use extractor::{Extractor, extract_aggregate_count, extract_file_count, extract_method_count};
pub use family::{CounterFamily, Reduction};
pub use matcher::{CounterMatcher, ExactName, NamePrefix, NameSuffix};
pub use metrics::{Metric, MetricSnapshot};
pub use recommender::{Recommendation, RecommendationSet, Recommender, TableKind};
