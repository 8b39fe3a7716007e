//! # Pandemic Data
//!
//! Loading of the public case-count time-series tables, per-country
//! aggregation, and alignment of the confirmed, deaths and recovered series
//! into one date-indexed table.
//!
//! Tables are loaded once through a [`DataSource`] into a [`CovidDataset`],
//! which is then passed explicitly to every aggregation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod composite;
pub mod dataset;
pub mod fetcher;
pub mod source;
pub mod table;

pub use aggregate::*;
pub use composite::*;
pub use dataset::*;
pub use fetcher::*;
pub use source::*;
pub use table::*;
