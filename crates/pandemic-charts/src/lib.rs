//! # Pandemic Charts
//!
//! Command-line application that loads the confirmed, deaths and recovered
//! time-series tables once, composes a table for every selected region and
//! writes its charts (and optionally the table itself) to disk.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
