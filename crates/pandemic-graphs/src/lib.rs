//! # Pandemic Graphs
//!
//! Chart generation for composed case-count tables.
//!
//! Each chart implements [`Graph`], a pure transformation from a
//! [`CompositeTable`](pandemic_data::CompositeTable) to [`ChartData`]. A
//! [`GraphRenderer`] then draws the data with plotters, and the
//! [`GraphManager`] runs every enabled chart for a region.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod manager;
pub mod renderer;
pub mod series;
pub mod traits;
pub mod types;
pub mod utils;

// Chart implementations
pub mod cumulative_totals;
pub mod daily_increase;
pub mod fatality_rate;
pub mod monthly_deaths;
pub mod windowed_deaths;

pub use cumulative_totals::*;
pub use daily_increase::*;
pub use fatality_rate::*;
pub use manager::*;
pub use monthly_deaths::*;
pub use renderer::*;
pub use traits::*;
pub use types::*;
pub use utils::*;
pub use windowed_deaths::*;
