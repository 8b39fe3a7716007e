//! Chart trait definitions for polymorphic chart types.

use pandemic_common::Result;
use pandemic_data::CompositeTable;

use crate::types::ChartData;

/// A chart derived from a composite table.
pub trait Graph: Send + Sync {
    /// File-name stem of this chart, e.g. `fatality_rate`.
    fn name(&self) -> String;

    /// Gets the description of this chart type.
    fn description(&self) -> &'static str;

    /// Transforms the table into drawable series without touching a backend.
    fn prepare(&self, table: &CompositeTable) -> Result<ChartData>;
}

/// Chart caption with the region appended.
pub(crate) fn region_title(base: &str, table: &CompositeTable) -> String {
    format!("{base}: {}", table.display_name())
}
