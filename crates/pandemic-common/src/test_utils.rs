//! Test utilities and shared test helpers for pandemic-charts.
//!
//! Fixtures mimic the layout of the public time-series tables: four
//! descriptive columns followed by one cumulative count per day.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// `file://` URI for a local path.
pub fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Source-table fixtures.
pub mod table_fixtures {
    /// Confirmed cases: two regions of "X", one of "Y", over four days
    /// spanning a month boundary.
    pub const CONFIRMED_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/30/20,1/31/20,2/1/20,2/2/20
North,X,10.0,20.0,10,12,20,25
South,X,11.0,21.0,5,6,6,10
,Y,30.5,-4.25,100,150,210,260
";

    /// Deaths for the same regions and days.
    pub const DEATHS_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/30/20,1/31/20,2/1/20,2/2/20
North,X,10.0,20.0,1,1,2,3
South,X,11.0,21.0,0,0,1,1
,Y,30.5,-4.25,5,8,10,15
";

    /// Recoveries; the last day column is missing, and one cell is blank.
    pub const RECOVERED_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/30/20,1/31/20,2/1/20
North,X,10.0,20.0,0,1,
South,X,11.0,21.0,0,0,2
,Y,30.5,-4.25,10,20,40
";

    /// A single-day table in the shape of the aggregation example:
    /// two regions of "X" with day-one values 10 and 5.
    pub const TWO_REGION_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20
A,X,0,0,10
B,X,0,0,5
";
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
selection:
  countries: ["Poland"]
  include_world: false
"#
    }

    /// A full configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "sources:\n",
            "  confirmed: \"https://example.org/confirmed.csv\"\n",
            "  deaths: \"https://example.org/deaths.csv\"\n",
            "  recovered: \"file:///tmp/recovered.csv\"\n",
            "  timeout_seconds: 15\n",
            "\n",
            "selection:\n",
            "  countries: [\"Spain\", \"Sweden\"]\n",
            "  include_world: true\n",
            "  prompt_stdin: false\n",
            "  alignment: inner\n",
            "\n",
            "graphs:\n",
            "  enabled:\n",
            "    fatality_rate: true\n",
            "    daily_increase: false\n",
            "    monthly_deaths: true\n",
            "    windowed_deaths: true\n",
            "    cumulative_totals: true\n",
            "  windows: [\"1M\", \"3W\"]\n",
            "  styling:\n",
            "    width: 1200\n",
            "    height: 700\n",
            "    enable_grid: true\n",
            "    colors:\n",
            "      line: \"#d62728\"\n",
            "      secondary: \"#1f77b4\"\n",
            "      background: \"#ffffff\"\n",
            "\n",
            "output:\n",
            "  directory: \"out\"\n",
            "  export_csv: true\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"json\"\n",
        )
    }
}
