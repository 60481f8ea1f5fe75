//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvestError, Result};

/// URL of the consolidated Brazilian Constitution on the Planalto portal.
pub const CONSTITUTION_URL: &str =
    "https://www.planalto.gov.br/ccivil_03/constituicao/constituicao.htm";

/// Default document title when harvesting without an explicit `--title`.
pub const DEFAULT_TITLE: &str = "Constituição da República Federativa do Brasil";

/// Default base directory for JSON snapshots.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// HTTP timeout in seconds.
///
/// Set to 30 seconds: the consolidated Constitution page is large and the
/// Planalto portal can be slow.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP response size in bytes (20 MB).
///
/// Consolidated legislation pages stay well below this; the cap prevents an
/// unexpected payload from exhausting memory.
pub const MAX_RESPONSE_SIZE: u64 = 20 * 1024 * 1024;

/// Maximum characters for one-line text previews in CLI output.
pub const PREVIEW_WIDTH: usize = 100;

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate a snapshot date (YYYY-MM-DD).
///
/// Rejects dates in the future: a snapshot records legislation as consolidated
/// on a day that has already happened.
///
/// # Examples
/// ```
/// use leisbr_harvester::config::validate_date;
///
/// assert!(validate_date("2025-01-01").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2025-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(HarvestError::InvalidDate(date_str.to_string()));
    }

    let parsed_date = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| HarvestError::InvalidDate(date_str.to_string()))?;

    let today = chrono::Local::now().date_naive();
    if parsed_date > today {
        return Err(HarvestError::InvalidDate(format!(
            "{date_str} is in the future (today is {today})"
        )));
    }

    Ok(())
}
