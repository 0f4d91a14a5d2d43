//! Delimited-record parser for the court dataset
//!
//! The source is comma-separated text where any field may be wrapped in
//! double quotes and a quoted field may span physical lines. The format
//! predates this tool and has its own rules: quotes only toggle field
//! boundaries (a doubled quote is not an escape), every field is trimmed,
//! and rows with fewer than eleven fields are dropped rather than padded.
//! A general-purpose CSV reader does not reproduce those rules, so the
//! scan is done by hand.

use tracing::{debug, warn};

use crate::models::Court;

/// Minimum number of fields a data row must carry to be considered.
const FIELD_COUNT: usize = 11;

/// Row-level counters from one parse pass. Diagnostic only; callers that
/// just want the records use [`parse_courts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Rows that passed the field-count check and the retention rule.
    pub accepted: usize,
    /// Rows dropped for having fewer than eleven fields.
    pub short_rows: usize,
    /// Rows dropped for an empty name or zero latitude/longitude.
    pub rejected: usize,
}

/// Parse raw court data into records, discarding diagnostics.
pub fn parse_courts(raw: &str) -> Vec<Court> {
    parse_courts_with_stats(raw).0
}

/// Parse raw court data into records.
///
/// The first line is unconditionally treated as a header and discarded.
/// Accepted records are renumbered 1..N in input order. Parsing the same
/// input twice yields an equal sequence; nothing here touches outside
/// state beyond log output.
pub fn parse_courts_with_stats(raw: &str) -> (Vec<Court>, ParseStats) {
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    let mut field = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;

    for line in raw.lines().skip(1) {
        for ch in line.chars() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => {
                    row.push(field.trim().to_string());
                    field.clear();
                }
                _ => field.push(ch),
            }
        }

        if in_quotes {
            // Mid-quote line break: the field continues on the next
            // physical line with the newline preserved.
            field.push('\n');
            continue;
        }

        row.push(field.trim().to_string());
        field.clear();

        if row.len() < FIELD_COUNT {
            if row.len() == 1 && row[0].is_empty() {
                debug!("Skipping blank line");
            } else {
                warn!(
                    "Skipping row with {} of {} required fields: {:?}",
                    row.len(),
                    FIELD_COUNT,
                    row.first()
                );
                stats.short_rows += 1;
            }
            row.clear();
            continue;
        }

        let id = records.len() as u32 + 1;
        match build_court(&row, id) {
            Some(court) => {
                records.push(court);
                stats.accepted += 1;
            }
            None => {
                warn!(
                    "Dropping row '{}': empty name or unusable coordinates",
                    row[0]
                );
                stats.rejected += 1;
            }
        }
        row.clear();
    }

    // An unterminated quote leaves the final row open; whatever was
    // buffered since the last comma is dropped with it.
    if in_quotes {
        warn!("Input ended inside a quoted field; trailing row discarded");
    }

    (records, stats)
}

/// Map the first eleven fields of a row onto a record, applying the
/// retention rule: non-empty name, non-zero latitude and longitude.
/// Numeric fields that fail to parse coerce to zero rather than failing
/// the row, which for coordinates then trips the retention rule.
fn build_court(fields: &[String], id: u32) -> Option<Court> {
    let name = fields[0].clone();
    let latitude: f64 = fields[9].parse().unwrap_or(0.0);
    let longitude: f64 = fields[10].parse().unwrap_or(0.0);

    if name.is_empty() || latitude == 0.0 || longitude == 0.0 {
        return None;
    }

    Some(Court {
        id,
        name,
        address: fields[1].clone(),
        borough: fields[2].clone(),
        surface: fields[3].clone(),
        permit_status: fields[4].clone(),
        courts: fields[5].parse().unwrap_or(0),
        open_dates: fields[6].clone(),
        hours: fields[7].clone(),
        description: fields[8].clone(),
        latitude,
        longitude,
    })
}
