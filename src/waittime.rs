//! In-memory wait-time reports
//!
//! Wait times are a simulated "live" feature layered on top of the static
//! court list: reports accumulate per court for the lifetime of one
//! invocation and are never written anywhere. The board is deliberately
//! independent of the parsed records; dropping a court from the dataset
//! does not touch its reports and vice versa.

use std::collections::HashMap;

use chrono::Utc;

use crate::models::{Court, WaitReport};

/// Component-local store of wait-time reports keyed by court id.
#[derive(Debug, Default)]
pub struct WaitTimeBoard {
    reports: HashMap<u32, Vec<WaitReport>>,
}

impl WaitTimeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation for a court.
    pub fn report(&mut self, court_id: u32, minutes: u32, reporter: &str) {
        self.reports.entry(court_id).or_default().push(WaitReport {
            court_id,
            minutes,
            reporter: reporter.to_string(),
            reported_at: Utc::now(),
        });
    }

    /// Current estimate for a court: the plain mean of its reported
    /// minutes, rounded to the nearest minute. None when nothing has been
    /// reported.
    pub fn estimate(&self, court_id: u32) -> Option<u32> {
        let reports = self.reports.get(&court_id)?;
        if reports.is_empty() {
            return None;
        }
        let total: u64 = reports.iter().map(|r| r.minutes as u64).sum();
        Some(((total + reports.len() as u64 / 2) / reports.len() as u64) as u32)
    }

    pub fn report_count(&self, court_id: u32) -> usize {
        self.reports.get(&court_id).map_or(0, Vec::len)
    }

    /// Drop all reports for one court.
    pub fn clear_court(&mut self, court_id: u32) {
        self.reports.remove(&court_id);
    }

    /// Seed one mock report per court, reproducing the page-load
    /// simulation of the original product. Seeding is a pure function of
    /// the court id and name so repeated runs show the same numbers.
    pub fn seed_mock(&mut self, courts: &[Court]) {
        for court in courts {
            let minutes = mock_minutes(court);
            self.report(court.id, minutes, "seed");
        }
    }
}

/// Deterministic pseudo-random wait in 0..=60 minutes, FNV-1a over the
/// court id and name.
fn mock_minutes(court: &Court) -> u32 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in court.id.to_le_bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    for byte in court.name.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash % 61) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(id: u32, name: &str) -> Court {
        Court {
            id,
            name: name.to_string(),
            address: String::new(),
            borough: "Queens".to_string(),
            surface: "Hard".to_string(),
            permit_status: "Required".to_string(),
            courts: 4,
            open_dates: String::new(),
            hours: String::new(),
            description: String::new(),
            latitude: 40.72,
            longitude: -73.85,
        }
    }

    #[test]
    fn test_estimate_is_mean_of_reports() {
        let mut board = WaitTimeBoard::new();
        board.report(1, 10, "a");
        board.report(1, 20, "b");
        board.report(1, 30, "c");
        assert_eq!(board.estimate(1), Some(20));
        assert_eq!(board.report_count(1), 3);
    }

    #[test]
    fn test_no_reports_means_no_estimate() {
        let board = WaitTimeBoard::new();
        assert_eq!(board.estimate(42), None);
        assert_eq!(board.report_count(42), 0);
    }

    #[test]
    fn test_clear_court_removes_reports() {
        let mut board = WaitTimeBoard::new();
        board.report(1, 15, "a");
        board.report(2, 25, "a");
        board.clear_court(1);
        assert_eq!(board.estimate(1), None);
        assert_eq!(board.estimate(2), Some(25));
    }

    #[test]
    fn test_reports_are_independent_per_court() {
        let mut board = WaitTimeBoard::new();
        board.report(1, 10, "a");
        board.report(2, 50, "b");
        assert_eq!(board.estimate(1), Some(10));
        assert_eq!(board.estimate(2), Some(50));
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let courts = vec![court(1, "Court A"), court(2, "Court B")];

        let mut first = WaitTimeBoard::new();
        first.seed_mock(&courts);
        let mut second = WaitTimeBoard::new();
        second.seed_mock(&courts);

        for c in &courts {
            assert_eq!(first.estimate(c.id), second.estimate(c.id));
            assert!(first.estimate(c.id).unwrap() <= 60);
        }
    }
}
