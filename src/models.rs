use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed tennis-court entry. Ids are assigned as the 1-based position
/// among accepted records, so they are stable for a given input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub borough: String,
    pub surface: String,
    pub permit_status: String,
    pub courts: i64,
    pub open_dates: String,
    pub hours: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    StatenIsland,
    Other(String),
}

impl Borough {
    pub fn as_str(&self) -> &str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
            Borough::Other(s) => s,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(text.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Asphalt,
    Other(String),
}

impl Surface {
    pub fn as_str(&self) -> &str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Asphalt => "Asphalt",
            Surface::Other(s) => s,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(text.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PermitStatus {
    Required,
    NotRequired,
    Seasonal,
    Other(String),
}

impl PermitStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PermitStatus::Required => "Required",
            PermitStatus::NotRequired => "Not Required",
            PermitStatus::Seasonal => "Seasonal",
            PermitStatus::Other(s) => s,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(text.trim())
    }
}

/// Three independent optional category sets combined by boolean AND.
/// An absent set matches every record.
#[derive(Debug, Clone, Default)]
pub struct CourtFilter {
    pub boroughs: Option<Vec<Borough>>,
    pub surfaces: Option<Vec<Surface>>,
    pub permit_statuses: Option<Vec<PermitStatus>>,
}

impl CourtFilter {
    pub fn is_empty(&self) -> bool {
        self.boroughs.is_none() && self.surfaces.is_none() && self.permit_statuses.is_none()
    }
}

/// A single wait-time observation for one court. Reports live in memory
/// only and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitReport {
    pub court_id: u32,
    pub minutes: u32,
    pub reporter: String,
    pub reported_at: DateTime<Utc>,
}
