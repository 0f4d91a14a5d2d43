use clap::{Parser, Subcommand};
use crate::models::{Borough, CourtFilter, PermitStatus, Surface};

#[derive(Parser)]
#[command(name = "courtfinder")]
#[command(about = "Fast CLI tool for fetching, parsing, and filtering public tennis-court listings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the raw court dataset to a local file
    Fetch {
        /// Source URL or file path (defaults to the configured data URL)
        #[arg(short, long)]
        source: Option<String>,

        /// Output file path
        #[arg(short, long, default_value = "./courts.csv")]
        output: String,
    },

    /// List courts, optionally narrowed by category filters
    List {
        /// Dataset URL or file path (defaults to the configured data URL)
        #[arg(short, long)]
        input: Option<String>,

        /// Borough filter (repeatable)
        #[arg(short, long)]
        borough: Vec<String>,

        /// Surface filter (repeatable)
        #[arg(short, long)]
        surface: Vec<String>,

        /// Permit-status filter (repeatable)
        #[arg(short, long)]
        permit: Vec<String>,

        /// Maximum number of records to print
        #[arg(long, default_value = "50")]
        limit: usize,

        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show simulated wait-time estimates
        #[arg(long)]
        wait: bool,
    },

    /// Show full detail for one court
    Show {
        /// Record id (1-based position in the accepted dataset)
        #[arg(long)]
        id: u32,

        /// Dataset URL or file path (defaults to the configured data URL)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print parse diagnostics and per-category counts
    Stats {
        /// Dataset URL or file path (defaults to the configured data URL)
        #[arg(short, long)]
        input: Option<String>,
    },
}

impl Commands {
    pub fn parse_borough(borough: &str) -> Result<Borough, anyhow::Error> {
        match borough.to_lowercase().as_str() {
            "manhattan" => Ok(Borough::Manhattan),
            "brooklyn" => Ok(Borough::Brooklyn),
            "queens" => Ok(Borough::Queens),
            "bronx" | "the bronx" => Ok(Borough::Bronx),
            "staten island" | "staten-island" | "statenisland" => Ok(Borough::StatenIsland),
            other => Ok(Borough::Other(other.to_string())),
        }
    }

    pub fn parse_surface(surface: &str) -> Result<Surface, anyhow::Error> {
        match surface.to_lowercase().as_str() {
            "hard" => Ok(Surface::Hard),
            "clay" | "har-tru" => Ok(Surface::Clay),
            "grass" => Ok(Surface::Grass),
            "asphalt" => Ok(Surface::Asphalt),
            other => Ok(Surface::Other(other.to_string())),
        }
    }

    pub fn parse_permit_status(status: &str) -> Result<PermitStatus, anyhow::Error> {
        match status.to_lowercase().as_str() {
            "required" | "yes" => Ok(PermitStatus::Required),
            "not required" | "not-required" | "none" | "no" => Ok(PermitStatus::NotRequired),
            "seasonal" => Ok(PermitStatus::Seasonal),
            other => Ok(PermitStatus::Other(other.to_string())),
        }
    }

    /// Build a filter from repeatable CLI arguments; empty argument lists
    /// become absent sets so they match everything.
    pub fn build_filter(
        boroughs: &[String],
        surfaces: &[String],
        permits: &[String],
    ) -> Result<CourtFilter, anyhow::Error> {
        let boroughs = if boroughs.is_empty() {
            None
        } else {
            Some(
                boroughs
                    .iter()
                    .map(|b| Self::parse_borough(b))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        let surfaces = if surfaces.is_empty() {
            None
        } else {
            Some(
                surfaces
                    .iter()
                    .map(|s| Self::parse_surface(s))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        let permit_statuses = if permits.is_empty() {
            None
        } else {
            Some(
                permits
                    .iter()
                    .map(|p| Self::parse_permit_status(p))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(CourtFilter {
            boroughs,
            surfaces,
            permit_statuses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_borough_aliases() {
        assert_eq!(
            Commands::parse_borough("The Bronx").unwrap(),
            Borough::Bronx
        );
        assert_eq!(
            Commands::parse_borough("staten-island").unwrap(),
            Borough::StatenIsland
        );
        assert_eq!(
            Commands::parse_borough("Jersey City").unwrap(),
            Borough::Other("jersey city".to_string())
        );
    }

    #[test]
    fn test_build_filter_empty_lists_are_absent_sets() {
        let filter = Commands::build_filter(&[], &[], &[]).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_filter_collects_all_sets() {
        let filter = Commands::build_filter(
            &["queens".to_string(), "brooklyn".to_string()],
            &["clay".to_string()],
            &["not required".to_string()],
        )
        .unwrap();
        assert_eq!(filter.boroughs.as_ref().unwrap().len(), 2);
        assert_eq!(filter.surfaces.as_ref().unwrap().len(), 1);
        assert_eq!(
            filter.permit_statuses.as_ref().unwrap()[0],
            PermitStatus::NotRequired
        );
    }
}
