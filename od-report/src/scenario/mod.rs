//! Scenario loading.
//!
//! A scenario bundles everything needed for a report: the service and its
//! itinerary, the passenger manifest, and the pricing and demand used for
//! the forecast. Scenarios are read from JSON files ([`dto`]) or taken from
//! the built-in Paris-Lyon-Marseille example ([`Scenario::demo`]).

pub mod dto;


use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::config::ReportConfig;
use crate::domain::{Booking, DomainError, Price, Service, ServiceId, Stop};
use crate::itinerary::ItineraryError;
use crate::report::{DemandMatrix, Pricing, ServiceReport};
use dto::ScenarioFile;

/// Scenario of the built-in example: train 7601 from Paris Gare de Lyon to
/// Marseille Saint-Charles via Lyon Part-Dieu, departing in 7 days.
const DEMO_SCENARIO: &str = include_str!("demo.json");

/// Errors from loading a scenario or building its report.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Itinerary(#[from] ItineraryError),

    #[error("scenario must give exactly one of departure_date and departs_in_days")]
    Departure,

    #[error("{0} bookings do not match any OD of the service")]
    UnmatchedBookings(usize),
}

/// A service with its manifest allocated, ready to report on.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub service: Service,
    pub pricing: Pricing,
    pub demand: DemandMatrix,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_file(path: &Path, config: &ReportConfig) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, config)
    }

    /// Load a scenario from JSON text.
    pub fn from_json(text: &str, config: &ReportConfig) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = serde_json::from_str(text)?;
        Self::build(file, config)
    }

    /// The built-in Paris-Lyon-Marseille scenario.
    pub fn demo(config: &ReportConfig) -> Result<Self, ScenarioError> {
        Self::from_json(DEMO_SCENARIO, config)
    }

    /// Build the domain values of a parsed scenario file.
    ///
    /// # Errors
    ///
    /// Returns `Err` on invalid names, prices or sale days, on an itinerary
    /// that lists a stop twice, and, with
    /// [`ReportConfig::strict_manifest`], on bookings matching no OD.
    pub fn build(file: ScenarioFile, config: &ReportConfig) -> Result<Self, ScenarioError> {
        let departure_date = match (file.departure_date, file.departs_in_days) {
            (Some(date), None) => date,
            (None, Some(days)) => Duration::try_days(days)
                .and_then(|offset| config.report_date().checked_add_signed(offset))
                .ok_or(ScenarioError::Departure)?,
            _ => return Err(ScenarioError::Departure),
        };

        let id = ServiceId::new(&file.service).map_err(DomainError::from)?;
        let stops = file
            .itinerary
            .iter()
            .map(|name| stop(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut service = Service::new(id, departure_date);
        service.load_itinerary(&stops)?;

        let bookings = file
            .bookings
            .into_iter()
            .map(|record| -> Result<Booking, DomainError> {
                Ok(Booking::new(
                    stop(&record.origin)?,
                    stop(&record.destination)?,
                    record.sale_day_x,
                    Price::new(record.price)?,
                )?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let manifest = service.load_passenger_manifest(bookings);
        if config.strict_manifest && manifest.unmatched > 0 {
            return Err(ScenarioError::UnmatchedBookings(manifest.unmatched));
        }

        let mut pricing = Pricing::new();
        for tier in file.pricing {
            pricing.set(Price::new(tier.price).map_err(DomainError::from)?, tier.seats);
        }

        let mut demand = DemandMatrix::new();
        for day in file.demand {
            for tier in day.tiers {
                let price = Price::new(tier.price).map_err(DomainError::from)?;
                demand.set(day.day_x, price, tier.bookings);
            }
        }

        info!(
            service = %service.id(),
            departure = %service.departure_date(),
            stops = stops.len(),
            allocated = manifest.allocated,
            unmatched = manifest.unmatched,
            "Loaded scenario"
        );

        Ok(Scenario {
            service,
            pricing,
            demand,
        })
    }

    /// Build the service report as of `today`.
    pub fn report(&self, today: NaiveDate) -> Result<ServiceReport, ScenarioError> {
        Ok(self.service.report(today, &self.pricing, &self.demand)?)
    }

    /// Build the report and serialise it as JSON.
    pub fn render(&self, config: &ReportConfig) -> Result<String, ScenarioError> {
        let report = self.report(config.report_date())?;
        let json = if config.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}

fn stop(name: &str) -> Result<Stop, DomainError> {
    Ok(Stop::new(name)?)
}
