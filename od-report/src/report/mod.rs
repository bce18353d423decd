//! Booking and revenue curves for an OD.
//!
//! Two curves are produced per OD: the history of sales actually made
//! ([`history`]) and a forecast of future sales under a pricing and demand
//! scenario ([`forecast`]). Both are sequences of [`DataPoint`]s holding
//! cumulative values, one per day-x.

mod curve;
mod forecast;
mod history;
mod summary;

pub use curve::{DataPoint, Totals};
pub use forecast::{DemandMatrix, Pricing, forecast};
pub use history::history;
pub use summary::{OdReport, ServiceReport};
