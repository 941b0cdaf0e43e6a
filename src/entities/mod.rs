mod location;
mod option;
mod quote;
mod route;
mod tier;

pub use location::Coordinates;
pub use option::{OptionSelection, SurchargeTable, TripOption};
pub use quote::Quote;
pub use route::{RouteMeasure, RouteSummary};
pub use tier::{RateCard, ServiceTier};
