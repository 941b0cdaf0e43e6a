mod parser;

use crate::{
    entities::{
        OptionSelection, Quote, RateCard, RouteMeasure, RouteSummary, ServiceTier, SurchargeTable,
    },
    error::Error,
};

// Parse the provider summary once, up front. Callers price any number of
// tiers against the same measure without re-parsing.
#[tracing::instrument]
pub fn measure(summary: &RouteSummary) -> RouteMeasure {
    let distance = match &summary.distance {
        Some(text) => parser::parse_distance_km(text),
        None => None,
    };

    let duration = match &summary.duration {
        Some(text) => parser::parse_duration_minutes(text),
        None => None,
    };

    match (distance, duration) {
        (Some(distance_km), Some(duration_minutes)) => RouteMeasure::Measured {
            distance_km,
            duration_minutes,
        },
        _ => RouteMeasure::Pending,
    }
}

// An incomplete route never produces a non-floor price: stops and options
// are not consulted until the route is measured.
#[tracing::instrument(skip(surcharges))]
pub fn estimate(
    rates: &RateCard,
    measure: &RouteMeasure,
    stops: u32,
    selections: &[OptionSelection],
    surcharges: &SurchargeTable,
) -> Result<f64, Error> {
    rates.validate()?;

    let (distance_km, duration_minutes) = match measure {
        RouteMeasure::Pending => return Ok(rates.minimum_price),
        RouteMeasure::Measured {
            distance_km,
            duration_minutes,
        } => (*distance_km, *duration_minutes),
    };

    let raw = rates.base_fare
        + distance_km * rates.per_km
        + f64::from(duration_minutes) * rates.per_minute
        + f64::from(stops) * rates.per_stop
        + surcharges.total(selections)?;

    Ok(raw.max(rates.minimum_price))
}

#[tracing::instrument(skip(surcharges))]
pub fn quote(
    tier: &ServiceTier,
    measure: &RouteMeasure,
    stops: u32,
    selections: &[OptionSelection],
    surcharges: &SurchargeTable,
) -> Result<Quote, Error> {
    let amount = estimate(&tier.rates, measure, stops, selections, surcharges)?;

    Ok(Quote::new(tier, measure.clone(), amount))
}

// One quote per tier, cheapest first, for the vehicle-selection screen.
#[tracing::instrument(skip(tiers, surcharges))]
pub fn rank_tiers(
    tiers: &[ServiceTier],
    measure: &RouteMeasure,
    stops: u32,
    selections: &[OptionSelection],
    surcharges: &SurchargeTable,
) -> Result<Vec<Quote>, Error> {
    let mut quotes = Vec::with_capacity(tiers.len());

    for tier in tiers {
        quotes.push(quote(tier, measure, stops, selections, surcharges)?);
    }

    quotes.sort_by(|a, b| a.amount.total_cmp(&b.amount));

    Ok(quotes)
}
