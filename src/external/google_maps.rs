use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    api::RouteProviderAPI,
    entities::{Coordinates, RouteSummary},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    routes: Option<Vec<DirectionsRoute>>,
}

// The provider's distance/duration fields are display-formatted, localized
// text. They are passed through untouched for the pricing parser.
#[tracing::instrument]
pub async fn find_route(
    origin: Coordinates,
    destination: Coordinates,
) -> Result<RouteSummary, Error> {
    let origin: String = origin.into();
    let destination: String = destination.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/directions/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origin", origin)])
        .query(&[("destination", destination)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    Ok(summarize(data))
}

fn summarize(data: Response) -> RouteSummary {
    let leg = data
        .routes
        .and_then(|routes| routes.into_iter().next())
        .and_then(|route| route.legs.into_iter().next());

    match leg {
        Some(leg) => RouteSummary::new(
            leg.distance.map(|distance| distance.text),
            leg.duration.map(|duration| duration.text),
        ),
        // ZERO_RESULTS: an empty summary prices at the tier floor
        None => RouteSummary::new(None, None),
    }
}

pub struct Directions;

#[async_trait]
impl RouteProviderAPI for Directions {
    async fn find_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteSummary, Error> {
        find_route(origin, destination).await
    }
}
