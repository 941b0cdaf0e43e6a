// Route measurements arrive as the provider's display strings. Distance
// keeps its locale decimal separator ("12,4 km"); duration is a single run
// of digits giving total minutes ("25 min").

pub(super) fn parse_distance_km(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::debug!("unparseable distance {:?}", text);
            None
        }
    }
}

// Composite strings like "1 h 05" are rejected rather than misread as 105
// minutes: anything other than exactly one digit run is unparseable.
pub(super) fn parse_duration_minutes(text: &str) -> Option<u32> {
    let mut runs = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty());

    let minutes = match (runs.next(), runs.next()) {
        (Some(run), None) => run.parse::<u32>().ok(),
        _ => None,
    };

    if minutes.is_none() {
        tracing::debug!("unparseable duration {:?}", text);
    }

    minutes
}
