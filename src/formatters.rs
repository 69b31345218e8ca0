use crate::constants::{BLOCK_SEPARATOR, FORECAST_PERIOD_LIMIT};
use crate::models::{AlertFeature, ForecastPeriod};

const UNKNOWN: &str = "Unknown";

/// Formats a single alert feature into a readable block
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props
            .description
            .as_deref()
            .unwrap_or("No description available"),
        props
            .instruction
            .as_deref()
            .unwrap_or("No specific instructions provided"),
    )
}

/// Formats all alerts, or the empty-result message when there are none
pub fn format_alerts(features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return "No active alerts for this state.".to_string();
    }

    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "{}: Temperature: {}, Wind: {}, Forecast: {}",
        period.name.as_deref().unwrap_or(UNKNOWN),
        with_suffix(&temperature, period.temperature_unit.as_deref()),
        with_suffix(
            period.wind_speed.as_deref().unwrap_or(UNKNOWN),
            period.wind_direction.as_deref(),
        ),
        period
            .detailed_forecast
            .as_deref()
            .unwrap_or("No forecast available"),
    )
}

/// `"<value> <suffix>"`, or just the value when the suffix is missing or blank
fn with_suffix(value: &str, suffix: Option<&str>) -> String {
    match suffix.map(str::trim) {
        Some(suffix) if !suffix.is_empty() => format!("{value} {suffix}"),
        _ => value.to_string(),
    }
}

/// Formats the first few forecast periods
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    if periods.is_empty() {
        return "No forecast periods available for this location.".to_string();
    }

    periods
        .iter()
        .take(FORECAST_PERIOD_LIMIT)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
