use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the place-search response.
///
/// Only `place_id` is guaranteed by the provider; the descriptive fields are
/// optional so that sparse responses still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceMatch {
    /// Opaque identifier understood by the point-forecast endpoint.
    pub place_id: String,
    pub name: Option<String>,
    pub adm_area1: Option<String>,
    pub country: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub timezone: Option<String>,
}

impl PlaceMatch {
    /// Human-readable label, e.g. "Paris, France", falling back to the id.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.country) {
            (Some(name), Some(country)) => format!("{name}, {country}"),
            (Some(name), None) => name.clone(),
            _ => self.place_id.clone(),
        }
    }
}

/// A single day of the point-forecast response, kept as the provider sent it.
///
/// Fields the client renders are typed; everything else the provider includes
/// lands in `extra` so the record survives round trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub day: NaiveDate,
    pub summary: Option<String>,
    pub weather: Option<String>,
    pub icon: Option<i64>,
    pub all_day: Option<AllDayConditions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whole-day aggregate conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllDayConditions {
    pub weather: Option<String>,
    pub temperature: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub wind: Option<Wind>,
    pub cloud_cover: Option<CloudCover>,
    pub precipitation: Option<Precipitation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    pub dir: Option<String>,
    pub angle: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudCover {
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precipitation {
    pub total: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_place_match_deserializes() {
        let place: PlaceMatch = serde_json::from_str(r#"{"place_id": "paris-fr"}"#).unwrap();

        assert_eq!(place.place_id, "paris-fr");
        assert_eq!(place.name, None);
        assert_eq!(place.display_name(), "paris-fr");
    }

    #[test]
    fn place_match_display_name_prefers_name_and_country() {
        let place: PlaceMatch = serde_json::from_str(
            r#"{"place_id": "paris-fr", "name": "Paris", "country": "France"}"#,
        )
        .unwrap();

        assert_eq!(place.display_name(), "Paris, France");
    }

    #[test]
    fn unmodeled_forecast_fields_survive_in_extra() {
        let record: ForecastRecord =
            serde_json::from_str(r#"{"day": "2024-01-01", "temperature": 5}"#).unwrap();

        assert_eq!(record.day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.extra.get("temperature"), Some(&Value::from(5)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["temperature"], Value::from(5));
    }

    #[test]
    fn full_forecast_record_deserializes() {
        let record: ForecastRecord = serde_json::from_str(
            r#"{
                "day": "2024-01-01",
                "weather": "cloudy",
                "icon": 4,
                "summary": "Cloudy with occasional rain.",
                "all_day": {
                    "weather": "cloudy",
                    "temperature": 5.2,
                    "temperature_min": 2.0,
                    "temperature_max": 8.1,
                    "wind": {"speed": 3.1, "dir": "NW", "angle": 310},
                    "cloud_cover": {"total": 80},
                    "precipitation": {"total": 0.5, "type": "rain"}
                }
            }"#,
        )
        .unwrap();

        let all_day = record.all_day.expect("all_day block");
        assert_eq!(all_day.temperature, Some(5.2));
        assert_eq!(all_day.wind.unwrap().dir.as_deref(), Some("NW"));
        assert_eq!(all_day.precipitation.unwrap().kind.as_deref(), Some("rain"));
    }
}
