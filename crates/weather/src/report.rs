use serde::{Deserialize, Serialize};

/// Weather snapshot for a resolved location, as served by the backend's
/// weather endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved city name; absent for raw coordinate lookups.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub current: CurrentConditions,
    #[serde(default)]
    pub daily: DailySummary,
}

/// Current conditions; every field is optional because the provider may
/// omit any of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    /// 1 during daytime, 0 at night.
    pub is_day: Option<u8>,
    /// WMO weather interpretation code.
    pub weather_code: Option<u8>,
    pub time: Option<String>,
}

impl CurrentConditions {
    pub fn is_daytime(&self) -> bool {
        self.is_day == Some(1)
    }

    /// Human-readable description of the current weather code.
    pub fn description(&self) -> Option<&'static str> {
        self.weather_code.map(describe_weather_code)
    }
}

/// Today's aggregates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySummary {
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    /// Precipitation sum in millimeters.
    pub precipitation: Option<f64>,
}

/// Map a WMO weather interpretation code to a display string.
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "Despejado",
        1 => "Mayormente despejado",
        2 => "Parcialmente nublado",
        3 => "Nublado",
        45 | 48 => "Niebla",
        51 | 53 | 55 => "Llovizna",
        56 | 57 => "Llovizna helada",
        61 | 63 | 65 => "Lluvia",
        66 | 67 => "Lluvia helada",
        71 | 73 | 75 | 77 => "Nieve",
        80 | 81 | 82 => "Chubascos",
        85 | 86 => "Chubascos de nieve",
        95 => "Tormenta",
        96 | 99 => "Tormenta con granizo",
        _ => "Condición desconocida",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_city_report() {
        let raw = r#"{
            "city": "Tunja",
            "country": "Colombia",
            "latitude": 5.5353,
            "longitude": -73.3678,
            "current": {
                "temperature": 14.2,
                "windspeed": 7.5,
                "winddirection": 230.0,
                "is_day": 1,
                "weather_code": 61,
                "time": "2024-05-11T14:00"
            },
            "daily": {
                "max_temp": 18.0,
                "min_temp": 8.5,
                "precipitation": 3.2
            }
        }"#;

        let report: WeatherReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.city.as_deref(), Some("Tunja"));
        assert!(report.current.is_daytime());
        assert_eq!(report.current.description(), Some("Lluvia"));
        assert_eq!(report.daily.precipitation, Some(3.2));
    }

    #[test]
    fn coordinate_report_has_no_place_names() {
        let raw = r#"{
            "latitude": 4.711,
            "longitude": -74.0721,
            "current": {"temperature": 19.0, "is_day": 0},
            "daily": {}
        }"#;

        let report: WeatherReport = serde_json::from_str(raw).unwrap();
        assert!(report.city.is_none());
        assert!(!report.current.is_daytime());
        assert!(report.daily.max_temp.is_none());
    }

    #[test]
    fn weather_codes_have_descriptions() {
        assert_eq!(describe_weather_code(0), "Despejado");
        assert_eq!(describe_weather_code(95), "Tormenta");
        assert_eq!(describe_weather_code(42), "Condición desconocida");
    }
}
