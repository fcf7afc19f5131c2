//! Defines the two forecast granularities published by AEMET for a municipality.

use std::fmt;

/// The time granularity of an AEMET municipal forecast.
///
/// Determines the shape of the raw day records, the period key format and the
/// default-fill rules applied while assembling the flat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Six-hour (and half/whole day) blocks, keyed by ranges such as `"06-12"`.
    Daily,
    /// Single-hour readings, keyed by two-digit hours `"00".."23"`.
    Hourly,
}

impl Granularity {
    /// Column names of the assembled table, in output order.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names = vec![
            "fecha",
            "periodo",
            "temperature_max",
            "temperature_min",
            "temperature_value",
            "precipitation_value",
            "sky_value",
            "sky_description",
            "wind_direction",
            "wind_speed",
            "wind_gust",
            "storm_probability",
        ];
        if *self == Granularity::Hourly {
            names.push("fecha_hora");
        }
        names
    }
}

/// Formats a `Granularity` using its English name.
///
/// # Examples
///
/// ```
/// use aemet_forecast::Granularity;
///
/// assert_eq!(Granularity::Hourly.to_string(), "hourly");
/// assert_eq!(format!("{}", Granularity::Daily), "daily");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Hourly => write!(f, "hourly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_hourly_has_timestamp_column() {
        assert!(Granularity::Hourly.column_names().contains(&"fecha_hora"));
        assert!(!Granularity::Daily.column_names().contains(&"fecha_hora"));
        assert_eq!(Granularity::Daily.column_names()[0], "fecha");
    }
}
