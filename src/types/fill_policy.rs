use crate::types::granularity::Granularity;
use crate::types::reading::Reading;
use bon::bon;

const NOT_AVAILABLE: &str = "N/A";

/// Values the assembler substitutes when a concern has no entry for a (date, period)
/// that the temperature extractor produced.
///
/// The policy only covers *absent* entries. An entry that exists but carries a
/// null value is kept as null.
///
/// The two stock policies reproduce AEMET's two table layouts:
///
/// ```
/// use aemet_forecast::{FillPolicy, Granularity, Reading};
///
/// assert_eq!(FillPolicy::for_granularity(Granularity::Daily), FillPolicy::leave_missing());
///
/// let hourly = FillPolicy::for_granularity(Granularity::Hourly);
/// assert_eq!(hourly.precipitation_value, Some(Reading::Number(0.0)));
/// assert_eq!(hourly.sky_description.as_deref(), Some("N/A"));
///
/// let custom = FillPolicy::builder().wind_speed(-1).build();
/// assert_eq!(custom.wind_speed, Some(-1));
/// assert_eq!(custom.sky_description, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillPolicy {
    pub precipitation_value: Option<Reading>,
    pub sky_value: Option<String>,
    pub sky_description: Option<String>,
    pub wind_direction: Option<String>,
    pub wind_speed: Option<i64>,
}

#[bon]
impl FillPolicy {
    #[builder]
    pub fn new(
        precipitation_value: Option<Reading>,
        #[builder(into)] sky_value: Option<String>,
        #[builder(into)] sky_description: Option<String>,
        #[builder(into)] wind_direction: Option<String>,
        wind_speed: Option<i64>,
    ) -> Self {
        Self {
            precipitation_value,
            sky_value,
            sky_description,
            wind_direction,
            wind_speed,
        }
    }

    /// Every gap stays null. Used for daily tables.
    pub fn leave_missing() -> Self {
        Self::default()
    }

    /// `0` for numeric fields and `"N/A"` for text fields. Used for hourly tables.
    pub fn placeholders() -> Self {
        Self {
            precipitation_value: Some(Reading::Number(0.0)),
            sky_value: Some(NOT_AVAILABLE.to_string()),
            sky_description: Some(NOT_AVAILABLE.to_string()),
            wind_direction: Some(NOT_AVAILABLE.to_string()),
            wind_speed: Some(0),
        }
    }

    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Daily => Self::leave_missing(),
            Granularity::Hourly => Self::placeholders(),
        }
    }
}
