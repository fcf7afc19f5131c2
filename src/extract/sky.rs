use crate::types::cells::SkyCell;
use crate::types::raw::RawSkyPeriod;

/// The first maximal run of ASCII digits in `text`.
pub fn sky_code(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Builds the sky cell of one raw period.
///
/// The code comes from `value` (`"12n"`); when that carries no digits the
/// description is scanned instead.
pub(crate) fn sky_cell(period: &RawSkyPeriod) -> SkyCell {
    let code = period
        .value
        .as_deref()
        .and_then(sky_code)
        .or_else(|| period.descripcion.as_deref().and_then(sky_code));
    SkyCell {
        value: code.map(str::to_string),
        description: period.descripcion.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_digit_run() {
        assert_eq!(sky_code("Nublado 16"), Some("16"));
        assert_eq!(sky_code("12n"), Some("12"));
        assert_eq!(sky_code("a1b22"), Some("1"));
        assert_eq!(sky_code("Despejado"), None);
        assert_eq!(sky_code(""), None);
    }

    #[test]
    fn test_cell_prefers_value_field() {
        let period = RawSkyPeriod {
            periodo: Some("07".to_string()),
            value: Some("43n".to_string()),
            descripcion: Some("Muy nuboso con lluvia escasa".to_string()),
        };
        let cell = sky_cell(&period);
        assert_eq!(cell.value.as_deref(), Some("43"));
        assert_eq!(cell.description.as_deref(), Some("Muy nuboso con lluvia escasa"));
    }

    #[test]
    fn test_cell_falls_back_to_description() {
        let period = RawSkyPeriod {
            periodo: None,
            value: Some(String::new()),
            descripcion: Some("Nublado 16".to_string()),
        };
        assert_eq!(sky_cell(&period).value.as_deref(), Some("16"));

        let blank = RawSkyPeriod {
            periodo: None,
            value: None,
            descripcion: Some("Despejado".to_string()),
        };
        assert_eq!(sky_cell(&blank).value, None);
    }
}
