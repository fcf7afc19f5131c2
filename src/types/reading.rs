use serde::Deserialize;
use std::fmt;

/// A scalar as AEMET publishes it: sometimes a JSON number, sometimes a numeric
/// string (`"14"`), occasionally free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    /// Numeric view of the reading. Text that does not parse, and non-finite
    /// values, are absent.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Reading::Number(n) => *n,
            Reading::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Integer view of the reading. Fractional values are absent.
    pub fn as_i64(&self) -> Option<i64> {
        if let Reading::Text(text) = self {
            if let Ok(value) = text.trim().parse::<i64>() {
                return Some(value);
            }
        }
        self.as_f64()
            .filter(|value| value.fract() == 0.0)
            .map(|value| value as i64)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value as f64)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_numbers_and_strings() -> Result<(), serde_json::Error> {
        let values: Vec<Reading> = serde_json::from_str(r#"[30, "40", "n/a", 12.5]"#)?;
        assert_eq!(values[0], Reading::Number(30.0));
        assert_eq!(values[1], Reading::Text("40".to_string()));
        assert_eq!(values[2].as_f64(), None);
        assert_eq!(values[3].as_f64(), Some(12.5));
        Ok(())
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(Reading::from("14").as_i64(), Some(14));
        assert_eq!(Reading::from(" -3 ").as_i64(), Some(-3));
        assert_eq!(Reading::from(22.0).as_i64(), Some(22));
        assert_eq!(Reading::from(22.5).as_i64(), None);
        assert_eq!(Reading::from("calma").as_i64(), None);
    }

    #[test]
    fn test_non_finite_text_is_absent() {
        assert_eq!(Reading::from("NaN").as_f64(), None);
        assert_eq!(Reading::from("inf").as_f64(), None);
    }
}
