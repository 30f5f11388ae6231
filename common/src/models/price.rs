//! Price record model.
//!
//! Records are validated eagerly when deserialized: every field is required,
//! `annee` is normalized to an integer and `prix` to a float, so queries never
//! meet a partially populated record.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One observed price for a product variety in a region for a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRecord {
    /// Region code or name (e.g. "CS").
    pub region: String,
    /// Product name.
    pub produit: String,
    /// Product variety.
    pub variete: String,
    /// Observation year.
    #[serde(deserialize_with = "deserialize_year")]
    pub annee: i32,
    /// Observed price.
    #[serde(deserialize_with = "deserialize_price")]
    pub prix: f64,
}

impl PriceRecord {
    /// Returns true when the record matches the given combination.
    ///
    /// Strings compare case-insensitively, the year numerically.
    pub fn matches(&self, region: &str, produit: &str, variete: &str, annee: i32) -> bool {
        self.annee == annee
            && eq_ignore_case(&self.region, region)
            && eq_ignore_case(&self.produit, produit)
            && eq_ignore_case(&self.variete, variete)
    }
}

/// Unicode case-insensitive string equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).map_err(|_| D::Error::custom(format!("year {i} is out of range")));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => {
                    Ok(f as i32)
                }
                _ => Err(D::Error::custom(format!("year {n} is not an integer"))),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("year {s:?} is not an integer"))),
        other => Err(D::Error::custom(format!(
            "expected an integer year, found {}",
            json_kind(other)
        ))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let price = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => {
            return Err(D::Error::custom(format!(
                "expected a numeric price, found {}",
                json_kind(other)
            )))
        }
    };
    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| D::Error::custom(format!("price {value} is not a finite number")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<PriceRecord, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_parse_complete_record() {
        let record = parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": 2022, "prix": 4.5, "source": "ignored"
        }))
        .unwrap();
        assert_eq!(record.region, "CS");
        assert_eq!(record.annee, 2022);
        assert_eq!(record.prix, 4.5);
    }

    #[test]
    fn test_year_is_normalized_from_string_and_float() {
        let from_string = parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": " 02022 ", "prix": "4.5"
        }))
        .unwrap();
        assert_eq!(from_string.annee, 2022);
        assert_eq!(from_string.prix, 4.5);

        let from_float = parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": 2022.0, "prix": 4
        }))
        .unwrap();
        assert_eq!(from_float.annee, 2022);
        assert_eq!(from_float.prix, 4.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse(json!({
            "region": "CS", "produit": "Tomate", "annee": 2022, "prix": 4.5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("variete"));
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let err = parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": "last year", "prix": 4.5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("not an integer"));

        assert!(parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": 2022.5, "prix": 4.5
        }))
        .is_err());
    }

    #[test]
    fn test_null_fields_are_rejected() {
        assert!(parse(json!({
            "region": null, "produit": "Tomate", "variete": "Ronde",
            "annee": 2022, "prix": 4.5
        }))
        .is_err());
        assert!(parse(json!({
            "region": "CS", "produit": "Tomate", "variete": "Ronde",
            "annee": 2022, "prix": null
        }))
        .is_err());
    }

    #[test]
    fn test_matches_ignores_case_on_strings() {
        let record = parse(json!({
            "region": "casablanca", "produit": "tomate", "variete": "RONDE",
            "annee": 2022, "prix": 4.5
        }))
        .unwrap();
        assert!(record.matches("Casablanca", "TOMATE", "ronde", 2022));
        assert!(!record.matches("Casablanca", "TOMATE", "ronde", 2021));
        assert!(!record.matches("Rabat", "TOMATE", "ronde", 2022));
    }

    #[test]
    fn test_eq_ignore_case_handles_non_ascii() {
        assert!(eq_ignore_case("Fès-Meknès", "FÈS-MEKNÈS"));
        assert!(!eq_ignore_case("Fès", "Fes"));
    }
}
