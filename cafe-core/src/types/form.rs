//! Decoding of submitted cafe forms

use super::NewCafe;
use crate::error::{CafeError, Result};
use serde::Deserialize;

/// Column widths of the `cafe` table
const MAX_NAME_LEN: usize = 250;
const MAX_URL_LEN: usize = 500;
const MAX_TEXT_LEN: usize = 250;

/// Raw add-cafe form as submitted over HTTP
///
/// Every field is optional here so that a missing key turns into a
/// validation error naming it, instead of a generic extractor rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

/// Decode a boolean form value.
///
/// Accepts `true/false`, `1/0`, `yes/no`, `y/n` and `on/off`, case-insensitive.
pub fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(CafeError::validation(format!(
            "Invalid value for {}: expected true or false, got '{}'",
            field, value
        ))),
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CafeError::validation(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

fn required_flag(field: &str, value: Option<String>) -> Result<bool> {
    let value = value
        .ok_or_else(|| CafeError::validation(format!("Missing required field: {}", field)))?;
    parse_flag(field, &value)
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(CafeError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

impl NewCafe {
    /// Check column constraints that SQLite itself would not enforce
    pub fn validate(&self) -> Result<()> {
        for (field, value, max) in [
            ("name", &self.name, MAX_NAME_LEN),
            ("map_url", &self.map_url, MAX_URL_LEN),
            ("img_url", &self.img_url, MAX_URL_LEN),
            ("location", &self.location, MAX_TEXT_LEN),
            ("seats", &self.seats, MAX_TEXT_LEN),
        ] {
            if value.trim().is_empty() {
                return Err(CafeError::validation(format!(
                    "Missing required field: {}",
                    field
                )));
            }
            check_len(field, value, max)?;
        }
        if let Some(price) = &self.coffee_price {
            check_len("coffee_price", price, MAX_TEXT_LEN)?;
        }
        Ok(())
    }
}

impl TryFrom<CafeForm> for NewCafe {
    type Error = CafeError;

    fn try_from(form: CafeForm) -> Result<Self> {
        // coffee_price must be submitted; its value is stored as given
        let coffee_price = form
            .coffee_price
            .ok_or_else(|| CafeError::validation("Missing required field: coffee_price"))?;

        let cafe = NewCafe {
            name: required("name", form.name)?,
            map_url: required("map_url", form.map_url)?,
            img_url: required("img_url", form.img_url)?,
            location: required("location", form.location)?,
            seats: required("seats", form.seats)?,
            has_toilet: required_flag("has_toilet", form.has_toilet)?,
            has_wifi: required_flag("has_wifi", form.has_wifi)?,
            has_sockets: required_flag("has_sockets", form.has_sockets)?,
            can_take_calls: required_flag("can_take_calls", form.can_take_calls)?,
            coffee_price: Some(coffee_price),
        };
        cafe.validate()?;
        Ok(cafe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> CafeForm {
        CafeForm {
            name: Some("Science Gallery London".into()),
            map_url: Some("https://g.page/scigallerylon".into()),
            img_url: Some("https://example.com/sgl.jpg".into()),
            location: Some("London Bridge".into()),
            seats: Some("50+".into()),
            has_toilet: Some("true".into()),
            has_wifi: Some("false".into()),
            has_sockets: Some("on".into()),
            can_take_calls: Some("0".into()),
            coffee_price: Some("£2.40".into()),
        }
    }

    #[test]
    fn test_parse_flag_tokens() {
        for token in ["true", "TRUE", " yes ", "1", "on", "y"] {
            assert!(parse_flag("has_wifi", token).unwrap(), "{token}");
        }
        for token in ["false", "False", "no", "0", "off", "n"] {
            assert!(!parse_flag("has_wifi", token).unwrap(), "{token}");
        }
    }

    #[test]
    fn test_parse_flag_rejects_other_text() {
        let err = parse_flag("has_wifi", "maybe").unwrap_err();
        assert!(matches!(err, CafeError::Validation(_)));
        assert!(err.to_string().contains("has_wifi"));

        assert!(parse_flag("has_wifi", "").is_err());
    }

    #[test]
    fn test_form_conversion() {
        let cafe = NewCafe::try_from(full_form()).unwrap();
        assert_eq!(cafe.name, "Science Gallery London");
        assert!(cafe.has_toilet);
        // "false" is decoded, not treated as a truthy string
        assert!(!cafe.has_wifi);
        assert!(cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.40"));
    }

    #[test]
    fn test_form_missing_field() {
        let form = CafeForm {
            seats: None,
            ..full_form()
        };
        let err = NewCafe::try_from(form).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: seats");

        let form = CafeForm {
            can_take_calls: None,
            ..full_form()
        };
        let err = NewCafe::try_from(form).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: can_take_calls");
    }

    #[test]
    fn test_form_empty_price_kept() {
        let form = CafeForm {
            coffee_price: Some(String::new()),
            ..full_form()
        };
        let cafe = NewCafe::try_from(form).unwrap();
        assert_eq!(cafe.coffee_price.as_deref(), Some(""));

        let form = CafeForm {
            coffee_price: None,
            ..full_form()
        };
        assert!(NewCafe::try_from(form).is_err());
    }

    #[test]
    fn test_form_rejects_long_name() {
        let form = CafeForm {
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            ..full_form()
        };
        let err = NewCafe::try_from(form).unwrap_err();
        assert!(err.to_string().contains("name must be at most 250"));
    }
}
