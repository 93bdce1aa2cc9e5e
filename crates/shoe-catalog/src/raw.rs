//! Loosely-typed listing feed ingestion.
//!
//! Feeds are produced by a collection service that is not strict about
//! types: `salePrice` may be `null`, missing, a number, or a placeholder
//! string, and `releaseDate` may be a millisecond timestamp or a date
//! string. [`RawShoe`] accepts all of these and [`RawShoe::into_record`]
//! turns them into a [`ShoeRecord`] or a [`CatalogError`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::shoe::ShoeRecord;
use crate::slug::Slug;

/// A shoe as it appears in a listing feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShoe {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sale_price: Option<Value>,
    #[serde(default)]
    pub release_date: Option<Value>,
    #[serde(default)]
    pub num_of_colors: Option<Value>,
}

impl RawShoe {
    /// Validate and convert into a typed record.
    ///
    /// Amounts are read as minor units of `currency`.
    pub fn into_record(self, currency: Currency) -> Result<ShoeRecord, CatalogError> {
        let slug = self
            .slug
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CatalogError::Validation("missing slug".to_string()))?;
        let name = self
            .name
            .ok_or_else(|| CatalogError::Validation(format!("missing name for {slug}")))?;

        let price = match self.price.as_ref().and_then(Value::as_f64) {
            Some(amount) => Money::try_from_minor_f64(amount, currency, "price")?,
            None => return Err(CatalogError::MissingPrice(slug)),
        };
        if price.amount_minor < 0 {
            return Err(CatalogError::Validation(format!("negative price for {slug}")));
        }

        let sale_price = parse_sale_price(&slug, self.sale_price.as_ref(), currency)?;
        let release_date = parse_release_date(&slug, self.release_date.as_ref())?;
        let num_of_colors = parse_color_count(&slug, self.num_of_colors.as_ref())?;

        Ok(ShoeRecord {
            slug: Slug::new(slug),
            name,
            image_src: self.image_src.unwrap_or_default(),
            price,
            sale_price,
            release_date,
            num_of_colors,
        })
    }
}

/// A sale price exists only when the feed carries a number.
///
/// `0` counts as a sale price; `null`, strings and booleans do not.
fn parse_sale_price(
    slug: &str,
    value: Option<&Value>,
    currency: Currency,
) -> Result<Option<Money>, CatalogError> {
    match value {
        Some(Value::Number(n)) => {
            let amount = n.as_f64().ok_or(CatalogError::NonFiniteAmount("salePrice"))?;
            Money::try_from_minor_f64(amount, currency, "salePrice").map(Some)
        }
        None | Some(Value::Null) => Ok(None),
        Some(other) => {
            tracing::debug!(slug, value = %other, "ignoring non-numeric salePrice");
            Ok(None)
        }
    }
}

fn parse_release_date(slug: &str, value: Option<&Value>) -> Result<DateTime<Utc>, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidReleaseDate {
        slug: slug.to_string(),
        reason,
    };

    match value {
        None | Some(Value::Null) => Err(invalid("missing".to_string())),
        Some(Value::Number(n)) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => match n.as_f64() {
                    Some(ms) if ms.is_finite() => ms.round() as i64,
                    _ => return Err(invalid(format!("timestamp {n} out of range"))),
                },
            };
            DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| invalid(format!("timestamp {millis} out of range")))
        }
        Some(Value::String(s)) => {
            parse_date_str(s).ok_or_else(|| invalid(format!("cannot parse {s:?}")))
        }
        Some(other) => Err(invalid(format!("unexpected value {other}"))),
    }
}

/// RFC 3339 timestamps, or plain `YYYY-MM-DD` dates taken as midnight UTC.
fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_color_count(slug: &str, value: Option<&Value>) -> Result<u32, CatalogError> {
    value
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            CatalogError::Validation(format!(
                "numOfColors for {slug} must be a non-negative integer"
            ))
        })
}

/// Parse a JSON array of shoes.
///
/// The outer result fails only when the document is not a JSON array.
/// Each entry is converted independently so one bad record does not
/// prevent its siblings from rendering.
pub fn parse_listing(
    json: &str,
    currency: Currency,
) -> Result<Vec<Result<ShoeRecord, CatalogError>>, CatalogError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;

    let records = entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<RawShoe>(entry)
                .map_err(CatalogError::from)
                .and_then(|raw| raw.into_record(currency))
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn raw(value: Value) -> RawShoe {
        serde_json::from_value(value).unwrap()
    }

    fn base() -> Value {
        json!({
            "slug": "tree-runner",
            "name": "Tree Runner",
            "imageSrc": "/assets/tree-runner.jpg",
            "price": 9800,
            "releaseDate": 1617408000000_i64,
            "numOfColors": 2
        })
    }

    fn with(field: &str, value: Value) -> RawShoe {
        let mut v = base();
        v[field] = value;
        raw(v)
    }

    #[test]
    fn test_full_record() {
        let shoe = raw(base()).into_record(Currency::USD).unwrap();
        assert_eq!(shoe.slug.as_str(), "tree-runner");
        assert_eq!(shoe.price, Money::new(9800, Currency::USD));
        assert_eq!(
            shoe.release_date,
            Utc.with_ymd_and_hms(2021, 4, 3, 0, 0, 0).unwrap()
        );
        assert_eq!(shoe.num_of_colors, 2);
        assert!(shoe.sale_price.is_none());
    }

    #[test]
    fn test_sale_price_zero_is_present() {
        let shoe = with("salePrice", json!(0)).into_record(Currency::USD).unwrap();
        assert_eq!(shoe.sale_price, Some(Money::new(0, Currency::USD)));
    }

    #[test]
    fn test_sale_price_placeholders_are_absent() {
        for placeholder in [json!(null), json!(""), json!("none"), json!(false)] {
            let shoe = with("salePrice", placeholder)
                .into_record(Currency::USD)
                .unwrap();
            assert!(shoe.sale_price.is_none());
        }
    }

    #[test]
    fn test_fractional_sale_price() {
        let shoe = with("salePrice", json!(25.0)).into_record(Currency::USD).unwrap();
        assert_eq!(shoe.sale_price, Some(Money::new(25, Currency::USD)));
    }

    #[test]
    fn test_release_date_strings() {
        let shoe = with("releaseDate", json!("2021-04-03"))
            .into_record(Currency::USD)
            .unwrap();
        assert_eq!(
            shoe.release_date,
            Utc.with_ymd_and_hms(2021, 4, 3, 0, 0, 0).unwrap()
        );

        let shoe = with("releaseDate", json!("2021-04-03T12:30:00+02:00"))
            .into_record(Currency::USD)
            .unwrap();
        assert_eq!(
            shoe.release_date,
            Utc.with_ymd_and_hms(2021, 4, 3, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_release_date_is_error() {
        let mut v = base();
        v.as_object_mut().unwrap().remove("releaseDate");
        let err = raw(v).into_record(Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReleaseDate { .. }));
    }

    #[test]
    fn test_malformed_release_date_is_error() {
        for bad in [json!("last tuesday"), json!(true), json!(null)] {
            let err = with("releaseDate", bad).into_record(Currency::USD).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidReleaseDate { .. }));
        }
    }

    #[test]
    fn test_missing_price_is_error() {
        let err = with("price", json!("free")).into_record(Currency::USD).unwrap_err();
        assert_eq!(err, CatalogError::MissingPrice("tree-runner".to_string()));
    }

    #[test]
    fn test_negative_colors_is_error() {
        let err = with("numOfColors", json!(-1)).into_record(Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_listing_isolates_bad_records() {
        let feed = json!([
            base(),
            { "slug": "broken", "name": "Broken", "price": 100, "numOfColors": 1 },
            { "slug": 42 }
        ])
        .to_string();

        let records = parse_listing(&feed, Currency::USD).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(CatalogError::InvalidReleaseDate { .. })
        ));
        assert!(matches!(records[2], Err(CatalogError::Serialization(_))));
    }

    #[test]
    fn test_listing_rejects_non_array() {
        let err = parse_listing("{\"slug\": \"x\"}", Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
