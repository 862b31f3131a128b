//! Lenient decoding of the `{ data: [...], meta: { total } }` envelope.
//!
//! The body must be JSON, but everything inside it degrades to defaults:
//! a missing list means no items, a missing total means zero, and items that
//! cannot be identified are skipped.

use chrono::{DateTime, NaiveDate};
use ideas_logging::ideas_warn;
use serde::Deserialize;
use serde_json::Value;

use crate::{GatewayError, ListingPage, RemoteItem};

#[derive(Debug, Default, Deserialize)]
struct WireItem {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    small_image: Option<Vec<WireImage>>,
    #[serde(default)]
    medium_image: Option<Vec<WireImage>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireImage {
    #[serde(default)]
    url: Option<String>,
}

pub fn parse_listing(body: &[u8]) -> Result<ListingPage, GatewayError> {
    let root: Value = serde_json::from_slice(body).map_err(|err| GatewayError::MalformedResponse {
        message: err.to_string(),
    })?;

    let items = match root.get("data").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| decode_item(index, entry))
            .collect(),
        None => Vec::new(),
    };
    let total_count = root
        .pointer("/meta/total")
        .and_then(non_negative_count)
        .unwrap_or(0);

    Ok(ListingPage { items, total_count })
}

fn decode_item(index: usize, entry: &Value) -> Option<RemoteItem> {
    let wire = match WireItem::deserialize(entry) {
        Ok(wire) => wire,
        Err(err) => {
            ideas_warn!("Skipping item {}: {}", index, err);
            return None;
        }
    };
    let Some(id) = wire.id.as_ref().and_then(identifier) else {
        ideas_warn!("Skipping item {} without identifier", index);
        return None;
    };

    let thumbnail_url = first_url(wire.small_image.as_deref())
        .or_else(|| first_url(wire.medium_image.as_deref()));

    Some(RemoteItem {
        id,
        title: wire.title.unwrap_or_default(),
        published_at: wire.published_at.as_deref().and_then(parse_publish_date),
        thumbnail_url,
    })
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn non_negative_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn first_url(images: Option<&[WireImage]>) -> Option<String> {
    images?
        .first()?
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ToOwned::to_owned)
}

/// Accepts RFC 3339 timestamps and anything starting with `YYYY-MM-DD`.
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_envelope_is_decoded() {
        let body = br#"{
            "data": [{
                "id": 7,
                "title": "Hello",
                "published_at": "2024-02-10 08:00:00",
                "small_image": [{"url": "https://cdn.example.com/s.jpg"}],
                "medium_image": [{"url": "https://cdn.example.com/m.jpg"}]
            }],
            "meta": {"total": 42}
        }"#;
        let page = parse_listing(body).unwrap();
        assert_eq!(page.total_count, 42);
        assert_eq!(
            page.items,
            vec![RemoteItem {
                id: "7".to_string(),
                title: "Hello".to_string(),
                published_at: NaiveDate::from_ymd_opt(2024, 2, 10),
                thumbnail_url: Some("https://cdn.example.com/s.jpg".to_string()),
            }]
        );
    }

    #[test]
    fn missing_sections_mean_no_results() {
        assert_eq!(parse_listing(b"{}").unwrap(), ListingPage::default());
        assert_eq!(
            parse_listing(br#"{"data": null, "meta": {}}"#).unwrap(),
            ListingPage::default()
        );
    }

    #[test]
    fn medium_image_is_used_when_small_is_empty() {
        let body = br#"{"data": [{"id": "a", "small_image": [], "medium_image": [{"url": "https://x.test/m.png"}]}]}"#;
        let page = parse_listing(body).unwrap();
        assert_eq!(page.items[0].thumbnail_url.as_deref(), Some("https://x.test/m.png"));
        assert_eq!(page.items[0].title, "");
        assert_eq!(page.items[0].published_at, None);
    }

    #[test]
    fn items_without_identifier_or_with_wrong_shape_are_skipped() {
        let body = br#"{"data": [{"title": "no id"}, 3, {"id": "ok", "title": 5}, {"id": "kept"}], "meta": {"total": "4"}}"#;
        let page = parse_listing(body).unwrap();
        let ids: Vec<_> = page.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["kept"]);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn negative_total_falls_back_to_zero() {
        let page = parse_listing(br#"{"data": [], "meta": {"total": -3}}"#).unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_listing(b"<html></html>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse { .. }));
    }

    #[test]
    fn publish_dates_accept_common_shapes() {
        assert_eq!(
            parse_publish_date("2023-11-05T23:30:00+07:00"),
            NaiveDate::from_ymd_opt(2023, 11, 5)
        );
        assert_eq!(parse_publish_date("2023-11-05"), NaiveDate::from_ymd_opt(2023, 11, 5));
        assert_eq!(parse_publish_date("yesterday"), None);
        assert_eq!(parse_publish_date(""), None);
    }
}
