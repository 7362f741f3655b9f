//! DOM-free helpers shared by transport and views.

use beatly_api_models::ErrorBody;
use chrono::{DateTime, Utc};

/// Fixed fallback shown when no server or transport detail is available.
pub const FALLBACK_ERROR: &str = "Request failed";

/// Derive a human-readable error message from a failed API exchange.
///
/// Walks the server error document first (`details`, then `message`, then
/// `error`), then the transport-level message, and finally a fixed fallback.
/// None of the inputs may be assumed present: the body can be absent,
/// non-JSON, or a JSON object carrying none of the known fields.
#[must_use]
pub fn error_message(body: Option<&str>, transport: Option<&str>) -> String {
    if let Some(parsed) = body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok()) {
        for field in [parsed.details, parsed.message, parsed.error] {
            if let Some(text) = field {
                let text = text.trim().to_string();
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }
    transport
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| FALLBACK_ERROR.to_string(), ToString::to_string)
}

/// Display label for an optional upload timestamp.
#[must_use]
pub fn date_label(created_at: Option<&DateTime<Utc>>) -> String {
    created_at.map_or_else(
        || "Unknown date".to_string(),
        |when| when.format("%b %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_ERROR, date_label, error_message};
    use chrono::{TimeZone, Utc};

    #[test]
    fn details_win_over_everything() {
        let body = r#"{"details":"title too short","message":"bad request","error":"oops"}"#;
        assert_eq!(error_message(Some(body), Some("500")), "title too short");
    }

    #[test]
    fn message_then_error_fill_in() {
        assert_eq!(
            error_message(Some(r#"{"message":"bad request","error":"oops"}"#), None),
            "bad request"
        );
        assert_eq!(error_message(Some(r#"{"error":"oops"}"#), None), "oops");
    }

    #[test]
    fn transport_message_backs_up_an_empty_body() {
        assert_eq!(error_message(Some("{}"), Some("connection reset")), "connection reset");
        assert_eq!(error_message(None, Some("connection reset")), "connection reset");
    }

    #[test]
    fn non_json_body_falls_through() {
        assert_eq!(error_message(Some("<html>502</html>"), None), FALLBACK_ERROR);
    }

    #[test]
    fn blank_fields_do_not_count() {
        assert_eq!(error_message(Some(r#"{"message":"  "}"#), None), FALLBACK_ERROR);
        assert_eq!(error_message(None, Some("   ")), FALLBACK_ERROR);
    }

    #[test]
    fn dates_format_or_fall_back() {
        let when = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(date_label(Some(&when)), "Mar 7, 2025");
        assert_eq!(date_label(None), "Unknown date");
    }
}
