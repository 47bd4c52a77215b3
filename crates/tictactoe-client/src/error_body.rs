//! Structured error bodies.
//!
//! Recognized shapes, first match wins:
//! - `{"error": {"code": "...", "message": "..."}}`
//! - `{"detail": "..."}` or `{"detail": [{"msg": "..."}, ...]}`
//! - `{"message": "...", "code": "..."}`

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorBody {
    pub code: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    error: Option<Inner>,
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct Inner {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn parse(body: &str) -> Option<ErrorBody> {
    let envelope: Envelope = serde_json::from_str(body).ok()?;

    if let Some(inner) = envelope.error
        && let Some(message) = inner.message.filter(|m| !m.is_empty())
    {
        return Some(ErrorBody {
            code: inner.code,
            message,
        });
    }

    if let Some(detail) = envelope.detail
        && let Some(message) = detail_message(&detail)
    {
        return Some(ErrorBody {
            code: envelope.code,
            message,
        });
    }

    envelope
        .message
        .filter(|m| !m.is_empty())
        .map(|message| ErrorBody {
            code: envelope.code,
            message,
        })
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Message for a failed response: structured message, then body text, then reason.
pub(crate) fn describe(status: reqwest::StatusCode, body: &str) -> (Option<String>, String) {
    if let Some(parsed) = parse(body) {
        return (parsed.code, parsed.message);
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return (None, trimmed.to_string());
    }
    let reason = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP status {}", status.as_u16()));
    (None, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_envelope() {
        let parsed = parse(r#"{"error": {"code": "cell_occupied", "message": "Cell taken"}}"#);
        assert_eq!(
            parsed,
            Some(ErrorBody {
                code: Some("cell_occupied".into()),
                message: "Cell taken".into(),
            })
        );
    }

    #[test]
    fn test_detail_string_and_list() {
        assert_eq!(
            parse(r#"{"detail": "Game not found"}"#).map(|e| e.message),
            Some("Game not found".to_string())
        );
        assert_eq!(
            parse(r#"{"detail": [{"msg": "row out of range"}, {"msg": "col out of range"}]}"#)
                .map(|e| e.message),
            Some("row out of range; col out of range".to_string())
        );
    }

    #[test]
    fn test_plain_message() {
        assert_eq!(
            parse(r#"{"message": "Not your turn", "code": "wrong_turn"}"#),
            Some(ErrorBody {
                code: Some("wrong_turn".into()),
                message: "Not your turn".into(),
            })
        );
    }

    #[test]
    fn test_unrecognized_bodies() {
        assert_eq!(parse("Internal Server Error"), None);
        assert_eq!(parse(r#"{"ok": false}"#), None);
        assert_eq!(parse(r#"[1, 2]"#), None);
    }

    #[test]
    fn test_describe_falls_back_to_text_then_reason() {
        assert_eq!(
            describe(StatusCode::BAD_REQUEST, "  Illegal move \n"),
            (None, "Illegal move".to_string())
        );
        assert_eq!(
            describe(StatusCode::NOT_FOUND, ""),
            (None, "Not Found".to_string())
        );
    }
}
