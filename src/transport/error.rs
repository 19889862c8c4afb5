use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::ApiError;

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorJson {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<ApiErrorDetailsJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDetailsJson {
    #[serde(default)]
    fields: BTreeMap<String, Vec<String>>,
}

/// Normalize a non-2xx response into [`ApiError`].
///
/// The API wraps rejections in `{code, message, errors: {fields}}`; when the
/// body is not that shape (proxies, HTML error pages), the raw body stands in
/// for the message so nothing is silently dropped.
pub fn decode_api_error(http_status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorJson>(body) {
        return ApiError {
            http_status,
            code: parsed.code,
            message: parsed.message,
            field_errors: parsed.errors.map(|details| details.fields).unwrap_or_default(),
        };
    }

    let trimmed = body.trim();
    ApiError {
        http_status,
        code: None,
        message: if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        },
        field_errors: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_structured_error_payload() {
        let json = r#"
        {
          "code": 400,
          "message": "Validation failed",
          "errors": {
            "fields": {
              "phones": ["Phone number is invalid"]
            }
          }
        }
        "#;

        let error = decode_api_error(400, json);
        assert_eq!(error.http_status, 400);
        assert_eq!(error.code, Some(400));
        assert_eq!(error.message.as_deref(), Some("Validation failed"));
        assert_eq!(
            error.field_errors.get("phones").map(Vec::as_slice),
            Some(&["Phone number is invalid".to_owned()][..])
        );
    }

    #[test]
    fn not_found_payload_without_field_errors() {
        let json = r#"{ "code": 404, "message": "Not found" }"#;
        let error = decode_api_error(404, json);
        assert_eq!(error.code, Some(404));
        assert_eq!(error.message.as_deref(), Some("Not found"));
        assert!(error.field_errors.is_empty());
    }

    #[test]
    fn unparseable_body_is_kept_as_message() {
        let error = decode_api_error(502, "Bad Gateway");
        assert_eq!(error.http_status, 502);
        assert_eq!(error.code, None);
        assert_eq!(error.message.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn blank_body_maps_to_no_message() {
        let error = decode_api_error(503, "   ");
        assert_eq!(error.message, None);
    }
}
