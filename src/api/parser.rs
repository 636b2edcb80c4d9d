// src/api/parser.rs
//! Decoding of hacoCMS API responses.
//!
//! Success bodies are decoded straight into the domain model; error bodies
//! are turned into [`AppError::HacoCmsService`] with the API's message when
//! one can be found.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, HacoCmsErrorCode};
use crate::model::{PageResponse, RemoteRecord};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error body shape returned by hacoCMS on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Parse any hacoCMS response into `T`, mapping non-success statuses to errors.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => error.message,
        Err(_) if body.trim().is_empty() => format!("HTTP {} from {}", status, url),
        Err(_) => format!("HTTP {} from {}: {}", status, url, preview(body)),
    };

    AppError::HacoCmsService {
        code: HacoCmsErrorCode::from_http_status(status.as_u16()),
        message,
        status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

/// Parse one page of a list API.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<PageResponse, AppError> {
    parse_api_response(result)
}

/// Parse the record of a single-item API.
pub fn parse_record_response(result: ApiResponse<String>) -> Result<RemoteRecord, AppError> {
    parse_api_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            url: "https://demo.hacocms.com/api/v1/entries".to_string(),
        }
    }

    #[test]
    fn parses_page_with_meta() {
        let page = parse_page_response(response(
            200,
            r#"{
                "data": [
                    {"id": "a1", "title": "one", "closedAt": null},
                    {"id": "b2", "title": "two", "closedAt": null}
                ],
                "meta": {"total": 2, "limit": 100, "offset": 0}
            }"#,
        ))
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].id().as_str(), "b2");
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.meta.limit, 100);
        assert_eq!(page.meta.offset, 0);
    }

    #[test]
    fn parses_single_record() {
        let record =
            parse_record_response(response(200, r#"{"id": "site", "name": "demo"}"#)).unwrap();
        assert_eq!(record.id().as_str(), "site");
    }

    #[test]
    fn record_without_id_is_malformed() {
        let err = parse_record_response(response(200, r#"{"name": "demo"}"#)).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn error_body_message_is_used() {
        let err = parse_page_response(response(401, r#"{"message": "Unauthorized"}"#))
            .unwrap_err();
        match err {
            AppError::HacoCmsService {
                code,
                message,
                status,
            } => {
                assert_eq!(code, HacoCmsErrorCode::Unauthorized);
                assert_eq!(message, "Unauthorized");
                assert_eq!(status, StatusCode::UNAUTHORIZED);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_is_previewed() {
        let body = "x".repeat(500);
        let err = parse_page_response(response(502, &body)).unwrap_err();
        let AppError::HacoCmsService { code, message, .. } = err else {
            panic!("expected service error");
        };
        assert_eq!(code, HacoCmsErrorCode::ServerError(502));
        assert!(message.ends_with("..."));
        assert!(message.len() < 300);
    }

    #[test]
    fn empty_error_body_mentions_status() {
        let err = parse_record_response(response(404, "")).unwrap_err();
        assert!(err.to_string().contains("404"));
        assert!(err.service_code().unwrap().is_not_found());
    }
}
