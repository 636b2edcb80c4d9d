// src/api/client.rs
//! Thin HTTP client wrapper for the hacoCMS API.
//!
//! Handles authentication headers, URL construction and the raw request;
//! decoding is left to `parser`.

use crate::constants::{HACOCMS_API_PATH, HACOCMS_DRAFT_TOKEN_HEADER, HTTP_REQUEST_TIMEOUT};
use crate::error::AppError;
use crate::model::{ListQuery, PageResponse, RemoteRecord};
use crate::types::{AccessToken, Endpoint, ValidatedUrl, ValidationError};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for hacoCMS API requests.
#[derive(Clone)]
pub struct HacoCmsHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl HacoCmsHttpClient {
    /// Creates a client for the project at `base_url`.
    ///
    /// The draft token, when given, lets the API return unpublished records.
    pub fn new(
        base_url: &ValidatedUrl,
        access_token: &AccessToken,
        draft_token: Option<&AccessToken>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(access_token, draft_token)?)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.clone(),
        })
    }

    /// Creates the default headers for hacoCMS API requests.
    fn create_headers(
        access_token: &AccessToken,
        draft_token: Option<&AccessToken>,
    ) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", access_token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid access token format: {}", e))
            })?,
        );

        if let Some(draft_token) = draft_token {
            headers.insert(
                HACOCMS_DRAFT_TOKEN_HEADER,
                header::HeaderValue::from_str(draft_token.as_str()).map_err(|e| {
                    AppError::MissingConfiguration(format!("Invalid draft token format: {}", e))
                })?,
            );
        }

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Full URL of an endpoint, e.g. `https://x.hacocms.com/api/v1/entries`.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<url::Url, AppError> {
        let raw = format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            HACOCMS_API_PATH,
            endpoint.as_str()
        );
        url::Url::parse(&raw).map_err(|e| {
            ValidationError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Makes a GET request to `endpoint` with the given query parameters.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        query: &Q,
    ) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;

        log::debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::HacoCmsRepository for HacoCmsHttpClient {
    async fn get_list(
        &self,
        endpoint: &Endpoint,
        query: &ListQuery,
    ) -> Result<PageResponse, AppError> {
        let response = self.get(endpoint, query).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_page_response(result)
    }

    async fn get_single(&self, endpoint: &Endpoint) -> Result<RemoteRecord, AppError> {
        let no_query: &[(&str, &str)] = &[];
        let response = self.get(endpoint, no_query).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_record_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
