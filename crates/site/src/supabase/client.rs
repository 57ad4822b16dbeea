//! PostgREST client for the hosted backend.
//!
//! Uses `reqwest` directly; the REST surface is small enough that a generated
//! client buys nothing over typed rows in [`super::types`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use super::{DataSource, DataSourceError, Query, Table};
use crate::config::{SupabaseConfig, anon_key};

/// Body excerpt length kept in logs and error messages.
const BODY_EXCERPT_CHARS: usize = 200;

// =============================================================================
// SupabaseClient
// =============================================================================

/// Client for the Supabase REST API.
///
/// Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<SupabaseClientInner>,
}

struct SupabaseClientInner {
    client: reqwest::Client,
    rest_base: String,
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl SupabaseClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::Config` if the key can't be sent as a header,
    /// or `DataSourceError::Http` if the HTTP client fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, DataSourceError> {
        let key = anon_key(config);
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| DataSourceError::Config(format!("Invalid anon key format: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| DataSourceError::Config(format!("Invalid anon key format: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let rest_base = format!("{}/rest/v1", config.url.as_str().trim_end_matches('/'));

        Ok(Self {
            inner: Arc::new(SupabaseClientInner { client, rest_base }),
        })
    }

    /// Endpoint URL for a table.
    fn table_url(&self, table: Table) -> Result<Url, DataSourceError> {
        let raw = format!("{}/{}", self.inner.rest_base, table.as_str());
        Url::parse(&raw).map_err(|e| DataSourceError::Config(format!("Invalid endpoint {raw}: {e}")))
    }

    /// Full URL, query string included, for a select.
    fn select_url(&self, query: &Query) -> Result<Url, DataSourceError> {
        let mut url = self.table_url(query.table)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.to_params() {
                pairs.append_pair(&key, &value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl DataSource for SupabaseClient {
    fn backend_tag(&self) -> &'static str {
        "supabase"
    }

    #[instrument(skip(self), fields(table = %query.table))]
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, DataSourceError> {
        let url = self.select_url(query)?;
        let response = self.inner.client.get(url).send().await?;
        let text = read_success_body(response).await?;

        let rows: Vec<serde_json::Value> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %excerpt(&text),
                "Failed to parse PostgREST select response"
            );
            DataSourceError::Parse(e)
        })?;

        debug!(rows = rows.len(), "Select completed");
        Ok(rows)
    }

    #[instrument(skip(self, row), fields(table = %table))]
    async fn insert(&self, table: Table, row: serde_json::Value) -> Result<(), DataSourceError> {
        let url = self.table_url(table)?;
        let response = self
            .inner
            .client
            .post(url)
            .header("Prefer", "return=minimal")
            .json(&serde_json::Value::Array(vec![row]))
            .send()
            .await?;

        read_success_body(response).await?;
        debug!("Insert acknowledged");
        Ok(())
    }
}

/// Turn a non-success response into a `DataSourceError`, else return the body.
async fn read_success_body(response: reqwest::Response) -> Result<String, DataSourceError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1);
        return Err(DataSourceError::RateLimited(retry_after));
    }

    let text = response.text().await?;

    if !status.is_success() {
        let message = api_error_message(&text);
        tracing::error!(
            status = %status,
            body = %excerpt(&text),
            "Backend returned non-success status"
        );
        return Err(DataSourceError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(text)
}

/// Best human-readable message from an error body.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let mut message = err.message;
            if let Some(code) = err.code {
                message = format!("{message} ({code})");
            }
            if let Some(hint) = err.hint {
                message = format!("{message}; hint: {hint}");
            }
            message
        }
        Err(_) if body.trim().is_empty() => "(empty response body)".to_string(),
        Err(_) => excerpt(body),
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use axum::Router;
    use axum::body::Bytes;
    use axum::http::{Method, Uri};
    use axum::response::IntoResponse;
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;
    use crate::supabase::Direction;

    const TEST_KEY: &str = "eyJhbGciOiJIUzI1NiJ9.test.sig";

    fn client(url: &str) -> SupabaseClient {
        SupabaseClient::new(&SupabaseConfig {
            url: Url::parse(url).unwrap(),
            anon_key: SecretString::from(TEST_KEY),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    /// What the stub backend saw.
    #[derive(Debug)]
    struct Recorded {
        method: Method,
        uri: String,
        headers: HeaderMap,
        body: Bytes,
    }

    /// Start a backend on a random port that answers every request with the
    /// given response and records what it received.
    async fn stub_backend(
        status: StatusCode,
        extra_headers: &'static [(&'static str, &'static str)],
        body: &'static str,
    ) -> (SupabaseClient, Arc<Mutex<Vec<Recorded>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap, request_body: Bytes| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder.lock().unwrap().push(Recorded {
                        method,
                        uri: uri.to_string(),
                        headers,
                        body: request_body,
                    });
                    let mut response = (status, body).into_response();
                    for (name, value) in extra_headers {
                        response
                            .headers_mut()
                            .insert(*name, HeaderValue::from_static(*value));
                    }
                    response
                }
            },
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (client(&format!("http://{addr}")), seen)
    }

    fn single(seen: &Mutex<Vec<Recorded>>) -> Recorded {
        let mut seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        seen.pop().unwrap()
    }

    #[tokio::test]
    async fn test_select_sends_auth_headers_and_decodes_rows() {
        let (client, seen) =
            stub_backend(StatusCode::OK, &[], r#"[{"name":"Nasi Goreng"},{"name":"Es Teh"}]"#)
                .await;

        let rows = client
            .select(&Query::from(Table::MenuItems).order("created_at", Direction::Ascending))
            .await
            .unwrap();
        assert_eq!(rows, vec![json!({"name": "Nasi Goreng"}), json!({"name": "Es Teh"})]);

        let request = single(&seen);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.uri, "/rest/v1/menu_items?select=*&order=created_at.asc");
        assert_eq!(request.headers.get("apikey").unwrap(), TEST_KEY);
        assert_eq!(
            request.headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            format!("Bearer {TEST_KEY}")
        );
    }

    #[tokio::test]
    async fn test_insert_posts_single_row_array_with_minimal_return() {
        let (client, seen) = stub_backend(StatusCode::CREATED, &[], "").await;

        client
            .insert(Table::ContactMessages, json!({"name": "A", "subject": null}))
            .await
            .unwrap();

        let request = single(&seen);
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "/rest/v1/contact_messages");
        assert_eq!(request.headers.get("prefer").unwrap(), "return=minimal");
        assert_eq!(request.headers.get("apikey").unwrap(), TEST_KEY);
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!([{"name": "A", "subject": null}]));
    }

    #[tokio::test]
    async fn test_too_many_requests_reports_retry_after() {
        let (client, _) =
            stub_backend(StatusCode::TOO_MANY_REQUESTS, &[("retry-after", "7")], "").await;

        let err = client.select(&Query::from(Table::TeamMembers)).await.unwrap_err();
        assert!(matches!(err, DataSourceError::RateLimited(7)));
    }

    #[tokio::test]
    async fn test_error_status_carries_postgrest_message() {
        let (client, _) = stub_backend(
            StatusCode::BAD_REQUEST,
            &[("content-type", "application/json")],
            r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax for type uuid: \"x\""}"#,
        )
        .await;

        let err = client
            .insert(Table::ContactMessages, json!({"name": "A"}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DataSourceError::Api { status: 400, ref message }
                if message == "invalid input syntax for type uuid: \"x\" (22P02)"
        ));
    }

    #[tokio::test]
    async fn test_undecodable_select_body_is_parse_error() {
        let (client, _) = stub_backend(StatusCode::OK, &[], "<html>maintenance</html>").await;

        let err = client.select(&Query::from(Table::MenuItems)).await.unwrap_err();
        assert!(matches!(err, DataSourceError::Parse(_)));
    }

    #[test]
    fn test_table_url() {
        let client = client("https://abcd.supabase.co/");
        assert_eq!(
            client.table_url(Table::ContactMessages).unwrap().as_str(),
            "https://abcd.supabase.co/rest/v1/contact_messages"
        );
    }

    #[test]
    fn test_select_url_encodes_params() {
        let client = client("https://abcd.supabase.co");
        let query = Query::from(Table::MenuItems)
            .eq("is_featured", true)
            .order("created_at", Direction::Descending)
            .limit(4);
        assert_eq!(
            client.select_url(&query).unwrap().as_str(),
            "https://abcd.supabase.co/rest/v1/menu_items?select=*&is_featured=eq.true&order=created_at.desc&limit=4"
        );
    }

    #[test]
    fn test_api_error_message_postgrest_body() {
        let body = r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax for type uuid: \"x\""}"#;
        assert_eq!(
            api_error_message(body),
            "invalid input syntax for type uuid: \"x\" (22P02)"
        );
    }

    #[test]
    fn test_api_error_message_plain_body() {
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(api_error_message("  "), "(empty response body)");
    }

    #[test]
    fn test_rejects_key_with_newline() {
        let result = SupabaseClient::new(&SupabaseConfig {
            url: Url::parse("https://abcd.supabase.co").unwrap(),
            anon_key: SecretString::from("bad\nkey"),
            timeout: Duration::from_secs(5),
        });
        assert!(matches!(result, Err(DataSourceError::Config(_))));
    }
}
