//! HTTP client for the managed GraphQL endpoint
//!
//! Authenticates with a static API key (`x-api-key` header). Request timeouts
//! are enforced here; callers never time out fetches themselves.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord, ListQuery, PageResult};

use crate::graphql;
use crate::source::CustomerSource;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const API_KEY_HEADER: &str = "x-api-key";

/// Connection options for [`AppSyncClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: Url,
    pub api_key: String,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_key: api_key.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// GraphQL-over-HTTP implementation of the customer data port
#[derive(Debug, Clone)]
pub struct AppSyncClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl AppSyncClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {}", e)))?;

        info!("Customer backend: {}", options.endpoint);

        Ok(Self {
            http,
            endpoint: options.endpoint,
            api_key: options.api_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST a GraphQL document and return the raw response body
    async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<String> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(describe_transport_error)?;

        if !status.is_success() {
            let detail = graphql::error_summary(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });
            return Err(Error::backend(format!("HTTP {}: {}", status.as_u16(), detail)));
        }

        Ok(text)
    }
}

impl CustomerSource for AppSyncClient {
    async fn list_customers(&self, query: ListQuery) -> Result<PageResult> {
        debug!(
            "listCustomers limit={} cursor={:?}",
            query.limit,
            query.cursor.as_ref().map(|c| c.as_str())
        );

        let body = self.post(&graphql::list_request(&query)).await?;
        let page = graphql::parse_list_response(&body)?;

        debug!(
            "listCustomers returned {} items (more: {})",
            page.items.len(),
            page.next_token.is_some()
        );
        Ok(page)
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Option<CustomerRecord>> {
        debug!("getCustomer id={}", id);
        let body = self.post(&graphql::get_request(id)).await?;
        graphql::parse_get_response(&body)
    }
}

fn describe_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::network(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        Error::network(format!("Connection failed: {}", e))
    } else {
        Error::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ClientOptions {
        ClientOptions::new(
            Url::parse("https://example.appsync-api.eu-west-1.amazonaws.com/graphql").unwrap(),
            "da2-test-key",
        )
    }

    #[test]
    fn test_options_default_timeout() {
        assert_eq!(options().timeout, DEFAULT_REQUEST_TIMEOUT);
        let short = options().with_timeout(Duration::from_secs(2));
        assert_eq!(short.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = AppSyncClient::new(options()).unwrap();
        assert_eq!(
            client.endpoint().host_str(),
            Some("example.appsync-api.eu-west-1.amazonaws.com")
        );
    }

    #[test]
    fn test_unreachable_endpoint_is_network_failure() {
        // Port 9 (discard) on localhost is almost never listening
        let client = AppSyncClient::new(
            ClientOptions::new(Url::parse("http://127.0.0.1:9/graphql").unwrap(), "key")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = tokio_test::block_on(client.list_customers(ListQuery::default())).unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
        assert!(err.is_fetch_failure());
    }
}
