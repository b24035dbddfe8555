//! GraphQL wire format for the customer backend
//!
//! Request bodies are plain `{ "query", "variables" }` JSON documents. Response
//! parsing normalises every failure into one of the fetch-failure error kinds:
//! - a non-empty `errors` array -> [`Error::Backend`]
//! - missing `data` or page object, or an unparseable body -> [`Error::MalformedResponse`]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord, ListQuery, PageResult};

/// Response field holding the page for [`LIST_CUSTOMERS_QUERY`]
pub const LIST_CUSTOMERS_FIELD: &str = "listZellerCustomers";

/// Response field holding the record for [`GET_CUSTOMER_QUERY`]
pub const GET_CUSTOMER_FIELD: &str = "getZellerCustomer";

pub const LIST_CUSTOMERS_QUERY: &str = r#"query ListZellerCustomers(
  $filter: TableZellerCustomerFilterInput
  $limit: Int
  $nextToken: String
) {
  listZellerCustomers(filter: $filter, limit: $limit, nextToken: $nextToken) {
    items {
      id
      name
      email
      role
      __typename
    }
    nextToken
    __typename
  }
}"#;

pub const GET_CUSTOMER_QUERY: &str = r#"query GetZellerCustomer($id: String!) {
  getZellerCustomer(id: $id) {
    id
    name
    email
    role
    __typename
  }
}"#;

/// Longest response excerpt carried inside a malformed-response error
const MAX_BODY_EXCERPT: usize = 512;

/// A GraphQL request document
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListVariables<'a> {
    pub limit: u32,
    pub next_token: Option<&'a str>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GetVariables<'a> {
    pub id: &'a str,
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,

    #[serde(rename = "errorType", default)]
    pub error_type: Option<String>,
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            Some(kind) => write!(f, "{} ({})", self.message, kind),
            None => f.write_str(&self.message),
        }
    }
}

/// Build the request document for a page query
pub fn list_request(query: &ListQuery) -> GraphQlRequest<'static, ListVariables<'_>> {
    GraphQlRequest {
        query: LIST_CUSTOMERS_QUERY,
        variables: ListVariables {
            limit: query.limit,
            next_token: query.cursor.as_ref().map(|c| c.as_str()),
        },
    }
}

/// Build the request document for a single-customer query
pub fn get_request(id: &CustomerId) -> GraphQlRequest<'static, GetVariables<'_>> {
    GraphQlRequest {
        query: GET_CUSTOMER_QUERY,
        variables: GetVariables { id: id.as_str() },
    }
}

/// Parse a page response body
pub fn parse_list_response(body: &str) -> Result<PageResult> {
    let value = parse_body(body)?;
    check_errors(&value)?;

    let page = data_field(&value, LIST_CUSTOMERS_FIELD)
        .filter(|page| page.get("items").is_some_and(Value::is_array))
        .ok_or_else(|| Error::malformed_response(excerpt(body)))?;

    PageResult::deserialize(page).map_err(|e| {
        warn!("Page did not match the customer shape: {}", e);
        Error::malformed_response(excerpt(body))
    })
}

/// Parse a single-customer response body.
///
/// A `null` record is a valid "not found" answer.
pub fn parse_get_response(body: &str) -> Result<Option<CustomerRecord>> {
    let value = parse_body(body)?;
    check_errors(&value)?;

    let data = value
        .get("data")
        .filter(|d| d.is_object())
        .ok_or_else(|| Error::malformed_response(excerpt(body)))?;

    match data.get(GET_CUSTOMER_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(record) => CustomerRecord::deserialize(record)
            .map(Some)
            .map_err(|_| Error::malformed_response(excerpt(body))),
    }
}

/// Summarise the `errors` array of a body, if it has one.
///
/// Used for non-2xx HTTP responses, which usually still carry GraphQL errors.
pub fn error_summary(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    collect_errors(&value)
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|_| Error::malformed_response(excerpt(body)))
}

fn check_errors(value: &Value) -> Result<()> {
    match collect_errors(value) {
        Some(summary) => Err(Error::backend(summary)),
        None => Ok(()),
    }
}

fn collect_errors(value: &Value) -> Option<String> {
    let errors: Vec<GraphQlError> = value
        .get("errors")
        .and_then(|e| Vec::<GraphQlError>::deserialize(e).ok())
        .unwrap_or_default();

    if errors.is_empty() {
        return None;
    }

    Some(
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn data_field<'v>(value: &'v Value, field: &str) -> Option<&'v Value> {
    value
        .get("data")
        .and_then(|d| d.get(field))
        .filter(|v| !v.is_null())
}

fn excerpt(body: &str) -> String {
    if body.len() <= MAX_BODY_EXCERPT {
        return body.to_string();
    }
    let mut end = MAX_BODY_EXCERPT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Cursor, Role};

    #[test]
    fn test_list_request_first_page() {
        let query = ListQuery::first_page(10);
        let request = list_request(&query);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["variables"]["limit"], 10);
        assert!(json["variables"]["nextToken"].is_null());
        assert!(json["query"]
            .as_str()
            .unwrap()
            .contains("listZellerCustomers"));
    }

    #[test]
    fn test_list_request_carries_cursor() {
        let query = ListQuery::new(10, Some(Cursor::new("abc")));
        let json = serde_json::to_value(list_request(&query)).unwrap();
        assert_eq!(json["variables"]["nextToken"], "abc");
    }

    #[test]
    fn test_get_request_variables() {
        let id = CustomerId::new("42");
        let json = serde_json::to_value(get_request(&id)).unwrap();
        assert_eq!(json["variables"]["id"], "42");
    }

    #[test]
    fn test_parse_list_response() {
        let body = r#"{"data":{"listZellerCustomers":{"items":[
            {"id":"1","name":"David Miler","email":"d@example.com","role":"ADMIN","__typename":"ZellerCustomer"},
            {"id":"2","name":"Lynn Warr","email":"l@example.com","role":"MANAGER","__typename":"ZellerCustomer"}
        ],"nextToken":"tok-2","__typename":"ZellerCustomerConnection"}}}"#;

        let page = parse_list_response(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].display_name(), "David Miler");
        assert_eq!(page.items[1].role, Role::Manager);
        assert_eq!(page.next_token, Some(Cursor::new("tok-2")));
    }

    #[test]
    fn test_null_role_keeps_the_rest_of_the_page() {
        let body = r#"{"data":{"listZellerCustomers":{"items":[
            {"id":"1","name":"David Miler","role":"ADMIN"},
            {"id":"2","name":"No Role","role":null}
        ],"nextToken":null}}}"#;

        let page = parse_list_response(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].role, Role::Admin);
        assert_eq!(page.items[1].role, Role::default());
    }

    #[test]
    fn test_parse_list_response_without_next_token() {
        let body = r#"{"data":{"listZellerCustomers":{"items":[],"nextToken":null}}}"#;
        let page = parse_list_response(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_token, None);
    }

    #[test]
    fn test_graphql_errors_are_backend_failures() {
        let body = r#"{"data":null,"errors":[{"message":"Unauthorized","errorType":"UnauthorizedException"}]}"#;
        let err = parse_list_response(body).unwrap_err();
        assert!(matches!(err, Error::Backend { .. }));
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_missing_page_is_malformed() {
        let err = parse_list_response(r#"{"data":{}}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.to_string().starts_with("Invalid API response"));

        let err = parse_list_response(r#"{"data":{"listZellerCustomers":{"nextToken":null}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = parse_list_response("<html>gateway timeout</html>").unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(err.to_string().contains("gateway timeout"));
    }

    #[test]
    fn test_parse_get_response_found_and_missing() {
        let found = r#"{"data":{"getZellerCustomer":{"id":"7","name":"Bob","email":null,"role":"MANAGER"}}}"#;
        let record = parse_get_response(found).unwrap().unwrap();
        assert_eq!(record.id.as_str(), "7");

        let missing = r#"{"data":{"getZellerCustomer":null}}"#;
        assert_eq!(parse_get_response(missing).unwrap(), None);

        assert!(parse_get_response(r#"{"nothing":1}"#).is_err());
    }

    #[test]
    fn test_error_summary_joins_messages() {
        let body = r#"{"errors":[{"message":"one"},{"message":"two"}]}"#;
        assert_eq!(error_summary(body).as_deref(), Some("one; two"));
        assert_eq!(error_summary("not json"), None);
        assert_eq!(error_summary(r#"{"errors":[]}"#), None);
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let long = "x".repeat(MAX_BODY_EXCERPT * 2);
        assert!(excerpt(&long).chars().count() <= MAX_BODY_EXCERPT + 1);
    }
}
