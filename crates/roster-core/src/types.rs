//! Customer domain types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::capitalize_first_letter;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque, stable customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque continuation token returned by a page fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

/// Role tag carried by a customer record.
///
/// Unknown tags are kept verbatim in [`Role::Other`]; they are legal but never
/// match a filter tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Other(tag) => tag,
        }
    }

    /// Display label, e.g. `"Admin"`
    pub fn label(&self) -> String {
        capitalize_first_letter(self.as_str())
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ADMIN" => Role::Admin,
            "MANAGER" => Role::Manager,
            _ => Role::Other(tag),
        }
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Role::from(tag.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role filter tabs, in display order. The first entry is the initial tab.
pub const ROLE_TABS: [RoleTab; 2] = [RoleTab::Admin, RoleTab::Manager];

/// One of the fixed role filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTab {
    #[default]
    Admin,
    Manager,
}

impl RoleTab {
    /// The role a record must carry to show under this tab
    pub fn role(self) -> Role {
        match self {
            RoleTab::Admin => Role::Admin,
            RoleTab::Manager => Role::Manager,
        }
    }

    pub fn matches(self, role: &Role) -> bool {
        matches!(
            (self, role),
            (RoleTab::Admin, Role::Admin) | (RoleTab::Manager, Role::Manager)
        )
    }

    pub fn label(self) -> String {
        self.role().label()
    }

    /// Position within [`ROLE_TABS`]
    pub fn index(self) -> usize {
        ROLE_TABS.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        ROLE_TABS[(self.index() + 1) % ROLE_TABS.len()]
    }

    pub fn prev(self) -> Self {
        ROLE_TABS[(self.index() + ROLE_TABS.len() - 1) % ROLE_TABS.len()]
    }

    /// Tab at a 0-based position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        ROLE_TABS.get(index).copied()
    }

    /// Parse a tab from a user-supplied name (`admin`, `MANAGER`, ...)
    pub fn parse(name: &str) -> Option<Self> {
        ROLE_TABS
            .iter()
            .copied()
            .find(|t| t.role().as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RoleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records and pages
// ─────────────────────────────────────────────────────────────────────────────

/// A single customer as fetched from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "nullable_role")]
    pub role: Role,
}

/// A `null` role tag is kept as the empty role; it matches no tab.
fn nullable_role<'de, D>(deserializer: D) -> std::result::Result<Role, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.map(Role::from).unwrap_or_default())
}

impl CustomerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            id: CustomerId::new(id),
            name: Some(name.into()),
            email: None,
            role: role.into(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name for display; empty when the backend sent none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// First character of the name, used for the avatar.
    ///
    /// `None` when the name is missing or empty.
    pub fn initial(&self) -> Option<char> {
        self.name.as_deref().and_then(|n| n.chars().next())
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle_folded` must already be lower-cased. An empty needle matches
    /// every record; a missing name never matches a non-empty needle.
    pub fn name_contains(&self, needle_folded: &str) -> bool {
        if needle_folded.is_empty() {
            return true;
        }
        self.name
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(needle_folded))
    }
}

/// One page of customer records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(default)]
    pub items: Vec<CustomerRecord>,

    #[serde(rename = "nextToken", default)]
    pub next_token: Option<Cursor>,
}

impl PageResult {
    pub fn new(items: Vec<CustomerRecord>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(Cursor::new(token));
        self
    }
}

/// Page request handed to the data port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Page size; always positive
    pub limit: u32,
    pub cursor: Option<Cursor>,
}

impl ListQuery {
    /// Build a query, clamping a zero limit up to one
    pub fn new(limit: u32, cursor: Option<Cursor>) -> Self {
        Self {
            limit: limit.max(1),
            cursor,
        }
    }

    pub fn first_page(limit: u32) -> Self {
        Self::new(limit, None)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::first_page(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_known_tags() {
        assert_eq!(Role::from("ADMIN"), Role::Admin);
        assert_eq!(Role::from("MANAGER"), Role::Manager);
        assert_eq!(Role::from("OWNER"), Role::Other("OWNER".to_string()));
    }

    #[test]
    fn test_role_label() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::Other("SUPPORT".into()).label(), "Support");
        assert_eq!(Role::default().label(), "");
    }

    #[test]
    fn test_role_serde_keeps_unknown_tag() {
        let role: Role = serde_json::from_str("\"AUDITOR\"").unwrap();
        assert_eq!(role, Role::Other("AUDITOR".into()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"AUDITOR\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn test_role_tab_defaults_to_first_tab() {
        assert_eq!(RoleTab::default(), ROLE_TABS[0]);
    }

    #[test]
    fn test_role_tab_matches_only_its_role() {
        assert!(RoleTab::Admin.matches(&Role::Admin));
        assert!(!RoleTab::Admin.matches(&Role::Manager));
        assert!(!RoleTab::Manager.matches(&Role::Other("MANAGER ".into())));
    }

    #[test]
    fn test_role_tab_cycles() {
        assert_eq!(RoleTab::Admin.next(), RoleTab::Manager);
        assert_eq!(RoleTab::Manager.next(), RoleTab::Admin);
        assert_eq!(RoleTab::Admin.prev(), RoleTab::Manager);
    }

    #[test]
    fn test_role_tab_parse() {
        assert_eq!(RoleTab::parse("admin"), Some(RoleTab::Admin));
        assert_eq!(RoleTab::parse("MANAGER"), Some(RoleTab::Manager));
        assert_eq!(RoleTab::parse("owner"), None);
        assert_eq!(RoleTab::from_index(1), Some(RoleTab::Manager));
        assert_eq!(RoleTab::from_index(2), None);
    }

    #[test]
    fn test_record_initial() {
        let record = CustomerRecord::new("1", "David Miler", "ADMIN");
        assert_eq!(record.initial(), Some('D'));

        let mut nameless = record.clone();
        nameless.name = None;
        assert_eq!(nameless.initial(), None);

        nameless.name = Some(String::new());
        assert_eq!(nameless.initial(), None);
    }

    #[test]
    fn test_record_name_contains() {
        let record = CustomerRecord::new("1", "David Miler", "ADMIN");
        assert!(record.name_contains("david"));
        assert!(record.name_contains("miler"));
        assert!(record.name_contains(""));
        assert!(!record.name_contains("zzz"));
    }

    #[test]
    fn test_nameless_record_only_matches_empty_search() {
        let mut record = CustomerRecord::new("1", "x", "ADMIN");
        record.name = None;
        assert!(record.name_contains(""));
        assert!(!record.name_contains("x"));
    }

    #[test]
    fn test_record_deserializes_wire_shape() {
        let json = r#"{"id":"1","name":"David Miler","email":"david@example.com","role":"ADMIN","__typename":"ZellerCustomer"}"#;
        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.email.as_deref(), Some("david@example.com"));
        assert_eq!(record.role, Role::Admin);
    }

    #[test]
    fn test_record_tolerates_missing_name() {
        let record: CustomerRecord = serde_json::from_str(r#"{"id":"9","name":null,"role":"MANAGER"}"#).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.display_name(), "");
    }

    #[test]
    fn test_record_with_null_role_matches_no_tab() {
        let record: CustomerRecord =
            serde_json::from_str(r#"{"id":"2","name":"Sam","role":null}"#).unwrap();
        assert_eq!(record.role, Role::default());
        assert!(!RoleTab::Admin.matches(&record.role));
        assert!(!RoleTab::Manager.matches(&record.role));

        let missing: CustomerRecord = serde_json::from_str(r#"{"id":"3"}"#).unwrap();
        assert_eq!(missing.role, Role::default());
    }

    #[test]
    fn test_list_query_clamps_zero_limit() {
        assert_eq!(ListQuery::new(0, None).limit, 1);
        assert_eq!(ListQuery::default().limit, DEFAULT_PAGE_SIZE);
    }
}
