//! Strong domain types for skill document composition.
//!
//! This module implements the newtype pattern for identifiers and the
//! data model shared by the catalog, the editing session, and the
//! synthesis engine.
//!
//! # Examples
//!
//! ```
//! use composer_core::{ComponentId, Section, TargetProfile};
//!
//! let section = Section::with_values("role", [("persona", "reviewer")]);
//! assert_eq!(section.component_id, ComponentId::new("role"));
//! assert_eq!(section.value("persona"), Some("reviewer"));
//!
//! let profile: TargetProfile = "cursor".parse().unwrap();
//! assert_eq!(profile, TargetProfile::Cursor);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Component identifier (newtype over String).
///
/// Sections refer to components by id; the reference is not ownership and
/// may point at a component missing from the registry.
///
/// # Examples
///
/// ```
/// use composer_core::ComponentId;
///
/// let id = ComponentId::new("separator");
/// assert_eq!(id.as_str(), "separator");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a new component identifier.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the component ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ComponentId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// Maps keyed by `ComponentId` can be queried with a plain `&str`.
impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Section identifier (newtype over String).
///
/// Unique within one document so sections can be reordered stably.
///
/// # Examples
///
/// ```
/// use composer_core::SectionId;
///
/// let a = SectionId::generate();
/// let b = SectionId::generate();
/// assert_ne!(a, b);
/// assert!(a.as_str().starts_with("section-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Creates a section identifier from an existing value.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, unique section identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("section-{}", Uuid::new_v4().simple()))
    }

    /// Returns the section ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SectionId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Input widget kind declared by a component field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line text input.
    #[default]
    Text,
    /// Multi-line text input.
    Textarea,
    /// Choice among `options`.
    Select,
    /// Color picker.
    Color,
    /// Checkbox stored as `"true"`/`"false"`.
    Boolean,
    /// Multi-choice badge picker.
    BadgesPicker,
}

/// Field declaration of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Placeholder name used as `{{name}}` in the template.
    pub name: String,

    /// Human-readable label.
    #[serde(default)]
    pub label: String,

    /// Input widget kind.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Value used when a section does not set this field.
    #[serde(default)]
    pub default: String,

    /// Allowed values for select-like fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Input placeholder hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Field {
    /// Creates a text field with the given name and default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_core::{Field, FieldType};
    ///
    /// let field = Field::text("persona", "assistant");
    /// assert_eq!(field.field_type, FieldType::Text);
    /// assert_eq!(field.default, "assistant");
    /// ```
    #[must_use]
    pub fn text(name: impl Into<String>, default: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            field_type: FieldType::Text,
            default: default.into(),
            options: None,
            placeholder: None,
        }
    }
}

/// Reusable template block defined once in the registry.
///
/// # Examples
///
/// ```
/// use composer_core::{Component, Field};
///
/// let component = Component::new("role", "content", "You are {{persona}}.")
///     .with_field(Field::text("persona", "a helpful assistant"));
///
/// assert_eq!(component.default_values()["persona"], "a helpful assistant");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique component id.
    pub id: ComponentId,

    /// Catalog grouping.
    #[serde(default)]
    pub category: String,

    /// Declared fields.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Template text with `{{fieldName}}` placeholders.
    #[serde(default)]
    pub template: String,
}

impl Component {
    /// Creates a component without fields.
    #[must_use]
    pub fn new(
        id: impl Into<ComponentId>,
        category: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            fields: Vec::new(),
            template: template.into(),
        }
    }

    /// Appends a field declaration.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field declaration by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns every field's default value keyed by field name.
    #[must_use]
    pub fn default_values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect()
    }
}

/// One configured instantiation of a component within a document.
///
/// Values are sparse: a section need not cover every declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Identity, unique within a document.
    pub id: SectionId,

    /// Referenced component.
    pub component_id: ComponentId,

    /// Field values set on this section.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Section {
    /// Creates a section populated with the component's field defaults.
    #[must_use]
    pub fn from_component(component: &Component) -> Self {
        Self {
            id: SectionId::generate(),
            component_id: component.id.clone(),
            values: component.default_values(),
        }
    }

    /// Creates a section with author-supplied values and a fresh id.
    #[must_use]
    pub fn with_values<K, V>(
        component_id: impl Into<ComponentId>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: SectionId::generate(),
            component_id: component_id.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Replaces a single field value.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Returns the value set for `field`, if any.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Clones the section under a fresh id.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_core::Section;
    ///
    /// let original = Section::with_values("notes", [("text", "hi")]);
    /// let copy = original.duplicate();
    /// assert_ne!(copy.id, original.id);
    /// assert_eq!(copy.values, original.values);
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: SectionId::generate(),
            component_id: self.component_id.clone(),
            values: self.values.clone(),
        }
    }
}

/// Values shared across all sections of a document.
///
/// # Examples
///
/// ```
/// use composer_core::GlobalValues;
///
/// let globals = GlobalValues::new().with(GlobalValues::AGENT_NAME, "my-agent");
/// assert_eq!(globals.get_non_empty(GlobalValues::AGENT_NAME), Some("my-agent"));
/// assert_eq!(globals.get_non_empty(GlobalValues::DESCRIPTION), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalValues(BTreeMap<String, String>);

impl GlobalValues {
    /// Key holding the agent name.
    pub const AGENT_NAME: &'static str = "agentName";
    /// Key holding the document description.
    pub const DESCRIPTION: &'static str = "description";
    /// Key holding the author.
    pub const AUTHOR: &'static str = "author";

    /// Creates an empty set of global values.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for `key` unless it is unset or empty.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Sets a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`GlobalValues::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if no value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GlobalValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Destination AI-assistant or editor integration.
///
/// Governs which sections are emitted and which default header is
/// synthesized.
///
/// # Examples
///
/// ```
/// use composer_core::TargetProfile;
///
/// assert_eq!(TargetProfile::default(), TargetProfile::Vscode);
/// assert_eq!(TargetProfile::from_str_lenient("nope"), TargetProfile::Vscode);
/// assert!("nope".parse::<TargetProfile>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetProfile {
    /// VS Code / Copilot.
    #[default]
    Vscode,
    /// Cursor rules.
    Cursor,
    /// Claude Code.
    ClaudeCode,
    /// Windsurf rules.
    Windsurf,
    /// Integration-agnostic Markdown.
    Generic,
}

impl TargetProfile {
    /// Every profile in the closed set.
    pub const ALL: [Self; 5] = [
        Self::Vscode,
        Self::Cursor,
        Self::ClaudeCode,
        Self::Windsurf,
        Self::Generic,
    ];

    /// Returns the wire name of the profile.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vscode => "vscode",
            Self::Cursor => "cursor",
            Self::ClaudeCode => "claude-code",
            Self::Windsurf => "windsurf",
            Self::Generic => "generic",
        }
    }

    /// Parses a profile, treating unknown names as the default profile.
    #[must_use]
    pub fn from_str_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(profile = s, "unknown target profile, using default");
            Self::default()
        })
    }
}

impl fmt::Display for TargetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetProfile {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                crate::Error::InvalidArgument(format!(
                    "invalid target profile: '{s}' (expected: vscode, cursor, claude-code, windsurf, or generic)"
                ))
            })
    }
}

impl Serialize for TargetProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TargetProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lenient(&raw))
    }
}

/// MCP client whose configuration instructions a document targets.
///
/// # Examples
///
/// ```
/// use composer_core::McpClient;
///
/// assert_eq!(McpClient::from_str_lenient("cursor"), McpClient::Cursor);
/// assert_eq!(McpClient::from_str_lenient(""), McpClient::ClaudeDesktop);
/// assert_eq!(McpClient::Vscode.servers_key(), "servers");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum McpClient {
    /// Claude Desktop app.
    #[default]
    ClaudeDesktop,
    /// VS Code.
    Vscode,
    /// Cursor.
    Cursor,
    /// Windsurf.
    Windsurf,
    /// Claude Code.
    ClaudeCode,
}

impl McpClient {
    /// Every supported client.
    pub const ALL: [Self; 5] = [
        Self::ClaudeDesktop,
        Self::Vscode,
        Self::Cursor,
        Self::Windsurf,
        Self::ClaudeCode,
    ];

    /// Returns the wire name of the client.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "claude-desktop",
            Self::Vscode => "vscode",
            Self::Cursor => "cursor",
            Self::Windsurf => "windsurf",
            Self::ClaudeCode => "claude-code",
        }
    }

    /// JSON key under which this client lists its servers.
    #[must_use]
    pub const fn servers_key(&self) -> &'static str {
        match self {
            Self::Vscode => "servers",
            _ => "mcpServers",
        }
    }

    /// Parses a client name, falling back to Claude Desktop.
    #[must_use]
    pub fn from_str_lenient(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or_else(|| {
                tracing::debug!(client = s, "unknown MCP client, using claude-desktop");
                Self::default()
            })
    }
}

impl fmt::Display for McpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
