//! Core domain types for contact methods

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque contact method identifier, unique within a user's list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactMethodId(String);

impl ContactMethodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactMethodId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContactMethodId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of the user whose contact methods are listed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact Method
// ─────────────────────────────────────────────────────────────────────────────

/// Channel kind of a contact method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethodType {
    Voice,
    Sms,
    Email,
    Push,
    Webhook,
}

impl ContactMethodType {
    /// Lower-case label used in row titles
    pub fn label(&self) -> &'static str {
        match self {
            ContactMethodType::Voice => "voice",
            ContactMethodType::Sms => "sms",
            ContactMethodType::Email => "email",
            ContactMethodType::Push => "push",
            ContactMethodType::Webhook => "webhook",
        }
    }

    /// Position in the display order (lower sorts first)
    pub fn sort_rank(&self) -> u8 {
        match self {
            ContactMethodType::Voice => 0,
            ContactMethodType::Sms => 1,
            ContactMethodType::Email => 2,
            ContactMethodType::Push => 3,
            ContactMethodType::Webhook => 4,
        }
    }

    /// Parse a type name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "voice" => Some(ContactMethodType::Voice),
            "sms" => Some(ContactMethodType::Sms),
            "email" => Some(ContactMethodType::Email),
            "push" => Some(ContactMethodType::Push),
            "webhook" => Some(ContactMethodType::Webhook),
            _ => None,
        }
    }
}

impl fmt::Display for ContactMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Backends report types upper-case ("SMS"); fixtures tend to use lower-case.
impl<'de> Deserialize<'de> for ContactMethodType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ContactMethodType::parse(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["voice", "sms", "email", "push", "webhook"])
        })
    }
}

/// A single contact method record.
///
/// Owned by the backend and replaced wholesale on every fetch; the controller
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
    pub id: ContactMethodId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContactMethodType,
    pub value: String,
    pub formatted_value: String,
    /// Failed verification or suspended; cannot send tests until reactivated
    pub disabled: bool,
}

impl ContactMethod {
    pub fn new(
        id: impl Into<ContactMethodId>,
        name: impl Into<String>,
        kind: ContactMethodType,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            formatted_value: value.clone(),
            value,
            disabled: false,
        }
    }

    pub fn with_formatted_value(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_value = formatted.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct RawContactMethod {
    id: ContactMethodId,
    name: String,
    #[serde(rename = "type")]
    kind: ContactMethodType,
    value: String,
    #[serde(default, alias = "formattedValue")]
    formatted_value: Option<String>,
    #[serde(default)]
    disabled: bool,
}

impl<'de> Deserialize<'de> for ContactMethod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContactMethod::deserialize(deserializer)?;
        let formatted_value = raw.formatted_value.unwrap_or_else(|| raw.value.clone());
        Ok(ContactMethod {
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            value: raw.value,
            formatted_value,
            disabled: raw.disabled,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Breakpoint
// ─────────────────────────────────────────────────────────────────────────────

/// Named viewport width class, ordered from narrowest to widest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Width class for a pixel width (600 / 960 / 1280 / 1920 thresholds)
    pub fn from_width(px: u32) -> Self {
        match px {
            0..=599 => Breakpoint::Xs,
            600..=959 => Breakpoint::Sm,
            960..=1279 => Breakpoint::Md,
            1280..=1919 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    /// Width class for a terminal column count (60 / 96 / 128 / 192 thresholds)
    pub fn from_columns(cols: u16) -> Self {
        match cols {
            0..=59 => Breakpoint::Xs,
            60..=95 => Breakpoint::Sm,
            96..=127 => Breakpoint::Md,
            128..=191 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    /// True when this breakpoint is at or above `other`
    pub fn is_at_least(&self, other: Breakpoint) -> bool {
        *self >= other
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xs" => Some(Breakpoint::Xs),
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        };
        f.write_str(s)
    }
}
