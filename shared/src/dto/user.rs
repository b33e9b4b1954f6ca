//! # User Data Transfer Objects
//!
//! Records returned by `GET /api/users/{username}/`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User as returned by the backend user lookup.
///
/// Only `username` is typed. Every other attribute stays in `attributes`
/// exactly as received (including `null`s), so re-serializing yields the
/// body that came over the wire. Known attributes are read through accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    /// Numeric id, when the backend sent one as a JSON integer.
    pub fn id(&self) -> Option<i64> {
        self.attributes.get("id").and_then(Value::as_i64)
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.attributes.get("email").and_then(Value::as_str)
    }

    /// Date of birth in `YYYY-MM-DD` form; `None` when absent, null or unparsable.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.attributes
            .get("date_of_birth")
            .and_then(Value::as_str)
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// Any other attribute, untouched.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Compact user reference embedded in friend requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
