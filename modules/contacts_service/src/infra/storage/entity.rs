//! Wire rows exchanged with the hosted database's REST API

use serde::{Deserialize, Serialize};

/// A row of the contacts table as returned by the store
///
/// Columns other than these four are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRow {
    /// Numeric or textual primary key
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Insert payload; exactly the three contact fields
#[derive(Debug, Serialize)]
pub struct InsertRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

/// Update payload; absent fields are left untouched by the store
#[derive(Debug, Serialize)]
pub struct PatchRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
}

/// Error body returned by the store on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}
