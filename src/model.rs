use serde::{Deserialize, Serialize};

/// One recipe parsed from a Paprika HTML export.
///
/// Every field is always present: missing sections become empty strings or
/// empty lists, so the serialized shape never depends on the source document.
/// Field order is the key order of the uploaded JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Store key derived from `name`.
    pub slug: String,
    pub categories: Vec<String>,
    pub cook_time: String,
    pub prep_time: String,
    pub total_time: String,
    pub servings: String,
    pub source: String,
    pub rating: String,
    pub ingredients: Vec<String>,
    pub directions: String,
    pub notes: String,
}

impl Recipe {
    /// Serialize to the compact JSON payload sent to the store.
    ///
    /// Non-ASCII characters are written as-is, not `\u` escaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
