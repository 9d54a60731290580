//! Market niche catalog entries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable catalog entry describing a client market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Niche {
    pub id: String,
    pub name: String,
    pub description: String,
}
