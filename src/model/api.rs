use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for unclassified server failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Reference to another entity by its name.
///
/// Accepts either a bare name (`"G1"`) or an entity object carrying a `name`
/// field (`{"name": "G1", "description": "..."}`); any other fields of the
/// object are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EntityRefDto {
    Name(String),
    Entity { name: String },
}

impl EntityRefDto {
    pub fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Entity { name } => name,
        }
    }
}
