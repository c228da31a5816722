use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Group as returned by the API and accepted by `POST /groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
