//! HTTP DTOs for list endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::List;

/// Query parameters for listing lists.
#[derive(Debug, Clone, Deserialize)]
pub struct ListsQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<i64>,
}

/// Request to create a list. The uuid is optional; the service generates
/// one when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub name: String,
}

/// Request to update a list; absent fields stay unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// List representation on the wire. The internal storage id is never
/// exposed; the uuid is the external key.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub uuid: Uuid,
    pub name: String,
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        Self {
            uuid: list.uuid,
            name: list.name,
        }
    }
}
