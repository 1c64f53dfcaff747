use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MinGroup;

/// Profile reference nested in an API user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// API user, as returned by `GET /api-users/` and `GET /api-users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<MinGroup>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<MinProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for `POST /api-users/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUserCreate {
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub name: String,
    pub timezone: String,
    #[serde(rename = "profileIds")]
    pub profile_ids: Vec<String>,
}

/// Partial update for `PUT /api-users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "profileIds", skip_serializing_if = "Option::is_none")]
    pub profile_ids: Option<Vec<String>>,
}

impl ApiUserUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Response of `PUT /api-users/{id}/renew-credential`.
///
/// The previous secret stops working as soon as this is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewedCredential {
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
