use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MinGroup;

/// Group, as returned by `GET /groups/` and `GET /groups/{id}`.
///
/// Carries the union of the billable, SO/NIP and SVNO/DIST subtype fields;
/// whichever apply to the group's `type` are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "nameCI", skip_serializing_if = "Option::is_none")]
    pub name_ci: Option<String>,
    /// Ancestors from the root down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<MinGroup>>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(rename = "isAccount", skip_serializing_if = "Option::is_none")]
    pub is_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(rename = "technicalEmail", skip_serializing_if = "Option::is_none")]
    pub technical_email: Option<String>,
    #[serde(rename = "maxPrototypeAllowed", skip_serializing_if = "Option::is_none")]
    pub max_prototype_allowed: Option<i64>,
    #[serde(rename = "currentPrototypeCount", skip_serializing_if = "Option::is_none")]
    pub current_prototype_count: Option<i64>,
    #[serde(rename = "countryISOAlpha3", skip_serializing_if = "Option::is_none")]
    pub country_iso_alpha3: Option<String>,
    #[serde(rename = "networkOperatorId", skip_serializing_if = "Option::is_none")]
    pub network_operator_id: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for `POST /groups/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: i32,
    pub timezone: String,
    #[serde(rename = "parentId")]
    pub parent_id: String,
    #[serde(rename = "technicalEmail", skip_serializing_if = "Option::is_none")]
    pub technical_email: Option<String>,
    #[serde(rename = "accountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "networkOperatorId", skip_serializing_if = "Option::is_none")]
    pub network_operator_id: Option<String>,
    #[serde(rename = "countryISOAlpha3", skip_serializing_if = "Option::is_none")]
    pub country_iso_alpha3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(rename = "maxPrototypeAllowed", skip_serializing_if = "Option::is_none")]
    pub max_prototype_allowed: Option<i64>,
}

/// Partial update for `PUT /groups/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(rename = "technicalEmail", skip_serializing_if = "Option::is_none")]
    pub technical_email: Option<String>,
    #[serde(rename = "maxPrototypeAllowed", skip_serializing_if = "Option::is_none")]
    pub max_prototype_allowed: Option<i64>,
}

impl GroupUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Undelivered callback, as returned by `GET /groups/{id}/callbacks-not-delivered`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupCallbackError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(rename = "deviceUrl", skip_serializing_if = "Option::is_none")]
    pub device_url: Option<String>,
    #[serde(rename = "deviceType", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Geolocation payload configuration, as returned by `GET /groups/{id}/geoloc-payloads`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeolocPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
