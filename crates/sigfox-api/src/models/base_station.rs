use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base station reference used where only identity is returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinBaseStation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Base station record.
///
/// Only identity, location, status and audit fields are typed; RF,
/// antenna and equipment settings land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStation {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(rename = "locationCountry", skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Value>,
    #[serde(rename = "versionCurrent", skip_serializing_if = "Option::is_none")]
    pub version_current: Option<String>,
    #[serde(rename = "hwVersion", skip_serializing_if = "Option::is_none")]
    pub hw_version: Option<String>,
    #[serde(rename = "hwFamily", skip_serializing_if = "Option::is_none")]
    pub hw_family: Option<String>,
    #[serde(rename = "commissioningTime", skip_serializing_if = "Option::is_none")]
    pub commissioning_time: Option<i64>,
    #[serde(rename = "lastCommunicationTime", skip_serializing_if = "Option::is_none")]
    pub last_communication_time: Option<i64>,
    #[serde(rename = "communicationState", skip_serializing_if = "Option::is_none")]
    pub communication_state: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    #[serde(rename = "lifecycleStatus", skip_serializing_if = "Option::is_none")]
    pub lifecycle_status: Option<i32>,
    /// 0 = SBS (Sigfox Base Station), 1 = NAP (Network Access Point).
    #[serde(rename = "resourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(rename = "downlinkEnabled", skip_serializing_if = "Option::is_none")]
    pub downlink_enabled: Option<bool>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
