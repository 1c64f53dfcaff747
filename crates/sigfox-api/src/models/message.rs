use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Device reference nested in a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Uplink message, as returned by `/devices/{id}/messages` and `/base-stations/{id}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceInfo>,
    /// Hex-encoded payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "seqNumber", skip_serializing_if = "Option::is_none")]
    pub seq_number: Option<i64>,
    #[serde(rename = "ackRequired", skip_serializing_if = "Option::is_none")]
    pub ack_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lqi: Option<i32>,
    #[serde(rename = "lqiRepeaters", skip_serializing_if = "Option::is_none")]
    pub lqi_repeaters: Option<i32>,
    #[serde(rename = "nbFrames", skip_serializing_if = "Option::is_none")]
    pub nb_frames: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Per-base-station reception info.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rinfos: Option<Vec<Value>>,
    #[serde(rename = "computedLocation", skip_serializing_if = "Option::is_none")]
    pub computed_location: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
