use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{id, name}` reference used for a device type's group and contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Device type, as returned by `GET /device-types/` and `GET /device-types/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceType {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<NamedRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<NamedRef>,
    /// Seconds; 0 disables the keep-alive alert.
    #[serde(rename = "keepAlive", skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<i64>,
    #[serde(rename = "alertEmail", skip_serializing_if = "Option::is_none")]
    pub alert_email: Option<String>,
    #[serde(rename = "payloadType", skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<i32>,
    #[serde(rename = "payloadConfig", skip_serializing_if = "Option::is_none")]
    pub payload_config: Option<String>,
    #[serde(rename = "downlinkMode", skip_serializing_if = "Option::is_none")]
    pub downlink_mode: Option<i32>,
    #[serde(rename = "downlinkDataString", skip_serializing_if = "Option::is_none")]
    pub downlink_data_string: Option<String>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(rename = "lastEditedTime", skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for `POST /device-types/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeCreate {
    pub name: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "contractId", skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "keepAlive", skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<i64>,
    #[serde(rename = "alertEmail", skip_serializing_if = "Option::is_none")]
    pub alert_email: Option<String>,
    #[serde(rename = "payloadType", skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<i32>,
    #[serde(rename = "payloadConfig", skip_serializing_if = "Option::is_none")]
    pub payload_config: Option<String>,
    #[serde(rename = "downlinkMode", skip_serializing_if = "Option::is_none")]
    pub downlink_mode: Option<i32>,
    #[serde(rename = "downlinkDataString", skip_serializing_if = "Option::is_none")]
    pub downlink_data_string: Option<String>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
}

impl DeviceTypeCreate {
    pub fn new(name: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_id: group_id.into(),
            contract_id: None,
            description: None,
            keep_alive: None,
            alert_email: None,
            payload_type: None,
            payload_config: None,
            downlink_mode: None,
            downlink_data_string: None,
            automatic_renewal: None,
        }
    }
}

/// Partial update for `PUT /device-types/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "keepAlive", skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<i64>,
    #[serde(rename = "alertEmail", skip_serializing_if = "Option::is_none")]
    pub alert_email: Option<String>,
    #[serde(rename = "payloadType", skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<i32>,
    #[serde(rename = "payloadConfig", skip_serializing_if = "Option::is_none")]
    pub payload_config: Option<String>,
    #[serde(rename = "downlinkMode", skip_serializing_if = "Option::is_none")]
    pub downlink_mode: Option<i32>,
    #[serde(rename = "downlinkDataString", skip_serializing_if = "Option::is_none")]
    pub downlink_data_string: Option<String>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
}

impl DeviceTypeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_uses_wire_names() {
        let mut create = DeviceTypeCreate::new("Trackers", "grp-1");
        create.keep_alive = Some(0);
        create.contract_id = Some("ctr-9".into());

        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({
                "name": "Trackers",
                "groupId": "grp-1",
                "contractId": "ctr-9",
                "keepAlive": 0
            })
        );
    }
}
