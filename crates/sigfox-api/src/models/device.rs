use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MinGroup;

/// Device type reference embedded in a device record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Device, as returned by `GET /devices/` and `GET /devices/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Hexadecimal device id.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "deviceType", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceTypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<MinGroup>,
    /// 0=OK, 1=DEAD, 2=OFF_CONTRACT, 3=DISABLED, 4=WARN, 5=DELETED, 6=SUSPENDED, 7=NOT_ACTIVABLE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    /// 0=NO, 1=OK, 2=WARN, 3=KO, 5=NA, 6=NOT_SEEN.
    #[serde(rename = "comState", skip_serializing_if = "Option::is_none")]
    pub com_state: Option<i32>,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "lastCom", skip_serializing_if = "Option::is_none")]
    pub last_com: Option<i64>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(rename = "activationTime", skip_serializing_if = "Option::is_none")]
    pub activation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pac: Option<String>,
    #[serde(rename = "sequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lqi: Option<i32>,
    #[serde(rename = "satelliteCapable", skip_serializing_if = "Option::is_none")]
    pub satellite_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeater: Option<bool>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activable: Option<bool>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for `POST /devices/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCreate {
    pub id: String,
    pub name: String,
    #[serde(rename = "deviceTypeId")]
    pub device_type_id: String,
    pub pac: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(rename = "productCertificate", skip_serializing_if = "Option::is_none")]
    pub product_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<bool>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activable: Option<bool>,
}

impl DeviceCreate {
    /// Create payload with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        device_type_id: impl Into<String>,
        pac: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            device_type_id: device_type_id.into(),
            pac: pac.into(),
            lat: None,
            lng: None,
            product_certificate: None,
            prototype: None,
            automatic_renewal: None,
            activable: None,
        }
    }
}

/// Partial update for `PUT /devices/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(rename = "productCertificate", skip_serializing_if = "Option::is_none")]
    pub product_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<bool>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activable: Option<bool>,
}

impl DeviceUpdate {
    /// `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
