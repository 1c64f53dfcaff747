//! Typed records for Sigfox API v2 payloads.
//!
//! Read records keep every field optional (except `id` on top-level
//! resources) and collect unrecognized keys into `extra`, so nothing the
//! server adds is lost. Wire names are declared per field with
//! `#[serde(rename = "...")]`. Create/Update payloads skip unset fields.

mod api_user;
mod base_station;
mod contract_info;
mod coverage;
mod device;
mod device_type;
mod group;
mod message;
mod user;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use api_user::{ApiUser, ApiUserCreate, ApiUserUpdate, MinProfile, RenewedCredential};
pub use base_station::{BaseStation, MinBaseStation};
pub use contract_info::{ContractInfo, ContractInfoOption, MinContractInfo, MinDeviceType};
pub use coverage::{
    BulkJob, CoverageBulkRequest, CoverageBulkResponse, CoverageBulkResult, CoverageLocation,
    CoveragePrediction, CoverageRedundancy,
};
pub use device::{Device, DeviceCreate, DeviceTypeRef, DeviceUpdate};
pub use device_type::{DeviceType, DeviceTypeCreate, DeviceTypeUpdate, NamedRef};
pub use group::{GeolocPayload, Group, GroupCallbackError, GroupCreate, GroupUpdate};
pub use message::{DeviceInfo, Message};
pub use user::{MinRole, User, UserCreate, UserUpdate};

// ── Shared references ────────────────────────────────────────────────

/// Minimal group reference nested in users, API users, groups and contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Group kind: 0=SO, 2=Basic/Other, 5=SVNO, 6=Partners, 7=NIP, 8=DIST, 9=Channel, 10=Starter, 11=Partner.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ── Envelopes & acknowledgements ─────────────────────────────────────

/// `paging` object of a list response. Only the presence of `next` matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(rename = "prev", skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// `{ "id": ... }` acknowledgement returned by several create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
