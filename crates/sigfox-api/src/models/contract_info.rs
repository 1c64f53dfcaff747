use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MinGroup;

/// Device type reference nested in a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinDeviceType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "projectId", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Order reference (`order`) nested in a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinContractInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Premium option activated on a contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfoOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Contract, as returned by `GET /contract-infos/` and `GET /contract-infos/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "activationEndTime", skip_serializing_if = "Option::is_none")]
    pub activation_end_time: Option<i64>,
    #[serde(rename = "communicationEndTime", skip_serializing_if = "Option::is_none")]
    pub communication_end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidir: Option<bool>,
    #[serde(rename = "highPriorityDownlink", skip_serializing_if = "Option::is_none")]
    pub high_priority_downlink: Option<bool>,
    #[serde(rename = "maxUplinkFrames", skip_serializing_if = "Option::is_none")]
    pub max_uplink_frames: Option<i64>,
    #[serde(rename = "maxDownlinkFrames", skip_serializing_if = "Option::is_none")]
    pub max_downlink_frames: Option<i64>,
    #[serde(rename = "maxTokens", skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(rename = "automaticRenewal", skip_serializing_if = "Option::is_none")]
    pub automatic_renewal: Option<bool>,
    #[serde(rename = "renewalDuration", skip_serializing_if = "Option::is_none")]
    pub renewal_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ContractInfoOption>>,
    #[serde(rename = "contractId", skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<MinGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<MinContractInfo>,
    #[serde(rename = "pricingModel", skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<i32>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "lastEditionTime", skip_serializing_if = "Option::is_none")]
    pub last_edition_time: Option<i64>,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(rename = "lastEditedBy", skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<String>,
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "subscriptionPlan", skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<i32>,
    #[serde(rename = "tokenDuration", skip_serializing_if = "Option::is_none")]
    pub token_duration: Option<i64>,
    #[serde(rename = "blacklistedTerritories", skip_serializing_if = "Option::is_none")]
    pub blacklisted_territories: Option<Vec<MinGroup>>,
    #[serde(rename = "tokensInUse", skip_serializing_if = "Option::is_none")]
    pub tokens_in_use: Option<i64>,
    #[serde(rename = "tokensUsed", skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<i64>,
    #[serde(rename = "deviceType", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<MinDeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
