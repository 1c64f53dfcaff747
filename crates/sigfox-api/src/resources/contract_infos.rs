// Contract info endpoints (`/contract-infos/`), read-only.

use serde_json::{Map, Value};

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::ContractInfo;
use crate::query::QueryParams;

use super::{DetailOptions, item_path};

const COLLECTION: &str = "/contract-infos/";

/// Filters for `GET /contract-infos/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractInfoListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub name: Option<String>,
    pub group_id: Option<String>,
    pub group_type: Option<i32>,
    pub deep: bool,
    /// Include contracts of ancestor groups.
    pub up: bool,
    /// Comma-separated order ids, passed through as given.
    pub order_ids: Option<String>,
    /// Comma-separated contract ids, passed through as given.
    pub contract_ids: Option<String>,
    pub from_time: Option<i64>,
    pub to_time: Option<i64>,
    pub token_duration: Option<i64>,
    pub pricing_model: Option<i32>,
    pub subscription_plan: Option<i32>,
    pub fields: Option<String>,
    pub authorizations: bool,
    pub page_id: Option<String>,
}

impl ContractInfoListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .text("name", self.name.as_deref())
            .text("groupId", self.group_id.as_deref())
            .num("groupType", self.group_type)
            .flag("deep", self.deep)
            .flag("up", self.up)
            .text("orderIds", self.order_ids.as_deref())
            .text("contractIds", self.contract_ids.as_deref())
            .num("fromTime", self.from_time)
            .num("toTime", self.to_time)
            .num("tokenDuration", self.token_duration)
            .num("pricingModel", self.pricing_model)
            .num("subscriptionPlan", self.subscription_plan)
            .text("fields", self.fields.as_deref())
            .flag("authorizations", self.authorizations)
            .text("pageId", self.page_id.as_deref())
    }
}

/// Filters for `GET /contract-infos/{id}/devices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractDevicesFilter {
    pub device_type_id: Option<String>,
    pub fields: Option<String>,
    pub limit: Option<u32>,
    pub page_id: Option<String>,
}

impl ContractDevicesFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .text("deviceTypeId", self.device_type_id.as_deref())
            .text("fields", self.fields.as_deref())
            .num("limit", self.limit)
            .text("pageId", self.page_id.as_deref())
    }
}

/// Façade over `/contract-infos/`.
#[derive(Debug, Clone, Copy)]
pub struct ContractInfos<'a> {
    client: &'a SigfoxClient,
}

impl<'a> ContractInfos<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &ContractInfoListFilter) -> Result<Vec<ContractInfo>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str, options: &DetailOptions) -> Result<ContractInfo, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &options.to_query()).await?)
    }

    /// Devices attached to a contract.
    ///
    /// Returned as raw objects: the server sends a partial projection that
    /// does not match the full device record.
    pub async fn list_devices(
        &self,
        id: &str,
        filter: &ContractDevicesFilter,
    ) -> Result<Vec<Map<String, Value>>, Error> {
        let path = format!("{}/devices", item_path(COLLECTION, id)?);
        let items = self.client.get_list(&path, &filter.to_query()).await?;
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect())
    }
}
