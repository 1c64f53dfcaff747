// Device type endpoints (`/device-types/`)

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::{DeviceType, DeviceTypeCreate, DeviceTypeUpdate};
use crate::query::QueryParams;

use super::item_path;

const COLLECTION: &str = "/device-types/";

/// Filters for `GET /device-types/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceTypeListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub name: Option<String>,
    pub group_ids: Vec<String>,
    pub contract_id: Option<String>,
    pub deep: bool,
    pub sort: Option<String>,
}

impl DeviceTypeListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .text("name", self.name.as_deref())
            .list("groupIds", &self.group_ids)
            .text("contractId", self.contract_id.as_deref())
            .flag("deep", self.deep)
            .text("sort", self.sort.as_deref())
    }
}

/// Façade over `/device-types/`.
#[derive(Debug, Clone, Copy)]
pub struct DeviceTypes<'a> {
    client: &'a SigfoxClient,
}

impl<'a> DeviceTypes<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &DeviceTypeListFilter) -> Result<Vec<DeviceType>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn list_all(
        &self,
        filter: &DeviceTypeListFilter,
        max: Option<usize>,
    ) -> Result<Vec<DeviceType>, Error> {
        let items = self
            .client
            .get_paginated(COLLECTION, &filter.to_query(), max)
            .await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str) -> Result<DeviceType, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &QueryParams::new()).await?)
    }

    pub async fn create(&self, payload: &DeviceTypeCreate) -> Result<DeviceType, Error> {
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        decode(resp)
    }

    pub async fn update(&self, id: &str, payload: &DeviceTypeUpdate) -> Result<(), Error> {
        let path = item_path(COLLECTION, id)?;
        self.client
            .put(&path, Some(payload), &QueryParams::new())
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let path = item_path(COLLECTION, id)?;
        self.client.delete(&path, &QueryParams::new()).await?;
        Ok(())
    }
}
