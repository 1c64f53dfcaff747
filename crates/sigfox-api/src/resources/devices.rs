// Device endpoints
//
// `/devices/` CRUD plus the per-device uplink message history.

use serde_json::Value;
use tracing::debug;

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::{CreatedId, Device, DeviceCreate, DeviceUpdate, Message};
use crate::query::QueryParams;

use super::item_path;

const COLLECTION: &str = "/devices/";

/// Filters for `GET /devices/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub device_type_id: Option<String>,
    pub group_ids: Vec<String>,
    /// Include devices of every descendant group.
    pub deep: bool,
    /// Server-side sort expression, e.g. `"-lastCom"`.
    pub sort: Option<String>,
}

impl DeviceListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .text("deviceTypeId", self.device_type_id.as_deref())
            .list("groupIds", &self.group_ids)
            .flag("deep", self.deep)
            .text("sort", self.sort.as_deref())
    }
}

/// Filters for `GET /devices/{id}/messages`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Lower bound, milliseconds since the Unix epoch.
    pub since: Option<i64>,
    /// Upper bound, milliseconds since the Unix epoch.
    pub before: Option<i64>,
}

impl MessageFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .num("since", self.since)
            .num("before", self.before)
    }
}

/// Façade over `/devices/`.
#[derive(Debug, Clone, Copy)]
pub struct Devices<'a> {
    client: &'a SigfoxClient,
}

impl<'a> Devices<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    /// One page of devices.
    pub async fn list(&self, filter: &DeviceListFilter) -> Result<Vec<Device>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    /// Every device matching `filter`, following pages up to `max` items.
    pub async fn list_all(
        &self,
        filter: &DeviceListFilter,
        max: Option<usize>,
    ) -> Result<Vec<Device>, Error> {
        let items = self
            .client
            .get_paginated(COLLECTION, &filter.to_query(), max)
            .await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str) -> Result<Device, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &QueryParams::new()).await?)
    }

    /// Register a device. The endpoint answers with the new device's id;
    /// the returned record carries whatever the server sent back.
    pub async fn create(&self, payload: &DeviceCreate) -> Result<Device, Error> {
        debug!(id = %payload.id, "creating device");
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        decode(resp)
    }

    /// Register a device, then fetch and return its full record.
    pub async fn create_and_fetch(&self, payload: &DeviceCreate) -> Result<Device, Error> {
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        let created: CreatedId = decode(resp)?;
        self.get(&created.id).await
    }

    pub async fn update(&self, id: &str, payload: &DeviceUpdate) -> Result<(), Error> {
        let path = item_path(COLLECTION, id)?;
        self.client
            .put(&path, Some(payload), &QueryParams::new())
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let path = item_path(COLLECTION, id)?;
        debug!(id, "deleting device");
        self.client.delete(&path, &QueryParams::new()).await?;
        Ok(())
    }

    /// Uplink messages received from one device, newest first.
    pub async fn messages(&self, id: &str, filter: &MessageFilter) -> Result<Vec<Message>, Error> {
        let path = format!("{}/messages", item_path(COLLECTION, id)?);
        let items: Vec<Value> = self.client.get_list(&path, &filter.to_query()).await?;
        decode_all(items)
    }
}
