// Base station endpoints
//
// Only the nested message listing is exposed; base stations themselves
// are not managed through this client.

use crate::client::{SigfoxClient, decode_all};
use crate::error::Error;
use crate::models::Message;
use crate::query::QueryParams;

use super::item_path;

/// Filters for `GET /base-stations/{id}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseStationMessageFilter {
    pub fields: Option<String>,
    pub since: Option<i64>,
    pub before: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl BaseStationMessageFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .text("fields", self.fields.as_deref())
            .num("since", self.since)
            .num("before", self.before)
            .num("limit", self.limit)
            .num("offset", self.offset)
    }
}

/// Façade over `/base-stations/{id}/messages`.
#[derive(Debug, Clone, Copy)]
pub struct BaseStations<'a> {
    client: &'a SigfoxClient,
}

impl<'a> BaseStations<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    /// Messages received by one base station.
    pub async fn list_messages(
        &self,
        station_id: &str,
        filter: &BaseStationMessageFilter,
    ) -> Result<Vec<Message>, Error> {
        let path = format!("{}/messages", item_path("/base-stations/", station_id)?);
        let items = self.client.get_list(&path, &filter.to_query()).await?;
        decode_all(items)
    }
}
