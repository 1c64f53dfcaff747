// Group endpoints
//
// `/groups/` CRUD, undelivered callbacks, and geolocation payload configs.
// Group lists accept both offset paging and an opaque `pageId` token.

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::{
    CreatedId, GeolocPayload, Group, GroupCallbackError, GroupCreate, GroupUpdate,
};
use crate::query::QueryParams;

use super::{DetailOptions, item_path};

const COLLECTION: &str = "/groups/";

/// Filters for `GET /groups/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub parent_ids: Vec<String>,
    pub deep: bool,
    pub name: Option<String>,
    /// Group kinds (0=SO, 2=Other, 5=SVNO, ...), sent comma-joined.
    pub types: Vec<i32>,
    pub fields: Option<String>,
    /// Only groups on which the caller may perform this action.
    pub action: Option<String>,
    pub sort: Option<String>,
    pub authorizations: bool,
    pub page_id: Option<String>,
}

impl GroupListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .list("parentIds", &self.parent_ids)
            .flag("deep", self.deep)
            .text("name", self.name.as_deref())
            .list("types", &self.types)
            .text("fields", self.fields.as_deref())
            .text("action", self.action.as_deref())
            .text("sort", self.sort.as_deref())
            .flag("authorizations", self.authorizations)
            .text("pageId", self.page_id.as_deref())
    }
}

/// Filters for `GET /groups/{id}/callbacks-not-delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallbackFilter {
    pub since: Option<i64>,
    pub before: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl CallbackFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("since", self.since)
            .num("before", self.before)
            .num("limit", self.limit)
            .num("offset", self.offset)
    }
}

/// Filters for `GET /groups/{id}/geoloc-payloads`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeolocFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub page_id: Option<String>,
}

impl GeolocFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .text("pageId", self.page_id.as_deref())
    }
}

/// Façade over `/groups/`.
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a SigfoxClient,
}

impl<'a> Groups<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &GroupListFilter) -> Result<Vec<Group>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn list_all(
        &self,
        filter: &GroupListFilter,
        max: Option<usize>,
    ) -> Result<Vec<Group>, Error> {
        let items = self
            .client
            .get_paginated(COLLECTION, &filter.to_query(), max)
            .await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str, options: &DetailOptions) -> Result<Group, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &options.to_query()).await?)
    }

    /// Create a group; the endpoint returns only the new id.
    pub async fn create(&self, payload: &GroupCreate) -> Result<CreatedId, Error> {
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        decode(resp)
    }

    pub async fn update(&self, id: &str, payload: &GroupUpdate) -> Result<(), Error> {
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

    pub async fn callbacks_not_delivered(
        &self,
        id: &str,
        filter: &CallbackFilter,
    ) -> Result<Vec<GroupCallbackError>, Error> {
        let path = format!("{}/callbacks-not-delivered", item_path(COLLECTION, id)?);
        let items = self.client.get_list(&path, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn geoloc_payloads(
        &self,
        id: &str,
        filter: &GeolocFilter,
    ) -> Result<Vec<GeolocPayload>, Error> {
        let path = format!("{}/geoloc-payloads", item_path(COLLECTION, id)?);
        let items = self.client.get_list(&path, &filter.to_query()).await?;
        decode_all(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_are_joined_as_integers() {
        let q = GroupListFilter {
            types: vec![0, 2, 5],
            parent_ids: vec!["root".into()],
            page_id: Some("tok".into()),
            ..GroupListFilter::default()
        }
        .to_query();
        assert_eq!(q.get("types"), Some("0,2,5"));
        assert_eq!(q.get("parentIds"), Some("root"));
        assert_eq!(q.get("pageId"), Some("tok"));
        assert_eq!(q.get("deep"), None);
    }
}
