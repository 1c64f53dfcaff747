// API user endpoints
//
// `/api-users/` CRUD, profile association, and credential renewal.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::{ApiUser, ApiUserCreate, ApiUserUpdate, CreatedId, RenewedCredential};
use crate::query::QueryParams;

use super::{DetailOptions, item_path};

const COLLECTION: &str = "/api-users/";

/// Filters for `GET /api-users/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiUserListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub profile_id: Option<String>,
    pub group_ids: Vec<String>,
    pub fields: Option<String>,
    pub authorizations: bool,
}

impl ApiUserListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .text("profileId", self.profile_id.as_deref())
            .list("groupIds", &self.group_ids)
            .text("fields", self.fields.as_deref())
            .flag("authorizations", self.authorizations)
    }
}

/// Façade over `/api-users/`.
#[derive(Debug, Clone, Copy)]
pub struct ApiUsers<'a> {
    client: &'a SigfoxClient,
}

impl<'a> ApiUsers<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &ApiUserListFilter) -> Result<Vec<ApiUser>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn list_all(
        &self,
        filter: &ApiUserListFilter,
        max: Option<usize>,
    ) -> Result<Vec<ApiUser>, Error> {
        let items = self
            .client
            .get_paginated(COLLECTION, &filter.to_query(), max)
            .await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str, options: &DetailOptions) -> Result<ApiUser, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &options.to_query()).await?)
    }

    pub async fn create(&self, payload: &ApiUserCreate) -> Result<CreatedId, Error> {
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        decode(resp)
    }

    pub async fn update(&self, id: &str, payload: &ApiUserUpdate) -> Result<(), Error> {
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

    /// Set the API user's profiles. Replaces the whole profile list server-side.
    pub async fn add_profiles(&self, id: &str, profile_ids: &[String]) -> Result<(), Error> {
        let path = format!("{}/profiles", item_path(COLLECTION, id)?);
        let body = json!({ "profileIds": profile_ids });
        self.client
            .put(&path, Some(&body), &QueryParams::new())
            .await?;
        Ok(())
    }

    pub async fn remove_profile(&self, id: &str, profile_id: &str) -> Result<(), Error> {
        let profiles = format!("{}/profiles/", item_path(COLLECTION, id)?);
        let path = item_path(&profiles, profile_id)?;
        self.client.delete(&path, &QueryParams::new()).await?;
        Ok(())
    }

    /// Issue a new secret for the API user. The current one is invalidated
    /// immediately; no confirmation happens at this layer.
    pub async fn renew_credential(&self, id: &str) -> Result<RenewedCredential, Error> {
        let path = format!("{}/renew-credential", item_path(COLLECTION, id)?);
        debug!(id, "renewing API user credential");
        let resp = self
            .client
            .put::<Value>(&path, None, &QueryParams::new())
            .await?;
        decode(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_maps_to_wire_names() {
        let q = ApiUserListFilter {
            limit: Some(5),
            offset: Some(20),
            profile_id: Some("p-7".into()),
            group_ids: vec!["g1".into()],
            fields: Some("group(name)".into()),
            authorizations: true,
        }
        .to_query();
        assert_eq!(q.get("limit"), Some("5"));
        assert_eq!(q.get("offset"), Some("20"));
        assert_eq!(q.get("profileId"), Some("p-7"));
        assert_eq!(q.get("groupIds"), Some("g1"));
        assert_eq!(q.get("fields"), Some("group(name)"));
        assert_eq!(q.get("authorizations"), Some("true"));
        assert_eq!(q.get("profile_id"), None);
        assert_eq!(q.len(), 6);
    }

    #[test]
    fn blank_profile_id_is_skipped() {
        let q = ApiUserListFilter {
            profile_id: Some(String::new()),
            ..ApiUserListFilter::default()
        }
        .to_query();
        assert!(q.is_empty());
    }
}
