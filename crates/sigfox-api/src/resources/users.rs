// Portal user endpoints (`/users/`)

use serde_json::json;

use crate::client::{SigfoxClient, decode, decode_all};
use crate::error::Error;
use crate::models::{CreatedId, User, UserCreate, UserUpdate};
use crate::query::QueryParams;

use super::{DetailOptions, item_path};

const COLLECTION: &str = "/users/";

/// Filters for `GET /users/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub group_ids: Vec<String>,
    pub deep: bool,
    pub fields: Option<String>,
    pub sort: Option<String>,
    pub authorizations: bool,
}

impl UserListFilter {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("limit", self.limit)
            .num("offset", self.offset)
            .list("groupIds", &self.group_ids)
            .flag("deep", self.deep)
            .text("fields", self.fields.as_deref())
            .text("sort", self.sort.as_deref())
            .flag("authorizations", self.authorizations)
    }
}

/// Façade over `/users/`.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a SigfoxClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &UserListFilter) -> Result<Vec<User>, Error> {
        let items = self.client.get_list(COLLECTION, &filter.to_query()).await?;
        decode_all(items)
    }

    pub async fn list_all(
        &self,
        filter: &UserListFilter,
        max: Option<usize>,
    ) -> Result<Vec<User>, Error> {
        let items = self
            .client
            .get_paginated(COLLECTION, &filter.to_query(), max)
            .await?;
        decode_all(items)
    }

    pub async fn get(&self, id: &str, options: &DetailOptions) -> Result<User, Error> {
        let path = item_path(COLLECTION, id)?;
        decode(self.client.get(&path, &options.to_query()).await?)
    }

    pub async fn create(&self, payload: &UserCreate) -> Result<CreatedId, Error> {
        let resp = self
            .client
            .post(COLLECTION, Some(payload), &QueryParams::new())
            .await?;
        decode(resp)
    }

    pub async fn update(&self, id: &str, payload: &UserUpdate) -> Result<(), Error> {
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

    /// Set the user's roles. Replaces the whole role list server-side.
    pub async fn add_roles(&self, id: &str, role_ids: &[String]) -> Result<(), Error> {
        let path = format!("{}/roles", item_path(COLLECTION, id)?);
        let body = json!({ "roleIds": role_ids });
        self.client
            .put(&path, Some(&body), &QueryParams::new())
            .await?;
        Ok(())
    }

    pub async fn remove_role(&self, id: &str, role_id: &str) -> Result<(), Error> {
        let roles = format!("{}/roles/", item_path(COLLECTION, id)?);
        let path = item_path(&roles, role_id)?;
        self.client.delete(&path, &QueryParams::new()).await?;
        Ok(())
    }
}
