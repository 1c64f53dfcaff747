//! Resource façades.
//!
//! Each façade borrows a [`SigfoxClient`](crate::SigfoxClient), turns typed
//! filters into [`QueryParams`](crate::QueryParams), and decodes responses
//! into records from [`crate::models`]. Errors from the request layer are
//! returned unchanged.

mod api_users;
mod base_stations;
mod contract_infos;
mod coverages;
mod device_types;
mod devices;
mod groups;
mod users;

pub use api_users::{ApiUserListFilter, ApiUsers};
pub use base_stations::{BaseStationMessageFilter, BaseStations};
pub use contract_infos::{ContractDevicesFilter, ContractInfoListFilter, ContractInfos};
pub use coverages::{Coverages, DeviceSituation, PredictionQuery, RedundancyQuery};
pub use device_types::{DeviceTypeListFilter, DeviceTypes};
pub use devices::{DeviceListFilter, Devices, MessageFilter};
pub use groups::{CallbackFilter, GeolocFilter, GroupListFilter, Groups};
pub use users::{UserListFilter, Users};

use crate::error::Error;
use crate::query::QueryParams;

/// `fields` / `authorizations` options accepted by single-record GETs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOptions {
    /// Opaque sub-object expansion string, passed through untouched.
    pub fields: Option<String>,
    /// Ask the server to include the caller's permitted actions/resources.
    pub authorizations: bool,
}

impl DetailOptions {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .text("fields", self.fields.as_deref())
            .flag("authorizations", self.authorizations)
    }
}

/// Join `id` onto a collection or nested path as exactly one segment.
///
/// The id is percent-encoded, so `/`, `?` and `#` cannot reach another
/// resource or inject a query. Blank ids and the dot segments `.`/`..`
/// are rejected; they would otherwise address the collection or a parent.
pub(crate) fn item_path(prefix: &str, id: &str) -> Result<String, Error> {
    let id = id.trim();
    if id.is_empty() || id == "." || id == ".." {
        return Err(Error::Validation {
            message: format!("invalid id {id:?} for {prefix}"),
        });
    }
    Ok(format!("{prefix}{}", urlencoding::encode(id)))
}
