// sigfox-api: Async Rust client for the Sigfox IoT REST API (v2)

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod resources;
pub mod sigfox;
pub mod transport;

pub use client::{Credential, DEFAULT_PAGE_SIZE, MAX_PAGES, SigfoxClient};
pub use error::Error;
pub use query::QueryParams;
pub use resources::{
    ApiUserListFilter, ApiUsers, BaseStationMessageFilter, BaseStations, CallbackFilter,
    ContractDevicesFilter, ContractInfoListFilter, ContractInfos, Coverages, DetailOptions,
    DeviceListFilter, DeviceSituation, DeviceTypeListFilter, DeviceTypes, Devices, GeolocFilter,
    GroupListFilter, Groups, MessageFilter, PredictionQuery, RedundancyQuery, UserListFilter,
    Users,
};
pub use sigfox::Sigfox;
pub use transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TransportConfig};
