// Entry point bundling one client with accessors for every façade.

use std::time::Duration;

use secrecy::SecretString;

use crate::client::{Credential, SigfoxClient};
use crate::error::Error;
use crate::resources::{
    ApiUsers, BaseStations, ContractInfos, Coverages, DeviceTypes, Devices, Groups, Users,
};
use crate::transport::TransportConfig;

/// A configured Sigfox API session.
///
/// Owns the single [`SigfoxClient`] (and its connection pool) that every
/// façade borrows. All configuration arrives already resolved; nothing here
/// reads the environment or the filesystem.
///
/// ```no_run
/// # async fn demo() -> Result<(), sigfox_api::Error> {
/// use std::time::Duration;
/// use secrecy::SecretString;
/// use sigfox_api::{Sigfox, DeviceListFilter};
///
/// let sigfox = Sigfox::new(
///     "api-login",
///     SecretString::from("api-secret"),
///     sigfox_api::DEFAULT_BASE_URL,
///     Duration::from_secs(30),
/// )?;
/// let devices = sigfox.devices().list(&DeviceListFilter::default()).await?;
/// # let _ = devices;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Sigfox {
    client: SigfoxClient,
}

impl Sigfox {
    pub fn new(
        login: impl Into<String>,
        secret: SecretString,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let credential = Credential::new(login, secret);
        let client = SigfoxClient::new(
            credential,
            base_url,
            &TransportConfig::with_timeout(timeout),
        )?;
        Ok(Self { client })
    }

    pub fn from_client(client: SigfoxClient) -> Self {
        Self { client }
    }

    /// The underlying request layer, for endpoints without a façade.
    pub fn client(&self) -> &SigfoxClient {
        &self.client
    }

    pub fn devices(&self) -> Devices<'_> {
        Devices::new(&self.client)
    }

    pub fn device_types(&self) -> DeviceTypes<'_> {
        DeviceTypes::new(&self.client)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.client)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.client)
    }

    pub fn api_users(&self) -> ApiUsers<'_> {
        ApiUsers::new(&self.client)
    }

    pub fn base_stations(&self) -> BaseStations<'_> {
        BaseStations::new(&self.client)
    }

    pub fn contract_infos(&self) -> ContractInfos<'_> {
        ContractInfos::new(&self.client)
    }

    pub fn coverages(&self) -> Coverages<'_> {
        Coverages::new(&self.client)
    }
}
