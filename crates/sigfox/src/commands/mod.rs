//! Command dispatch: bridges CLI args -> façade calls -> output formatting.

pub mod api_users;
pub mod base_stations;
pub mod config_cmd;
pub mod contract_infos;
pub mod coverages;
pub mod device_types;
pub mod devices;
pub mod groups;
pub mod users;
pub mod util;

use sigfox_api::Sigfox;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, sigfox: &Sigfox, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(sigfox, args, global).await,
        Command::DeviceTypes(args) => device_types::handle(sigfox, args, global).await,
        Command::Groups(args) => groups::handle(sigfox, args, global).await,
        Command::Users(args) => users::handle(sigfox, args, global).await,
        Command::ApiUsers(args) => api_users::handle(sigfox, args, global).await,
        Command::BaseStations(args) => base_stations::handle(sigfox, args, global).await,
        Command::ContractInfos(args) => contract_infos::handle(sigfox, args, global).await,
        Command::Coverages(args) => coverages::handle(sigfox, args, global).await,
        // Handled in main before a session exists
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(_) => Ok(()),
    }
}
