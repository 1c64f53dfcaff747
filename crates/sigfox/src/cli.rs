//! Clap derive structures for the `sigfox` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap and clap_complete so the build script can include it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sigfox -- command-line client for the Sigfox API v2
#[derive(Debug, Parser)]
#[command(
    name = "sigfox",
    version,
    about = "Manage Sigfox devices, groups and users from the command line",
    long_about = "A CLI for the Sigfox IoT device-management REST API (v2).\n\n\
        Credentials come from --api-login/--api-password, the SIGFOX_API_LOGIN and\n\
        SIGFOX_API_PASSWORD environment variables, or `sigfox config init`.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API login (the API user's id)
    #[arg(long, env = "SIGFOX_API_LOGIN", global = true)]
    pub api_login: Option<String>,

    /// API password (the API user's secret)
    #[arg(long, env = "SIGFOX_API_PASSWORD", global = true, hide_env_values = true)]
    pub api_password: Option<String>,

    /// API base URL (overrides config)
    #[arg(long, env = "SIGFOX_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(
        long,
        env = "SIGFOX_TIMEOUT",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    pub timeout: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, env = "SIGFOX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, short = 'o', env = "SIGFOX_OUTPUT_FORMAT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', visible_alias = "force", global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage device types
    #[command(alias = "dt")]
    DeviceTypes(DeviceTypesArgs),

    /// Manage groups
    #[command(alias = "g")]
    Groups(GroupsArgs),

    /// Manage portal users
    Users(UsersArgs),

    /// Manage API users
    ApiUsers(ApiUsersArgs),

    /// Read base station data
    #[command(alias = "bs")]
    BaseStations(BaseStationsArgs),

    /// View contract information
    #[command(alias = "contracts")]
    ContractInfos(ContractInfosArgs),

    /// Coverage predictions and redundancy
    #[command(alias = "cov")]
    Coverages(CoveragesArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Shared paging arguments for list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Max results per page
    #[arg(long, short = 'l', default_value = "100")]
    pub limit: u32,

    /// Number of results to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,

    /// Follow pages until the last one
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Stop after this many results (with --all)
    #[arg(long, requires = "all")]
    pub max: Option<usize>,
}

/// Time window and paging for message-like listings.
#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Start time, milliseconds since the Unix epoch
    #[arg(long)]
    pub since: Option<i64>,

    /// End time, milliseconds since the Unix epoch
    #[arg(long)]
    pub before: Option<i64>,

    /// Max results
    #[arg(long, short = 'l', default_value = "100")]
    pub limit: u32,

    /// Number of results to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

/// `--fields` / `--authorizations` for detail views.
#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Sub-object fields to expand, e.g. "group(name)"
    #[arg(long)]
    pub fields: Option<String>,

    /// Include the caller's permitted actions and resources
    #[arg(long)]
    pub authorizations: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only devices of this device type
        #[arg(long)]
        device_type_id: Option<String>,

        /// Only devices in these groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        group_ids: Vec<String>,

        /// Include devices of sub-groups
        #[arg(long)]
        deep: bool,

        /// Sort field, e.g. "name" or "-lastCom"
        #[arg(long)]
        sort: Option<String>,
    },

    /// Get device details
    Get {
        /// Device ID (hex)
        device_id: String,
    },

    /// Register a device
    Create {
        /// Device ID (hex)
        #[arg(long)]
        id: String,

        /// Device name
        #[arg(long)]
        name: String,

        /// Device type to attach the device to
        #[arg(long)]
        device_type_id: String,

        /// Porting authorization code
        #[arg(long)]
        pac: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Product certificate key
        #[arg(long)]
        product_certificate: Option<String>,

        /// Register as a prototype
        #[arg(long)]
        prototype: Option<bool>,

        #[arg(long)]
        automatic_renewal: Option<bool>,

        #[arg(long)]
        activable: Option<bool>,
    },

    /// Update a device
    Update {
        /// Device ID (hex)
        device_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        #[arg(long)]
        product_certificate: Option<String>,

        #[arg(long)]
        prototype: Option<bool>,

        #[arg(long)]
        automatic_renewal: Option<bool>,

        #[arg(long)]
        activable: Option<bool>,
    },

    /// Delete a device
    Delete {
        /// Device ID (hex)
        device_id: String,
    },

    /// List messages sent by a device
    #[command(alias = "msgs")]
    Messages {
        /// Device ID (hex)
        device_id: String,

        #[command(flatten)]
        window: WindowArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICE TYPES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DeviceTypesArgs {
    #[command(subcommand)]
    pub command: DeviceTypesCommand,
}

/// Device type settings shared by create and update.
#[derive(Debug, Args)]
pub struct DeviceTypeFields {
    #[arg(long)]
    pub description: Option<String>,

    /// Keep-alive period in seconds (0 = default)
    #[arg(long)]
    pub keep_alive: Option<i64>,

    #[arg(long)]
    pub alert_email: Option<String>,

    /// 2=Regular, 3=Custom grammar, 4=Geolocation
    #[arg(long)]
    pub payload_type: Option<i32>,

    /// Custom payload grammar
    #[arg(long)]
    pub payload_config: Option<String>,

    /// 0=DIRECT, 1=CALLBACK, 2=NONE, 3=MANAGED
    #[arg(long)]
    pub downlink_mode: Option<i32>,

    /// Downlink data (hex)
    #[arg(long)]
    pub downlink_data: Option<String>,

    #[arg(long)]
    pub automatic_renewal: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum DeviceTypesCommand {
    /// List device types
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Name prefix
        #[arg(long)]
        name: Option<String>,

        /// Only device types in these groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        group_ids: Vec<String>,

        /// Include device types of sub-groups
        #[arg(long)]
        deep: bool,

        #[arg(long)]
        contract_id: Option<String>,

        #[arg(long)]
        sort: Option<String>,
    },

    /// Get device type details
    Get {
        /// Device type ID
        device_type_id: String,
    },

    /// Create a device type
    Create {
        #[arg(long)]
        name: String,

        /// Owning group
        #[arg(long)]
        group_id: String,

        /// Contract to attach
        #[arg(long)]
        contract_id: Option<String>,

        #[command(flatten)]
        fields: DeviceTypeFields,
    },

    /// Update a device type
    Update {
        /// Device type ID
        device_type_id: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: DeviceTypeFields,
    },

    /// Delete a device type
    Delete {
        /// Device type ID
        device_type_id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// List groups
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Parent groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        parent_ids: Vec<String>,

        /// Include all sub-groups recursively
        #[arg(long)]
        deep: bool,

        /// Name substring
        #[arg(long)]
        name: Option<String>,

        /// Group types (comma-separated integers, e.g. 0,2,8)
        #[arg(long, value_delimiter = ',')]
        types: Vec<i32>,

        /// Only groups on which this action is allowed, e.g. "devices:create"
        #[arg(long)]
        action: Option<String>,

        #[arg(long)]
        sort: Option<String>,

        /// Page token from a previous response
        #[arg(long)]
        page_id: Option<String>,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Get group details
    Get {
        /// Group ID
        group_id: String,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Create a group
    Create {
        /// Group name (3-100 characters)
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// 0=SO, 2=Other, 5=SVNO, 6=Partners, 7=NIP, 8=DIST, 9=Channel, 10=Starter, 11=Partner
        #[arg(long = "type")]
        group_type: i32,

        /// Java time zone id, e.g. Europe/Paris
        #[arg(long)]
        timezone: String,

        #[arg(long)]
        parent_id: String,

        #[arg(long)]
        technical_email: Option<String>,

        #[arg(long)]
        account_id: Option<String>,

        /// Network operator group (DIST and SVNO)
        #[arg(long)]
        network_operator_id: Option<String>,

        /// ISO 3166 alpha-3 country code (SO and NIP)
        #[arg(long)]
        country_iso: Option<String>,

        #[arg(long)]
        billable: Option<bool>,

        #[arg(long)]
        max_prototypes: Option<i64>,
    },

    /// Update a group
    Update {
        /// Group ID
        group_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "type")]
        group_type: Option<i32>,

        #[arg(long)]
        timezone: Option<String>,

        #[arg(long)]
        billable: Option<bool>,

        #[arg(long)]
        technical_email: Option<String>,

        #[arg(long)]
        max_prototypes: Option<i64>,
    },

    /// Delete a group
    Delete {
        /// Group ID
        group_id: String,
    },

    /// List callbacks that failed to be delivered
    CallbacksNotDelivered {
        /// Group ID
        group_id: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// List geolocation payload configurations
    GeolocPayloads {
        /// Group ID
        group_id: String,

        #[arg(long, short = 'l', default_value = "100")]
        limit: u32,

        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(long)]
        page_id: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only users of these groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        group_ids: Vec<String>,

        /// Include users of sub-groups
        #[arg(long)]
        deep: bool,

        /// Sort, e.g. "firstName:asc"
        #[arg(long)]
        sort: Option<String>,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Get user details
    Get {
        /// User ID
        user_id: String,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Create a user
    Create {
        #[arg(long)]
        group_id: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// Java time zone id
        #[arg(long, default_value = "UTC")]
        timezone: String,

        /// Role IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        role_ids: Vec<String>,
    },

    /// Update a user
    Update {
        /// User ID
        user_id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        timezone: Option<String>,

        /// Role IDs (comma-separated, replaces existing)
        #[arg(long, value_delimiter = ',')]
        role_ids: Option<Vec<String>>,
    },

    /// Delete a user
    Delete {
        /// User ID
        user_id: String,
    },

    /// Set a user's roles (replaces existing)
    AddRoles {
        /// User ID
        user_id: String,

        /// Role IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        role_ids: Vec<String>,
    },

    /// Remove one role from a user
    RemoveRole {
        /// User ID
        user_id: String,

        /// Role ID
        role_id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  API USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ApiUsersArgs {
    #[command(subcommand)]
    pub command: ApiUsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ApiUsersCommand {
    /// List API users
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only API users holding this profile
        #[arg(long)]
        profile_id: Option<String>,

        /// Only API users of these groups (comma-separated)
        #[arg(long, value_delimiter = ',')]
        group_ids: Vec<String>,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Get API user details
    Get {
        /// API user ID
        api_user_id: String,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Create an API user
    Create {
        #[arg(long)]
        group_id: String,

        /// Name (max 100 characters)
        #[arg(long)]
        name: String,

        /// Java time zone id
        #[arg(long, default_value = "UTC")]
        timezone: String,

        /// Profile IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        profile_ids: Vec<String>,
    },

    /// Update an API user
    Update {
        /// API user ID
        api_user_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        timezone: Option<String>,

        /// Profile IDs (comma-separated, replaces existing)
        #[arg(long, value_delimiter = ',')]
        profile_ids: Option<Vec<String>>,
    },

    /// Delete an API user
    Delete {
        /// API user ID
        api_user_id: String,
    },

    /// Set an API user's profiles (replaces existing)
    AddProfiles {
        /// API user ID
        api_user_id: String,

        /// Profile IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        profile_ids: Vec<String>,
    },

    /// Remove one profile from an API user
    RemoveProfile {
        /// API user ID
        api_user_id: String,

        /// Profile ID
        profile_id: String,
    },

    /// Generate a new secret, invalidating the current one
    RenewCredential {
        /// API user ID
        api_user_id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BASE STATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BaseStationsArgs {
    #[command(subcommand)]
    pub command: BaseStationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BaseStationsCommand {
    /// List messages received by a base station
    Messages {
        /// Base station ID (hex)
        station_id: String,

        /// Sub-object fields to expand, e.g. "device(name)"
        #[arg(long)]
        fields: Option<String>,

        #[command(flatten)]
        window: WindowArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONTRACT INFOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContractInfosArgs {
    #[command(subcommand)]
    pub command: ContractInfosCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContractInfosCommand {
    /// List contracts
    #[command(alias = "ls")]
    List {
        #[arg(long, short = 'l', default_value = "100")]
        limit: u32,

        #[arg(long, default_value = "0")]
        offset: u32,

        /// Name substring
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        group_id: Option<String>,

        /// 2=BASIC, 9=CHANNEL
        #[arg(long)]
        group_type: Option<i32>,

        /// Include contracts of child groups
        #[arg(long)]
        deep: bool,

        /// Include contracts of ancestor groups
        #[arg(long)]
        up: bool,

        /// Order IDs (comma-separated)
        #[arg(long)]
        order_ids: Option<String>,

        /// External contract IDs (comma-separated)
        #[arg(long)]
        contract_ids: Option<String>,

        /// Start of validity window, milliseconds since the Unix epoch
        #[arg(long)]
        from_time: Option<i64>,

        /// End of validity window, milliseconds since the Unix epoch
        #[arg(long)]
        to_time: Option<i64>,

        #[arg(long)]
        token_duration: Option<i64>,

        /// 1-3
        #[arg(long)]
        pricing_model: Option<i32>,

        /// 0-6
        #[arg(long)]
        subscription_plan: Option<i32>,

        #[arg(long)]
        page_id: Option<String>,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// Get contract details
    Get {
        /// Contract ID
        contract_id: String,

        #[command(flatten)]
        detail: DetailArgs,
    },

    /// List devices attached to a contract
    ListDevices {
        /// Contract ID
        contract_id: String,

        #[arg(long)]
        device_type_id: Option<String>,

        #[arg(long)]
        fields: Option<String>,

        #[arg(long, short = 'l', default_value = "100")]
        limit: u32,

        #[arg(long)]
        page_id: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COVERAGES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CoveragesArgs {
    #[command(subcommand)]
    pub command: CoveragesCommand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Situation {
    Outdoor,
    Indoor,
    Underground,
}

#[derive(Debug, Subcommand)]
pub enum CoveragesCommand {
    /// Predict coverage margins at one location
    GlobalPrediction {
        /// Latitude (WGS 84)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude (WGS 84)
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Location uncertainty radius in meters
        #[arg(long)]
        radius: Option<u32>,

        #[arg(long)]
        group_id: Option<String>,
    },

    /// Start a bulk prediction job
    BulkStart {
        /// JSON array of locations, e.g. '[{"lat": 48.86, "lng": 2.35}]'
        #[arg(long)]
        locations: String,

        /// Location uncertainty radius in meters
        #[arg(long)]
        radius: Option<u32>,

        #[arg(long)]
        group_id: Option<String>,
    },

    /// Get the state or results of a bulk prediction job
    BulkGet {
        /// Job ID returned by bulk-start
        job_id: String,

        /// Poll until the job is done
        #[arg(long, short = 'w')]
        wait: bool,

        /// Seconds between polls (with --wait)
        #[arg(long, default_value = "5", requires = "wait")]
        interval: u64,
    },

    /// Operator redundancy at one location
    OperatorRedundancy {
        /// Latitude (WGS 84)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude (WGS 84)
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Operator group (required for root Sigfox users)
        #[arg(long)]
        operator_id: Option<String>,

        /// Device installation context
        #[arg(long, value_enum)]
        device_situation: Option<Situation>,

        /// Radio class 0-3 (for 0u..3u)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        device_class_id: Option<u8>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG & COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the resolved configuration (password redacted)
    Show,

    /// Set a configuration value
    Set {
        /// One of: api_login, api_password, api_base_url, output_format, timeout
        key: String,

        /// Value to set
        value: String,
    },

    /// Store the API password in the system keyring
    SetPassword,

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
