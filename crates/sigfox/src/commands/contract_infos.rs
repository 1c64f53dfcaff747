//! Contract info command handlers.

use serde_json::{Map, Value};
use tabled::Tabled;

use sigfox_api::models::ContractInfo;
use sigfox_api::{ContractDevicesFilter, ContractInfoListFilter, Sigfox};

use crate::cli::{ContractInfosArgs, ContractInfosCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ContractRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tokens")]
    tokens: String,
    #[tabled(rename = "Activation End")]
    activation_end: String,
    #[tabled(rename = "Communication End")]
    communication_end: String,
}

impl From<&ContractInfo> for ContractRow {
    fn from(c: &ContractInfo) -> Self {
        Self {
            id: output::text(c.id.as_deref()),
            name: output::text(c.name.as_deref()),
            tokens: tokens(c),
            activation_end: output::timestamp(c.activation_end_time),
            communication_end: output::timestamp(c.communication_end_time),
        }
    }
}

#[derive(Tabled)]
struct ContractDeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Map<String, Value>> for ContractDeviceRow {
    fn from(d: &Map<String, Value>) -> Self {
        Self {
            id: output::text(d.get("id").and_then(Value::as_str)),
            name: output::text(d.get("name").and_then(Value::as_str)),
        }
    }
}

/// `in use / max`, with either side shown as `-` when unknown.
fn tokens(c: &ContractInfo) -> String {
    format!("{} / {}", output::opt(c.tokens_in_use), output::opt(c.max_tokens))
}

fn pricing_label(code: Option<i32>) -> String {
    match code {
        Some(1) => "Pricing model v1".into(),
        Some(2) => "Pricing model v2".into(),
        Some(3) => "Sigfox Operator pricing".into(),
        other => output::opt(other),
    }
}

fn detail(c: &ContractInfo) -> String {
    [
        format!("ID:                {}", c.id.as_deref().unwrap_or("-")),
        format!("Name:              {}", c.name.as_deref().unwrap_or("-")),
        format!("Contract ID:       {}", c.contract_id.as_deref().unwrap_or("-")),
        format!(
            "Group:             {}",
            output::text(c.group.as_ref().and_then(|g| g.name.as_deref()))
        ),
        format!("Tokens:            {}", tokens(c)),
        format!("Tokens Used:       {}", output::opt(c.tokens_used)),
        format!("Token Duration:    {}", output::opt(c.token_duration)),
        format!("Pricing Model:     {}", pricing_label(c.pricing_model)),
        format!("Subscription Plan: {}", output::opt(c.subscription_plan)),
        format!("Bidirectional:     {}", output::flag(c.bidir)),
        format!("Automatic Renewal: {}", output::flag(c.automatic_renewal)),
        format!("Start:             {}", output::timestamp(c.start_time)),
        format!("Activation End:    {}", output::timestamp(c.activation_end_time)),
        format!("Communication End: {}", output::timestamp(c.communication_end_time)),
    ]
    .join("\n")
}

pub async fn handle(
    sigfox: &Sigfox,
    args: ContractInfosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let contracts = sigfox.contract_infos();
    let format = output::format(global);

    match args.command {
        ContractInfosCommand::List {
            limit,
            offset,
            name,
            group_id,
            group_type,
            deep,
            up,
            order_ids,
            contract_ids,
            from_time,
            to_time,
            token_duration,
            pricing_model,
            subscription_plan,
            page_id,
            detail: detail_args,
        } => {
            let filter = ContractInfoListFilter {
                limit: Some(limit),
                offset: Some(offset),
                name,
                group_id,
                group_type,
                deep,
                up,
                order_ids,
                contract_ids,
                from_time,
                to_time,
                token_duration,
                pricing_model,
                subscription_plan,
                fields: detail_args.fields,
                authorizations: detail_args.authorizations,
                page_id,
            };
            let items = contracts.list(&filter).await?;
            if output::report_empty(global, &items, "contracts") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &items,
                |c| ContractRow::from(c),
                |c| c.id.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ContractInfosCommand::Get {
            contract_id,
            detail: detail_args,
        } => {
            let contract = contracts
                .get(&contract_id, &util::detail_options(detail_args))
                .await?;
            let out = output::render_single(format, &contract, detail, |c| {
                c.id.clone().unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ContractInfosCommand::ListDevices {
            contract_id,
            device_type_id,
            fields,
            limit,
            page_id,
        } => {
            let filter = ContractDevicesFilter {
                device_type_id,
                fields,
                limit: Some(limit),
                page_id,
            };
            let devices = contracts.list_devices(&contract_id, &filter).await?;
            if output::report_empty(global, &devices, "devices") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &devices,
                |d| ContractDeviceRow::from(d),
                |d| d.get("id").and_then(Value::as_str).unwrap_or_default().to_owned(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
