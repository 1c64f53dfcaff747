//! Device type command handlers.

use tabled::Tabled;

use sigfox_api::models::{DeviceType, DeviceTypeCreate, DeviceTypeUpdate};
use sigfox_api::{DeviceTypeListFilter, Sigfox};

use crate::cli::{DeviceTypeFields, DeviceTypesArgs, DeviceTypesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct DeviceTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Payload")]
    payload_type: String,
    #[tabled(rename = "Downlink")]
    downlink_mode: String,
    #[tabled(rename = "Keep Alive")]
    keep_alive: String,
}

impl From<&DeviceType> for DeviceTypeRow {
    fn from(t: &DeviceType) -> Self {
        Self {
            id: t.id.clone(),
            name: output::text(t.name.as_deref()),
            group: output::text(t.group.as_ref().and_then(|g| g.name.as_deref())),
            payload_type: payload_label(t.payload_type),
            downlink_mode: downlink_label(t.downlink_mode),
            keep_alive: output::opt(t.keep_alive),
        }
    }
}

fn payload_label(code: Option<i32>) -> String {
    match code {
        Some(2) => "Regular".into(),
        Some(3) => "Custom grammar".into(),
        Some(4) => "Geolocation".into(),
        other => output::opt(other),
    }
}

fn downlink_label(code: Option<i32>) -> String {
    match code {
        Some(0) => "DIRECT".into(),
        Some(1) => "CALLBACK".into(),
        Some(2) => "NONE".into(),
        Some(3) => "MANAGED".into(),
        other => output::opt(other),
    }
}

fn detail(t: &DeviceType) -> String {
    [
        format!("ID:                {}", t.id),
        format!("Name:              {}", t.name.as_deref().unwrap_or("-")),
        format!("Description:       {}", t.description.as_deref().unwrap_or("-")),
        format!(
            "Group:             {}",
            output::text(t.group.as_ref().and_then(|g| g.name.as_deref()))
        ),
        format!(
            "Contract:          {}",
            output::text(t.contract.as_ref().and_then(|c| c.name.as_deref()))
        ),
        format!("Keep Alive:        {}", output::opt(t.keep_alive)),
        format!("Alert Email:       {}", t.alert_email.as_deref().unwrap_or("-")),
        format!("Payload Type:      {}", payload_label(t.payload_type)),
        format!("Downlink Mode:     {}", downlink_label(t.downlink_mode)),
        format!(
            "Downlink Data:     {}",
            t.downlink_data_string.as_deref().unwrap_or("-")
        ),
        format!("Automatic Renewal: {}", output::flag(t.automatic_renewal)),
        format!("Creation Time:     {}", output::timestamp(t.creation_time)),
    ]
    .join("\n")
}

fn update_payload(name: Option<String>, f: DeviceTypeFields) -> DeviceTypeUpdate {
    DeviceTypeUpdate {
        name,
        description: f.description,
        keep_alive: f.keep_alive,
        alert_email: f.alert_email,
        payload_type: f.payload_type,
        payload_config: f.payload_config,
        downlink_mode: f.downlink_mode,
        downlink_data_string: f.downlink_data,
        automatic_renewal: f.automatic_renewal,
    }
}

pub async fn handle(
    sigfox: &Sigfox,
    args: DeviceTypesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let device_types = sigfox.device_types();
    let format = output::format(global);

    match args.command {
        DeviceTypesCommand::List {
            list,
            name,
            group_ids,
            deep,
            contract_id,
            sort,
        } => {
            let (limit, offset) = util::page(&list);
            let filter = DeviceTypeListFilter {
                limit,
                offset,
                name,
                group_ids,
                contract_id,
                deep,
                sort,
            };
            let items = if list.all {
                device_types.list_all(&filter, list.max).await?
            } else {
                device_types.list(&filter).await?
            };
            if output::report_empty(global, &items, "device types") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &items,
                |t| DeviceTypeRow::from(t),
                |t| t.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeviceTypesCommand::Get { device_type_id } => {
            let device_type = device_types.get(&device_type_id).await?;
            let out = output::render_single(format, &device_type, detail, |t| t.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeviceTypesCommand::Create {
            name,
            group_id,
            contract_id,
            fields,
        } => {
            let payload = DeviceTypeCreate {
                contract_id,
                description: fields.description,
                keep_alive: fields.keep_alive,
                alert_email: fields.alert_email,
                payload_type: fields.payload_type,
                payload_config: fields.payload_config,
                downlink_mode: fields.downlink_mode,
                downlink_data_string: fields.downlink_data,
                automatic_renewal: fields.automatic_renewal,
                ..DeviceTypeCreate::new(name, group_id)
            };
            let created = device_types.create(&payload).await?;
            output::success(global, &format!("Device type {} created.", created.id));
            let device_type = device_types.get(&created.id).await?;
            let out = output::render_single(format, &device_type, detail, |t| t.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DeviceTypesCommand::Update {
            device_type_id,
            name,
            fields,
        } => {
            let payload = update_payload(name, fields);
            util::ensure_changes(payload.is_empty())?;
            device_types.update(&device_type_id, &payload).await?;
            output::success(global, &format!("Device type {device_type_id} updated."));
            Ok(())
        }

        DeviceTypesCommand::Delete { device_type_id } => {
            let prompt = format!("Delete device type {device_type_id}?");
            if !util::confirm_or_abort(&prompt, global)? {
                return Ok(());
            }
            device_types.delete(&device_type_id).await?;
            output::success(global, &format!("Device type {device_type_id} deleted."));
            Ok(())
        }
    }
}
