//! Device command handlers.

use tabled::Tabled;

use sigfox_api::models::{Device, DeviceCreate, DeviceUpdate, Message};
use sigfox_api::{DeviceListFilter, MessageFilter, Sigfox};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Device Type")]
    device_type: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Last Com")]
    last_com: String,
    #[tabled(rename = "PAC")]
    pac: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.clone(),
            name: output::text(d.name.as_deref()),
            device_type: device_type_name(d),
            state: output::opt(d.state),
            last_com: output::timestamp(d.last_com),
            pac: output::text(d.pac.as_deref()),
        }
    }
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Data")]
    data: String,
    #[tabled(rename = "Seq")]
    seq: String,
    #[tabled(rename = "LQI")]
    lqi: String,
    #[tabled(rename = "Frames")]
    frames: String,
    #[tabled(rename = "Country")]
    country: String,
}

impl From<&Message> for MessageRow {
    fn from(m: &Message) -> Self {
        Self {
            time: output::timestamp(m.time),
            data: output::text(m.data.as_deref()),
            seq: output::opt(m.seq_number),
            lqi: output::opt(m.lqi),
            frames: output::opt(m.nb_frames),
            country: output::text(m.country.as_deref()),
        }
    }
}

fn device_type_name(d: &Device) -> String {
    let dt = d.device_type.as_ref();
    output::text(
        dt.and_then(|t| t.name.as_deref())
            .or_else(|| dt.and_then(|t| t.id.as_deref())),
    )
}

fn detail(d: &Device) -> String {
    [
        format!("ID:                {}", d.id),
        format!("Name:              {}", d.name.as_deref().unwrap_or("-")),
        format!("Device Type:       {}", device_type_name(d)),
        format!(
            "Group:             {}",
            output::text(d.group.as_ref().and_then(|g| g.name.as_deref()))
        ),
        format!("State:             {}", output::opt(d.state)),
        format!("Com State:         {}", output::opt(d.com_state)),
        format!("Last Com:          {}", output::timestamp(d.last_com)),
        format!("Creation Time:     {}", output::timestamp(d.creation_time)),
        format!("Activation Time:   {}", output::timestamp(d.activation_time)),
        format!("PAC:               {}", d.pac.as_deref().unwrap_or("-")),
        format!("Sequence Number:   {}", output::opt(d.sequence_number)),
        format!("LQI:               {}", output::opt(d.lqi)),
        format!("Satellite Capable: {}", output::flag(d.satellite_capable)),
        format!("Repeater:          {}", output::flag(d.repeater)),
        format!("Automatic Renewal: {}", output::flag(d.automatic_renewal)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(sigfox: &Sigfox, args: DevicesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let devices = sigfox.devices();
    let format = output::format(global);

    match args.command {
        DevicesCommand::List {
            list,
            device_type_id,
            group_ids,
            deep,
            sort,
        } => {
            let (limit, offset) = util::page(&list);
            let filter = DeviceListFilter {
                limit,
                offset,
                device_type_id,
                group_ids,
                deep,
                sort,
            };
            let items = if list.all {
                devices.list_all(&filter, list.max).await?
            } else {
                devices.list(&filter).await?
            };
            if output::report_empty(global, &items, "devices") {
                return Ok(());
            }
            let out = output::render_list(format, &items, |d| DeviceRow::from(d), |d| d.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Get { device_id } => {
            let device = devices.get(&device_id).await?;
            let out = output::render_single(format, &device, detail, |d| d.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Create {
            id,
            name,
            device_type_id,
            pac,
            lat,
            lng,
            product_certificate,
            prototype,
            automatic_renewal,
            activable,
        } => {
            let payload = DeviceCreate {
                lat,
                lng,
                product_certificate,
                prototype,
                automatic_renewal,
                activable,
                ..DeviceCreate::new(id, name, device_type_id, pac)
            };
            let device = devices.create_and_fetch(&payload).await?;
            output::success(global, &format!("Device {} created.", device.id));
            let out = output::render_single(format, &device, detail, |d| d.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Update {
            device_id,
            name,
            lat,
            lng,
            product_certificate,
            prototype,
            automatic_renewal,
            activable,
        } => {
            let payload = DeviceUpdate {
                name,
                lat,
                lng,
                product_certificate,
                prototype,
                automatic_renewal,
                activable,
            };
            util::ensure_changes(payload.is_empty())?;
            devices.update(&device_id, &payload).await?;
            output::success(global, &format!("Device {device_id} updated."));
            Ok(())
        }

        DevicesCommand::Delete { device_id } => {
            if !util::confirm_or_abort(&format!("Delete device {device_id}?"), global)? {
                return Ok(());
            }
            devices.delete(&device_id).await?;
            output::success(global, &format!("Device {device_id} deleted."));
            Ok(())
        }

        DevicesCommand::Messages { device_id, window } => {
            let filter = MessageFilter {
                limit: Some(window.limit),
                offset: Some(window.offset),
                since: window.since,
                before: window.before,
            };
            let messages = devices.messages(&device_id, &filter).await?;
            if output::report_empty(global, &messages, "messages") {
                return Ok(());
            }
            let out = output::render_list(format, &messages, |m| MessageRow::from(m), |m| {
                m.data.clone().unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
