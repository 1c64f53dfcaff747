//! Base station command handlers.

use tabled::Tabled;

use sigfox_api::models::Message;
use sigfox_api::{BaseStationMessageFilter, Sigfox};

use crate::cli::{BaseStationsArgs, BaseStationsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ReceivedRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Data")]
    data: String,
    #[tabled(rename = "Seq")]
    seq: String,
    #[tabled(rename = "LQI")]
    lqi: String,
}

impl From<&Message> for ReceivedRow {
    fn from(m: &Message) -> Self {
        let device = m.device.as_ref();
        Self {
            time: output::timestamp(m.time),
            device: output::text(
                device
                    .and_then(|d| d.name.as_deref())
                    .or_else(|| device.and_then(|d| d.id.as_deref())),
            ),
            data: output::text(m.data.as_deref()),
            seq: output::opt(m.seq_number),
            lqi: output::opt(m.lqi),
        }
    }
}

pub async fn handle(
    sigfox: &Sigfox,
    args: BaseStationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BaseStationsCommand::Messages {
            station_id,
            fields,
            window,
        } => {
            let filter = BaseStationMessageFilter {
                fields,
                since: window.since,
                before: window.before,
                limit: Some(window.limit),
                offset: Some(window.offset),
            };
            let messages = sigfox
                .base_stations()
                .list_messages(&station_id, &filter)
                .await?;
            if output::report_empty(global, &messages, "messages") {
                return Ok(());
            }
            let out = output::render_list(
                output::format(global),
                &messages,
                |m| ReceivedRow::from(m),
                |m| m.data.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
