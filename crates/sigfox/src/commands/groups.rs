//! Group command handlers.

use tabled::Tabled;

use sigfox_api::models::{GeolocPayload, Group, GroupCallbackError, GroupCreate, GroupUpdate};
use sigfox_api::{CallbackFilter, DetailOptions, GeolocFilter, GroupListFilter, Sigfox};

use crate::cli::{GlobalOpts, GroupsArgs, GroupsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    group_type: String,
    #[tabled(rename = "Timezone")]
    timezone: String,
    #[tabled(rename = "Leaf")]
    leaf: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Group> for GroupRow {
    fn from(g: &Group) -> Self {
        Self {
            id: g.id.clone(),
            name: output::text(g.name.as_deref()),
            group_type: type_label(g.group_type),
            timezone: output::text(g.timezone.as_deref()),
            leaf: output::flag(g.leaf),
            created: output::timestamp(g.creation_time),
        }
    }
}

#[derive(Tabled)]
struct CallbackErrorRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&GroupCallbackError> for CallbackErrorRow {
    fn from(e: &GroupCallbackError) -> Self {
        Self {
            time: output::timestamp(e.time),
            device: output::text(e.device.as_deref()),
            status: output::text(e.status.as_deref()),
            message: output::text(e.message.as_deref()),
        }
    }
}

#[derive(Tabled)]
struct GeolocRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Group kind codes as shown in the Sigfox backend.
fn type_label(code: Option<i32>) -> String {
    let label = match code {
        Some(0) => "SO",
        Some(2) => "Other",
        Some(5) => "SVNO",
        Some(6) => "Partners",
        Some(7) => "NIP",
        Some(8) => "DIST",
        Some(9) => "Channel",
        Some(10) => "Starter",
        Some(11) => "Partner",
        other => return output::opt(other),
    };
    label.into()
}

fn detail(g: &Group) -> String {
    let mut lines = vec![
        format!("ID:              {}", g.id),
        format!("Name:            {}", g.name.as_deref().unwrap_or("-")),
        format!("Description:     {}", g.description.as_deref().unwrap_or("-")),
        format!("Type:            {}", type_label(g.group_type)),
        format!("Timezone:        {}", g.timezone.as_deref().unwrap_or("-")),
        format!("Leaf:            {}", output::flag(g.leaf)),
        format!("Billable:        {}", output::flag(g.billable)),
        format!("Technical Email: {}", g.technical_email.as_deref().unwrap_or("-")),
        format!("Max Prototypes:  {}", output::opt(g.max_prototype_allowed)),
        format!("Created:         {}", output::timestamp(g.creation_time)),
    ];
    if let Some(path) = &g.path {
        let names: Vec<String> = path
            .iter()
            .map(|p| p.name.clone().or_else(|| p.id.clone()).unwrap_or_default())
            .collect();
        lines.push(format!("Path:            {}", names.join(" / ")));
    }
    if let Some(actions) = &g.actions {
        lines.push(format!("Actions:         {}", output::join(actions)));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(sigfox: &Sigfox, args: GroupsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let groups = sigfox.groups();
    let format = output::format(global);

    match args.command {
        GroupsCommand::List {
            list,
            parent_ids,
            deep,
            name,
            types,
            action,
            sort,
            page_id,
            detail: detail_args,
        } => {
            let (limit, offset) = util::page(&list);
            let filter = GroupListFilter {
                limit,
                offset,
                parent_ids,
                deep,
                name,
                types,
                fields: detail_args.fields,
                action,
                sort,
                authorizations: detail_args.authorizations,
                page_id,
            };
            let items = if list.all {
                groups.list_all(&filter, list.max).await?
            } else {
                groups.list(&filter).await?
            };
            if output::report_empty(global, &items, "groups") {
                return Ok(());
            }
            let out = output::render_list(format, &items, |g| GroupRow::from(g), |g| g.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Get {
            group_id,
            detail: detail_args,
        } => {
            let options = util::detail_options(detail_args);
            let group = groups.get(&group_id, &options).await?;
            let out = output::render_single(format, &group, detail, |g| g.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Create {
            name,
            description,
            group_type,
            timezone,
            parent_id,
            technical_email,
            account_id,
            network_operator_id,
            country_iso,
            billable,
            max_prototypes,
        } => {
            let payload = GroupCreate {
                name,
                description,
                group_type,
                timezone,
                parent_id,
                technical_email,
                account_id,
                network_operator_id,
                country_iso_alpha3: country_iso,
                billable,
                max_prototype_allowed: max_prototypes,
            };
            let created = groups.create(&payload).await?;
            output::success(global, &format!("Group {} created.", created.id));
            let group = groups.get(&created.id, &DetailOptions::default()).await?;
            let out = output::render_single(format, &group, detail, |g| g.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Update {
            group_id,
            name,
            description,
            group_type,
            timezone,
            billable,
            technical_email,
            max_prototypes,
        } => {
            let payload = GroupUpdate {
                name,
                description,
                group_type,
                timezone,
                billable,
                technical_email,
                max_prototype_allowed: max_prototypes,
            };
            util::ensure_changes(payload.is_empty())?;
            groups.update(&group_id, &payload).await?;
            output::success(global, &format!("Group {group_id} updated."));
            Ok(())
        }

        GroupsCommand::Delete { group_id } => {
            if !util::confirm_or_abort(&format!("Delete group {group_id}?"), global)? {
                return Ok(());
            }
            groups.delete(&group_id).await?;
            output::success(global, &format!("Group {group_id} deleted."));
            Ok(())
        }

        GroupsCommand::CallbacksNotDelivered { group_id, window } => {
            let filter = CallbackFilter {
                since: window.since,
                before: window.before,
                limit: Some(window.limit),
                offset: Some(window.offset),
            };
            let errors = groups.callbacks_not_delivered(&group_id, &filter).await?;
            if output::report_empty(global, &errors, "undelivered callbacks") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &errors,
                |e| CallbackErrorRow::from(e),
                |e| e.device.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::GeolocPayloads {
            group_id,
            limit,
            offset,
            page_id,
        } => {
            let filter = GeolocFilter {
                limit: Some(limit),
                offset: Some(offset),
                page_id,
            };
            let payloads = groups.geoloc_payloads(&group_id, &filter).await?;
            if output::report_empty(global, &payloads, "geolocation payloads") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &payloads,
                |p: &GeolocPayload| GeolocRow {
                    id: output::text(p.id.as_deref()),
                    name: output::text(p.name.as_deref()),
                },
                |p| p.id.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
