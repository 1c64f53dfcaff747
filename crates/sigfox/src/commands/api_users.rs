//! API user command handlers.

use tabled::Tabled;

use sigfox_api::models::{ApiUser, ApiUserCreate, ApiUserUpdate};
use sigfox_api::{ApiUserListFilter, DetailOptions, Sigfox};

use crate::cli::{ApiUsersArgs, ApiUsersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ApiUserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Profiles")]
    profiles: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&ApiUser> for ApiUserRow {
    fn from(u: &ApiUser) -> Self {
        Self {
            id: u.id.clone(),
            name: output::text(u.name.as_deref()),
            group: output::text(u.group.as_ref().and_then(|g| g.name.as_deref())),
            profiles: output::text(Some(&profile_names(u))),
            created: output::timestamp(u.creation_time),
        }
    }
}

fn profile_names(u: &ApiUser) -> String {
    let names: Vec<String> = u
        .profiles
        .iter()
        .flatten()
        .filter_map(|p| p.name.clone().or_else(|| p.id.clone()))
        .collect();
    output::join(&names)
}

fn detail(u: &ApiUser) -> String {
    [
        format!("ID:       {}", u.id),
        format!("Name:     {}", u.name.as_deref().unwrap_or("-")),
        format!("Timezone: {}", u.timezone.as_deref().unwrap_or("-")),
        format!(
            "Group:    {}",
            output::text(u.group.as_ref().and_then(|g| g.name.as_deref()))
        ),
        format!("Profiles: {}", profile_names(u)),
        format!("Created:  {}", output::timestamp(u.creation_time)),
    ]
    .join("\n")
}

pub async fn handle(
    sigfox: &Sigfox,
    args: ApiUsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let api_users = sigfox.api_users();
    let format = output::format(global);

    match args.command {
        ApiUsersCommand::List {
            list,
            profile_id,
            group_ids,
            detail: detail_args,
        } => {
            let (limit, offset) = util::page(&list);
            let filter = ApiUserListFilter {
                limit,
                offset,
                profile_id,
                group_ids,
                fields: detail_args.fields,
                authorizations: detail_args.authorizations,
            };
            let items = if list.all {
                api_users.list_all(&filter, list.max).await?
            } else {
                api_users.list(&filter).await?
            };
            if output::report_empty(global, &items, "API users") {
                return Ok(());
            }
            let out =
                output::render_list(format, &items, |u| ApiUserRow::from(u), |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApiUsersCommand::Get {
            api_user_id,
            detail: detail_args,
        } => {
            let api_user = api_users
                .get(&api_user_id, &util::detail_options(detail_args))
                .await?;
            let out = output::render_single(format, &api_user, detail, |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApiUsersCommand::Create {
            group_id,
            name,
            timezone,
            profile_ids,
        } => {
            let payload = ApiUserCreate {
                group_id,
                name,
                timezone,
                profile_ids,
            };
            let created = api_users.create(&payload).await?;
            output::success(global, &format!("API user {} created.", created.id));
            let api_user = api_users.get(&created.id, &DetailOptions::default()).await?;
            let out = output::render_single(format, &api_user, detail, |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApiUsersCommand::Update {
            api_user_id,
            name,
            timezone,
            profile_ids,
        } => {
            let payload = ApiUserUpdate {
                name,
                timezone,
                profile_ids,
            };
            util::ensure_changes(payload.is_empty())?;
            api_users.update(&api_user_id, &payload).await?;
            output::success(global, &format!("API user {api_user_id} updated."));
            Ok(())
        }

        ApiUsersCommand::Delete { api_user_id } => {
            if !util::confirm_or_abort(&format!("Delete API user {api_user_id}?"), global)? {
                return Ok(());
            }
            api_users.delete(&api_user_id).await?;
            output::success(global, &format!("API user {api_user_id} deleted."));
            Ok(())
        }

        ApiUsersCommand::AddProfiles {
            api_user_id,
            profile_ids,
        } => {
            api_users.add_profiles(&api_user_id, &profile_ids).await?;
            output::success(
                global,
                &format!(
                    "Profiles of API user {api_user_id} set to {}.",
                    profile_ids.join(", ")
                ),
            );
            Ok(())
        }

        ApiUsersCommand::RemoveProfile {
            api_user_id,
            profile_id,
        } => {
            let prompt = format!("Remove profile {profile_id} from API user {api_user_id}?");
            if !util::confirm_or_abort(&prompt, global)? {
                return Ok(());
            }
            api_users.remove_profile(&api_user_id, &profile_id).await?;
            output::success(
                global,
                &format!("Profile {profile_id} removed from API user {api_user_id}."),
            );
            Ok(())
        }

        ApiUsersCommand::RenewCredential { api_user_id } => {
            let prompt = format!(
                "This will invalidate the current password for API user {api_user_id}. Continue?"
            );
            if !util::confirm_or_abort(&prompt, global)? {
                return Ok(());
            }
            let renewed = api_users.renew_credential(&api_user_id).await?;
            let Some(token) = renewed.access_token.clone().filter(|t| !t.is_empty()) else {
                return Err(CliError::Client(sigfox_api::Error::Deserialization {
                    message: format!(
                        "renew-credential response for API user {api_user_id} has no accessToken"
                    ),
                    body: serde_json::to_string(&renewed)?,
                }));
            };

            output::success(
                global,
                &format!("New credential generated for API user {api_user_id}."),
            );
            // The token goes to stdout even with --quiet so scripts can capture it.
            println!("{token}");
            output::warn(global, "Save this token now -- it cannot be retrieved later.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lists_profile_names() {
        let user: ApiUser = serde_json::from_value(serde_json::json!({
            "id": "5f00aa",
            "name": "ingest",
            "profiles": [{ "id": "p-1", "name": "DEVICE MANAGER [R]" }]
        }))
        .unwrap_or_else(|e| panic!("sample API user: {e}"));
        let row = ApiUserRow::from(&user);
        assert_eq!(row.profiles, "DEVICE MANAGER [R]");
        assert_eq!(row.group, "-");
    }
}
