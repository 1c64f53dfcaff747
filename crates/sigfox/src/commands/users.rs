//! User command handlers.

use tabled::Tabled;

use sigfox_api::models::{User, UserCreate, UserUpdate};
use sigfox_api::{DetailOptions, Sigfox, UserListFilter};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Last Login")]
    last_login: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            first_name: output::text(u.first_name.as_deref()),
            last_name: output::text(u.last_name.as_deref()),
            email: output::text(u.email.as_deref()),
            last_login: output::timestamp(u.last_login_time),
        }
    }
}

fn role_names(u: &User) -> String {
    let names: Vec<String> = u
        .user_roles
        .iter()
        .flatten()
        .filter_map(|r| r.name.clone().or_else(|| r.id.clone()))
        .collect();
    output::join(&names)
}

fn detail(u: &User) -> String {
    [
        format!("ID:         {}", u.id),
        format!("First Name: {}", u.first_name.as_deref().unwrap_or("-")),
        format!("Last Name:  {}", u.last_name.as_deref().unwrap_or("-")),
        format!("Email:      {}", u.email.as_deref().unwrap_or("-")),
        format!("Timezone:   {}", u.timezone.as_deref().unwrap_or("-")),
        format!(
            "Group:      {}",
            output::text(u.group.as_ref().and_then(|g| g.name.as_deref()))
        ),
        format!("Roles:      {}", role_names(u)),
        format!("Created:    {}", output::timestamp(u.creation_time)),
        format!("Last Login: {}", output::timestamp(u.last_login_time)),
    ]
    .join("\n")
}

pub async fn handle(sigfox: &Sigfox, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let users = sigfox.users();
    let format = output::format(global);

    match args.command {
        UsersCommand::List {
            list,
            group_ids,
            deep,
            sort,
            detail: detail_args,
        } => {
            let (limit, offset) = util::page(&list);
            let filter = UserListFilter {
                limit,
                offset,
                group_ids,
                deep,
                fields: detail_args.fields,
                sort,
                authorizations: detail_args.authorizations,
            };
            let items = if list.all {
                users.list_all(&filter, list.max).await?
            } else {
                users.list(&filter).await?
            };
            if output::report_empty(global, &items, "users") {
                return Ok(());
            }
            let out = output::render_list(format, &items, |u| UserRow::from(u), |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Get {
            user_id,
            detail: detail_args,
        } => {
            let user = users
                .get(&user_id, &util::detail_options(detail_args))
                .await?;
            let out = output::render_single(format, &user, detail, |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            group_id,
            first_name,
            last_name,
            email,
            timezone,
            role_ids,
        } => {
            let payload = UserCreate {
                group_id,
                first_name,
                last_name,
                email,
                timezone,
                role_ids,
            };
            let created = users.create(&payload).await?;
            output::success(global, &format!("User {} created.", created.id));
            let user = users.get(&created.id, &DetailOptions::default()).await?;
            let out = output::render_single(format, &user, detail, |u| u.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Update {
            user_id,
            first_name,
            last_name,
            email,
            timezone,
            role_ids,
        } => {
            let payload = UserUpdate {
                first_name,
                last_name,
                email,
                timezone,
                role_ids,
            };
            util::ensure_changes(payload.is_empty())?;
            users.update(&user_id, &payload).await?;
            output::success(global, &format!("User {user_id} updated."));
            Ok(())
        }

        UsersCommand::Delete { user_id } => {
            if !util::confirm_or_abort(&format!("Delete user {user_id}?"), global)? {
                return Ok(());
            }
            users.delete(&user_id).await?;
            output::success(global, &format!("User {user_id} deleted."));
            Ok(())
        }

        UsersCommand::AddRoles { user_id, role_ids } => {
            users.add_roles(&user_id, &role_ids).await?;
            output::success(
                global,
                &format!("Roles of user {user_id} set to {}.", role_ids.join(", ")),
            );
            Ok(())
        }

        UsersCommand::RemoveRole { user_id, role_id } => {
            let prompt = format!("Remove role {role_id} from user {user_id}?");
            if !util::confirm_or_abort(&prompt, global)? {
                return Ok(());
            }
            users.remove_role(&user_id, &role_id).await?;
            output::success(global, &format!("Role {role_id} removed from user {user_id}."));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_fall_back_to_ids() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "userRoles": [{ "id": "r-1", "name": "Admin" }, { "id": "r-2" }]
        }))
        .unwrap_or_else(|e| panic!("sample user: {e}"));
        assert_eq!(role_names(&user), "Admin, r-2");
    }
}
