use std::collections::HashSet;
use std::future::Future;

use vigil_core::{Context, Error};
use vigil_utils::permissions::{resolve_member_role_names, roles_allowed};

use crate::moderation::embeds::permission_denied_message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Granted,
    Denied,
}

impl Access {
    /// `None` means the invoker has no roles to check (outside a guild).
    pub(crate) fn for_roles(actor_roles: Option<&HashSet<String>>, allow_list: &[String]) -> Self {
        match actor_roles {
            Some(roles) if roles_allowed(roles, allow_list) => Self::Granted,
            _ => Self::Denied,
        }
    }
}

/// Decide whether the invoker may use staff commands.
pub(crate) async fn staff_access(ctx: &Context<'_>) -> Result<Access, Error> {
    let allow_list = &ctx.data().staff.allowed_roles;
    let roles = match ctx.guild_id() {
        Some(guild_id) if !allow_list.is_empty() => {
            Some(resolve_member_role_names(ctx.http(), guild_id, ctx.author().id).await?)
        }
        _ => None,
    };

    Ok(Access::for_roles(roles.as_ref(), allow_list))
}

/// Run `action` only when access was granted; `None` means it never ran.
pub(crate) async fn when_granted<T, F, Fut>(access: Access, action: F) -> Result<Option<T>, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    match access {
        Access::Granted => action().await.map(Some),
        Access::Denied => Ok(None),
    }
}

/// The fixed private reply every staff command gives on denial.
pub(crate) async fn deny(ctx: &Context<'_>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content(permission_denied_message())
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
