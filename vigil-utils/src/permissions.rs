use std::collections::HashSet;

use poise::serenity_prelude as serenity;

/// True when the actor holds at least one role on the allow-list.
///
/// Role names are compared exactly.
pub fn roles_allowed(actor_roles: &HashSet<String>, allow_list: &[String]) -> bool {
    allow_list.iter().any(|role| actor_roles.contains(role))
}

/// Resolve a guild member's role ids into role names.
pub async fn resolve_member_role_names(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<HashSet<String>> {
    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    Ok(member
        .roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .map(|role| role.name.clone())
        .collect())
}

/// Parse a comma-separated list of role names, dropping blanks.
pub fn parse_role_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_owned)
        .collect()
}
