use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::access::{deny, staff_access, when_granted};
use crate::moderation::embeds::{
    clear_all_audit_line, user_has_no_warnings_message, warnings_cleared_message,
};
use crate::moderation::logging::log_action;
use vigil_core::{Context, Error, not_saved};
use vigil_database::impls::warnings::clear_warnings;

pub const META: CommandMeta = CommandMeta {
    name: "clearwarn",
    desc: "Remove every warning a user has.",
    category: "moderation",
    usage: "/clearwarn <member>",
};

/// Remove every warning a user has.
#[poise::command(slash_command, category = "Moderation")]
pub async fn clearwarn(
    ctx: Context<'_>,
    #[description = "Whose warnings should be removed?"] member: serenity::User,
) -> Result<(), Error> {
    let access = staff_access(&ctx).await?;
    let user_id = member.id.get().to_string();
    let Some(removed) = when_granted(access, || async {
        clear_warnings(&ctx.data().db, &user_id)
            .await
            .map_err(not_saved)
    })
    .await?
    else {
        return deny(&ctx).await;
    };

    if removed == 0 {
        ctx.send(
            poise::CreateReply::default()
                .content(user_has_no_warnings_message(member.id.get()))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    ctx.say(warnings_cleared_message(member.id.get(), removed))
        .await?;
    log_action(
        &ctx,
        clear_all_audit_line(&member.tag(), member.id.get(), &ctx.author().tag(), removed),
    );

    Ok(())
}
