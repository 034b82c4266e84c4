use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::access::{deny, staff_access, when_granted};
use crate::moderation::embeds::{
    display_name, empty_reason_message, warn_audit_line, warn_issued_message,
};
use crate::moderation::logging::log_action;
use vigil_core::{Context, Error, not_saved};
use vigil_database::impls::warnings::{now_timestamp, record_warning};

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Issue a warning to a user.",
    category: "moderation",
    usage: "/warn <member> <reason>",
};

/// Issue a warning to a user.
#[poise::command(slash_command, category = "Moderation")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "Who should be warned?"] member: serenity::User,
    #[description = "Why are they being warned?"] reason: String,
) -> Result<(), Error> {
    let access = staff_access(&ctx).await?;
    let reason = reason.trim();
    let moderator = display_name(ctx.author());

    let Some(recorded) = when_granted(access, || async {
        if reason.is_empty() {
            return Ok(None);
        }

        record_warning(
            &ctx.data().db,
            &member.id.get().to_string(),
            reason,
            &moderator,
            now_timestamp(),
        )
        .await
        .map(Some)
        .map_err(not_saved)
    })
    .await?
    else {
        return deny(&ctx).await;
    };

    let Some(warn_id) = recorded else {
        ctx.send(
            poise::CreateReply::default()
                .content(empty_reason_message())
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    ctx.say(warn_issued_message(member.id.get(), reason, warn_id))
        .await?;

    log_action(
        &ctx,
        warn_audit_line(
            &member.tag(),
            member.id.get(),
            reason,
            &ctx.author().tag(),
            warn_id,
        ),
    );

    Ok(())
}
