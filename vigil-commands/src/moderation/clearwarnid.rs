use crate::CommandMeta;
use crate::moderation::access::{deny, staff_access, when_granted};
use crate::moderation::embeds::{
    clear_one_audit_line, warning_not_found_message, warning_removed_message,
};
use crate::moderation::logging::log_action;
use vigil_core::{Context, Error, not_saved};
use vigil_database::impls::warnings::remove_warning_by_id;

pub const META: CommandMeta = CommandMeta {
    name: "clearwarnid",
    desc: "Remove a single warning by its ID.",
    category: "moderation",
    usage: "/clearwarnid <warn_id>",
};

/// Remove a single warning by its ID.
#[poise::command(slash_command, category = "Moderation")]
pub async fn clearwarnid(
    ctx: Context<'_>,
    #[description = "Which warning ID should be removed?"]
    #[min = 1]
    warn_id: u64,
) -> Result<(), Error> {
    let access = staff_access(&ctx).await?;
    let Some(removed) = when_granted(access, || async {
        remove_warning_by_id(&ctx.data().db, warn_id)
            .await
            .map_err(not_saved)
    })
    .await?
    else {
        return deny(&ctx).await;
    };

    if !removed {
        ctx.send(
            poise::CreateReply::default()
                .content(warning_not_found_message(warn_id))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    ctx.say(warning_removed_message(warn_id)).await?;
    log_action(&ctx, clear_one_audit_line(warn_id, &ctx.author().tag()));

    Ok(())
}
