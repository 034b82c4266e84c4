use crate::CommandMeta;
use crate::utility::embeds::status_message;
use vigil_core::{Context, Error};
use vigil_utils::time::now_label;

pub const META: CommandMeta = CommandMeta {
    name: "test",
    desc: "Check that the bot is running.",
    category: "utility",
    usage: "/test",
};

/// Check that the bot is running.
#[poise::command(slash_command, rename = "test", category = "Utility")]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    let bot_tag = ctx.serenity_context().cache.current_user().tag();

    ctx.send(
        poise::CreateReply::default()
            .content(status_message(&now_label(), &bot_tag))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
