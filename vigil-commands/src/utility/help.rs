use crate::moderation::access::{Access, deny, staff_access};
use crate::utility::embeds::grouped_help_description;
use crate::{COMMANDS, CommandMeta};
use vigil_core::{Context, Error};
use vigil_utils::embed::{DEFAULT_EMBED_COLOR, titled_embed};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List all available commands.",
    category: "utility",
    usage: "/help",
};

/// List all available commands.
#[poise::command(slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    if staff_access(&ctx).await? == Access::Denied {
        return deny(&ctx).await;
    }

    let embed = titled_embed(
        "📜 Available commands",
        grouped_help_description(&sorted_commands()),
        DEFAULT_EMBED_COLOR,
    );
    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();
    commands.sort_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });
    commands
}
