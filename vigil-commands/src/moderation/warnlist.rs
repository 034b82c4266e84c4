use crate::CommandMeta;
use crate::moderation::access::{deny, staff_access, when_granted};
use crate::moderation::embeds::{
    WARNLIST_PAGE_CHARS, no_warnings_message, resolve_user_label, warnlist_section,
};
use vigil_core::{Context, Error};
use vigil_database::impls::warnings::list_warnings;
use vigil_utils::embed::WARNING_EMBED_COLOR;
use vigil_utils::pagination::{pack_sections, paginate_embed_pages};

pub const META: CommandMeta = CommandMeta {
    name: "warnlist",
    desc: "List every outstanding warning.",
    category: "moderation",
    usage: "/warnlist",
};

/// List every outstanding warning.
#[poise::command(slash_command, category = "Moderation")]
pub async fn warnlist(ctx: Context<'_>) -> Result<(), Error> {
    let access = staff_access(&ctx).await?;
    let Some(warnings) =
        when_granted(access, || async { Ok::<_, Error>(list_warnings(&ctx.data().db).await) })
            .await?
    else {
        return deny(&ctx).await;
    };

    if warnings.is_empty() {
        ctx.send(
            poise::CreateReply::default()
                .content(no_warnings_message())
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    // Resolving user tags can take longer than the interaction deadline.
    ctx.defer_ephemeral().await?;

    let mut sections = Vec::with_capacity(warnings.len());
    for (user_id, records) in &warnings {
        let label = resolve_user_label(ctx.http(), user_id).await;
        sections.push(warnlist_section(&label, records));
    }

    let pages = pack_sections(&sections, WARNLIST_PAGE_CHARS);
    paginate_embed_pages(ctx, "⚠️ Warning list", &pages, WARNING_EMBED_COLOR, true).await?;

    Ok(())
}
