use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x34_98_DB;

/// Accent for warning listings.
pub const WARNING_EMBED_COLOR: u32 = 0xE6_7E_22;

/// Build an embed with a title, body and color.
pub fn titled_embed(
    title: &str,
    description: impl Into<String>,
    color: u32,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(color)
        .description(description)
}

/// Append `Page n/total` to an embed when there is more than one page.
pub fn with_page_footer(
    embed: serenity::CreateEmbed,
    page: usize,
    total_pages: usize,
) -> serenity::CreateEmbed {
    if total_pages <= 1 {
        return embed;
    }

    embed.footer(serenity::CreateEmbedFooter::new(format!(
        "Page {}/{}",
        page.max(1),
        total_pages
    )))
}
