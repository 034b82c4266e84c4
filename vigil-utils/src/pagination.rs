use std::time::Duration;

use poise::serenity_prelude as serenity;

use crate::embed::{titled_embed, with_page_footer};

pub const PAGINATION_TIMEOUT_SECS: u64 = 60 * 3;

fn page_embed(title: &str, pages: &[String], index: usize, color: u32) -> serenity::CreateEmbed {
    with_page_footer(
        titled_embed(title, pages[index].clone(), color),
        index + 1,
        pages.len(),
    )
}

fn page_buttons(
    prev_id: &str,
    next_id: &str,
    index: usize,
    total_pages: usize,
) -> Vec<serenity::CreateActionRow> {
    vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(prev_id)
            .label("Prev")
            .disabled(index == 0)
            .style(serenity::ButtonStyle::Secondary),
        serenity::CreateButton::new(next_id)
            .label("Next")
            .disabled(index + 1 >= total_pages)
            .style(serenity::ButtonStyle::Secondary),
    ])]
}

/// Send `pages` as one embed, with Prev/Next buttons when there is more than one page.
///
/// Only the invoking user can flip pages. Buttons are removed once the
/// collector times out.
pub async fn paginate_embed_pages<U, E>(
    ctx: poise::Context<'_, U, E>,
    title: &str,
    pages: &[String],
    color: u32,
    ephemeral: bool,
) -> Result<(), serenity::Error>
where
    U: Send + Sync + 'static,
    E: Send + Sync,
{
    if pages.is_empty() {
        return Ok(());
    }

    let total_pages = pages.len();
    let mut index = 0;

    if total_pages == 1 {
        ctx.send(
            poise::CreateReply::default()
                .ephemeral(ephemeral)
                .embed(page_embed(title, pages, index, color)),
        )
        .await?;
        return Ok(());
    }

    let ctx_id = ctx.id();
    let prev_id = format!("{}_prev", ctx_id);
    let next_id = format!("{}_next", ctx_id);

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .ephemeral(ephemeral)
                .embed(page_embed(title, pages, index, color))
                .components(page_buttons(&prev_id, &next_id, index, total_pages)),
        )
        .await?;

    let author_id = ctx.author().id;
    while let Some(press) = serenity::collector::ComponentInteractionCollector::new(ctx)
        .filter({
            let prev_id = prev_id.clone();
            let next_id = next_id.clone();
            move |interaction| {
                interaction.user.id == author_id
                    && (interaction.data.custom_id == prev_id
                        || interaction.data.custom_id == next_id)
            }
        })
        .timeout(Duration::from_secs(PAGINATION_TIMEOUT_SECS))
        .await
    {
        if press.data.custom_id == next_id {
            index = (index + 1).min(total_pages - 1);
        } else {
            index = index.saturating_sub(1);
        }

        press
            .create_response(
                ctx.http(),
                serenity::CreateInteractionResponse::UpdateMessage(
                    serenity::CreateInteractionResponseMessage::new()
                        .embed(page_embed(title, pages, index, color))
                        .components(page_buttons(&prev_id, &next_id, index, total_pages)),
                ),
            )
            .await?;
    }

    let _ = reply
        .edit(
            ctx,
            poise::CreateReply::default()
                .embed(page_embed(title, pages, index, color))
                .components(Vec::new()),
        )
        .await;

    Ok(())
}

/// Pack `sections` into pages of at most `max_chars` characters each.
///
/// Sections are never split; one that alone exceeds the limit is truncated
/// with an ellipsis.
pub fn pack_sections(sections: &[String], max_chars: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut current = String::new();

    for section in sections {
        let section = truncate_chars(section, max_chars);
        let needed = if current.is_empty() {
            section.chars().count()
        } else {
            current.chars().count() + 2 + section.chars().count()
        };

        if needed > max_chars && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(&section);
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }

    let keep = max_chars.saturating_sub(1);
    let mut out: String = value.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::pack_sections;

    #[test]
    fn packs_sections_until_limit() {
        let sections = vec!["aaaa".to_owned(), "bbbb".to_owned(), "cccc".to_owned()];
        assert_eq!(
            pack_sections(&sections, 10),
            vec!["aaaa\n\nbbbb".to_owned(), "cccc".to_owned()]
        );
    }

    #[test]
    fn oversized_section_is_truncated() {
        let sections = vec!["abcdefghij".to_owned()];
        assert_eq!(pack_sections(&sections, 5), vec!["abcd…".to_owned()]);
    }

    #[test]
    fn no_sections_means_no_pages() {
        assert!(pack_sections(&[], 100).is_empty());
    }
}
