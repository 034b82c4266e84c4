use tracing::warn;

use poise::serenity_prelude as serenity;

use vigil_core::Context;

/// Post `message` to the audit channel without waiting on the result.
///
/// Delivery failures (missing channel, no access) are logged and dropped.
pub(crate) fn log_action(ctx: &Context<'_>, message: String) {
    let Some(channel_id) = ctx.data().staff.audit_channel_id else {
        return;
    };

    let http = ctx.serenity_context().http.clone();
    tokio::spawn(async move {
        if let Err(source) = serenity::ChannelId::new(channel_id)
            .say(&*http, message)
            .await
        {
            warn!(?source, channel_id, "failed to deliver audit log line");
        }
    });
}
