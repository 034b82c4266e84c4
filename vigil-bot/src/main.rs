mod config;
mod liveness;

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use config::BotConfig;
use vigil_core::{Data, Error, command_error_message};
use vigil_database::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let db = Database::open(&config.warn_file).await?;

    if config.staff.allowed_roles.is_empty() {
        warn!("WARN_ALLOWED_ROLES is empty; every staff command will be denied.");
    } else {
        info!(roles = ?config.staff.allowed_roles, "Staff roles configured.");
    }

    match config.staff.audit_channel_id {
        Some(channel_id) => info!(channel_id, "Audit log enabled."),
        None => info!("Audit log disabled (set WARN_LOG_CHANNEL_ID to enable)."),
    }

    liveness::spawn(config.liveness_port);

    let intents = serenity::GatewayIntents::GUILDS;

    let staff = config.staff.clone();
    let guild_id = config.guild_id;
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vigil_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(user = %ready.user.tag(), "Logged in.");

                let commands = &framework.options().commands;
                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, count = commands.len(), "Commands registered in guild.");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        info!(count = commands.len(), "Commands registered globally.");
                    }
                }

                Ok(Data { db, staff })
            })
        })
        .build();

    info!("Connecting to Discord...");

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().qualified_name, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Error")
                .description(command_error_message(&error))
                .color(vigil_utils::embed::DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let description = match input {
                Some(input) => format!("Invalid argument: `{}`", input),
                None => "Missing required argument.".to_owned(),
            };

            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .content(description)
                        .ephemeral(true),
                )
                .await;
        }
        other => {
            if let Err(err) = poise::builtins::on_error(other).await {
                error!(?err, "failed to handle framework error");
            }
        }
    }
}
