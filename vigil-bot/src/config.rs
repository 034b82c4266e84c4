use std::env;
use std::path::PathBuf;

use anyhow::{Context as _, bail};

use vigil_core::StaffConfig;
use vigil_utils::permissions::parse_role_list;

pub const DEFAULT_WARN_FILE: &str = "warnings.json";
pub const DEFAULT_ALLOWED_ROLE: &str = "WarnStaff";
pub const DEFAULT_LIVENESS_PORT: u16 = 8080;

/// Startup settings read from the environment.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    pub guild_id: Option<u64>,
    pub warn_file: PathBuf,
    pub staff: StaffConfig,
    pub liveness_port: u16,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; a missing token is fatal.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let Some(token) = var("DISCORD_BOT_TOKEN") else {
            bail!("DISCORD_BOT_TOKEN is missing; refusing to start");
        };

        let guild_id = var("DISCORD_GUILD_ID")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?
            .filter(|id| *id != 0);

        let audit_channel_id = var("WARN_LOG_CHANNEL_ID")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("WARN_LOG_CHANNEL_ID must be a numeric channel id")?
            .filter(|id| *id != 0);

        let allowed_roles = match var("WARN_ALLOWED_ROLES") {
            Some(raw) => parse_role_list(&raw),
            None => vec![DEFAULT_ALLOWED_ROLE.to_owned()],
        };

        let liveness_port = var("PORT")
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_LIVENESS_PORT);

        Ok(Self {
            token,
            guild_id,
            warn_file: var("WARN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WARN_FILE)),
            staff: StaffConfig {
                allowed_roles,
                audit_channel_id,
            },
            liveness_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::{BotConfig, DEFAULT_LIVENESS_PORT};

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<BotConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_token_is_fatal() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DISCORD_BOT_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config_from(&[("DISCORD_BOT_TOKEN", "abc")]).unwrap();

        assert_eq!(config.token, "abc");
        assert_eq!(config.guild_id, None);
        assert_eq!(config.warn_file, Path::new("warnings.json"));
        assert_eq!(config.staff.allowed_roles, vec!["WarnStaff".to_owned()]);
        assert_eq!(config.staff.audit_channel_id, None);
        assert_eq!(config.liveness_port, DEFAULT_LIVENESS_PORT);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("DISCORD_GUILD_ID", "123"),
            ("WARN_FILE", "/data/warns.json"),
            ("WARN_ALLOWED_ROLES", "Mods, Admins"),
            ("WARN_LOG_CHANNEL_ID", "1302415427070201985"),
            ("PORT", "10000"),
        ])
        .unwrap();

        assert_eq!(config.guild_id, Some(123));
        assert_eq!(config.warn_file, Path::new("/data/warns.json"));
        assert_eq!(
            config.staff.allowed_roles,
            vec!["Mods".to_owned(), "Admins".to_owned()]
        );
        assert_eq!(config.staff.audit_channel_id, Some(1_302_415_427_070_201_985));
        assert_eq!(config.liveness_port, 10_000);
    }

    #[test]
    fn zero_channel_disables_audit_log() {
        let config =
            config_from(&[("DISCORD_BOT_TOKEN", "abc"), ("WARN_LOG_CHANNEL_ID", "0")]).unwrap();
        assert_eq!(config.staff.audit_channel_id, None);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = config_from(&[("DISCORD_BOT_TOKEN", "abc"), ("PORT", "http")]).unwrap();
        assert_eq!(config.liveness_port, DEFAULT_LIVENESS_PORT);
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(config_from(&[("DISCORD_BOT_TOKEN", "abc"), ("DISCORD_GUILD_ID", "guild")]).is_err());
    }
}
