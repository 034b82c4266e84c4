pub mod moderation;
pub mod utility;

use vigil_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    moderation::warn::META,
    moderation::warnlist::META,
    moderation::clearwarnid::META,
    moderation::clearwarn::META,
    utility::help::META,
    utility::status::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        moderation::warn::warn(),
        moderation::warnlist::warnlist(),
        moderation::clearwarnid::clearwarnid(),
        moderation::clearwarn::clearwarn(),
        utility::help::help(),
        utility::status::status(),
    ]
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, commands};

    #[test]
    fn metadata_matches_registered_commands() {
        let registered = commands()
            .iter()
            .map(|command| (command.name.clone(), command.description.clone()))
            .collect::<Vec<_>>();
        let described = COMMANDS
            .iter()
            .map(|meta| (meta.name.to_owned(), Some(meta.desc.to_owned())))
            .collect::<Vec<_>>();

        assert_eq!(registered, described);
    }

    #[test]
    fn usage_starts_with_the_command_name() {
        for meta in COMMANDS {
            let invocation = format!("/{}", meta.name);
            assert!(
                meta.usage == invocation || meta.usage.starts_with(&format!("{} ", invocation)),
                "usage `{}` does not invoke `{}`",
                meta.usage,
                invocation
            );
        }
    }
}
