use std::fmt;

use vigil_database::Database;

pub type Error = anyhow::Error;

/// Who may run staff commands and where their actions are reported.
#[derive(Clone, Debug)]
pub struct StaffConfig {
    /// Role names allowed to use privileged commands.
    pub allowed_roles: Vec<String>,
    /// Channel receiving audit lines; `None` disables the audit log.
    pub audit_channel_id: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub staff: StaffConfig,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;

/// A store operation failed, so the change it carried was not persisted.
///
/// Commands wrap errors from store mutations in this type; anything else that
/// fails (role lookups, replies sent after a successful write) stays a plain
/// error so the user is never told a saved change was lost.
#[derive(Debug)]
pub struct NotSaved(pub anyhow::Error);

impl fmt::Display for NotSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "change not saved: {:#}", self.0)
    }
}

impl std::error::Error for NotSaved {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + 'static) = self.0.as_ref();
        Some(source)
    }
}

/// Mark a store error as a change that did not persist.
pub fn not_saved(error: anyhow::Error) -> Error {
    anyhow::Error::new(NotSaved(error))
}

/// User-facing text for a failed command.
pub fn command_error_message(error: &Error) -> &'static str {
    if error.downcast_ref::<NotSaved>().is_some() {
        "Something went wrong; the change was not saved."
    } else {
        "Something went wrong while running this command."
    }
}

#[cfg(test)]
mod tests {
    use super::{NotSaved, command_error_message, not_saved};

    #[test]
    fn store_failures_say_nothing_was_saved() {
        let error = not_saved(anyhow::anyhow!("disk full"));
        assert_eq!(
            command_error_message(&error),
            "Something went wrong; the change was not saved."
        );
    }

    #[test]
    fn other_failures_stay_neutral() {
        let error = anyhow::anyhow!("interaction expired");
        assert_eq!(
            command_error_message(&error),
            "Something went wrong while running this command."
        );
    }

    #[test]
    fn context_on_top_keeps_the_store_failure_visible() {
        let error = anyhow::Error::new(NotSaved(anyhow::anyhow!("disk full")))
            .context("while warning user 42");
        assert!(command_error_message(&error).contains("not saved"));
    }
}
