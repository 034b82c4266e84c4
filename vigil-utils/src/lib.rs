/// Generic embed builders shared across commands.
pub mod embed;
/// Button-driven paging for long embeds.
pub mod pagination;
/// Role-based access checks.
pub mod permissions;
/// Shared time helpers.
pub mod time;
