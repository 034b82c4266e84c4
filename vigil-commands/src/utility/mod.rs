pub(crate) mod embeds;
pub mod help;
pub mod status;
