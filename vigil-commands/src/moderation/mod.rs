pub mod clearwarn;
pub mod clearwarnid;
pub mod warn;
pub mod warnlist;

pub(crate) mod access;
pub(crate) mod embeds;
mod logging;
