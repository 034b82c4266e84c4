pub mod database;
pub mod impls;
pub mod model;
mod snapshot;

pub use database::Database;
