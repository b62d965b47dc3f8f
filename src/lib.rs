pub mod config;
pub mod error;
pub mod generator;
pub mod inference;
pub mod lineart;
pub mod logging;
pub mod server;

pub use error::{Error, Result};
