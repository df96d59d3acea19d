pub mod countapi;
pub mod http;

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};
