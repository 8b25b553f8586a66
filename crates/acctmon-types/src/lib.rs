pub mod auth;
pub mod error;
pub mod service;

pub use auth::*;
pub use error::{Error, Result};
pub use service::*;
