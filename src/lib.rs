pub mod chat;
pub mod contract;
pub mod error;
pub mod health;
pub mod review;
pub mod session;
pub mod stream;
pub mod validation;

pub use error::{Error, Result};
