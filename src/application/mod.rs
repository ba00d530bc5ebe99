pub mod articles;
pub mod dto;
pub mod error;

pub use error::ApplicationResult;
