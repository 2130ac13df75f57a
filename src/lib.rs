pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod lr;

pub use config::LrOptions;
pub use core::morphtag::{LrMorph, MorphTag};
pub use core::tag::SimpleTag;
pub use error::{LrError, Result};
pub use lr::{to_lr, LrResult};
