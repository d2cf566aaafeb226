//! STL to WebGL JSON mesh converter.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub use self::{
    cli_opt::CliOpt,
    error::{Error, Result},
};

mod cli_opt;
pub mod convert;
pub mod data;
mod error;
pub mod indexer;
pub mod stl;
pub mod util;
