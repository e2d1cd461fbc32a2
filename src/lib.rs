pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliArgs, OutputFormat};

pub use crate::config::FlyoverConfig;
pub use crate::core::flyover::{
    next_passes_for_my_location, ChainState, FlyoverEngine, HttpFlyoverEngine,
};
pub use crate::domain::model::{Coordinates, IpAddress, PassList, PassWindow};
pub use crate::utils::error::{FlyoverError, Result};
