pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::FileStateStore, toml_config::DormsConfig, CliConfig};
pub use crate::core::{controller::AllocationDesk, roster::TextRoster, store::AllocationStore};
pub use crate::domain::model::{default_dorms, Candidate, Dormitory, Gender, IdentityKey, Student};
pub use crate::utils::error::{AllocError, Result};
