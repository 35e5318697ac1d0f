pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::Gender;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "dorm-alloc")]
#[command(about = "Allocate students to dormitories with capacity and gender-match rules")]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Allocate a student to a dormitory
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        roll: String,

        #[arg(long)]
        course: String,

        #[arg(long)]
        year: String,

        #[arg(long, value_enum)]
        gender: Gender,

        #[arg(long)]
        dorm: String,
    },

    /// Remove an allocated student by roll, year and gender
    Remove {
        #[arg(long)]
        roll: String,

        #[arg(long)]
        year: String,

        #[arg(long, value_enum)]
        gender: Gender,

        #[arg(long)]
        dorm: String,
    },

    /// List allocated students, optionally filtered by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },

    /// Show dormitory occupancy
    Dorms,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
