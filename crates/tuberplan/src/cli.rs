//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tuberplan")]
#[command(about = "Multi-generation tuber crop yield, cost, and nutrition projections")]
pub struct Args {
    /// Path to the data directory (default: ~/.tuberplan/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a scenario and print the 12-generation projection
    Run {
        /// Scenario name (default: the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Also write the full result as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Sweep one parameter (or all of them) and print sensitivity tables
    Analyze {
        /// Parameter key (see `tuberplan parameters`)
        parameter: Option<String>,

        /// Scenario name (default: the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Sweep every numeric parameter
        #[arg(long)]
        all: bool,

        /// Also write the table(s) as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Simulate two saved scenarios and compare their totals
    Compare {
        /// First scenario name
        a: String,
        /// Second scenario name
        b: String,
    },

    /// List the recognized parameter keys
    Parameters,

    /// Manage saved scenarios
    Scenario {
        #[command(subcommand)]
        action: ScenarioAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScenarioAction {
    /// List saved scenarios
    List,

    /// Print a scenario as YAML
    Show {
        /// Scenario name (default: the active scenario)
        name: Option<String>,
    },

    /// Save a copy of the active scenario (or the built-in defaults) under
    /// a new name and make it active
    Save {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a saved scenario
    Delete { name: String },

    /// Mark a scenario as active
    Use { name: String },

    /// Import a scenario from a YAML file written by `scenario export`
    Import { name: String, path: PathBuf },

    /// Export a scenario to a YAML file
    Export { name: String, path: PathBuf },
}
