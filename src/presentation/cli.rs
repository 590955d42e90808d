//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --factors) are inherited by all subcommands
//! - Without a subcommand the binary opens the interactive menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Vehicle;

use super::sliders::{parse_distance, parse_electricity, parse_waste};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Footprint - personal carbon footprint calculator and sustainability chat
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'footprint' without arguments for the interactive menu.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (skips discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emission factor file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub factors: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the welcome page
    Home,

    /// Show the sustainability tips page
    Blog,

    /// Calculate an annual carbon footprint
    Calc {
        /// Country or region (from the factor table)
        #[arg(short, long)]
        region: Option<String>,

        /// Commute vehicle
        #[arg(long, value_enum, default_value_t = Vehicle::Bike)]
        vehicle: Vehicle,

        /// Daily commute distance in km (0-100)
        #[arg(long, default_value_t = 10.0, value_parser = parse_distance)]
        distance: f64,

        /// Monthly electricity consumption in kWh (0-1000)
        #[arg(long, default_value_t = 200.0, value_parser = parse_electricity)]
        electricity: f64,

        /// Meals per day
        #[arg(long, default_value_t = 3)]
        meals: u32,

        /// Waste generated per week in kg (0-100)
        #[arg(long, default_value_t = 5.0, value_parser = parse_waste)]
        waste: f64,
    },

    /// Ask the sustainability chatbot one question
    Chat {
        /// Message to send (an empty message is rejected without a request)
        message: Option<String>,
    },

    /// Print the emission factor table
    Factors,
}
