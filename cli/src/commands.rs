pub mod info;
pub mod session;

use clap::{ArgAction, Args, Parser, Subcommand};
use stowr_common::fleet::ShipSpec;

#[derive(Parser)]
#[command(name = "stowr")]
#[command(about = "Container stowage for a small fleet of ships.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (repeat for less)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the default ship profile and the container types
    #[command(alias = "i")]
    Info,
    /// Run an interactive stowage session on stdin
    #[command(alias = "s")]
    Session(ShipArgs),
}

/// Limits of the first ship of a session.
#[derive(Args, Debug)]
pub struct ShipArgs {
    /// Name of the ship
    #[arg(long, default_value = "flagship")]
    pub name: String,
    /// Maximum speed in knots
    #[arg(long, default_value_t = ShipSpec::default().max_speed)]
    pub max_speed: f64,
    /// Maximum number of containers aboard
    #[arg(long, default_value_t = ShipSpec::default().max_containers)]
    pub max_containers: usize,
    /// Maximum total weight aboard, in kg
    #[arg(long, default_value_t = ShipSpec::default().max_weight)]
    pub max_weight: f64,
}

impl ShipArgs {
    pub fn spec(&self) -> ShipSpec {
        ShipSpec::new(self.max_speed, self.max_containers, self.max_weight)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
