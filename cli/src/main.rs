mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, session};
use stowr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Info => {
            print::header("default ship profile", cfg.quiet);
            info::info(&cfg);
            Ok(())
        }
        Commands::Session(ship) => {
            print::header("stowage session", cfg.quiet);
            session::session(&ship, &cfg)
        }
    }
}
