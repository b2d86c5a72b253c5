mod action;

use std::io::{self, BufRead};

use anyhow::Context;
use stowr_common::config::Config;
use stowr_core::Fleet;
use tracing::error;

use crate::commands::ShipArgs;
use crate::terminal::{format, print};
use action::{Action, HELP};

/// Whether the session keeps reading after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn session(args: &ShipArgs, cfg: &Config) -> anyhow::Result<()> {
    let mut fleet = Fleet::new(args.name.as_str(), args.spec())
        .context("invalid limits for the first ship")?;

    print::print_status(format!(
        "{} is the active ship, type 'help' for the list of commands",
        args.name
    ));

    let stdin = io::stdin();
    run(stdin.lock(), &mut fleet, cfg)
}

/// Reads actions line by line until `exit` or the end of input.
///
/// A malformed line or a refused operation is reported and the session goes
/// on; only a failing reader ends it with an error.
pub fn run<R: BufRead>(reader: R, fleet: &mut Fleet, cfg: &Config) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read the next command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let action: Action = match line.parse() {
            Ok(action) => action,
            Err(e) => {
                error!("{e}");
                continue;
            }
        };

        match execute(fleet, action, cfg) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => error!("{e:#}"),
        }
    }

    let summary = format!(
        "Session closed with {} container(s) aboard {}",
        fleet.active().len(),
        fleet.active_name()
    );
    print::fat_separator();
    print::centerln(&summary);
    Ok(())
}

fn execute(fleet: &mut Fleet, action: Action, cfg: &Config) -> anyhow::Result<Flow> {
    match action {
        Action::Create(draft) => fleet.stow(draft.build()?)?,
        Action::Cargo { number, weight } => {
            if let Some(info) = fleet.load_cargo(&number, weight)? {
                print::tree_head(0, &info.number);
                print::as_tree_one_level(format::container_to_details(&info));
            }
        }
        Action::Empty { number } => {
            if let Some(info) = fleet.empty_container(&number) {
                print::tree_head(0, &info.number);
                print::as_tree_one_level(format::container_to_details(&info));
            }
        }
        Action::Unload { number } => {
            let _ = fleet.unload(&number);
        }
        Action::Replace { old, draft } => {
            let _ = fleet.replace(&old, draft.build()?)?;
        }
        Action::Ship { name, spec } => fleet.commission(name, spec)?,
        Action::Use { name } => {
            fleet.select(&name)?;
            print::print_status(format!("{name} is now the active ship"));
        }
        Action::Transfer { number, target } => {
            let _ = fleet.transfer(&number, &target)?;
        }
        Action::Show { number } => {
            if let Some(info) = fleet.container_info(&number) {
                print::tree_head(0, &info.number);
                print::as_tree_one_level(format::container_to_details(&info));
            }
        }
        Action::Status => status(fleet, cfg),
        Action::Fleet => fleet_overview(fleet, cfg),
        Action::Help => {
            for (command, usage) in HELP {
                print::aligned_line(command, *usage);
            }
        }
        Action::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn status(fleet: &Fleet, cfg: &Config) {
    print::header(fleet.active_name(), cfg.quiet);
    print::as_tree_one_level(format::ship_to_details(&fleet.ship_info()));

    let ship = fleet.active();
    if ship.is_empty() {
        print::no_results("no containers aboard");
        return;
    }
    for (idx, container) in ship.containers().iter().enumerate() {
        print::tree_head(idx, container.number());
        let mut details = format::container_to_details(&container.info());
        details.extend(format::kind_to_details(container.kind()));
        print::as_tree_one_level(details);
    }
}

fn fleet_overview(fleet: &Fleet, cfg: &Config) {
    print::header("fleet", cfg.quiet);
    for (idx, (name, ship)) in fleet.ships().into_iter().enumerate() {
        let label = if name == fleet.active_name() {
            format!("{name} (active)")
        } else {
            name.to_string()
        };
        print::tree_head(idx, &label);
        print::as_tree_one_level(format::ship_to_details(&ship.info()));
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
