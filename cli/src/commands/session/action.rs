//! # Session Actions
//!
//! One line of input is one [`Action`]. Words are separated by whitespace;
//! the product type of a refrigerated container takes the rest of the line.
//!
//! The numbered entries of the classic menu are accepted as aliases:
//! `1` create, `2` cargo, `5` unload, `7` replace, `8` transfer, `9` show,
//! `10` status, `11` exit.

use std::str::{FromStr, SplitWhitespace};

use stowr_common::cargo::{Container, ContainerClass, ContainerKind};
use stowr_common::error::StowageError;
use stowr_common::fleet::ShipSpec;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{field} expects a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("unexpected input after the command: '{0}'")]
    Trailing(String),
    #[error(transparent)]
    Stowage(#[from] StowageError),
}

/// A container described on the command line, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDraft {
    pub number: String,
    pub load_capacity: f64,
    pub empty_weight: f64,
    pub kind: ContainerKind,
}

impl ContainerDraft {
    pub fn build(self) -> Result<Container, StowageError> {
        Container::new(self.number, self.load_capacity, self.empty_weight, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create(ContainerDraft),
    Cargo { number: String, weight: f64 },
    Empty { number: String },
    Unload { number: String },
    Replace { old: String, draft: ContainerDraft },
    Ship { name: String, spec: ShipSpec },
    Use { name: String },
    Transfer { number: String, target: String },
    Show { number: String },
    Status,
    Fleet,
    Help,
    Exit,
}

pub const HELP: &[(&str, &str)] = &[
    ("create", "<type> <number> <capacity> <empty-weight> <pressure | temperature product>"),
    ("cargo", "<number> <weight>"),
    ("empty", "<number>"),
    ("unload", "<number>"),
    ("replace", "<old-number> <type> <number> <capacity> <empty-weight> <...>"),
    ("ship", "<name> <max-speed> <max-containers> <max-weight>"),
    ("use", "<ship>"),
    ("transfer", "<number> <ship>"),
    ("show", "<number>"),
    ("status", "limits and load of the active ship"),
    ("fleet", "every ship of the fleet"),
    ("exit", "end the session"),
];

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = Words(s.split_whitespace());
        let command = words.text("command")?.to_ascii_lowercase();

        let action = match command.as_str() {
            "create" | "1" => Action::Create(parse_draft(&mut words)?),
            "cargo" | "2" => Action::Cargo {
                number: words.owned("container number")?,
                weight: words.number("cargo weight")?,
            },
            "empty" => Action::Empty {
                number: words.owned("container number")?,
            },
            "unload" | "5" => Action::Unload {
                number: words.owned("container number")?,
            },
            "replace" | "7" => Action::Replace {
                old: words.owned("container number to replace")?,
                draft: parse_draft(&mut words)?,
            },
            "ship" => Action::Ship {
                name: words.owned("ship name")?,
                spec: ShipSpec::new(
                    words.number("max speed")?,
                    words.number("max containers")?,
                    words.number("max weight")?,
                ),
            },
            "use" => Action::Use {
                name: words.owned("ship name")?,
            },
            "transfer" | "8" => Action::Transfer {
                number: words.owned("container number")?,
                target: words.owned("target ship")?,
            },
            "show" | "9" => Action::Show {
                number: words.owned("container number")?,
            },
            "status" | "10" => Action::Status,
            "fleet" => Action::Fleet,
            "help" | "?" => Action::Help,
            "exit" | "quit" | "11" => Action::Exit,
            _ => return Err(ParseError::UnknownCommand(command)),
        };

        words.finish()?;
        Ok(action)
    }
}

fn parse_draft(words: &mut Words<'_>) -> Result<ContainerDraft, ParseError> {
    let class: ContainerClass = words.text("container type")?.parse()?;
    let number = words.owned("container number")?;
    let load_capacity = words.number("load capacity")?;
    let empty_weight = words.number("empty weight")?;

    let kind = match class {
        ContainerClass::Liquid => ContainerKind::Liquid {
            pressure: words.number("pressure")?,
        },
        ContainerClass::Gas => ContainerKind::Gas {
            pressure: words.number("pressure")?,
        },
        ContainerClass::Refrigerated => ContainerKind::Refrigerated {
            temperature: words.number("temperature")?,
            product_type: words.rest("product type")?,
        },
    };

    Ok(ContainerDraft {
        number,
        load_capacity,
        empty_weight,
        kind,
    })
}

struct Words<'a>(SplitWhitespace<'a>);

impl<'a> Words<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.0.next().ok_or(ParseError::Missing(field))
    }

    fn owned(&mut self, field: &'static str) -> Result<String, ParseError> {
        self.text(field).map(str::to_string)
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let value = self.text(field)?;
        value.parse().map_err(|_| ParseError::NotANumber {
            field,
            value: value.to_string(),
        })
    }

    /// Joins every remaining word; at least one is required.
    fn rest(&mut self, field: &'static str) -> Result<String, ParseError> {
        let rest: Vec<&str> = self.0.by_ref().collect();
        if rest.is_empty() {
            return Err(ParseError::Missing(field));
        }
        Ok(rest.join(" "))
    }

    fn finish(mut self) -> Result<(), ParseError> {
        let rest: Vec<&str> = self.0.by_ref().collect();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ParseError::Trailing(rest.join(" ")))
        }
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
