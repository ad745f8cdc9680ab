//! Operator command parsing.
//!
//! The menu is a numbered five-option protocol; the spec table below keeps
//! the shell's menu text and the parser in sync.

/// One menu entry: the digit the operator types and what it does.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub choice: &'static str,
    pub description: &'static str,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        choice: "1",
        description: "Add a new object",
    },
    CommandSpec {
        choice: "2",
        description: "List the full inventory",
    },
    CommandSpec {
        choice: "3",
        description: "Analyze an object",
    },
    CommandSpec {
        choice: "4",
        description: "Run emergency cooling",
    },
    CommandSpec {
        choice: "5",
        description: "Exit",
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

/// Parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddObject,
    ListInventory,
    /// Takes a follow-up id line.
    Analyze,
    /// Takes a follow-up id line.
    EmergencyCool,
    Exit,
    /// Anything else: no state change, no output, the shell re-prompts.
    Unknown,
}

impl Command {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Command::AddObject,
            "2" => Command::ListInventory,
            "3" => Command::Analyze,
            "4" => Command::EmergencyCool,
            "5" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}
