//! Ex-command grammar (the text typed after `:`).
//!
//! | Input | Command |
//! |---|---|
//! | `w` / `w <path>` | save (to the current file or to `path`) |
//! | `q` / `q!` | quit / force quit |
//! | `wq`, `x` (optionally with a path) | save then quit |
//! | `e <path>` | discard the buffer and load `path` |
//! | `d <N>` | delete 1-based line `N` |
//! | `s/old/new/` / `s/old/new/g` | literal replace on the current line |
//!
//! # Example
//!
//! ```
//! use textquill::editor::command::ExCommand;
//!
//! let cmd = ExCommand::parse("s/foo/bar/g").unwrap();
//! assert_eq!(
//!     cmd,
//!     ExCommand::Substitute { old: "foo".into(), new: "bar".into(), global: true }
//! );
//! ```

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// `:w [path]`
    Write(Option<String>),
    /// `:wq [path]` or `:x [path]`
    WriteQuit(Option<String>),
    /// `:q`
    Quit,
    /// `:q!`
    ForceQuit,
    /// `:e path`
    Edit(String),
    /// `:d N`, 1-based
    DeleteLine(usize),
    /// `:s/old/new/[g]`
    Substitute {
        old: String,
        new: String,
        global: bool,
    },
}

/// Why an ex-command could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Not a command we know.
    Unknown(String),
    /// The command needs an argument that was not given.
    MissingArgument { command: String, expected: String },
    /// `:d` with something that is not a line number.
    InvalidLineNumber(String),
    /// Malformed `:s` command.
    InvalidSubstitute(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command: {}", cmd),
            CommandError::MissingArgument { command, expected } => {
                write!(f, "{} needs {}", command, expected)
            }
            CommandError::InvalidLineNumber(arg) => write!(f, "Invalid line number: {}", arg),
            CommandError::InvalidSubstitute(msg) => write!(f, "Invalid substitute: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

/// Splits `cmd` into a verb and an optional trimmed, non-empty argument.
fn split_verb(cmd: &str) -> (&str, Option<&str>) {
    match cmd.split_once(char::is_whitespace) {
        Some((verb, rest)) => {
            let rest = rest.trim();
            (verb, (!rest.is_empty()).then_some(rest))
        }
        None => (cmd, None),
    }
}

fn parse_substitute(body: &str) -> Result<ExCommand, CommandError> {
    let mut parts = body.splitn(3, '/');
    let old = parts.next().unwrap_or_default();
    let Some(new) = parts.next() else {
        return Err(CommandError::InvalidSubstitute(
            "expected s/old/new/".to_string(),
        ));
    };
    let global = match parts.next().unwrap_or_default() {
        "" => false,
        "g" => true,
        flags => {
            return Err(CommandError::InvalidSubstitute(format!(
                "unknown flags '{}'",
                flags
            )))
        }
    };
    if old.is_empty() {
        return Err(CommandError::InvalidSubstitute(
            "empty search pattern".to_string(),
        ));
    }

    Ok(ExCommand::Substitute {
        old: old.to_string(),
        new: new.to_string(),
        global,
    })
}

impl ExCommand {
    /// Parses the text typed after `:`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown verbs, missing arguments, bad
    /// line numbers and malformed substitutions.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();

        if let Some(body) = input.strip_prefix("s/") {
            return parse_substitute(body);
        }

        let (verb, arg) = split_verb(input);
        let owned = arg.map(str::to_string);
        match verb {
            "w" => Ok(ExCommand::Write(owned)),
            "wq" | "x" => Ok(ExCommand::WriteQuit(owned)),
            "q" if arg.is_none() => Ok(ExCommand::Quit),
            "q!" if arg.is_none() => Ok(ExCommand::ForceQuit),
            "e" => owned
                .map(ExCommand::Edit)
                .ok_or_else(|| CommandError::MissingArgument {
                    command: ":e".to_string(),
                    expected: "a file name".to_string(),
                }),
            "d" => {
                let arg = arg.ok_or_else(|| CommandError::MissingArgument {
                    command: ":d".to_string(),
                    expected: "a line number".to_string(),
                })?;
                arg.parse::<usize>()
                    .map(ExCommand::DeleteLine)
                    .map_err(|_| CommandError::InvalidLineNumber(arg.to_string()))
            }
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}
