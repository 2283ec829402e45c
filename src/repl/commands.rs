//! REPL command table and command errors

use thiserror::Error;

use crate::api::ApiError;

/// Commands understood by the REPL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the next page of location areas
    Map,
    /// Show the previous page of location areas
    MapBack,
    /// List the Pokemon found in a location area
    Explore,
    /// Try to catch a Pokemon
    Catch,
    /// Show details of a caught Pokemon
    Inspect,
    /// List caught Pokemon
    Pokedex,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 8] = [
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Help,
        Command::Exit,
    ];

    /// Looks up a command by the word typed at the prompt
    pub fn from_name(s: &str) -> Option<Command> {
        match s.trim().to_lowercase().as_str() {
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            "help" => Some(Command::Help),
            "exit" | "quit" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Map => "display the next page of locations",
            Command::MapBack => "display the previous page of locations",
            Command::Explore => "explore a location area for Pokemon",
            Command::Catch => "try to catch a Pokemon",
            Command::Inspect => "display information about a caught Pokemon",
            Command::Pokedex => "list the Pokemon you have caught",
            Command::Help => "list commands and their descriptions",
            Command::Exit => "exit the Pokedex",
        }
    }
}

/// Errors a command can report back to the prompt
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("you are already on the last page")]
    LastPage,

    #[error("you are already on the first page")]
    FirstPage,

    #[error("you have to provide the name of an area to explore")]
    MissingArea,

    #[error("you have to provide the name of a Pokemon")]
    MissingPokemon,

    #[error("you have not caught {0}")]
    NotCaught(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_command() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Command::from_name("MAP"), Some(Command::Map));
        assert_eq!(Command::from_name(" Catch "), Some(Command::Catch));
        assert_eq!(Command::from_name("quit"), Some(Command::Exit));
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(Command::from_name("fly").is_none());
        assert!(Command::from_name("").is_none());
    }

    #[test]
    fn test_every_command_has_description() {
        for command in Command::ALL {
            assert!(!command.description().is_empty());
        }
    }

    #[test]
    fn test_not_caught_names_pokemon() {
        let err = CommandError::NotCaught("mew".to_string());
        assert_eq!(err.to_string(), "you have not caught mew");
    }
}
