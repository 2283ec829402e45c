//! Interactive prompt for browsing locations and catching Pokemon
//!
//! The REPL reads one line at a time, looks the first word up in the command
//! table and runs it against the API client, the Pokedex and the current
//! location page.

mod commands;

pub use commands::{Command, CommandError};

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::api::{LocationPage, PokeApiClient};
use crate::catch::attempt_catch;
use crate::pokedex::{Pokedex, Pokemon};

/// Prompt printed before every line of input
pub const PROMPT: &str = "pokedex > ";

/// Which location pages `map` and `mapb` move to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    pub next_url: Option<String>,
    pub previous_url: Option<String>,
}

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// REPL state: API access, caught Pokemon and the navigation position
pub struct Repl<R = StdRng> {
    client: PokeApiClient,
    pokedex: Pokedex,
    context: NavigationContext,
    rng: R,
}

impl Repl<StdRng> {
    /// Creates a REPL starting at the first page of locations
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }
}

impl<R: Rng> Repl<R> {
    /// Creates a REPL with a specific random source for catch rolls
    pub fn with_rng(client: PokeApiClient, rng: R) -> Self {
        let context = NavigationContext {
            next_url: Some(client.locations_url()),
            previous_url: None,
        };
        Self {
            client,
            pokedex: Pokedex::new(),
            context,
            rng,
        }
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Parses and runs one line of input
    ///
    /// Blank lines are ignored and unknown commands print a hint; neither is
    /// an error.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, CommandError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();

        match Command::from_name(first) {
            Some(command) => {
                debug!(command = command.name(), ?args, "running command");
                self.dispatch(command, &args, out).await
            }
            None => {
                writeln!(out, "Unknown command. Type help to get a list of commands")?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn dispatch<W: Write>(
        &mut self,
        command: Command,
        args: &[&str],
        out: &mut W,
    ) -> Result<Flow, CommandError> {
        match command {
            Command::Map => {
                let url = self.context.next_url.clone().ok_or(CommandError::LastPage)?;
                self.show_locations(&url, out).await?;
            }
            Command::MapBack => {
                let url = self
                    .context
                    .previous_url
                    .clone()
                    .ok_or(CommandError::FirstPage)?;
                self.show_locations(&url, out).await?;
            }
            Command::Explore => {
                let [area] = args else {
                    return Err(CommandError::MissingArea);
                };
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let [name] = args else {
                    return Err(CommandError::MissingPokemon);
                };
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let [name] = args else {
                    return Err(CommandError::MissingPokemon);
                };
                let pokemon = self
                    .pokedex
                    .get(name)
                    .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;
                writeln!(out, "{}", pokemon)?;
            }
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Help => print_help(out)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    async fn show_locations<W: Write>(&mut self, url: &str, out: &mut W) -> Result<(), CommandError> {
        let LocationPage {
            next,
            previous,
            results,
            ..
        } = self.client.get_locations(url).await?;

        self.context.next_url = next;
        self.context.previous_url = previous;

        for location in results {
            writeln!(out, "{}", location.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Exploring {}...", area)?;
        let location_area = self.client.get_location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in &location_area.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let info = self.client.get_pokemon(name).await?;

        if attempt_catch(info.base_experience.unwrap_or(0), &mut self.rng) {
            info!(pokemon = %info.name, "caught");
            self.pokedex.add(Pokemon::from_info(&info));
            writeln!(out, "{} was caught!", info.name)?;
        } else {
            writeln!(out, "{} escaped!", info.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let names = self.pokedex.names();
        if names.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<(), CommandError> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

/// Reads commands from `input` until `exit` or end of input
///
/// Command errors are printed as `error: ...` and the loop carries on.
pub async fn run<R, I, W>(repl: &mut Repl<R>, input: I, out: &mut W) -> std::io::Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match repl.execute(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CommandError::Io(e)) => return Err(e),
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    Ok(())
}
