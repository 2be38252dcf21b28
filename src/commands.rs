//! Command surface of the bot: registry, argument parsing, channel gate and dispatch.
//!
//! These are the functions a chat front-end calls. Everything here returns plain
//! [`Reply`] values; delivering them (and splitting them to the host's size limit, see
//! [`crate::render`]) is left to the caller.

use crate::game_clock::GameStatus;
use crate::lookup::LookupEngine;
use crate::page::Page;
use chrono::{DateTime, Utc};
use schema::Category;
use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;

/// Prefix every command line starts with.
pub const PREFIX: char = '!';

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Command {
    Hello,
    Time,
    Commands,
    Pokemon,
    Types,
    Tiers,
    EggGroup,
    EggMoves,
    Locations,
    LearnMoves,
    Ability,
    Move,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Time => "time",
            Command::Commands => "commands",
            Command::Pokemon => "pokemon",
            Command::Types => "types",
            Command::Tiers => "tiers",
            Command::EggGroup => "egggroup",
            Command::EggMoves => "eggmoves",
            Command::Locations => "locations",
            Command::LearnMoves => "learnmoves",
            Command::Ability => "ability",
            Command::Move => "move",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Command::Hello => &["greetings", "hi"],
            Command::Time => &["gametime"],
            Command::Commands => &[],
            Command::Pokemon => &["p"],
            Command::Types => &["type"],
            Command::Tiers => &["tier", "pvp"],
            Command::EggGroup => &["eg"],
            Command::EggMoves => &["em"],
            Command::Locations => &["l"],
            Command::LearnMoves => &["lm"],
            Command::Ability => &["a"],
            Command::Move => &["m"],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Hello => "Replies with a hello message.",
            Command::Time => "Replies with the current in-game day and time in PokeMMO.",
            Command::Commands => "Displays all the commands and their descriptions.",
            Command::Pokemon => "Provides information about a specific Pokémon.",
            Command::Types => {
                "Provides information about a specific Pokémon type or lists all types if 'all' is specified."
            }
            Command::Tiers => {
                "Provides information about a specific PvP tier or lists all tiers if 'all' is specified."
            }
            Command::EggGroup => {
                "Provides information about a specific Egg Group or lists all Egg Groups if 'all' is specified."
            }
            Command::EggMoves => {
                "Responds with egg moves and breeding chains for the specified Pokemon. (Limit 30 per move.)"
            }
            Command::Locations => {
                "Provides information about locations where a specific Pokémon can be found."
            }
            Command::LearnMoves => {
                "Provides information about moves that a specific Pokémon can learn."
            }
            Command::Ability => {
                "Provides information about a specific ability and Pokémon that can learn it."
            }
            Command::Move => {
                "Provides information about a specific move and Pokémon that can learn it."
            }
        }
    }

    /// The lookup category behind a data command.
    pub fn category(self) -> Option<Category> {
        match self {
            Command::Pokemon => Some(Category::Species),
            Command::Types => Some(Category::Type),
            Command::Tiers => Some(Category::Tier),
            Command::EggGroup => Some(Category::EggGroup),
            Command::EggMoves => Some(Category::EggMoves),
            Command::Locations => Some(Category::Locations),
            Command::LearnMoves => Some(Category::LearnableMoves),
            Command::Ability => Some(Category::Ability),
            Command::Move => Some(Category::Move),
            Command::Hello | Command::Time | Command::Commands => None,
        }
    }

    /// Name of the required argument, shown in usage messages.
    pub fn argument_name(self) -> Option<&'static str> {
        match self {
            Command::Pokemon
            | Command::EggMoves
            | Command::Locations
            | Command::LearnMoves => Some("name"),
            Command::Types => Some("type_name"),
            Command::Tiers => Some("tier_name"),
            Command::EggGroup => Some("group_name"),
            Command::Ability => Some("ability_name"),
            Command::Move => Some("move_name"),
            Command::Hello | Command::Time | Command::Commands => None,
        }
    }

    /// Every command except the game clock is limited to the configured channel.
    pub fn is_gated(self) -> bool {
        !matches!(self, Command::Time)
    }

    /// Resolves a command name or alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Command::iter().find(|command| {
            command.name().eq_ignore_ascii_case(name)
                || command
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

/// Splits `!name argument` into the command word and its first argument token.
///
/// The argument is the first whitespace-delimited word, or the contents of a leading
/// double-quoted string. Returns `None` if the line is not a command.
pub fn parse_command_line(line: &str) -> Option<(&str, Option<&str>)> {
    let body = line.trim().strip_prefix(PREFIX)?;
    let mut parts = body.splitn(2, char::is_whitespace);
    let name = parts.next().filter(|name| !name.is_empty())?;
    let rest = parts.next().map(str::trim).unwrap_or("");

    let argument = if let Some(quoted) = rest.strip_prefix('"') {
        quoted.split('"').next()
    } else {
        rest.split_whitespace().next()
    };
    Some((name, argument.filter(|arg| !arg.is_empty())))
}

/// What a command answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Pages(Vec<Page>),
}

/// Restricts gated commands to one channel. With no channel configured, every channel
/// is admitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelGate {
    allowed: Option<u64>,
}

impl ChannelGate {
    pub fn new(allowed: Option<u64>) -> Self {
        Self { allowed }
    }

    pub fn open() -> Self {
        Self::default()
    }

    pub fn admits(&self, command: Command, channel_id: u64) -> bool {
        !command.is_gated() || self.allowed.map_or(true, |allowed| allowed == channel_id)
    }
}

/// One user message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub line: &'a str,
    pub author: &'a str,
    pub channel_id: u64,
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct Dispatcher {
    engine: LookupEngine,
    gate: ChannelGate,
    clock: Clock,
}

impl Dispatcher {
    pub fn new(engine: LookupEngine, gate: ChannelGate) -> Self {
        Self {
            engine,
            gate,
            clock: Box::new(Utc::now),
        }
    }

    /// Replaces the wall clock used by the `time` command.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Handles a raw chat line. Returns `None` when the line is not a known command or
    /// the channel gate drops it.
    pub fn dispatch(&self, invocation: &Invocation<'_>) -> Option<Reply> {
        let (name, argument) = parse_command_line(invocation.line)?;
        let Some(command) = Command::from_name(name) else {
            debug!(command = name, "ignoring unknown command");
            return None;
        };
        if !self.gate.admits(command, invocation.channel_id) {
            debug!(
                command = command.name(),
                channel_id = invocation.channel_id,
                "command used outside the command channel"
            );
            return None;
        }
        Some(self.run(command, invocation.author, argument))
    }

    /// Runs a command without the channel gate.
    pub fn run(&self, command: Command, author: &str, argument: Option<&str>) -> Reply {
        match command {
            Command::Hello => Reply::Text(format!("Hello, {}!", author)),
            Command::Time => Reply::Text(GameStatus::at((self.clock)()).to_string()),
            Command::Commands => Reply::Text(help_text()),
            _ => self.run_lookup(command, argument),
        }
    }

    fn run_lookup(&self, command: Command, argument: Option<&str>) -> Reply {
        let (Some(category), Some(argument_name)) = (command.category(), command.argument_name())
        else {
            return Reply::Text(help_text());
        };
        let Some(key) = argument.map(str::trim).filter(|key| !key.is_empty()) else {
            return Reply::Text(format!(
                "Missing argument `{}`. Usage: {}{} <{}>",
                argument_name,
                PREFIX,
                command.name(),
                argument_name
            ));
        };

        match self.engine.lookup(category, key) {
            Ok(pages) => Reply::Pages(pages),
            Err(err) => Reply::Text(err.to_string()),
        }
    }
}

/// The `commands` listing.
pub fn help_text() -> String {
    let mut text = String::from("Here are the available commands:\n");
    for command in Command::iter() {
        text.push_str(&format!(
            "{}{} : {}\n",
            PREFIX,
            command.name(),
            command.description()
        ));
    }
    text
}
