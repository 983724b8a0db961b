//! Interactive commands typed at the prompt

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    Select(usize),
    /// One-shot seek to a fraction
    Seek(f64),
    /// Scrub gesture: begin, preview each position, commit the last one
    Drag(Vec<f64>),
    Volume(f32),
    Mute,
    Status,
    /// Print the parameters last pushed to the engine
    Params,
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
commands:
  play | pause | toggle      control playback
  next | prev                change track
  select <n>                 jump to track n (0-based)
  seek <fraction>            seek to 0.0-1.0
  drag <f> [<f> ...]         scrub through positions, release on the last
  vol <level>                volume 0.0-1.0 (unmutes)
  mute                       toggle mute
  params                     show engine parameters as JSON
  status | list | help | quit";

fn parse_number<T: FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn single_arg<'a>(
    args: &[&'a str],
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or(CommandError::MissingArgument { command, expected })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match name.to_ascii_lowercase().as_str() {
            "play" => Ok(Command::Play),
            "pause" => Ok(Command::Pause),
            "toggle" | "p" => Ok(Command::Toggle),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "b" => Ok(Command::Previous),
            "select" => {
                let raw = single_arg(&args, "select", "a track index")?;
                Ok(Command::Select(parse_number(raw)?))
            }
            "seek" => {
                let raw = single_arg(&args, "seek", "a fraction")?;
                Ok(Command::Seek(parse_number(raw)?))
            }
            "drag" => {
                if args.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "drag",
                        expected: "one or more fractions",
                    });
                }
                let positions = args
                    .iter()
                    .map(|raw| parse_number(raw))
                    .collect::<Result<Vec<f64>, _>>()?;
                Ok(Command::Drag(positions))
            }
            "vol" | "volume" => {
                let raw = single_arg(&args, "vol", "a level")?;
                Ok(Command::Volume(parse_number(raw)?))
            }
            "mute" | "m" => Ok(Command::Mute),
            "status" | "s" => Ok(Command::Status),
            "params" => Ok(Command::Params),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
