//! Line protocol spoken over the daemon socket. One command per line,
//! whitespace-separated, keywords case-insensitive.

use crate::cup::{SectorIndex, SlotNumber, SlotStatus};
use crate::geom::Point;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/reaction-disk.sock";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Click(Point),
    Select(SlotNumber),
    Status(SlotNumber, SlotStatus),
    Reset,
    Selected,
    Slot(SlotNumber),
    Sector(SectorIndex),
}

impl Command {
    /// Queries are answered by the server; everything else is forwarded to
    /// the disk.
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Selected | Self::Slot(_) | Self::Sector(_))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid number '{0}'")]
    Number(String),
    #[error("Invalid slot status '{0}'")]
    Status(String),
}

fn parse_coord(s: &str) -> Result<f64, ParseError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::Number(s.to_string()))
}

fn parse_index<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::Number(s.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let arity = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ParseError::Arity {
                    command,
                    expected,
                    got: args.len(),
                })
            }
        };

        match keyword.as_str() {
            "click" => {
                arity("click", 2)?;
                let point = Point::new(parse_coord(args[0])?, parse_coord(args[1])?);
                Ok(Self::Click(point))
            }
            "select" => {
                arity("select", 1)?;
                Ok(Self::Select(SlotNumber::new(parse_index(args[0])?)))
            }
            "status" => {
                arity("status", 2)?;
                let status = args[1]
                    .parse::<SlotStatus>()
                    .map_err(|_| ParseError::Status(args[1].to_string()))?;
                Ok(Self::Status(SlotNumber::new(parse_index(args[0])?), status))
            }
            "reset" => {
                arity("reset", 0)?;
                Ok(Self::Reset)
            }
            "selected" => {
                arity("selected", 0)?;
                Ok(Self::Selected)
            }
            "slot" => {
                arity("slot", 1)?;
                Ok(Self::Slot(SlotNumber::new(parse_index(args[0])?)))
            }
            "sector" => {
                arity("sector", 1)?;
                Ok(Self::Sector(SectorIndex::new(parse_index(args[0])?)))
            }
            _ => Err(ParseError::Unknown(keyword)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click(p) => write!(f, "click {} {}", p.x, p.y),
            Self::Select(n) => write!(f, "select {n}"),
            Self::Status(n, status) => write!(f, "status {n} {status}"),
            Self::Reset => write!(f, "reset"),
            Self::Selected => write!(f, "selected"),
            Self::Slot(n) => write!(f, "slot {n}"),
            Self::Sector(i) => write!(f, "sector {i}"),
        }
    }
}
