use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;

/// Actuator command carried by an Easy_Send frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Stop,
    Tilt,
    Intermediate,
}

impl Action {
    /// Every action, in the order they are listed to users.
    pub const ALL: [Action; 5] = [
        Action::Up,
        Action::Down,
        Action::Stop,
        Action::Tilt,
        Action::Intermediate,
    ];

    /// Key code placed in the Easy_Send payload.
    pub fn key_code(self) -> u8 {
        match self {
            Action::Up => 0x20,
            Action::Down => 0x40,
            Action::Stop => 0x10,
            Action::Tilt => 0x24,
            Action::Intermediate => 0x44,
        }
    }

    /// Keyword accepted on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Stop => "stop",
            Action::Tilt => "tilt",
            Action::Intermediate => "intermediate",
        }
    }
}

impl FromStr for Action {
    type Err = FrameError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.keyword() == keyword)
            .ok_or_else(|| FrameError::UnknownAction(keyword.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
