//! Match outcomes and the sides they favour.

/// How a match ended, as stored in the result byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    MissionWin,
    SpyTimeout,
    SpyShot,
    CivilianShot,
    InProgress,
    /// A result code with no known meaning.
    Unrecognized(u8),
}

impl From<u8> for GameResult {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::MissionWin,
            1 => Self::SpyTimeout,
            2 => Self::SpyShot,
            3 => Self::CivilianShot,
            4 => Self::InProgress,
            code => Self::Unrecognized(code),
        }
    }
}

impl GameResult {
    /// The side which won, if the match ended with a recognised result.
    pub fn winner(self) -> Option<Role> {
        match self {
            Self::MissionWin | Self::CivilianShot => Some(Role::Spy),
            Self::SpyShot | Self::SpyTimeout => Some(Role::Sniper),
            Self::InProgress | Self::Unrecognized(_) => None,
        }
    }
}

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Spy,
    Sniper,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spy => "spy",
            Self::Sniper => "sniper",
        }
    }
}
