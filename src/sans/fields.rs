//! Decoders for fixed-width scalar fields.

use time::{Duration, OffsetDateTime};

use super::outcome::GameResult;

/// Decode a match start time, stored as seconds since the Unix epoch.
pub fn timestamp(r: [u8; 4]) -> OffsetDateTime {
    let seconds = u32::from_le_bytes(r);
    OffsetDateTime::UNIX_EPOCH.saturating_add(Duration::seconds(i64::from(seconds)))
}

pub fn sequence_number(r: [u8; 2]) -> u16 {
    u16::from_le_bytes(r)
}

pub fn game_result(r: [u8; 1]) -> GameResult {
    GameResult::from(r[0])
}

/// Decode a plain unsigned count, such as the number of guests.
pub fn count(r: [u8; 4]) -> u32 {
    u32::from_le_bytes(r)
}

/// Decode the number of missions completed from a bitmask, one bit per
/// mission.
pub fn missions_completed(r: [u8; 4]) -> u32 {
    u32::from_le_bytes(r).count_ones()
}
