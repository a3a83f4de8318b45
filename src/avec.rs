//! Convenience interfaces for decoding whole headers.
//!
//! The functions in this module locate every field of a header, decode it with
//! the corresponding [`crate::sans`] decoder, and assemble the results into a
//! [`Replay`].
//!
//! A header is either decoded fully or not at all, with one exception: a venue
//! hash missing from the supplied table is reported as an
//! [`UnknownVenue`](crate::sans::venue::UnknownVenue)
//! alongside an otherwise complete replay, leaving callers to decide whether
//! it matters.
//!
//! ```
//! let venues = [(0x1DBD_8E41, "Ballroom")];
//! let (replay, unknown) = dossier::avec::decode_slice(&data, &venues)?;
//!
//! if let Some(name) = replay.winner_name() {
//!     println!("{name} won on {}", replay.venue().unwrap_or("an unknown venue"));
//! }
//! ```

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use alloc::{borrow::Cow, boxed::Box, string::String};

use thiserror::Error;
use time::OffsetDateTime;

use crate::sans::{
    header::PreambleError,
    loadout::{Loadout, LoadoutError},
    outcome::{GameResult, Role},
};

/// Errors occurring while decoding a header.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader, including one ending before a whole
    /// header was read.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// Incorrect file header.
    #[error("Incorrect file header: {0}")]
    Preamble(#[from] PreambleError),
    /// Corrupt mission loadout.
    #[error("Corrupt loadout: {0}")]
    Loadout(#[from] LoadoutError),
    /// A field extends past the end of the header.
    #[error("Field at offset {offset} ({len} bytes) extends past the header.")]
    OutOfBounds { offset: usize, len: usize },
}

/// Metadata for a single match, decoded from a replay header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub(crate) spy: Box<[u8]>,
    pub(crate) sniper: Box<[u8]>,
    pub(crate) start_time: OffsetDateTime,
    pub(crate) result: GameResult,
    pub(crate) loadout: Loadout,
    pub(crate) venue: Option<String>,
    pub(crate) venue_hash: u32,
    pub(crate) sequence_number: u16,
    pub(crate) uuid: String,
    pub(crate) version: u8,
    pub(crate) start_duration: Option<u32>,
    pub(crate) num_guests: Option<u32>,
    pub(crate) missions_completed: u32,
}

impl Replay {
    /// Visible name of the spy player, preferring their display name.
    ///
    /// Invalid UTF-8 is replaced; see [`Replay::spy_bytes`] for the name as
    /// stored.
    pub fn spy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.spy)
    }

    /// Visible name of the sniper player, preferring their display name.
    ///
    /// Invalid UTF-8 is replaced; see [`Replay::sniper_bytes`] for the name as
    /// stored.
    pub fn sniper(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sniper)
    }

    /// Spy name bytes, exactly as stored in the header.
    pub fn spy_bytes(&self) -> &[u8] {
        &self.spy
    }

    /// Sniper name bytes, exactly as stored in the header.
    pub fn sniper_bytes(&self) -> &[u8] {
        &self.sniper
    }

    pub fn start_time(&self) -> OffsetDateTime {
        self.start_time
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn loadout(&self) -> Loadout {
        self.loadout
    }

    /// Name of the venue, if its hash was found in the supplied table.
    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    /// Raw venue hash, present whether or not it was resolved.
    pub fn venue_hash(&self) -> u32 {
        self.venue_hash
    }

    pub fn sequence_number(&self) -> u16 {
        self.sequence_number
    }

    /// Stable match identifier, as 22 characters of URL-safe base64.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Present only for format versions which store it.
    pub fn start_duration(&self) -> Option<u32> {
        self.start_duration
    }

    /// Present only for format versions which store it.
    pub fn num_guests(&self) -> Option<u32> {
        self.num_guests
    }

    pub fn missions_completed(&self) -> u32 {
        self.missions_completed
    }

    /// The side which won. `None` for matches still in progress.
    pub fn winner_role(&self) -> Option<Role> {
        self.result.winner()
    }

    /// Visible name of the player on the winning side.
    pub fn winner_name(&self) -> Option<Cow<'_, str>> {
        self.winner_role().map(|role| match role {
            Role::Spy => self.spy(),
            Role::Sniper => self.sniper(),
        })
    }
}
