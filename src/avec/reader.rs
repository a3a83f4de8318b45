//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use crate::sans::{
    HEADER_LEN,
    venue::{UnknownVenue, Venues},
};

use super::{Error, Replay, slice::decode_header};

/// Decode the header at the start of a reader of a replay.
///
/// Reads exactly [`HEADER_LEN`] bytes, leaving the reader positioned at the
/// start of the match recording. A reader ending sooner produces an
/// [`Error::Io`] of kind `UnexpectedEof`.
///
/// This method is also re-exported as `dossier::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    r: &mut impl Read,
    venues: &(impl Venues + ?Sized),
) -> Result<(Replay, Option<UnknownVenue>), Error> {
    let mut buf = [0; HEADER_LEN];
    r.read_exact(&mut buf)?;

    decode_header(&buf, venues)
}
