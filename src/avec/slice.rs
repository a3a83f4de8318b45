//! Slice-based decoder implementation.

use alloc::{boxed::Box, string::String};
use core::ops::Range;

use crate::sans::{
    HEADER_LEN,
    encode::encode_uuid,
    fields,
    header::Preamble,
    loadout::Loadout,
    names::NameLengths,
    offsets::OffsetTable,
    venue::{self, UnknownVenue, Venues},
};

use super::{Error, Replay};

/// Decode the header at the start of a slice of a replay.
///
/// Only the first [`HEADER_LEN`] bytes are inspected; the slice may hold the
/// whole file.
///
/// This method is also re-exported as `dossier::avec::decode_slice`.
pub fn decode(
    r: &[u8],
    venues: &(impl Venues + ?Sized),
) -> Result<(Replay, Option<UnknownVenue>), Error> {
    let header = r.first_chunk::<HEADER_LEN>().ok_or(Error::EndOfSlice)?;
    decode_header(header, venues)
}

/// Decode a complete header window.
///
/// Returns the replay, and the venue hash if it could not be resolved.
pub fn decode_header(
    r: &[u8; HEADER_LEN],
    venues: &(impl Venues + ?Sized),
) -> Result<(Replay, Option<UnknownVenue>), Error> {
    let (version, offsets) = Preamble::advance(take(r, 0)?).inspect_err(|error| {
        tracing::debug!(?error, "Rejected replay preamble");
    })?;

    tracing::trace!(?version, "Resolved offset table");

    decode_fields(r, offsets, venues)
}

/// Decode every field following the preamble, using a given offset table.
///
/// Fields the table does not locate are left unset. Display names absent
/// from the table are treated as empty, selecting the base names.
pub fn decode_fields(
    r: &[u8; HEADER_LEN],
    offsets: &OffsetTable,
    venues: &(impl Venues + ?Sized),
) -> Result<(Replay, Option<UnknownVenue>), Error> {
    let result = fields::game_result(take(r, offsets.result)?);
    let start_time = fields::timestamp(take(r, offsets.timestamp)?);

    let loadout = Loadout::decode(take(r, offsets.loadout)?).inspect_err(|error| {
        tracing::debug!(?error, "Rejected replay loadout");
    })?;

    let venue_hash = u32::from_le_bytes(take(r, offsets.venue_hash)?);
    let (venue, unknown) = match venue::resolve(venues, venue_hash) {
        Ok(name) => (Some(String::from(name)), None),
        Err(unknown) => {
            tracing::debug!(venue_hash, "Unknown venue hash");
            (None, Some(unknown))
        }
    };

    let uuid = encode_uuid(&take(r, offsets.uuid)?);
    let sequence_number = fields::sequence_number(take(r, offsets.sequence_number)?);

    let start_duration = optional(r, offsets.start_duration)?.map(fields::count);
    let num_guests = optional(r, offsets.num_guests)?.map(fields::count);

    // Name lengths must all be known before either name can be located.
    let [spy] = take::<1>(r, offsets.spy_name_length)?;
    let [sniper] = take::<1>(r, offsets.sniper_name_length)?;
    let [spy_display] = optional::<1>(r, offsets.spy_display_name_length)?.unwrap_or_default();
    let [sniper_display] = optional::<1>(r, offsets.sniper_display_name_length)?.unwrap_or_default();

    let (spy, sniper) = NameLengths::advance([spy, sniper])
        .advance([spy_display, sniper_display])
        .at(offsets.player_names);

    let (spy, sniper) = name(r, spy)
        .and_then(|spy| Ok((spy, name(r, sniper)?)))
        .inspect_err(|error| {
            tracing::debug!(?error, "Rejected replay player names");
        })?;

    let missions_completed = fields::missions_completed(take(r, offsets.missions_completed)?);

    let replay = Replay {
        spy,
        sniper,
        start_time,
        result,
        loadout,
        venue,
        venue_hash,
        sequence_number,
        uuid,
        version: offsets.version,
        start_duration,
        num_guests,
        missions_completed,
    };

    Ok((replay, unknown))
}

/// Take an exact number of bytes from an offset in a slice.
fn take<const N: usize>(r: &[u8], i: usize) -> Result<[u8; N], Error> {
    r.get(i..)
        .and_then(|r| r.first_chunk::<N>())
        .copied()
        .ok_or(Error::OutOfBounds { offset: i, len: N })
}

/// Take bytes for a field only if the active version locates it.
fn optional<const N: usize>(r: &[u8], i: Option<usize>) -> Result<Option<[u8; N]>, Error> {
    i.map(|i| take(r, i)).transpose()
}

/// Copy a run of name bytes verbatim.
fn name(r: &[u8], span: Range<usize>) -> Result<Box<[u8]>, Error> {
    let (offset, len) = (span.start, span.len());

    r.get(span).map(Box::from).ok_or(Error::OutOfBounds { offset, len })
}
