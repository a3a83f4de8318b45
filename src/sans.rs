//! I/O-free decoders for the individual regions of a replay header.
//!
//! Each decoder accepts a fixed-size byte array taken from the offset named by
//! the active [`offsets::OffsetTable`], and returns a typed value. None of them
//! read from a buffer directly; locating bytes is the caller's job. See
//! [`crate::avec`] for implementations that do this for whole headers.
//!
//! # Architecture
//!
//! Decoding proceeds in a fixed order:
//!
//! 1. The [`header::Preamble`] checks the magic signature and resolves the
//!    format version to its offset table. Nothing else may be read before this
//!    succeeds.
//!
//! 2. Scalar fields are independent of one another and may be decoded in any
//!    order, using the functions in [`fields`], [`loadout`] and [`encode`].
//!
//! 3. Player names are stored back to back in a variable-length region, so the
//!    location of each depends on the lengths of those before it. This is
//!    represented as a chain of state tokens in [`names`], each consuming the
//!    length prefixes it needs and returning its successor:
//!
//!    [`names::NameLengths`] → [`names::DisplayNameLengths`] →
//!    [`names::NameSpans`].
//!
//!    Only the initial token can be constructed, so the spans cannot be
//!    computed without first supplying every length they depend on.
//!
//! Some areas are not represented in the decoders and must be carefully
//! written:
//!
//! - Skipping fields whose offset is absent for the active format version.
//!
//! - Checking that a name span lies within the header before copying it.

pub mod encode;
pub mod fields;
pub mod header;
pub mod loadout;
pub mod names;
pub mod offsets;
pub mod outcome;
pub mod venue;

/// Number of leading bytes holding every decoded field.
pub const HEADER_LEN: usize = 512;
