#![no_std]

//! A fixed-window decoder for the headers of spy versus sniper replay files.
//!
//! Every replay begins with a 512 byte header holding the match metadata:
//! both players, the outcome, the venue, when the match started, and how its
//! missions were configured. Dossier reads that window and nothing else, so
//! decoding costs the same regardless of how long the match ran.
//!
//! Most users should begin with the functions in the [`avec`] module. The
//! individual field decoders are exposed in the [`sans`] module for
//! applications that already hold the header bytes, or that need to inspect a
//! single field.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder and `HashMap` venue tables (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod avec;
pub mod sans;

pub use avec::{Error, Replay};
