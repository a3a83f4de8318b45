//! States locating player names within the variable-length name region.
//!
//! The region holds up to four names back to back, in a fixed order:
//!
//! ```text
//! [spy base][sniper base][spy display][sniper display]
//! ```
//!
//! Base names are always present. A display name is present when its length
//! prefix is non-zero, and then replaces the base name of that player.

use core::ops::Range;

use either::Either::{self, Left, Right};

/// State token to decode the base name length prefixes.
#[derive(Debug)]
pub struct NameLengths;

impl NameLengths {
    /// Transition to another state by decoding the spy and sniper base name
    /// lengths, in that order.
    ///
    /// Returns a successor state token.
    pub fn advance(r: [u8; 2]) -> DisplayNameLengths {
        let [spy, sniper] = r;

        DisplayNameLengths {
            spy: usize::from(spy),
            sniper: usize::from(sniper),
        }
    }
}

/// State token to decode the display name length prefixes.
#[derive(Debug)]
pub struct DisplayNameLengths {
    spy: usize,
    sniper: usize,
}

impl DisplayNameLengths {
    /// Transition to another state by decoding the spy and sniper display name
    /// lengths, in that order. Versions without display names should supply
    /// zeroes.
    ///
    /// Returns the location of each visible name.
    pub fn advance(self, r: [u8; 2]) -> NameSpans {
        let [spy_display, sniper_display] = r;
        let (spy_display, sniper_display) = (usize::from(spy_display), usize::from(sniper_display));

        // Each display name begins after every name preceding it in the region.
        let spy_display_start = self.spy + self.sniper;
        let sniper_display_start = spy_display_start + spy_display;

        let spy = if spy_display != 0 {
            Right(spy_display_start..spy_display_start + spy_display)
        } else {
            Left(0..self.spy)
        };

        let sniper = if sniper_display != 0 {
            Right(sniper_display_start..sniper_display_start + sniper_display)
        } else {
            Left(self.spy..self.spy + self.sniper)
        };

        NameSpans { spy, sniper }
    }
}

/// Locations of the visible player names, relative to the start of the name
/// region.
///
/// Each span is `Left` when it holds a base name, and `Right` when it holds a
/// display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpans {
    pub spy: Either<Range<usize>, Range<usize>>,
    pub sniper: Either<Range<usize>, Range<usize>>,
}

impl NameSpans {
    /// Offset both spans to absolute positions within the header.
    pub fn at(self, base: usize) -> (Range<usize>, Range<usize>) {
        let shift = |r: Either<Range<usize>, Range<usize>>| {
            let r = r.into_inner();
            r.start + base..r.end + base
        };

        (shift(self.spy), shift(self.sniper))
    }
}
