#![allow(dead_code)]

//! Synthetic version 6 headers.

pub const VENUES: [(u32, &str); 2] = [(0x0000_BA11, "Ballroom"), (0x0000_0FF1, "Courtyard")];

pub struct Header(pub Vec<u8>);

impl Header {
    /// A complete, valid header: "alice" (spy) shot by "bob" (sniper) in the
    /// Ballroom, picking 4 of 7 missions.
    pub fn new() -> Self {
        let mut h = Self(vec![0; 512]);
        h.0[..4].copy_from_slice(b"RPLY");
        h.0[4] = 6;
        h.put(0x18, &(0..16).collect::<Vec<u8>>())
            .put(0x28, &1_600_000_000u32.to_le_bytes())
            .put(0x2C, &42u16.to_le_bytes())
            .put(0x38, &[2])
            .put(0x3C, &loadout(1, 4, 7).to_le_bytes())
            .put(0x40, &0x0000_BA11u32.to_le_bytes())
            .put(0x50, &0b1011u32.to_le_bytes())
            .put(0x54, &3u32.to_le_bytes())
            .put(0x58, &17u32.to_le_bytes())
            .names(b"alice", b"bob", b"", b"")
    }

    pub fn put(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Write the four name length prefixes and the name region.
    pub fn names(self, spy: &[u8], sniper: &[u8], spy_display: &[u8], sniper_display: &[u8]) -> Self {
        let lengths = [spy, sniper, spy_display, sniper_display].map(|n| n.len() as u8);
        let region = [spy, sniper, spy_display, sniper_display].concat();
        self.put(0x2E, &lengths).put(0x64, &region)
    }

    pub fn result(self, code: u8) -> Self {
        self.put(0x38, &[code])
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Pack a loadout the way the game stores it.
pub fn loadout(mode: u32, x: u32, y: u32) -> u32 {
    mode << 28 | (y & 0x3FFF) << 14 | (x & 0x3FFF)
}
