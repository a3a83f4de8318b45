#![cfg(feature = "std")]

mod fixture;

use std::collections::{BTreeMap, HashMap};

use dossier::{
    Error,
    avec::{decode_slice, slice::decode_fields},
    sans::{
        HEADER_LEN,
        header::PreambleError,
        loadout::{Loadout, LoadoutError},
        offsets::{FormatVersion, OffsetTable},
        outcome::{GameResult, Role},
        venue::UnknownVenue,
    },
};
use fixture::{Header, VENUES, loadout};
use time::OffsetDateTime;

#[test]
fn decode_slice_complete() {
    let header = Header::new();
    let (replay, unknown) = decode_slice(header.bytes(), &VENUES).unwrap();

    assert_eq!(unknown, None);
    assert_eq!(replay.spy(), "alice");
    assert_eq!(replay.sniper(), "bob");
    assert_eq!(
        replay.start_time(),
        OffsetDateTime::from_unix_timestamp(1_600_000_000).unwrap()
    );
    assert_eq!(replay.result(), GameResult::SpyShot);
    assert_eq!(
        replay.loadout(),
        Loadout::Pick {
            required: 4,
            available: 7
        }
    );
    assert_eq!(replay.loadout().to_string(), "p4/7");
    assert_eq!(replay.venue(), Some("Ballroom"));
    assert_eq!(replay.venue_hash(), 0xBA11);
    assert_eq!(replay.sequence_number(), 42);
    assert_eq!(replay.uuid(), "AAECAwQFBgcICQoLDA0ODw");
    assert_eq!(replay.version(), 6);
    assert_eq!(replay.start_duration(), Some(17));
    assert_eq!(replay.num_guests(), Some(3));
    assert_eq!(replay.missions_completed(), 3);
}

#[test]
fn decode_slice_ignores_trailing_bytes() {
    let mut data = Header::new().0;
    data.extend_from_slice(&[0xAA; 4096]);

    let (replay, _) = decode_slice(&data, &VENUES).unwrap();
    assert_eq!(replay.spy(), "alice");
}

#[test]
fn decode_slice_short() {
    let header = Header::new();

    for len in [0, 4, 5, 100, 511] {
        let result = decode_slice(&header.bytes()[..len], &VENUES);
        assert!(matches!(result, Err(Error::EndOfSlice)), "length {len}");
    }
}

#[test]
fn decode_slice_not_replay() {
    let header = Header::new().put(0, b"RPLX");
    let result = decode_slice(header.bytes(), &VENUES);
    assert!(matches!(
        result,
        Err(Error::Preamble(PreambleError::NotReplay))
    ));
}

#[test]
fn decode_slice_unsupported_version() {
    for version in [0, 4, 5, 7, 255] {
        let header = Header::new().put(4, &[version]);
        let result = decode_slice(header.bytes(), &VENUES);
        assert!(
            matches!(
                result,
                Err(Error::Preamble(PreambleError::UnsupportedVersion(v))) if v == version
            ),
            "version {version}"
        );
    }
}

#[test]
fn decode_slice_corrupt_loadout() {
    let header = Header::new().put(0x3C, &loadout(3, 1, 1).to_le_bytes());
    let result = decode_slice(header.bytes(), &VENUES);
    assert!(matches!(
        result,
        Err(Error::Loadout(LoadoutError::UnknownMode(3)))
    ));
}

#[test]
fn decode_slice_unknown_venue() {
    let header = Header::new().put(0x40, &0xDEAD_BEEFu32.to_le_bytes());
    let (replay, unknown) = decode_slice(header.bytes(), &VENUES).unwrap();

    assert_eq!(unknown, Some(UnknownVenue(0xDEAD_BEEF)));
    assert_eq!(unknown.unwrap().to_string(), "Unknown venue hash (0xdeadbeef).");
    assert_eq!(replay.venue(), None);
    assert_eq!(replay.venue_hash(), 0xDEAD_BEEF);

    // Every other field is still decoded.
    assert_eq!(replay.spy(), "alice");
    assert_eq!(replay.sniper(), "bob");
    assert_eq!(replay.missions_completed(), 3);
}

#[test]
fn decode_slice_without_venue_table() {
    let venues: [(u32, &str); 0] = [];
    let (replay, unknown) = decode_slice(Header::new().bytes(), &venues).unwrap();

    assert_eq!(unknown, Some(UnknownVenue(0xBA11)));
    assert_eq!(replay.venue_hash(), 0xBA11);
}

#[test]
fn decode_slice_venue_tables() {
    let header = Header::new().put(0x40, &0x0FF1u32.to_le_bytes());

    let btree: BTreeMap<u32, String> = [(0x0FF1, String::from("Courtyard"))].into();
    let (replay, _) = decode_slice(header.bytes(), &btree).unwrap();
    assert_eq!(replay.venue(), Some("Courtyard"));

    let hash: HashMap<u32, &str> = VENUES.into_iter().collect();
    let (replay, _) = decode_slice(header.bytes(), &hash).unwrap();
    assert_eq!(replay.venue(), Some("Courtyard"));

    let (replay, _) = decode_slice(header.bytes(), VENUES.as_slice()).unwrap();
    assert_eq!(replay.venue(), Some("Courtyard"));
}

#[test]
fn decode_slice_idempotent() {
    let header = Header::new();
    let first = decode_slice(header.bytes(), &VENUES).unwrap();
    let second = decode_slice(header.bytes(), &VENUES).unwrap();
    assert_eq!(first, second);
}

#[test]
fn decode_slice_invalid_utf8_name() {
    let header = Header::new().names(b"al\xFFce", b"bob", b"", b"");
    let (replay, _) = decode_slice(header.bytes(), &VENUES).unwrap();
    assert_eq!(replay.spy(), "al\u{FFFD}ce");
    assert_eq!(replay.spy_bytes(), b"al\xFFce");
}

#[test]
fn decode_slice_names_verbatim() {
    let first = Header::new().names(b"Jos\xE9", b"bob", b"", b"");
    let second = Header::new().names(b"Jos\xE8", b"bob", b"", b"");

    let (first, _) = decode_slice(first.bytes(), &VENUES).unwrap();
    let (second, _) = decode_slice(second.bytes(), &VENUES).unwrap();

    assert_eq!(first.spy_bytes(), b"Jos\xE9");
    assert_eq!(second.spy_bytes(), b"Jos\xE8");
    assert_eq!(first.sniper_bytes(), b"bob");
    assert_ne!(first, second);
}

#[test]
fn decode_fields_absent_optional_offsets() {
    let offsets = OffsetTable {
        spy_display_name_length: None,
        sniper_display_name_length: None,
        start_duration: None,
        num_guests: None,
        ..FormatVersion::V6.offsets().clone()
    };

    // Display names are present in the bytes, but the table does not locate
    // their lengths.
    let header = Header::new().names(b"alice", b"bob", b"Agent", b"Marksman");
    let window: &[u8; HEADER_LEN] = header.bytes().try_into().unwrap();
    assert_ne!(window[0x30], 0);
    assert_ne!(window[0x31], 0);
    assert_ne!(window[0x54], 0);
    assert_ne!(window[0x58], 0);

    let (replay, _) = decode_fields(window, &offsets, &VENUES).unwrap();
    assert_eq!(replay.start_duration(), None);
    assert_eq!(replay.num_guests(), None);
    assert_eq!(replay.spy(), "alice");
    assert_eq!(replay.sniper(), "bob");
    assert_eq!(replay.missions_completed(), 3);

    // The full table reads the same bytes.
    let (replay, _) = decode_fields(window, FormatVersion::V6.offsets(), &VENUES).unwrap();
    assert_eq!(replay.start_duration(), Some(17));
    assert_eq!(replay.num_guests(), Some(3));
    assert_eq!(replay.spy(), "Agent");
    assert_eq!(replay.sniper(), "Marksman");
}

#[test]
fn decode_slice_name_past_header() {
    // The sniper's display name would end at 0x64 + 250 + 250 + 1 + 10.
    let header = Header::new().put(0x2E, &[250, 250, 1, 10]);
    let result = decode_slice(header.bytes(), &VENUES);
    assert!(matches!(result, Err(Error::OutOfBounds { .. })));
}

#[test]
fn winner_sniper() {
    for code in [1, 2] {
        let header = Header::new().result(code);
        let (replay, _) = decode_slice(header.bytes(), &VENUES).unwrap();
        assert_eq!(replay.winner_role(), Some(Role::Sniper));
        assert_eq!(replay.winner_name().as_deref(), Some("bob"));
    }
}

#[test]
fn winner_spy() {
    for code in [0, 3] {
        let header = Header::new().result(code);
        let (replay, _) = decode_slice(header.bytes(), &VENUES).unwrap();
        assert_eq!(replay.winner_role(), Some(Role::Spy));
        assert_eq!(replay.winner_name().as_deref(), Some("alice"));
    }
}

#[test]
fn winner_none() {
    for code in [4, 9] {
        let header = Header::new().result(code);
        let (replay, _) = decode_slice(header.bytes(), &VENUES).unwrap();
        assert_eq!(replay.winner_role(), None);
        assert_eq!(replay.winner_name(), None);
    }
}

#[test]
fn winner_role_text() {
    assert_eq!(Role::Spy.as_str(), "spy");
    assert_eq!(Role::Sniper.as_str(), "sniper");
}
