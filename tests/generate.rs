//! Randomized tests of OS-backed GUID generation.

#![cfg(feature = "os-rng")]

use std::collections::HashSet;

use winguid::{fill_guid, Guid};

#[test_log::test]
fn test_generated_guids_are_unique() {
    const N: usize = 10_000;
    let mut seen = HashSet::with_capacity(N);
    for _ in 0..N {
        let mut bytes = [0u8; 16];
        fill_guid(&mut bytes);
        assert!(seen.insert(bytes), "duplicate GUID generated");
    }
}

#[test_log::test]
fn test_generated_guids_keep_uuidv4_bits() {
    for _ in 0..256 {
        let guid = Guid::generate();
        // Data3 is read back little-endian, so the RFC 4122 version nibble
        // sits in its high bits; the variant bits lead Data4.
        assert_eq!(guid.data3() >> 12, 4);
        assert_eq!(guid.data4()[0] >> 6, 0b10);

        // In the raw layout the version nibble lands in byte 7.
        let bytes: [u8; 16] = guid.into();
        assert_eq!(bytes[7] >> 4, 4);
        assert_eq!(bytes[8] >> 6, 0b10);
    }
}

#[test_log::test]
fn test_generated_guid_is_never_zero() {
    for _ in 0..64 {
        assert_ne!(Guid::generate(), Guid::ZERO);
    }
}

#[test_log::test]
fn test_concurrent_generation() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let mut guids = Vec::with_capacity(512);
                for _ in 0..512 {
                    guids.push(Guid::generate());
                }
                guids
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for guid in handle.join().unwrap() {
            assert!(seen.insert(guid), "duplicate GUID across threads");
        }
    }
}
