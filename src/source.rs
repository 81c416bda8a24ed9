//! Random-UUID sources in RFC 4122 byte layout.

/// A source of random UUIDs.
///
/// Implementations fill all 16 bytes of the output with a random (UUIDv4)
/// value in the RFC 4122 byte sequence, i.e. with the first three fields
/// encoded big-endian. Setting the version nibble and variant bits is the
/// source's responsibility; the layout conversion in
/// [`fill_guid_from`](crate::fill_guid_from) never modifies them.
pub trait UuidSource {
    /// Fills `out` with a random UUID in RFC 4122 byte layout.
    fn fill_uuid(&mut self, out: &mut [u8; 16]);
}

/// UUIDv4 source backed by the operating system's CSPRNG.
///
/// Zero-sized and `Copy`; independent instances may be used concurrently
/// from any number of threads.
#[cfg(feature = "os-rng")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsUuidSource;

#[cfg(feature = "os-rng")]
impl UuidSource for OsUuidSource {
    fn fill_uuid(&mut self, out: &mut [u8; 16]) {
        use rand::{rngs::OsRng, Rng};

        let mut rng = OsRng;
        rng.fill(&mut out[..]);
        // Version 4, RFC 4122 variant.
        out[6] = (out[6] & 0x0f) | 0x40;
        out[8] = (out[8] & 0x3f) | 0x80;
        log::trace!("filled uuid from OS entropy");
    }
}

#[cfg(all(test, feature = "os-rng"))]
mod tests {
    use super::*;

    #[test]
    fn test_os_source_sets_version_and_variant() {
        let mut out = [0u8; 16];
        OsUuidSource.fill_uuid(&mut out);
        assert_eq!(out[6] >> 4, 4);
        assert_eq!(out[8] >> 6, 0b10);
    }
}
