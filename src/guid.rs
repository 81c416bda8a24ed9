use std::{
    fmt::Display,
    io::{Read, Seek, Write},
};

use binrw::prelude::*;

#[cfg(feature = "os-rng")]
use crate::source::OsUuidSource;
use crate::source::UuidSource;

/// Represents a standard, 16-byte GUID in the Windows field layout.
///
/// Data1, Data2 and Data3 are stored little-endian; Data4 is an opaque
/// 8-byte array that is never reinterpreted as an integer.
///
/// Supports [`std::mem::size_of`].
#[derive(BinRead, BinWrite, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[brw(little)]
pub struct Guid(u32, u16, u16, [u8; 8]);

/// Reverses the integer byte order of the Data1, Data2 and Data3 fields of
/// a 16-byte GUID buffer, in place.
///
/// This converts between the RFC 4122 byte sequence (fields big-endian)
/// and the Windows little-endian layout. Bytes 8..16 (Data4) are opaque
/// and are never touched. The swap is an involution: applying it twice
/// restores the original bytes.
pub fn swap_uuid_fields(bytes: &mut [u8; 16]) {
    // Data1: u32
    bytes.swap(0, 3);
    bytes.swap(1, 2);
    // Data2: u16
    bytes.swap(4, 5);
    // Data3: u16
    bytes.swap(6, 7);
}

/// Fills `out` with a fresh random GUID in the Windows little-endian
/// layout, drawing the UUID from `source`.
///
/// Purely representational: reading the result back through the
/// little-endian field layout yields exactly the UUID the source produced,
/// version and variant bits included.
pub fn fill_guid_from<S: UuidSource>(source: &mut S, out: &mut [u8; 16]) {
    source.fill_uuid(out);
    swap_uuid_fields(out);
}

/// Fills `out` with a fresh random GUID using the operating system's
/// entropy source. Never fails on a supported build.
#[cfg(feature = "os-rng")]
pub fn fill_guid(out: &mut [u8; 16]) {
    fill_guid_from(&mut OsUuidSource, out);
}

impl Guid {
    /// The size of a GUID, in Bytes
    pub const GUID_SIZE: usize = 16;
    const _VALIDATE_SIZE_OF: [u8; Self::GUID_SIZE] = [0; size_of::<Self>()];

    /// The all-zero (null) GUID.
    pub const ZERO: Guid = Guid(0, 0, 0, [0; 8]);

    /// Generates a new random GUID from the operating system's entropy
    /// source.
    #[cfg(feature = "os-rng")]
    pub fn generate() -> Self {
        Self::generate_from(&mut OsUuidSource)
    }

    /// Generates a new random GUID from the given UUID source.
    pub fn generate_from<S: UuidSource>(source: &mut S) -> Self {
        let mut bytes = [0u8; 16];
        fill_guid_from(source, &mut bytes);
        Self::from(bytes)
    }

    pub fn data1(&self) -> u32 {
        self.0
    }

    pub fn data2(&self) -> u16 {
        self.1
    }

    pub fn data3(&self) -> u16 {
        self.2
    }

    pub fn data4(&self) -> &[u8; 8] {
        &self.3
    }

    /// Reads a GUID from a little-endian byte stream.
    pub fn read_from<R: Read + Seek>(reader: &mut R) -> crate::Result<Self> {
        Ok(Self::read(reader)?)
    }

    /// Writes the GUID to a byte stream in little-endian layout.
    pub fn write_to<W: Write + Seek>(&self, writer: &mut W) -> crate::Result<()> {
        Ok(self.write(writer)?)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(value: [u8; 16]) -> Self {
        Self(
            u32::from_le_bytes([value[0], value[1], value[2], value[3]]),
            u16::from_le_bytes([value[4], value[5]]),
            u16::from_le_bytes([value[6], value[7]]),
            [
                value[8], value[9], value[10], value[11], value[12], value[13], value[14],
                value[15],
            ],
        )
    }
}

impl From<Guid> for [u8; 16] {
    fn from(val: Guid) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&val.0.to_le_bytes());
        bytes[4..6].copy_from_slice(&val.1.to_le_bytes());
        bytes[6..8].copy_from_slice(&val.2.to_le_bytes());
        bytes[8..16].copy_from_slice(&val.3);
        bytes
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = crate::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| crate::Error::InvalidLength(value.len()))?;
        Ok(Self::from(bytes))
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Print first fields in little endian, and the rest in big endian:
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:012x}",
            self.0,
            self.1,
            self.2,
            self.3[0],
            self.3[1],
            self.3[2..]
                .iter()
                .fold(0u64, |acc, &x| (acc << 8) + x as u64)
        )
    }
}

impl std::fmt::Debug for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
