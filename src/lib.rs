//! Random GUID generation in the Windows little-endian field layout.
//!
//! POSIX-family UUID generators emit all 16 bytes in the fixed RFC 4122
//! byte sequence, where the first three fields are encoded big-endian. A
//! Windows-style `GUID` structure stores those same three fields (one
//! `u32`, two `u16`) little-endian instead, with the trailing 8 bytes kept
//! as an opaque array. This crate generates a random (UUIDv4) value and
//! performs that byte-order normalization, so the result matches the
//! in-memory layout GUID consumers expect on every host platform.
//!
//! The deterministic layout conversion ([`swap_uuid_fields`]) is separated
//! from the entropy source ([`UuidSource`]), so the conversion is fully
//! unit-testable and callers on exotic targets can inject their own source.
//!
//! ```
//! let mut guid = [0u8; 16];
//! winguid::fill_guid(&mut guid);
//! assert_ne!(guid, [0u8; 16]);
//! ```

pub mod error;
pub mod guid;
pub mod source;

#[cfg(feature = "os-rng")]
pub use guid::fill_guid;
pub use guid::{fill_guid_from, swap_uuid_fields, Guid};
#[cfg(feature = "os-rng")]
pub use source::OsUuidSource;
pub use source::UuidSource;

pub use error::Error;

pub type Result<T> = std::result::Result<T, crate::Error>;
