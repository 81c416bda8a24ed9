use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid GUID length: expected 16 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Binrw Error: {0}")]
    BinRWError(#[from] binrw::Error),
}
