//! Persistence and display for AES tables built by `sbox-core`.
//!
//! The binary codec is the only lossless form; the hex dump is for reading.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod dump;
mod error;
mod store;

pub use codec::{decode, encode, BLOB_LEN, INVERSE_SBOX_OFFSET, RCON_OFFSET};
pub use dump::{HexDump, TablesDump, BYTES_PER_ROW};
pub use error::{DecodeError, StoreError};
pub use store::{
    ensure_dir, read_tables, write_tables, StoreConfig, DEFAULT_DIR, DEFAULT_FILE_NAME,
};
