//! Fixed-layout binary encoding of a table set.
//!
//! Layout: S-box (256 bytes), inverse S-box (256 bytes), Rcon (10 bytes). No
//! header, length prefix or checksum. bincode writes fixed-size arrays without
//! a length, so the wire struct below serializes to exactly that layout.

use log::debug;
use sbox_core::{InverseSBoxTable, RconTable, SBoxTable, Tables, RCON_LEN, SBOX_LEN};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::error::DecodeError;

/// Length of an encoded table set.
pub const BLOB_LEN: usize = SBOX_LEN + SBOX_LEN + RCON_LEN;

/// Byte offset of the inverse S-box.
pub const INVERSE_SBOX_OFFSET: usize = SBOX_LEN;

/// Byte offset of the Rcon table.
pub const RCON_OFFSET: usize = SBOX_LEN + SBOX_LEN;

#[derive(Serialize, Deserialize)]
struct WireTables {
    #[serde(with = "BigArray")]
    sbox: [u8; SBOX_LEN],
    #[serde(with = "BigArray")]
    inverse_sbox: [u8; SBOX_LEN],
    rcon: [u8; RCON_LEN],
}

impl From<&Tables> for WireTables {
    fn from(tables: &Tables) -> Self {
        Self {
            sbox: *tables.sbox().as_bytes(),
            inverse_sbox: *tables.inverse_sbox().as_bytes(),
            rcon: *tables.rcon().as_bytes(),
        }
    }
}

impl From<WireTables> for Tables {
    fn from(wire: WireTables) -> Self {
        Tables::from_parts(
            SBoxTable::from(wire.sbox),
            InverseSBoxTable::from(wire.inverse_sbox),
            RconTable::from(wire.rcon),
        )
    }
}

/// Serializes the tables into their [`BLOB_LEN`]-byte form.
pub fn encode(tables: &Tables) -> Result<Vec<u8>, bincode::Error> {
    let bytes = bincode::serialize(&WireTables::from(tables))?;
    debug_assert_eq!(bytes.len(), BLOB_LEN);
    Ok(bytes)
}

/// Deserializes tables from the first [`BLOB_LEN`] bytes of `bytes`.
///
/// Trailing bytes are ignored. Nothing is verified beyond length; pass the
/// result through [`sbox_core::check_bijection`] before trusting it.
pub fn decode(bytes: &[u8]) -> Result<Tables, DecodeError> {
    if bytes.len() < BLOB_LEN {
        return Err(DecodeError::TruncatedInput {
            needed: BLOB_LEN,
            got: bytes.len(),
        });
    }
    if bytes.len() > BLOB_LEN {
        debug!("ignoring {} trailing bytes", bytes.len() - BLOB_LEN);
    }
    let wire: WireTables = bincode::deserialize(&bytes[..BLOB_LEN])?;
    Ok(wire.into())
}
