//! AES substitution tables and round constants built from GF(2^8) arithmetic.
//!
//! This crate has no I/O and provides:
//! - Field primitives over the AES reduction polynomial `0x11b`.
//! - Generation of the S-box, its inverse and the Rcon sequence.
//! - Verification of bijectivity and table-by-table equality.
//!
//! Tables are built once and are read-only afterwards. The implementation aims
//! for clarity rather than speed or constant-time behaviour.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod field;
mod generator;
mod table;
mod verify;

pub use crate::error::TableError;
pub use crate::field::{
    affine_transform, gf_inverse, gf_multiply, rotate_left8, xtime, AFFINE_CONSTANT,
    REDUCTION_POLY,
};
pub use crate::generator::{Generator, GeneratorConfig, DEFAULT_RCON_SEED};
pub use crate::table::{
    InverseSBoxTable, RconTable, SBoxTable, TableKind, Tables, RCON_LEN, SBOX_LEN,
};
pub use crate::verify::{check_bijection, check_round_trip};
