//! S-box, inverse S-box and Rcon construction.

use log::debug;

use crate::error::TableError;
use crate::field::{affine_transform, gf_inverse, AFFINE_CONSTANT, REDUCTION_POLY};
use crate::table::{
    InverseSBoxTable, RconTable, SBoxTable, TableKind, Tables, RCON_LEN, SBOX_LEN,
};

/// First round constant used when none is configured.
pub const DEFAULT_RCON_SEED: u8 = 0x8d;

/// Configuration for the generator.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Value placed at `rcon[0]`; every later entry doubles the previous one.
    pub rcon_seed: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rcon_seed: DEFAULT_RCON_SEED,
        }
    }
}

/// Deterministic table generator.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with explicit configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    /// Builds the forward S-box and its inverse.
    ///
    /// Entry `i` is `affine(i^-1)`, with zero mapped to `0x63`. The inverse is
    /// filled in the same pass; a repeated forward value is reported as a
    /// [`TableError::BijectionViolation`] instead of producing a broken pair.
    pub fn generate_sbox(&self) -> Result<(SBoxTable, InverseSBoxTable), TableError> {
        let mut sbox = [0u8; SBOX_LEN];
        let mut inverse = [0u8; SBOX_LEN];
        let mut filled = [false; SBOX_LEN];

        for element in 0..=u8::MAX {
            sbox[element as usize] = match gf_inverse(element) {
                Some(inv) => affine_transform(inv),
                None => AFFINE_CONSTANT,
            };
        }

        for index in 0..=u8::MAX {
            let value = sbox[index as usize];
            let slot = value as usize;
            if filled[slot] {
                return Err(TableError::BijectionViolation {
                    index: index as usize,
                    forward: value,
                    backward: inverse[slot],
                });
            }
            inverse[slot] = index;
            filled[slot] = true;
        }

        debug!(
            "generated s-box: sbox[0]={:#04x} sbox[1]={:#04x} sbox[255]={:#04x}",
            sbox[0], sbox[1], sbox[255]
        );
        Ok((SBoxTable::from(sbox), InverseSBoxTable::from(inverse)))
    }

    /// Builds the round-constant sequence by repeated doubling from the seed.
    pub fn generate_rcon(&self) -> Result<RconTable, TableError> {
        let mut rcon = [0u8; RCON_LEN];
        rcon[0] = self.config.rcon_seed;

        let mut current = u16::from(self.config.rcon_seed);
        for (index, entry) in rcon.iter_mut().enumerate().skip(1) {
            current <<= 1;
            if current & 0x100 != 0 {
                current ^= REDUCTION_POLY;
            }
            *entry = narrow(TableKind::Rcon, index, current)?;
        }

        debug!("generated rcon: {:02x?}", rcon);
        Ok(RconTable::from(rcon))
    }

    /// Builds all three tables.
    pub fn generate_tables(&self) -> Result<Tables, TableError> {
        let (sbox, inverse_sbox) = self.generate_sbox()?;
        let rcon = self.generate_rcon()?;
        Ok(Tables::from_parts(sbox, inverse_sbox, rcon))
    }
}

fn narrow(table: TableKind, index: usize, value: u16) -> Result<u8, TableError> {
    u8::try_from(value).map_err(|_| TableError::FieldValueOutOfRange {
        table,
        index,
        value,
    })
}
