//! Table types produced by the generator and consumed by the codec and verifier.

use core::fmt;

/// Number of entries in the forward and inverse S-box.
pub const SBOX_LEN: usize = 256;

/// Number of round constants.
pub const RCON_LEN: usize = 10;

/// Identifies one of the three tables in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Forward substitution box.
    SBox,
    /// Inverse substitution box.
    InverseSBox,
    /// Round constants.
    Rcon,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SBox => "S-box",
            Self::InverseSBox => "Inverse S-box",
            Self::Rcon => "Rcon",
        };
        f.write_str(name)
    }
}

/// Forward AES substitution table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SBoxTable([u8; SBOX_LEN]);

impl SBoxTable {
    /// Substitutes a single byte.
    #[inline]
    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    /// Raw entries in index order.
    pub fn as_bytes(&self) -> &[u8; SBOX_LEN] {
        &self.0
    }
}

impl From<[u8; SBOX_LEN]> for SBoxTable {
    fn from(value: [u8; SBOX_LEN]) -> Self {
        Self(value)
    }
}

/// Inverse AES substitution table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InverseSBoxTable([u8; SBOX_LEN]);

impl InverseSBoxTable {
    /// Reverses the substitution of a single byte.
    #[inline]
    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    /// Raw entries in index order.
    pub fn as_bytes(&self) -> &[u8; SBOX_LEN] {
        &self.0
    }
}

impl From<[u8; SBOX_LEN]> for InverseSBoxTable {
    fn from(value: [u8; SBOX_LEN]) -> Self {
        Self(value)
    }
}

/// Round-constant sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RconTable([u8; RCON_LEN]);

impl RconTable {
    /// Returns the constant at `index` (0..10).
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Raw entries in index order.
    pub fn as_bytes(&self) -> &[u8; RCON_LEN] {
        &self.0
    }
}

impl From<[u8; RCON_LEN]> for RconTable {
    fn from(value: [u8; RCON_LEN]) -> Self {
        Self(value)
    }
}

/// The three tables that are persisted and verified together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tables {
    sbox: SBoxTable,
    inverse_sbox: InverseSBoxTable,
    rcon: RconTable,
}

impl Tables {
    /// Assembles a table set from its parts.
    ///
    /// Nothing is checked here; decoded tables should go through
    /// [`check_bijection`](crate::check_bijection) before use.
    pub fn from_parts(sbox: SBoxTable, inverse_sbox: InverseSBoxTable, rcon: RconTable) -> Self {
        Self {
            sbox,
            inverse_sbox,
            rcon,
        }
    }

    /// Forward S-box.
    pub fn sbox(&self) -> &SBoxTable {
        &self.sbox
    }

    /// Inverse S-box.
    pub fn inverse_sbox(&self) -> &InverseSBoxTable {
        &self.inverse_sbox
    }

    /// Round constants.
    pub fn rcon(&self) -> &RconTable {
        &self.rcon
    }

    /// Raw bytes of the named table.
    pub fn bytes_of(&self, kind: TableKind) -> &[u8] {
        match kind {
            TableKind::SBox => self.sbox.as_bytes(),
            TableKind::InverseSBox => self.inverse_sbox.as_bytes(),
            TableKind::Rcon => self.rcon.as_bytes(),
        }
    }
}
