//! Hexadecimal listings for display.
//!
//! Output is meant for people; nothing parses it back.

use core::fmt;

use sbox_core::Tables;

/// Values per output row.
pub const BYTES_PER_ROW: usize = 16;

/// A labelled table rendered as rows of upper-case hex.
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a> {
    label: &'a str,
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    /// Creates a dump of `bytes` under `label`.
    pub fn new(label: &'a str, bytes: &'a [u8]) -> Self {
        Self { label, bytes }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Hexadecimal):", self.label)?;
        for row in self.bytes.chunks(BYTES_PER_ROW) {
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{byte:02X}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// All three tables, one section each.
#[derive(Clone, Copy, Debug)]
pub struct TablesDump<'a>(pub &'a Tables);

impl fmt::Display for TablesDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.0;
        write!(f, "{}", HexDump::new("S-box", tables.sbox().as_bytes()))?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            HexDump::new("Inverse S-box", tables.inverse_sbox().as_bytes())
        )?;
        writeln!(f)?;
        write!(f, "{}", HexDump::new("Rcon", tables.rcon().as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::Generator;

    #[test]
    fn short_table_single_row() {
        let out = HexDump::new("Rcon", &[0x8d, 0x01, 0x1b]).to_string();
        assert_eq!(out, "Rcon (Hexadecimal):\n8D 01 1B\n");
    }

    #[test]
    fn rows_wrap_at_sixteen() {
        let bytes: Vec<u8> = (0..=16).collect();
        let out = HexDump::new("T", &bytes).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F");
        assert_eq!(lines[2], "10");
    }

    #[test]
    fn tables_dump_sections() {
        let tables = Generator::new().generate_tables().expect("generate");
        let out = TablesDump(&tables).to_string();
        let lines: Vec<&str> = out.lines().collect();
        // header + 16 rows, blank, header + 16 rows, blank, header + 1 row
        assert_eq!(lines.len(), 17 + 1 + 17 + 1 + 2);
        assert_eq!(lines[0], "S-box (Hexadecimal):");
        assert!(lines[1].starts_with("63 7C 77 7B"));
        assert!(lines[16].ends_with("BB 16"));
        assert_eq!(lines[18], "Inverse S-box (Hexadecimal):");
        assert!(lines[19].starts_with("52 09 6A D5"));
        assert_eq!(lines[36], "Rcon (Hexadecimal):");
        assert_eq!(lines[37], "8D 01 02 04 08 10 20 40 80 1B");
    }
}
