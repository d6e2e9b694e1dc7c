//! Consistency checks for generated or decoded tables.

use log::{debug, warn};

use crate::error::TableError;
use crate::table::{InverseSBoxTable, SBoxTable, TableKind, Tables};

/// Checks that `inverse_sbox` undoes `sbox` and vice versa.
///
/// Reports the first index where `inverse_sbox[sbox[i]] != i`. When that holds
/// for all 256 inputs, `sbox` is a permutation and `sbox[inverse_sbox[i]] == i`
/// follows.
pub fn check_bijection(
    sbox: &SBoxTable,
    inverse_sbox: &InverseSBoxTable,
) -> Result<(), TableError> {
    for i in 0..=u8::MAX {
        let forward = sbox.get(i);
        let backward = inverse_sbox.get(forward);
        if backward != i {
            return Err(report(TableError::BijectionViolation {
                index: i as usize,
                forward,
                backward,
            }));
        }
    }
    debug!("s-box and inverse s-box are mutually inverse");
    Ok(())
}

/// Compares two table sets element by element.
pub fn check_round_trip(original: &Tables, decoded: &Tables) -> Result<(), TableError> {
    for table in [TableKind::SBox, TableKind::InverseSBox, TableKind::Rcon] {
        let expected = original.bytes_of(table);
        let actual = decoded.bytes_of(table);
        if let Some((index, (&e, &a))) = expected
            .iter()
            .zip(actual.iter())
            .enumerate()
            .find(|(_, (e, a))| e != a)
        {
            return Err(report(TableError::RoundTripMismatch {
                table,
                index,
                expected: e,
                actual: a,
            }));
        }
        debug!("{table} matches");
    }
    Ok(())
}

fn report(err: TableError) -> TableError {
    warn!("{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::table::{RconTable, SBOX_LEN};

    fn identity() -> [u8; SBOX_LEN] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn generated_pair_is_bijective() {
        let (sbox, inverse) = Generator::new().generate_sbox().expect("generate");
        assert!(check_bijection(&sbox, &inverse).is_ok());
    }

    #[test]
    fn reports_first_bad_index() {
        let (sbox, inverse) = Generator::new().generate_sbox().expect("generate");
        let mut raw = *inverse.as_bytes();
        // sbox[1] = 0x7c, so inverse[0x7c] must be 1.
        raw[0x7c] = 0x02;
        let err = check_bijection(&sbox, &InverseSBoxTable::from(raw)).unwrap_err();
        assert_eq!(
            err,
            TableError::BijectionViolation {
                index: 1,
                forward: 0x7c,
                backward: 0x02,
            }
        );
    }

    #[test]
    fn non_permutation_is_rejected() {
        let mut raw = identity();
        raw[5] = 4;
        let sbox = SBoxTable::from(raw);
        let inverse = InverseSBoxTable::from(identity());
        assert!(matches!(
            check_bijection(&sbox, &inverse),
            Err(TableError::BijectionViolation { index: 5, .. })
        ));
    }

    #[test]
    fn accepted_pair_composes_in_reverse() {
        // x -> 7x + 3 is a permutation of the bytes, unrelated to the AES table.
        let sbox: [u8; SBOX_LEN] =
            core::array::from_fn(|i| (i as u8).wrapping_mul(7).wrapping_add(3));
        let mut inverse = [0u8; SBOX_LEN];
        for (i, &value) in sbox.iter().enumerate() {
            inverse[value as usize] = i as u8;
        }
        let (sbox, inverse) = (SBoxTable::from(sbox), InverseSBoxTable::from(inverse));
        check_bijection(&sbox, &inverse).expect("permutation pair");
        for i in 0..=u8::MAX {
            assert_eq!(sbox.get(inverse.get(i)), i);
        }
    }

    #[test]
    fn identical_sets_round_trip() {
        let tables = Generator::new().generate_tables().expect("generate");
        let copy = tables;
        assert!(check_round_trip(&tables, &copy).is_ok());
    }

    #[test]
    fn round_trip_reports_table_and_index() {
        let tables = Generator::new().generate_tables().expect("generate");
        let mut rcon = *tables.rcon().as_bytes();
        rcon[9] ^= 0xff;
        let altered = Tables::from_parts(
            *tables.sbox(),
            *tables.inverse_sbox(),
            RconTable::from(rcon),
        );
        let err = check_round_trip(&tables, &altered).unwrap_err();
        assert_eq!(
            err,
            TableError::RoundTripMismatch {
                table: TableKind::Rcon,
                index: 9,
                expected: 0x1b,
                actual: 0x1b ^ 0xff,
            }
        );
    }

    #[test]
    fn round_trip_checks_sbox_before_rcon() {
        let tables = Generator::new().generate_tables().expect("generate");
        let mut sbox = *tables.sbox().as_bytes();
        sbox[0] = 0x00;
        let altered = Tables::from_parts(
            SBoxTable::from(sbox),
            *tables.inverse_sbox(),
            RconTable::from([0u8; 10]),
        );
        assert!(matches!(
            check_round_trip(&tables, &altered),
            Err(TableError::RoundTripMismatch {
                table: TableKind::SBox,
                index: 0,
                expected: 0x63,
                actual: 0x00,
            })
        ));
    }
}
