/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::{IBig, UBig};

pub fn to_ibig_be(bytes: &[u8]) -> IBig {
    IBig::from(UBig::from_be_bytes(bytes))
}

/// Upper-case hex, two digits per byte.
pub fn to_hex(b: &[u8]) -> String {
    hex::encode_upper(b)
}
