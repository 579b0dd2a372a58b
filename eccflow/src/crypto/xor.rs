/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * Repeating-key XOR. Applying it twice with the same key gives back the
 * input. It only shows that both sides of an ECDH exchange hold the same
 * key; it is not encryption.
 *
 */

use crate::error::EccError;

pub fn transform_in_place(data: &mut [u8], key: &[u8]) -> Result<(), EccError> {
    if key.is_empty() {
        return Err(EccError::EmptyKey);
    }
    for (byte, k) in data.iter_mut().zip(key.iter().cycle()) {
        *byte ^= k;
    }
    Ok(())
}

pub fn transform(data: &[u8], key: &[u8]) -> Result<Vec<u8>, EccError> {
    let mut out = data.to_vec();
    transform_in_place(&mut out, key)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{transform, transform_in_place};
    use crate::error::EccError;
    use proptest::prelude::*;

    #[test]
    fn test_key_repeats() {
        let out = transform(&[0x00, 0x00, 0x00, 0xff, 0xff], &[0x01, 0x02]).unwrap();
        assert_eq!(out, vec![0x01, 0x02, 0x01, 0xfd, 0xfe]);
    }

    #[test]
    fn test_empty_key() {
        assert!(matches!(transform(b"hello", &[]), Err(EccError::EmptyKey)));
        let mut buf = *b"hello";
        assert!(transform_in_place(&mut buf, &[]).is_err());
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(transform(&[], &[1, 2, 3]).unwrap(), Vec::<u8>::new());
    }

    proptest! {
        #[test]
        fn prop_self_inverse(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            key in proptest::collection::vec(any::<u8>(), 1..64),
        ) {
            let once = transform(&data, &key).unwrap();
            let twice = transform(&once, &key).unwrap();
            prop_assert_eq!(twice, data);
        }
    }
}
