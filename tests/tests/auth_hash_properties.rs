//! Property-based tests for the authenticator and hash invokers

use proptest::prelude::*;
use saltwrap::prelude::*;

proptest! {
    #[test]
    fn auth_verifies_own_tag(
        key in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let tag = auth::auth(&message, &key).unwrap();
        prop_assert_eq!(tag.len(), auth::HMAC_LEN);
        prop_assert!(auth::auth_verify(&tag, &message, &key).unwrap());
    }

    #[test]
    fn auth_bit_flip_is_false(
        key in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..128),
        position in 0usize..32,
        bit in 0u8..8
    ) {
        let mut tag = auth::auth(&message, &key).unwrap();
        tag[position] ^= 1 << bit;
        prop_assert_eq!(auth::auth_verify(&tag, &message, &key), Ok(false));
    }

    #[test]
    fn auth_verify_rejects_malformed_tag(
        tag in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(tag.len() != auth::HMAC_LEN);

        let result = auth::auth_verify(&tag, b"message", &[0u8; 32]);
        prop_assert_eq!(
            result,
            Err(Error::LengthMismatch {
                context: "authenticator",
                expected: auth::HMAC_LEN,
                actual: tag.len(),
            })
        );
    }

    #[test]
    fn digest_is_deterministic(message in prop::collection::vec(any::<u8>(), 0..1024)) {
        let a = hash::digest(&message).unwrap();
        let b = hash::digest(&message).unwrap();
        prop_assert_eq!(a.len(), hash::HASH_LEN);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn digest_differs_for_different_messages(
        a in prop::collection::vec(any::<u8>(), 0..128),
        b in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(hash::digest(&a).unwrap(), hash::digest(&b).unwrap());
    }
}
