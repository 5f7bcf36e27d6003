//! End-to-end checks through the facade crate

use saltwrap::prelude::*;
use saltwrap_tests::{vectors, Fixtures};

#[test]
fn sha512_known_answers() {
    assert_eq!(hex::encode(hash::digest(b"").unwrap()), vectors::SHA512_EMPTY);
    assert_eq!(hex::encode(hash::digest(b"abc").unwrap()), vectors::SHA512_ABC);
}

#[test]
fn hmacsha512256_known_answer() {
    let tag = auth::auth(b"what do ya want for nothing?", &vectors::jefe_key()).unwrap();
    assert_eq!(hex::encode(&tag), vectors::HMAC_JEFE);
    assert!(auth::auth_verify(&tag, b"what do ya want for nothing?", &vectors::jefe_key()).unwrap());
}

#[test]
fn zero_key_and_nonce_hello() {
    let key = [0u8; 32];
    let nonce = [0u8; 24];

    let first = secretbox::secretbox(b"hello", &nonce, &key).unwrap();
    for _ in 0..3 {
        assert_eq!(secretbox::secretbox(b"hello", &nonce, &key).unwrap(), first);
    }
    assert_eq!(hex::encode(&first), vectors::SECRETBOX_ZERO_HELLO);
    assert_eq!(secretbox::secretbox_open(&first, &nonce, &key).unwrap(), b"hello");
}

#[test]
fn empty_message_round_trip() {
    let mut fx = Fixtures::new(11);
    let key = fx.secretbox_key();
    let nonce = fx.nonce();

    let ciphertext = secretbox::secretbox(b"", &nonce, &key).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert!(secretbox::secretbox_open(&ciphertext, &nonce, &key).unwrap().is_empty());

    assert!(matches!(
        secretbox::secretbox_open(b"", &nonce, &key),
        Err(Error::LengthMismatch { expected: 16, actual: 0, .. })
    ));
}

#[test]
fn invokers_are_send_and_sync() {
    fn check<T: Send + Sync + Copy + Default>() {}
    check::<SecretBox>();
    check::<Auth>();
    check::<Hash>();
}

#[test]
fn invokers_share_nothing_across_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut fx = Fixtures::new(seed);
                let key = fx.secretbox_key();
                let nonce = fx.nonce();
                let message = fx.message(1000);

                let c = SecretBox::new().seal(&message, &nonce, &key).unwrap();
                assert_eq!(SecretBox::new().open(&c, &nonce, &key).unwrap(), message);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn derived_key_authenticates_message() {
    let kdf = Pbkdf2::new(Pbkdf2Params::new(auth::KEY_LEN).with_cost(50)).unwrap();
    let key = kdf.derive(b"password", b"pepper").unwrap();

    let msg = AuthenticatedMessage::new(key.as_slice(), b"transfer 10 coins").unwrap();
    let text = msg.to_string();

    let parsed: AuthenticatedMessage = text.parse().unwrap();
    assert_eq!(parsed.contents(key.as_slice()).unwrap(), b"transfer 10 coins");

    let other = kdf.derive(b"passw0rd", b"pepper").unwrap();
    assert!(matches!(
        parsed.contents(other.as_slice()),
        Err(Error::PrimitiveFailure { .. })
    ));
}

#[test]
fn derived_key_opens_secretbox() {
    let kdf = Pbkdf2::new(Pbkdf2Params::new(secretbox::KEY_LEN).with_cost(10)).unwrap();
    let key = kdf.derive(b"hunter2", b"salt").unwrap();
    let nonce = [1u8; secretbox::NONCE_LEN];

    let c = secretbox::secretbox(b"data", &nonce, key.as_slice()).unwrap();
    assert_eq!(secretbox::secretbox_open(&c, &nonce, key.as_slice()).unwrap(), b"data");
}

#[test]
fn authenticated_message_serde_json() {
    let key = [5u8; 32];
    let msg = AuthenticatedMessage::new(&key, b"json").unwrap();

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"context\":\"authenticated_message\""));
    assert!(json.contains("\"primitive\":\"hmacsha512256\""));

    let back: AuthenticatedMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, msg);
    assert_eq!(back.contents(&key).unwrap(), b"json");

    // validation runs on deserialization too
    let forged = json.replace("authenticated_message", "encrypted_message");
    assert!(serde_json::from_str::<AuthenticatedMessage>(&forged).is_err());
}

#[test]
fn primitive_identifiers() {
    for p in Primitive::ALL {
        assert_eq!(Primitive::from_id(p.id()).unwrap(), p);
        assert_eq!(p.name().parse::<Primitive>().unwrap(), p);
    }
    assert_eq!(Primitive::HmacSha512256.id(), 101);
    assert_eq!(serde_json::to_string(&Primitive::Sha512).unwrap(), "\"sha512\"");
}

#[test]
fn reexported_crates_match_public_types() {
    use saltwrap::internal::constant_time::ct_eq_choice;
    use saltwrap::subtle::Choice;
    use saltwrap::zeroize::Zeroize;

    let kdf = Pbkdf2::new(Pbkdf2Params::new(32).with_cost(2)).unwrap();
    let mut key = kdf.derive(b"password", b"salt").unwrap();
    let same: Choice = ct_eq_choice(key.as_slice(), kdf.derive(b"password", b"salt").unwrap());
    assert!(bool::from(same));

    key.zeroize();
    assert!(key.is_empty());
}
