//! Scratch ledger checks across every invoker and exit path

use saltwrap::prelude::*;
use saltwrap_common::ledger;
use saltwrap_tests::Fixtures;

fn assert_clean(what: &str) {
    let l = ledger::snapshot();
    assert_eq!(l.live(), 0, "{}: scratch still live", what);
    assert_eq!(l.unwiped(), 0, "{}: scratch released unwiped", what);
}

#[test]
fn success_paths_release_wiped_scratch() {
    let mut fx = Fixtures::new(1);
    let key = fx.secretbox_key();
    let nonce = fx.nonce();
    let message = fx.message(300);

    ledger::reset();
    let ciphertext = secretbox::secretbox(&message, &nonce, &key).unwrap();
    secretbox::secretbox_open(&ciphertext, &nonce, &key).unwrap();
    let tag = auth::auth(&message, &key).unwrap();
    auth::auth_verify(&tag, &message, &key).unwrap();
    hash::digest(&message).unwrap();

    // two per secret-box call, one for auth, two for the digest
    assert_eq!(ledger::snapshot().acquired, 2 + 2 + 1 + 2);
    assert_clean("success");
}

#[test]
fn primitive_failure_releases_wiped_scratch() {
    let mut fx = Fixtures::new(2);
    let key = fx.secretbox_key();
    let nonce = fx.nonce();

    let mut ciphertext = secretbox::secretbox(b"attack at dawn", &nonce, &key).unwrap();
    ciphertext[0] ^= 0xFF;

    ledger::reset();
    assert!(matches!(
        secretbox::secretbox_open(&ciphertext, &nonce, &key),
        Err(Error::PrimitiveFailure { .. })
    ));
    assert_eq!(ledger::snapshot().acquired, 2);
    assert_clean("forged open");
}

#[test]
fn every_allocation_failure_is_out_of_memory() {
    let mut fx = Fixtures::new(3);
    let key = fx.secretbox_key();
    let nonce = fx.nonce();
    let ciphertext = secretbox::secretbox(b"plaintext", &nonce, &key).unwrap();

    let calls: [(&str, usize, &dyn Fn() -> Result<Vec<u8>>); 4] = [
        ("secretbox", 2, &|| secretbox::secretbox(b"plaintext", &nonce, &key)),
        ("secretbox_open", 2, &|| secretbox::secretbox_open(&ciphertext, &nonce, &key)),
        ("auth", 1, &|| auth::auth(b"plaintext", &key)),
        ("digest", 2, &|| hash::digest(b"plaintext")),
    ];

    for (name, acquisitions, call) in calls.iter() {
        for n in 1..=*acquisitions {
            ledger::reset();
            ledger::fail_nth_acquisition(n);

            assert!(
                matches!(call(), Err(Error::OutOfMemory { .. })),
                "{}: acquisition {} did not fail",
                name,
                n
            );
            let l = ledger::snapshot();
            assert_eq!(l.faults_injected, 1);
            assert_eq!(l.acquired, n - 1);
            assert_clean(name);
        }
    }
}

#[test]
fn validation_failure_touches_no_scratch() {
    ledger::reset();

    assert!(secretbox::secretbox(b"m", &[0u8; 23], &[0u8; 32]).is_err());
    assert!(secretbox::secretbox_open(b"short", &[0u8; 24], &[0u8; 32]).is_err());
    assert!(auth::auth(b"m", &[0u8; 31]).is_err());
    assert!(auth::auth_verify(&[0u8; 16], b"m", &[0u8; 32]).is_err());

    assert_eq!(ledger::snapshot(), ledger::Ledger::default());
}

#[test]
fn pbkdf2_and_authenticated_messages_release_wiped_scratch() {
    ledger::reset();

    let kdf = Pbkdf2::new(Pbkdf2Params::new(32).with_cost(10)).unwrap();
    let key = kdf.derive(b"correct horse", b"battery staple").unwrap();
    let msg = AuthenticatedMessage::new(key.as_slice(), b"payload").unwrap();
    msg.contents(key.as_slice()).unwrap();

    assert!(ledger::snapshot().acquired > 0);
    assert_clean("pbkdf2");
}

#[test]
fn skipped_wipe_is_reported() {
    let key = [7u8; 32];

    ledger::reset();
    ledger::skip_next_wipe();
    auth::auth(b"plaintext", &key).unwrap();

    let l = ledger::snapshot();
    assert_eq!(l.live(), 0);
    assert_eq!(l.unwiped(), 1);
    assert!(!l.is_clean());
}
