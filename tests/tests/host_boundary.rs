//! The registry as a managed host would drive it

use saltwrap::prelude::*;
use saltwrap_tests::{vectors, Fixtures};

fn bytes(v: Value) -> Vec<u8> {
    match v {
        Value::Bytes(b) => b,
        other => panic!("expected bytes, got {:?}", other),
    }
}

#[test]
fn every_function_checks_types_before_lengths() {
    let nacl = NaCl::init();

    for module in nacl.module_names() {
        let m = nacl.module(module).unwrap();
        for name in m.function_names() {
            let f = m.get_function(name).unwrap();

            // each position in turn gets a non-string; the others are
            // byte strings of a length no function accepts as key or nonce
            for (position, &param) in f.params().iter().enumerate() {
                for bad in [Value::Int(1), Value::symbol("x"), Value::Bool(true), Value::Nil] {
                    let mut args = vec![Value::from(vec![0u8; 3]); f.arity()];
                    let found = bad.type_name();
                    args[position] = bad;

                    let err = nacl.call(module, name, &args).unwrap_err();
                    assert_eq!(
                        err,
                        Error::TypeMismatch {
                            context: param,
                            expected: "String",
                            found,
                        },
                        "{}.{} argument {}",
                        module,
                        name,
                        position
                    );
                }
            }
        }
    }
}

#[test]
fn text_strings_are_byte_strings() {
    let nacl = NaCl::init();
    let d = nacl
        .call("Hash::SHA512", "digest", &[Value::from("abc")])
        .unwrap();
    assert_eq!(hex::encode(bytes(d)), vectors::SHA512_ABC);
}

#[test]
fn registry_matches_direct_calls() {
    let nacl = NaCl::init();
    let mut fx = Fixtures::new(7);
    let key = fx.secretbox_key();
    let nonce = fx.nonce();
    let message = fx.message(64);

    let via_host = bytes(
        nacl.call(
            "SecretBox",
            "secretbox",
            &[Value::from(message.clone()), Value::from(nonce), Value::from(key)],
        )
        .unwrap(),
    );
    assert_eq!(via_host, secretbox::secretbox(&message, &nonce, &key).unwrap());

    let tag = bytes(
        nacl.call(
            "Auth::HMACSHA512256",
            "auth",
            &[Value::from(vectors::jefe_key().to_vec()), Value::from(vectors::jefe_key())],
        )
        .unwrap(),
    );
    assert_eq!(tag, auth::auth(&vectors::jefe_key(), &vectors::jefe_key()).unwrap());
}

#[test]
fn constants_match_invoker_lengths() {
    let nacl = NaCl::init();
    let int = |m: &str, c: &str| nacl.constant(m, c).and_then(Value::as_int);

    assert_eq!(int("SecretBox", "KEY_LEN"), Some(secretbox::KEY_LEN as i64));
    assert_eq!(int("SecretBox", "NONCE_LEN"), Some(secretbox::NONCE_LEN as i64));
    assert_eq!(int("Auth::HMACSHA512256", "HMAC_LEN"), Some(auth::HMAC_LEN as i64));
    assert_eq!(int("Hash::SHA512", "HASH_LEN"), Some(hash::HASH_LEN as i64));

    for module in nacl.module_names() {
        let primitive = nacl.constant(module, "PRIMITIVE").and_then(Value::as_symbol);
        let primitive = primitive.unwrap().parse::<Primitive>().unwrap();
        assert_ne!(primitive, Primitive::Pbkdf2);
    }
}

#[test]
fn forged_ciphertext_surfaces_as_primitive_failure() {
    let nacl = NaCl::init();
    let args = [Value::from([0u8; 20]), Value::from([0u8; 24]), Value::from([0u8; 32])];

    assert_eq!(
        nacl.call("SecretBox", "secretbox_open", &args),
        Err(Error::PrimitiveFailure {
            primitive: "crypto_secretbox_open"
        })
    );
}
