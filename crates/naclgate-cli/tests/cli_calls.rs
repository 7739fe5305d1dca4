//! End-to-end calls through the command-line argument forms.

use naclgate_cli::{CliError, call, constant};
use naclgate_core::{ErrorKind, Gateway};
use proptest::prelude::*;

fn run(gateway: &Gateway, operation: &str, args: &[&str]) -> Result<String, CliError> {
    let args: Vec<String> = args.iter().map(|a| (*a).to_owned()).collect();
    let mut out = Vec::new();
    call(gateway, operation, &args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

/// Parse `publicKey: ..` / `secretKey: ..` lines into hex strings.
fn keypair(output: &str) -> (String, String) {
    let mut public = None;
    let mut secret = None;
    for line in output.lines() {
        if let Some(hex) = line.strip_prefix("publicKey: ") {
            public = Some(hex.to_owned());
        } else if let Some(hex) = line.strip_prefix("secretKey: ") {
            secret = Some(hex.to_owned());
        }
    }
    (public.unwrap(), secret.unwrap())
}

#[test]
fn sign_then_open_as_text() {
    let gateway = Gateway::new();
    let (pk, sk) = keypair(&run(&gateway, "sign_keypair", &[]).unwrap());

    let signed = run(&gateway, "sign", &["text:Hello World!", &format!("hex:{sk}")]).unwrap();
    let opened =
        run(&gateway, "sign_open_utf8", &[&format!("hex:{}", signed.trim()), &format!("hex:{pk}")])
            .unwrap();

    assert_eq!(opened, "Hello World!\n");
}

#[test]
fn secretbox_round_trip_through_hex() {
    let gateway = Gateway::new();
    let key = run(&gateway, "secretbox_keygen", &[]).unwrap();
    let nonce = run(&gateway, "secretbox_random_nonce", &[]).unwrap();
    let key = format!("hex:{}", key.trim());
    let nonce = format!("hex:{}", nonce.trim());

    let sealed = run(&gateway, "secretbox", &["text:attack at dawn", &nonce, &key]).unwrap();
    let opened =
        run(&gateway, "secretbox_open_utf8", &[&format!("hex:{}", sealed.trim()), &nonce, &key])
            .unwrap();

    assert_eq!(opened, "attack at dawn\n");
}

#[test]
fn auth_verify_success_prints_nothing() {
    let gateway = Gateway::new();
    let key = format!("hex:{}", "11".repeat(32));
    let tag = run(&gateway, "auth", &["text:m", &key]).unwrap();

    let verified = run(&gateway, "auth_verify", &[&format!("hex:{}", tag.trim()), "text:m", &key]);
    assert_eq!(verified.unwrap(), "");
}

#[test]
fn gateway_rejection_carries_its_kind() {
    let gateway = Gateway::new();
    let pk = format!("hex:{}", "00".repeat(32));

    let err = run(&gateway, "sign_open", &["text:too short", &pk]).unwrap_err();

    let CliError::Gateway(inner) = &err else { panic!("expected gateway error, got {err}") };
    assert_eq!(inner.kind(), ErrorKind::BadSignature);
    assert_eq!(err.to_string(), "BadSignatureError: message is smaller than the minimum signed message size");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn malformed_argument_never_reaches_the_gateway() {
    let gateway = Gateway::new();

    let err = run(&gateway, "hash", &["hex:abc"]).unwrap_err();
    assert!(matches!(err, CliError::Argument { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn randombytes_takes_a_u32() {
    let gateway = Gateway::new();

    let out = run(&gateway, "randombytes", &["u32:16"]).unwrap();
    assert_eq!(out.trim().len(), 32);

    let err = run(&gateway, "randombytes", &["u32:256"]).unwrap_err();
    let CliError::Gateway(inner) = err else { panic!("expected gateway error") };
    assert_eq!(inner.kind(), ErrorKind::Argument);
}

#[test]
fn single_constant_by_name() {
    let mut out = Vec::new();
    constant(Some("box_NONCEBYTES"), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "24\n");

    let mut all = Vec::new();
    constant(None, &mut all).unwrap();
    assert!(String::from_utf8(all).unwrap().contains("sign_SECRETKEYBYTES = 64\n"));
}

#[test]
fn unknown_constant_is_a_usage_error() {
    let err = constant(Some("box_BEFORENMBYTES"), &mut Vec::new()).unwrap_err();

    assert!(matches!(err, CliError::Argument { .. }));
    assert_eq!(err.exit_code(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_hash_of_text_equals_hash_of_its_hex(message in "[ -~]{0,64}") {
        let gateway = Gateway::new();

        let from_text = run(&gateway, "hash", &[&format!("text:{message}")]).unwrap();
        let from_hex = run(&gateway, "hash", &[&format!("hex:{}", hex::encode(&message))]).unwrap();

        prop_assert_eq!(from_text, from_hex);
    }
}
