//! Normalisation properties over a spread of messy real-world inputs

use b64_inspect::decoder::decode_base64;
use b64_inspect::errors::AppError;
use b64_inspect::shared::normalize_base64;

use crate::common::{b64, wrap, PNG_B64};

const SAMPLES: &[&str] = &[
    "",
    "SGVsbG8=",
    "data:image/png;base64,iVBORw0KGgo=",
    "-----BEGIN CERT-----\nMIIB\r\nIjAN\n-----END CERT-----",
    "```json\neyJhIjogMX0=\n```",
    "  S G V s\tb G 8 =  ",
    "héllo wörld ✓ ~!@#$%^&*()",
    "\u{00A0}\u{2028}SGk=\u{FEFF}",
];

fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

#[test]
fn test_output_only_contains_alphabet() {
    for sample in SAMPLES {
        let cleaned = normalize_base64(sample);
        assert!(
            cleaned.chars().all(in_alphabet),
            "{:?} normalised to {:?}",
            sample,
            cleaned
        );
    }
}

#[test]
fn test_normalisation_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize_base64(sample).into_owned();
        let twice = normalize_base64(&once).into_owned();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_line_wrapped_payload_survives() {
    let wrapped = wrap(PNG_B64, 76);
    assert!(wrapped.contains('\n'));
    assert_eq!(normalize_base64(&wrapped), PNG_B64);
}

#[test]
fn test_padding_is_not_repaired() {
    // Stray characters are dropped but a missing "=" is left for the decoder to reject
    let cleaned = normalize_base64("SGVs bG8");
    assert_eq!(cleaned, "SGVsbG8");
    assert!(matches!(
        decode_base64(&cleaned),
        Err(AppError::MalformedInput(_))
    ));
}

#[test]
fn test_url_safe_alphabet_is_stripped() {
    // '-' and '_' are not part of the standard alphabet
    let encoded = b64(&[0xFB, 0xFF, 0xBF]);
    assert_eq!(encoded, "+/+/");
    assert_eq!(normalize_base64("-_-_"), "");
}
