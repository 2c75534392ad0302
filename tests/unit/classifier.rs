//! Classifier rule order and totality

use b64_inspect::types::content_detection::{
    AudioFormat, ContentType, DocumentFormat, ImageFormat, SourceFormat, StructuredFormat,
    TextFormat, TEXT_WINDOW,
};
use b64_inspect::types::guess_file_extension;

use crate::common::riff;

#[test]
fn test_png_header() {
    let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
    assert_eq!(guess_file_extension(&bytes), ".png");
}

#[test]
fn test_riff_forms() {
    assert_eq!(
        ContentType::detect(&riff(b"WAVE")),
        ContentType::Audio(AudioFormat::Wav)
    );
    assert_eq!(
        ContentType::detect(&riff(b"WEBP")),
        ContentType::Image(ImageFormat::WebP)
    );
    // AVI is RIFF too but unclaimed; the rest of the header is not printable
    assert_eq!(ContentType::detect(&riff(b"AVI ")), ContentType::Binary);
}

#[test]
fn test_riff_too_short_for_form_type() {
    // "RIFF" alone is printable text
    assert_eq!(
        ContentType::detect(b"RIFF"),
        ContentType::Text(TextFormat::PlainText)
    );
}

#[test]
fn test_text_heuristics() {
    let cases: &[(&[u8], ContentType)] = &[
        (br#"{"a": 1}"#, ContentType::Structured(StructuredFormat::Json)),
        (b"  [1, 2, 3]", ContentType::Structured(StructuredFormat::Json)),
        (
            b"<!DOCTYPE html><html>",
            ContentType::Document(DocumentFormat::Html),
        ),
        (
            b"<svg xmlns=\"http://www.w3.org/2000/svg\">",
            ContentType::Image(ImageFormat::Svg),
        ),
        (
            b"const x = () => 1;",
            ContentType::Source(SourceFormat::JavaScript),
        ),
        (
            b"public class Main {",
            ContentType::Source(SourceFormat::Java),
        ),
        (b"#include <stdio.h>", ContentType::Source(SourceFormat::C)),
        (
            b"<?xml version=\"1.0\"?><a/>",
            ContentType::Structured(StructuredFormat::Xml),
        ),
        (
            b"this is base64 text",
            ContentType::Text(TextFormat::Base64),
        ),
        (
            b"Just some notes.\r\n",
            ContentType::Text(TextFormat::PlainText),
        ),
    ];

    for (bytes, expected) in cases {
        assert_eq!(
            ContentType::detect(bytes),
            *expected,
            "{:?}",
            String::from_utf8_lossy(bytes)
        );
    }
}

#[test]
fn test_earlier_rules_win() {
    // Signature beats any text rule
    let mut gif = b"GIF89a".to_vec();
    gif.extend_from_slice(b"<html>");
    assert_eq!(
        ContentType::detect(&gif),
        ContentType::Image(ImageFormat::Gif)
    );

    // SVG beats HTML when both keywords appear
    assert_eq!(
        ContentType::detect(b"<html><svg></svg></html>"),
        ContentType::Image(ImageFormat::Svg)
    );

    // A JSON object that mentions "function" is still JSON
    assert_eq!(
        ContentType::detect(br#"{"function": "x"}"#),
        ContentType::Structured(StructuredFormat::Json)
    );
}

#[test]
fn test_keywords_beyond_window_are_ignored() {
    let mut text = vec![b'x'; TEXT_WINDOW];
    text.extend_from_slice(b" function");
    assert_eq!(
        ContentType::detect(&text),
        ContentType::Text(TextFormat::PlainText)
    );
}

#[test]
fn test_classification_is_total() {
    // Every single byte and a sweep of two-byte prefixes map to one extension
    for first in 0u8..=255 {
        assert!(!guess_file_extension(&[first]).is_empty());
        for second in [0x00, 0x20, 0x7F, 0xA0, 0xFF] {
            let ext = guess_file_extension(&[first, second]);
            assert!(ext.starts_with('.'));
        }
    }
    assert_eq!(guess_file_extension(&[]), ".bin");
}

#[test]
fn test_split_utf8_in_window_is_binary() {
    // "é" is C3 A9; C3 is outside the printable set
    let mut text = vec![b'a'; TEXT_WINDOW - 1];
    text.extend_from_slice("é".as_bytes());
    assert_eq!(ContentType::detect(&text), ContentType::Binary);
}

#[test]
fn test_nbsp_counts_as_whitespace() {
    assert_eq!(
        ContentType::detect(b"caf\xA0menu"),
        ContentType::Text(TextFormat::PlainText)
    );
}
