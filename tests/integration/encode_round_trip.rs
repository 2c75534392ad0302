//! Encode direction feeding back into the decoder

use b64_inspect::decoder::{Base64Decoder, Confirmation};
use b64_inspect::encoder::{Base64Encoder, EncodeSource};
use b64_inspect::errors::AppError;
use b64_inspect::types::content_detection::{ContentType, DocumentFormat};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_encodes_then_decodes_to_same_bytes() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("report.pdf");
    let original = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n1 0 obj\n".to_vec();
    fs::write(&path, &original)?;

    let encoded = Base64Encoder::default().encode(&EncodeSource::File(path))?;
    let artifact = Base64Decoder::default()
        .decode_text(&encoded)?
        .resolve(Confirmation::Accept)?;

    assert_eq!(artifact.bytes, original);
    assert_eq!(
        artifact.content_type,
        ContentType::Document(DocumentFormat::Pdf)
    );
    Ok(())
}

#[test]
fn test_text_round_trip_keeps_utf8() -> anyhow::Result<()> {
    let text = "naïve café, 日本語";
    let encoded = Base64Encoder::default().encode(&EncodeSource::Text(text.to_string()))?;
    let pending = Base64Decoder::default().decode_text(&encoded)?;
    assert_eq!(pending.bytes(), text.as_bytes());
    Ok(())
}

#[test]
fn test_encode_cap_applies_to_files_only() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("big.bin");
    fs::write(&path, vec![0u8; 64])?;

    let encoder = Base64Encoder::new(32);
    assert!(matches!(
        encoder.encode(&EncodeSource::File(path)),
        Err(AppError::InputTooLarge { size: 64, limit: 32 })
    ));
    assert!(encoder
        .encode(&EncodeSource::Text("x".repeat(64)))
        .is_ok());
    Ok(())
}
