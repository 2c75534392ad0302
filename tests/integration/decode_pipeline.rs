//! Raw text or file → pending confirmation → written artifact

use b64_inspect::cli::prompt::ask_filename;
use b64_inspect::decoder::output::DecodeReport;
use b64_inspect::decoder::{Base64Decoder, Confirmation, InputSource};
use b64_inspect::errors::AppError;
use b64_inspect::types::content_detection::{AudioFormat, ContentType, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{b64, fixed_time, riff, temp_session, wrap, PNG_B64};

#[test]
fn test_pasted_png_accepted_and_written() -> anyhow::Result<()> {
    let (temp_dir, mut session) = temp_session();
    let decoder = Base64Decoder::default();

    let pending = decoder.decode_text_at(&wrap(PNG_B64, 40), fixed_time())?;
    assert_eq!(pending.extension(), ".png");

    let artifact = pending.resolve(Confirmation::Accept)?;
    let path = session.deliver(artifact)?;

    assert_eq!(
        path,
        temp_dir
            .path()
            .join("decoded")
            .join("decoded-2024-01-02T03-04-05-678Z.png")
    );
    let written = fs::read(&path)?;
    assert_eq!(b64(&written), PNG_B64);
    Ok(())
}

#[test]
fn test_file_input_with_rename() -> anyhow::Result<()> {
    let (temp_dir, mut session) = temp_session();
    let input = temp_dir.path().join("payload.b64");
    fs::write(&input, wrap(&b64(&riff(b"WAVE")), 16))?;

    let source = InputSource::select(None, Some(input))?;
    let pending = Base64Decoder::default().decode_input(&source)?;
    assert_eq!(pending.content_type(), ContentType::Audio(AudioFormat::Wav));

    let artifact = pending.resolve(Confirmation::Rename("beep.wav".to_string()))?;
    let path = session.deliver(artifact)?;

    assert_eq!(path.file_name().unwrap(), "beep.wav");
    assert_eq!(fs::read(&path)?, riff(b"WAVE"));
    assert!(session.last().unwrap().is_renamed());
    Ok(())
}

#[test]
fn test_pasted_text_wins_over_file() -> anyhow::Result<()> {
    let source = InputSource::select(
        Some(PNG_B64),
        Some(PathBuf::from("/nonexistent/never-read.b64")),
    )?;
    let pending = Base64Decoder::default().decode_input(&source)?;
    assert_eq!(pending.content_type(), ContentType::Image(ImageFormat::Png));
    Ok(())
}

#[test]
fn test_cancel_writes_nothing() {
    let (temp_dir, session) = temp_session();
    let pending = Base64Decoder::default()
        .decode_text(PNG_B64)
        .unwrap();

    let mut input = Cursor::new(Vec::new());
    let mut prompt = Vec::new();
    let confirmation = ask_filename(&pending, &mut input, &mut prompt).unwrap();
    assert_eq!(confirmation, Confirmation::Cancel);

    assert!(matches!(
        pending.resolve(confirmation),
        Err(AppError::Cancelled)
    ));
    assert!(session.last().is_none());
    assert!(!temp_dir.path().join("decoded").exists());
}

#[test]
fn test_prompted_name_is_used() -> anyhow::Result<()> {
    let (_temp_dir, mut session) = temp_session();
    let pending = Base64Decoder::default().decode_text("eyJvayI6dHJ1ZX0=")?;

    let mut input = Cursor::new(b"status.json\n".to_vec());
    let mut prompt = Vec::new();
    let confirmation = ask_filename(&pending, &mut input, &mut prompt)?;
    assert!(String::from_utf8(prompt)?.contains("'.json'"));

    let path = session.deliver(pending.resolve(confirmation)?)?;
    assert_eq!(fs::read_to_string(path)?, r#"{"ok":true}"#);
    Ok(())
}

#[test]
fn test_second_decode_replaces_last_artifact() -> anyhow::Result<()> {
    let (_temp_dir, mut session) = temp_session();
    let decoder = Base64Decoder::default();

    for (text, name) in [("SGVsbG8=", "one.txt"), (PNG_B64, "two.png")] {
        let artifact = decoder
            .decode_text(text)?
            .resolve(Confirmation::Rename(name.to_string()))?;
        session.deliver(artifact)?;
    }

    let last = session.last().unwrap();
    assert_eq!(last.file_name, "two.png");
    assert!(session.output().artifact_exists("one.txt"));
    Ok(())
}

#[test]
fn test_decode_errors_leave_no_output() {
    let (temp_dir, _session) = temp_session();
    let decoder = Base64Decoder::new(8, "decoded");

    assert!(matches!(decoder.decode_text("   "), Err(AppError::EmptyInput)));
    assert!(matches!(
        decoder.decode_text("SGVsbG8"),
        Err(AppError::MalformedInput(_))
    ));
    assert!(matches!(
        decoder.decode_text(PNG_B64),
        Err(AppError::InputTooLarge { limit: 8, .. })
    ));
    assert!(!temp_dir.path().join("decoded").exists());
}

#[test]
fn test_missing_input_file_is_unexpected() {
    let temp_dir = TempDir::new().unwrap();
    let source = InputSource::File(temp_dir.path().join("missing.b64"));
    let err = Base64Decoder::default().decode_input(&source).unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    assert!(err.is_unexpected());
    assert!(err.user_message().starts_with("Unexpected decoding error"));
}

#[test]
fn test_report_json_shape() -> anyhow::Result<()> {
    let (_temp_dir, mut session) = temp_session();
    let artifact = Base64Decoder::default()
        .decode_text_at(PNG_B64, fixed_time())?
        .resolve(Confirmation::Accept)?;
    let path = session.deliver(artifact)?;

    let report = DecodeReport::new(session.last().unwrap(), Some(&path));
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["extension"], ".png");
    assert_eq!(json["mime_type"], "image/png");
    assert_eq!(json["category"], "Images");
    assert_eq!(json["head_hex"].as_str().unwrap().len(), 32);
    assert_eq!(json["file_name"], json["suggested_name"]);
    Ok(())
}
