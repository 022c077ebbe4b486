use std::path::{Path, PathBuf};

use content_types::{
    ContentTypeError, EXTENSION_TO_CONTENT_TYPE, content_type, content_type_or_text,
    get_content_type, lookup,
};

fn resolve(filename: &str) -> &'static str {
    get_content_type(Some(filename), true).unwrap()
}

fn resolve_text(filename: &str) -> &'static str {
    get_content_type(Some(filename), false).unwrap()
}

#[test]
fn test_literal_scenarios() {
    assert_eq!(resolve("photo.jpg"), "image/jpeg");
    assert_eq!(resolve("data.parquet"), "application/vnd.apache.parquet");
    assert_eq!(resolve("FILE.JPG"), "image/jpeg");
    assert_eq!(resolve("file.xyz123"), "application/octet-stream");
    assert_eq!(resolve_text("file.xyz123"), "text/plain");
    assert_eq!(resolve(".gitignore"), "text/plain");
}

#[test]
fn test_every_known_extension_resolves() {
    for (extension, expected) in EXTENSION_TO_CONTENT_TYPE.iter() {
        assert_eq!(resolve(extension), expected, "bare `{extension}`");
        assert_eq!(resolve(&format!(".{extension}")), expected, "dotted `{extension}`");
        assert_eq!(resolve(&format!("anything.{extension}")), expected, "filename `{extension}`");
        assert_eq!(resolve(&extension.to_uppercase()), expected, "uppercase `{extension}`");
    }
}

#[test]
fn test_unknown_extensions_fall_back() {
    for unknown in ["xyz123", "foobar", "notarealext", "jpgx"] {
        assert!(!EXTENSION_TO_CONTENT_TYPE.contains(unknown));

        let filename = format!("file.{unknown}");
        assert_eq!(resolve(&filename), "application/octet-stream");
        assert_eq!(resolve_text(&filename), "text/plain");
        assert_eq!(lookup(&filename), None);
    }
}

#[test]
fn test_compound_extensions_use_last_segment() {
    assert_eq!(resolve("archive.tar.gz"), resolve("file.gz"));
    assert_eq!(resolve("archive.tar.gz"), "application/gzip");
    assert_eq!(resolve("file.tar.bz2"), "application/x-bzip2");
    assert_eq!(resolve("my.file.name.with.dots.jpg"), "image/jpeg");
    assert_eq!(resolve("version.1.2.3.tar.gz"), "application/gzip");
}

#[test]
fn test_missing_filename_is_an_error() {
    let error = get_content_type(None::<&str>, true).unwrap_err();
    assert!(matches!(error, ContentTypeError::InvalidArgument { .. }));
    assert!(error.to_string().contains("filename cannot be None"));

    let error = get_content_type(None::<PathBuf>, false).unwrap_err();
    assert!(matches!(error, ContentTypeError::InvalidArgument { .. }));
}

#[test]
fn test_empty_and_extensionless_input() {
    assert_eq!(resolve(""), "application/octet-stream");
    assert_eq!(resolve_text(""), "text/plain");
    assert_eq!(resolve("README"), "application/octet-stream");
    assert_eq!(resolve("Makefile"), "application/octet-stream");
    assert_eq!(resolve_text("README"), "text/plain");
}

#[test]
fn test_extension_only_input() {
    assert_eq!(resolve(".jpg"), "image/jpeg");
    assert_eq!(resolve("jpg"), "image/jpeg");
    assert_eq!(resolve(".pdf"), "application/pdf");
    assert_eq!(resolve("pdf"), "application/pdf");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(resolve("document.PDF"), "application/pdf");
    assert_eq!(resolve(".WEBP"), "image/webp");
    assert_eq!(resolve("Photo.JpEg"), "image/jpeg");
}

#[test]
fn test_dotfiles() {
    assert_eq!(resolve(".gitignore"), "text/plain");
    assert_eq!(resolve(".dockerignore"), "text/plain");
    assert_eq!(resolve(".env"), "text/plain");
    assert_eq!(resolve(".editorconfig"), "text/plain");
    assert_eq!(resolve(".babelrc"), "application/json");

    // Dotfiles that are not in the table take the regular fallback
    assert_eq!(resolve(".randomrc"), "application/octet-stream");
    assert_eq!(resolve_text(".randomrc"), "text/plain");
}

#[test]
fn test_path_input() {
    let path = Path::new("document.pdf");
    assert_eq!(get_content_type(Some(path), true).unwrap(), "application/pdf");

    let path = PathBuf::from("/some/dir/image.png");
    assert_eq!(get_content_type(Some(&path), true).unwrap(), "image/png");
    assert_eq!(content_type(path), "image/png");

    let path = PathBuf::from("uploads").join("photos").join("vacation.JPG");
    assert_eq!(content_type(&path), "image/jpeg");
}

#[test]
fn test_owned_string_input() {
    let filename = String::from("report.xlsx");
    assert_eq!(
        get_content_type(Some(filename), true).unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[test]
fn test_infallible_helpers() {
    assert_eq!(content_type("song.mp3"), "audio/mpeg");
    assert_eq!(content_type("file.xyz123"), "application/octet-stream");
    assert_eq!(content_type_or_text("file.xyz123"), "text/plain");
    assert_eq!(content_type_or_text("clip.webm"), "video/webm");
}

#[test]
fn test_idempotent() {
    for filename in ["photo.jpg", "archive.tar.gz", "README", "", ".gitignore", "x.XYZ123"] {
        assert_eq!(resolve(filename), resolve(filename));
        assert_eq!(resolve_text(filename), resolve_text(filename));
    }
}

#[test]
fn test_spot_checks() {
    let cases = [
        ("image.png", "image/png"),
        ("graphic.webp", "image/webp"),
        ("animation.gif", "image/gif"),
        ("doc.pdf", "application/pdf"),
        (
            "file.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        ("notebook.ipynb", "application/x-ipynb+json"),
        ("config.yaml", "text/yaml"),
        ("config.toml", "application/toml"),
        ("config.ini", "text/plain"),
        ("video.mp4", "video/mp4"),
        ("movie.mkv", "video/x-matroska"),
        ("music.flac", "audio/flac"),
        ("audio.wav", "audio/wav"),
        ("audio.opus", "audio/opus"),
        ("script.py", "text/x-python"),
        ("app.js", "text/javascript"),
        ("module.mjs", "text/javascript"),
        ("component.tsx", "text/tsx"),
        ("main.rs", "text/x-rust"),
        ("program.go", "text/x-go"),
        ("archive.zip", "application/zip"),
        ("backup.tar", "application/x-tar"),
        ("file.7z", "application/x-7z-compressed"),
        ("photo.cr2", "image/x-canon-cr2"),
        ("photo.nef", "image/x-nikon-nef"),
        ("photo.dng", "image/x-adobe-dng"),
        ("image.avif", "image/avif"),
        ("contract.sol", "text/x-solidity"),
        ("contract.vy", "text/x-vyper"),
        ("index.html", "text/html"),
        ("style.css", "text/css"),
        ("logo.svg", "image/svg+xml"),
        ("data.json", "application/json"),
        ("data.csv", "text/csv"),
        ("backups/db.sqlite", "application/vnd.sqlite3"),
    ];

    for (filename, expected) in cases {
        assert_eq!(resolve(filename), expected, "Failed for {filename}");
    }
}
