//! Integration tests for session persistence.

use docuflow::{CoverPage, Error, Session, Theme};
use tempfile::TempDir;

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut session = Session::new().with_theme(Theme::Modern);
    session.set_input("# Draft\n\nWith a [source](https://example.org).");
    session.save_to_path(&path).unwrap();

    let loaded = Session::load_from_path(&path).unwrap();
    assert_eq!(loaded.input, session.input);
    assert_eq!(loaded.theme, Theme::Modern);
    assert_eq!(loaded.to_html().unwrap(), session.to_html().unwrap());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Session::load_from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();

    let err = Session::load_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_cover_not_persisted() {
    let session = Session::new().with_cover(CoverPage::new().with_author("Ada"));
    let restored = Session::restore(&session.save().unwrap()).unwrap();
    assert!(restored.cover.is_none());
}

#[test]
fn test_independent_sessions() {
    let mut a = Session::new().with_theme(Theme::Creative);
    let mut b = Session::new();
    a.set_input("### Alpha");
    b.set_input("### Beta");

    let html_a = a.to_html().unwrap();
    let html_b = b.to_html().unwrap();
    assert!(html_a.contains("text-violet-600") && html_a.contains("Alpha"));
    assert!(html_b.contains("text-black italic") && html_b.contains("Beta"));
}

#[test]
fn test_rewritten_text_treated_as_input() {
    let mut session = Session::new();
    session.set_input("rough notes");
    let returned = "**Summary**\n\nPolished notes with a [ref](https://r.example).";
    session.set_input(returned);

    let doc = session.document();
    assert_eq!(doc.blocks[0].heading_level(), Some(3));

    let stats = session.stats();
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.link_count, 1);
    assert_eq!(stats.reading_minutes, 1);
}
