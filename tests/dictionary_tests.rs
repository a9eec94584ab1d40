use std::fs;
use std::path::PathBuf;

use hangterm::{Dictionary, HangmanError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn write_word_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hangterm-{}-{}.txt", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_word_file() {
    let path = write_word_file("words", "apple\nbanana\r\n\ncherry\n");
    let dict = Dictionary::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(dict.words(), ["apple", "banana", "cherry"]);
    assert!(dict.words().iter().all(|w| !w.is_empty()));
}

#[test]
fn test_missing_file_is_reported() {
    let path = std::env::temp_dir().join("hangterm-definitely-missing-words.txt");
    match Dictionary::load(&path) {
        Err(HangmanError::WordListNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected WordListNotFound, got {other:?}"),
    }
}

#[test]
fn test_empty_file_loads_but_cannot_pick() {
    let path = write_word_file("empty", "\n\n");
    let dict = Dictionary::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(dict.is_empty());
    let mut rng = StdRng::seed_from_u64(3);
    assert!(matches!(dict.pick_secret_word(&mut rng), Err(HangmanError::EmptyDictionary)));
}

#[test]
fn test_bundled_word_list_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("words_alpha.txt");
    let dict = Dictionary::load(path).unwrap();

    assert!(!dict.is_empty());
    assert!(dict
        .words()
        .iter()
        .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}
