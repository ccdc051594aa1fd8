//! Basic tests for wordchunk-core

use wordchunk_core::*;

fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i}")).collect()
}

#[test]
fn test_params_creation() {
    let params = WindowParams::new(10, 3).unwrap();
    assert_eq!(params.window_size(), 10);
    assert_eq!(params.overlap_size(), 3);
}

#[test]
fn test_error_display() {
    let err = WindowParams::new(3, 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "overlap_size (5) must be smaller than window_size (3)"
    );
    assert_eq!(
        CoreError::ZeroWindowSize.to_string(),
        "window_size must be greater than 0"
    );
}

#[test]
fn test_single_word() {
    let params = WindowParams::new(4, 2).unwrap();
    assert_eq!(segment("hello", params), vec!["hello"]);
}

#[test]
fn test_exact_window_yields_one_chunk() {
    let params = WindowParams::new(4, 2).unwrap();
    assert_eq!(segment("a b c d", params), vec!["a b c d"]);
}

#[test]
fn test_partial_tail_shorter_than_overlap() {
    let params = WindowParams::new(4, 3).unwrap();
    // 5 words: "a b c d" closes, seed "b c d", then "e" closes "b c d e"
    assert_eq!(segment("a b c d e", params), vec!["a b c d", "b c d e"]);

    let params = WindowParams::new(6, 3).unwrap();
    assert_eq!(segment("a b", params), vec!["a b"]);
}

#[test]
fn test_long_input_chunk_shape() {
    let params = WindowParams::new(50, 10).unwrap();
    let text = words(200).join(" ");
    let chunks = segment(&text, params);

    // Windows start at word 0, 40, 80, 120, 160; the last holds 40 words
    assert_eq!(chunks.len(), 5);
    assert!(chunks[0].starts_with("w0 "));
    assert!(chunks[0].ends_with(" w49"));
    assert!(chunks[4].starts_with("w160 "));
    assert!(chunks[4].ends_with(" w199"));
    for chunk in &chunks[..4] {
        assert_eq!(chunk.split(' ').count(), 50);
    }
    assert_eq!(chunks[4].split(' ').count(), 40);
}

#[test]
fn test_words_do_not_span_lines() {
    let params = WindowParams::new(10, 2).unwrap();
    assert_eq!(segment("foo\nbar", params), vec!["foo bar"]);
}

#[test]
fn test_accumulator_driven_manually() {
    let params = WindowParams::new(3, 2).unwrap();
    let mut acc = WindowAccumulator::new(params);
    let mut out = Vec::new();
    acc.push_line("a b c d", &mut out);
    assert_eq!(out, vec!["a b c", "b c d"]);
    assert_eq!(acc.word_count(), 2);
    assert_eq!(acc.finish(), None);
}
