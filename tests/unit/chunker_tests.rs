/*!
 * Tests for text chunking
 */

use pdfglot::pipeline::{chunk_page_text, chunk_text, split_windows};

/// Empty input produces an empty chunk list, not a single empty chunk
#[test]
fn test_chunk_text_with_empty_input_should_return_no_chunks() {
    assert!(chunk_text("", 1024).is_empty());
}

/// Input without a sentence delimiter becomes a single chunk
#[test]
fn test_chunk_text_without_delimiter_should_return_single_chunk() {
    assert_eq!(chunk_text("hello", 1024), vec!["hello"]);
    assert_eq!(chunk_text("no delimiter at all here", 1024), vec!["no delimiter at all here"]);
}

#[test]
fn test_chunk_text_should_pack_sentences_greedily() {
    let text = "First sentence here. Second sentence here. Third one.";
    let chunks = chunk_text(text, 1024);
    assert_eq!(chunks, vec!["First sentence here Second sentence here Third one"]);
}

#[test]
fn test_chunk_text_should_split_on_overflow() {
    // "First sentence here" is 19 chars, "Second sentence here" is 20,
    // "Third one" is 9; with a 20-char bound each lands in its own chunk
    let text = "First sentence here. Second sentence here. Third one.";
    let chunks = chunk_text(text, 20);
    assert_eq!(chunks, vec!["First sentence here", "Second sentence here", "Third one"]);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 20);
    }
}

/// A running chunk that lands exactly on the bound is accepted, not split
#[test]
fn test_chunk_text_at_exact_boundary_should_not_overflow() {
    // "abcde" + space + "fghij" is exactly 11 characters
    let chunks = chunk_text("abcde.fghij.", 11);
    assert_eq!(chunks, vec!["abcde fghij"]);
    assert_eq!(chunks[0].chars().count(), 11);
}

/// A single sentence longer than the bound becomes its own over-limit chunk
#[test]
fn test_chunk_text_with_oversized_sentence_should_exceed_bound() {
    let oversized = "x".repeat(50);
    let text = format!("short one. {}. tail.", oversized);
    let chunks = chunk_text(&text, 20);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], "short one");
    assert_eq!(chunks[1], oversized);
    assert!(chunks[1].chars().count() > 20);
    assert_eq!(chunks[2], "tail");
}

/// An oversized leading sentence must not emit an empty chunk before it
#[test]
fn test_chunk_text_with_oversized_first_sentence_should_not_emit_empty_chunk() {
    let oversized = "y".repeat(40);
    let chunks = chunk_text(&format!("{}. rest.", oversized), 10);
    assert_eq!(chunks, vec![oversized, "rest".to_string()]);
    assert!(chunks.iter().all(|c| !c.is_empty()));
}

/// Joining chunks with single spaces reconstructs the input up to
/// sentence-delimiter normalization
#[test]
fn test_chunk_text_join_should_reconstruct_normalized_input() {
    let text = "The quick brown fox. Jumps over the lazy dog. And runs away.";
    let chunks = chunk_text(text, 25);
    let rejoined = chunks.join(" ");
    assert_eq!(rejoined, "The quick brown fox Jumps over the lazy dog And runs away");
}

#[test]
fn test_split_windows_should_produce_fixed_size_windows() {
    let text = "a".repeat(2500);
    let windows = split_windows(&text, 1024);
    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].len(), 1024);
    assert_eq!(windows[1].len(), 1024);
    assert_eq!(windows[2].len(), 452);
}

#[test]
fn test_split_windows_should_respect_char_boundaries() {
    // Multibyte input must split between code points, never inside one
    let text = "héllo wörld çafé";
    let windows = split_windows(text, 4);
    assert_eq!(windows.concat(), text);
    for window in &windows {
        assert!(window.chars().count() <= 4);
    }
}

#[test]
fn test_split_windows_with_empty_input_should_return_no_windows() {
    assert!(split_windows("", 1024).is_empty());
}

#[test]
fn test_chunk_page_text_should_hard_bound_delimiter_free_text() {
    // A delimiter-free page would escape the sentence chunker's soft bound;
    // the page pass window-splits it so every dispatch unit is bounded
    let text = "z".repeat(2100);
    let chunks = chunk_page_text(&text, 1024);
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.chars().count() <= 1024));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_chunk_page_text_should_keep_sentence_chunks_intact() {
    let text = "One short sentence. Another short sentence.";
    let chunks = chunk_page_text(text, 1024);
    assert_eq!(chunks, vec!["One short sentence Another short sentence"]);
}
