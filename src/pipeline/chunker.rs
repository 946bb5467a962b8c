/*!
 * Text chunking for model consumption.
 *
 * Both capabilities have a bounded input window, so larger text is split into
 * chunks before any model call. The primary strategy is sentence-aware: split
 * on the literal '.' delimiter and greedily pack sentences while the running
 * chunk stays under the limit. A single sentence longer than the limit becomes
 * its own over-limit chunk - the bound is soft for that one case. Callers that
 * need a hard bound pass the result through `split_windows`.
 *
 * Lengths are counted in Unicode scalar values, not bytes.
 */

/// Split text into sentence-aware chunks of at most `max_chunk_length`
/// characters, except when a single sentence alone exceeds the limit.
///
/// Joining the chunks with single spaces approximately reconstructs the
/// input, up to sentence-delimiter normalization.
pub fn chunk_text(text: &str, max_chunk_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in text.split('.') {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let sentence_chars = sentence.chars().count();

        if current_chars + sentence_chars + 1 <= max_chunk_length {
            if !current.is_empty() {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(sentence);
            current_chars += sentence_chars;
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current = sentence.to_string();
            current_chars = sentence_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split text into fixed-size windows of at most `max_chunk_length`
/// characters, ignoring sentence boundaries.
///
/// Windows are split on character boundaries, never inside a code point.
pub fn split_windows(text: &str, max_chunk_length: usize) -> Vec<String> {
    if max_chunk_length == 0 {
        return Vec::new();
    }

    let mut windows = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for ch in text.chars() {
        if current_chars == max_chunk_length {
            windows.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current.push(ch);
        current_chars += 1;
    }

    if !current.is_empty() {
        windows.push(current);
    }

    windows
}

/// Chunk one page's text into hard-bounded units for dispatch.
///
/// Sentence-aware chunking first; any chunk still over the limit (a
/// delimiter-free run of text) is window-split so every dispatched unit
/// respects the bound.
pub fn chunk_page_text(text: &str, max_chunk_length: usize) -> Vec<String> {
    chunk_text(text, max_chunk_length)
        .into_iter()
        .flat_map(|chunk| {
            if chunk.chars().count() > max_chunk_length {
                split_windows(&chunk, max_chunk_length)
            } else {
                vec![chunk]
            }
        })
        .collect()
}
