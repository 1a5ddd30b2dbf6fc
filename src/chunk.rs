//! Chunking of long inputs.
//!
//! The rule tables rewrite a working buffer many times, so conversion cost
//! grows with the square of the buffer length in the worst case. Long inputs
//! are cut into bounded chunks before conversion, splitting at a space so
//! that no multi-character legacy sequence straddles a chunk boundary.

/// Maximum characters per chunk.
pub const CHUNK_SIZE: usize = 6000;

/// Splits `text` into chunks of at most `max` characters.
///
/// Each split lands just before a space at or before the limit, so the space
/// opens the following chunk. A chunk containing no space splits hard at the
/// limit. Concatenating the returned chunks yields `text` unchanged.
pub fn chunks(text: &str, max: usize) -> Vec<&str> {
    assert!(max > 0);

    let mut out = Vec::new();
    let mut rest = text;
    loop {
        // Byte range of the character at index `max`, if there is one.
        let limit = match rest.char_indices().nth(max) {
            Some((start, ch)) => (start, start + ch.len_utf8()),
            None => {
                out.push(rest);
                return out;
            }
        };
        let cut = match rest[..limit.1].rfind(' ') {
            // A leading space cannot open a chunk of its own.
            Some(0) | None => limit.0,
            Some(space) => space,
        };
        let (chunk, tail) = rest.split_at(cut);
        log::debug!("splitting chunk of {} bytes", chunk.len());
        out.push(chunk);
        rest = tail;
    }
}
