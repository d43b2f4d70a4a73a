use std::collections::HashMap;

/// Returns the longest substring of `text` in which no character repeats. When several substrings
/// share the greatest length, the first one is returned.
///
/// A single pass moves the right edge of a window forward one character at a time. Whenever the
/// new character was already seen inside the window, the left edge jumps just past that earlier
/// occurrence, so the window never holds a duplicate.
///
/// # Time Complexity
/// `O(n)` time and `O(min(n, k))` memory, where `k` is the number of distinct characters.
pub fn longest_unique_substring(text: &str) -> &str {
    // Character -> (character index, byte offset) of its last occurrence.
    let mut registry: HashMap<char, (usize, usize)> = HashMap::new();
    let mut left_index = 0;
    let mut left_byte = 0;
    let mut best_len = 0;
    let mut best = 0..0;

    for (right, (byte, c)) in text.char_indices().enumerate() {
        if let Some((index, offset)) = registry.insert(c, (right, byte)) {
            if index >= left_index {
                left_index = index + 1;
                left_byte = offset + c.len_utf8();
            }
        }

        let len = right - left_index + 1;
        if len > best_len {
            best_len = len;
            best = left_byte..byte + c.len_utf8();
        }
    }
    &text[best]
}
