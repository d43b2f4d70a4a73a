/// The base of the polynomial hash.
pub const BASE: u64 = 31;
/// The prime every hash is reduced by, small enough that no intermediate product can overflow a
/// [`u64`].
pub const MODULUS: u64 = 1_000_000_007;

/// A polynomial hash over a fixed size window of bytes, which can be shifted along by one byte in
/// constant time.
///
/// For a window `w` of length `m`, the hash is `w[0] * B^(m-1) + w[1] * B^(m-2) + ... + w[m-1]`,
/// reduced by [`MODULUS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingHash {
    value: u64,
    // B^(m-1), the weight of the byte leaving the window on the next roll.
    high_power: u64,
}

impl RollingHash {
    /// Hashes `window`, which sets the size of the window for every later roll.
    pub fn new(window: &[u8]) -> RollingHash {
        let mut value = 0;
        let mut high_power = 1;
        for (i, &byte) in window.iter().enumerate() {
            value = (value * BASE + byte as u64) % MODULUS;
            if i > 0 {
                high_power = high_power * BASE % MODULUS;
            }
        }
        RollingHash { value, high_power }
    }

    /// Returns the hash of the current window.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Shifts the window along by one byte: `outgoing` is the first byte of the current window and
    /// `incoming` the byte following it.
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let weight = outgoing as u64 * self.high_power % MODULUS;
        let without = (self.value + MODULUS - weight) % MODULUS;
        self.value = (without * BASE + incoming as u64) % MODULUS;
    }
}

/// Returns the byte offset of the first occurrence of `pattern` in `text`, or [`None`] if it
/// doesn't occur. Agrees with [`str::find`], including an empty pattern matching at `0`.
pub fn rabin_karp(text: &str, pattern: &str) -> Option<usize> {
    rabin_karp_bytes(text.as_bytes(), pattern.as_bytes())
}

/// Returns the offset of the first occurrence of `pattern` in `text`, or [`None`] if it doesn't
/// occur.
///
/// Every window of `text` is hashed with a [`RollingHash`]. Equal hashes are only a hint, so the
/// window is compared with the pattern before it is reported, and a collision simply moves on.
///
/// # Time Complexity
/// `O(n + m)` expected, `O(n * m)` if every window collides.
pub fn rabin_karp_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let len = pattern.len();
    if len > text.len() { return None; }
    if len == 0 { return Some(0); }

    let target = RollingHash::new(pattern).value();
    let mut window = RollingHash::new(&text[..len]);
    let max = text.len() - len;

    for i in 0..=max {
        if window.value() == target && &text[i..i + len] == pattern {
            return Some(i);
        }
        if i == max { break; }
        window.roll(text[i], text[i + len]);
    }
    None
}
