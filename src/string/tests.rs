#![cfg(test)]

use proptest::prelude::*;

use super::*;

// Two different strings with the same hash.
const COLLIDING: (&str, &str) = ("yqsvksfu", "nzgpvaxy");

#[test]
fn test_longest_unique_substring() {
    assert_eq!(longest_unique_substring("abcabcbb"), "abc");
    assert_eq!(longest_unique_substring("bbbbb"), "b");
    assert_eq!(longest_unique_substring("pwwkew"), "wke");
    assert_eq!(longest_unique_substring("abba"), "ab", "Stale registry entries should be ignored.");
    assert_eq!(longest_unique_substring("dvdf"), "vdf");
    assert_eq!(longest_unique_substring(""), "");
    assert_eq!(longest_unique_substring("a"), "a");
}

#[test]
fn test_longest_unique_substring_unicode() {
    assert_eq!(longest_unique_substring("ääbcä"), "äbc", "Windows should span whole characters.");
    assert_eq!(longest_unique_substring("日本日本語"), "日本語");
}

#[test]
fn test_rabin_karp_fixtures() {
    let text = "The roots of education are bitter, but the fruit is sweet";
    assert_eq!(rabin_karp(text, "are bit"), text.find("are bit"));
    assert_eq!(rabin_karp(text, "Quality is"), None);

    let text = "It is the mark of an educated mind to be \
        able to entertain a thought without accepting it";
    assert_eq!(rabin_karp(text, "to"), text.find("to"));
    assert_eq!(rabin_karp(text, "it"), text.find("it"));
}

#[test]
fn test_rabin_karp_edges() {
    assert_eq!(rabin_karp("abc", ""), Some(0), "An empty pattern matches at the start.");
    assert_eq!(rabin_karp("", ""), Some(0));
    assert_eq!(rabin_karp("", "a"), None);
    assert_eq!(rabin_karp("ab", "abc"), None, "A longer pattern can't match.");
    assert_eq!(rabin_karp("abc", "abc"), Some(0));
    assert_eq!(rabin_karp("xxabc", "abc"), Some(2), "A match at the very end should be found.");
    assert_eq!(rabin_karp("héllo wörld", "wö"), "héllo wörld".find("wö"));
}

#[test]
fn test_rabin_karp_collision() {
    let (a, b) = COLLIDING;
    assert_eq!(
        RollingHash::new(a.as_bytes()), RollingHash::new(b.as_bytes()),
        "The fixture should collide."
    );

    let text = format!("zz{a}zz");
    assert_eq!(rabin_karp(&text, b), None, "A hash collision shouldn't be reported as a match.");
    assert_eq!(rabin_karp(&format!("{a}{b}"), b), Some(a.len()));
}

#[test]
fn test_rolling_hash_no_overflow() {
    let text = [u8::MAX; 4096];
    let mut window = RollingHash::new(&text[..1024]);
    for i in 0..(text.len() - 1024) {
        window.roll(text[i], text[i + 1024]);
        assert!(window.value() < MODULUS);
    }
    assert_eq!(window, RollingHash::new(&text[text.len() - 1024..]));
}

proptest! {
    #[test]
    fn test_rolling_matches_fresh_hash(text in prop::collection::vec(any::<u8>(), 1..200), width in 1_usize..20) {
        let width = width.min(text.len());
        let mut window = RollingHash::new(&text[..width]);
        for i in 0..text.len() - width {
            window.roll(text[i], text[i + width]);
            prop_assert_eq!(window, RollingHash::new(&text[i + 1..i + 1 + width]));
        }
    }

    #[test]
    fn test_rabin_karp_agrees_with_find(text in "[ab]{0,40}", pattern in "[ab]{0,5}") {
        prop_assert_eq!(rabin_karp(&text, &pattern), text.find(pattern.as_str()));
    }
}
