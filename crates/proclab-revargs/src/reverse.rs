//! Token reversal.

use std::ffi::{OsStr, OsString};

/// Reverse the characters of a string.
pub fn reverse_str(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse a token, producing a new owned value.
///
/// Valid UTF-8 is reversed by `char` so multi-byte characters stay intact.
/// Anything else is reversed byte by byte, unless the reversed bytes would
/// decode as UTF-8. Such a token is returned unchanged, so reversing twice
/// always gives the input back.
pub fn reverse_token(token: &OsStr) -> OsString {
    match token.to_str() {
        Some(text) => reverse_str(text).into(),
        None => reverse_raw(token),
    }
}

#[cfg(unix)]
fn reverse_raw(token: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut bytes = token.as_bytes().to_vec();
    bytes.reverse();
    if std::str::from_utf8(&bytes).is_ok() {
        return token.to_os_string();
    }
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn reverse_raw(token: &OsStr) -> OsString {
    token.to_os_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("", "" ; "empty")]
    #[test_case("a", "a" ; "single char")]
    #[test_case("ab", "ba" ; "even length")]
    #[test_case("abc", "cba" ; "odd length keeps middle")]
    #[test_case("hello", "olleh" ; "word")]
    #[test_case("-r", "r-" ; "flag text")]
    #[test_case("héllo", "olléh" ; "two byte char")]
    #[test_case("日本語", "語本日" ; "three byte chars")]
    fn test_reverse_str(input: &str, expected: &str) {
        assert_eq!(reverse_str(input), expected);
        assert_eq!(reverse_token(OsStr::new(input)), OsString::from(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_that_reverses_into_utf8_is_kept() {
        use std::os::unix::ffi::OsStrExt;

        // 0xa9 0xc3 reversed is 0xc3 0xa9, which is "é".
        let token = OsStr::from_bytes(&[0xa9, 0xc3]);
        let once = reverse_token(token);
        assert_eq!(once, token.to_os_string());
        assert_eq!(reverse_token(&once), token.to_os_string());
    }

    #[cfg(unix)]
    #[test]
    fn test_reverse_non_utf8_bytes() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let token = OsStr::from_bytes(&[b'a', 0xff, b'b']);
        let reversed = reverse_token(token);
        assert_eq!(reversed.into_vec(), vec![b'b', 0xff, b'a']);
    }

    proptest! {
        #[test]
        fn test_reverse_is_involution(text in "\\PC*") {
            prop_assert_eq!(reverse_str(&reverse_str(&text)), text);
        }

        #[test]
        fn test_reverse_preserves_char_count(text in "\\PC*") {
            prop_assert_eq!(reverse_str(&text).chars().count(), text.chars().count());
        }

        #[test]
        fn test_single_char_is_fixed_point(c in any::<char>()) {
            let text = c.to_string();
            prop_assert_eq!(reverse_str(&text), text);
        }
    }

    #[cfg(unix)]
    proptest! {
        #[test]
        fn test_raw_reverse_is_involution(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
            use std::os::unix::ffi::OsStrExt;

            let token = OsStr::from_bytes(&bytes);
            prop_assert_eq!(reverse_token(&reverse_token(token)), token.to_os_string());
        }
    }
}
