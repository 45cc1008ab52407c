//! Single-byte character classes

pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

pub fn is_identifier_start(byte: u8) -> bool {
    is_letter(byte) || byte == b'_'
}

pub fn is_identifier_continue(byte: u8) -> bool {
    is_identifier_start(byte) || is_digit(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_letter(b'a') && is_letter(b'Z'));
        assert!(!is_letter(b'_') && !is_letter(b'7'));
        assert!(is_digit(b'0') && is_digit(b'9') && !is_digit(b'a'));
        assert!(is_identifier_start(b'_'));
        assert!(!is_identifier_start(b'3'));
        assert!(is_identifier_continue(b'3'));
        assert!(!is_identifier_continue(b'.'));
    }

    #[test]
    fn test_non_ascii_is_never_a_letter() {
        for byte in 0x80..=0xffu8 {
            assert!(!is_identifier_continue(byte));
        }
    }
}
