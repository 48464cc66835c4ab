//! Plaintext classification of in-memory buffers

/// Control characters that still count as text
const ALLOWED_CONTROLS: [char; 3] = ['\n', '\r', '\t'];

/// Lowest code point that is never a control character
const FIRST_PRINTABLE: char = ' ';

/// Result of plaintext detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Valid UTF-8 without disallowed control characters
    Plaintext,
    /// Anything else
    Binary { reason: BinaryReason },
}

impl Detection {
    /// Whether the inspected bytes are plaintext
    pub fn is_plaintext(&self) -> bool {
        matches!(self, Detection::Plaintext)
    }

    /// Reason for a binary verdict
    pub fn reason(&self) -> Option<BinaryReason> {
        match self {
            Detection::Plaintext => None,
            Detection::Binary { reason } => Some(*reason),
        }
    }
}

/// Reason why data is considered binary
///
/// Offsets are byte positions from the start of the inspected buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryReason {
    /// Invalid or truncated UTF-8 sequence starting at `offset`
    InvalidUtf8 { offset: usize },
    /// Control character other than newline, carriage return or tab
    ControlChar { offset: usize, byte: u8 },
}

impl std::fmt::Display for BinaryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryReason::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 at byte {}", offset)
            }
            BinaryReason::ControlChar { offset, byte } => {
                write!(f, "control character 0x{:02x} at byte {}", byte, offset)
            }
        }
    }
}

/// Check whether a buffer is plaintext
///
/// The buffer must be valid UTF-8 and every code point must be at least
/// U+0020 or one of `\n`, `\r`, `\t`. An empty buffer is plaintext.
pub fn is_plaintext(data: &[u8]) -> bool {
    detect(data).is_plaintext()
}

/// Classify a buffer, reporting the first offending byte if it is binary
///
/// When a buffer has both a control character and an invalid sequence,
/// whichever comes first is reported.
pub fn detect(data: &[u8]) -> Detection {
    let (text, invalid_at) = match std::str::from_utf8(data) {
        Ok(text) => (text, None),
        Err(e) => {
            let valid = e.valid_up_to();
            // The prefix up to `valid_up_to` always decodes
            let text = std::str::from_utf8(&data[..valid]).unwrap_or_default();
            (text, Some(valid))
        }
    };

    if let Some((offset, c)) = text.char_indices().find(|&(_, c)| is_disallowed_control(c)) {
        return Detection::Binary {
            reason: BinaryReason::ControlChar {
                offset,
                byte: c as u8,
            },
        };
    }

    match invalid_at {
        Some(offset) => Detection::Binary {
            reason: BinaryReason::InvalidUtf8 { offset },
        },
        None => Detection::Plaintext,
    }
}

fn is_disallowed_control(c: char) -> bool {
    c < FIRST_PRINTABLE && !ALLOWED_CONTROLS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_plaintext() {
        assert!(is_plaintext(b""));
        assert_eq!(detect(b""), Detection::Plaintext);
    }

    #[test]
    fn test_ascii_text() {
        assert!(is_plaintext(b"Hello, World!\n"));
        assert!(is_plaintext(b"line1\r\nline2\tindented\n"));
    }

    #[test]
    fn test_multibyte_text() {
        assert!(is_plaintext("Hello 👋 World! 🌍\n".as_bytes()));
        assert!(is_plaintext("你好，世界！\n".as_bytes()));
        assert!(is_plaintext("Grüße, café".as_bytes()));
    }

    #[test]
    fn test_binary_bytes() {
        assert!(!is_plaintext(&[0x00, 0x01, 0x02, 0x03]));
        assert_eq!(
            detect(&[0x00, 0x01, 0x02, 0x03]),
            Detection::Binary {
                reason: BinaryReason::ControlChar { offset: 0, byte: 0 }
            }
        );
    }

    #[test]
    fn test_bell_character() {
        let data = [b'H', b'e', b'l', b'l', b'o', 0x07];
        assert!(!is_plaintext(&data));
        assert_eq!(
            detect(&data).reason(),
            Some(BinaryReason::ControlChar { offset: 5, byte: 0x07 })
        );
    }

    #[test]
    fn test_every_disallowed_control() {
        for b in 0u8..32 {
            let expected = matches!(b, b'\n' | b'\r' | b'\t');
            assert_eq!(is_plaintext(&[b'a', b, b'z']), expected, "byte 0x{:02x}", b);
        }
    }

    #[test]
    fn test_del_and_c1_controls_are_accepted() {
        assert!(is_plaintext(b"a\x7fb"));
        // U+0085 NEXT LINE
        assert!(is_plaintext("a\u{85}b".as_bytes()));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(!is_plaintext(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert_eq!(
            detect(b"abc\xC3").reason(),
            Some(BinaryReason::InvalidUtf8 { offset: 3 })
        );
        // Lone continuation byte
        assert!(!is_plaintext(b"ok\x80"));
        // Surrogate encoded as UTF-8
        assert!(!is_plaintext(b"\xED\xA0\x80"));
    }

    #[test]
    fn test_truncated_multibyte_sequence() {
        let euro = "€".as_bytes();
        assert!(is_plaintext(euro));
        assert!(!is_plaintext(&euro[..2]));
    }

    #[test]
    fn test_earliest_failure_is_reported() {
        assert_eq!(
            detect(b"a\x01b\xFF").reason(),
            Some(BinaryReason::ControlChar { offset: 1, byte: 1 })
        );
        assert_eq!(
            detect(b"a\xFFb\x01").reason(),
            Some(BinaryReason::InvalidUtf8 { offset: 1 })
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        let data = b"same\x02input";
        assert_eq!(detect(data), detect(data));
        assert_eq!(is_plaintext(data), is_plaintext(data));
    }

    #[test]
    fn test_reason_display() {
        let reason = BinaryReason::ControlChar { offset: 7, byte: 0x1b };
        assert_eq!(reason.to_string(), "control character 0x1b at byte 7");
        let reason = BinaryReason::InvalidUtf8 { offset: 12 };
        assert_eq!(reason.to_string(), "invalid UTF-8 at byte 12");
    }
}
