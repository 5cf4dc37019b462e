/// Number of leading bytes inspected when deciding text vs. binary
pub const SNIFF_LEN: usize = 1024;

/// What the sniffed prefix says a file is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Binary,
}

/// A byte counts as text if it is printable ASCII or one of
/// tab, newline, vertical tab, form feed or carriage return.
fn is_text_byte(b: u8) -> bool {
    (0x09..=0x7e).contains(&b)
}

/// True unless one of the first `SNIFF_LEN` bytes falls outside 0x09..=0x7E.
/// Empty input is text.
pub fn is_text(contents: &[u8]) -> bool {
    contents.iter().take(SNIFF_LEN).all(|&b| is_text_byte(b))
}

pub fn classify(contents: &[u8]) -> Kind {
    if is_text(contents) {
        Kind::Text
    } else {
        Kind::Binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_text() {
        assert!(is_text(b""));
    }

    #[test]
    fn test_plain_ascii_is_text() {
        assert_eq!(classify(b"fn main() {\n\tprintln!(\"hi\");\r\n}\n"), Kind::Text);
    }

    #[test]
    fn test_control_and_high_bytes_are_binary() {
        for b in [0x00u8, 0x05, 0x08, 0x7f, 0x80, 0xff] {
            assert!(!is_text(&[b'a', b, b'b']), "byte {:#04x} should be binary", b);
        }
    }

    #[test]
    fn test_only_prefix_is_sniffed() {
        let mut contents = vec![b'a'; SNIFF_LEN];
        contents.push(0x00);
        assert!(is_text(&contents));

        contents[SNIFF_LEN - 1] = 0x00;
        assert!(!is_text(&contents));
    }
}
