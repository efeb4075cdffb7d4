/// One keyboard event the desktop understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySymbol {
    /// Printable ASCII character (0x20..=0x7E)
    Char(char),
    Newline,
    Backspace,
    Tab,
}

impl KeySymbol {
    /// Translate a byte from the keyboard driver, dropping anything that is
    /// neither printable nor one of the three control keys
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'\n' => Some(Self::Newline),
            0x08 => Some(Self::Backspace),
            b'\t' => Some(Self::Tab),
            0x20..=0x7E => Some(Self::Char(byte as char)),
            _ => None,
        }
    }
}

/// Keyboard driver seam; yields at most one symbol per poll
pub trait KeySource {
    fn poll_key(&mut self) -> Option<KeySymbol>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        assert_eq!(KeySymbol::from_ascii(b'a'), Some(KeySymbol::Char('a')));
        assert_eq!(KeySymbol::from_ascii(b' '), Some(KeySymbol::Char(' ')));
        assert_eq!(KeySymbol::from_ascii(b'~'), Some(KeySymbol::Char('~')));
        assert_eq!(KeySymbol::from_ascii(b'\n'), Some(KeySymbol::Newline));
        assert_eq!(KeySymbol::from_ascii(0x08), Some(KeySymbol::Backspace));
        assert_eq!(KeySymbol::from_ascii(b'\t'), Some(KeySymbol::Tab));
    }

    #[test]
    fn test_from_ascii_filters_the_rest() {
        assert_eq!(KeySymbol::from_ascii(0), None);
        assert_eq!(KeySymbol::from_ascii(0x1B), None);
        assert_eq!(KeySymbol::from_ascii(0x7F), None);
        assert_eq!(KeySymbol::from_ascii(0xC3), None);
        assert_eq!(KeySymbol::from_ascii(b'\r'), None);
    }
}
