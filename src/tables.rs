//! Code 39 character set (Format-1 notation, see
//! <https://en.wikipedia.org/wiki/Code_39#Encoding>).

use crate::pattern::Pattern;

/// Start/stop delimiter framing every symbol.
pub const DELIMITER: char = '*';
/// Number of characters in the Code 39 table, delimiter included.
pub const CHARSET_LEN: usize = 44;

/// Every encodable character and its pattern: 36 data characters, 7 special
/// characters and the delimiter.
pub const CHARSET: [(u8, Pattern); CHARSET_LEN] = [
    (b'0', Pattern::from_format1("NnNwWnWnN")),
    (b'1', Pattern::from_format1("WnNwNnNnW")),
    (b'2', Pattern::from_format1("NnWwNnNnW")),
    (b'3', Pattern::from_format1("WnWwNnNnN")),
    (b'4', Pattern::from_format1("NnNwWnNnW")),
    (b'5', Pattern::from_format1("WnNwWnNnN")),
    (b'6', Pattern::from_format1("NnWwWnNnN")),
    (b'7', Pattern::from_format1("NnNwNnWnW")),
    (b'8', Pattern::from_format1("WnNwNnWnN")),
    (b'9', Pattern::from_format1("NnWwNnWnN")),
    (b'A', Pattern::from_format1("WnNnNwNnW")),
    (b'B', Pattern::from_format1("NnWnNwNnW")),
    (b'C', Pattern::from_format1("WnWnNwNnN")),
    (b'D', Pattern::from_format1("NnNnWwNnW")),
    (b'E', Pattern::from_format1("WnNnWwNnN")),
    (b'F', Pattern::from_format1("NnWnWwNnN")),
    (b'G', Pattern::from_format1("NnNnNwWnW")),
    (b'H', Pattern::from_format1("WnNnNwWnN")),
    (b'I', Pattern::from_format1("NnWnNwWnN")),
    (b'J', Pattern::from_format1("NnNnWwWnN")),
    (b'K', Pattern::from_format1("WnNnNnNwW")),
    (b'L', Pattern::from_format1("NnWnNnNwW")),
    (b'M', Pattern::from_format1("WnWnNnNwN")),
    (b'N', Pattern::from_format1("NnNnWnNwW")),
    (b'O', Pattern::from_format1("WnNnWnNwN")),
    (b'P', Pattern::from_format1("NnWnWnNwN")),
    (b'Q', Pattern::from_format1("NnNnNnWwW")),
    (b'R', Pattern::from_format1("WnNnNnWwN")),
    (b'S', Pattern::from_format1("NnWnNnWwN")),
    (b'T', Pattern::from_format1("NnNnWnWwN")),
    (b'U', Pattern::from_format1("WwNnNnNnW")),
    (b'V', Pattern::from_format1("NwWnNnNnW")),
    (b'W', Pattern::from_format1("WwWnNnNnN")),
    (b'X', Pattern::from_format1("NwNnWnNnW")),
    (b'Y', Pattern::from_format1("WwNnWnNnN")),
    (b'Z', Pattern::from_format1("NwWnWnNnN")),
    (b'-', Pattern::from_format1("NwNnNnWnW")),
    (b'.', Pattern::from_format1("WwNnNnWnN")),
    (b' ', Pattern::from_format1("NwWnNnWnN")),
    (b'$', Pattern::from_format1("NwNwNwNnN")),
    (b'/', Pattern::from_format1("NwNwNnNwN")),
    (b'+', Pattern::from_format1("NwNnNwNwN")),
    (b'%', Pattern::from_format1("NnNwNwNwN")),
    (b'*', Pattern::from_format1("NwNnWnWnN")),
];

// ASCII-indexed view of CHARSET, built at compile time.
static INDEX: [Option<Pattern>; 128] = build_index();

const fn build_index() -> [Option<Pattern>; 128] {
    let mut index = [None; 128];
    let mut i = 0;
    while i < CHARSET_LEN {
        let (c, pattern) = CHARSET[i];
        assert!(index[c as usize].is_none(), "duplicate character in the Code 39 table");
        index[c as usize] = Some(pattern);
        i += 1;
    }
    index
}

/// Returns the pattern of `c`, or `None` if Code 39 can not encode it.
/// Lowercase letters are looked up as their uppercase counterpart.
pub fn lookup(c: char) -> Option<Pattern> {
    if !c.is_ascii() {
        return None;
    }
    INDEX[c.to_ascii_uppercase() as usize]
}

#[inline]
pub fn is_supported(c: char) -> bool {
    lookup(c).is_some()
}

/// Returns the first character of `text` that can not be encoded.
pub fn check(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_supported(c))
}
