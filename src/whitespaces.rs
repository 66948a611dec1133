/// ASCII control whitespace (`\t`, `\n`, `\v`, `\f`, `\r`), the information separators and the space.
#[inline]
pub(crate) fn is_whitespace_1(c: u8) -> bool {
    (9..=13).contains(&c) || (28..=32).contains(&c)
}

/// The three-byte Unicode spaces: U+1680, U+180E, U+2000..=U+200A, U+2028, U+2029, U+205F and U+3000.
#[inline]
pub(crate) fn is_whitespace_3(b1: u8, b2: u8, b3: u8) -> bool {
    match (b1, b2) {
        (225, 154) => b3 == 128,
        (225, 160) => b3 == 142,
        (226, 128) => (128..=138).contains(&b3) || b3 == 168 || b3 == 169,
        (226, 129) => b3 == 159,
        (227, 128) => b3 == 128,
        _ => false,
    }
}

/// Whether the bytes at the start of `s`, which form one UTF-8 sequence of length `width`, are a whitespace.
#[inline]
pub(crate) fn is_whitespace(s: &[u8], width: usize) -> bool {
    match width {
        1 => is_whitespace_1(s[0]),
        3 => is_whitespace_3(s[0], s[1], s[2]),
        _ => false,
    }
}
