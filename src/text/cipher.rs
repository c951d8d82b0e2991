/// Undo a Caesar shift on ASCII letters.
///
/// Each letter moves back `shift` places (mod 26) with case preserved.
/// Digits, punctuation, whitespace and non-ASCII characters pass through.
pub fn decode_caesar(text: &str, shift: u8) -> String {
    let shift = shift % 26;

    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate_back(c, b'A', shift),
            'a'..='z' => rotate_back(c, b'a', shift),
            _ => c,
        })
        .collect()
}

#[inline]
fn rotate_back(c: char, base: u8, shift: u8) -> char {
    let offset = c as u8 - base;
    (base + (offset + 26 - shift) % 26) as char
}
