//! Cleanup of extracted text runs

use super::cipher::decode_caesar;

/// NUL bytes and U+FFFD show up in text pulled out of broken font maps.
const STRIPPED: [char; 2] = ['\0', '\u{FFFD}'];

/// Trim a single text run, then strip extraction noise from it.
///
/// Returns `None` when nothing but whitespace or noise is left. Whitespace
/// uncovered by stripping (e.g. after a leading NUL) is kept.
pub fn clean_run(run: &str) -> Option<String> {
    let cleaned: String = run.trim().chars().filter(|c| !STRIPPED.contains(c)).collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Join the text runs of each page into one document.
///
/// Every surviving run is followed by a single space and every page by a
/// newline. With `cipher_shift` set, each run is Caesar-decoded after
/// cleaning.
pub fn assemble_pages<P, R>(pages: P, cipher_shift: Option<u8>) -> String
where
    P: IntoIterator,
    P::Item: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    let mut out = String::new();

    for page in pages {
        for run in page {
            let Some(cleaned) = clean_run(run.as_ref()) else {
                continue;
            };
            match cipher_shift {
                Some(shift) => out.push_str(&decode_caesar(&cleaned, shift)),
                None => out.push_str(&cleaned),
            }
            out.push(' ');
        }
        out.push('\n');
    }

    normalize_line_endings(&out)
}
