//! Word wrapping for the `%description` section

use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_LINE_WIDTH: usize = 80;

lazy_static! {
    static ref NEWLINE_RE: Regex = Regex::new(r"\n").unwrap();
    static ref DEFAULT_LINE_RE: Regex = line_pattern(DEFAULT_LINE_WIDTH).unwrap();
}

fn line_pattern(width: usize) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?m)(.{{1,{}}})(\s+|$)", width))
}

/// Wrap `text` greedily at whitespace into lines of at most `width` characters.
///
/// A whitespace run that ends a line, existing newlines included, collapses
/// into a single line break. Returns `None` for a zero width or one too
/// large to build a pattern for.
pub fn word_wrap(text: &str, width: usize) -> Option<String> {
    if width == 0 {
        return None;
    }

    let custom;
    let line_re = if width == DEFAULT_LINE_WIDTH {
        &*DEFAULT_LINE_RE
    } else {
        custom = line_pattern(width).ok()?;
        &custom
    };

    let paragraphs = NEWLINE_RE.replace_all(text, "\n\n");
    let wrapped = line_re.replace_all(&paragraphs, "${1}\n");
    Some(wrapped.trim().to_string())
}
