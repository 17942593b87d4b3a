//! C# escaping utilities.

use std::borrow::Cow;

/// The only project language the generator emits code for.
pub const SUPPORTED_LANGUAGE: &str = "C#";

/// Escapes text for use inside an XML documentation comment.
///
/// The five XML-significant characters are replaced by their entity forms:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&apos;`
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_xml_doc(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Characters C# treats as the end of a line.
pub const LINE_TERMINATORS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Splits text into the lines C# would see.
///
/// Every C# line terminator ends a line, with `\r\n` counting as one.
/// Trailing terminators are dropped.
pub fn doc_lines(text: &str) -> Vec<&str> {
    let text = text.trim_end_matches(&LINE_TERMINATORS[..]);
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_TERMINATORS.contains(&c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Renders a C# verbatim string literal (`@"..."`).
///
/// Verbatim literals take every character literally, including backslashes and
/// line breaks. The only escape is a doubled quote: `"` becomes `""`.
pub fn verbatim_string(value: &str) -> String {
    let quotes = value.matches('"').count();
    let mut result = String::with_capacity(value.len() + quotes + 3);
    result.push_str("@\"");
    for c in value.chars() {
        if c == '"' {
            result.push_str("\"\"");
        } else {
            result.push(c);
        }
    }
    result.push('"');
    result
}
