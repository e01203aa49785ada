//! Character reference resolution.
//!
//! Named references resolve through a fixed table. Anything the table does not
//! know, and any numeric reference that does not name a valid scalar value, is
//! handed back in its literal `&name;` / `&#body;` form so no text is lost.

use std::borrow::Cow;

/// Resolve a named reference (without `&` and `;`).
pub fn resolve_named(name: &str) -> Option<&'static str> {
    let resolved = match name {
        "nbsp" => "\u{a0}",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "rsquo" => "\u{2019}",
        "lsquo" => "\u{2018}",
        "rdquo" => "\u{201d}",
        "ldquo" => "\u{201c}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "hellip" => "\u{2026}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "bull" => "\u{2022}",
        "middot" => "\u{b7}",
        "deg" => "\u{b0}",
        "times" => "\u{d7}",
        "euro" => "\u{20ac}",
        "pound" => "\u{a3}",
        "cent" => "\u{a2}",
        "sect" => "\u{a7}",
        "para" => "\u{b6}",
        "shy" => "\u{ad}",
        "iexcl" => "\u{a1}",
        "iquest" => "\u{bf}",
        "eacute" => "\u{e9}",
        "egrave" => "\u{e8}",
        "aacute" => "\u{e1}",
        "agrave" => "\u{e0}",
        "uuml" => "\u{fc}",
        "ouml" => "\u{f6}",
        "auml" => "\u{e4}",
        "ccedil" => "\u{e7}",
        "ntilde" => "\u{f1}",
        _ => return None,
    };
    Some(resolved)
}

/// Resolve the body of a numeric reference: `169` or `xA9` / `XA9`.
pub fn resolve_numeric(body: &str) -> Option<char> {
    let code = match body.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Text for a named reference, or the literal reference when unknown.
pub fn named_or_literal(name: &str) -> Cow<'static, str> {
    match resolve_named(name) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("&{name};")),
    }
}

/// Text for a numeric reference, or the literal reference when it does not decode.
pub fn numeric_or_literal(body: &str) -> String {
    match resolve_numeric(body) {
        Some(c) => c.to_string(),
        None => format!("&#{body};"),
    }
}

/// A piece of text split at character references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// `&name;`, holding `name`
    Named(&'a str),
    /// `&#body;`, holding `body`
    Numeric(&'a str),
}

/// Split `text` into literal runs and well-formed references.
///
/// Numeric references need their terminating `;`. Named references may omit
/// it when the name is in the table. An ampersand that does not start a
/// reference stays inside the surrounding literal run.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        rest: text,
        in_attribute: false,
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    in_attribute: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let mut search_from = 0;
        while let Some(offset) = self.rest[search_from..].find('&') {
            let amp = search_from + offset;
            if let Some((segment, len)) = reference_at(&self.rest[amp..], self.in_attribute) {
                if amp > 0 {
                    let text = &self.rest[..amp];
                    self.rest = &self.rest[amp..];
                    return Some(Segment::Text(text));
                }
                self.rest = &self.rest[len..];
                return Some(segment);
            }
            search_from = amp + 1;
        }

        let text = self.rest;
        self.rest = "";
        Some(Segment::Text(text))
    }
}

/// Parse a reference at the start of `s` (which begins with `&`).
/// Returns the segment and the number of bytes it spans.
///
/// Inside attribute values an unterminated name followed by `=` stays
/// literal, so query strings like `?a=1&copy=2` keep their keys.
fn reference_at(s: &str, in_attribute: bool) -> Option<(Segment<'_>, usize)> {
    let body = s.strip_prefix('&')?;
    if let Some(numeric) = body.strip_prefix('#') {
        let (digits, is_hex) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, true),
            None => (numeric, false),
        };
        let len = digits
            .bytes()
            .take_while(|b| {
                if is_hex {
                    b.is_ascii_hexdigit()
                } else {
                    b.is_ascii_digit()
                }
            })
            .count();
        if len == 0 || digits.as_bytes().get(len) != Some(&b';') {
            return None;
        }
        let prefix = if is_hex { 1 } else { 0 };
        let ref_body = &numeric[..prefix + len];
        // & # body ;
        return Some((Segment::Numeric(ref_body), 2 + ref_body.len() + 1));
    }

    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = body.bytes().take_while(u8::is_ascii_alphanumeric).count();
    let name = &body[..len];
    if body.as_bytes().get(len) == Some(&b';') {
        return Some((Segment::Named(name), 1 + len + 1));
    }
    // legacy form: a known name ended by any non-alphanumeric character
    if in_attribute && body.as_bytes().get(len) == Some(&b'=') {
        return None;
    }
    resolve_named(name)?;
    Some((Segment::Named(name), 1 + len))
}

/// Decode every reference in `text`, used for attribute values.
pub fn decode_references(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let attribute_segments = Segments {
        rest: text,
        in_attribute: true,
    };
    for segment in attribute_segments {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Named(name) => out.push_str(&named_or_literal(name)),
            Segment::Numeric(body) => out.push_str(&numeric_or_literal(body)),
        }
    }
    out
}
