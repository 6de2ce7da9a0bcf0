// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tolerant CSV reader for spreadsheet exports.
//!
//! This is not an RFC 4180 parser. Records never span lines, and malformed quoting is
//! accepted rather than reported: a stray `"` simply toggles quoted mode, and an
//! unterminated quoted field runs to the end of its line.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{is_not, tag},
          character::complete::{char, none_of},
          combinator::{map, opt, value},
          multi::{fold_many0, separated_list1}};

pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
pub const FIELD_SEPARATOR: char = ',';
pub const QUOTE: char = '"';
const ESCAPED_QUOTE: &str = "\"\"";
const BARE_CHUNK_STOP_CHARS: &str = ",\"";

/// One physical line split into fields. Row 0 of [`parse_csv`] output is the header.
pub type CsvRecord = Vec<String>;

/// Parse `text` into records.
///
/// - A leading byte order mark is stripped.
/// - `\r\n` and bare `\r` are normalized to `\n`.
/// - Lines that are blank after trimming are skipped.
/// - Each remaining (trimmed) line becomes one [`CsvRecord`]; nothing is validated, not
///   even the header.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<CsvRecord> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_csv_line)
        .collect()
}

/// Split a single line into fields. Always yields at least one field.
#[must_use]
pub fn parse_csv_line(line: &str) -> CsvRecord {
    if !line.matches(QUOTE).count().is_multiple_of(2) {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "unbalanced quotes, reading rest of line as quoted text",
            line = %line
        );
    }

    match parse_fields(line) {
        Ok((_, fields)) => fields,
        // The field grammar accepts every input, so this arm is never taken.
        Err(_) => vec![line.to_string()],
    }
}

/// | input                  | output                        |
/// | ---------------------- | ----------------------------- |
/// | `a,b`                  | `["a", "b"]`                  |
/// | `"hello, world",2`     | `["hello, world", "2"]`       |
/// | `"he said ""hi""",2`   | `["he said \"hi\"", "2"]`     |
/// | `a,,`                  | `["a", "", ""]`               |
fn parse_fields(input: &str) -> IResult<&str, CsvRecord> {
    separated_list1(char(FIELD_SEPARATOR), parse_field).parse(input)
}

/// A field is any run of quoted and bare chunks, e.g. `ab"c,d"e` reads as `abc,de`.
fn parse_field(input: &str) -> IResult<&str, String> {
    fold_many0(
        alt((parse_quoted_chunk, parse_bare_chunk)),
        String::new,
        |mut acc, chunk| {
            acc.push_str(&chunk);
            acc
        },
    )
    .parse(input)
}

fn parse_bare_chunk(input: &str) -> IResult<&str, String> {
    map(is_not(BARE_CHUNK_STOP_CHARS), str::to_string).parse(input)
}

/// `"..."` where `""` is a literal quote. The closing quote is optional.
fn parse_quoted_chunk(input: &str) -> IResult<&str, String> {
    let (rem, (_open, text, _close)) = (
        char(QUOTE),
        fold_many0(
            alt((value(QUOTE, tag(ESCAPED_QUOTE)), none_of(ESCAPED_QUOTE))),
            String::new,
            |mut acc, ch| {
                acc.push(ch);
                acc
            },
        ),
        opt(char(QUOTE)),
    )
        .parse(input)?;
    Ok((rem, text))
}
