//! Single-line classification for `key=value` config files.

/// One classified line of a config file.
///
/// A `Setting` keeps a borrow of its source line so an unchanged setting can
/// be re-emitted byte-identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine<'a> {
    Setting { key: &'a str, value: &'a str, raw: &'a str },
    PassThrough(&'a str),
}

/// Classify a single line, trailing terminator included if present.
///
/// Rules:
/// - No `=` at all: not a setting, pass through.
/// - The first `=` ends the key; everything after it belongs to the value,
///   so values may themselves contain `=`.
/// - A key containing the literal text `[comment]` anywhere past its first
///   character marks a comment-definition line, passed through. The match is
///   deliberately a loose substring check, and a key *starting* with
///   `[comment]` is still a setting; both quirks are long-standing behavior
///   in deployed config files and are kept on purpose.
/// - The key is trimmed of surrounding whitespace. The value keeps all of its
///   whitespace except exactly one trailing `\n`.
///
/// Parsing never fails; anything unrecognizable passes through.
pub fn parse_line(line: &str) -> ConfigLine<'_> {
    let Some((key, rest)) = line.split_once('=') else {
        return ConfigLine::PassThrough(line);
    };

    if key.find("[comment]").is_some_and(|pos| pos > 0) {
        return ConfigLine::PassThrough(line);
    }

    let value = rest.strip_suffix('\n').unwrap_or(rest);
    ConfigLine::Setting { key: key.trim(), value, raw: line }
}
