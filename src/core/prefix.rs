//! Prefix template compiler
//!
//! A prefix is the text put in front of every emitted line. It may contain
//! placeholders of the form `{{.X}}` (whitespace inside the braces is
//! allowed) where `X` is one of a fixed set of letters modelled on the
//! `GNU date` format commands:
//!
//! | token | meaning                       | example               |
//! |-------|-------------------------------|-----------------------|
//! | `F`   | full date                     | `2016-01-04`          |
//! | `T`   | 24-hour time                  | `16:52:36`            |
//! | `r`   | 12-hour clock time            | `4:52:36 PM`          |
//! | `Y`   | year                          | `2016`                |
//! | `y`   | last two digits of year       | `16`                  |
//! | `m`   | month                         | `01`                  |
//! | `b`   | abbreviated month name        | `Jan`                 |
//! | `B`   | full month name               | `January`             |
//! | `d`   | day of month                  | `04`                  |
//! | `a`   | abbreviated weekday name      | `Mon`                 |
//! | `A`   | full weekday name             | `Monday`              |
//! | `H`   | 24-hour clock hour            | `16`                  |
//! | `I`   | 12-hour clock hour            | `04`                  |
//! | `M`   | minute                        | `52`                  |
//! | `S`   | second                        | `36`                  |
//! | `p`   | AM or PM                      | `PM`                  |
//! | `O`   | `F` and `T` joined by a space | `2016-01-04 16:52:36` |
//! | `Q`   | urgency level of the message  | `info`                |
//!
//! `{{- .X}}` and `{{.X -}}` trim the whitespace before or after the
//! placeholder, so `"[ {{- .Y -}} ]"` renders as `[2016]`.
//!
//! Compilation happens once, when the logger is built. The result is a
//! chrono strftime layout in which every literal character is escaped and
//! the urgency placeholder is replaced by a sentinel code point, so that each
//! log call only has to format the current local time and, if needed,
//! substitute the level name.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rust_prefix_logger::{CompiledPrefix, UrgencyLevel};
//!
//! let prefix = CompiledPrefix::compile("{{.O}} [{{.Q}}]: ").unwrap();
//! let at = Utc.with_ymd_and_hms(2016, 1, 4, 16, 52, 36).unwrap();
//!
//! assert_eq!(
//!     prefix.render_at(&at, UrgencyLevel::Info),
//!     "2016-01-04 16:52:36 [info]: "
//! );
//! ```

use super::error::{LoggerError, Result};
use super::urgency_level::UrgencyLevel;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::str::FromStr;
use std::sync::LazyLock;

/// `{{ .X }}` with exactly one ASCII word character. A raw prefix without any
/// match is treated as plain text, even if it contains braces.
static PLACEHOLDER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[\t\n\f\r ]*\.[0-9A-Za-z_][\t\n\f\r ]*\}\}")
        .expect("placeholder shape pattern is valid")
});

/// Whitespace removed next to a `{{- ` or ` -}}` trim marker.
const TRIM_SPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Unicode private use area. chrono never emits these code points.
const SENTINEL_CANDIDATES: std::ops::RangeInclusive<u32> = 0xE000..=0xF8FF;

/// One recognized placeholder letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    FullDate,
    Time,
    ClockTime12,
    Year,
    ShortYear,
    Month,
    MonthAbbrev,
    MonthName,
    Day,
    WeekdayAbbrev,
    Weekday,
    Hour24,
    Hour12,
    Minute,
    Second,
    Meridiem,
    DateTime,
    Urgency,
}

impl Placeholder {
    pub const ALL: [Placeholder; 18] = [
        Placeholder::FullDate,
        Placeholder::Time,
        Placeholder::ClockTime12,
        Placeholder::Year,
        Placeholder::ShortYear,
        Placeholder::Month,
        Placeholder::MonthAbbrev,
        Placeholder::MonthName,
        Placeholder::Day,
        Placeholder::WeekdayAbbrev,
        Placeholder::Weekday,
        Placeholder::Hour24,
        Placeholder::Hour12,
        Placeholder::Minute,
        Placeholder::Second,
        Placeholder::Meridiem,
        Placeholder::DateTime,
        Placeholder::Urgency,
    ];

    pub fn from_token(token: char) -> Option<Self> {
        let placeholder = match token {
            'F' => Placeholder::FullDate,
            'T' => Placeholder::Time,
            'r' => Placeholder::ClockTime12,
            'Y' => Placeholder::Year,
            'y' => Placeholder::ShortYear,
            'm' => Placeholder::Month,
            'b' => Placeholder::MonthAbbrev,
            'B' => Placeholder::MonthName,
            'd' => Placeholder::Day,
            'a' => Placeholder::WeekdayAbbrev,
            'A' => Placeholder::Weekday,
            'H' => Placeholder::Hour24,
            'I' => Placeholder::Hour12,
            'M' => Placeholder::Minute,
            'S' => Placeholder::Second,
            'p' => Placeholder::Meridiem,
            'O' => Placeholder::DateTime,
            'Q' => Placeholder::Urgency,
            _ => return None,
        };
        Some(placeholder)
    }

    /// Look up a field name as written after the dot. Only single letters
    /// are ever recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(token), None) => Self::from_token(token),
            _ => None,
        }
    }

    pub fn token(&self) -> char {
        match self {
            Placeholder::FullDate => 'F',
            Placeholder::Time => 'T',
            Placeholder::ClockTime12 => 'r',
            Placeholder::Year => 'Y',
            Placeholder::ShortYear => 'y',
            Placeholder::Month => 'm',
            Placeholder::MonthAbbrev => 'b',
            Placeholder::MonthName => 'B',
            Placeholder::Day => 'd',
            Placeholder::WeekdayAbbrev => 'a',
            Placeholder::Weekday => 'A',
            Placeholder::Hour24 => 'H',
            Placeholder::Hour12 => 'I',
            Placeholder::Minute => 'M',
            Placeholder::Second => 'S',
            Placeholder::Meridiem => 'p',
            Placeholder::DateTime => 'O',
            Placeholder::Urgency => 'Q',
        }
    }

    /// strftime fragment for date/time placeholders; `None` for the urgency
    /// placeholder, which is resolved per call.
    pub fn layout(&self) -> Option<&'static str> {
        let layout = match self {
            Placeholder::FullDate => "%Y-%m-%d",
            Placeholder::Time => "%H:%M:%S",
            Placeholder::ClockTime12 => "%-I:%M:%S %p",
            Placeholder::Year => "%Y",
            Placeholder::ShortYear => "%y",
            Placeholder::Month => "%m",
            Placeholder::MonthAbbrev => "%b",
            Placeholder::MonthName => "%B",
            Placeholder::Day => "%d",
            Placeholder::WeekdayAbbrev => "%a",
            Placeholder::Weekday => "%A",
            Placeholder::Hour24 => "%H",
            Placeholder::Hour12 => "%I",
            Placeholder::Minute => "%M",
            Placeholder::Second => "%S",
            Placeholder::Meridiem => "%p",
            Placeholder::DateTime => "%Y-%m-%d %H:%M:%S",
            Placeholder::Urgency => return None,
        };
        Some(layout)
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Field(Placeholder),
}

/// A prefix validated and compiled into a reusable strftime layout.
///
/// Immutable once built. Rendering the same instant through the same
/// compiled prefix always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPrefix {
    raw: String,
    is_template: bool,
    time_layout: String,
    has_urgency: bool,
    sentinel: char,
}

impl CompiledPrefix {
    /// Compile a raw prefix.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::TemplateSyntax`] for malformed `{{ ... }}` actions
    /// - [`LoggerError::UnknownPlaceholder`] for a field name outside the
    ///   recognized set, e.g. `{{.z}}`
    pub fn compile(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();

        if !PLACEHOLDER_SHAPE.is_match(&raw) {
            return Ok(Self {
                time_layout: raw.clone(),
                raw,
                ..Self::default()
            });
        }

        let sentinel = pick_sentinel(&raw)?;
        let mut time_layout = String::with_capacity(raw.len() * 2);
        let mut has_urgency = false;

        for segment in tokenize(&raw)? {
            match segment {
                Segment::Literal(text) => push_escaped(&mut time_layout, text),
                Segment::Field(placeholder) => match placeholder.layout() {
                    Some(fragment) => time_layout.push_str(fragment),
                    None => {
                        time_layout.push(sentinel);
                        has_urgency = true;
                    }
                },
            }
        }

        if StrftimeItems::new(&time_layout).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::template_syntax(
                0,
                format!("prefix compiled to an invalid time layout `{}`", time_layout),
            ));
        }

        Ok(Self {
            raw,
            is_template: true,
            time_layout,
            has_urgency,
            sentinel,
        })
    }

    /// The prefix exactly as configured
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True if at least one recognized placeholder was found
    pub fn is_template(&self) -> bool {
        self.is_template
    }

    /// The strftime layout rendered on each call (the raw text for literal
    /// prefixes)
    pub fn time_layout(&self) -> &str {
        &self.time_layout
    }

    /// True if the prefix contains `{{.Q}}`
    pub fn has_urgency(&self) -> bool {
        self.has_urgency
    }

    /// Render against the current local time.
    pub fn render(&self, level: UrgencyLevel) -> Cow<'_, str> {
        if !self.is_template {
            return Cow::Borrowed(&self.raw);
        }
        Cow::Owned(self.render_template(&Local::now(), level))
    }

    /// Render against a given instant, in that instant's time zone.
    pub fn render_at<Tz>(&self, at: &DateTime<Tz>, level: UrgencyLevel) -> Cow<'_, str>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if !self.is_template {
            return Cow::Borrowed(&self.raw);
        }
        Cow::Owned(self.render_template(at, level))
    }

    fn render_template<Tz>(&self, at: &DateTime<Tz>, level: UrgencyLevel) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(self.time_layout.len() + 16);
        // The layout was checked for invalid items in `compile`.
        let _ = write!(out, "{}", at.format(&self.time_layout));

        if self.has_urgency {
            out = out.replace(self.sentinel, level.as_str());
        }
        out
    }
}

impl fmt::Display for CompiledPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for CompiledPrefix {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

fn tokenize(raw: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut trim_next = false;

    while let Some(found) = raw[cursor..].find("{{") {
        let open = cursor + found;
        let body_start = open + 2;
        let close = raw[body_start..]
            .find("}}")
            .map(|offset| body_start + offset)
            .ok_or_else(|| LoggerError::template_syntax(open, "unclosed action"))?;

        let (body, trim_before, trim_after) = split_trim_markers(&raw[body_start..close]);

        let mut literal = &raw[cursor..open];
        if trim_next {
            literal = literal.trim_start_matches(TRIM_SPACE);
        }
        if trim_before {
            literal = literal.trim_end_matches(TRIM_SPACE);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        segments.push(Segment::Field(parse_action(body, open)?));
        trim_next = trim_after;
        cursor = close + 2;
    }

    let mut rest = &raw[cursor..];
    if trim_next {
        rest = rest.trim_start_matches(TRIM_SPACE);
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// Strip `- ` / ` -` trim markers from an action body.
///
/// Returns the remaining body and whether whitespace before and after the
/// action has to be trimmed. A dash not separated by whitespace is left in
/// place and rejected by [`parse_action`].
fn split_trim_markers(body: &str) -> (&str, bool, bool) {
    let (body, before) = match body.strip_prefix('-') {
        Some(rest) if rest.starts_with(TRIM_SPACE) => (rest, true),
        _ => (body, false),
    };
    let (body, after) = match body.strip_suffix('-') {
        Some(rest) if rest.ends_with(TRIM_SPACE) => (rest, true),
        _ => (body, false),
    };
    (body, before, after)
}

fn parse_action(body: &str, position: usize) -> Result<Placeholder> {
    let action = body.trim();
    if action.is_empty() {
        return Err(LoggerError::template_syntax(position, "missing value for action"));
    }

    let Some(name) = action.strip_prefix('.') else {
        return Err(LoggerError::template_syntax(
            position,
            format!("unsupported action `{}`, expected a field such as `.Y`", action),
        ));
    };

    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(LoggerError::template_syntax(
            position,
            format!("malformed field name `.{}`", name),
        ));
    }

    Placeholder::from_name(name).ok_or_else(|| LoggerError::unknown_placeholder(name))
}

fn push_escaped(layout: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            layout.push_str("%%");
        } else {
            layout.push(c);
        }
    }
}

fn pick_sentinel(raw: &str) -> Result<char> {
    SENTINEL_CANDIDATES
        .filter_map(char::from_u32)
        .find(|c| !raw.contains(*c))
        .ok_or_else(|| {
            LoggerError::template_syntax(0, "prefix leaves no free sentinel code point")
        })
}
