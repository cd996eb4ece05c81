//! Free-text description → structured fields
//!
//! Postman parameter descriptions are exported as loosely formatted blocks:
//!
//! ```text
//! Required
//! Yes
//! Type
//! String
//! Description
//! Name of the gateway
//! Example(s)
//! "gw-1"
//! Default Value
//! ""
//! ```
//!
//! Each field is a header line followed by a value line. Fields are looked up
//! independently through a fixed table of (header, capture shape) rules. A
//! missing header or a value line that does not fit the shape yields `None`,
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

/// A named field recoverable from a description block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Required,
    Description,
    Type,
    Example,
    Default,
}

/// How the value line after a header is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// First word token
    Word,
    /// The entire line, possibly empty
    Line,
    /// First non-whitespace token, quote characters removed
    Token,
    /// Leading run of non-word characters
    NonWord,
}

struct FieldRule {
    field: Field,
    header: &'static str,
    capture: Capture,
}

const FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Required,
        header: "Required",
        capture: Capture::Word,
    },
    FieldRule {
        field: Field::Description,
        header: "Description",
        capture: Capture::Line,
    },
    FieldRule {
        field: Field::Type,
        header: "Type",
        capture: Capture::Word,
    },
    FieldRule {
        field: Field::Example,
        header: "Example(s)",
        capture: Capture::Token,
    },
    FieldRule {
        field: Field::Default,
        header: "Default Value",
        capture: Capture::NonWord,
    },
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)").expect("word regex is valid"));
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)").expect("token regex is valid"));
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\w\n]*)").expect("non-word regex is valid"));

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Required,
        Field::Description,
        Field::Type,
        Field::Example,
        Field::Default,
    ];

    // FIELD_RULES is declared in variant order
    fn rule(self) -> &'static FieldRule {
        let rule = &FIELD_RULES[self as usize];
        debug_assert_eq!(rule.field, self);
        rule
    }

    /// Header line that introduces this field.
    pub fn header(self) -> &'static str {
        self.rule().header
    }
}

impl Capture {
    fn apply(self, line: &str) -> Option<String> {
        match self {
            Self::Line => Some(line.trim().to_string()),
            Self::Word => WORD_RE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string()),
            Self::Token => TOKEN_RE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().replace('"', "")),
            Self::NonWord => NON_WORD_RE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string()),
        }
    }
}

/// Extract one field from a description block.
///
/// The first line equal to the field's header (surrounding whitespace
/// ignored) wins; the line right after it is matched against the field's
/// capture shape.
pub fn extract_field(text: &str, field: Field) -> Option<String> {
    let rule = field.rule();
    let mut lines = text.lines();
    lines.find(|line| line.trim() == rule.header)?;
    let value_line = lines.next()?;
    rule.capture.apply(value_line)
}

/// All five fields of one description block, empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub required: String,
    pub description: String,
    pub type_name: String,
    pub example: String,
    pub default_value: String,
}

impl ExtractedFields {
    pub fn from_text(text: &str) -> Self {
        let get = |field| extract_field(text, field).unwrap_or_default();
        Self {
            required: get(Field::Required),
            description: get(Field::Description),
            type_name: get(Field::Type),
            example: get(Field::Example),
            default_value: get(Field::Default),
        }
    }
}
