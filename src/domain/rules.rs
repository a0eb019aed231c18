//! Field rules for the signup form.
//!
//! Every field owns an ordered chain of rules. A chain is evaluated front to
//! back and stops at the first rule the value violates, so each field reports
//! at most one message.

use std::sync::LazyLock;

use regex::Regex;

use super::models::Field;

pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_TOO_SHORT: &str = "Name needs to be at least 2 characters long.";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const AGE_NOT_A_NUMBER: &str = "Age must be a number";
    pub const AGE_NOT_POSITIVE: &str = "Age must be a positive number";
    pub const AGE_NOT_INTEGER: &str = "Age must be an integer";
    pub const AGE_TOO_YOUNG: &str = "You need to be at least 18 years old";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Invalid email";
}

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE: f64 = 18.0;

// WHATWG "valid e-mail address".
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// A single predicate paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub message: &'static str,
    /// Returns `true` when the value satisfies the rule.
    pub check: fn(&str) -> bool,
}

impl Rule {
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

static NAME_RULES: [Rule; 2] = [
    Rule {
        message: messages::NAME_REQUIRED,
        check: is_present,
    },
    Rule {
        message: messages::NAME_TOO_SHORT,
        check: has_min_name_length,
    },
];

static AGE_RULES: [Rule; 5] = [
    Rule {
        message: messages::AGE_REQUIRED,
        check: has_age_text,
    },
    Rule {
        message: messages::AGE_NOT_A_NUMBER,
        check: is_numeric,
    },
    Rule {
        message: messages::AGE_NOT_POSITIVE,
        check: is_positive,
    },
    Rule {
        message: messages::AGE_NOT_INTEGER,
        check: is_integer,
    },
    Rule {
        message: messages::AGE_TOO_YOUNG,
        check: is_adult,
    },
];

static EMAIL_RULES: [Rule; 2] = [
    Rule {
        message: messages::EMAIL_REQUIRED,
        check: is_present,
    },
    Rule {
        message: messages::EMAIL_INVALID,
        check: is_email,
    },
];

/// The rule chain for `field`, in evaluation order.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => &NAME_RULES,
        Field::Age => &AGE_RULES,
        Field::Email => &EMAIL_RULES,
    }
}

// Signed decimal or `Infinity`, as a whole string or as the longest prefix.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("decimal pattern is a valid regex")
});

/// Interprets age text as a number the way a browser form coerces it.
///
/// All whitespace is removed first, so `" 4 2 "` reads as 42. The compact
/// text is then read as a whole numeric literal: decimal with an optional
/// exponent, `Infinity`, or unsigned `0x`/`0o`/`0b` integers. When that
/// fails, the longest decimal prefix is used instead, so `"20 years"` reads
/// as 20. Rust spellings such as `inf` and `nan` are not numbers.
///
/// Returns `None` for blank or non-numeric text.
pub fn parse_age(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    parse_literal(&compact).or_else(|| parse_decimal_prefix(&compact))
}

fn parse_literal(text: &str) -> Option<f64> {
    if let Some(n) = parse_radix_literal(text) {
        return Some(n);
    }
    let prefix = DECIMAL_LITERAL.find(text)?;
    if prefix.end() != text.len() {
        return None;
    }
    decimal_value(prefix.as_str())
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn parse_decimal_prefix(text: &str) -> Option<f64> {
    DECIMAL_LITERAL
        .find(text)
        .and_then(|prefix| decimal_value(prefix.as_str()))
}

fn decimal_value(literal: &str) -> Option<f64> {
    match literal {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => literal.parse::<f64>().ok(),
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

// Counted in characters as typed; whitespace is not trimmed.
fn has_min_name_length(value: &str) -> bool {
    value.chars().count() >= MIN_NAME_LENGTH
}

fn has_age_text(value: &str) -> bool {
    value.chars().any(|c| !c.is_whitespace())
}

fn is_numeric(value: &str) -> bool {
    parse_age(value).is_some()
}

fn is_positive(value: &str) -> bool {
    parse_age(value).is_some_and(|n| n > 0.0)
}

fn is_integer(value: &str) -> bool {
    parse_age(value).is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}

fn is_adult(value: &str) -> bool {
    parse_age(value).is_some_and(|n| n >= MIN_AGE)
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
