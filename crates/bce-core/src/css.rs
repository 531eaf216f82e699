//! CSS timing-function text ↔ `BasicValue`.
//!
//! Built on `winnow` 0.7. Accepts `cubic-bezier(x1, y1, x2, y2)` and the
//! keywords that name a cubic Bezier (`linear`, `ease`, `ease-in`,
//! `ease-out`, `ease-in-out`). Step functions are not curves and are rejected.

use crate::error::ParseError;
use crate::value::BasicValue;
use winnow::ascii::{float, multispace0};
use winnow::combinator::{alt, delimited};
use winnow::prelude::*;

// ─── Presets ─────────────────────────────────────────────────────────────

pub const LINEAR: BasicValue = [0.0, 0.0, 1.0, 1.0];
pub const EASE: BasicValue = [0.25, 0.1, 0.25, 1.0];
pub const EASE_IN: BasicValue = [0.42, 0.0, 1.0, 1.0];
pub const EASE_OUT: BasicValue = [0.0, 0.0, 0.58, 1.0];
pub const EASE_IN_OUT: BasicValue = [0.42, 0.0, 0.58, 1.0];

const PRESETS: [(&str, BasicValue); 5] = [
    ("linear", LINEAR),
    ("ease", EASE),
    ("ease-in", EASE_IN),
    ("ease-out", EASE_OUT),
    ("ease-in-out", EASE_IN_OUT),
];

/// The CSS keyword for `value`, if it is exactly one of the presets.
pub fn preset_name(value: &BasicValue) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(_, preset)| preset == value)
        .map(|(name, _)| *name)
}

// ─── Emit ────────────────────────────────────────────────────────────────

/// `cubic-bezier(x1, y1, x2, y2)` with shortest round-trip numbers.
pub fn format_timing_function(value: &BasicValue) -> String {
    let [x1, y1, x2, y2] = value;
    format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
}

// ─── Parse ───────────────────────────────────────────────────────────────

/// Parse timing-function text into handle components.
#[must_use = "parsing result should be used"]
pub fn parse_timing_function(input: &str) -> Result<BasicValue, ParseError> {
    let syntax = |message: String| ParseError::Syntax {
        input: input.to_string(),
        message,
    };
    let mut rest = input;
    let value = timing_function
        .parse_next(&mut rest)
        .map_err(|e| syntax(format!("{e}")))?;
    if !rest.is_empty() {
        return Err(syntax(format!("unexpected trailing text {rest:?}")));
    }

    for (index, component) in value.iter().enumerate() {
        if !component.is_finite() {
            return Err(ParseError::NonFinite { index });
        }
    }
    // x1 and x2 must stay in [0, 1] or the curve is not a function of time
    for index in [0, 2] {
        if !(0.0..=1.0).contains(&value[index]) {
            return Err(ParseError::XOutOfRange {
                index,
                value: value[index],
            });
        }
    }
    Ok(value)
}

fn timing_function(input: &mut &str) -> ModalResult<BasicValue> {
    delimited(multispace0, alt((cubic_bezier, keyword)), multispace0).parse_next(input)
}

fn cubic_bezier(input: &mut &str) -> ModalResult<BasicValue> {
    let (x1, _, y1, _, x2, _, y2) = delimited(
        ("cubic-bezier", multispace0, '('),
        (component, ',', component, ',', component, ',', component),
        ')',
    )
    .parse_next(input)?;
    Ok([x1, y1, x2, y2])
}

fn component(input: &mut &str) -> ModalResult<f64> {
    delimited(multispace0, float, multispace0).parse_next(input)
}

fn keyword(input: &mut &str) -> ModalResult<BasicValue> {
    // Longest keywords first: `ease` is a prefix of the others.
    alt((
        "ease-in-out".value(EASE_IN_OUT),
        "ease-in".value(EASE_IN),
        "ease-out".value(EASE_OUT),
        "ease".value(EASE),
        "linear".value(LINEAR),
    ))
    .parse_next(input)
}
