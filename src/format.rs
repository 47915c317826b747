//! Formatted interpolation
//!
//! Templates such as `"Pi to 2 decimals: {pi:.2f}"` are parsed with the pest
//! grammar in `grammar/template.pest` and rendered against named bindings.
//! The spec mini-language supports `[[fill]align][sign][0][width][grouping]
//! [.precision][type]` with types `f`, `e`, `%`, `d` and `s`.

use indexmap::IndexMap;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{PrimerError, Result};
use crate::value::{Number, Value};

#[derive(Parser)]
#[grammar = "../grammar/template.pest"]
struct TemplateParser;

/// Anything that resolves names to values.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl Bindings for IndexMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits.
    AfterSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Negative,
    Always,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Fixed,
    Exponent,
    Percent,
    Integer,
    Str,
}

impl Kind {
    fn code(self) -> char {
        match self {
            Kind::Fixed => 'f',
            Kind::Exponent => 'e',
            Kind::Percent => '%',
            Kind::Integer => 'd',
            Kind::Str => 's',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    pub zero: bool,
    pub width: Option<usize>,
    pub grouping: Option<char>,
    pub precision: Option<usize>,
    pub kind: Option<Kind>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Negative,
            zero: false,
            width: None,
            grouping: None,
            precision: None,
            kind: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Field { name: String, spec: FormatSpec },
}

/// A parsed interpolation template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let pairs = TemplateParser::parse(Rule::template, source)
            .map_err(|e| PrimerError::Template(e.to_string()))?;

        let template = pairs
            .into_iter()
            .next()
            .ok_or_else(|| PrimerError::Template("Empty template".to_string()))?;

        let mut pieces = Vec::new();
        for pair in template.into_inner() {
            match pair.as_rule() {
                Rule::text => push_text(&mut pieces, pair.as_str()),
                Rule::open_brace => push_text(&mut pieces, "{"),
                Rule::close_brace => push_text(&mut pieces, "}"),
                Rule::field => pieces.push(parse_field(pair)?),
                Rule::EOI => {}
                other => {
                    return Err(PrimerError::Template(format!(
                        "Unexpected rule in template: {:?}",
                        other
                    )))
                }
            }
        }

        Ok(Template { pieces })
    }

    pub fn render(&self, bindings: &impl Bindings) -> Result<String> {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Field { name, spec } => {
                    let value = bindings
                        .lookup(name)
                        .ok_or_else(|| PrimerError::NameError(name.clone()))?;
                    out.push_str(&format_value(value, spec)?);
                }
            }
        }
        Ok(out)
    }
}

/// Parse and render in one step.
pub fn interpolate(source: &str, bindings: &impl Bindings) -> Result<String> {
    Template::parse(source)?.render(bindings)
}

fn push_text(pieces: &mut Vec<Piece>, text: &str) {
    if let Some(Piece::Text(last)) = pieces.last_mut() {
        last.push_str(text);
    } else {
        pieces.push(Piece::Text(text.to_string()));
    }
}

fn parse_field(pair: pest::iterators::Pair<Rule>) -> Result<Piece> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| PrimerError::Template("Expected field name".to_string()))?
        .as_str()
        .to_string();
    let spec = match inner.next() {
        Some(spec) => parse_spec(spec)?,
        None => FormatSpec::default(),
    };
    Ok(Piece::Field { name, spec })
}

fn parse_spec(pair: pest::iterators::Pair<Rule>) -> Result<FormatSpec> {
    let mut spec = FormatSpec::default();
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::fill_align => {
                for fa in part.into_inner() {
                    match fa.as_rule() {
                        Rule::fill => spec.fill = fa.as_str().chars().next().unwrap_or(' '),
                        Rule::align => spec.align = Some(parse_align(fa.as_str())),
                        _ => {}
                    }
                }
            }
            Rule::sign => {
                spec.sign = match part.as_str() {
                    "+" => Sign::Always,
                    " " => Sign::Space,
                    _ => Sign::Negative,
                }
            }
            Rule::zero => spec.zero = true,
            Rule::width => spec.width = Some(parse_count(part.as_str())?),
            Rule::grouping => spec.grouping = part.as_str().chars().next(),
            Rule::precision => {
                let digits = part.as_str().trim_start_matches('.');
                spec.precision = Some(parse_count(digits)?);
            }
            Rule::kind => {
                spec.kind = Some(match part.as_str() {
                    "f" => Kind::Fixed,
                    "e" => Kind::Exponent,
                    "%" => Kind::Percent,
                    "d" => Kind::Integer,
                    _ => Kind::Str,
                })
            }
            _ => {}
        }
    }
    Ok(spec)
}

fn parse_align(s: &str) -> Align {
    match s {
        "<" => Align::Left,
        ">" => Align::Right,
        "^" => Align::Center,
        _ => Align::AfterSign,
    }
}

fn parse_count(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| PrimerError::Template(format!("Too many decimal digits in format string: {}", s)))
}

/// Render one value according to `spec`.
pub fn format_value(value: &Value, spec: &FormatSpec) -> Result<String> {
    let number = value.as_number();
    let numeric = number.is_some() && spec.kind != Some(Kind::Str);

    let body = match (spec.kind, number) {
        (Some(Kind::Str), _) | (None, None) => {
            if spec.sign != Sign::Negative {
                return Err(PrimerError::ValueError(
                    "Sign not allowed in string format specifier".to_string(),
                ));
            }
            if spec.kind == Some(Kind::Str) && !matches!(value, Value::Str(_)) {
                return Err(unknown_code(Kind::Str, value));
            }
            truncate(&value.to_string(), spec.precision)
        }
        (Some(kind @ (Kind::Fixed | Kind::Exponent | Kind::Percent)), Some(n)) => {
            let precision = spec.precision.unwrap_or(6);
            let f = n.as_f64();
            match kind {
                Kind::Fixed => fixed(f, precision),
                Kind::Exponent => exponent(f, precision),
                _ => format!("{}%", fixed(f * 100.0, precision)),
            }
        }
        (Some(Kind::Integer), Some(Number::Int(i))) => i.to_string(),
        (Some(kind), _) => return Err(unknown_code(kind, value)),
        (None, Some(_)) => {
            if spec.precision.is_some() {
                return Err(PrimerError::ValueError(
                    "Precision requires a presentation type for numbers".to_string(),
                ));
            }
            value.to_string()
        }
    };

    if !numeric {
        return Ok(pad(String::new(), body, spec, Align::Left));
    }

    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (false, body),
    };
    let digits = match spec.grouping {
        Some(sep) => group_digits(&digits, sep),
        None => digits,
    };
    let sign = match (negative, spec.sign) {
        (true, _) => "-",
        (false, Sign::Always) => "+",
        (false, Sign::Space) => " ",
        (false, Sign::Negative) => "",
    };
    Ok(pad(sign.to_string(), digits, spec, Align::Right))
}

fn unknown_code(kind: Kind, value: &Value) -> PrimerError {
    PrimerError::ValueError(format!(
        "Unknown format code '{}' for object of type '{}'",
        kind.code(),
        value.type_name()
    ))
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

fn non_finite(f: f64) -> Option<String> {
    if f.is_nan() {
        Some("nan".to_string())
    } else if f.is_infinite() {
        Some(if f > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

fn fixed(f: f64, precision: usize) -> String {
    non_finite(f).unwrap_or_else(|| format!("{:.*}", precision, f))
}

/// `1.50e+03` style: signed exponent with at least two digits.
fn exponent(f: f64, precision: usize) -> String {
    if let Some(s) = non_finite(f) {
        return s;
    }
    let raw = format!("{:.*e}", precision, f);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

/// Insert `sep` every three digits of the integer part.
fn group_digits(digits: &str, sep: char) -> String {
    let split = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let (int_part, rest) = digits.split_at(split);
    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    grouped.push_str(rest);
    grouped
}

fn pad(sign: String, body: String, spec: &FormatSpec, default_align: Align) -> String {
    let (fill, align) = match (spec.align, spec.zero) {
        (Some(align), _) => (spec.fill, align),
        (None, true) => ('0', Align::AfterSign),
        (None, false) => (spec.fill, default_align),
    };
    let len = sign.chars().count() + body.chars().count();
    let missing = spec.width.map_or(0, |w| w.saturating_sub(len));
    let run = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();

    match align {
        Align::Left => format!("{}{}{}", sign, body, run(missing)),
        Align::Right => format!("{}{}{}", run(missing), sign, body),
        Align::Center => {
            let left = missing / 2;
            format!("{}{}{}{}", run(left), sign, body, run(missing - left))
        }
        Align::AfterSign => format!("{}{}{}", sign, run(missing), body),
    }
}
