//! Runtime `%`-verb interpolation for format strings that only exist at run
//! time (for example the CLI's second argument).
//!
//! Formatting never fails. Mismatches render inline markers instead:
//!
//! | situation                 | output                          |
//! |---------------------------|---------------------------------|
//! | verb without an argument  | `%!s(MISSING)`                  |
//! | verb/argument mismatch    | `%!d(string=abc)`               |
//! | trailing `%`              | `%!(NOVERB)`                    |
//! | unused arguments          | `%!(EXTRA string=a, int=2)`     |
//!
//! Code that knows its format at compile time should use the `logger_*!` /
//! `log_*!` macros instead.

use std::fmt::{self, Write as _};
use std::iter::{Peekable, repeat_n};
use std::str::Chars;

/// A single positional argument for [`sprintf`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl Arg<'_> {
    /// Name used in the `%!verb(type=value)` and `EXTRA` markers.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
        }
    }
}

/// The `%v` rendering.
impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{i}"),
            Arg::Uint(u) => write!(f, "{u}"),
            Arg::Float(x) => f.write_str(&float_general(x)),
            Arg::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Str(s.as_str())
    }
}

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<f32> for Arg<'_> {
    fn from(x: f32) -> Self {
        Arg::Float(f64::from(x))
    }
}

impl From<f64> for Arg<'_> {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

macro_rules! arg_from_int {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(v: $t) -> Self {
                    Arg::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

arg_from_int!(Int, i64, i8, i16, i32, i64);
arg_from_int!(Uint, u64, u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Arg::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Arg::Uint(u64::try_from(v).unwrap_or(u64::MAX))
    }
}

/// Largest accepted width or precision.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Default)]
struct Directive {
    minus: bool,
    plus: bool,
    zero: bool,
    sharp: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Populates `format` positionally with `args`.
#[must_use]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut next = 0usize;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                ' ' => spec.space = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = take_number(&mut chars);
        if spec.width.is_some_and(|w| w > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = take_number(&mut chars).unwrap_or(0);
            if precision > MAX_WIDTH {
                out.push_str("%!(BADPREC)");
            } else {
                spec.precision = Some(precision);
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next) {
            Some(arg) => {
                next += 1;
                write_arg(&mut out, verb, &spec, arg);
            }
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
        }
    }

    if let Some(extra) = args.get(next..).filter(|rest| !rest.is_empty()) {
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
    }
    n
}

fn write_arg(out: &mut String, verb: char, spec: &Directive, arg: &Arg<'_>) {
    let rendered = match *arg {
        Arg::Str(s) => render_str(verb, spec, s).map(|body| (body, false)),
        Arg::Int(i) => render_int(verb, spec, i < 0, i.unsigned_abs()).map(|body| (body, true)),
        Arg::Uint(u) => render_int(verb, spec, false, u).map(|body| (body, true)),
        Arg::Float(x) => render_float(verb, spec, x).map(|body| (body, x.is_finite())),
        Arg::Bool(b) => matches!(verb, 't' | 'v').then(|| (b.to_string(), false)),
    };

    match rendered {
        Some((body, numeric)) => pad(out, spec, &body, numeric),
        None => {
            let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
        }
    }
}

fn render_str(verb: char, spec: &Directive, s: &str) -> Option<String> {
    let s = match spec.precision {
        Some(p) => s.char_indices().nth(p).map_or(s, |(idx, _)| &s[..idx]),
        None => s,
    };
    match verb {
        's' | 'v' => Some(s.to_owned()),
        'q' => Some(format!("{s:?}")),
        'x' => Some(s.bytes().map(|b| format!("{b:02x}")).collect()),
        'X' => Some(s.bytes().map(|b| format!("{b:02X}")).collect()),
        _ => None,
    }
}

fn render_int(verb: char, spec: &Directive, negative: bool, magnitude: u64) -> Option<String> {
    let digits = match verb {
        'd' | 'v' => magnitude.to_string(),
        'x' => format!("{magnitude:x}"),
        'X' => format!("{magnitude:X}"),
        'o' => format!("{magnitude:o}"),
        'b' => format!("{magnitude:b}"),
        'c' | 'q' => {
            let ch = u32::try_from(magnitude)
                .ok()
                .filter(|_| !negative)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some(if verb == 'c' {
                ch.to_string()
            } else {
                format!("{ch:?}")
            });
        }
        'U' => return Some(format!("U+{magnitude:04X}")),
        _ => return None,
    };

    let digits = match spec.precision {
        Some(p) if digits.len() < p => format!("{}{digits}", "0".repeat(p - digits.len())),
        _ => digits,
    };
    let radix_prefix = match (spec.sharp, verb) {
        (true, 'x') => "0x",
        (true, 'X') => "0X",
        (true, 'o') => "0",
        (true, 'b') => "0b",
        _ => "",
    };
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    Some(format!("{sign}{radix_prefix}{digits}"))
}

fn render_float(verb: char, spec: &Directive, x: f64) -> Option<String> {
    if !matches!(verb, 'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'v') {
        return None;
    }

    let body = if x.is_finite() {
        match verb {
            'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), x),
            'e' => float_exp(x, spec.precision.unwrap_or(6)),
            'E' => float_exp(x, spec.precision.unwrap_or(6)).to_uppercase(),
            'G' => float_general(x).to_uppercase(),
            _ => float_general(x),
        }
    } else {
        float_general(x)
    };

    if spec.plus && !body.starts_with(['-', '+']) {
        Some(format!("+{body}"))
    } else {
        Some(body)
    }
}

/// `d.ddddde±XX`: at least two exponent digits, always signed.
fn float_exp(x: f64, precision: usize) -> String {
    let raw = format!("{x:.precision$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// Shortest representation, switching to exponent form for very large or
/// very small magnitudes.
fn float_general(x: f64) -> String {
    if !x.is_finite() {
        return if x.is_nan() {
            "NaN".to_owned()
        } else if x > 0.0 {
            "+Inf".to_owned()
        } else {
            "-Inf".to_owned()
        };
    }
    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e21).contains(&abs) {
        let raw = format!("{x:e}");
        if let Some((mantissa, exp)) = raw.split_once('e') {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
        return raw;
    }
    format!("{x}")
}

fn pad(out: &mut String, spec: &Directive, body: &str, numeric: bool) {
    let len = body.chars().count();
    let Some(fill) = spec.width.and_then(|w| w.checked_sub(len)).filter(|&n| n > 0) else {
        out.push_str(body);
        return;
    };

    if spec.minus {
        out.push_str(body);
        out.extend(repeat_n(' ', fill));
    } else if spec.zero {
        // Zeros go between the sign and the digits.
        let (sign, rest) = match body.chars().next() {
            Some(c @ ('-' | '+' | ' ')) if numeric => body.split_at(c.len_utf8()),
            _ => ("", body),
        };
        out.push_str(sign);
        out.extend(repeat_n('0', fill));
        out.push_str(rest);
    } else {
        out.extend(repeat_n(' ', fill));
        out.push_str(body);
    }
}
