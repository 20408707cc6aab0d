//! # Default Value Rendering
//!
//! The short, human-readable rendering of a value used in argument
//! mismatch messages. It deliberately does not enumerate object contents:
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | `null` | `null` |
//! | `true` | `true` |
//! | `42`, `4.0` | `42`, `4` |
//! | `1152921504606846976` | `1152921504606847000` |
//! | `"abc"` | `abc` (no quotes) |
//! | `{"id": 1}` | `[object Object]` |
//! | `[1, [2, null], "x"]` | `1,2,,x` |
//!
//! Array elements are joined by `,` and a `null` element renders empty.
//!
//! Numbers are treated as IEEE-754 doubles. An integer beyond
//! `±(2^53 - 1)` renders as the nearest double, and an integral value below
//! `1e21` prints the shortest round-trip digits padded with zeros.

use std::fmt;

use serde_json::{Number, Value};

/// Rendering of an object, independent of its fields.
pub const OBJECT_RENDERING: &str = "[object Object]";

/// `Display` adapter producing the default rendering of a value.
#[derive(Debug, Clone, Copy)]
pub struct DefaultRendering<'a>(pub &'a Value);

impl fmt::Display for DefaultRendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, n),
            Value::String(s) => f.write_str(s),
            Value::Object(_) => f.write_str(OBJECT_RENDERING),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{}", DefaultRendering(item))?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Default rendering of `value` as an owned string.
pub fn render_value(value: &Value) -> String {
    DefaultRendering(value).to_string()
}

/// Largest integer every double represents exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return write!(f, "{i}");
        }
    } else if let Some(u) = n.as_u64() {
        if u <= MAX_SAFE_INTEGER {
            return write!(f, "{u}");
        }
    }
    let Some(x) = n.as_f64() else {
        return write!(f, "{n}");
    };
    if x == 0.0 {
        return f.write_str("0");
    }
    if x.fract() == 0.0 && x.abs() < 1e21 {
        return write_integral(f, x);
    }
    write!(f, "{n}")
}

// `{:e}` yields the shortest round-trip digits, e.g. "1.152921504606847e18".
fn write_integral(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let scientific = format!("{:e}", x.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: usize = exponent.parse().unwrap_or(0);
    if x < 0.0 {
        f.write_str("-")?;
    }
    f.write_str(&digits)?;
    f.write_str(&"0".repeat((exponent + 1).saturating_sub(digits.len())))
}
