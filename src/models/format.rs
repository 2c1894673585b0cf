//! Typed formatting of facts into display values.
//!
//! Each [`FieldDescriptor`](super::FieldDescriptor) declares a
//! [`FieldFormat`]. Applying it to a [`Fact`] yields a [`Formatted`] value or a
//! [`FormatMismatch`] when the provider returned the wrong kind of fact.

use thiserror::Error;

use super::fact::Fact;

/// Raw battery voltage byte scale: `volts = raw * 5.0 / 256.0`.
pub const VOLTAGE: FieldFormat = FieldFormat::Scaled {
    factor: 5.0 / 256.0,
    precision: 1,
    unit: " V",
};

/// Shown in place of a fact that could not be resolved.
pub const UNAVAILABLE: &str = "N/A";

/// Shown in place of a sensitive fact while reveal mode is off.
pub const REDACTED: &str = "";

/// Wi-Fi strength bars (0..=3) shown as a percentage.
pub const SIGNAL: FieldFormat = FieldFormat::Scaled {
    factor: 100.0 / 3.0,
    precision: 0,
    unit: "%",
};

/// How a fact is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldFormat {
    /// Any fact, via its `Display` form.
    Text,
    /// Plain decimal integer.
    Integer,
    /// Upper-case hexadecimal, zero padded to `width` digits.
    Hex { width: usize },
    /// Integer followed by `%`.
    Percentage,
    /// `raw (scaled unit)` where `scaled = raw * factor`.
    Scaled {
        factor: f64,
        precision: usize,
        unit: &'static str,
    },
    /// Boolean mapped to one of two words.
    Toggle { on: &'static str, off: &'static str },
    /// Byte count in binary units.
    ByteSize,
    /// Used/total ratio drawn as a bar.
    Meter,
}

/// A formatted field value, ready for the panel renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    Text(String),
    Meter { ratio: f64, caption: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{format:?} cannot render {fact:?}")]
pub struct FormatMismatch {
    pub format: FieldFormat,
    pub fact: Fact,
}

impl FieldFormat {
    pub fn apply(&self, fact: &Fact) -> Result<Formatted, FormatMismatch> {
        let text = match (self, fact) {
            (FieldFormat::Text, fact) => fact.to_string(),
            (FieldFormat::Integer, Fact::Unsigned(value)) => value.to_string(),
            (FieldFormat::Hex { width }, Fact::Unsigned(value)) => {
                format!("{:0width$X}", value, width = *width)
            }
            (FieldFormat::Percentage, Fact::Unsigned(value)) => format!("{}%", value),
            (
                FieldFormat::Scaled {
                    factor,
                    precision,
                    unit,
                },
                Fact::Unsigned(raw),
            ) => format!(
                "{} ({:.*}{})",
                raw,
                *precision,
                *raw as f64 * factor,
                unit
            ),
            (FieldFormat::Toggle { on, off }, Fact::Flag(flag)) => {
                (if *flag { on } else { off }).to_string()
            }
            (FieldFormat::ByteSize, Fact::Unsigned(bytes)) => human_bytes(*bytes),
            (FieldFormat::Meter, Fact::Usage { used, total }) => {
                let ratio = usage_ratio(*used, *total);
                let caption = if *total == 0 {
                    UNAVAILABLE.to_string()
                } else {
                    format!("{:.0}%", ratio * 100.0)
                };
                return Ok(Formatted::Meter { ratio, caption });
            }
            _ => {
                return Err(FormatMismatch {
                    format: *self,
                    fact: fact.clone(),
                })
            }
        };
        Ok(Formatted::Text(text))
    }
}

/// Fraction of `total` in use, clamped to `0.0..=1.0`. A zero total is empty.
pub fn usage_ratio(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64).clamp(0.0, 1.0)
}

/// Human-readable byte size in binary units.
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{size:.1} {unit}")
}
