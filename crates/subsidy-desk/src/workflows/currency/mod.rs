//! USD to CLP conversion at a single fixed exchange rate.

mod format;
pub mod router;

pub use format::format_es_cl;
pub use router::currency_router;

use serde::{Deserialize, Serialize};

/// Pesos per dollar used when no rate is configured.
pub const DEFAULT_USD_CLP_RATE: f64 = 745.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("enter an amount in dollars")]
    Empty,
    #[error("'{0}' is not a valid number; only positive amounts, decimals included, are accepted")]
    NotANumber(String),
    #[error("amount must not be negative (got {0})")]
    Negative(f64),
    #[error("exchange rate must be a positive number (got {0})")]
    InvalidRate(f64),
    #[error("amount {0} is too large to convert")]
    OutOfRange(f64),
}

/// Validates free-form amount text the way the converter form does.
pub fn parse_amount(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }

    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::NotANumber(trimmed.to_string()))?;

    if amount < 0.0 {
        return Err(ConversionError::Negative(amount));
    }

    Ok(amount)
}

/// One converted amount together with the rate that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub dollars: f64,
    pub pesos: f64,
    pub rate: f64,
}

impl Conversion {
    pub fn summary(&self) -> String {
        format!(
            "USD ${} = CLP ${}",
            format_es_cl(self.dollars),
            format_es_cl(self.pesos)
        )
    }

    pub fn rate_note(&self) -> String {
        format!("Exchange rate: 1 USD = {} CLP", format_es_cl(self.rate))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsdClpConverter {
    rate: f64,
}

impl UsdClpConverter {
    pub fn new(rate: f64) -> Result<Self, ConversionError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConversionError::InvalidRate(rate));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Converts dollars to pesos, rounded to two decimals.
    pub fn convert(&self, dollars: f64) -> Result<Conversion, ConversionError> {
        if !dollars.is_finite() {
            return Err(ConversionError::NotANumber(dollars.to_string()));
        }
        if dollars < 0.0 {
            return Err(ConversionError::Negative(dollars));
        }

        let exact = dollars * self.rate;
        if !exact.is_finite() {
            return Err(ConversionError::OutOfRange(dollars));
        }

        // Amounts this large have no cent resolution left to round.
        let cents = exact * 100.0;
        let pesos = if cents.is_finite() {
            cents.round() / 100.0
        } else {
            exact
        };
        Ok(Conversion {
            dollars,
            pesos,
            rate: self.rate,
        })
    }

    pub fn convert_text(&self, raw: &str) -> Result<Conversion, ConversionError> {
        self.convert(parse_amount(raw)?)
    }
}

impl Default for UsdClpConverter {
    fn default() -> Self {
        Self {
            rate: DEFAULT_USD_CLP_RATE,
        }
    }
}
