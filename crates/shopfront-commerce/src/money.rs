//! Money type for representing monetary values.
//!
//! Amounts are kept in minor units so display never suffers from float
//! rounding. The commerce API sends `{ "value": 49.99, "currencyCode": "USD" }`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Currencies the storefront can format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, CommerceError> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            _ => Err(CommerceError::UnsupportedCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "MoneyWire", into = "MoneyWire")]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use shopfront_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// US dollars from cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format for display with en-US grouping and two decimals, e.g.
    /// `$1,234.50`. Zero-decimal currencies still show `.00`.
    pub fn display(&self) -> String {
        let hundredths = self.amount_cents.unsigned_abs()
            * 10_u64.pow(2_u32.saturating_sub(self.currency.decimal_places()));
        let sign = if self.amount_cents < 0 { "-" } else { "" };

        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            group_thousands(hundredths / 100),
            hundredths % 100
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if value < 1000 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyWire {
    value: f64,
    #[serde(default = "default_currency_code")]
    currency_code: String,
}

fn default_currency_code() -> String {
    Currency::USD.code().to_string()
}

impl TryFrom<MoneyWire> for Money {
    type Error = CommerceError;

    fn try_from(wire: MoneyWire) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(&wire.currency_code)?;
        Ok(Money::from_decimal(wire.value, currency))
    }
}

impl From<Money> for MoneyWire {
    fn from(money: Money) -> Self {
        Self {
            value: money.to_decimal(),
            currency_code: money.currency.code().to_string(),
        }
    }
}
