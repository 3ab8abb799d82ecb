//! Product prices and the price display resolver.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Minimum and maximum price across a product's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Whether the range spans more than one amount. Currency is ignored.
    pub fn is_spread(&self) -> bool {
        self.min.amount_cents != self.max.amount_cents
    }
}

/// Every price the catalog may report for a product.
///
/// No combination is invalid. [`PriceSet::resolve`] decides what is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

/// How a price block is presented. Exactly one mode applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    /// "min – max".
    Range { min: Money, max: Money },
    /// "Was: base" struck, "Now: sale", with an optional struck MSRP.
    Sale {
        msrp: Option<Money>,
        was: Money,
        now: Money,
    },
    /// A single unstruck price, with an optional struck MSRP.
    Single { msrp: Option<Money>, price: Money },
    /// Only the struck MSRP line.
    MsrpOnly { msrp: Money },
}

impl PriceSet {
    /// Choose the presentation mode, or `None` when nothing is populated.
    ///
    /// Precedence: a spread range wins; then sale (needs both sale and base
    /// price); then the plain price; then the MSRP alone. A retail price
    /// adds the struck MSRP line to the sale and single modes.
    pub fn resolve(&self) -> Option<PriceDisplay> {
        if let Some(range) = self.price_range.filter(PriceRange::is_spread) {
            return Some(PriceDisplay::Range {
                min: range.min,
                max: range.max,
            });
        }

        let msrp = self.retail_price;
        match (self.sale_price, self.base_price, self.price) {
            (Some(now), Some(was), _) => Some(PriceDisplay::Sale { msrp, was, now }),
            (_, _, Some(price)) => Some(PriceDisplay::Single { msrp, price }),
            _ => msrp.map(|msrp| PriceDisplay::MsrpOnly { msrp }),
        }
    }
}

impl PriceDisplay {
    /// The struck MSRP, if this mode shows one.
    pub fn msrp(&self) -> Option<Money> {
        match self {
            Self::Range { .. } => None,
            Self::Sale { msrp, .. } | Self::Single { msrp, .. } => *msrp,
            Self::MsrpOnly { msrp } => Some(*msrp),
        }
    }

    /// Short label used in CSS classes and logs.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Range { .. } => "range",
            Self::Sale { .. } => "sale",
            Self::Single { .. } => "single",
            Self::MsrpOnly { .. } => "msrp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Option<Money> {
        Some(Money::usd(cents))
    }

    #[test]
    fn test_spread_range_wins() {
        let prices = PriceSet {
            price: usd(1000),
            retail_price: usd(2000),
            sale_price: usd(800),
            base_price: usd(1000),
            price_range: Some(PriceRange {
                min: Money::usd(1000),
                max: Money::usd(2500),
            }),
        };
        assert_eq!(
            prices.resolve(),
            Some(PriceDisplay::Range {
                min: Money::usd(1000),
                max: Money::usd(2500)
            })
        );
    }

    #[test]
    fn test_collapsed_range_falls_through() {
        let prices = PriceSet {
            price: usd(1500),
            price_range: Some(PriceRange {
                min: Money::usd(1500),
                max: Money::usd(1500),
            }),
            ..Default::default()
        };
        assert_eq!(
            prices.resolve(),
            Some(PriceDisplay::Single {
                msrp: None,
                price: Money::usd(1500)
            })
        );
    }

    #[test]
    fn test_range_compares_amounts_only() {
        let range = PriceRange {
            min: Money::usd(1500),
            max: Money::new(1500, Currency::CAD),
        };
        assert!(!range.is_spread());

        let prices = PriceSet {
            price: usd(1500),
            price_range: Some(range),
            ..Default::default()
        };
        assert!(matches!(prices.resolve(), Some(PriceDisplay::Single { .. })));
    }

    #[test]
    fn test_msrp_with_sale() {
        let prices = PriceSet {
            price: usd(800),
            retail_price: usd(2000),
            sale_price: usd(800),
            base_price: usd(1000),
            price_range: None,
        };
        let display = prices.resolve().unwrap();
        assert_eq!(
            display,
            PriceDisplay::Sale {
                msrp: usd(2000),
                was: Money::usd(1000),
                now: Money::usd(800)
            }
        );
        assert_eq!(display.msrp(), usd(2000));
    }

    #[test]
    fn test_msrp_with_single_price() {
        let prices = PriceSet {
            price: usd(1200),
            retail_price: usd(2000),
            ..Default::default()
        };
        assert_eq!(
            prices.resolve(),
            Some(PriceDisplay::Single {
                msrp: usd(2000),
                price: Money::usd(1200)
            })
        );
    }

    #[test]
    fn test_msrp_only() {
        let prices = PriceSet {
            retail_price: usd(2000),
            ..Default::default()
        };
        assert_eq!(
            prices.resolve(),
            Some(PriceDisplay::MsrpOnly {
                msrp: Money::usd(2000)
            })
        );
    }

    #[test]
    fn test_sale_needs_base_price() {
        let prices = PriceSet {
            price: usd(900),
            sale_price: usd(800),
            ..Default::default()
        };
        assert_eq!(prices.resolve().map(|d| d.mode()), Some("single"));
    }

    #[test]
    fn test_sale_without_msrp() {
        let prices = PriceSet {
            sale_price: usd(800),
            base_price: usd(1000),
            ..Default::default()
        };
        assert_eq!(
            prices.resolve(),
            Some(PriceDisplay::Sale {
                msrp: None,
                was: Money::usd(1000),
                now: Money::usd(800)
            })
        );
    }

    #[test]
    fn test_nothing_populated() {
        assert_eq!(PriceSet::default().resolve(), None);
    }

    #[test]
    fn test_wire_format() {
        let prices: PriceSet = serde_json::from_str(
            r#"{
                "price": {"value": 12.5, "currencyCode": "USD"},
                "priceRange": {
                    "min": {"value": 10, "currencyCode": "USD"},
                    "max": {"value": 15, "currencyCode": "USD"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(prices.price, usd(1250));
        assert!(prices.retail_price.is_none());
        assert_eq!(prices.resolve().map(|d| d.mode()), Some("range"));
    }
}
