//! Structured filter produced by query interpretation

use std::fmt;

/// A price bound as received from the interpreter
///
/// The interpretation agent is not guaranteed to emit numbers. Values of the
/// wrong shape are carried through as `Unrecognized` instead of being
/// rejected, and the filter engine treats them as if the bound were absent.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceBound {
    /// A numeric bound
    Amount(f64),
    /// Any other value, kept in its raw textual form for diagnostics
    Unrecognized(String),
}

impl PriceBound {
    /// Numeric value of the bound, if it has one
    ///
    /// Non-finite amounts count as unrecognized.
    pub fn amount(&self) -> Option<f64> {
        match self {
            PriceBound::Amount(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for PriceBound {
    fn from(value: f64) -> Self {
        PriceBound::Amount(value)
    }
}

impl fmt::Display for PriceBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBound::Amount(value) => write!(f, "{}", value),
            PriceBound::Unrecognized(raw) => write!(f, "{} (ignored)", raw),
        }
    }
}

/// The (category, max price, min price) intent of a query
///
/// The default value is the all-absent filter, which matches the whole
/// catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredFilter {
    /// Raw category as given; normalized by the engine
    pub category: Option<String>,

    /// Inclusive upper price bound
    pub max_price: Option<PriceBound>,

    /// Inclusive lower price bound
    pub min_price: Option<PriceBound>,
}

impl StructuredFilter {
    /// The all-absent filter
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a numeric upper bound
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(PriceBound::Amount(max_price));
        self
    }

    /// Set a numeric lower bound
    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(PriceBound::Amount(min_price));
        self
    }

    /// Whether every field is absent
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.max_price.is_none() && self.min_price.is_none()
    }

    /// Effective numeric upper bound
    pub fn max_amount(&self) -> Option<f64> {
        self.max_price.as_ref().and_then(PriceBound::amount)
    }

    /// Effective numeric lower bound
    pub fn min_amount(&self) -> Option<f64> {
        self.min_price.as_ref().and_then(PriceBound::amount)
    }
}
