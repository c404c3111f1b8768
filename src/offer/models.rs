use serde::{Deserialize, Serialize};

/// Customer the offer is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    pub name: String,
    /// "Alla c.a. del ..." line
    pub attention: String,
    /// Used in the greeting, e.g. "dott. Pasquale Isernia"
    pub title: String,
}

/// One offered product with its quantity/price line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    pub name: String,
    pub subtitle: String,
    pub configuration: String,
    pub quantity: String,
    pub unit_price: String,
    pub subtotal: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// Preformatted totals block.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Totals {
    pub materials_subtotal: String,
    pub total_weight: String,
    pub vat: String,
    pub offer_total: String,
}

/// A supply condition. `content` may span several lines.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Term {
    pub title: String,
    pub content: String,
}

/// Complete business data of a commercial offer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OfferData {
    pub offer_number: String,
    /// Rendered verbatim; today's date is used when absent.
    #[serde(default)]
    pub date: Option<String>,
    pub validity: String,
    pub customer: Customer,
    #[serde(default)]
    pub products: Vec<Product>,
    pub totals: Totals,
    #[serde(default)]
    pub terms: Vec<Term>,
}
