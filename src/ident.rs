//! Entity identifier conventions
//!
//! Every cross-entity reference is a logical identifier string. Generated
//! identifiers take the form `"<kind>_<n>"` (`client_7`, `order_0`); products
//! may additionally carry caller-supplied raw string ids. The wire form is the
//! numeric suffix only — the prefix is a storage convention, stripped on
//! output and added on input where applicable.
//!
//! All prefix handling lives here so that every endpoint resolves ids the
//! same way.

/// Entity kinds that participate in identifier generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Client,
    Product,
    Order,
}

impl EntityKind {
    /// Table (collection) name for this kind.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
        }
    }

    /// Storage prefix for generated identifiers of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Client => "client_",
            EntityKind::Product => "product_",
            EntityKind::Order => "order_",
        }
    }

    /// Build the storage identifier for a generated sequence number.
    pub fn id_for(&self, n: i64) -> String {
        format!("{}{}", self.prefix(), n)
    }

    /// Resolve caller input to a storage identifier.
    ///
    /// All-digit input is a numeric suffix and gets the kind's prefix;
    /// anything else (including already-prefixed ids and raw product ids)
    /// passes through untouched.
    pub fn qualify(&self, raw: &str) -> String {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}{}", self.prefix(), raw)
        } else {
            raw.to_string()
        }
    }

    /// Strip the kind's prefix for wire output. Raw ids without the prefix
    /// are returned unchanged.
    pub fn strip<'a>(&self, id: &'a str) -> &'a str {
        id.strip_prefix(self.prefix()).unwrap_or(id)
    }
}
