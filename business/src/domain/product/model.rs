use serde::{Deserialize, Serialize};

/// A catalog entry: a name used as the lookup key and the stock available
/// for purchase.
///
/// Equality and hashing cover both fields, so the same name with a different
/// count is a different value (and a different [`Cart`] key).
///
/// [`Cart`]: crate::domain::shopping::cart::Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub count: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Increases the available stock. Saturates at `u32::MAX`.
    pub fn add_count(&mut self, amount: u32) {
        self.count = self.count.saturating_add(amount);
    }

    pub fn covers(&self, requested: u32) -> bool {
        requested <= self.count
    }
}
