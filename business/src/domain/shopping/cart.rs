use std::collections::HashMap;

use crate::domain::product::model::Product;

/// Requested quantities keyed by product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    products: HashMap<Product, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`. Quantities for a product already in
    /// the cart accumulate (saturating).
    pub fn add(&mut self, product: Product, quantity: u32) {
        let entry = self.products.entry(product).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    pub fn products(&self) -> &HashMap<Product, u32> {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl FromIterator<(Product, u32)> for Cart {
    fn from_iter<I: IntoIterator<Item = (Product, u32)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for (product, quantity) in iter {
            cart.add(product, quantity);
        }
        cart
    }
}
