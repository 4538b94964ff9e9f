//! Storefront shopping cart.
//!
//! The cart is a value: `add` and `set_quantity` return a new cart.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vitrine_model::{Money, Product, ProductId};

/// Identity of a cart line: the same product in another color or size is a
/// separate line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub color: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub key: LineKey,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`. Unset color and size fall back to the
    /// product's first option.
    pub fn add(&self, product: &Product, color: Option<&str>, size: Option<&str>) -> Cart {
        let key = LineKey {
            product_id: product.id,
            color: color.or(product.default_color()).map(str::to_string),
            size: size.or(product.default_size()).map(str::to_string),
        };

        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.key == key) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => lines.push(CartLine {
                key,
                name: product.name.clone(),
                unit_price: product.price,
                quantity: 1,
            }),
        }
        debug!(product = %product.id, lines = lines.len(), "added to cart");
        Cart { lines }
    }

    /// Set a line's quantity; zero removes the line. Unknown keys leave the
    /// cart unchanged.
    pub fn set_quantity(&self, key: &LineKey, quantity: u32) -> Cart {
        let lines = if quantity == 0 {
            self.lines
                .iter()
                .filter(|line| &line.key != key)
                .cloned()
                .collect()
        } else {
            self.lines
                .iter()
                .map(|line| {
                    let mut line = line.clone();
                    if &line.key == key {
                        line.quantity = quantity;
                    }
                    line
                })
                .collect()
        };
        Cart { lines }
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::ProductCategory;

    fn headphones() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Premium Wireless Headphones".into(),
            price: Money::dollars(299),
            original_price: Some(Money::dollars(399)),
            category: ProductCategory::Electronics,
            rating: 4.8,
            reviews: 2847,
            colors: vec!["Midnight Black".into(), "Pearl White".into()],
            sizes: vec!["One Size".into()],
            description: String::new(),
            features: vec![],
            in_stock: true,
            is_new: true,
            is_sale: true,
            listed_on: None,
        }
    }

    #[test]
    fn same_options_merge_into_one_line() {
        let product = headphones();
        let cart = Cart::new()
            .add(&product, None, None)
            .add(&product, Some("Midnight Black"), None);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].key.color.as_deref(), Some("Midnight Black"));
        assert_eq!(cart.lines()[0].key.size.as_deref(), Some("One Size"));
    }

    #[test]
    fn other_color_is_a_separate_line() {
        let product = headphones();
        let cart = Cart::new()
            .add(&product, None, None)
            .add(&product, Some("Pearl White"), None);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::dollars(598));
    }

    #[test]
    fn set_quantity_updates_and_removes() {
        let product = headphones();
        let before = Cart::new().add(&product, None, None);
        let key = before.lines()[0].key.clone();

        let more = before.set_quantity(&key, 3);
        assert_eq!(more.total_items(), 3);
        assert_eq!(more.total_price(), Money::dollars(897));
        assert_eq!(before.total_items(), 1);

        let emptied = more.set_quantity(&key, 0);
        assert!(emptied.is_empty());
        assert_eq!(emptied.total_price(), Money::ZERO);
    }
}
