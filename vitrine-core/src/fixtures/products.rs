use super::strings;
use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use std::sync::Arc;
use vitrine_model::{Money, Product, ProductCategory, ProductId};

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    price: u64,
    original_price: Option<u64>,
    category: ProductCategory,
    rating: f32,
    reviews: u32,
    colors: &[&str],
    sizes: &[&str],
    description: &str,
    features: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::dollars(price),
        original_price: original_price.map(Money::dollars),
        category,
        rating,
        reviews,
        colors: strings(colors),
        sizes: strings(sizes),
        description: description.to_string(),
        features: strings(features),
        in_stock: true,
        is_new: false,
        is_sale: original_price.is_some(),
        listed_on: None,
    }
}

static PRODUCTS: Lazy<Arc<[Product]>> = Lazy::new(|| {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            299,
            Some(399),
            ProductCategory::Electronics,
            4.8,
            1247,
            &["Black", "White", "Silver"],
            &["One Size"],
            "Experience premium sound quality with our flagship wireless headphones featuring active noise cancellation and 30-hour battery life.",
            &["Active Noise Cancellation", "30-hour Battery", "Quick Charge", "Premium Materials"],
        ),
        Product {
            is_new: true,
            ..product(
                2,
                "Luxury Leather Handbag",
                450,
                None,
                ProductCategory::Fashion,
                4.9,
                892,
                &["Brown", "Black", "Tan"],
                &["Medium", "Large"],
                "Handcrafted Italian leather handbag with timeless design and premium hardware. Perfect for both professional and casual occasions.",
                &["Italian Leather", "Handcrafted", "Multiple Compartments", "Premium Hardware"],
            )
        },
        product(
            3,
            "Smart Fitness Watch",
            199,
            Some(249),
            ProductCategory::Electronics,
            4.6,
            2156,
            &["Black", "Silver", "Rose Gold"],
            &["38mm", "42mm"],
            "Advanced fitness tracking with heart rate monitoring, GPS, and 7-day battery life. Track your health and stay connected.",
            &["Heart Rate Monitor", "GPS Tracking", "7-day Battery", "Water Resistant"],
        ),
        product(
            4,
            "Designer Sunglasses",
            180,
            None,
            ProductCategory::Fashion,
            4.7,
            634,
            &["Black", "Tortoise", "Gold"],
            &["One Size"],
            "Premium designer sunglasses with UV protection and polarized lenses. Timeless style meets modern functionality.",
            &["UV Protection", "Polarized Lenses", "Designer Frame", "Premium Case"],
        ),
        Product {
            is_new: true,
            ..product(
                5,
                "Organic Skincare Set",
                89,
                None,
                ProductCategory::Beauty,
                4.8,
                1543,
                &["Natural"],
                &["Full Size", "Travel Size"],
                "Complete organic skincare routine with cleanser, serum, and moisturizer. Made with natural ingredients for all skin types.",
                &["Organic Ingredients", "All Skin Types", "Cruelty Free", "Eco Packaging"],
            )
        },
        product(
            6,
            "Premium Coffee Beans",
            24,
            None,
            ProductCategory::Food,
            4.9,
            876,
            &["Dark Roast", "Medium Roast", "Light Roast"],
            &["250g", "500g", "1kg"],
            "Single-origin coffee beans roasted to perfection. Rich, complex flavors with notes of chocolate and caramel.",
            &["Single Origin", "Freshly Roasted", "Fair Trade", "Premium Quality"],
        ),
    ]
    .into()
});

/// Storefront product catalog
pub fn products() -> Catalog<Product> {
    Catalog::new("products", Arc::clone(&PRODUCTS))
}
