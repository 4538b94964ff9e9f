use super::strings;
use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use std::sync::Arc;
use vitrine_model::{MenuCategory, MenuItem, MenuItemId, Money};

#[allow(clippy::too_many_arguments)]
fn dish(
    id: &'static str,
    name: &str,
    description: &str,
    price: u64,
    category: MenuCategory,
    dietary: &[&str],
    chef: &str,
    prep_time_minutes: u32,
    featured: bool,
    rating: f32,
    reviews: u32,
) -> MenuItem {
    MenuItem {
        id: MenuItemId::from_static(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::dollars(price),
        category,
        dietary: strings(dietary),
        chef: chef.to_string(),
        prep_time_minutes,
        servings: 1,
        featured,
        rating,
        reviews,
    }
}

static MENU: Lazy<Arc<[MenuItem]>> = Lazy::new(|| {
    vec![
        dish(
            "1",
            "Truffle Risotto",
            "Creamy Arborio rice with black truffle shavings, aged Parmesan, and white wine reduction",
            45,
            MenuCategory::Appetizers,
            &["Vegetarian", "Gluten-Free"],
            "Chef Marcus Laurent",
            25,
            true,
            4.9,
            127,
        ),
        dish(
            "2",
            "Wagyu Beef Tenderloin",
            "Premium A5 Wagyu beef with roasted vegetables, red wine jus, and herb butter",
            85,
            MenuCategory::MainCourses,
            &["Gluten-Free"],
            "Chef Isabella Chen",
            35,
            true,
            4.8,
            89,
        ),
        dish(
            "3",
            "Lobster Thermidor",
            "Fresh Maine lobster in a rich cognac cream sauce, gratinated with Gruyère cheese",
            65,
            MenuCategory::MainCourses,
            &["Gluten-Free"],
            "Chef Antoine Dubois",
            30,
            false,
            4.7,
            156,
        ),
        dish(
            "4",
            "Chocolate Soufflé",
            "Light and airy dark chocolate soufflé with vanilla bean ice cream and gold leaf",
            28,
            MenuCategory::Desserts,
            &["Vegetarian"],
            "Chef Sophie Martin",
            20,
            true,
            4.9,
            203,
        ),
        dish(
            "5",
            "Seared Scallops",
            "Pan-seared diver scallops with cauliflower purée, pancetta, and microgreens",
            38,
            MenuCategory::Appetizers,
            &["Gluten-Free"],
            "Chef Marcus Laurent",
            15,
            false,
            4.6,
            94,
        ),
        dish(
            "6",
            "Vegan Tasting Plate",
            "Seasonal vegetables, quinoa, avocado mousse, and herb-infused olive oil",
            32,
            MenuCategory::MainCourses,
            &["Vegan", "Gluten-Free"],
            "Chef Elena Rodriguez",
            20,
            false,
            4.5,
            67,
        ),
    ]
    .into()
});

/// Catering menu
pub fn menu() -> Catalog<MenuItem> {
    Catalog::new("menu", Arc::clone(&MENU))
}
