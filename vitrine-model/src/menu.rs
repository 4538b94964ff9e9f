use crate::filter_types::labelled_enum;
use crate::ids::MenuItemId;
use crate::numbers::Money;

labelled_enum! {
    /// Catering menu courses
    MenuCategory, "menu category" {
        Appetizers => ("Appetizers", "appetizers"),
        MainCourses => ("Main Courses", "main-courses"),
        Desserts => ("Desserts", "desserts"),
        Beverages => ("Beverages", "beverages"),
    }
}

/// Catering menu entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: MenuCategory,
    /// Dietary labels such as `Vegan` or `Gluten-Free`
    pub dietary: Vec<String>,
    pub chef: String,
    pub prep_time_minutes: u32,
    pub servings: u32,
    pub featured: bool,
    pub rating: f32,
    pub reviews: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_category_parses() {
        assert_eq!(
            "Main Courses".parse::<MenuCategory>().unwrap(),
            MenuCategory::MainCourses
        );
        assert_eq!(
            "main-courses".parse::<MenuCategory>().unwrap(),
            MenuCategory::MainCourses
        );
    }
}
