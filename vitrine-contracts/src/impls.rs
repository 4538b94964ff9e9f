use crate::entity::CatalogEntity;
use vitrine_model::chrono::NaiveDate;
use vitrine_model::{
    Money,
    ids::{MenuItemId, PolicyId, ProductId, PropertyId},
    menu::{MenuCategory, MenuItem},
    policy::{Policy, PolicyType},
    product::{Product, ProductCategory},
    property::{Property, PropertyType},
};

impl CatalogEntity for Product {
    type Id = ProductId;
    type Category = ProductCategory;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn category(&self) -> ProductCategory {
        self.category
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    // The storefront search box only ever matched product names
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.features
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }

    fn listed_on(&self) -> Option<NaiveDate> {
        self.listed_on
    }
}

impl CatalogEntity for Property {
    type Id = PropertyId;
    type Category = PropertyType;

    fn id(&self) -> &PropertyId {
        &self.id
    }

    fn category(&self) -> PropertyType {
        self.kind
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.address.city.as_str(),
            self.address.neighborhood.as_str(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.features
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn size(&self) -> Option<u64> {
        Some(u64::from(self.specs.sqft.value()))
    }

    fn bedrooms(&self) -> Option<u32> {
        Some(self.specs.bedrooms)
    }

    fn bathrooms(&self) -> Option<u32> {
        Some(self.specs.bathrooms)
    }

    fn listed_on(&self) -> Option<NaiveDate> {
        Some(self.listed_on)
    }

    fn neighborhood(&self) -> Option<&str> {
        Some(&self.address.neighborhood)
    }
}

impl CatalogEntity for Policy {
    type Id = PolicyId;
    type Category = PolicyType;

    fn id(&self) -> &PolicyId {
        &self.id
    }

    fn category(&self) -> PolicyType {
        self.kind
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.features
    }

    // Policies are quoted, never priced
    fn price(&self) -> Option<Money> {
        None
    }

    fn size(&self) -> Option<u64> {
        Some(self.coverage_max.value())
    }
}

impl CatalogEntity for MenuItem {
    type Id = MenuItemId;
    type Category = MenuCategory;

    fn id(&self) -> &MenuItemId {
        &self.id
    }

    fn category(&self) -> MenuCategory {
        self.category
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.dietary
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn size(&self) -> Option<u64> {
        Some(u64::from(self.servings))
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
}

// Lets filter output (`Vec<&E>`) flow straight into the sort stage.
impl<E: CatalogEntity + ?Sized> CatalogEntity for &E {
    type Id = E::Id;
    type Category = E::Category;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn category(&self) -> Self::Category {
        (**self).category()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn price(&self) -> Option<Money> {
        (**self).price()
    }

    fn size(&self) -> Option<u64> {
        (**self).size()
    }

    fn bedrooms(&self) -> Option<u32> {
        (**self).bedrooms()
    }

    fn bathrooms(&self) -> Option<u32> {
        (**self).bathrooms()
    }

    fn rating(&self) -> Option<f32> {
        (**self).rating()
    }

    fn listed_on(&self) -> Option<NaiveDate> {
        (**self).listed_on()
    }

    fn neighborhood(&self) -> Option<&str> {
        (**self).neighborhood()
    }
}
