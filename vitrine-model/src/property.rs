use crate::filter_types::labelled_enum;
use crate::ids::PropertyId;
use crate::numbers::{Money, SquareFeet};
use chrono::NaiveDate;

labelled_enum! {
    /// Residential property classification
    PropertyType, "property type" {
        House => ("House", "house"),
        Condo => ("Condo", "condo"),
        Townhouse => ("Townhouse", "townhouse"),
        Penthouse => ("Penthouse", "penthouse"),
        Villa => ("Villa", "villa"),
        Estate => ("Estate", "estate"),
    }
}

labelled_enum! {
    /// Market status of a listing
    ListingStatus, "listing status" {
        ForSale => ("For Sale", "for-sale"),
        Sold => ("Sold", "sold"),
        Pending => ("Pending", "pending"),
        OffMarket => ("Off Market", "off-market"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub neighborhood: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySpecs {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: SquareFeet,
    /// Acres
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lot_size: Option<f32>,
    pub year_built: u16,
    pub parking: u8,
}

/// Real-estate listing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub kind: PropertyType,
    pub price: Money,
    pub address: Address,
    pub specs: PropertySpecs,
    pub description: String,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub status: ListingStatus,
    pub listed_on: NaiveDate,
    pub days_on_market: u32,
    pub is_new: bool,
    pub is_premium: bool,
}

impl Property {
    /// Asking price divided by interior area, rounded to whole dollars
    pub fn price_per_sqft(&self) -> Option<Money> {
        let sqft = u64::from(self.specs.sqft.value());
        if sqft == 0 {
            return None;
        }
        let price = self.price.value();
        Some(Money::dollars((price + sqft / 2) / sqft))
    }
}
