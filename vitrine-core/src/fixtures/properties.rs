use super::{date, strings};
use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use std::sync::Arc;
use vitrine_model::{
    Address, ListingStatus, Money, Property, PropertyId, PropertySpecs,
    PropertyType, SquareFeet,
};

fn address(street: &str, city: &str, zip_code: &str, neighborhood: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        zip_code: zip_code.to_string(),
        neighborhood: neighborhood.to_string(),
    }
}

fn specs(
    bedrooms: u32,
    bathrooms: u32,
    sqft: u32,
    lot_size: Option<f32>,
    year_built: u16,
    parking: u8,
) -> PropertySpecs {
    PropertySpecs {
        bedrooms,
        bathrooms,
        sqft: SquareFeet::new(sqft),
        lot_size,
        year_built,
        parking,
    }
}

static PROPERTIES: Lazy<Arc<[Property]>> = Lazy::new(|| {
    vec![
        Property {
            id: PropertyId::from_static("1"),
            title: "Luxury Modern Estate in Beverly Hills".into(),
            kind: PropertyType::Estate,
            price: Money::dollars(8_500_000),
            address: address("1234 Sunset Boulevard", "Beverly Hills", "90210", "Beverly Hills"),
            specs: specs(6, 8, 7500, Some(1.2), 2020, 4),
            description: "Stunning contemporary estate featuring floor-to-ceiling windows, open-concept living, and breathtaking city views. This architectural masterpiece combines luxury with modern convenience.".into(),
            features: strings(&[
                "Gourmet Kitchen",
                "Home Theater",
                "Wine Cellar",
                "Smart Home Technology",
                "Infinity Pool",
                "Guest House",
                "Panoramic Views",
                "Private Gym",
            ]),
            amenities: strings(&[
                "Concierge Service",
                "Valet Parking",
                "Security System",
                "Landscaped Gardens",
                "Outdoor Kitchen",
                "Spa",
                "Tennis Court",
                "Elevator",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 1, 15),
            days_on_market: 45,
            is_new: true,
            is_premium: true,
        },
        Property {
            id: PropertyId::from_static("2"),
            title: "Oceanfront Penthouse in Malibu".into(),
            kind: PropertyType::Penthouse,
            price: Money::dollars(12_500_000),
            address: address("5678 Pacific Coast Highway", "Malibu", "90265", "Malibu Beach"),
            specs: specs(4, 5, 4200, None, 2019, 3),
            description: "Breathtaking oceanfront penthouse with unobstructed Pacific Ocean views. Features include a private rooftop terrace, floor-to-ceiling windows, and direct beach access.".into(),
            features: strings(&[
                "Ocean Views",
                "Private Terrace",
                "Beach Access",
                "Floor-to-Ceiling Windows",
                "Gourmet Kitchen",
                "Master Suite",
                "Smart Home",
                "Private Elevator",
            ]),
            amenities: strings(&[
                "Concierge",
                "Valet Parking",
                "Fitness Center",
                "Spa Services",
                "Beach Club",
                "Restaurant",
                "Pool Deck",
                "Security",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 2, 1),
            days_on_market: 28,
            is_new: false,
            is_premium: true,
        },
        Property {
            id: PropertyId::from_static("3"),
            title: "Contemporary Villa in Hollywood Hills".into(),
            kind: PropertyType::Villa,
            price: Money::dollars(6_750_000),
            address: address("9876 Mulholland Drive", "Los Angeles", "90210", "Hollywood Hills"),
            specs: specs(5, 6, 5800, Some(0.8), 2018, 3),
            description: "Architectural masterpiece nestled in the Hollywood Hills with stunning city and canyon views. Features modern design, premium finishes, and resort-style amenities.".into(),
            features: strings(&[
                "City Views",
                "Canyon Views",
                "Infinity Pool",
                "Home Theater",
                "Wine Cellar",
                "Chef's Kitchen",
                "Master Retreat",
                "Guest Suite",
            ]),
            amenities: strings(&[
                "Pool & Spa",
                "Outdoor Kitchen",
                "Fire Pit",
                "Landscaped Grounds",
                "Security System",
                "Smart Home",
                "Garage",
                "Storage",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 1, 20),
            days_on_market: 40,
            is_new: false,
            is_premium: false,
        },
        Property {
            id: PropertyId::from_static("4"),
            title: "Luxury Condo in Downtown LA".into(),
            kind: PropertyType::Condo,
            price: Money::dollars(2_850_000),
            address: address("1111 Grand Avenue", "Los Angeles", "90015", "Downtown LA"),
            specs: specs(3, 3, 2400, None, 2021, 2),
            description: "Ultra-modern luxury condominium in the heart of downtown LA. Floor-to-ceiling windows offer spectacular city views, while premium amenities provide resort-style living.".into(),
            features: strings(&[
                "City Views",
                "Floor-to-Ceiling Windows",
                "Modern Kitchen",
                "Master Suite",
                "Balcony",
                "In-Unit Laundry",
                "Storage",
                "High Ceilings",
            ]),
            amenities: strings(&[
                "Rooftop Pool",
                "Fitness Center",
                "Concierge",
                "Valet Parking",
                "Business Center",
                "Lounge",
                "Security",
                "Pet Friendly",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 2, 10),
            days_on_market: 19,
            is_new: true,
            is_premium: false,
        },
        Property {
            id: PropertyId::from_static("5"),
            title: "Beachfront House in Manhattan Beach".into(),
            kind: PropertyType::House,
            price: Money::dollars(9_200_000),
            address: address("2222 The Strand", "Manhattan Beach", "90266", "Manhattan Beach"),
            specs: specs(4, 4, 3800, Some(0.15), 2017, 2),
            description: "Stunning beachfront home directly on the sand in Manhattan Beach. This contemporary residence offers unparalleled ocean views and direct beach access.".into(),
            features: strings(&[
                "Beachfront",
                "Ocean Views",
                "Direct Beach Access",
                "Rooftop Deck",
                "Gourmet Kitchen",
                "Master Suite",
                "Guest Rooms",
                "Outdoor Shower",
            ]),
            amenities: strings(&[
                "Beach Access",
                "Outdoor Living",
                "Rooftop Terrace",
                "Fire Pit",
                "BBQ Area",
                "Storage",
                "Garage",
                "Security",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 1, 25),
            days_on_market: 35,
            is_new: false,
            is_premium: true,
        },
        Property {
            id: PropertyId::from_static("6"),
            title: "Modern Townhouse in West Hollywood".into(),
            kind: PropertyType::Townhouse,
            price: Money::dollars(3_450_000),
            address: address("3333 Melrose Avenue", "West Hollywood", "90069", "West Hollywood"),
            specs: specs(3, 4, 2800, None, 2020, 2),
            description: "Sleek and sophisticated townhouse in the heart of West Hollywood. Features contemporary design, premium finishes, and a private rooftop terrace.".into(),
            features: strings(&[
                "Rooftop Terrace",
                "Modern Design",
                "Gourmet Kitchen",
                "Master Suite",
                "Guest Bedrooms",
                "Private Garage",
                "Storage",
                "Smart Home",
            ]),
            amenities: strings(&[
                "Rooftop Access",
                "Private Entrance",
                "Garage Parking",
                "Storage Space",
                "Security System",
                "Modern Appliances",
                "Outdoor Space",
                "Central AC",
            ]),
            status: ListingStatus::ForSale,
            listed_on: date(2024, 2, 5),
            days_on_market: 24,
            is_new: true,
            is_premium: false,
        },
    ]
    .into()
});

/// Luxury real-estate listings
pub fn properties() -> Catalog<Property> {
    Catalog::new("properties", Arc::clone(&PROPERTIES))
}
