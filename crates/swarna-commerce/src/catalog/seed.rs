//! Compiled-in Swarnapakshi store data.

use crate::catalog::{Catalog, CategoryMap, Product};
use crate::money::Money;

impl Catalog {
    /// The Swarnapakshi sweets & snacks catalog.
    pub fn seed() -> Catalog {
        Catalog::new(seed_products(), seed_categories()).expect("compiled-in catalog is valid")
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        // Sweets
        Product::new("s1", "Premium Mysurpa", Money::from_rupees(475), "500g", "Sweets")
            .with_sub_category("Ghee Sweets")
            .with_image("https://images.unsplash.com/photo-1589113103503-49ef83d92834?auto=format&fit=crop&w=400&q=80")
            .with_rating(5),
        Product::new("s2", "Traditional Laddu", Money::from_rupees(250), "500g", "Sweets")
            .with_sub_category("Traditional sweets")
            .with_image("https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?auto=format&fit=crop&w=400&q=80"),
        Product::new("s3", "Kaju Katli", Money::from_rupees(600), "500g", "Sweets")
            .with_sub_category("Kaju Sweets")
            .with_image("https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?auto=format&fit=crop&w=400&q=80"),
        // Savouries
        Product::new("v1", "Pepper Sev", Money::from_rupees(120), "200g", "Savouries")
            .with_sub_category("Pepper Sev")
            .with_image("https://images.unsplash.com/photo-1605666807894-3a0593457223?auto=format&fit=crop&w=400&q=80"),
        Product::new("v2", "Onion Murukku", Money::from_rupees(100), "200g", "Savouries")
            .with_sub_category("Onion Murukku")
            .with_image("https://images.unsplash.com/photo-1605666807894-3a0593457223?auto=format&fit=crop&w=400&q=80"),
        Product::new("v3", "Butter Murukku", Money::from_rupees(110), "200g", "Savouries")
            .with_sub_category("Butter Murukku")
            .with_image("https://images.unsplash.com/photo-1605666807894-3a0593457223?auto=format&fit=crop&w=400&q=80"),
        // Snacks
        Product::new("sn1", "Thukkada", Money::from_rupees(90), "250g", "Snacks")
            .with_sub_category("Thukkada")
            .with_image("https://images.unsplash.com/photo-1505575967455-40e256f7377c?auto=format&fit=crop&w=400&q=80"),
        Product::new("sn2", "Cashew Pakoda", Money::from_rupees(150), "200g", "Snacks")
            .with_sub_category("Cashew Pakoda")
            .with_image("https://images.unsplash.com/photo-1505575967455-40e256f7377c?auto=format&fit=crop&w=400&q=80"),
        // Pickles
        Product::new("p1", "Garlic Pickle", Money::from_rupees(85), "200g", "Pickles")
            .with_sub_category("Garlic Pickle")
            .with_image("https://images.unsplash.com/photo-1532336414038-cf19250c5757?auto=format&fit=crop&w=400&q=80"),
    ]
}

fn seed_categories() -> CategoryMap {
    CategoryMap::from_entries([
        (
            "Savouries",
            vec![
                "Pepper Sev",
                "Kara Sev",
                "Mota Mixture",
                "Dhal Mixture",
                "Sathur Kundu Pepper Sev",
                "Onion Murukku",
                "Ragi Murukku",
                "Thenkuzhal Kurukku",
                "Butter Murukku",
                "Garlic Murukku",
                "Kara Boonthi",
            ],
        ),
        (
            "Snacks",
            vec![
                "Thukkada",
                "Regular Pakoda",
                "Small Onion Pakoda",
                "Ginger Pakoda",
                "Cashew Pakoda",
            ],
        ),
        (
            "Sweets",
            vec![
                "Traditional sweets",
                "Ghee Sweets",
                "Kaju Sweets",
                "Bengali Sweets",
                "Dry fruit Sweets",
            ],
        ),
        (
            "Pickles",
            vec![
                "Garlic Pickle",
                "Avakkai Mango Pickle",
                "Cut Mango pickle",
                "Nartangai Pickle",
                "Citrol pickle",
            ],
        ),
        (
            "Other",
            vec!["Vadaam", "Podies", "Makhana", "Cookies", "Vathal", "Chocolates"],
        ),
    ])
}
