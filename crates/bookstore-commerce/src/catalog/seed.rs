//! Compiled-in seed catalog.

use crate::catalog::{Catalog, Category, Product};
use crate::money::Money;

/// Build the fixed bookstore catalog.
///
/// Called once at startup; every call returns a fresh, identical catalog.
pub fn seed_catalog() -> Catalog {
    Catalog::from_trusted(seed_products())
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "The Midnight Library",
            Money::usd(1699),
            "Between life and death there is a library. When Nora finds herself in the Midnight Library, she has a chance to make things right.",
            Category::Fiction,
        )
        .with_image("https://th.bing.com/th/id/OIP.B-cjHWTHFKufMWy6LH_E8AHaE8?w=258&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7"),
        Product::new(
            2,
            "Atomic Habits",
            Money::usd(1499),
            "Tiny Changes, Remarkable Results: An Easy & Proven Way to Build Good Habits & Break Bad Ones.",
            Category::SelfHelp,
        )
        .with_image("https://th.bing.com/th/id/OIP.Iyg6ec_U-eSQm2De5jXvEAHaFj?w=231&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7"),
        Product::new(
            3,
            "The Silent Patient",
            Money::usd(1299),
            "A psychological thriller about a woman's act of violence against her husband\u{2014}and the therapist obsessed with uncovering her motive.",
            Category::Thriller,
        )
        .with_image("https://th.bing.com/th/id/OIP.nJJQOX7xZ7XwY5Tmp2kKiwAAAA?w=153&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7"),
        Product::new(
            4,
            "Where the Crawdads Sing",
            Money::usd(1599),
            "A novel about a young woman who raised herself in the marshes of the deep South, and what happens when the town hotshot is found dead.",
            Category::Fiction,
        ),
        Product::new(
            5,
            "Educated",
            Money::usd(1399),
            "A memoir about a young girl who leaves her survivalist family and goes on to earn a PhD from Cambridge University.",
            Category::NonFiction,
        ),
        Product::new(
            6,
            "Circe",
            Money::usd(1199),
            "The story of the mythological witch Circe, who transforms from an awkward nymph to a formidable witch.",
            Category::Fantasy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_valid() {
        // Goes through the validating constructor.
        let catalog = Catalog::new(seed_products()).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_seed_placeholders() {
        let catalog = seed_catalog();
        let without_image: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| p.image_url.is_none())
            .map(|p| p.id.get())
            .collect();
        assert_eq!(without_image, [4, 5, 6]);
    }
}
