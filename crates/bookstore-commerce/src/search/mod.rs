//! Search module.
//!
//! The filter engine: category chip plus free-text search over the catalog.

mod filter;
mod query;

pub use filter::Filter;
pub use query::FilterState;

use crate::catalog::{CategoryFilter, Product};

/// Products visible for a category selection and search term.
///
/// The category is applied first, then the term as a case-insensitive
/// substring of name or description. An empty term matches everything.
/// Catalog order is preserved and no match yields an empty vector.
pub fn visible_products<'a>(
    catalog: &'a [Product],
    selected_category: CategoryFilter,
    search_term: &str,
) -> Vec<&'a Product> {
    let filters = filters_for(selected_category, search_term);
    catalog
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .collect()
}

/// Lower a selection to filters, category first. "All" and an empty term
/// add nothing.
fn filters_for(selected_category: CategoryFilter, search_term: &str) -> Vec<Filter> {
    let mut filters = Vec::with_capacity(2);
    if let CategoryFilter::Only(category) = selected_category {
        filters.push(Filter::category(category));
    }
    if !search_term.is_empty() {
        filters.push(Filter::text(search_term));
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_catalog, Category};
    use proptest::prelude::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_all_and_empty_term_is_identity() {
        let catalog = seed_catalog();
        let visible = visible_products(catalog.products(), CategoryFilter::All, "");
        assert_eq!(ids(&visible), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_only() {
        let catalog = seed_catalog();
        let visible = visible_products(
            catalog.products(),
            CategoryFilter::Only(Category::Fiction),
            "",
        );
        assert_eq!(ids(&visible), [1, 4]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = seed_catalog();
        // "witch" only appears in Circe's description.
        let visible = visible_products(catalog.products(), CategoryFilter::All, "WITCH");
        assert_eq!(ids(&visible), [6]);
    }

    #[test]
    fn test_search_within_category() {
        let catalog = seed_catalog();
        let visible = visible_products(
            catalog.products(),
            CategoryFilter::Only(Category::Fiction),
            "marsh",
        );
        assert_eq!(ids(&visible), [4]);
    }

    #[test]
    fn test_filters_for_skips_all_and_empty_term() {
        assert!(filters_for(CategoryFilter::All, "").is_empty());
        assert_eq!(
            filters_for(CategoryFilter::Only(Category::Fantasy), "Witch"),
            [Filter::Category(Category::Fantasy), Filter::Text("witch".to_string())]
        );
    }

    #[test]
    fn test_no_results() {
        let catalog = seed_catalog();
        let visible = visible_products(
            catalog.products(),
            CategoryFilter::Only(Category::Fantasy),
            "habits",
        );
        assert!(visible.is_empty());
    }

    fn any_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_category_filter_is_exact(category in any_category()) {
            let catalog = seed_catalog();
            let visible = visible_products(catalog.products(), CategoryFilter::Only(category), "");
            let expected: Vec<&Product> = catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .collect();
            prop_assert_eq!(visible, expected);
        }

        #[test]
        fn prop_search_is_exact(term in "[a-zA-Z ]{0,4}") {
            let catalog = seed_catalog();
            let visible = visible_products(catalog.products(), CategoryFilter::All, &term);
            let needle = term.to_lowercase();
            for product in catalog.products() {
                let qualifies = product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle);
                prop_assert_eq!(visible.contains(&product), qualifies);
            }
        }
    }
}
