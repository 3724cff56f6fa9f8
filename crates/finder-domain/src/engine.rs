//! Filter engine - applies a structured filter to a catalog
//!
//! The engine is a pure function of the filter and the catalog. Its output is
//! sorted by `(price ascending, name ascending)`, so the same filter over an
//! unchanged catalog always yields the same list in the same order.
//!
//! There are no error conditions:
//! - a price bound without a numeric value is ignored
//! - `min_price > max_price` produces an empty list
//! - an unknown category produces an empty list

use crate::category::normalize;
use crate::filter::StructuredFilter;
use crate::product::{Product, ResultItem};
use crate::traits::ProductCatalog;
use std::cmp::Ordering;

/// Apply a filter to a catalog
///
/// Both price bounds are inclusive. When the filter names a category, only
/// products whose assigned category equals the normalized filter category
/// survive; unmapped products never match a category filter.
///
/// # Examples
///
/// ```
/// use finder_domain::{apply, Product, ProductId, StructuredFilter, StaticCatalog};
///
/// let catalog = StaticCatalog::new(vec![
///     Product::new(ProductId::new(1), "B", "", 10.0, "").unwrap(),
///     Product::new(ProductId::new(2), "A", "", 10.0, "").unwrap(),
///     Product::new(ProductId::new(3), "C", "", 5.0, "").unwrap(),
/// ]);
///
/// let names: Vec<_> = apply(&StructuredFilter::default(), &catalog)
///     .into_iter()
///     .map(|item| item.name)
///     .collect();
/// assert_eq!(names, vec!["C", "A", "B"]);
/// ```
pub fn apply<C>(filter: &StructuredFilter, catalog: &C) -> Vec<ResultItem>
where
    C: ProductCatalog + ?Sized,
{
    let category = normalize(filter.category.as_deref());
    let max_price = filter.max_amount();
    let min_price = filter.min_amount();

    let mut results: Vec<ResultItem> = catalog
        .products()
        .iter()
        .filter(|product| within_bounds(product, min_price, max_price))
        .filter_map(|product| {
            let assigned = catalog.category_of(product.id);
            match &category {
                Some(wanted) if assigned != Some(wanted) => None,
                _ => Some(ResultItem::from_product(product, assigned.cloned())),
            }
        })
        .collect();

    // sort_by is stable: items with equal (price, name) keep catalog order
    results.sort_by(compare_items);
    results
}

fn within_bounds(product: &Product, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if let Some(max) = max_price {
        if product.price > max {
            return false;
        }
    }
    if let Some(min) = min_price {
        if product.price < min {
            return false;
        }
    }
    true
}

fn compare_items(a: &ResultItem, b: &ResultItem) -> Ordering {
    a.price
        .total_cmp(&b.price)
        .then_with(|| a.name.cmp(&b.name))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::filter::PriceBound;
    use crate::product::ProductId;
    use crate::traits::StaticCatalog;
    use proptest::prelude::*;

    const CATEGORIES: &[&str] = &["clothing", "electronics", "groceries", "accessories"];

    fn arb_catalog() -> impl Strategy<Value = StaticCatalog> {
        prop::collection::vec(
            ("[A-Z][a-z]{0,6}", 0u32..20_000, prop::option::of(0usize..CATEGORIES.len())),
            0..24,
        )
        .prop_map(|rows| {
            let mut products = Vec::new();
            let mut assignments = Vec::new();
            for (idx, (name, cents, category)) in rows.into_iter().enumerate() {
                let id = ProductId::new(idx as u64);
                products.push(Product::new(id, name, "", f64::from(cents) / 100.0, "").unwrap());
                if let Some(c) = category {
                    assignments.push((id, CATEGORIES[c]));
                }
            }
            assignments
                .into_iter()
                .fold(StaticCatalog::new(products), |catalog, (id, c)| {
                    catalog.with_category(id, c)
                })
        })
    }

    fn arb_filter() -> impl Strategy<Value = StructuredFilter> {
        (
            prop::option::of(prop::sample::select(vec![
                "clothing", "Apparel", "tech", "food", "bags", "unknown",
            ])),
            prop::option::of(0u32..20_000),
            prop::option::of(0u32..20_000),
        )
            .prop_map(|(category, max, min)| StructuredFilter {
                category: category.map(str::to_string),
                max_price: max.map(|cents| PriceBound::Amount(f64::from(cents) / 100.0)),
                min_price: min.map(|cents| PriceBound::Amount(f64::from(cents) / 100.0)),
            })
    }

    proptest! {
        #[test]
        fn apply_is_deterministic(catalog in arb_catalog(), filter in arb_filter()) {
            let first = apply(&filter, &catalog);
            let second = apply(&filter, &catalog);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn output_is_sorted_by_price_then_name(catalog in arb_catalog(), filter in arb_filter()) {
            let results = apply(&filter, &catalog);
            for pair in results.windows(2) {
                prop_assert_ne!(compare_items(&pair[0], &pair[1]), Ordering::Greater);
            }
        }

        #[test]
        fn output_respects_bounds(catalog in arb_catalog(), filter in arb_filter()) {
            let results = apply(&filter, &catalog);
            for item in &results {
                if let Some(max) = filter.max_amount() {
                    prop_assert!(item.price <= max);
                }
                if let Some(min) = filter.min_amount() {
                    prop_assert!(item.price >= min);
                }
                if let Some(category) = normalize(filter.category.as_deref()) {
                    prop_assert_eq!(item.category.as_ref(), Some(&category));
                }
            }
        }

        #[test]
        fn unfiltered_keeps_every_product(catalog in arb_catalog()) {
            let results = apply(&StructuredFilter::unfiltered(), &catalog);
            prop_assert_eq!(results.len(), catalog.products().len());
        }
    }
}
