//! Filtering products through specifications.

use crate::{Product, Specification};

/// Select every product satisfying `spec`, preserving input order.
///
/// The returned references point into `products`, so callers observe
/// identity with the source slice. Filtering an empty slice, or filtering
/// with a contradictory specification, yields an empty result.
pub fn filter<'a, S>(products: &'a [Product], spec: &S) -> Vec<&'a Product>
where
    S: Specification + ?Sized,
{
    let matches: Vec<&Product> = products
        .iter()
        .filter(|product| spec.is_satisfied(product))
        .collect();
    tracing::debug!(total = products.len(), matched = matches.len(), "filter pass");
    matches
}
