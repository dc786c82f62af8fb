use crate::models::{LineItem, Valuation, ValuationRow};
use crate::normalize::Normalizer;
use crate::pricing::PriceResolver;
use crate::variant::StarTable;

/// Value every line item and sum the grand total.
///
/// Rows come out in input order. Items the resolver cannot price keep their
/// place with an absent price and contribute nothing to the total.
pub fn appraise(
    items: &[LineItem],
    normalizer: &Normalizer,
    stars: &StarTable,
    resolver: &dyn PriceResolver,
) -> Valuation {
    let mut rows = Vec::with_capacity(items.len());
    let mut grand_total = 0.0;

    for item in items {
        let key = normalizer.normalize(&item.raw_name);
        let selector = stars.selector_for(&key, item.rank);
        log::info!("Resolving '{}' as '{key}'", item.raw_name);

        let resolved_price = resolver.resolve(&key, selector);
        let line_total = resolved_price.map(|price| price * f64::from(item.quantity));
        if let Some(total) = line_total {
            grand_total += total;
        } else {
            log::warn!("No price for '{}', leaving row unvalued", item.raw_name);
        }

        rows.push(ValuationRow {
            quantity: item.quantity,
            raw_name: item.raw_name.clone(),
            rank: item.rank,
            resolved_price,
            line_total,
        });
    }

    Valuation { rows, grand_total }
}

#[cfg(test)]
#[path = "valuation_tests.rs"]
mod tests;
