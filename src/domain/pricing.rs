use super::catalog::{Catalog, Item, Price};
use super::selection::Selection;

/// Total price of the current selection.
///
/// Unselected single-choice items and codes missing from the catalog count as zero.
/// Multi-choice sections are summed in catalog order.
pub fn total_price(catalog: &Catalog, selection: &Selection) -> Price {
    let vehicle = selection
        .vehicle_id
        .as_deref()
        .and_then(|id| catalog.vehicle(id))
        .map(|v| v.base_price)
        .unwrap_or_default();
    let color = single(selection.color_code.as_deref(), |c| catalog.color(c));
    let upholstery = single(selection.upholstery_code.as_deref(), |c| catalog.upholstery(c));

    vehicle
        + color
        + upholstery
        + selected_sum(&catalog.factory_options, &selection.factory_options)
        + selected_sum(&catalog.accessories, &selection.accessories)
}

fn single<'a>(code: Option<&str>, lookup: impl Fn(&str) -> Option<&'a Item>) -> Price {
    code.and_then(lookup).map(|item| item.price).unwrap_or_default()
}

fn selected_sum(items: &[Item], codes: &[String]) -> Price {
    items
        .iter()
        .filter(|item| codes.contains(&item.code))
        .map(|item| item.price)
        .sum()
}
