//! Build-validation rules and order-fulfilment arithmetic.

use pc_workshop_core::{BuildError, Catalog, Order, PartKind, SaleError};

use crate::parts::PartRegistry;

/// Component categories every sellable build must contain, in the order
/// validation reports them.
pub(crate) const REQUIRED_KINDS: [PartKind; 3] = [PartKind::Cpu, PartKind::Ram, PartKind::Gpu];

/// Validates the assembled build.
///
/// The structural rule runs first and reports only the first missing kind
/// in declared order. The fastening rule runs after it and reports a single
/// coarse reason without identifying the loose part.
pub(crate) fn validate_build(parts: &PartRegistry) -> Result<(), BuildError> {
    for required in REQUIRED_KINDS {
        if !parts.iter().any(|part| part.kind == required) {
            return Err(BuildError::MissingComponent(required));
        }
    }

    if parts.iter().any(|part| !part.secured()) {
        return Err(BuildError::LooseFasteners);
    }

    Ok(())
}

/// Checks the active order against the build and computes the payout.
///
/// The reward is the order's base budget plus the catalog price of every
/// installed part, not only the part satisfying the requirement. Parts whose
/// item no longer exists in the catalog contribute nothing.
pub(crate) fn completion_reward(
    order: &Order,
    parts: &PartRegistry,
    catalog: &Catalog,
) -> Result<u32, SaleError> {
    if !parts.iter().any(|part| part.kind == order.required()) {
        return Err(SaleError::RequirementNotMet(order.required()));
    }

    let parts_value: u32 = parts
        .iter()
        .map(|part| catalog.get(&part.item).map_or(0, |item| item.price))
        .sum();

    Ok(order.base_budget().saturating_add(parts_value))
}
