//! Filter predicate and collection filter stage.
//!
//! Every criterion has a sentinel value meaning "no constraint". An entity
//! passes when it satisfies every active criterion. An entity that lacks the
//! attribute an active criterion reads is rejected; absent data is never
//! treated as "in range".

use super::types::{FilterCriteria, ScalarRange, SortKey};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};
use vitrine_contracts::attributes::NumericAttribute;
use vitrine_contracts::entity::CatalogEntity;

/// First criterion an entity failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Category,
    /// Value outside the active range or below the threshold
    OutOfRange(NumericAttribute),
    /// Entity has no value for an attribute an active criterion reads
    MissingAttribute(NumericAttribute),
    Neighborhood,
    Search,
    MissingTag,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Category => write!(f, "category mismatch"),
            Rejection::OutOfRange(attr) => write!(f, "{attr} out of range"),
            Rejection::MissingAttribute(attr) => write!(f, "no {attr} value"),
            Rejection::Neighborhood => write!(f, "neighborhood mismatch"),
            Rejection::Search => write!(f, "search text not found"),
            Rejection::MissingTag => write!(f, "required tag missing"),
        }
    }
}

fn check_range<E: CatalogEntity>(
    entity: &E,
    attribute: NumericAttribute,
    range: Option<&ScalarRange<u64>>,
) -> Option<Rejection> {
    let range = range?;
    match entity.numeric(attribute) {
        None => Some(Rejection::MissingAttribute(attribute)),
        Some(value) if !range.contains(&value) => {
            Some(Rejection::OutOfRange(attribute))
        }
        Some(_) => None,
    }
}

fn check_threshold<E: CatalogEntity>(
    entity: &E,
    attribute: NumericAttribute,
    minimum: Option<u32>,
) -> Option<Rejection> {
    let minimum = minimum.filter(|n| *n > 0)?;
    match entity.numeric(attribute) {
        None => Some(Rejection::MissingAttribute(attribute)),
        Some(value) if value < u64::from(minimum) => {
            Some(Rejection::OutOfRange(attribute))
        }
        Some(_) => None,
    }
}

/// Evaluate the criteria against one entity, returning the first failed
/// criterion.
pub fn rejection<E: CatalogEntity>(
    entity: &E,
    criteria: &FilterCriteria<E::Category>,
) -> Option<Rejection> {
    if !criteria.category.admits(&entity.category()) {
        return Some(Rejection::Category);
    }

    let numeric = check_range(
        entity,
        NumericAttribute::Price,
        criteria.price.as_ref(),
    )
    .or_else(|| {
        check_range(entity, NumericAttribute::Size, criteria.size.as_ref())
    })
    .or_else(|| {
        check_threshold(
            entity,
            NumericAttribute::Bedrooms,
            criteria.min_bedrooms,
        )
    })
    .or_else(|| {
        check_threshold(
            entity,
            NumericAttribute::Bathrooms,
            criteria.min_bathrooms,
        )
    });
    if let Some(reason) = numeric {
        return Some(reason);
    }

    if let Some(wanted) = criteria.neighborhood.as_option() {
        let matched = entity
            .neighborhood()
            .is_some_and(|n| n.eq_ignore_ascii_case(wanted.trim()));
        if !matched {
            return Some(Rejection::Neighborhood);
        }
    }

    if let Some(needle) = criteria.normalized_search() {
        let found = entity
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !found {
            return Some(Rejection::Search);
        }
    }

    if !criteria.required_tags.iter().all(|tag| entity.has_tag(tag)) {
        return Some(Rejection::MissingTag);
    }

    None
}

/// True iff the entity satisfies every active criterion
pub fn matches<E: CatalogEntity>(
    entity: &E,
    criteria: &FilterCriteria<E::Category>,
) -> bool {
    rejection(entity, criteria).is_none()
}

/// Keep the entities the predicate accepts, in their original order.
pub fn filter_entities<'a, E: CatalogEntity>(
    entities: &'a [E],
    criteria: &FilterCriteria<E::Category>,
) -> Vec<&'a E> {
    let kept: Vec<&E> = entities
        .iter()
        .filter(|entity| match rejection(*entity, criteria) {
            None => true,
            Some(reason) => {
                trace!(id = %entity.id(), %reason, "entity filtered out");
                false
            }
        })
        .collect();

    debug!(
        input = entities.len(),
        kept = kept.len(),
        active = criteria.active_count(),
        "filter stage complete"
    );
    kept
}

/// Stable fingerprint of a criteria record plus sort key.
///
/// Search text is compared trimmed and lowercased, and tags compare
/// case-insensitively, so equivalent inputs hash the same.
pub fn hash_criteria<C: Hash>(criteria: &FilterCriteria<C>, sort: SortKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    criteria.category.hash(&mut hasher);
    criteria.price.hash(&mut hasher);
    criteria.size.hash(&mut hasher);
    criteria.min_bedrooms.filter(|n| *n > 0).hash(&mut hasher);
    criteria.min_bathrooms.filter(|n| *n > 0).hash(&mut hasher);

    // Hashed as options so an unset field still writes its discriminant
    criteria
        .neighborhood
        .as_option()
        .map(|n| n.trim().to_lowercase())
        .hash(&mut hasher);
    criteria.normalized_search().hash(&mut hasher);

    let mut tags: Vec<String> = criteria
        .required_tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    tags.sort();
    tags.dedup();
    tags.hash(&mut hasher);

    sort.hash(&mut hasher);
    hasher.finish()
}
