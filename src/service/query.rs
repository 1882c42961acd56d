//! The listing pipeline: filter, sort, paginate.
//!
//! Three independent pure functions over an owned collection, composed by
//! [`super::ShipService::list_ships`]. Filtering preserves input order, the
//! sort is stable, and pagination slices a fixed-size window.

use crate::models::{Ship, ShipFilter, ShipOrder};

pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Keep the ships satisfying every supplied criterion (logical AND).
/// Criteria left as `None` impose no constraint. Order-preserving.
pub fn apply_filter(ships: Vec<Ship>, filter: &ShipFilter) -> Vec<Ship> {
    ships
        .into_iter()
        .filter(|ship| matches(ship, filter))
        .collect()
}

fn matches(ship: &Ship, f: &ShipFilter) -> bool {
    if let Some(name) = &f.name {
        if !ship.name.contains(name.as_str()) {
            return false;
        }
    }
    if let Some(planet) = &f.planet {
        if !ship.planet.contains(planet.as_str()) {
            return false;
        }
    }
    if let Some(ship_type) = f.ship_type {
        if ship.ship_type != ship_type {
            return false;
        }
    }
    // Both date bounds are inclusive: the production date must not be
    // strictly before `after` nor strictly after `before`.
    let prod_millis = ship.prod_date.timestamp_millis();
    if let Some(after) = f.after {
        if prod_millis < after {
            return false;
        }
    }
    if let Some(before) = f.before {
        if prod_millis > before {
            return false;
        }
    }
    if let Some(is_used) = f.is_used {
        if ship.is_used != is_used {
            return false;
        }
    }
    if let Some(min_speed) = f.min_speed {
        if ship.speed < min_speed {
            return false;
        }
    }
    if let Some(max_speed) = f.max_speed {
        if ship.speed > max_speed {
            return false;
        }
    }
    if let Some(min_crew) = f.min_crew_size {
        if ship.crew_size < min_crew {
            return false;
        }
    }
    if let Some(max_crew) = f.max_crew_size {
        if ship.crew_size > max_crew {
            return false;
        }
    }
    if let Some(min_rating) = f.min_rating {
        if ship.rating < min_rating {
            return false;
        }
    }
    if let Some(max_rating) = f.max_rating {
        if ship.rating > max_rating {
            return false;
        }
    }
    true
}

/// Sort ascending by the chosen key; stable, so equal keys keep their input
/// order. With no key the collection is returned unmodified.
pub fn sort_ships(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        match order {
            ShipOrder::Id => ships.sort_by_key(|s| s.id),
            ShipOrder::Speed => ships.sort_by(|a, b| a.speed.total_cmp(&b.speed)),
            ShipOrder::Date => ships.sort_by_key(|s| s.prod_date),
            ShipOrder::Rating => ships.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        }
    }
    ships
}

/// Slice out one page: zero-based `page_number` (default 0) and `page_size`
/// (default 3). A start index past the end yields an empty page.
pub fn paginate(
    ships: Vec<Ship>,
    page_number: Option<usize>,
    page_size: Option<usize>,
) -> Vec<Ship> {
    let page = page_number.unwrap_or(0);
    let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    ships
        .into_iter()
        .skip(page.saturating_mul(size))
        .take(size)
        .collect()
}
