//! The registry core: validation, rating derivation, the listing pipeline,
//! and the partial-update merge, orchestrated over the storage collaborator.

pub mod query;
pub mod rating;
pub mod validate;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::db::Database;
use crate::models::{CreateShipInput, Ship, ShipDraft, ShipFilter, ShipOrder, UpdateShipInput};

/// The closed set of failures the HTTP layer maps to status codes. Storage
/// faults are the only variant callers cannot provoke with bad input.
#[derive(Debug, Error)]
pub enum ShipError {
    /// Malformed identifier: zero or negative.
    #[error("ship id must be a positive integer")]
    InvalidRequest,
    #[error("ship not found")]
    NotFound,
    /// A field failed its validation rule, or a required field was missing.
    #[error("invalid ship payload")]
    InvalidPayload,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ShipService {
    db: Database,
}

impl ShipService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Filter, sort, and paginate the full collection.
    pub fn list_ships(
        &self,
        filter: &ShipFilter,
        order: Option<ShipOrder>,
        page_number: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<Vec<Ship>, ShipError> {
        let ships = query::apply_filter(self.db.find_all()?, filter);
        let ships = query::sort_ships(ships, order);
        Ok(query::paginate(ships, page_number, page_size))
    }

    /// Number of ships matching the criteria, ignoring pagination.
    pub fn count_ships(&self, filter: &ShipFilter) -> Result<usize, ShipError> {
        Ok(query::apply_filter(self.db.find_all()?, filter).len())
    }

    /// Validate the full payload, derive the rating, and persist. The storage
    /// layer assigns the id. `is_used` defaults to `false` when omitted.
    pub fn create_ship(&self, input: CreateShipInput) -> Result<Ship, ShipError> {
        let name = input
            .name
            .filter(|n| validate::check_name(n))
            .ok_or(ShipError::InvalidPayload)?;
        let planet = input
            .planet
            .filter(|p| validate::check_name(p))
            .ok_or(ShipError::InvalidPayload)?;
        let ship_type = input.ship_type.ok_or(ShipError::InvalidPayload)?;
        let prod_date = input
            .prod_date
            .filter(|&ms| validate::check_prod_date(ms))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(ShipError::InvalidPayload)?;
        let speed = input
            .speed
            .filter(|&v| validate::check_speed(v))
            .ok_or(ShipError::InvalidPayload)?;
        let crew_size = input
            .crew_size
            .filter(|&c| validate::check_crew_size(c))
            .ok_or(ShipError::InvalidPayload)?;
        let is_used = input.is_used.unwrap_or(false);

        let draft = ShipDraft {
            rating: rating::compute_rating(speed, is_used, prod_date),
            name,
            planet,
            ship_type,
            prod_date,
            is_used,
            speed,
            crew_size,
        };
        Ok(self.db.insert_ship(&draft)?)
    }

    pub fn get_ship(&self, id: i64) -> Result<Ship, ShipError> {
        if id <= 0 {
            return Err(ShipError::InvalidRequest);
        }
        self.db.find_by_id(id)?.ok_or(ShipError::NotFound)
    }

    /// Apply a partial update: only present fields are touched, each checked
    /// with the same rules as creation. Validation runs before any mutation,
    /// so a rejected payload leaves the stored ship exactly as it was. The
    /// rating is recomputed from the merged state.
    pub fn update_ship(&self, id: i64, input: UpdateShipInput) -> Result<Ship, ShipError> {
        let mut ship = self.get_ship(id)?;

        if input.name.as_deref().is_some_and(|n| !validate::check_name(n)) {
            return Err(ShipError::InvalidPayload);
        }
        if input
            .planet
            .as_deref()
            .is_some_and(|p| !validate::check_name(p))
        {
            return Err(ShipError::InvalidPayload);
        }
        if input.speed.is_some_and(|v| !validate::check_speed(v)) {
            return Err(ShipError::InvalidPayload);
        }
        if input
            .crew_size
            .is_some_and(|c| !validate::check_crew_size(c))
        {
            return Err(ShipError::InvalidPayload);
        }
        let prod_date = match input.prod_date {
            Some(ms) if validate::check_prod_date(ms) => Some(
                DateTime::<Utc>::from_timestamp_millis(ms).ok_or(ShipError::InvalidPayload)?,
            ),
            Some(_) => return Err(ShipError::InvalidPayload),
            None => None,
        };

        if let Some(name) = input.name {
            ship.name = name;
        }
        if let Some(planet) = input.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = input.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = input.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = input.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = input.crew_size {
            ship.crew_size = crew_size;
        }
        ship.rating = rating::compute_rating(ship.speed, ship.is_used, ship.prod_date);

        self.db.update_ship(&ship)?;
        Ok(ship)
    }

    pub fn delete_ship(&self, id: i64) -> Result<(), ShipError> {
        if id <= 0 {
            return Err(ShipError::InvalidRequest);
        }
        if self.db.delete_by_id(id)? {
            Ok(())
        } else {
            Err(ShipError::NotFound)
        }
    }
}
