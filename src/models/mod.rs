//! Domain models for the armada registry.
//!
//! The registry tracks a single entity: the [`Ship`]. Listing requests carry
//! a [`ShipFilter`] (twelve optional AND-combined criteria), an optional
//! [`ShipOrder`] sort key, and pagination parameters. Creation and update
//! payloads are option-structs where field presence, not value, decides which
//! validation and mutation rules fire.

mod ship;

pub use ship::*;
