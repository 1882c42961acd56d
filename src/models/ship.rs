use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered spacecraft.
///
/// Every persisted ship satisfies the field constraints enforced by the
/// service layer: names and planets are 1–50 characters, `speed` lies in
/// [0.01, 0.99], `crew_size` in [1, 9999], and `prod_date` falls strictly
/// inside the 2800–3019 production window. `rating` is derived from speed,
/// usage, and production year; clients never supply it.
///
/// Wire format follows the registry's original contract: camelCase field
/// names and `prodDate` as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    /// Derived score, rounded to 2 decimal places. See [`crate::service::rating`].
    pub rating: f64,
}

/// The closed set of ship categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::Military => "MILITARY",
            Self::Merchant => "MERCHANT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "TRANSPORT" => Some(Self::Transport),
            "MILITARY" => Some(Self::Military),
            "MERCHANT" => Some(Self::Merchant),
            _ => None,
        }
    }
}

/// Sort key for ship listings. Ascending, stable; no key means the
/// collection keeps its storage order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

/// Input for registering a new ship.
///
/// Every field except `is_used` is required; they are still `Option` so a
/// missing field surfaces as a validation failure rather than a
/// deserialization fault. `is_used` defaults to `false` when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipInput {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Production date as epoch milliseconds.
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

/// Input for updating an existing ship. All fields are optional for partial
/// updates; absent fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipInput {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Production date as epoch milliseconds.
    pub prod_date: Option<i64>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

/// A fully validated ship awaiting its storage-assigned id.
#[derive(Debug, Clone)]
pub struct ShipDraft {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

/// Optional listing criteria, AND-combined. An absent criterion imposes no
/// constraint. `after`/`before` are inclusive epoch-millisecond bounds on the
/// production date.
#[derive(Debug, Clone, Default)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}
