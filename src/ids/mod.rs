//! Ids of units, abilities and buffs used by the opener.
//!
//! Values match `stableid.json` of the game, so commands produced here can be
//! forwarded to the game client as is.
#![allow(missing_docs)]

mod ability_id;
mod buff_id;
mod unit_typeid;

pub use ability_id::AbilityId;
pub use buff_id::BuffId;
pub use unit_typeid::UnitTypeId;

mod impls;
