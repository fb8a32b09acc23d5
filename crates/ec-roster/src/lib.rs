//! `ec-roster`: designer tuning per unit type.
//!
//! # Crate layout
//!
//! | Module     | Contents                                |
//! |------------|-----------------------------------------|
//! | [`roster`] | `UnitTypeDef`, `Roster`                 |
//! | [`loader`] | `load_roster_csv`, `load_roster_reader` |
//! | [`error`]  | `RosterError`, `RosterResult<T>`        |

pub mod error;
pub mod loader;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{RosterError, RosterResult};
pub use loader::{load_roster_csv, load_roster_reader};
pub use roster::{Roster, UnitTypeDef};
