//! Inventory quality domain module.
//!
//! Advances a shop's stock by one day at a time. Each item carries a category
//! resolved from its name, and each category has its own quality rule. Pure
//! deterministic domain logic (no IO, no logging, no storage).

pub mod category;
pub mod gilded_rose;
pub mod item;
mod rules;

pub use category::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MARKER, ItemCategory, LEGENDARY_QUALITY, MAX_QUALITY,
    SULFURAS,
};
pub use gilded_rose::{Inventory, advance_one_day};
pub use item::Item;
