//! Core data model: entities, charm options, player views

pub mod charm;
pub mod entity;
pub mod option;
pub mod player;

pub use charm::{CharmSpell, Selection, SelectionConstraints, SelectorStrategy};
pub use entity::{EntityId, OptionId, PlayerId};
pub use option::{CharmOption, GENERIC_FILLER_TAG};
pub use player::{PlayerView, StaticEffect, StaticFlags};
