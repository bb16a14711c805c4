pub mod field;
pub mod player;
pub mod roster;

pub use field::FieldConditions;
pub use player::PlayerAttributes;
pub use roster::Roster;
