pub mod competency;
pub mod roster;
