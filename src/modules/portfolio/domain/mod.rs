pub mod admin_gate;
pub mod entities;
pub mod identifier;
pub mod policies;
pub mod records;
pub mod seed;
