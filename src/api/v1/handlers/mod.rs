pub mod admin;
pub mod me;
