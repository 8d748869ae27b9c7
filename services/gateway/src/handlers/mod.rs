pub mod admin;
pub mod order;
pub mod trades;
