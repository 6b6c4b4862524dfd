pub mod parse;
pub mod resolve;
pub mod save;
pub mod views;
