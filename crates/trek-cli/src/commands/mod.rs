pub mod add;
pub mod calendar;
pub mod config;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod locations;
pub mod report;
pub mod shared;
pub mod stats;
