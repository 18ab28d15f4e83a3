pub mod account;
pub mod auth;
pub mod class;
pub mod dashboard;
pub mod group;
pub mod roster;
