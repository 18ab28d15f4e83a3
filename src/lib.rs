pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod router;
pub mod storage;
pub mod stores;
