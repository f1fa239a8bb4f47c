//! Command handlers

pub mod config;
pub mod genre;
pub mod item;
pub mod profile;
