pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod layout;
pub mod models;
pub mod params;
pub mod report;
