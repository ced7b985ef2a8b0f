pub mod config;
pub mod constants;
pub mod controllers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod structs;
pub mod utils;
