#![doc = "The `book_library_api` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, data access, authentication helpers, external"]
#![doc = "catalog client, routing configuration and error handling of the Book Library API."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

pub use crate::error::AppError;
