pub mod application;
pub mod auth;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routing;
pub mod service;
pub mod store;
