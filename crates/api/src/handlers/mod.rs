//! HTTP handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod images;
pub mod pages;
pub mod posts;
pub mod preview;
