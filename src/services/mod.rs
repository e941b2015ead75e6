pub mod ai_search;
pub mod auth;
pub mod catalog;
pub mod header;
pub mod navigation;
pub mod providers;
pub mod session;
pub mod validation;
