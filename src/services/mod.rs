pub mod api_client;
pub mod discriminator;
pub mod heuristic;
pub mod presentation;
pub mod profile_service;
pub mod scan_state;
pub mod token_store;
