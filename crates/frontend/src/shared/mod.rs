pub mod api_utils;
pub mod components;
pub mod config;
pub mod http;
pub mod postcode;
pub mod toast;
pub mod upload;
