pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form_binding;
pub mod icons;
pub mod log_feed;
pub mod pacing;
pub mod prompt;
pub mod transport;
pub mod view_bindings;

#[cfg(test)]
pub mod test_support;
