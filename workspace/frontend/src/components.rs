pub mod layout;
pub mod metrics;
pub mod plot;
pub mod render;
pub mod results;
pub mod upload;
