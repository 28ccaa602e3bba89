pub mod landing;
pub mod metrics;
pub mod not_found;
pub mod results;
pub mod upload;
