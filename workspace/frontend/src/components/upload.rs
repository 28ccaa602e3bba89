pub mod drop_zone;
pub mod file_preview;
pub mod horizon_select;

pub use drop_zone::DropZone;
pub use file_preview::FilePreview;
pub use horizon_select::HorizonSelect;
