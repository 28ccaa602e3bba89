pub mod evaluate;
pub mod render;
pub mod serve;

pub use evaluate::evaluate;
pub use render::render;
pub use serve::serve;
