pub mod cards;
pub mod chart;
pub mod explanations;
pub mod interpretation;
pub mod table;

pub use cards::MetricCards;
pub use chart::ComparisonChart;
pub use explanations::MetricExplanations;
pub use interpretation::Interpretation;
pub use table::ComparisonTable;
