pub mod chart;
pub mod legend;
pub mod table;

pub use chart::ForecastChart;
pub use legend::SeriesLegend;
pub use table::PredictionTable;
