pub mod bubble_point;
pub mod chart_outcome;
pub mod fetch_outcome;
pub mod line_plot;
pub mod region_fill;
pub mod request_spec;
