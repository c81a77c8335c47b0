pub mod animation;
pub mod chart;
pub mod configs;
pub mod record;
pub mod series;
pub mod temporal;
