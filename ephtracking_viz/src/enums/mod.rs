pub mod animation_state;
pub mod chart_kind;
