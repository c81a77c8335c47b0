pub mod temporal_spec;
