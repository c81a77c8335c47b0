pub mod animation_frame;
