#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{frame_to_image, init_tracing, save_frame_png, unpack_rgba};
