pub mod renderer;

pub use renderer::{Renderer, start_label};
