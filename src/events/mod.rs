pub mod window;

pub use window::{Transition, WindowMode};
