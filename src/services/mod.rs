pub mod padding_monitor;
pub mod padding_setter;
pub mod window_prober;

pub use padding_monitor::PaddingMonitor;
pub use padding_setter::{create_padding_setter, PaddingSetterTrait};
pub use window_prober::{create_window_prober, WindowProberTrait};
