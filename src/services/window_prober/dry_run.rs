use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use super::r#trait::WindowProberTrait;

/// Сколько опросов подряд держится один режим в dry-run
const POLLS_PER_MODE: u64 = 6;

pub struct DryRunProber {
    polls: AtomicU64,
}

impl DryRunProber {
    pub fn new() -> Self {
        info!("Dry-run режим - состояние окна эмулируется");
        Self {
            polls: AtomicU64::new(0),
        }
    }
}

impl Default for DryRunProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WindowProberTrait for DryRunProber {
    async fn is_fullscreen(&self) -> bool {
        let n = self.polls.fetch_add(1, Ordering::Relaxed);
        (n / POLLS_PER_MODE) % 2 == 1
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
