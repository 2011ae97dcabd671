use tracing::info;

use super::r#trait::PaddingSetterTrait;

pub struct DryRunSetter;

#[async_trait::async_trait]
impl PaddingSetterTrait for DryRunSetter {
    async fn set_padding(&self, padding: u32) {
        info!("[DRY RUN] kitty @ set-spacing padding={}", padding);
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
