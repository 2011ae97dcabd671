use crate::config::Config;

/// Applies a padding value to the target application.
///
/// Fire-and-forget: failures are logged by the implementation and never
/// reported back to the caller.
#[async_trait::async_trait]
pub trait PaddingSetterTrait: Send + Sync {
    async fn set_padding(&self, padding: u32);

    fn name(&self) -> &'static str;
}

/// Factory function to create an appropriate padding setter based on the dry_run flag
pub fn create_padding_setter(config: &Config, dry_run: bool) -> Box<dyn PaddingSetterTrait> {
    if dry_run {
        Box::new(super::dry_run::DryRunSetter)
    } else {
        Box::new(super::kitty::KittyPaddingSetter::new(
            &config.target.kitty_program,
            config.target.remote_to.clone(),
        ))
    }
}
