use crate::config::Config;

/// Source of the fullscreen flag for the target application.
///
/// Implementations never fail: any error while querying is logged and read
/// as "not fullscreen".
#[async_trait::async_trait]
pub trait WindowProberTrait: Send + Sync {
    async fn is_fullscreen(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Factory function to create an appropriate window prober based on the dry_run flag
pub fn create_window_prober(config: &Config, dry_run: bool) -> Box<dyn WindowProberTrait> {
    if dry_run {
        Box::new(super::dry_run::DryRunProber::new())
    } else {
        Box::new(super::osascript::OsascriptProber::new(
            &config.target.prober_program,
            &config.target.process_name,
        ))
    }
}
