use crate::config::Config;
use std::path::PathBuf;
use tracing::{info, warn};

/// Проверить, что внешние утилиты доступны.
///
/// Ничего не блокирует: цикл опроса переживает отсутствие утилит,
/// поэтому здесь только предупреждения. Возвращает список ненайденных.
pub fn check_tools(config: &Config) -> Vec<String> {
    info!("Проверка внешних утилит...");

    if !cfg!(target_os = "macos") {
        warn!("osascript и System Events доступны только на macOS - окно всегда будет считаться оконным");
    }

    let mut missing = Vec::new();
    for program in [&config.target.prober_program, &config.target.kitty_program] {
        match locate(program) {
            Some(path) => info!("{} найден: {}", program, path.display()),
            None => {
                warn!("{} не найден в PATH", program);
                missing.push(program.clone());
            }
        }
    }

    if config.target.remote_to.is_none() {
        info!("kitty @ без --to: нужен allow_remote_control в kitty.conf");
    }

    missing
}

fn locate(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}
