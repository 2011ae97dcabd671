use anyhow::{Context, Result};
use clap::Parser;
use std::future::Future;
use tracing::{info, warn};
mod config;
mod error;
mod events;
mod services;
mod utils;

use config::Config;
use events::WindowMode;
use services::{create_padding_setter, create_window_prober, PaddingMonitor};

#[derive(Parser, Debug)]
#[command(name = "kitty-autopad")]
#[command(about = "Убирает padding kitty в полноэкранном режиме и возвращает его в оконном")]
struct Args {
    /// Путь к файлу конфигурации (необязателен)
    #[arg(short, long, default_value = "autopad.toml")]
    config: String,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования: trace, debug, info, warn, error.
    ///
    /// Приоритет: RUST_LOG > --log-level > logging.level из конфигурации
    #[arg(long)]
    log_level: Option<String>,

    /// Один раз опросить окно, напечатать режим и выйти
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    if let Some(level) = &args.log_level {
        config::validate_log_level(level).context("Неверное значение --log-level")?;
    }

    // Инициализация системы логирования
    init_tracing(args.log_level.as_deref().unwrap_or(&config.logging.level))?;

    info!("Запуск kitty-autopad v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена (файл: {})", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - kitty не будет изменён");
    } else {
        utils::tools::check_tools(&config);
    }

    let prober = create_window_prober(&config, args.dry_run);

    if args.check {
        let mode = WindowMode::from_fullscreen(prober.is_fullscreen().await);
        println!("{}", mode);
        return Ok(());
    }

    // Обработчик SIGINT должен стоять до первого запуска osascript
    let shutdown = shutdown_signal().context("Не удалось установить обработчик Ctrl+C")?;

    let setter = create_padding_setter(&config, args.dry_run);
    let mut monitor = PaddingMonitor::new(&config, prober, setter, std::io::stdout());

    monitor.run(shutdown).await;

    info!(
        "kitty-autopad завершил работу (последний режим: {})",
        monitor
            .last_state()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    Ok(())
}

/// Регистрирует обработчик сразу; возвращённый future завершается по Ctrl+C
#[cfg(unix)]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    Ok(async move {
        interrupt.recv().await;
        info!("Получен сигнал завершения (Ctrl+C)");
    })
}

#[cfg(not(unix))]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::sync::oneshot;

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
            Err(err) => tracing::error!("Ошибка при ожидании сигнала завершения: {}", err),
        }
        let _ = tx.send(());
    });
    Ok(async move {
        let _ = rx.await;
    })
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят строками статуса
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
