use crate::config::{Config, PaddingConfig};
use crate::error::Result;
use crate::events::{Transition, WindowMode};
use crate::services::{PaddingSetterTrait, WindowProberTrait};
use crate::trace_if_enabled;
use std::future::Future;
use std::io::Write;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

/// Цикл опроса: probe -> сравнение с last_state -> set-spacing при смене -> пауза
pub struct PaddingMonitor<W: Write> {
    prober: Box<dyn WindowProberTrait>,
    setter: Box<dyn PaddingSetterTrait>,
    padding: PaddingConfig,
    interval: Duration,
    // None до первого успешного наблюдения
    last_state: Option<WindowMode>,
    out: W,
}

impl<W: Write> PaddingMonitor<W> {
    pub fn new(
        config: &Config,
        prober: Box<dyn WindowProberTrait>,
        setter: Box<dyn PaddingSetterTrait>,
        out: W,
    ) -> Self {
        info!(
            "Инициализация PaddingMonitor (prober: {}, setter: {}, интервал: {}ms)",
            prober.name(),
            setter.name(),
            config.poll.interval_ms
        );

        Self {
            prober,
            setter,
            padding: config.padding,
            interval: config.poll.interval(),
            last_state: None,
            out,
        }
    }

    pub fn last_state(&self) -> Option<WindowMode> {
        self.last_state
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Одна итерация цикла. `Ok(Some(_))` означает, что режим сменился.
    pub async fn poll_once(&mut self) -> Result<Option<Transition>> {
        let mode = WindowMode::from_fullscreen(self.prober.is_fullscreen().await);
        trace_if_enabled!("Текущий режим окна: {}", mode);

        if self.last_state == Some(mode) {
            return Ok(None);
        }

        let padding = self.padding.for_mode(mode);
        self.setter.set_padding(padding).await;

        let transition = Transition::new(self.last_state, mode, padding);
        writeln!(self.out, "{}", transition)?;
        self.out.flush()?;

        if transition.is_initial() {
            info!("Начальный режим окна: {}, padding={}", mode, padding);
        } else {
            info!("Режим окна сменился на {}, padding={}", mode, padding);
        }
        self.last_state = Some(mode);

        Ok(Some(transition))
    }

    /// Крутит цикл, пока не завершится `shutdown`.
    ///
    /// Остановка проверяется только во время паузы между итерациями:
    /// запущенная внешняя команда всегда доходит до конца.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!("PaddingMonitor запущен");
        tokio::pin!(shutdown);

        loop {
            if let Err(e) = self.poll_once().await {
                error!("Ошибка в итерации опроса: {}", e);
                let _ = writeln!(self.out, "Error: {}", e);
                let _ = self.out.flush();
            }

            tokio::select! {
                _ = &mut shutdown => {
                    info!("PaddingMonitor остановлен");
                    break;
                }
                _ = sleep(self.interval) => {}
            }
        }
    }
}
