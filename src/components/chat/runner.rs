//! Executes chat panel effects on the tokio runtime.
//!
//! Every timer and every in-flight request is a task in the runner's
//! `JoinSet`. Dropping the runner (or calling [`PanelRunner::shutdown`])
//! aborts all of them, so nothing outlives the panel it was started for.

use super::panel::{ChatPanel, Effect, PanelEvent};
use super::transport::{ChatRequest, ChatTransport};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// Outcome of one processed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Updated,
    Navigate(String),
}

pub struct PanelRunner<T: ChatTransport> {
    panel: ChatPanel,
    transport: Arc<T>,
    session_id: Option<String>,
    tasks: JoinSet<PanelEvent>,
}

impl<T: ChatTransport> PanelRunner<T> {
    /// Wrap a panel and start its boot sequence.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(mut panel: ChatPanel, transport: Arc<T>, session_id: Option<String>) -> Self {
        let effects = panel.start();
        let mut runner = Self {
            panel,
            transport,
            session_id,
            tasks: JoinSet::new(),
        };
        runner.apply(effects);
        runner
    }

    pub fn panel(&self) -> &ChatPanel {
        &self.panel
    }

    /// Number of timers and requests still pending.
    pub fn outstanding(&self) -> usize {
        self.tasks.len()
    }

    /// Submit user input. Returns `false` when the panel ignored it.
    pub fn submit(&mut self, text: &str) -> bool {
        let effects = self.panel.handle(PanelEvent::Submit(text.to_string()));
        let accepted = !effects.is_empty();
        self.apply(effects);
        accepted
    }

    pub fn disconnect(&mut self) {
        let effects = self.panel.handle(PanelEvent::Disconnect);
        self.apply(effects);
    }

    /// Wait for the next timer or reply and feed it to the panel.
    ///
    /// Returns `None` once no work is outstanding.
    pub async fn step(&mut self) -> Option<Step> {
        loop {
            let event = match self.tasks.join_next().await? {
                Ok(event) => event,
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    warn!("Chat panel task failed: {}", e);
                    continue;
                }
            };

            let effects = self.panel.handle(event);
            let navigate = effects.iter().find_map(|effect| match effect {
                Effect::Navigate(path) => Some(path.clone()),
                _ => None,
            });
            self.apply(effects);

            return Some(match navigate {
                Some(path) => Step::Navigate(path),
                None => Step::Updated,
            });
        }
    }

    /// Abort every pending timer and request.
    pub fn shutdown(&mut self) {
        debug!(pending = self.tasks.len(), "Shutting down chat panel");
        self.tasks.abort_all();
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { timer, after } => {
                    self.tasks.spawn(async move {
                        sleep(after).await;
                        PanelEvent::Timer(timer)
                    });
                }
                Effect::SendChat { message } => {
                    let transport = Arc::clone(&self.transport);
                    let request = ChatRequest {
                        message,
                        session_id: self.session_id.clone(),
                        locale: Some(self.panel.locale()),
                    };
                    self.tasks.spawn(async move {
                        let started = Instant::now();
                        let result = transport.send(request).await.map_err(|e| e.to_string());
                        PanelEvent::Reply {
                            result,
                            latency: started.elapsed(),
                        }
                    });
                }
                // Surfaced by `step`
                Effect::Navigate(_) => {}
            }
        }
    }
}
