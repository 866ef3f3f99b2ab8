//! Narration pipeline.
//!
//! Producers push prompts onto a [`NarrationQueue`] without ever waiting on the
//! LLM. A single [`NarrationWorker`] drains the queue in FIFO order, spacing
//! consecutive LLM calls by at least the configured cooldown (measured from
//! the completion of the previous call) and bounding each call with a timeout.
//! Failures never stop the worker: they are replaced with a fallback line.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::{FALLBACK_NARRATION, NARRATOR_SYSTEM_PROMPT};

/// A prompt waiting for narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationRequest {
    pub prompt: String,
}

/// Receives each narration once the worker has it.
#[async_trait]
pub trait NarrationListener: Send + Sync {
    async fn on_narration(&self, text: String);
}

/// Producer side of the narration queue. Cheap to clone.
#[derive(Clone)]
pub struct NarrationQueue {
    tx: mpsc::UnboundedSender<NarrationRequest>,
}

/// Consumer side, handed to the [`NarrationWorker`].
pub struct NarrationReceiver {
    rx: mpsc::UnboundedReceiver<NarrationRequest>,
}

impl NarrationQueue {
    pub fn channel() -> (NarrationQueue, NarrationReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (NarrationQueue { tx }, NarrationReceiver { rx })
    }

    /// Queue a prompt. Never blocks.
    ///
    /// Returns `false` when the worker is gone (shutdown in progress).
    pub fn enqueue(&self, prompt: impl Into<String>) -> bool {
        let request = NarrationRequest {
            prompt: prompt.into(),
        };
        match self.tx.send(request) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("Narration worker stopped, dropping request");
                false
            }
        }
    }
}

impl NarrationReceiver {
    /// Pop a queued request without waiting.
    pub fn try_next(&mut self) -> Option<NarrationRequest> {
        self.rx.try_recv().ok()
    }

    async fn next(&mut self) -> Option<NarrationRequest> {
        self.rx.recv().await
    }
}

/// Pacing and sampling for narration calls.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationSettings {
    pub cooldown: Duration,
    pub timeout: Duration,
    pub temperature: f32,
}

pub struct NarrationWorker {
    receiver: NarrationReceiver,
    llm: Arc<dyn LlmPort>,
    listener: Arc<dyn NarrationListener>,
    settings: NarrationSettings,
}

impl NarrationWorker {
    pub fn new(
        receiver: NarrationReceiver,
        llm: Arc<dyn LlmPort>,
        listener: Arc<dyn NarrationListener>,
        settings: NarrationSettings,
    ) -> Self {
        Self {
            receiver,
            llm,
            listener,
            settings,
        }
    }

    /// Process requests until cancelled or every producer is dropped.
    ///
    /// An in-flight LLM call is abandoned on cancellation.
    pub async fn run(mut self, cancel: CancellationToken) {
        tracing::info!(
            cooldown_ms = self.settings.cooldown.as_millis() as u64,
            "Starting narration worker"
        );
        let mut last_call: Option<Instant> = None;

        loop {
            let request = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                request = self.receiver.next() => match request {
                    Some(request) => request,
                    None => break,
                },
            };

            if let Some(ready_at) = last_call.map(|t| t + self.settings.cooldown) {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep_until(ready_at) => {}
                }
            }

            let text = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                text = self.narrate(&request.prompt) => text,
            };
            last_call = Some(Instant::now());

            self.listener.on_narration(text).await;
        }

        tracing::info!("Narration worker stopped");
    }

    async fn narrate(&self, prompt: &str) -> String {
        let request = LlmRequest::new(prompt)
            .with_system_prompt(NARRATOR_SYSTEM_PROMPT)
            .with_temperature(self.settings.temperature);

        let result = match tokio::time::timeout(self.settings.timeout, self.llm.generate(request))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.settings.timeout.as_secs())),
        };

        match result {
            Ok(response) => {
                let text = response.content.trim();
                if text.is_empty() {
                    tracing::warn!("Narration came back empty, using fallback");
                    FALLBACK_NARRATION.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Narration failed, using fallback");
                FALLBACK_NARRATION.to_string()
            }
        }
    }
}
