//! Assistant — async orchestration over the chat session and the triage
//! wizard.
//!
//! All "AI" latency here is simulated: a bot reply or an analysis result
//! becomes visible only after a fixed delay. Each delayed completion is a
//! tracked task that is aborted on reset/shutdown and that re-checks a
//! validity token before applying its result, so a timer that fires after
//! teardown is discarded rather than applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::chat::session::ChatSnapshot;
use crate::chat::{ChatMessage, ChatSession, ResponseMatcher};
use crate::config::AssistantConfig;
use crate::error::Result;
use crate::wizard::{AnalysisResult, WizardController, WizardSnapshot, WizardStep};

/// State-change notifications for whatever layer renders the assistant.
#[derive(Debug, Clone)]
pub enum AssistantEvent {
    MessageAppended(ChatMessage),
    TypingChanged(bool),
    WizardStepChanged(WizardStep),
    AnalysisReady(AnalysisResult),
}

/// Owns one chat session and one wizard session and applies the simulated
/// latency around them.
pub struct Assistant {
    config: AssistantConfig,
    matcher: Arc<ResponseMatcher>,
    chat: Arc<RwLock<ChatSession>>,
    wizard: Arc<RwLock<WizardController>>,
    /// Bumped on wizard reset/shutdown; pending analyses carry the value
    /// they were scheduled under and discard themselves on mismatch.
    analysis_epoch: Arc<AtomicU64>,
    pending_reply: Mutex<Option<JoinHandle<()>>>,
    pending_analysis: Mutex<Option<JoinHandle<()>>>,
    events: broadcast::Sender<AssistantEvent>,
}

impl Assistant {
    pub fn new(config: AssistantConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            config,
            matcher: Arc::new(ResponseMatcher::default_rules()),
            chat: Arc::new(RwLock::new(ChatSession::new())),
            wizard: Arc::new(RwLock::new(WizardController::new())),
            analysis_epoch: Arc::new(AtomicU64::new(0)),
            pending_reply: Mutex::new(None),
            pending_analysis: Mutex::new(None),
            events,
        }
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<AssistantEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    // ── Chat ────────────────────────────────────────────────────────────

    /// Append a user message and schedule the matched bot reply after the
    /// configured delay. Returns the user message id.
    pub async fn send_message(&self, text: &str) -> Result<u64> {
        let (user_id, epoch, user_msg) = {
            let mut chat = self.chat.write().await;
            let id = chat.push_user(text)?;
            let msg = chat
                .messages()
                .last()
                .cloned()
                .expect("push_user appended a message");
            (id, chat.epoch(), msg)
        };
        let _ = self.events.send(AssistantEvent::MessageAppended(user_msg));
        let _ = self.events.send(AssistantEvent::TypingChanged(true));

        // Matching is pure over the input, so resolve the reply up front
        let reply = self.matcher.reply_to(text).to_string();
        let chat = Arc::clone(&self.chat);
        let events = self.events.clone();
        let delay = self.config.reply_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = chat.write().await;
            if session.push_bot(epoch, &reply) {
                let msg = session
                    .messages()
                    .last()
                    .cloned()
                    .expect("push_bot appended a message");
                drop(session);
                let _ = events.send(AssistantEvent::MessageAppended(msg));
                let _ = events.send(AssistantEvent::TypingChanged(false));
            }
        });
        // The typing gate rejects overlapping sends, so at most one reply
        // is in flight per session
        *self.pending_reply.lock().await = Some(handle);

        Ok(user_id)
    }

    /// Reset the chat session, discarding any pending reply.
    pub async fn reset_chat(&self) {
        if let Some(handle) = self.pending_reply.lock().await.take() {
            handle.abort();
        }
        let mut chat = self.chat.write().await;
        chat.reset();
        let _ = self.events.send(AssistantEvent::TypingChanged(false));
    }

    pub async fn chat_snapshot(&self) -> ChatSnapshot {
        self.chat.read().await.snapshot()
    }

    // ── Wizard ──────────────────────────────────────────────────────────

    pub async fn toggle_symptom(&self, label: &str) -> bool {
        self.wizard.write().await.toggle_symptom(label)
    }

    pub async fn set_duration(&self, label: &str) -> bool {
        self.wizard.write().await.set_duration(label)
    }

    pub async fn set_severity(&self, label: &str) -> bool {
        self.wizard.write().await.set_severity(label)
    }

    /// Advance the wizard.
    ///
    /// On the Severity step this schedules the analysis instead of
    /// completing synchronously, mirroring the simulated inference latency;
    /// the terminal step becomes visible once the delay elapses.
    pub async fn advance_wizard(&self) -> bool {
        {
            let wizard = self.wizard.read().await;
            if wizard.step() == WizardStep::Severity {
                drop(wizard);
                return self.submit_for_analysis().await;
            }
        }
        let mut wizard = self.wizard.write().await;
        if wizard.advance() {
            let _ = self
                .events
                .send(AssistantEvent::WizardStepChanged(wizard.step()));
            true
        } else {
            false
        }
    }

    /// Schedule the analysis of the collected answers.
    ///
    /// Silently rejected unless the wizard sits on the Severity step with
    /// its gate met.
    pub async fn submit_for_analysis(&self) -> bool {
        {
            let wizard = self.wizard.read().await;
            if wizard.step() != WizardStep::Severity || !wizard.can_advance() {
                debug!(step = %wizard.step(), "Analysis submission rejected");
                return false;
            }
        }

        let epoch = self.analysis_epoch.load(Ordering::SeqCst);
        let analysis_epoch = Arc::clone(&self.analysis_epoch);
        let wizard = Arc::clone(&self.wizard);
        let events = self.events.clone();
        let delay = self.config.analysis_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if analysis_epoch.load(Ordering::SeqCst) != epoch {
                debug!("Stale analysis discarded after wizard reset");
                return;
            }
            let mut guard = wizard.write().await;
            // A competing submission may have advanced already; advance()
            // rejects silently in that case
            if guard.advance() {
                let result = guard
                    .result()
                    .cloned()
                    .expect("advance into the terminal step derived a result");
                let step = guard.step();
                drop(guard);
                let _ = events.send(AssistantEvent::WizardStepChanged(step));
                let _ = events.send(AssistantEvent::AnalysisReady(result));
            }
        });
        *self.pending_analysis.lock().await = Some(handle);
        true
    }

    /// Whether an analysis is scheduled but not yet applied.
    pub async fn is_analyzing(&self) -> bool {
        self.pending_analysis
            .lock()
            .await
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    pub async fn retreat_wizard(&self) -> bool {
        let mut wizard = self.wizard.write().await;
        if wizard.retreat() {
            let _ = self
                .events
                .send(AssistantEvent::WizardStepChanged(wizard.step()));
            true
        } else {
            false
        }
    }

    /// Reset the wizard, discarding any pending analysis.
    pub async fn reset_wizard(&self) {
        self.analysis_epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending_analysis.lock().await.take() {
            handle.abort();
        }
        let mut wizard = self.wizard.write().await;
        wizard.reset();
        let _ = self
            .events
            .send(AssistantEvent::WizardStepChanged(wizard.step()));
    }

    pub async fn wizard_snapshot(&self) -> WizardSnapshot {
        self.wizard.read().await.snapshot()
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Abort all pending delayed completions.
    pub async fn shutdown(&self) {
        self.analysis_epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending_reply.lock().await.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending_analysis.lock().await.take() {
            handle.abort();
        }
        debug!("Assistant shut down, pending completions discarded");
    }
}
