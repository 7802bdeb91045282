use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::chunking::chunk;
use crate::frame::Frame;
use crate::profile::StreamProfile;

const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// How an emission task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Every content frame and the terminal marker were handed to the consumer.
    Completed { frames: usize },
    /// The consumer went away; `frames_sent` content frames made it out.
    Cancelled { frames_sent: usize },
}

/// Receiving side of a running emission.
///
/// Dropping `receiver` (as happens when an HTTP client disconnects and its response
/// body is dropped) stops the task at its next suspension point.
pub struct EmitterHandle {
    pub stream_id: Uuid,
    pub receiver: mpsc::Receiver<Frame>,
    pub task: JoinHandle<EmitOutcome>,
}

/// Produces the frames of one text under one profile.
///
/// The text is shared read-only; each `spawn` runs an independent task.
#[derive(Debug, Clone)]
pub struct ChunkEmitter {
    text: Arc<str>,
    profile: StreamProfile,
    channel_capacity: usize,
}

impl ChunkEmitter {
    pub fn new(text: Arc<str>, profile: StreamProfile) -> Self {
        Self {
            text,
            profile,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn profile(&self) -> &StreamProfile {
        &self.profile
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every frame of a full emission, content first and `Done` last, without delays.
    pub fn frames(&self) -> Vec<Frame> {
        chunk(&self.text, self.profile.policy)
            .into_iter()
            .map(Frame::Content)
            .chain(std::iter::once(Frame::Done))
            .collect()
    }

    /// Start emitting on a background task.
    pub fn spawn(&self) -> EmitterHandle {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let stream_id = Uuid::new_v4();

        let fragments = chunk(&self.text, self.profile.policy);
        let initial_delay = self.profile.initial_delay;
        let frame_delay = self.profile.frame_delay;

        let span = tracing::info_span!("emit", %stream_id, profile = %self.profile);
        let task = tokio::spawn(
            async move {
                tracing::debug!(frames = fragments.len(), "Stream started");

                let outcome = emit(fragments, initial_delay, frame_delay, &tx).await;

                match outcome {
                    EmitOutcome::Completed { frames } => {
                        tracing::info!(frames, "Stream completed");
                    }
                    EmitOutcome::Cancelled { frames_sent } => {
                        tracing::debug!(frames_sent, "Stream cancelled by consumer");
                    }
                }
                outcome
            }
            .instrument(span),
        );

        EmitterHandle {
            stream_id,
            receiver: rx,
            task,
        }
    }
}

async fn emit(
    fragments: Vec<String>,
    initial_delay: Duration,
    frame_delay: Duration,
    tx: &mpsc::Sender<Frame>,
) -> EmitOutcome {
    let mut sent = 0;

    if !pause(tx, initial_delay).await {
        return EmitOutcome::Cancelled { frames_sent: sent };
    }

    for fragment in fragments {
        if tx.send(Frame::Content(fragment)).await.is_err() {
            return EmitOutcome::Cancelled { frames_sent: sent };
        }
        sent += 1;

        if !pause(tx, frame_delay).await {
            return EmitOutcome::Cancelled { frames_sent: sent };
        }
    }

    if tx.send(Frame::Done).await.is_err() {
        return EmitOutcome::Cancelled { frames_sent: sent };
    }

    EmitOutcome::Completed { frames: sent }
}

/// Sleep for `delay` unless the receiver is dropped first. Returns false on drop.
async fn pause(tx: &mpsc::Sender<Frame>, delay: Duration) -> bool {
    if delay.is_zero() {
        return !tx.is_closed();
    }

    tokio::select! {
        biased;
        _ = tx.closed() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
