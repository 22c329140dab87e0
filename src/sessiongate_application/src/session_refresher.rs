//! Client-side listener that mirrors provider token changes into the server
//! session cookie.
//!
//! The refresher subscribes to the identity provider's token-change
//! notifications (sign in, sign out, silent renewal) and forwards each new
//! credential to a [`SessionSink`]. Events are picked up in the order the
//! provider emits them, but every forward runs as its own task: overlapping
//! forwards are not coalesced and whichever finishes last decides the cookie.

use sessiongate_core::{SessionSink, TokenChange};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    oneshot,
};
use tokio::task::{JoinHandle, JoinSet};

/// Anything that publishes token-change notifications.
pub trait TokenChangeSource {
    fn subscribe(&self) -> broadcast::Receiver<TokenChange>;
}

impl TokenChangeSource for broadcast::Sender<TokenChange> {
    fn subscribe(&self) -> broadcast::Receiver<TokenChange> {
        broadcast::Sender::subscribe(self)
    }
}

pub struct SessionRefresher;

impl SessionRefresher {
    /// Subscribe to `source` and start forwarding to `sink`.
    ///
    /// The subscription is taken before this returns, so no event emitted
    /// afterwards is missed. Must be called inside a tokio runtime.
    pub fn start<T, S>(source: &T, sink: S) -> RefresherHandle
    where
        T: TokenChangeSource + ?Sized,
        S: SessionSink,
    {
        let events = source.subscribe();
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(listen(events, sink, stop_rx));

        tracing::debug!("Session refresher started");

        RefresherHandle {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }
}

/// Owner of a running refresher. Dropping it unsubscribes.
pub struct RefresherHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Unsubscribe, then wait for forwards that are already in flight.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(error) = task.await {
                tracing::warn!(%error, "Session refresher task failed");
            }
        }
    }
}

impl Drop for RefresherHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn listen<S: SessionSink>(
    mut events: broadcast::Receiver<TokenChange>,
    sink: S,
    mut stop: oneshot::Receiver<()>,
) {
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            // Events already queued are forwarded before a stop request is honoured
            biased;

            event = events.recv() => match event {
                Ok(change) => {
                    in_flight.spawn(forward(sink.clone(), change));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Session refresher fell behind, events dropped");
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("Token change source closed");
                    break;
                }
            },
            _ = &mut stop => {
                tracing::debug!("Session refresher unsubscribed");
                break;
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(error) = joined {
                    tracing::warn!(%error, "Token forward task failed");
                }
            }
        }
    }

    drop(events);
    while let Some(joined) = in_flight.join_next().await {
        if let Err(error) = joined {
            tracing::warn!(%error, "Token forward task failed");
        }
    }
}

async fn forward<S: SessionSink>(sink: S, change: TokenChange) {
    let kind = change.kind();
    match sink.forward(change.credential().cloned()).await {
        Ok(()) => tracing::debug!(kind, "Token change forwarded"),
        // No retries: the next provider event will resynchronise the cookie
        Err(error) => tracing::warn!(kind, %error, "Failed to forward token change"),
    }
}
