use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// One webhook firing: the calendar that changed and when we heard about it.
/// The payload never names the event itself; the resolver infers that.
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    pub calendar_id: String,
    pub fired_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TriggerBus {
    tx: mpsc::Sender<TriggerEvent>,
}

impl TriggerBus {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<TriggerEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, event: TriggerEvent) {
        let _ = self.tx.send(event).await;
    }
}
