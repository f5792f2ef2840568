use dnsforever_application::ports::ZoneEventSink;
use dnsforever_domain::ZoneEvent;
use tokio::sync::mpsc;

/// Forwards zone events to an external consumer over an unbounded channel.
/// A disabled emitter, or one whose receiver is gone, drops events.
#[derive(Clone)]
pub struct ZoneEventEmitter {
    sender: Option<mpsc::UnboundedSender<ZoneEvent>>,
}

impl ZoneEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<ZoneEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self { sender: Some(tx) };
        (emitter, rx)
    }

    pub fn emit(&self, event: ZoneEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl ZoneEventSink for ZoneEventEmitter {
    fn publish(&self, event: ZoneEvent) {
        self.emit(event);
    }
}

impl Default for ZoneEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for ZoneEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
