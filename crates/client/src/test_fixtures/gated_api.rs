//! A [`RawApiPort`] whose responses can be held back until released.
//!
//! Each call takes the oldest unused gate, in call order, and waits for it
//! before answering. Calls made when no gate is queued answer
//! immediately. Lets tests decide the order in which overlapping requests
//! complete.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::ports::outbound::{ApiError, RawApiPort};

type Responder = Box<dyn Fn(&str, &[(String, String)]) -> Result<Value, ApiError> + Send + Sync>;

pub struct GatedApiPort {
    responder: Responder,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl GatedApiPort {
    pub fn new(
        responder: impl Fn(&str, &[(String, String)]) -> Result<Value, ApiError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            gates: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a gate for the next ungated call. Send on the returned sender
    /// to let that call answer.
    pub fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait_turn(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            // A dropped sender releases the call too.
            let _ = gate.await;
        }
    }
}

#[async_trait::async_trait]
impl RawApiPort for GatedApiPort {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.wait_turn().await;
        (self.responder)(path, query)
    }

    async fn post_json(&self, path: &str, _body: &Value) -> Result<Value, ApiError> {
        self.wait_turn().await;
        (self.responder)(path, &[])
    }
}
