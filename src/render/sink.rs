use std::sync::{Arc, Mutex};

use super::models::rendered_response::RenderedResponse;

/// A display target. Each write replaces whatever was shown before.
pub trait OutputSink: Send + Sync {
    fn write(&self, text: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => buffer.to_string(),
            Err(poisoned) => poisoned.into_inner().to_string(),
        }
    }
}

impl OutputSink for MemorySink {
    fn write(&self, text: &str) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        *buffer = text.to_string();
    }
}

#[derive(Debug, Clone)]
pub struct StdoutSink {
    heading: String,
}

impl StdoutSink {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }
}

impl OutputSink for StdoutSink {
    fn write(&self, text: &str) {
        println!("== {} ==\n{}", self.heading, text);
    }
}

/// The response and signature displays. Both are written under one lock so a
/// render never leaves them showing different submissions.
#[derive(Clone)]
pub struct RenderTargets {
    pub response: Arc<dyn OutputSink>,
    pub signature: Arc<dyn OutputSink>,
    lock: Arc<Mutex<()>>,
}

impl RenderTargets {
    pub fn new(response: Arc<dyn OutputSink>, signature: Arc<dyn OutputSink>) -> Self {
        Self {
            response,
            signature,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn stdout() -> Self {
        Self::new(
            Arc::new(StdoutSink::new("response")),
            Arc::new(StdoutSink::new("signature")),
        )
    }

    pub fn show(&self, rendered: &RenderedResponse) {
        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.response.write(&rendered.response_text);
        self.signature.write(&rendered.signature_text);
    }
}
