use std::sync::{Arc, Mutex};

use tokio::task::AbortHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    forms::{
        self, enums::form_layout::FormLayout, models::form_state::FormState, source::FormSource,
    },
    inference::{self, transport::Transport},
    render::{self, models::rendered_response::RenderedResponse, sink::RenderTargets},
};

use super::handle::{SubmissionHandle, SupersedePolicy};

/// Runs form submissions through extraction, dispatch and rendering.
pub struct Console {
    transport: Arc<dyn Transport>,
    base_url: String,
    layout: FormLayout,
    targets: RenderTargets,
    policy: SupersedePolicy,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl Console {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        layout: FormLayout,
        targets: RenderTargets,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            layout,
            targets,
            policy: SupersedePolicy::default(),
            in_flight: Mutex::new(None),
        }
    }

    pub fn with_policy(mut self, policy: SupersedePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn layout(&self) -> FormLayout {
        self.layout
    }

    /// Submits and renders without spawning a task.
    pub async fn submit_once(&self, source: &impl FormSource) -> RenderedResponse {
        let form = forms::service::extract(source, self.layout);
        let id = Uuid::new_v4();

        run(
            self.transport.as_ref(),
            &self.base_url,
            &form,
            &self.targets,
        )
        .instrument(tracing::info_span!("submission", submission_id = %id))
        .await
    }

    /// Reads the form now and finishes the round trip on a background task.
    pub fn submit(&self, source: &impl FormSource) -> SubmissionHandle {
        let form = forms::service::extract(source, self.layout);
        let id = Uuid::new_v4();

        let transport = Arc::clone(&self.transport);
        let base_url = self.base_url.to_string();
        let targets = self.targets.clone();

        let task = tokio::spawn(
            async move { run(transport.as_ref(), &base_url, &form, &targets).await }
                .instrument(tracing::info_span!("submission", submission_id = %id)),
        );
        let handle = SubmissionHandle::new(id, task);

        let mut in_flight = match self.in_flight.lock() {
            Ok(in_flight) => in_flight,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = in_flight.replace(handle.abort_handle()) {
            if self.policy == SupersedePolicy::LatestWins {
                tracing::debug!(superseded_by = %id, "aborting previous submission");
                previous.abort();
            }
        }

        handle
    }
}

async fn run(
    transport: &dyn Transport,
    base_url: &str,
    form: &FormState,
    targets: &RenderTargets,
) -> RenderedResponse {
    let response = inference::service::dispatch(transport, base_url, form).await;
    let rendered = render::service::render(response.status, &response.data);
    targets.show(&rendered);
    rendered
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        app::models::api_error::ApiError,
        forms::source::MapFormSource,
        render::sink::{MemorySink, OutputSink},
    };

    /// Echoes the prompt back after sleeping `top_k` milliseconds. A prompt of
    /// "signed" also gets a `c0_signature` block.
    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn post_json(
            &self,
            _url: &str,
            payload: &Value,
        ) -> Result<(StatusCode, Value), ApiError> {
            let delay = payload["top_k"].as_u64().unwrap_or(1);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let mut body = json!({"echo": payload["prompt"].clone()});
            if payload["prompt"] == json!("signed") {
                body["c0_signature"] = json!({"input_hash": "aa"});
            }
            Ok((StatusCode::OK, body))
        }
    }

    /// Stalls the calling thread before storing `slow_text`.
    struct SlowSink {
        inner: MemorySink,
        slow_text: &'static str,
    }

    impl OutputSink for SlowSink {
        fn write(&self, text: &str) {
            if text == self.slow_text {
                std::thread::sleep(Duration::from_millis(30));
            }
            self.inner.write(text);
        }
    }

    fn console(policy: SupersedePolicy) -> (Console, MemorySink, MemorySink) {
        let response = MemorySink::new();
        let signature = MemorySink::new();
        let console = Console::new(
            Arc::new(EchoTransport),
            "http://hive.local",
            FormLayout::Standard,
            RenderTargets::new(Arc::new(response.clone()), Arc::new(signature.clone())),
        )
        .with_policy(policy);
        (console, response, signature)
    }

    fn form(prompt: &str, delay_ms: u64) -> MapFormSource {
        MapFormSource::new()
            .with_value("prompt", prompt)
            .with_value("topK", delay_ms.to_string())
    }

    #[tokio::test]
    async fn submit_once_writes_both_sinks() {
        let (console, response, signature) = console(SupersedePolicy::Race);

        let rendered = console.submit_once(&form("hello", 1)).await;

        assert_eq!(
            rendered.response_text,
            "{\n  \"status\": 200,\n  \"echo\": \"hello\"\n}"
        );
        assert_eq!(response.contents(), rendered.response_text);
        assert_eq!(signature.contents(), "N/A");
    }

    #[tokio::test]
    async fn race_policy_lets_last_resolver_render() {
        let (console, response, _) = console(SupersedePolicy::Race);

        let slow = console.submit(&form("slow", 150));
        let fast = console.submit(&form("fast", 1));

        assert!(fast.wait().await.is_some());
        assert!(slow.wait().await.is_some());
        assert!(response.contents().contains("\"echo\": \"slow\""));
    }

    #[tokio::test]
    async fn latest_wins_policy_aborts_superseded_submission() {
        let (console, response, _) = console(SupersedePolicy::LatestWins);

        let slow = console.submit(&form("slow", 150));
        let fast = console.submit(&form("fast", 1));

        assert!(fast.wait().await.is_some());
        assert_eq!(slow.wait().await, None);
        assert!(response.contents().contains("\"echo\": \"fast\""));
    }

    #[tokio::test]
    async fn aborted_handle_resolves_to_none() {
        let (console, response, _) = console(SupersedePolicy::Race);

        let handle = console.submit(&form("never", 150));
        handle.abort();

        assert_eq!(handle.wait().await, None);
        assert_eq!(response.contents(), "");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_renders_never_mix_response_and_signature() {
        for _ in 0..10 {
            let response = MemorySink::new();
            let signature = MemorySink::new();
            let slow_signature = SlowSink {
                inner: signature.clone(),
                slow_text: "N/A",
            };
            let console = Console::new(
                Arc::new(EchoTransport),
                "http://hive.local",
                FormLayout::Standard,
                RenderTargets::new(Arc::new(response.clone()), Arc::new(slow_signature)),
            );

            let plain = console.submit(&form("plain", 1));
            let signed = console.submit(&form("signed", 1));
            assert!(plain.wait().await.is_some());
            assert!(signed.wait().await.is_some());

            let shown_signed = response.contents().contains("\"echo\": \"signed\"");
            let signature_text = signature.contents();
            if shown_signed {
                assert_eq!(signature_text, "{\n  \"input_hash\": \"aa\"\n}");
            } else {
                assert!(response.contents().contains("\"echo\": \"plain\""));
                assert_eq!(signature_text, "N/A");
            }
        }
    }
}
