use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::render::models::rendered_response::RenderedResponse;

/// What happens to a submission still in flight when a newer one starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SupersedePolicy {
    /// Every submission runs to completion; whichever resolves last renders last.
    #[default]
    Race,
    /// Starting a submission aborts the one before it.
    LatestWins,
}

#[derive(Debug)]
pub struct SubmissionHandle {
    pub id: Uuid,
    handle: JoinHandle<RenderedResponse>,
}

impl SubmissionHandle {
    pub(crate) fn new(id: Uuid, handle: JoinHandle<RenderedResponse>) -> Self {
        Self { id, handle }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub(crate) fn abort_handle(&self) -> tokio::task::AbortHandle {
        self.handle.abort_handle()
    }

    /// Resolves to `None` if the submission was aborted before it rendered.
    pub async fn wait(self) -> Option<RenderedResponse> {
        match self.handle.await {
            Ok(rendered) => Some(rendered),
            Err(e) if e.is_cancelled() => {
                tracing::debug!(submission_id = %self.id, "submission aborted");
                None
            }
            Err(e) => {
                tracing::error!(submission_id = %self.id, "submission task failed: {}", e);
                None
            }
        }
    }
}
