//! Submit Discussion use case
//!
//! Handles one form submission end to end: lock the form, send the single
//! request, render the rounds or the failure, then unlock the form.

use crate::ports::discussion_gateway::{DiscussionGateway, GatewayError};
use crate::ports::discussion_renderer::DiscussionRenderer;
use crate::ports::discussion_view::DiscussionView;
use council_domain::{DiscussionRequest, DiscussionResponse};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Which path a submission took
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Rounds were rendered into the content container
    Rendered { rounds: usize },
    /// The error block was rendered instead
    Failed { error: GatewayError },
}

impl SubmissionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmissionOutcome::Rendered { .. })
    }

    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            SubmissionOutcome::Failed { error } => Some(error),
            SubmissionOutcome::Rendered { .. } => None,
        }
    }
}

/// Hides the loading indicator and re-enables the submit control when
/// dropped, whichever way the submission ends.
struct SettleGuard<'a> {
    view: &'a dyn DiscussionView,
}

impl<'a> SettleGuard<'a> {
    fn lock(view: &'a dyn DiscussionView) -> Self {
        view.set_submit_enabled(false);
        view.set_loading_visible(true);
        view.set_results_visible(false);
        view.clear_content();
        Self { view }
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.view.set_loading_visible(false);
        self.view.set_submit_enabled(true);
    }
}

/// Use case for submitting a discussion request
pub struct SubmitDiscussionUseCase<G: DiscussionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: DiscussionGateway + 'static> SubmitDiscussionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Run one submit-to-render cycle against `view`.
    ///
    /// Never returns an error: failures are rendered into the view and
    /// reported through [`SubmissionOutcome::Failed`].
    pub async fn execute(
        &self,
        view: &dyn DiscussionView,
        renderer: &dyn DiscussionRenderer,
    ) -> SubmissionOutcome {
        let request = DiscussionRequest::from_form(view.topic(), &view.rounds_text());
        let _settle = SettleGuard::lock(view);

        info!(
            "Submitting discussion ({} rounds) to {}",
            request.rounds,
            self.gateway.origin()
        );

        match self.fetch(&request).await {
            Ok(response) => {
                let html = renderer.render_discussion(&response);
                view.set_content(&html);
                view.set_results_visible(true);
                view.scroll_results_into_view();
                debug!("Rendered {} rounds", response.rounds.len());
                SubmissionOutcome::Rendered {
                    rounds: response.rounds.len(),
                }
            }
            Err(e) => {
                error!("Error: {}", e);
                let html = renderer.render_error(&e.to_string(), self.gateway.origin());
                view.set_content(&html);
                view.set_results_visible(true);
                SubmissionOutcome::Failed { error: e }
            }
        }
    }

    async fn fetch(&self, request: &DiscussionRequest) -> Result<DiscussionResponse, GatewayError> {
        let body = self.gateway.discuss(request).await?;
        Ok(DiscussionResponse::from_value(body)?)
    }
}
