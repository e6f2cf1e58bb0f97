use crate::actions::{Action, DispatchOutcome};
use crate::analytics::load_analytics;
use crate::api::ChatApi;
use crate::document::Document;
use crate::events::{EventBinder, EventOutcome, UiEvent};
use crate::forms::{validate_forgot_password_form, validate_register_form};
use crate::models::{ActionStatus, AnalyticsPayload};
use crate::prompt::Prompt;
use crate::search::{SearchOutcome, search_user};
use tracing::{error, info, warn};

pub struct Page<D, P> {
    api: ChatApi,
    document: D,
    prompt: P,
    events: EventBinder,
}

impl<D: Document, P: Prompt> Page<D, P> {
    pub fn ready(api: ChatApi, document: D, prompt: P) -> Self {
        let events = EventBinder::attach(&document);
        Self {
            api,
            document,
            prompt,
            events,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn handle_event(&mut self, event: &UiEvent) -> EventOutcome {
        self.events.handle(&mut self.document, event)
    }

    pub async fn dispatch(&mut self, action: Action, id: &str) -> DispatchOutcome {
        if let Some(question) = action.confirmation() {
            if !self.prompt.confirm(question) {
                return DispatchOutcome::Cancelled;
            }
        }

        info!(action = action.as_str(), id, "dispatching");
        match self.api.post_action(&action.path_segments(id)).await {
            Ok(ActionStatus::Accepted) => {
                self.prompt.alert(action.success_message());
                let reloaded = action.reloads_on_success();
                if reloaded {
                    self.document.reload();
                }
                DispatchOutcome::Succeeded { reloaded }
            }
            Ok(ActionStatus::Rejected(status)) => {
                warn!(action = action.as_str(), id, status, "request rejected");
                self.prompt.alert(action.failure_message());
                DispatchOutcome::Rejected { status }
            }
            Err(err) => {
                error!(action = action.as_str(), id, "Error: {err}");
                self.prompt.alert(action.failure_message());
                DispatchOutcome::Unreachable
            }
        }
    }

    pub async fn flag_message(&mut self, message_id: &str) -> DispatchOutcome {
        self.dispatch(Action::FlagMessage, message_id).await
    }

    pub async fn ban_user(&mut self, user_id: &str) -> DispatchOutcome {
        self.dispatch(Action::BanUser, user_id).await
    }

    pub async fn suspend_user(&mut self, user_id: &str) -> DispatchOutcome {
        self.dispatch(Action::SuspendUser, user_id).await
    }

    pub async fn ignore_flag(&mut self, message_id: &str) -> DispatchOutcome {
        self.dispatch(Action::IgnoreFlag, message_id).await
    }

    pub async fn delete_flagged_message(&mut self, message_id: &str) -> DispatchOutcome {
        self.dispatch(Action::DeleteFlaggedMessage, message_id).await
    }

    pub async fn search_user(&mut self) -> Option<SearchOutcome> {
        search_user(&self.api, &mut self.document).await
    }

    pub async fn load_analytics(&mut self) -> Option<AnalyticsPayload> {
        load_analytics(&self.api, &mut self.document).await
    }

    pub fn validate_register_form(&self) -> bool {
        validate_register_form(&self.document, &self.prompt)
    }

    pub fn validate_forgot_password_form(&self) -> bool {
        validate_forgot_password_form(&self.document, &self.prompt)
    }
}
