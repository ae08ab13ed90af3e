//! Approval action and status resolution.
//!
//! Managers act on team documents (leave applications, expense claims)
//! through a small set of next actions. Which actions are legal depends
//! on whether an active workflow definition governs the document type:
//! if one does, the workflow engine's transitions are authoritative; if
//! not, a fixed two-state approval model applies.

use async_trait::async_trait;
use ess_common::AppResult;
use std::sync::Arc;

/// Statuses from which the static approval model allows no further action.
pub const TERMINAL_STATUSES: [&str; 2] = ["Approved", "Rejected"];

/// One legal transition reported by the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Action name shown to the user (e.g. "Approve").
    pub action: String,
    /// State the document enters when the action is taken.
    pub target_state: String,
}

/// Read-only view of the external workflow engine.
///
/// The engine owns the state machine; these services only reflect it.
/// Implementations live with the host platform integration.
#[async_trait]
pub trait WorkflowQuery: Send + Sync {
    /// Whether an active workflow definition exists for the document type.
    async fn has_active_workflow(&self, document_type: &str) -> AppResult<bool>;

    /// Legal transitions for one document, in definition order.
    ///
    /// Only called for document types with an active workflow. A missing
    /// document surfaces as the engine's own not-found error.
    async fn legal_transitions(
        &self,
        document_type: &str,
        document_id: &str,
    ) -> AppResult<Vec<Transition>>;

    /// Document states of the active workflow, in definition order.
    async fn workflow_states(&self, document_type: &str) -> AppResult<Vec<String>>;
}

/// Service resolving legal actions and selectable statuses per document.
#[derive(Clone)]
pub struct ApprovalService {
    workflow: Arc<dyn WorkflowQuery>,
}

impl ApprovalService {
    /// Create a new approval service.
    #[must_use]
    pub fn new(workflow: Arc<dyn WorkflowQuery>) -> Self {
        Self { workflow }
    }

    /// Resolve the legal next actions for a document.
    ///
    /// With an active workflow the engine's transition actions are
    /// returned verbatim, in engine order. Without one, the fallback is
    /// `["Approved", "Rejected"]` unless the document already sits in a
    /// terminal status, in which case no action is offered.
    pub async fn resolve_actions(
        &self,
        document_type: &str,
        document_id: &str,
        current_status: &str,
    ) -> AppResult<Vec<String>> {
        if self.workflow.has_active_workflow(document_type).await? {
            tracing::debug!(document_type, document_id, "resolving actions from workflow");
            let transitions = self
                .workflow
                .legal_transitions(document_type, document_id)
                .await?;
            return Ok(transitions.into_iter().map(|t| t.action).collect());
        }

        if TERMINAL_STATUSES.contains(&current_status) {
            Ok(Vec::new())
        } else {
            Ok(TERMINAL_STATUSES.iter().map(|s| (*s).to_string()).collect())
        }
    }

    /// Resolve the status values selectable for a document type.
    ///
    /// With an active workflow the workflow's document states win.
    /// Otherwise `static_options` (the document's own status field
    /// options) are returned, minus blanks and any `excluded` values.
    pub async fn resolve_status_list(
        &self,
        document_type: &str,
        static_options: &[String],
        excluded: &[&str],
    ) -> AppResult<Vec<String>> {
        if self.workflow.has_active_workflow(document_type).await? {
            return self.workflow.workflow_states(document_type).await;
        }

        Ok(static_options
            .iter()
            .filter(|s| !s.is_empty() && !excluded.contains(&s.as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FixtureEngine {
        active: bool,
        transitions: Vec<Transition>,
        states: Vec<String>,
    }

    impl FixtureEngine {
        fn inactive() -> Self {
            Self {
                active: false,
                transitions: vec![],
                states: vec![],
            }
        }
    }

    #[async_trait]
    impl WorkflowQuery for FixtureEngine {
        async fn has_active_workflow(&self, _document_type: &str) -> AppResult<bool> {
            Ok(self.active)
        }

        async fn legal_transitions(
            &self,
            _document_type: &str,
            _document_id: &str,
        ) -> AppResult<Vec<Transition>> {
            Ok(self.transitions.clone())
        }

        async fn workflow_states(&self, _document_type: &str) -> AppResult<Vec<String>> {
            Ok(self.states.clone())
        }
    }

    fn service(engine: FixtureEngine) -> ApprovalService {
        ApprovalService::new(Arc::new(engine))
    }

    fn transition(action: &str, target: &str) -> Transition {
        Transition {
            action: action.to_string(),
            target_state: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_static_model_offers_both_actions_for_pending() {
        let service = service(FixtureEngine::inactive());
        let actions = service
            .resolve_actions("Leave Application", "LA-0001", "Pending")
            .await
            .unwrap();
        assert_eq!(actions, vec!["Approved", "Rejected"]);
    }

    #[tokio::test]
    async fn test_static_model_offers_nothing_for_terminal_statuses() {
        let service = service(FixtureEngine::inactive());
        for status in ["Approved", "Rejected"] {
            let actions = service
                .resolve_actions("Leave Application", "LA-0001", status)
                .await
                .unwrap();
            assert!(actions.is_empty(), "expected no actions for {status}");
        }
    }

    #[tokio::test]
    async fn test_workflow_actions_returned_in_engine_order() {
        let service = service(FixtureEngine {
            active: true,
            transitions: vec![
                transition("Verify", "Verified"),
                transition("Approve", "Approved"),
                transition("Reject", "Rejected"),
            ],
            states: vec![],
        });
        let actions = service
            .resolve_actions("Expense Claim", "EXP-0007", "Draft")
            .await
            .unwrap();
        assert_eq!(actions, vec!["Verify", "Approve", "Reject"]);
    }

    #[tokio::test]
    async fn test_workflow_with_no_transitions_offers_nothing() {
        // Terminal workflow states have no outgoing transitions; the
        // static fallback must not kick in.
        let service = service(FixtureEngine {
            active: true,
            transitions: vec![],
            states: vec![],
        });
        let actions = service
            .resolve_actions("Expense Claim", "EXP-0007", "Pending")
            .await
            .unwrap();
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn test_status_list_prefers_workflow_states() {
        let service = service(FixtureEngine {
            active: true,
            transitions: vec![],
            states: vec!["Draft".to_string(), "Verified".to_string(), "Approved".to_string()],
        });
        let statuses = service
            .resolve_status_list("Payment Entry", &["ignored".to_string()], &[])
            .await
            .unwrap();
        assert_eq!(statuses, vec!["Draft", "Verified", "Approved"]);
    }

    #[tokio::test]
    async fn test_status_list_static_filters_blanks_and_excluded() {
        let service = service(FixtureEngine::inactive());
        let options: Vec<String> = ["", "Draft", "Paid", "Unpaid", "Cancelled"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let statuses = service
            .resolve_status_list("Payment Entry", &options, &["Paid", "Unpaid"])
            .await
            .unwrap();
        assert_eq!(statuses, vec!["Draft", "Cancelled"]);
    }
}
