use thiserror::Error;

use crate::components::toast::{Toast, ToastVariant};
use crate::lead::models::{LeadDraft, LeadField};
use crate::lead::webhook::TransportError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("name and phone are required")]
    MissingRequiredFields,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl SubmitError {
    /// `None` means the UI stays quiet (the button is disabled anyway).
    pub fn toast(&self) -> Option<Toast> {
        match self {
            SubmitError::MissingRequiredFields => Some(Toast::new(
                "Campos obrigatórios",
                "Nome e telefone são obrigatórios.",
                ToastVariant::Destructive,
            )),
            SubmitError::AlreadySubmitting => None,
        }
    }
}

/// Snapshot taken at submit time. Later edits to the form don't leak into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    pub lead: LeadDraft,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Delivered,
    NotConfigured,
    TransportFailed(TransportError),
}

impl SubmitOutcome {
    pub fn toast(&self) -> Toast {
        match self {
            SubmitOutcome::Delivered => Toast::new(
                "✅ Agendamento enviado!",
                "Os dados foram enviados para seu WhatsApp via Zapier.",
                ToastVariant::Default,
            ),
            SubmitOutcome::NotConfigured => Toast::new(
                "Solicitação registrada!",
                "Configure o Zapier para receber no WhatsApp automaticamente.",
                ToastVariant::Default,
            ),
            // Never tell the visitor the request may be lost.
            SubmitOutcome::TransportFailed(_) => Toast::new(
                "Dados registrados",
                "Configure o webhook do Zapier para automação completa.",
                ToastVariant::Default,
            ),
        }
    }
}

/// Everything the appointment form keeps between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: LeadDraft,
    pub endpoint_url: String,
    pub endpoint_panel_open: bool,
    pub submitting: bool,
}

impl FormState {
    pub fn update_field(&mut self, field: LeadField, value: String) {
        self.draft.set(field, value);
    }

    pub fn toggle_endpoint_panel(&mut self) {
        self.endpoint_panel_open = !self.endpoint_panel_open;
    }

    pub fn set_endpoint_url(&mut self, url: String) {
        self.endpoint_url = url;
    }

    pub fn endpoint(&self) -> Option<&str> {
        if self.endpoint_url.is_empty() {
            None
        } else {
            Some(&self.endpoint_url)
        }
    }

    /// Validation gate. Does not touch the state, so a rejected submit keeps
    /// whatever the visitor typed.
    pub fn prepare_submission(&self) -> Result<SubmitPlan, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.draft.has_required_fields() {
            return Err(SubmitError::MissingRequiredFields);
        }
        Ok(SubmitPlan {
            lead: self.draft.clone(),
            endpoint: self.endpoint().map(str::to_string),
        })
    }

    pub fn mark_submitting(&mut self) {
        self.submitting = true;
    }

    /// Runs after every dispatch, whatever the outcome. The endpoint and the
    /// panel flag survive; the lead does not.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
        self.draft = LeadDraft::default();
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Enviando..."
        } else if self.endpoint().is_some() {
            "Enviar para WhatsApp"
        } else {
            "Solicitar Sessão Online"
        }
    }

    pub fn endpoint_status(&self) -> &'static str {
        if self.endpoint().is_some() {
            "✅ Webhook configurado - agendamentos serão enviados ao WhatsApp"
        } else {
            "⚠️ Configure o Zapier para receber agendamentos no WhatsApp automaticamente"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.update_field(LeadField::Name, "Ana Silva".to_string());
        state.update_field(LeadField::Phone, "83999990000".to_string());
        state
    }

    #[test]
    fn missing_name_is_rejected_and_draft_kept() {
        let mut state = FormState::default();
        state.update_field(LeadField::Phone, "83999990000".to_string());
        state.update_field(LeadField::Reason, "insônia".to_string());
        let before = state.clone();

        let err = state.prepare_submission().unwrap_err();

        assert_eq!(err, SubmitError::MissingRequiredFields);
        assert_eq!(state, before);
        let toast = err.toast().unwrap();
        assert_eq!(toast.title, "Campos obrigatórios");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn missing_phone_is_rejected() {
        let mut state = FormState::default();
        state.update_field(LeadField::Name, "Ana Silva".to_string());
        assert_eq!(
            state.prepare_submission(),
            Err(SubmitError::MissingRequiredFields)
        );
    }

    #[test]
    fn plan_without_endpoint() {
        let plan = filled().prepare_submission().unwrap();
        assert_eq!(plan.endpoint, None);
        assert_eq!(plan.lead.name, "Ana Silva");
    }

    #[test]
    fn plan_carries_endpoint_verbatim() {
        let mut state = filled();
        state.set_endpoint_url("https://example.test/hook".to_string());
        let plan = state.prepare_submission().unwrap();
        assert_eq!(plan.endpoint.as_deref(), Some("https://example.test/hook"));
    }

    #[test]
    fn endpoint_accepts_anything() {
        let mut state = FormState::default();
        state.set_endpoint_url("not a url".to_string());
        assert_eq!(state.endpoint(), Some("not a url"));
        state.set_endpoint_url(String::new());
        assert_eq!(state.endpoint(), None);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled();
        state.mark_submitting();
        assert_eq!(
            state.prepare_submission(),
            Err(SubmitError::AlreadySubmitting)
        );
        assert!(SubmitError::AlreadySubmitting.toast().is_none());
    }

    #[test]
    fn finishing_resets_fields_but_keeps_endpoint() {
        let mut state = filled();
        state.update_field(LeadField::Address, "Rua das Flores, 10".to_string());
        state.set_endpoint_url("https://example.test/hook".to_string());
        state.toggle_endpoint_panel();
        state.mark_submitting();

        state.finish_submission();

        assert!(!state.submitting);
        assert_eq!(state.draft, LeadDraft::default());
        assert_eq!(state.endpoint_url, "https://example.test/hook");
        assert!(state.endpoint_panel_open);

        state.finish_submission();
        assert_eq!(state.draft, LeadDraft::default());
    }

    #[test]
    fn toggling_panel_leaves_fields_alone() {
        let mut state = filled();
        let draft = state.draft.clone();
        state.toggle_endpoint_panel();
        assert!(state.endpoint_panel_open);
        state.toggle_endpoint_panel();
        assert!(!state.endpoint_panel_open);
        assert_eq!(state.draft, draft);
    }

    #[test]
    fn labels_follow_state() {
        let mut state = FormState::default();
        assert_eq!(state.submit_label(), "Solicitar Sessão Online");
        assert!(state.endpoint_status().starts_with("⚠️"));

        state.set_endpoint_url("https://example.test/hook".to_string());
        assert_eq!(state.submit_label(), "Enviar para WhatsApp");
        assert!(state.endpoint_status().starts_with("✅"));

        state.mark_submitting();
        assert_eq!(state.submit_label(), "Enviando...");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(SubmitOutcome::Delivered.toast().title, "✅ Agendamento enviado!");
        assert_eq!(SubmitOutcome::NotConfigured.toast().title, "Solicitação registrada!");
        let failed = SubmitOutcome::TransportFailed(TransportError::TimedOut(15_000)).toast();
        assert_eq!(failed.title, "Dados registrados");
        assert_eq!(failed.variant, ToastVariant::Default);
    }
}
