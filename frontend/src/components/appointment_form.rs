use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastView};
use crate::config;
use crate::lead::form_state::FormState;
use crate::lead::models::LeadField;
use crate::lead::webhook::{self, GlooTransport};

pub enum FormAction {
    UpdateField(LeadField, String),
    ToggleEndpointPanel,
    SetEndpointUrl(String),
    SubmitStarted,
    SubmitFinished,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::UpdateField(field, value) => next.update_field(field, value),
            FormAction::ToggleEndpointPanel => next.toggle_endpoint_panel(),
            FormAction::SetEndpointUrl(url) => next.set_endpoint_url(url),
            FormAction::SubmitStarted => next.mark_submitting(),
            FormAction::SubmitFinished => next.finish_submission(),
        }
        next.into()
    }
}

#[function_component(AppointmentForm)]
pub fn appointment_form() -> Html {
    let state = use_reducer(FormState::default);
    let toast = use_state(|| None::<Toast>);

    let input_for = |field: LeadField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::UpdateField(field, input.value()));
        })
    };

    let on_reason_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(FormAction::UpdateField(LeadField::Reason, area.value()));
        })
    };

    let on_endpoint_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetEndpointUrl(input.value()));
        })
    };

    let toggle_panel = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(FormAction::ToggleEndpointPanel);
        })
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let onsubmit = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let plan = match state.prepare_submission() {
                Ok(plan) => plan,
                Err(err) => {
                    debug!("Submit rejected: {}", err);
                    if let Some(message) = err.toast() {
                        toast.set(Some(message));
                    }
                    return;
                }
            };

            state.dispatch(FormAction::SubmitStarted);
            info!("Submitting appointment request");

            let state = state.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let transport = GlooTransport::new(config::WEBHOOK_TIMEOUT_MS);
                let outcome = webhook::dispatch(&plan, &transport).await;
                toast.set(Some(outcome.toast()));
                state.dispatch(FormAction::SubmitFinished);
            });
        })
    };

    html! {
        <div class="appointment">
            <style>
                {r#"
                .appointment {
                    width: 100%;
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .card {
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(6px);
                    border-radius: 14px;
                    box-shadow: 0 8px 30px rgba(74, 144, 164, 0.12);
                    padding: 1.5rem;
                }
                .card--accent {
                    background: rgba(180, 220, 214, 0.15);
                }
                .integration__header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .integration__header h3 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 600;
                }
                .icon-button {
                    background: transparent;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    padding: 0.4rem;
                    border-radius: 8px;
                }
                .icon-button:hover {
                    background: rgba(74, 144, 164, 0.1);
                }
                .muted {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .hint {
                    color: #6b7280;
                    font-size: 0.75rem;
                }
                .form__header {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .form__badge {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #4a90a4, #7fb3a8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                .form__header h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .form__grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: 1fr 1fr;
                }
                .field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .field label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .field input, .field textarea {
                    height: 3rem;
                    padding: 0 0.75rem;
                    border: 1px solid #d8e3e7;
                    border-radius: 8px;
                    background: #ffffff;
                    font: inherit;
                    transition: border-color 0.3s, box-shadow 0.3s;
                }
                .field textarea {
                    min-height: 8rem;
                    padding: 0.75rem;
                    resize: none;
                }
                .field input:focus, .field textarea:focus {
                    outline: none;
                    border-color: #4a90a4;
                    box-shadow: 0 0 0 3px rgba(74, 144, 164, 0.2);
                }
                .submit-button {
                    width: 100%;
                    height: 3rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #4a90a4, #7fb3a8);
                    color: #ffffff;
                    font-weight: 500;
                    font-size: 1rem;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid #ffffff;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                @media (max-width: 768px) {
                    .form__grid {
                        grid-template-columns: 1fr;
                        gap: 0;
                    }
                }
                "#}
            </style>

            <div class="card card--accent">
                <div class="integration__header">
                    <h3>{"💬 Integração WhatsApp"}</h3>
                    <button type="button" class="icon-button" onclick={toggle_panel} aria-label="Configurar webhook">
                        {"⚙️"}
                    </button>
                </div>
                if state.endpoint_panel_open {
                    <div class="field">
                        <label for="webhook">
                            {"Zapier Webhook URL (para receber agendamentos no WhatsApp)"}
                        </label>
                        <input
                            id="webhook"
                            type="url"
                            placeholder="https://hooks.zapier.com/hooks/catch/..."
                            value={state.endpoint_url.clone()}
                            oninput={on_endpoint_input}
                        />
                        <p class="hint">
                            {"Configure um Zap com trigger \"Catch Hook\" conectado ao WhatsApp para receber os agendamentos automaticamente."}
                        </p>
                    </div>
                } else {
                    <p class="muted">{state.endpoint_status()}</p>
                }
            </div>

            <div class="card">
                <div class="form__header">
                    <div class="form__badge">{"📅"}</div>
                    <h3>{"Agendar Sessão Online"}</h3>
                    <p class="muted">{"Preencha os dados abaixo para solicitar sua sessão de psicologia"}</p>
                </div>
                <form onsubmit={onsubmit}>
                    <div class="form__grid">
                        <div class="field">
                            <label for="nome">{"👤 Nome Completo *"}</label>
                            <input
                                id="nome"
                                type="text"
                                placeholder="Seu nome completo"
                                value={state.draft.name.clone()}
                                oninput={input_for(LeadField::Name)}
                                required=true
                            />
                        </div>
                        <div class="field">
                            <label for="telefone">{"📞 Telefone *"}</label>
                            <input
                                id="telefone"
                                type="tel"
                                placeholder="(00) 00000-0000"
                                value={state.draft.phone.clone()}
                                oninput={input_for(LeadField::Phone)}
                                required=true
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label for="endereco">{"📍 Endereço"}</label>
                        <input
                            id="endereco"
                            type="text"
                            placeholder="Seu endereço completo"
                            value={state.draft.address.clone()}
                            oninput={input_for(LeadField::Address)}
                        />
                    </div>
                    <div class="field">
                        <label for="anamnese">{"📝 Motivo da Consulta"}</label>
                        <textarea
                            id="anamnese"
                            placeholder="Descreva brevemente o que gostaria de trabalhar nas sessões ou suas principais preocupações..."
                            value={state.draft.reason.clone()}
                            oninput={on_reason_input}
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={state.submitting}>
                        if state.submitting {
                            <span class="spinner"></span>
                        } else {
                            <span>{"🕐"}</span>
                        }
                        {state.submit_label()}
                    </button>
                </form>
            </div>

            <ToastView toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
