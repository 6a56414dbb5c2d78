use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: &str, description: &str, variant: ToastVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|_| {
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                // Dropping the handle cancels a pending dismissal.
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let class = match toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    };

    html! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    max-width: 380px;
                    width: calc(100% - 3rem);
                }
                .toast {
                    background: #ffffff;
                    border: 1px solid rgba(74, 144, 164, 0.25);
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast--destructive {
                    background: #b91c1c;
                    border-color: #b91c1c;
                    color: #ffffff;
                }
                .toast__title {
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }
                .toast__description {
                    font-size: 0.9rem;
                    opacity: 0.9;
                }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            <div class={class} onclick={onclick}>
                <div class="toast__title">{&toast.title}</div>
                <div class="toast__description">{&toast.description}</div>
            </div>
        </div>
    }
}
