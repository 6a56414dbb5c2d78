use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(216, 227, 231, 0.5);
                }
                .site-header__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .site-header__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: inherit;
                }
                .site-header__logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #4a90a4, #7fb3a8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                }
                .site-header h1 {
                    font-size: 1.25rem;
                    margin: 0;
                }
                .site-header__subtitle {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin: 0;
                }
                .site-header__meta {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .site-header__meta {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="site-header__content">
                <Link<Route> to={Route::Home} classes="site-header__brand">
                    <div class="site-header__logo">{"🧠"}</div>
                    <div>
                        <h1>{config::PRACTITIONER_NAME}</h1>
                        <p class="site-header__subtitle">{config::PRACTICE_SUBTITLE}</p>
                    </div>
                </Link<Route>>
                <div class="site-header__meta">
                    <span>{"💬 "}{config::WHATSAPP_DISPLAY}</span>
                    <span>{"🕐 Atendimento Online"}</span>
                </div>
            </div>
        </header>
    }
}
