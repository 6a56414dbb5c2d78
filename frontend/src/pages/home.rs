use yew::prelude::*;

use crate::components::appointment_form::AppointmentForm;
use crate::components::header::SiteHeader;
use crate::config;

// (icon, label, value)
const STATS: &[(&str, &str, &str)] = &[
    ("👥", "Pacientes Atendidos", "500+"),
    ("🧠", "Anos de Experiência", "8+"),
    ("🎥", "Atendimento Online", "100%"),
    ("💬", "WhatsApp", "Disponível"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <SiteHeader />

            <section class="hero">
                <div class="container">
                    <div class="hero__intro">
                        <h1 class="hero__title">
                            {"Cuidando da sua "}
                            <span class="hero__highlight">{"saúde mental"}</span>
                            {" com dedicação"}
                        </h1>
                        <p class="hero__lead">
                            {format!(
                                "{} oferece atendimento psicológico online personalizado e acolhedor. Agende sua sessão de forma rápida e prática.",
                                config::PRACTITIONER_NAME
                            )}
                        </p>
                    </div>

                    <div class="stats">
                        { for STATS.iter().map(|(icon, label, value)| html! {
                            <div class="stat-card" key={*label}>
                                <div class="stat-card__icon">{*icon}</div>
                                <div class="stat-card__value">{*value}</div>
                                <div class="stat-card__label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="appointment-section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Agendar Sessão Online"}</h2>
                        <p>
                            {"Preencha o formulário abaixo e entraremos em contato pelo WhatsApp para confirmar sua sessão online no melhor horário para você."}
                        </p>
                    </div>
                    <AppointmentForm />
                </div>
            </section>

            <section class="contact">
                <div class="container">
                    <h3 class="contact__title">{"Como Entrar em Contato"}</h3>
                    <div class="contact__grid">
                        <div class="contact__item">
                            <h4>{"WhatsApp"}</h4>
                            <p class="muted">{config::WHATSAPP_DISPLAY}</p>
                            <a
                                href={config::WHATSAPP_LINK}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact__link"
                            >
                                {"Iniciar conversa"}
                            </a>
                        </div>
                        <div class="contact__item">
                            <h4>{"Modalidade"}</h4>
                            <p class="muted">{"Atendimento Online"}</p>
                            <p class="contact__note">{"Via videochamada"}</p>
                        </div>
                        <div class="contact__item">
                            <h4>{"Agendamento"}</h4>
                            <p class="muted">{"Flexível e personalizado"}</p>
                            <p class="contact__note">{"Confirme pelo WhatsApp"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    background: #f7fafa;
                    color: #1f2a30;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #f7fafa 0%, rgba(216, 234, 236, 0.3) 50%, rgba(180, 220, 214, 0.1) 100%);
                }
                .hero__intro {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .hero__title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .hero__highlight {
                    background: linear-gradient(45deg, #4a90a4, #7fb3a8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero__lead {
                    font-size: 1.25rem;
                    color: #6b7280;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    line-height: 1.6;
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 4rem auto 0;
                }
                .stat-card {
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(6px);
                    border: 1px solid rgba(216, 227, 231, 0.5);
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 16px rgba(74, 144, 164, 0.08);
                }
                .stat-card__icon {
                    font-size: 2rem;
                    margin-bottom: 0.75rem;
                }
                .stat-card__value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .stat-card__label {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .appointment-section {
                    padding: 5rem 1rem;
                }
                .section-heading {
                    margin-bottom: 3rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    font-size: 1.125rem;
                    color: #6b7280;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .appointment-section .appointment {
                    text-align: left;
                }
                .contact {
                    padding: 4rem 1rem;
                    background: rgba(216, 234, 236, 0.3);
                }
                .contact__title {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }
                .contact__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact__item h4 {
                    margin: 0 0 0.5rem;
                }
                .contact__note {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .contact__link {
                    display: inline-block;
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #4a90a4;
                    text-decoration: none;
                }
                .contact__link:hover {
                    color: #3a7384;
                }
                @media (max-width: 768px) {
                    .hero__title {
                        font-size: 2.25rem;
                    }
                    .stats, .contact__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
