use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f7fafa; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;">
            <div style="text-align: center;">
                <h1 style="font-size: 2.25rem; margin-bottom: 1rem;">{"404"}</h1>
                <p style="font-size: 1.25rem; color: #6b7280; margin-bottom: 1rem;">{"Página não encontrada"}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Voltar para o início"}
                </Link<Route>>
            </div>
        </div>
    }
}
