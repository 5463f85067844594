use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::footer::Footer;
use crate::pages::program::PAGE_CSS;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="program-page not-found-page" style="--accent: #2a9d8f;">
            <section class="closing-section">
                <h1>{"Página não encontrada"}</h1>
                <p>{"O endereço que você acessou não existe ou mudou de lugar."}</p>
                <Link<Route> to={Route::Home} classes="closing-cta">
                    {"Voltar para o início"}
                </Link<Route>>
            </section>
            <Footer />
            <style>{PAGE_CSS}</style>
        </div>
    }
}
