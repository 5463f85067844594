use log::info;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::panel::PanelSection;
use crate::components::team::TeamSection;
use crate::content::clinic;
use crate::pages::program::{use_initial_scroll, PAGE_CSS};
use crate::reveal::use_scroll_reveal;
use crate::Route;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("+15", "anos de clínica"),
    ("6", "especialidades integradas"),
    ("+2.000", "famílias atendidas"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let page = &clinic::PAGE;
    let navigator = use_navigator();
    use_initial_scroll();
    use_scroll_reveal();

    // Programs on the home page switch views in-app instead of reloading.
    let on_page_change = {
        let navigator = navigator.clone();
        Callback::from(move |route: Route| {
            info!("Opening program page {:?}", route);
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="program-page home-page" style={format!("--accent: {};", page.accent)}>
            <Hero page={page} />
            <section class="highlights">
                { for HIGHLIGHTS.iter().enumerate().map(|(index, (value, label))| html! {
                    <div class="highlight reveal" style={crate::reveal::stagger_style(index)}>
                        <span class="highlight-value">{*value}</span>
                        <span class="highlight-label">{*label}</span>
                    </div>
                }) }
            </section>
            <PanelSection page={page} on_page_change={Some(on_page_change)} />
            <TeamSection heading={page.team_heading} members={page.team} />
            <section class="closing-section">
                <h2 class="reveal">{page.closing_title}</h2>
                <p class="reveal">{page.closing_text}</p>
            </section>
            <ContactForm />
            <Footer />
            <style>{PAGE_CSS}</style>
            <style>
                {r#"
                .highlights {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    padding: 3rem 2rem;
                    background: white;
                    flex-wrap: wrap;
                }

                .highlight {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .highlight-value {
                    font-size: 2.4rem;
                    font-weight: 800;
                    color: var(--accent);
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-weight: 600;
                }

                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.75rem;
                    border: 1px solid #cbd2d9;
                    border-radius: 10px;
                    font: inherit;
                }

                .contact-submit {
                    align-self: flex-start;
                    background: var(--accent);
                    color: white;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .contact-notice {
                    color: #2a9d8f;
                    font-weight: 600;
                }

                .contact-direct {
                    display: flex;
                    flex-direction: column;
                    gap: 0.8rem;
                }

                .whatsapp-link {
                    background: #25d366;
                    color: white;
                    padding: 0.8rem 1.4rem;
                    border-radius: 999px;
                    text-decoration: none;
                    text-align: center;
                    font-weight: 700;
                }

                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
