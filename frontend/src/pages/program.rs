use yew::prelude::*;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::panel::PanelSection;
use crate::components::team::TeamSection;
use crate::config;
use crate::content::PageContent;
use crate::navigation::anchor_id;
use crate::reveal::use_scroll_reveal;

pub const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        font-family: "Nunito", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: #1f2933;
        background: #fbfaf7;
    }

    body.panel-open,
    body.menu-open {
        overflow: hidden;
    }

    body.panel-open .program-page > :not(.panel-section),
    body.menu-open .program-page {
        filter: blur(3px) brightness(0.85);
        transition: filter 0.3s ease;
    }

    .program-page [id] {
        scroll-margin-top: 84px;
    }

    .program-page {
        padding-top: 74px;
        min-height: 100vh;
    }

    .hero {
        position: relative;
        min-height: 72vh;
        display: flex;
        align-items: center;
        padding: 4rem 2rem;
        overflow: hidden;
    }

    .hero-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        opacity: 0.25;
        z-index: -1;
    }

    .hero-content {
        max-width: 760px;
        margin: 0 auto;
    }

    .hero-kicker {
        text-transform: uppercase;
        letter-spacing: 0.12em;
        color: var(--accent);
        font-weight: 700;
    }

    .hero h1 {
        font-size: 3.2rem;
        line-height: 1.1;
        margin: 0.5rem 0 1.5rem;
    }

    .hero-word {
        color: var(--accent);
        display: inline-block;
        animation: wordIn 0.6s ease-out;
    }

    @keyframes wordIn {
        from { opacity: 0; transform: translateY(12px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .hero-subtitle {
        font-size: 1.2rem;
        color: #52606d;
    }

    .hero-cta-group {
        display: flex;
        gap: 1.5rem;
        align-items: center;
        margin-top: 2rem;
    }

    .hero-cta,
    .closing-cta {
        background: var(--accent);
        color: white;
        padding: 0.9rem 1.8rem;
        border-radius: 999px;
        text-decoration: none;
        font-weight: 700;
    }

    .hero-link {
        color: var(--accent);
        text-decoration: none;
        font-weight: 600;
    }

    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
        transition-delay: var(--reveal-delay, 0ms);
    }

    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    .team-section,
    .closing-section,
    .contact-section {
        padding: 5rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }

    .team-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
    }

    .team-photo,
    .image-placeholder {
        width: 100%;
        aspect-ratio: 1;
        object-fit: cover;
        border-radius: 20px;
    }

    .image-placeholder {
        display: flex;
        align-items: center;
        justify-content: center;
        background: #e4e7eb;
        color: #7b8794;
        font-size: 2.5rem;
        font-weight: 700;
    }

    .team-role { font-weight: 700; margin: 0.25rem 0; }
    .team-registry { color: #7b8794; font-size: 0.85rem; margin: 0; }

    .closing-section {
        text-align: center;
    }

    .site-footer {
        background: #1f2933;
        color: #e4e7eb;
        padding: 3rem 2rem 1.5rem;
    }

    .site-footer a { color: #e4e7eb; }

    .footer-columns {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }

    .footer-hours,
    .footer-links {
        list-style: none;
        padding: 0;
    }

    .opening-badge {
        display: inline-block;
        padding: 0.3rem 0.8rem;
        border-radius: 999px;
        font-size: 0.85rem;
    }

    .opening-badge.open { background: #2a9d8f; }
    .opening-badge.closed { background: #7b8794; }

    .footer-legal {
        text-align: center;
        color: #9aa5b1;
        font-size: 0.8rem;
        margin-top: 2rem;
    }

    @media (max-width: 768px) {
        .hero h1 { font-size: 2.2rem; }
        .hero-cta-group { flex-direction: column; align-items: flex-start; }
    }
"#;

/// Once per mount, scrolls to the section named by the location hash, or to
/// the top when there is none.
#[hook]
pub fn use_initial_scroll() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                let section = anchor_id(&hash).and_then(|id| {
                    window.document().and_then(|d| d.get_element_by_id(id))
                });
                match section {
                    Some(section) => section.scroll_into_view(),
                    None => window.scroll_to_with_x_and_y(0.0, 0.0),
                }
            }
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct ProgramPageProps {
    pub page: &'static PageContent,
}

#[function_component(ProgramPage)]
pub fn program_page(props: &ProgramPageProps) -> Html {
    let page = props.page;
    use_initial_scroll();
    use_scroll_reveal();

    let booking = config::whatsapp_link(Some(format!("Olá! Gostaria de agendar: {}", page.nav_label).as_str()));

    html! {
        <div class={classes!("program-page", page.slug)} style={format!("--accent: {};", page.accent)}>
            <Hero page={page} />
            <PanelSection page={page} />
            <TeamSection heading={page.team_heading} members={page.team} />
            <section class="closing-section" id="contato">
                <h2 class="reveal">{page.closing_title}</h2>
                <p class="reveal">{page.closing_text}</p>
                <a class="closing-cta reveal" href={booking} target="_blank" rel="noopener noreferrer">
                    {"Agendar pelo WhatsApp"}
                </a>
            </section>
            <Footer />
            <style>{PAGE_CSS}</style>
        </div>
    }
}
