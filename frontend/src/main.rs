use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod disclosure;
mod dismissal;
mod hours;
mod navigation;
mod pointer;
mod reveal;
mod components {
    pub mod contact_form;
    pub mod fallback_image;
    pub mod footer;
    pub mod hero;
    pub mod panel;
    pub mod team;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod program;
}

use content::{all_pages, institute, nutrir, occupational, psychology, psychopedagogy, speech, PageContent};
use dismissal::{use_global_dismissal, MENU_OPEN_CLASS};
use navigation::{legacy_target, redirect};
use pages::{
    home::Home,
    not_found::NotFound,
    program::ProgramPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/fonoaudiologia")]
    Speech,
    #[at("/psicologia")]
    Psychology,
    #[at("/terapia-ocupacional")]
    Occupational,
    #[at("/psicopedagogia")]
    Psychopedagogy,
    #[at("/programa-nutrir")]
    Nutrir,
    #[at("/instituto-incluir")]
    Institute,
    // Old static-site filenames, e.g. /psicologia.html
    #[at("/:file")]
    Legacy { file: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn render_program(page: &'static PageContent) -> Html {
    info!("Rendering {} page", page.slug);
    // Keyed so moving between programs remounts and resets the open panel.
    html! { <ProgramPage key={page.slug} page={page} /> }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Speech => render_program(&speech::PAGE),
        Route::Psychology => render_program(&psychology::PAGE),
        Route::Occupational => render_program(&occupational::PAGE),
        Route::Psychopedagogy => render_program(&psychopedagogy::PAGE),
        Route::Nutrir => render_program(&nutrir::PAGE),
        Route::Institute => render_program(&institute::PAGE),
        Route::Legacy { file } => html! { <LegacyRedirect file={file} /> },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
struct LegacyRedirectProps {
    file: String,
}

/// Sends an old `.html` link to its page, keeping any `#section` it named.
#[function_component(LegacyRedirect)]
fn legacy_redirect(props: &LegacyRedirectProps) -> Html {
    let navigator = use_navigator();
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let target = legacy_target(&props.file, &hash);

    {
        let target = target.clone();
        let file = props.file.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(target) = target {
                    info!("Redirecting legacy file {} to {:?}", file, target);
                    redirect(&target, navigator.as_ref());
                }
                || ()
            },
            props.file.clone(),
        );
    }

    if target.is_some() {
        html! {}
    } else {
        info!("Unknown path /{}", props.file);
        html! { <NotFound /> }
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 74px;
        z-index: 900;
        background: rgba(251, 250, 247, 0.6);
        backdrop-filter: blur(8px);
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }

    .top-nav.scrolled {
        background: rgba(251, 250, 247, 0.97);
        box-shadow: 0 4px 20px rgba(31, 41, 51, 0.08);
    }

    .nav-content {
        max-width: 1200px;
        height: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo {
        font-weight: 800;
        font-size: 1.3rem;
        color: #2a9d8f;
        text-decoration: none;
    }

    .nav-right {
        display: flex;
        gap: 1.25rem;
        align-items: center;
    }

    .nav-link {
        color: #1f2933;
        text-decoration: none;
        font-weight: 600;
        font-size: 0.95rem;
    }

    .nav-link.active {
        color: #2a9d8f;
    }

    .nav-phone {
        background: #2a9d8f;
        color: white;
        padding: 0.5rem 1rem;
        border-radius: 999px;
        text-decoration: none;
        font-weight: 700;
    }

    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }

    .burger-menu span {
        width: 24px;
        height: 3px;
        background: #1f2933;
        border-radius: 2px;
    }

    @media (max-width: 960px) {
        .burger-menu {
            display: flex;
        }

        .nav-right {
            position: fixed;
            top: 74px;
            right: 0;
            bottom: 0;
            width: 75%;
            max-width: 320px;
            flex-direction: column;
            align-items: flex-start;
            padding: 2rem 1.5rem;
            background: #fbfaf7;
            transform: translateX(100%);
            transition: transform 0.3s ease;
        }

        .nav-right.mobile-menu-open {
            transform: translateX(0);
            box-shadow: -10px 0 30px rgba(31, 41, 51, 0.15);
        }
    }
"#;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let drawer_ref = use_node_ref();
    let current_route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let dismiss_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    use_global_dismissal(*menu_open, drawer_ref.clone(), MENU_OPEN_CLASS, dismiss_menu);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BRAND}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} ref={drawer_ref}>
                    { for all_pages().into_iter().skip(1).map(|page| {
                        let active = current_route.as_ref() == Some(&page.route);
                        html! {
                            <div key={page.slug} onclick={close_menu.clone()}>
                                <Link<Route> to={page.route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    {page.nav_label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <a class="nav-phone" href={config::PHONE_LINK}>{config::PHONE}</a>
                </div>
            </div>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
