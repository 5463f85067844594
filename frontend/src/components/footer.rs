use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::content::all_pages;
use crate::hours::{self, WEEK};
use crate::Route;

#[function_component(OpeningBadge)]
pub fn opening_badge() -> Html {
    let now = hours::now_local();
    let status = hours::status_at(WEEK, now);
    let open = hours::is_open_at(WEEK, now);
    html! {
        <span class={classes!("opening-badge", if open { "open" } else { "closed" })}>
            {hours::status_label(status)}
        </span>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h3>{config::BRAND}</h3>
                    <p>{config::ADDRESS}</p>
                    <p><a href={config::PHONE_LINK}>{config::PHONE}</a></p>
                    <p><a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></p>
                    <p>
                        <a href={config::whatsapp_link(None)} target="_blank" rel="noopener noreferrer">
                            {"WhatsApp"}
                        </a>
                    </p>
                </div>
                <div class="footer-column">
                    <h3>{"Horários"}</h3>
                    <OpeningBadge />
                    <ul class="footer-hours">
                        { for hours::schedule_lines(WEEK).into_iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>{"Programas"}</h3>
                    <ul class="footer-links">
                        { for all_pages().into_iter().map(|page| html! {
                            <li key={page.slug}>
                                <Link<Route> to={page.route.clone()}>{page.nav_label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <p class="footer-legal">
                {format!("© {} · Responsável técnica: Dra. Helena Prado, CRP 06/84512", config::BRAND)}
            </p>
        </footer>
    }
}
