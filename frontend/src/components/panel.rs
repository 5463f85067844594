use yew::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::content::{PageContent, PanelDescriptor, RepeatPolicy};
use crate::disclosure::use_disclosure;
use crate::dismissal::{use_global_dismissal, PANEL_OPEN_CLASS};
use crate::pointer::PointerPosition;
use crate::reveal::stagger_style;
use crate::Route;

const PANEL_CSS: &str = r#"
    .panel-section {
        padding: 5rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
        text-align: center;
    }

    .panel-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
        margin-top: 2.5rem;
    }

    .panel-card {
        background: white;
        border: 2px solid transparent;
        border-radius: 24px;
        padding: 2rem 1.5rem;
        text-align: left;
        cursor: pointer;
        box-shadow: 0 10px 30px rgba(31, 41, 51, 0.08);
        font: inherit;
        transition: transform 0.25s ease, border-color 0.25s ease, opacity 0.6s ease;
    }

    .panel-card:hover {
        transform: translateY(-4px);
    }

    .panel-card.active {
        border-color: var(--accent);
    }

    .panel-icon {
        font-size: 2rem;
    }

    .panel-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(15, 23, 30, 0.55);
        z-index: 1000;
        animation: overlayIn 0.25s ease-out;
    }

    /* Cards stay above the backdrop so the open one can be tapped again. */
    .panel-section.has-open-panel .panel-grid {
        position: relative;
        z-index: 1001;
    }

    .panel-detail {
        grid-column: 1 / -1;
        position: relative;
        background: white;
        border-radius: 28px;
        max-height: 60vh;
        overflow-y: auto;
        padding: 2.5rem;
        text-align: left;
        animation: modalIn 0.3s cubic-bezier(0.2, 0.8, 0.2, 1);
    }

    .panel-detail.tracking {
        background:
            radial-gradient(circle at var(--glow-x) var(--glow-y), rgba(42, 157, 143, 0.12), transparent 45%),
            white;
    }

    @keyframes overlayIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    @keyframes modalIn {
        from { opacity: 0; transform: scale(0.94); }
        to { opacity: 1; transform: scale(1); }
    }

    .panel-close {
        position: absolute;
        top: 1rem;
        right: 1.25rem;
        border: none;
        background: none;
        font-size: 2rem;
        cursor: pointer;
    }

    .panel-header {
        display: flex;
        gap: 1rem;
        align-items: center;
    }

    .panel-subtitle { color: #7b8794; margin: 0.25rem 0 0; }

    .panel-features {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }

    .panel-feature {
        display: flex;
        flex-direction: column;
        padding: 0.75rem 1rem;
        border-left: 4px solid;
        border-radius: 8px;
        background: #f5f7fa;
    }

    .tone-teal { border-color: #2a9d8f; }
    .tone-coral { border-color: #e76f51; }
    .tone-sun { border-color: #e9c46a; }
    .tone-lilac { border-color: #9d8ac7; }
    .tone-sky { border-color: #4ea8de; }

    .panel-stats {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
        gap: 1rem;
        margin: 1.5rem 0;
    }

    .panel-stat {
        display: flex;
        flex-direction: column;
    }

    .stat-value {
        font-size: 1.8rem;
        font-weight: 800;
        color: var(--accent);
    }

    .stat-label { color: #52606d; font-size: 0.9rem; }

    .panel-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
        flex-wrap: wrap;
        margin-top: 1.5rem;
    }

    .panel-cta {
        background: var(--accent);
        color: white;
        border: none;
        border-radius: 999px;
        padding: 0.8rem 1.6rem;
        font-weight: 700;
        cursor: pointer;
    }

    .panel-hint { color: #9aa5b1; font-size: 0.85rem; }
"#;

#[derive(Properties, PartialEq)]
pub struct PanelCardProps {
    pub panel: &'static PanelDescriptor,
    pub index: usize,
    pub active: bool,
    pub on_activate: Callback<&'static str>,
}

#[function_component(PanelCard)]
pub fn panel_card(props: &PanelCardProps) -> Html {
    let onclick = {
        let on_activate = props.on_activate.clone();
        let id = props.panel.id;
        Callback::from(move |e: MouseEvent| {
            // Keep the click away from the document dismissal listener.
            e.stop_propagation();
            on_activate.emit(id);
        })
    };

    html! {
        <button
            class={classes!("panel-card", "reveal", props.active.then(|| "active"))}
            style={stagger_style(props.index)}
            aria-expanded={props.active.to_string()}
            onclick={onclick}
        >
            <span class="panel-icon">{props.panel.icon}</span>
            <h3>{props.panel.title}</h3>
            <p class="panel-card-subtitle">{props.panel.subtitle}</p>
        </button>
    }
}

/// One cell of the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridSlot {
    Card(usize),
    Detail(usize),
}

/// Every card in table order, with the open panel's detail directly after
/// its own card.
pub fn grid_slots(panels: &[PanelDescriptor], open: Option<&str>) -> Vec<GridSlot> {
    let mut slots = Vec::with_capacity(panels.len() + 1);
    for (index, panel) in panels.iter().enumerate() {
        slots.push(GridSlot::Card(index));
        if open == Some(panel.id) {
            slots.push(GridSlot::Detail(index));
        }
    }
    slots
}

#[derive(Properties, PartialEq)]
pub struct PanelDetailProps {
    pub panel: &'static PanelDescriptor,
    pub repeat: RepeatPolicy,
    pub on_close: Callback<()>,
    pub on_proceed: Callback<()>,
}

/// Expanded view of the open panel. Mounted only while a panel is open, so
/// the dismissal listeners and the body lock live exactly as long as it does.
#[function_component(PanelDetail)]
pub fn panel_detail(props: &PanelDetailProps) -> Html {
    let content_ref = use_node_ref();
    let pointer = use_state(|| None::<PointerPosition>);

    use_global_dismissal(true, content_ref.clone(), PANEL_OPEN_CLASS, props.on_close.clone());

    // Bring the detail on screen when it opens below the fold.
    {
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |_| {
                let viewport_height = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64());
                if let (Some(element), Some(viewport_height)) = (content_ref.cast::<Element>(), viewport_height) {
                    if element.get_bounding_client_rect().bottom() > viewport_height {
                        element.scroll_into_view_with_bool(false);
                    }
                }
                || ()
            },
            (),
        );
    }

    let onmousemove = {
        let pointer = pointer.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // Events are delegated to <body>, so measure the panel itself.
            if let Some(element) = content_ref.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                pointer.set(Some(PointerPosition::within(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                )));
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let proceed = {
        let on_proceed = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| on_proceed.emit(()))
    };

    let panel = props.panel;
    let glow = pointer.map(|p| p.glow_style()).unwrap_or_default();
    let hint = match props.repeat {
        RepeatPolicy::Navigate => "Toque no cartão de novo para continuar",
        RepeatPolicy::Toggle => "Toque no cartão de novo para fechar",
    };

    html! {
        <div
            class={classes!("panel-detail", pointer.is_some().then(|| "tracking"))}
            ref={content_ref}
            style={glow}
            role="region"
            aria-labelledby={format!("panel-{}-title", panel.id)}
            onmousemove={onmousemove}
        >
            <button class="panel-close" aria-label="Fechar" onclick={close}>{"×"}</button>
            <div class="panel-header">
                <span class="panel-icon">{panel.icon}</span>
                <div>
                    <h2 id={format!("panel-{}-title", panel.id)}>{panel.title}</h2>
                    <p class="panel-subtitle">{panel.subtitle}</p>
                </div>
            </div>
            <p class="panel-body">{panel.body}</p>
            <ul class="panel-features">
                { for panel.features.iter().map(|feature| html! {
                    <li key={feature.id} class={classes!("panel-feature", feature.tone.class())}>
                        <strong>{feature.title}</strong>
                        <span>{feature.description}</span>
                    </li>
                }) }
            </ul>
            {
                if panel.stats.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="panel-stats">
                            { for panel.stats.iter().map(|stat| html! {
                                <div class="panel-stat">
                                    <span class="stat-value">{stat.value}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }) }
                        </div>
                    }
                }
            }
            <div class="panel-actions">
                <button class="panel-cta" onclick={proceed}>{panel.cta}</button>
                <span class="panel-hint">{hint}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelSectionProps {
    pub page: &'static PageContent,
    #[prop_or_default]
    pub on_page_change: Option<Callback<Route>>,
}

/// Card grid for one page's panel table, with the open panel expanded inline.
#[function_component(PanelSection)]
pub fn panel_section(props: &PanelSectionProps) -> Html {
    let page = props.page;
    let disclosure = use_disclosure(page, props.on_page_change.clone());
    let open = disclosure.current.map(|panel| panel.id);

    html! {
        <section class={classes!("panel-section", disclosure.state.is_open().then(|| "has-open-panel"))} id="servicos">
            <h2 class="reveal">{page.panels_heading}</h2>
            <p class="section-intro reveal">{page.panels_intro}</p>
            {
                if open.is_some() {
                    html! { <div class="panel-backdrop"></div> }
                } else {
                    html! {}
                }
            }
            <div class="panel-grid">
                { for grid_slots(page.panels, open).into_iter().map(|slot| match slot {
                    GridSlot::Card(index) => {
                        let panel = &page.panels[index];
                        html! {
                            <PanelCard
                                key={panel.id}
                                panel={panel}
                                index={index}
                                active={open == Some(panel.id)}
                                on_activate={disclosure.open.clone()}
                            />
                        }
                    }
                    GridSlot::Detail(index) => {
                        let panel = &page.panels[index];
                        html! {
                            <PanelDetail
                                key={format!("{}-detail", panel.id)}
                                panel={panel}
                                repeat={page.repeat}
                                on_close={disclosure.close.clone()}
                                on_proceed={disclosure.proceed.clone()}
                            />
                        }
                    }
                }) }
            </div>
            <style>{PANEL_CSS}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{all_pages, clinic};
    use crate::disclosure::{Disclosure, Transition};

    fn cards(slots: &[GridSlot]) -> usize {
        slots.iter().filter(|slot| matches!(slot, GridSlot::Card(_))).count()
    }

    #[test]
    fn closed_grid_is_cards_only() {
        let panels = clinic::PAGE.panels;
        let slots = grid_slots(panels, None);
        assert_eq!(slots.len(), panels.len());
        assert_eq!(cards(&slots), panels.len());
    }

    #[test]
    fn open_detail_follows_its_card_and_keeps_every_card() {
        let panels = clinic::PAGE.panels;
        let slots = grid_slots(panels, Some("psicologia"));
        let card = panels.iter().position(|p| p.id == "psicologia").unwrap();

        assert_eq!(cards(&slots), panels.len());
        assert_eq!(slots[card], GridSlot::Card(card));
        assert_eq!(slots[card + 1], GridSlot::Detail(card));
        assert_eq!(slots.iter().filter(|slot| matches!(slot, GridSlot::Detail(_))).count(), 1);
    }

    #[test]
    fn unknown_open_id_renders_no_detail() {
        let panels = clinic::PAGE.panels;
        assert_eq!(grid_slots(panels, Some("pediatria")), grid_slots(panels, None));
    }

    // Tapping the open card again goes through the grid, not a backdrop.
    #[test]
    fn open_card_can_be_tapped_again_on_every_page() {
        for page in all_pages() {
            let first = page.panels[0].id;
            let (state, _) = Disclosure::Closed.activate(page.panels, first, page.repeat);
            let open = state.current(page.panels).map(|panel| panel.id);

            let tapped = grid_slots(page.panels, open)
                .into_iter()
                .find_map(|slot| match slot {
                    GridSlot::Card(index) if page.panels[index].id == first => Some(page.panels[index].id),
                    _ => None,
                })
                .unwrap();

            let (next, transition) = state.activate(page.panels, tapped, page.repeat);
            match page.repeat {
                RepeatPolicy::Navigate => {
                    assert_eq!(next, state, "{}", page.slug);
                    assert!(matches!(transition, Transition::Navigate(_)), "{}", page.slug);
                }
                RepeatPolicy::Toggle => {
                    assert_eq!(next, Disclosure::Closed, "{}", page.slug);
                    assert_eq!(transition, Transition::Closed, "{}", page.slug);
                }
            }
        }
    }

    #[test]
    fn backdrop_sits_below_the_card_grid() {
        assert!(PANEL_CSS.contains(".panel-section.has-open-panel .panel-grid"));
        assert!(!PANEL_CSS.contains("panel-overlay"));
    }
}
