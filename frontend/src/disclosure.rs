//! Single-selection disclosure controller shared by every page.
//!
//! A page holds one [`Disclosure`] for as long as it is mounted. Triggers call
//! [`Disclosure::activate`], dismissal calls [`Disclosure::close`], and the
//! renderer reads [`Disclosure::current`].

use log::{debug, warn};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::content::{lookup, PageContent, PanelDescriptor, RepeatPolicy};
use crate::navigation::{self, NavTarget};
use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open(&'static str),
}

/// What an activation did, so the caller can run the side effect.
#[derive(Debug, PartialEq)]
pub enum Transition {
    Opened(&'static str),
    Closed,
    /// Repeat activation on a `Navigate` page. The state is left untouched.
    Navigate(&'static NavTarget),
    /// The id is not in the page's table.
    Ignored,
}

impl Disclosure {
    pub fn activate(
        self,
        panels: &'static [PanelDescriptor],
        id: &str,
        policy: RepeatPolicy,
    ) -> (Disclosure, Transition) {
        let panel = match lookup(panels, id) {
            Some(panel) => panel,
            None => return (self, Transition::Ignored),
        };
        match self {
            Disclosure::Open(current) if current == panel.id => match policy {
                RepeatPolicy::Navigate => (self, Transition::Navigate(&panel.target)),
                RepeatPolicy::Toggle => (Disclosure::Closed, Transition::Closed),
            },
            _ => (Disclosure::Open(panel.id), Transition::Opened(panel.id)),
        }
    }

    pub fn close(self) -> Disclosure {
        Disclosure::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Disclosure::Open(_))
    }

    pub fn current(self, panels: &'static [PanelDescriptor]) -> Option<&'static PanelDescriptor> {
        match self {
            Disclosure::Closed => None,
            Disclosure::Open(id) => lookup(panels, id),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DisclosureHandle {
    pub state: Disclosure,
    pub current: Option<&'static PanelDescriptor>,
    pub open: Callback<&'static str>,
    pub close: Callback<()>,
    /// Follows the open panel's target (the panel CTA).
    pub proceed: Callback<()>,
}

fn leave(target: &NavTarget, on_page_change: Option<&Callback<Route>>, navigator: Option<&Navigator>) {
    match (target, on_page_change) {
        (NavTarget::Route(route), Some(on_page_change)) => on_page_change.emit(route.clone()),
        _ => navigation::follow(target, navigator),
    }
}

/// Disclosure state for `page`, reset to closed on mount.
///
/// Route targets go through `on_page_change` when the page provides one,
/// everything else through the router or a full-page navigation.
#[hook]
pub fn use_disclosure(
    page: &'static PageContent,
    on_page_change: Option<Callback<Route>>,
) -> DisclosureHandle {
    let state = use_state(Disclosure::default);
    let navigator = use_navigator();

    let open = {
        let state = state.clone();
        let navigator = navigator.clone();
        let on_page_change = on_page_change.clone();
        Callback::from(move |id: &'static str| {
            let (next, transition) = (*state).activate(page.panels, id, page.repeat);
            match transition {
                Transition::Opened(id) => debug!("[{}] opened panel {}", page.slug, id),
                Transition::Closed => debug!("[{}] closed panel {}", page.slug, id),
                Transition::Navigate(target) => {
                    debug!("[{}] repeat activation on {}", page.slug, id);
                    leave(target, on_page_change.as_ref(), navigator.as_ref());
                }
                Transition::Ignored => warn!("[{}] no panel with id {}", page.slug, id),
            }
            if next != *state {
                state.set(next);
            }
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.is_open() {
                debug!("[{}] dismissed", page.slug);
                state.set(state.close());
            }
        })
    };

    let proceed = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Some(panel) = state.current(page.panels) {
                leave(&panel.target, on_page_change.as_ref(), navigator.as_ref());
            }
        })
    };

    DisclosureHandle {
        state: *state,
        current: state.current(page.panels),
        open,
        close,
        proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{all_pages, clinic, psychology};

    #[test]
    fn starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(Disclosure::default().current(clinic::PAGE.panels).is_none());
    }

    #[test]
    fn open_then_close_returns_to_closed_for_every_panel() {
        for page in all_pages() {
            for panel in page.panels {
                let (opened, transition) = Disclosure::Closed.activate(page.panels, panel.id, page.repeat);
                assert_eq!(transition, Transition::Opened(panel.id));
                assert_eq!(opened.current(page.panels).map(|p| p.id), Some(panel.id));
                let closed = opened.close();
                assert_eq!(closed, Disclosure::Closed);
                assert!(closed.current(page.panels).is_none());
            }
        }
    }

    #[test]
    fn repeat_activation_navigates_without_state_change() {
        let page = &clinic::PAGE;
        for panel in page.panels {
            let (opened, _) = Disclosure::Closed.activate(page.panels, panel.id, RepeatPolicy::Navigate);
            let (again, transition) = opened.activate(page.panels, panel.id, RepeatPolicy::Navigate);
            assert_eq!(again, opened);
            assert_eq!(transition, Transition::Navigate(&panel.target));
        }
    }

    #[test]
    fn repeat_activation_toggles_closed_on_toggle_pages() {
        let page = &psychology::PAGE;
        assert_eq!(page.repeat, RepeatPolicy::Toggle);
        let (opened, _) = Disclosure::Closed.activate(page.panels, "adulto", page.repeat);
        let (again, transition) = opened.activate(page.panels, "adulto", page.repeat);
        assert_eq!(again, Disclosure::Closed);
        assert_eq!(transition, Transition::Closed);
    }

    #[test]
    fn switching_panels_keeps_only_the_latest() {
        let panels = clinic::PAGE.panels;
        let (first, _) = Disclosure::Closed.activate(panels, "terapias", RepeatPolicy::Navigate);
        let (second, transition) = first.activate(panels, "fono", RepeatPolicy::Navigate);
        assert_eq!(second, Disclosure::Open("fono"));
        assert_eq!(transition, Transition::Opened("fono"));
        assert_ne!(second, Disclosure::Open("terapias"));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let panels = clinic::PAGE.panels;
        let (state, transition) = Disclosure::Closed.activate(panels, "cardiologia", RepeatPolicy::Navigate);
        assert_eq!(state, Disclosure::Closed);
        assert_eq!(transition, Transition::Ignored);

        let (open, _) = state.activate(panels, "fono", RepeatPolicy::Navigate);
        let (still, transition) = open.activate(panels, "cardiologia", RepeatPolicy::Navigate);
        assert_eq!(still, Disclosure::Open("fono"));
        assert_eq!(transition, Transition::Ignored);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(Disclosure::Closed.close(), Disclosure::Closed);
        assert_eq!(Disclosure::Closed.close().close(), Disclosure::Closed);
    }

    #[test]
    fn clinic_targets_are_in_app_routes() {
        let (opened, _) = Disclosure::Closed.activate(clinic::PAGE.panels, "terapias", RepeatPolicy::Navigate);
        let (_, transition) = opened.activate(clinic::PAGE.panels, "terapias", RepeatPolicy::Navigate);
        match transition {
            Transition::Navigate(target) => assert_eq!(*target, NavTarget::Route(Route::Occupational)),
            other => panic!("expected navigation, got {:?}", other),
        }
    }
}
