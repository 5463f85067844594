//! Document-level dismissal (Escape and outside clicks) and the body lock.
//!
//! Both are only held while something is open: [`use_global_dismissal`]
//! installs the listeners inside an effect and drops them in its destructor.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

pub const PANEL_OPEN_CLASS: &str = "panel-open";
pub const MENU_OPEN_CLASS: &str = "menu-open";

pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// A click counts as outside unless the container is known to contain its
/// target. `None` means the container is unmounted or the target is not a node.
pub fn is_outside(contains: Option<bool>) -> bool {
    contains != Some(true)
}

/// What a document listener saw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DocumentEvent<'a> {
    Key(&'a str),
    Click { contains: Option<bool> },
}

pub fn dismisses(event: DocumentEvent) -> bool {
    match event {
        DocumentEvent::Key(key) => is_dismiss_key(key),
        DocumentEvent::Click { contains } => is_outside(contains),
    }
}

pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        if self.class_list().add_1(class).is_err() {
            warn!("Failed to add class {}", class);
        }
    }

    fn remove_class(&self, class: &str) {
        if self.class_list().remove_1(class).is_err() {
            warn!("Failed to remove class {}", class);
        }
    }
}

/// Holds `class` on the target until dropped. CSS keys the background dim and
/// the scroll lock off these classes.
pub struct BodyLock<T: ClassTarget = Element> {
    target: T,
    class: &'static str,
}

impl<T: ClassTarget> BodyLock<T> {
    pub fn acquire(target: T, class: &'static str) -> Self {
        target.add_class(class);
        Self { target, class }
    }
}

impl<T: ClassTarget> Drop for BodyLock<T> {
    fn drop(&mut self) {
        self.target.remove_class(self.class);
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn lock_body(class: &'static str) -> Option<BodyLock> {
    let body = document()?.body()?;
    Some(BodyLock::acquire(Element::from(body), class))
}

/// Listeners registered on the document. Removed on drop.
struct DismissListeners {
    document: Document,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
    _lock: Option<BodyLock>,
}

impl DismissListeners {
    fn install(container: NodeRef, lock_class: &'static str, on_dismiss: Callback<()>) -> Option<Self> {
        let document = document()?;

        let keydown = {
            let on_dismiss = on_dismiss.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if dismisses(DocumentEvent::Key(&e.key())) {
                    on_dismiss.emit(());
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        let click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let contains = match (container.get(), target) {
                (Some(container), Some(target)) => Some(container.contains(Some(&target))),
                _ => None,
            };
            if dismisses(DocumentEvent::Click { contains }) {
                on_dismiss.emit(());
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if document
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .is_err()
            || document
                .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                .is_err()
        {
            warn!("Failed to install dismissal listeners");
        }

        debug!("Dismissal listeners installed ({})", lock_class);
        Some(Self {
            document,
            keydown,
            click,
            _lock: lock_body(lock_class),
        })
    }
}

impl Drop for DismissListeners {
    fn drop(&mut self) {
        if self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
            .is_err()
            || self
                .document
                .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref())
                .is_err()
        {
            warn!("Failed to remove dismissal listeners");
        }
    }
}

/// While `active`, Escape or a click outside `container` emits `on_dismiss`
/// and `lock_class` is held on `<body>`.
///
/// Triggers that open something must stop propagation of their click, or the
/// same click reaches the freshly installed document listener.
#[hook]
pub fn use_global_dismissal(
    active: bool,
    container: NodeRef,
    lock_class: &'static str,
    on_dismiss: Callback<()>,
) {
    use_effect_with_deps(
        move |active| {
            let listeners = if *active {
                DismissListeners::install(container, lock_class, on_dismiss)
            } else {
                None
            };
            move || drop(listeners)
        },
        active,
    );
}

/// In-memory stand-in for `<body>`.
#[cfg(test)]
pub(crate) mod test_support {
    use super::ClassTarget;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct FakeBody(pub Rc<RefCell<Vec<String>>>);

    impl FakeBody {
        pub fn has(&self, class: &str) -> bool {
            self.0.borrow().iter().any(|c| c == class)
        }
    }

    impl ClassTarget for FakeBody {
        fn add_class(&self, class: &str) {
            if !self.has(class) {
                self.0.borrow_mut().push(class.to_string());
            }
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().retain(|c| c != class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeBody;
    use super::*;
    use crate::content::{clinic, RepeatPolicy};
    use crate::disclosure::Disclosure;

    // Same decision the document listeners make, applied to the selector.
    fn after(state: Disclosure, event: DocumentEvent) -> Disclosure {
        if dismisses(event) {
            state.close()
        } else {
            state
        }
    }

    fn open(id: &str) -> Disclosure {
        Disclosure::Closed.activate(clinic::PAGE.panels, id, RepeatPolicy::Navigate).0
    }

    #[test]
    fn escape_keys_dismiss() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("escape"));
    }

    #[test]
    fn click_inside_panel_keeps_it_open() {
        assert!(!is_outside(Some(true)));
        assert_eq!(after(open("fono"), DocumentEvent::Click { contains: Some(true) }), open("fono"));
    }

    #[test]
    fn click_outside_panel_closes_it() {
        assert!(is_outside(Some(false)));
        assert_eq!(
            after(open("fono"), DocumentEvent::Click { contains: Some(false) }),
            Disclosure::Closed
        );
    }

    #[test]
    fn click_with_unmounted_container_or_non_node_target_closes() {
        assert!(is_outside(None));
        assert_eq!(after(open("nutrir"), DocumentEvent::Click { contains: None }), Disclosure::Closed);
    }

    #[test]
    fn escape_closes_every_open_panel_and_other_keys_do_not() {
        for panel in clinic::PAGE.panels {
            assert_eq!(after(open(panel.id), DocumentEvent::Key("Escape")), Disclosure::Closed);
            assert_eq!(after(open(panel.id), DocumentEvent::Key("Tab")), open(panel.id));
        }
    }

    #[test]
    fn dismissal_of_a_closed_selector_stays_closed() {
        assert_eq!(after(Disclosure::Closed, DocumentEvent::Key("Esc")), Disclosure::Closed);
        assert_eq!(after(Disclosure::Closed, DocumentEvent::Click { contains: None }), Disclosure::Closed);
    }

    #[test]
    fn lock_holds_class_until_dropped() {
        let body = FakeBody::default();
        let lock = BodyLock::acquire(body.clone(), PANEL_OPEN_CLASS);
        assert!(body.has(PANEL_OPEN_CLASS));
        drop(lock);
        assert!(!body.has(PANEL_OPEN_CLASS));
    }

    #[test]
    fn panel_and_menu_locks_are_independent() {
        let body = FakeBody::default();
        let panel = BodyLock::acquire(body.clone(), PANEL_OPEN_CLASS);
        let menu = BodyLock::acquire(body.clone(), MENU_OPEN_CLASS);
        drop(menu);
        assert!(body.has(PANEL_OPEN_CLASS));
        assert!(!body.has(MENU_OPEN_CLASS));
        drop(panel);
        assert!(body.0.borrow().is_empty());
    }

    // Mirrors the effect lifecycle: lock taken while open, released on close.
    #[test]
    fn opening_terapias_locks_scroll_and_closing_restores_it() {
        let body = FakeBody::default();

        let state = open("terapias");
        let lock = state.is_open().then(|| BodyLock::acquire(body.clone(), PANEL_OPEN_CLASS));
        assert!(body.has(PANEL_OPEN_CLASS));

        let state = after(state, DocumentEvent::Click { contains: Some(false) });
        assert!(!state.is_open());
        drop(lock);
        assert!(!body.has(PANEL_OPEN_CLASS));
    }
}
