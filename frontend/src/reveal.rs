use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use crate::dismissal::ClassTarget;

/// Fraction of the viewport an element's top must cross before it is shown.
pub const REVEAL_RATIO: f64 = 0.88;
const STAGGER_MS: u32 = 90;
const MAX_STAGGER_MS: u32 = 540;

pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_RATIO
}

/// Entrance delay for the `index`-th item of a group.
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS).min(MAX_STAGGER_MS)
}

pub fn stagger_style(index: usize) -> String {
    format!("--reveal-delay: {}ms;", stagger_delay(index))
}

/// Adds `visible` to `target` once its top crosses the threshold.
pub fn reveal_if_in_view<T: ClassTarget>(target: &T, top: f64, viewport_height: f64) -> bool {
    let revealed = is_revealed(top, viewport_height);
    if revealed {
        target.add_class("visible");
    }
    revealed
}

fn reveal_pending() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let pending = match window
        .document()
        .and_then(|d| d.query_selector_all(".reveal:not(.visible)").ok())
    {
        Some(list) => list,
        None => return,
    };
    for i in 0..pending.length() {
        if let Some(element) = pending.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            reveal_if_in_view(&element, element.get_bounding_client_rect().top(), viewport_height);
        }
    }
}

/// Adds `visible` to every `.reveal` element once it scrolls into view.
/// Elements stay visible for the rest of the mount.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(reveal_pending) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }
            // Initial check for whatever is already on screen
            reveal_pending();

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dismissal::test_support::FakeBody;

    #[test]
    fn reveals_below_threshold_only() {
        assert!(is_revealed(100.0, 1000.0));
        assert!(is_revealed(879.0, 1000.0));
        assert!(!is_revealed(880.0, 1000.0));
        assert!(!is_revealed(1500.0, 1000.0));
    }

    #[test]
    fn elements_above_viewport_count_as_revealed() {
        assert!(is_revealed(-400.0, 800.0));
    }

    #[test]
    fn stagger_grows_then_caps() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 90);
        assert_eq!(stagger_delay(4), 360);
        assert_eq!(stagger_delay(6), 540);
        assert_eq!(stagger_delay(50), 540);
        assert_eq!(stagger_style(2), "--reveal-delay: 180ms;");
    }

    #[test]
    fn only_elements_in_view_get_visible_class() {
        let shown = FakeBody::default();
        let below = FakeBody::default();
        assert!(reveal_if_in_view(&shown, 300.0, 900.0));
        assert!(!reveal_if_in_view(&below, 850.0, 900.0));
        assert!(shown.has("visible"));
        assert!(below.0.borrow().is_empty());
    }
}
