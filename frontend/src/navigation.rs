use log::{debug, warn};
use yew_router::prelude::Navigator;
use crate::config;
use crate::Route;

/// Where a panel's call-to-action leads.
#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    /// In-app navigation through the router.
    Route(Route),
    /// Full-page navigation: relative path, bare `.html` file or external URL.
    Href(&'static str),
}

/// Old static filenames still linked from print material and search engines.
const LEGACY_FILES: &[(&str, Route)] = &[
    ("index.html", Route::Home),
    ("fonoaudiologia.html", Route::Speech),
    ("psicologia.html", Route::Psychology),
    ("terapia-ocupacional.html", Route::Occupational),
    ("psicopedagogia.html", Route::Psychopedagogy),
    ("nutrir.html", Route::Nutrir),
    ("instituto.html", Route::Institute),
];

/// Element id named by a location hash, if any.
pub fn anchor_id(hash: &str) -> Option<&str> {
    Some(hash.trim_start_matches('#')).filter(|id| !id.is_empty())
}

/// Splits `file#anchor` into the file and the anchor id.
pub fn split_anchor(href: &str) -> (&str, Option<&str>) {
    match href.split_once('#') {
        Some((file, anchor)) => (file, anchor_id(anchor)),
        None => (href, None),
    }
}

pub fn legacy_route(file: &str) -> Option<Route> {
    let file = file.trim_start_matches("./").trim_start_matches('/');
    let file = file.split(['#', '?']).next().unwrap_or(file);
    LEGACY_FILES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(file))
        .map(|(_, route)| route.clone())
}

/// A legacy file redirect, with the section it asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyTarget {
    pub route: Route,
    pub anchor: Option<String>,
}

/// Resolves `/file` as the router saw it. The router strips the fragment from
/// the path, so `hash` is the current location hash; an anchor written into
/// `file` itself wins.
pub fn legacy_target(file: &str, hash: &str) -> Option<LegacyTarget> {
    let (file, anchor) = split_anchor(file);
    let route = legacy_route(file)?;
    let anchor = anchor.or_else(|| anchor_id(hash)).map(str::to_string);
    Some(LegacyTarget { route, anchor })
}

/// Moves to the target route, then restores its anchor so the page can
/// scroll to that section once it mounts.
pub fn redirect(target: &LegacyTarget, navigator: Option<&Navigator>) {
    follow(&NavTarget::Route(target.route.clone()), navigator);
    if let (Some(anchor), Some(window)) = (&target.anchor, web_sys::window()) {
        if window.location().set_hash(anchor).is_err() {
            warn!("Failed to restore #{} after redirect", anchor);
        }
    }
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}

/// Absolute href for a full-page navigation.
pub fn resolve_href(href: &str) -> String {
    if is_external(href) {
        return href.to_string();
    }
    let path = href.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", config::get_site_url(), path)
}

/// Leaves the current view for `target`.
pub fn follow(target: &NavTarget, navigator: Option<&Navigator>) {
    match target {
        NavTarget::Route(route) => match navigator {
            Some(navigator) => {
                debug!("Navigating to {:?}", route);
                navigator.push(route);
            }
            None => warn!("No router navigator available for {:?}", route),
        },
        NavTarget::Href(href) => {
            let url = resolve_href(href);
            debug!("Leaving page for {}", url);
            if let Some(window) = web_sys::window() {
                if window.location().set_href(&url).is_err() {
                    warn!("Failed to navigate to {}", url);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_files_map_to_routes() {
        assert_eq!(legacy_route("fonoaudiologia.html"), Some(Route::Speech));
        assert_eq!(legacy_route("./psicologia.html"), Some(Route::Psychology));
        assert_eq!(legacy_route("/nutrir.html#grupos"), Some(Route::Nutrir));
        assert_eq!(legacy_route("INDEX.HTML"), Some(Route::Home));
    }

    #[test]
    fn unknown_legacy_file_has_no_route() {
        assert_eq!(legacy_route("blog.html"), None);
        assert_eq!(legacy_route(""), None);
    }

    #[test]
    fn contact_anchor_survives_index_redirect() {
        let expected = Some(LegacyTarget { route: Route::Home, anchor: Some("contato".to_string()) });
        assert_eq!(legacy_target("index.html#contato", ""), expected);
        assert_eq!(legacy_target("index.html", "#contato"), expected);
        assert_eq!(legacy_target("index.html#contato", "#servicos"), expected);
    }

    #[test]
    fn plain_legacy_file_has_no_anchor() {
        let target = legacy_target("psicologia.html", "").unwrap();
        assert_eq!(target.route, Route::Psychology);
        assert_eq!(target.anchor, None);
        assert_eq!(legacy_target("psicologia.html", "#").unwrap().anchor, None);
        assert_eq!(legacy_target("blog.html", "#contato"), None);
    }

    #[test]
    fn anchor_ids_come_from_hashes() {
        assert_eq!(anchor_id("#contato"), Some("contato"));
        assert_eq!(anchor_id("contato"), Some("contato"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
        assert_eq!(split_anchor("nutrir.html#grupos"), ("nutrir.html", Some("grupos")));
        assert_eq!(split_anchor("nutrir.html"), ("nutrir.html", None));
    }

    #[test]
    fn psychology_booking_links_land_on_home_contact_form() {
        use crate::content::psychology;

        for panel in psychology::PAGE.panels {
            if let NavTarget::Href(href) = &panel.target {
                if href.contains('#') {
                    let target = legacy_target(href, "").unwrap();
                    assert_eq!(target.route, Route::Home, "{}", panel.id);
                    assert_eq!(target.anchor.as_deref(), Some("contato"), "{}", panel.id);
                }
            }
        }
    }

    #[test]
    fn external_hrefs_are_untouched() {
        assert_eq!(resolve_href("https://wa.me/5511987654321"), "https://wa.me/5511987654321");
        assert_eq!(resolve_href("tel:+551134567890"), "tel:+551134567890");
    }

    #[test]
    fn relative_hrefs_are_rooted_at_site_url() {
        let expected = format!("{}/psicopedagogia.html", config::get_site_url());
        assert_eq!(resolve_href("./psicopedagogia.html"), expected);
        assert_eq!(resolve_href("psicopedagogia.html"), expected);
        assert_eq!(resolve_href("/psicopedagogia.html"), expected);
    }
}
