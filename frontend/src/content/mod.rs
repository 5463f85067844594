//! Static content tables for every page of the site.
//!
//! Each page owns one [`PageContent`]. Nothing here is created or destroyed at
//! runtime; the disclosure controller only ever points into these tables.

use crate::navigation::NavTarget;
use crate::Route;

pub mod clinic;
pub mod institute;
pub mod nutrir;
pub mod occupational;
pub mod psychology;
pub mod psychopedagogy;
pub mod speech;

/// Colour tag of a feature row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Teal,
    Coral,
    Sun,
    Lilac,
    Sky,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Teal => "tone-teal",
            Tone::Coral => "tone-coral",
            Tone::Sun => "tone-sun",
            Tone::Lilac => "tone-lilac",
            Tone::Sky => "tone-sky",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One expandable service or program summary.
#[derive(Debug, PartialEq)]
pub struct PanelDescriptor {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
    pub cta: &'static str,
    pub target: NavTarget,
}

/// What a second click on an already open trigger does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Follow the panel's target ("tap again to proceed").
    Navigate,
    /// Close the panel.
    Toggle,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub registry: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PageContent {
    pub slug: &'static str,
    pub route: Route,
    pub nav_label: &'static str,
    pub accent: &'static str,
    pub hero_kicker: &'static str,
    pub hero_title: &'static str,
    /// Words cycled through after the hero title.
    pub hero_words: &'static [&'static str],
    pub hero_text: &'static str,
    pub hero_image: &'static str,
    pub panels_heading: &'static str,
    pub panels_intro: &'static str,
    pub panels: &'static [PanelDescriptor],
    pub repeat: RepeatPolicy,
    pub team_heading: &'static str,
    pub team: &'static [TeamMember],
    pub closing_title: &'static str,
    pub closing_text: &'static str,
}

/// Every page, home first. Drives the navigation bar and the footer.
pub fn all_pages() -> [&'static PageContent; 7] {
    [
        &clinic::PAGE,
        &speech::PAGE,
        &psychology::PAGE,
        &occupational::PAGE,
        &psychopedagogy::PAGE,
        &nutrir::PAGE,
        &institute::PAGE,
    ]
}

pub fn lookup(panels: &'static [PanelDescriptor], id: &str) -> Option<&'static PanelDescriptor> {
    panels.iter().find(|panel| panel.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::legacy_route;
    use std::collections::HashSet;

    #[test]
    fn panel_ids_are_unique_per_page() {
        for page in all_pages() {
            let mut seen = HashSet::new();
            for panel in page.panels {
                assert!(seen.insert(panel.id), "duplicate panel id {} on {}", panel.id, page.slug);
            }
        }
    }

    #[test]
    fn feature_ids_are_unique_per_panel() {
        for page in all_pages() {
            for panel in page.panels {
                let mut seen = HashSet::new();
                for feature in panel.features {
                    assert!(seen.insert(feature.id), "duplicate feature {} in {}", feature.id, panel.id);
                }
            }
        }
    }

    #[test]
    fn every_page_has_panels_and_hero_words() {
        for page in all_pages() {
            assert!(!page.panels.is_empty(), "{} has no panels", page.slug);
            assert!(!page.hero_words.is_empty(), "{} has no hero words", page.slug);
        }
    }

    #[test]
    fn slugs_and_routes_are_distinct() {
        let pages = all_pages();
        let slugs: HashSet<_> = pages.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), pages.len());
        for (i, a) in pages.iter().enumerate() {
            for b in pages.iter().skip(i + 1) {
                assert_ne!(a.route, b.route);
            }
        }
    }

    #[test]
    fn relative_html_targets_resolve_to_known_pages() {
        for page in all_pages() {
            for panel in page.panels {
                if let NavTarget::Href(href) = panel.target {
                    if href.ends_with(".html") || href.contains(".html#") {
                        assert!(legacy_route(href).is_some(), "{} points at unknown file {}", panel.id, href);
                    }
                }
            }
        }
    }

    #[test]
    fn lookup_finds_only_table_entries() {
        let panels = clinic::PAGE.panels;
        assert_eq!(lookup(panels, "terapias").map(|p| p.id), Some("terapias"));
        assert!(lookup(panels, "nao-existe").is_none());
    }
}
