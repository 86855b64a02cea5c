//! # Explore overlay — client-only keyword search
//!
//! A static catalog maps each site category to its keywords and target path;
//! [`filter_catalog`] narrows it per keystroke, entirely on the client. The
//! scan is linear over categories × keywords, which at this size is far below
//! anything worth debouncing.
//!
//! Three outcomes are distinguished on purpose: an empty query shows the full
//! catalog, a query with matches shows only the matching keywords per
//! category, and a query with no matches renders an explicit "no results"
//! message rather than a silently empty list.

use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaXmark};
use crate::Icon;

/// One entry in the static search catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCategory {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub path: &'static str,
}

/// The catalog, in display order. The filter preserves this order; results
/// are never re-ranked by relevance.
pub const SEARCH_CATALOG: &[SearchCategory] = &[
    SearchCategory {
        category: "About",
        keywords: &["Visi", "Misi", "Sejarah", "Tujuan Pembelajaran", "Kontak"],
        path: "/about",
    },
    SearchCategory {
        category: "Tatarias",
        keywords: &["Makeup", "Facial", "Skincare", "Beauty Treatment"],
        path: "/belajar-tatarias",
    },
    SearchCategory {
        category: "Salon",
        keywords: &["Hair Care", "Nail Art", "Spa", "Massage"],
        path: "/belajar-salon",
    },
    SearchCategory {
        category: "Treatment",
        keywords: &["Body Treatment", "Face Treatment", "Hair Treatment"],
        path: "/belajar-treatment",
    },
    SearchCategory {
        category: "Hairstyle",
        keywords: &["Haircut", "Hair Coloring", "Hair Styling", "Hair Extension"],
        path: "/belajar-hairstyle",
    },
];

/// A category paired with only the keywords that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub category: &'static str,
    pub keywords: Vec<&'static str>,
    pub path: &'static str,
}

/// Result of filtering the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: the whole catalog, every keyword.
    All(Vec<SearchHit>),
    /// Non-empty query with at least one match.
    Hits(Vec<SearchHit>),
    /// Non-empty query matching nothing.
    NoResults,
}

/// Case-insensitive substring filter over the catalog.
pub fn filter_catalog(query: &str) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::All(
            SEARCH_CATALOG
                .iter()
                .map(|entry| SearchHit {
                    category: entry.category,
                    keywords: entry.keywords.to_vec(),
                    path: entry.path,
                })
                .collect(),
        );
    }

    let needle = query.to_lowercase();
    let hits: Vec<SearchHit> = SEARCH_CATALOG
        .iter()
        .filter_map(|entry| {
            let keywords: Vec<&'static str> = entry
                .keywords
                .iter()
                .copied()
                .filter(|keyword| keyword.to_lowercase().contains(&needle))
                .collect();
            if keywords.is_empty() {
                None
            } else {
                Some(SearchHit {
                    category: entry.category,
                    keywords,
                    path: entry.path,
                })
            }
        })
        .collect();

    if hits.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Hits(hits)
    }
}

/// Full-screen search overlay opened from the navbar's Explore entry.
#[component]
pub fn ExploreOverlay(on_close: EventHandler<()>) -> Element {
    let mut search_term = use_signal(String::new);

    let content = match filter_catalog(&search_term()) {
        SearchOutcome::All(hits) | SearchOutcome::Hits(hits) => rsx! {
            div {
                class: "explore-categories",
                for hit in hits {
                    div {
                        class: "explore-category",
                        h3 { "{hit.category}" }
                        div {
                            class: "explore-keywords",
                            for keyword in hit.keywords {
                                a {
                                    href: "{hit.path}",
                                    class: "explore-keyword",
                                    "{keyword}"
                                }
                            }
                        }
                    }
                }
            }
        },
        SearchOutcome::NoResults => rsx! {
            div {
                class: "explore-no-results",
                "No results found for \"{search_term}\""
            }
        },
    };

    rsx! {
        div {
            class: "explore-modal-overlay",
            div {
                class: "explore-modal",
                div {
                    class: "explore-modal-header",
                    div {
                        class: "explore-search-container",
                        span {
                            class: "explore-search-icon",
                            Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                        }
                        input {
                            r#type: "text",
                            class: "explore-search-input",
                            placeholder: "Search keywords...",
                            autofocus: true,
                            value: search_term(),
                            oninput: move |evt: FormEvent| search_term.set(evt.value()),
                        }
                        button {
                            class: "explore-close-button",
                            onclick: move |_| on_close.call(()),
                            Icon { icon: FaXmark, width: 20, height: 20 }
                        }
                    }
                }
                div {
                    class: "explore-modal-content",
                    {content}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_the_whole_catalog() {
        let SearchOutcome::All(hits) = filter_catalog("") else {
            panic!("empty query must return the unfiltered catalog");
        };
        assert_eq!(hits.len(), 5);
        // Every keyword survives, order untouched.
        for (hit, entry) in hits.iter().zip(SEARCH_CATALOG) {
            assert_eq!(hit.category, entry.category);
            assert_eq!(hit.keywords, entry.keywords.to_vec());
        }
    }

    #[test]
    fn test_facial_matches_exactly_tatarias() {
        let SearchOutcome::Hits(hits) = filter_catalog("facial") else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Tatarias");
        assert_eq!(hits[0].keywords, vec!["Facial"]);
        assert_eq!(hits[0].path, "/belajar-tatarias");
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let SearchOutcome::Hits(hits) = filter_catalog("HAIR") else {
            panic!("expected matches");
        };
        // Salon, Treatment and Hairstyle all carry hair keywords, in catalog
        // order.
        let categories: Vec<&str> = hits.iter().map(|hit| hit.category).collect();
        assert_eq!(categories, vec!["Salon", "Treatment", "Hairstyle"]);
        assert_eq!(hits[0].keywords, vec!["Hair Care"]);
        assert_eq!(hits[1].keywords, vec!["Hair Treatment"]);
    }

    #[test]
    fn test_no_match_is_an_explicit_state() {
        assert_eq!(filter_catalog("zzz"), SearchOutcome::NoResults);
    }

    #[test]
    fn test_only_matching_keywords_are_kept() {
        let SearchOutcome::Hits(hits) = filter_catalog("treatment") else {
            panic!("expected matches");
        };
        // Tatarias keeps only "Beauty Treatment", Treatment keeps all three.
        assert_eq!(hits[0].category, "Tatarias");
        assert_eq!(hits[0].keywords, vec!["Beauty Treatment"]);
        assert_eq!(hits[1].category, "Treatment");
        assert_eq!(hits[1].keywords.len(), 3);
    }
}
