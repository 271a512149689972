//! Tests for sidebar navigation rendering
//!
//! The sidebar is a pure projection of the link list against the current
//! path; these tests pin down its contract: totality, ordering, exact-match
//! active state, and display capitalization.

use rstest::{fixture, rstest};

use jobify_web::components::layout::{
    NAV_LINKS, NavLink, capitalize_label, render_nav_links,
};

/// Fixture providing the route list from the dashboard sidebar shape:
/// a root entry plus a nested path entry.
#[fixture]
fn route_list() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "stats",
            href: "/",
            icon: "monitoring",
        },
        NavLink {
            label: "add job",
            href: "/add-job",
            icon: "post_add",
        },
    ]
}

#[rstest]
fn output_length_equals_input_length(
    route_list: Vec<NavLink>,
    #[values("/", "/add-job", "/jobs/42", "", "nonsense")] current_path: &str,
) {
    let rendered = render_nav_links(&route_list, current_path);
    assert_eq!(rendered.len(), route_list.len());
}

#[rstest]
fn output_preserves_input_ordering(route_list: Vec<NavLink>) {
    let rendered = render_nav_links(&route_list, "/add-job");
    let hrefs: Vec<&str> = rendered.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/", "/add-job"]);
}

#[rstest]
fn exactly_one_link_active_on_match(route_list: Vec<NavLink>) {
    let rendered = render_nav_links(&route_list, "/add-job");
    let active: Vec<_> = rendered.iter().filter(|l| l.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].href, "/add-job");
    assert!(!rendered[0].active);
}

#[rstest]
fn no_link_active_on_unmatched_path(
    route_list: Vec<NavLink>,
    #[values("/jobs/42", "/unknown", "", "add-job")] current_path: &str,
) {
    let rendered = render_nav_links(&route_list, current_path);
    assert!(rendered.iter().all(|l| !l.active));
}

/// Equality, not prefix matching: "/add-job" must not light up at
/// "/add-job/edit", nor "/" at any other path.
#[rstest]
fn active_state_requires_exact_equality(route_list: Vec<NavLink>) {
    let rendered = render_nav_links(&route_list, "/add-job/edit");
    assert!(rendered.iter().all(|l| !l.active));
}

#[rstest]
fn matching_is_case_sensitive(route_list: Vec<NavLink>) {
    let rendered = render_nav_links(&route_list, "/Add-Job");
    assert!(rendered.iter().all(|l| !l.active));
}

#[test]
fn empty_route_list_renders_nothing() {
    assert!(render_nav_links(&[], "/anything").is_empty());
    assert!(render_nav_links(&[], "").is_empty());
}

#[rstest]
fn rendering_is_idempotent(route_list: Vec<NavLink>) {
    let first = render_nav_links(&route_list, "/add-job");
    let second = render_nav_links(&route_list, "/add-job");
    assert_eq!(first, second);
}

/// Duplicate hrefs are a degenerate input, not an error: every matching
/// entry renders active.
#[test]
fn duplicate_hrefs_all_render_active() {
    let links = vec![
        NavLink {
            label: "stats",
            href: "/stats",
            icon: "monitoring",
        },
        NavLink {
            label: "statistics",
            href: "/stats",
            icon: "monitoring",
        },
    ];
    let rendered = render_nav_links(&links, "/stats");
    assert!(rendered.iter().all(|l| l.active));
}

#[rstest]
fn display_labels_are_capitalized(route_list: Vec<NavLink>) {
    let rendered = render_nav_links(&route_list, "/");
    assert_eq!(rendered[0].label, "Stats");
    assert_eq!(rendered[1].label, "Add Job");
}

#[rstest]
#[case("add job", "Add Job")]
#[case("all jobs", "All Jobs")]
#[case("stats", "Stats")]
#[case("Stats", "Stats")]
#[case("", "")]
#[case("a b c", "A B C")]
fn capitalize_label_uppercases_each_word(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(capitalize_label(input), expected);
}

/// The sidebar's static link list honors the uniqueness invariant and keeps
/// lowercase storage labels (capitalization is display-only).
#[test]
fn nav_links_have_unique_hrefs_and_lowercase_labels() {
    for (i, link) in NAV_LINKS.iter().enumerate() {
        assert!(
            NAV_LINKS.iter().skip(i + 1).all(|other| other.href != link.href),
            "duplicate href {}",
            link.href
        );
        assert_eq!(link.label, link.label.to_lowercase());
    }
}

#[test]
fn nav_links_resolve_against_every_own_href() {
    for link in NAV_LINKS {
        let rendered = render_nav_links(NAV_LINKS, link.href);
        let active: Vec<_> = rendered.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, link.href);
    }
}
