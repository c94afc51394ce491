//! Headless navigation tests: a real `VirtualDom` driven through the
//! navigator, with `dioxus_ssr` snapshots of what the user would see.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::{ElementId, Event, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use pretty_assertions::assert_eq;

use llhs_finance_site::app::Chrome;
use llhs_finance_site::nav::{resolve_name, use_after_navigate, use_navigation, Navigator, View};
use llhs_finance_site::views::Home;

/// Class string unique to the highlighted header button.
const ACTIVE: &str = "text-llhs-gold border-b-2 border-llhs-gold";

thread_local! {
    static NAV: RefCell<Option<Navigator>> = const { RefCell::new(None) };
    static VISITS: RefCell<Vec<View>> = const { RefCell::new(Vec::new()) };
}

/// The real page shell with the navigator handle and the post-navigation
/// action exposed to the test.
fn harness() -> Element {
    let nav = use_navigation();
    NAV.with(|slot| *slot.borrow_mut() = Some(nav));
    use_after_navigate(nav, |view| VISITS.with(|log| log.borrow_mut().push(view)));

    rsx! {
        Chrome { nav }
    }
}

fn navigator() -> Navigator {
    NAV.with(|slot| slot.borrow().expect("harness not mounted"))
}

/// Reads the active view from inside the dom's runtime.
fn active_view(dom: &VirtualDom) -> View {
    dom.in_runtime(|| navigator().current())
}

/// Delivers a click to `target` the way a renderer would.
fn click(dom: &mut VirtualDom, target: ElementId) {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
    let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, target);
    dom.render_immediate(&mut NoOpMutations);
}

fn visits() -> Vec<View> {
    VISITS.with(|log| log.borrow().clone())
}

/// Lets queued effects run, then applies any renders they caused.
async fn settle(dom: &mut VirtualDom) {
    tokio::select! {
        _ = dom.wait_for_work() => {}
        _ = tokio::time::sleep(Duration::from_millis(50)) => {}
    }
    dom.render_immediate(&mut NoOpMutations);
}

async fn mount() -> VirtualDom {
    NAV.with(|slot| *slot.borrow_mut() = None);
    VISITS.with(|log| log.borrow_mut().clear());

    let mut dom = VirtualDom::new(harness);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    dom
}

async fn navigate(dom: &mut VirtualDom, to: View) {
    let nav = navigator();
    dom.in_runtime(|| nav.go(to));
    dom.render_immediate(&mut NoOpMutations);
    settle(dom).await;
}

fn page_heading(view: View) -> &'static str {
    match view {
        View::Home => "Welcome to LLHS Finance Club",
        View::About => "About the Club",
        View::Join => "Ready to Join?",
        View::Portfolio => "Our Investment Portfolio",
    }
}

/// Asserts exactly one header button is highlighted and returns its label.
fn active_nav_label(html: &str) -> String {
    assert_eq!(html.matches(ACTIVE).count(), 1, "exactly one active nav control");
    let rest = &html[html.find(ACTIVE).unwrap()..];
    let start = rest.find('>').unwrap() + 1;
    let end = rest.find("</button>").unwrap();
    rest[start..end].trim().to_string()
}

#[tokio::test]
async fn starts_on_home() {
    let dom = mount().await;
    let html = dioxus_ssr::render(&dom);

    assert_eq!(active_view(&dom), View::Home);
    assert!(html.contains(page_heading(View::Home)));
    assert_eq!(active_nav_label(&html), "Home");
    // Chrome renders around the page.
    assert!(html.contains("LLHS Finance Club"));
    assert!(html.contains("Go Knights!"));
}

#[tokio::test]
async fn every_view_is_reachable() {
    let mut dom = mount().await;

    for view in View::ALL {
        navigate(&mut dom, view).await;
        let html = dioxus_ssr::render(&dom);

        assert_eq!(active_view(&dom), view);
        assert!(
            html.contains(page_heading(view)),
            "{view:?} page not rendered"
        );
        assert_eq!(active_nav_label(&html), view.label());
    }
}

#[tokio::test]
async fn repeat_navigation_is_idempotent_but_still_fires_the_effect() {
    let mut dom = mount().await;
    assert_eq!(visits(), [View::Home]);

    navigate(&mut dom, View::About).await;
    assert_eq!(active_view(&dom), View::About);
    assert_eq!(visits(), [View::Home, View::About]);

    navigate(&mut dom, View::About).await;
    assert_eq!(active_view(&dom), View::About);
    assert_eq!(visits(), [View::Home, View::About, View::About]);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(page_heading(View::About)));
}

#[tokio::test]
async fn effect_runs_after_the_new_page_is_committed() {
    let mut dom = mount().await;
    assert_eq!(visits(), [View::Home]);

    let nav = navigator();
    dom.in_runtime(|| nav.go(View::Portfolio));
    // State is replaced synchronously, but the effect waits for the commit.
    assert_eq!(visits(), [View::Home]);

    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(page_heading(View::Portfolio)));

    settle(&mut dom).await;
    assert_eq!(visits(), [View::Home, View::Portfolio]);
}

#[tokio::test]
async fn unknown_page_names_render_home() {
    fn fallback_harness() -> Element {
        let nav = use_navigation();
        (resolve_name("Announcements").render)(nav)
    }

    let mut dom = VirtualDom::new(fallback_harness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(page_heading(View::Home)));
    assert!(!html.is_empty());
}

#[tokio::test]
async fn portfolio_page_shows_computed_figures() {
    let mut dom = mount().await;
    navigate(&mut dom, View::Portfolio).await;
    let html = dioxus_ssr::render(&dom);

    // Banner totals and a couple of derived table cells.
    assert!(html.contains("$12,553.42"));
    assert!(html.contains("+153.09%"));
    assert!(html.contains("$1,311.80"));
    assert!(html.contains("351.74%"));
    assert!(html.contains("46.00000"));
}

#[tokio::test]
async fn full_walk_through_the_site() {
    let mut dom = mount().await;

    // Home advertises both calls to action.
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Get Started"));
    assert!(html.contains("Check our Portfolio"));

    for view in [View::Portfolio, View::About, View::Join, View::Home] {
        navigate(&mut dom, view).await;
        let html = dioxus_ssr::render(&dom);
        assert_eq!(active_view(&dom), view);
        assert!(html.contains(page_heading(view)));
        assert_eq!(active_nav_label(&html), view.label());
    }

    assert_eq!(
        visits(),
        [View::Home, View::Portfolio, View::About, View::Join, View::Home]
    );
}

#[tokio::test]
async fn home_cta_buttons_navigate_through_their_click_handlers() {
    fn home_only() -> Element {
        let nav = use_navigation();
        NAV.with(|slot| *slot.borrow_mut() = Some(nav));

        rsx! {
            Home { nav }
        }
    }

    NAV.with(|slot| *slot.borrow_mut() = None);
    let mut dom = VirtualDom::new(home_only);
    let mutations = dom.rebuild_to_vec();

    // The page wires exactly two click handlers: "Get Started" then
    // "Check our Portfolio", in markup order.
    let targets: Vec<ElementId> = mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if *name == "click" => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(targets.len(), 2);

    click(&mut dom, targets[0]);
    assert_eq!(active_view(&dom), View::Join);

    click(&mut dom, targets[1]);
    assert_eq!(active_view(&dom), View::Portfolio);
}
