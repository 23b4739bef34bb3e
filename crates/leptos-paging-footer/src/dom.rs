//! Browser Region
//!
//! Renders footer markup into a DOM element and delegates `click` and
//! `change` events from that element to the footer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::collection::PaginatedCollection;
use crate::error::{FooterError, FooterResult};
use crate::footer::{FooterAction, PagingFooter, PagingFooterOptions, EVENTS};
use crate::region::FooterRegion;

const PREVIOUS_PAGE_SELECTOR: &str = ".previous-page-link";
const NEXT_PAGE_SELECTOR: &str = ".next-page-link";
const PAGE_INPUT_SELECTOR: &str = ".page-number-input";

/// Typed handles to the rendered affordances
#[derive(Debug, Clone)]
pub struct Affordances {
    pub previous: Element,
    pub next: Element,
    pub page_input: HtmlInputElement,
}

impl Affordances {
    /// Look up all three affordances under `root`, failing on the first missing one
    pub fn query(root: &Element) -> FooterResult<Self> {
        let page_input = find(root, PAGE_INPUT_SELECTOR)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FooterError::Dom(format!("{} is not an input", PAGE_INPUT_SELECTOR)))?;
        Ok(Self {
            previous: find(root, PREVIOUS_PAGE_SELECTOR)?,
            next: find(root, NEXT_PAGE_SELECTOR)?,
            page_input,
        })
    }
}

fn find(root: &Element, selector: &'static str) -> FooterResult<Element> {
    root.query_selector(selector)?
        .ok_or(FooterError::MissingAffordance(selector))
}

/// Footer region backed by a DOM element
pub struct DomRegion {
    root: Element,
    affordances: RefCell<Option<Affordances>>,
}

impl DomRegion {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            affordances: RefCell::new(None),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Handles from the latest render
    pub fn affordances(&self) -> Option<Affordances> {
        self.affordances.borrow().clone()
    }

    fn page_input(&self) -> FooterResult<HtmlInputElement> {
        self.affordances.borrow()
            .as_ref()
            .map(|a| a.page_input.clone())
            .ok_or(FooterError::MissingAffordance(PAGE_INPUT_SELECTOR))
    }
}

impl FooterRegion for DomRegion {
    fn replace_content(&self, markup: &str) -> FooterResult<()> {
        self.root.set_inner_html(markup);
        // Old handles point at detached nodes now
        *self.affordances.borrow_mut() = Some(Affordances::query(&self.root)?);
        Ok(())
    }

    fn page_input_value(&self) -> FooterResult<String> {
        Ok(self.page_input()?.value())
    }

    fn clear_page_input(&self) -> FooterResult<()> {
        self.page_input()?.set_value("");
        Ok(())
    }
}

/// Find the footer action an event maps to via the `EVENTS` table
fn action_for_event(ev: &Event) -> Option<FooterAction> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let event_type = ev.type_();
    EVENTS.iter()
        .filter(|(ty, _, _)| *ty == event_type)
        .find(|(_, class, _)| matches!(target.closest(&format!(".{}", class)), Ok(Some(_))))
        .map(|(_, _, action)| *action)
}

/// Delegated event listeners on the footer root.
///
/// Listening on the root keeps handlers alive across full re-renders.
/// Listeners are removed on drop.
pub struct DomEvents {
    root: Element,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl DomEvents {
    pub fn bind<C>(root: &Element, footer: &Rc<PagingFooter<C, DomRegion>>) -> FooterResult<Self>
    where
        C: PaginatedCollection + 'static,
    {
        let mut listeners = Vec::new();
        for event_type in ["click", "change"] {
            let weak = Rc::downgrade(footer);
            let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                let Some(footer) = weak.upgrade() else { return };
                let Some(action) = action_for_event(&ev) else { return };
                if let Err(e) = footer.dispatch(action) {
                    log::error!("[PagingFooter] {:?} failed: {}", action, e);
                }
            });
            root.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref::<js_sys::Function>())?;
            listeners.push((event_type, closure));
        }
        Ok(Self {
            root: root.clone(),
            listeners,
        })
    }
}

impl Drop for DomEvents {
    fn drop(&mut self) {
        for (event_type, closure) in &self.listeners {
            let _ = self.root.remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        }
    }
}

/// A footer rendered into a DOM element with its listeners attached
pub struct MountedFooter<C: PaginatedCollection + 'static> {
    // Dropped first so no event reaches a torn-down footer
    _events: DomEvents,
    footer: Rc<PagingFooter<C, DomRegion>>,
}

impl<C: PaginatedCollection + 'static> MountedFooter<C> {
    pub fn footer(&self) -> &Rc<PagingFooter<C, DomRegion>> {
        &self.footer
    }
}

/// Render a footer for `collection` into `root` and wire its events
pub fn mount<C>(root: Element, collection: Rc<C>) -> FooterResult<MountedFooter<C>>
where
    C: PaginatedCollection + 'static,
{
    let footer = PagingFooter::new(PagingFooterOptions { collection }, DomRegion::new(root.clone()))?;
    let events = DomEvents::bind(&root, &footer)?;
    Ok(MountedFooter { _events: events, footer })
}
