//! The mounted widget: DOM discovery, rendering and event wiring.
//!
//! State lives in one [`FilterEngine`] owned by a controller. Handlers only
//! mutate that state; [`PageView::render`] then writes the resulting
//! [`Projection`] to the DOM (each card's `hidden` flag plus the counter),
//! so the page always shows a pure function of the current state.

use std::cell::RefCell;
use std::rc::Rc;

use pattern_page::types::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, Window};

use crate::clipboard::{self, SystemClipboard};
use crate::console;
use crate::filter::{EntryAttrs, FilterDimension, FilterEngine, Projection};
use crate::keyboard::{self, KeyPress, Platform, Shortcut};
use crate::listener::EventListener;

/// Handles to the page elements the widget reads and writes.
///
/// Every control is optional; a missing one just means the matching
/// behaviour is skipped.
struct PageView {
    entries: Vec<HtmlElement>,
    search: Option<HtmlInputElement>,
    counter: Option<Element>,
    category_group: Option<Element>,
    source_group: Option<Element>,
}

impl PageView {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            search: None,
            counter: None,
            category_group: None,
            source_group: None,
        }
    }

    fn discover(root: &Element) -> Self {
        let by_id = |id: &str| -> Option<Element> {
            root.query_selector(&format!("#{id}")).ok().flatten()
        };

        let search = by_id(dom::SEARCH_INPUT_ID).and_then(|el| el.dyn_into().ok());
        if search.is_none() {
            console::debug("no search input, text filtering disabled");
        }

        Self {
            entries: select_all(root, dom::ENTRY_SELECTOR),
            search,
            counter: by_id(dom::RESULTS_COUNT_ID),
            category_group: by_id(dom::CATEGORY_FILTERS_ID),
            source_group: by_id(dom::SOURCE_FILTERS_ID),
        }
    }

    fn entry_attrs(&self) -> Vec<EntryAttrs> {
        self.entries.iter().map(|el| read_entry(el)).collect()
    }

    fn group(&self, dimension: FilterDimension) -> Option<&Element> {
        match dimension {
            FilterDimension::Category => self.category_group.as_ref(),
            FilterDimension::Source => self.source_group.as_ref(),
        }
    }

    fn render(&self, projection: &Projection) {
        for (entry, &visible) in self.entries.iter().zip(&projection.visible) {
            if entry.hidden() == visible {
                entry.set_hidden(!visible);
            }
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&projection.label));
        }
    }

    /// Single-select: exactly the button carrying `value` is active.
    fn mark_active(&self, dimension: FilterDimension, value: &str) {
        let Some(group) = self.group(dimension) else {
            return;
        };
        for button in select_all(group, dom::FILTER_BUTTON_SELECTOR) {
            let selected = button.get_attribute(dom::ATTR_FILTER_VALUE).as_deref() == Some(value);
            let _ = button.class_list().toggle_with_force(dom::ACTIVE_CLASS, selected);
            let _ = button.set_attribute("aria-pressed", if selected { "true" } else { "false" });
        }
    }

    fn search_focused(&self, document: &Document) -> bool {
        match (&self.search, document.active_element()) {
            (Some(search), Some(active)) => search.is_same_node(Some(active.as_ref())),
            _ => false,
        }
    }
}

fn select_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn read_entry(el: &HtmlElement) -> EntryAttrs {
    let attr = |name: &str| el.get_attribute(name).unwrap_or_default();
    EntryAttrs {
        category: attr(dom::ATTR_CATEGORY),
        source: attr(dom::ATTR_SOURCE),
        name: attr(dom::ATTR_NAME),
        keywords: attr(dom::ATTR_KEYWORDS),
        description: el
            .query_selector(dom::DESCRIPTION_SELECTOR)
            .ok()
            .flatten()
            .and_then(|d| d.text_content())
            .unwrap_or_default(),
    }
}

/// Filter state and the view it drives.
struct Controller {
    engine: FilterEngine,
    view: PageView,
}

impl Controller {
    fn new(view: PageView) -> Self {
        Self {
            engine: FilterEngine::new(view.entry_attrs()),
            view,
        }
    }

    fn recompute(&self) {
        self.view.render(&self.engine.recompute());
    }

    fn set_search_term(&mut self, text: &str) {
        let projection = self.engine.set_search_term(text);
        self.view.render(&projection);
    }

    fn select(&mut self, dimension: FilterDimension, value: &str) {
        self.view.mark_active(dimension, value);
        let projection = self.engine.select(dimension, value);
        self.view.render(&projection);
    }

    fn clear_search(&mut self) {
        if let Some(search) = &self.view.search {
            search.set_value("");
        }
        self.set_search_term("");
    }
}

/// A mounted pattern browser.
///
/// Created with [`PatternBrowser::mount`] (whole document) or
/// [`PatternBrowser::mount_in`] (one subtree). All listeners are removed by
/// [`PatternBrowser::destroy`], or when the handle is dropped / freed from
/// JavaScript.
#[wasm_bindgen]
pub struct PatternBrowser {
    controller: Rc<RefCell<Controller>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl PatternBrowser {
    /// Mount on the whole document.
    pub fn mount() -> PatternBrowser {
        let Some(window) = web_sys::window() else {
            return Self::detached();
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return Self::detached();
        };
        Self::attach(window, root)
    }

    /// Mount on the subtree under `root`. Keyboard shortcuts stay global.
    pub fn mount_in(root: Element) -> PatternBrowser {
        match web_sys::window() {
            Some(window) => Self::attach(window, root),
            None => Self::detached(),
        }
    }

    /// Number of entries visible under the current filters.
    #[wasm_bindgen(getter)]
    pub fn visible_count(&self) -> usize {
        self.controller.borrow().engine.recompute().visible_count
    }

    /// Number of entries on the page.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> usize {
        self.controller.borrow().engine.entries().len()
    }

    /// Current results counter text.
    #[wasm_bindgen(getter)]
    pub fn counter_label(&self) -> String {
        self.controller.borrow().engine.recompute().label
    }

    /// Current search text.
    #[wasm_bindgen(getter)]
    pub fn search_term(&self) -> String {
        self.controller.borrow().engine.state().search_term.clone()
    }

    /// Set the search text, mirroring it into the search box.
    pub fn set_search_term(&self, text: &str) {
        let mut controller = self.controller.borrow_mut();
        if let Some(search) = &controller.view.search {
            search.set_value(text);
        }
        controller.set_search_term(text);
    }

    /// Select a category tag, or `"all"`.
    pub fn set_category(&self, tag: &str) {
        self.controller
            .borrow_mut()
            .select(FilterDimension::Category, tag);
    }

    /// Select a source tag, or `"all"`.
    pub fn set_source(&self, tag: &str) {
        self.controller
            .borrow_mut()
            .select(FilterDimension::Source, tag);
    }

    /// Re-apply the current filters to the page.
    pub fn recompute(&self) {
        self.controller.borrow().recompute();
    }

    /// Detach every listener. Visibility is left as it is.
    pub fn destroy(self) {
        drop(self);
    }
}

impl PatternBrowser {
    fn detached() -> Self {
        Self {
            controller: Rc::new(RefCell::new(Controller::new(PageView::empty()))),
            listeners: Vec::new(),
        }
    }

    fn attach(window: Window, root: Element) -> Self {
        let controller = Rc::new(RefCell::new(Controller::new(PageView::discover(&root))));
        controller.borrow().recompute();

        let mut listeners = Vec::new();
        listeners.extend(search_listener(&controller));
        listeners.extend(filter_listener(&controller, FilterDimension::Category));
        listeners.extend(filter_listener(&controller, FilterDimension::Source));
        listeners.extend(copy_listener(&window, &root));
        listeners.extend(keyboard_listener(&window, &controller));

        let entry_count = controller.borrow().view.entries.len();
        console::debug(&format!(
            "mounted: {} entries, {} listeners",
            entry_count,
            listeners.len()
        ));

        Self {
            controller,
            listeners,
        }
    }
}

impl Drop for PatternBrowser {
    fn drop(&mut self) {
        self.listeners.clear();
    }
}

fn search_listener(controller: &Rc<RefCell<Controller>>) -> Option<EventListener> {
    let search = controller.borrow().view.search.clone()?;
    let handle = Rc::clone(controller);
    let input = search.clone();
    EventListener::new(&search, "input", move |_event: Event| {
        handle.borrow_mut().set_search_term(&input.value());
    })
}

fn filter_listener(
    controller: &Rc<RefCell<Controller>>,
    dimension: FilterDimension,
) -> Option<EventListener> {
    let group = controller.borrow().view.group(dimension).cloned()?;
    let handle = Rc::clone(controller);
    let scope = group.clone();
    EventListener::new(&group, "click", move |event: Event| {
        let Some(button) = event_element(&event)
            .and_then(|el| el.closest(dom::FILTER_BUTTON_SELECTOR).ok().flatten())
        else {
            return;
        };
        if !scope.contains(Some(button.as_ref())) {
            return;
        }
        let value = button
            .get_attribute(dom::ATTR_FILTER_VALUE)
            .unwrap_or_else(|| dom::ALL.to_string());
        handle.borrow_mut().select(dimension, &value);
    })
}

fn copy_listener(window: &Window, root: &Element) -> Option<EventListener> {
    let window = window.clone();
    EventListener::new(root, "click", move |event: Event| {
        let Some(trigger) = event_element(&event)
            .and_then(|el| el.closest(dom::COPY_BUTTON_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let window = window.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let clipboard = SystemClipboard::new(window.clone());
            if let Err(err) = clipboard::copy_from_trigger(&clipboard, &window, &trigger).await {
                console::error(&format!("copy failed: {err}"));
            }
        });
    })
}

fn keyboard_listener(window: &Window, controller: &Rc<RefCell<Controller>>) -> Option<EventListener> {
    let document = window.document()?;
    let platform = Platform::from_navigator(&window.navigator().platform().unwrap_or_default());
    let handle = Rc::clone(controller);
    let focus_scope = document.clone();
    EventListener::new(&document, "keydown", move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        let press = KeyPress {
            key: &key,
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            alt: event.alt_key(),
        };
        let focused = handle.borrow().view.search_focused(&focus_scope);
        match keyboard::resolve(&press, platform, focused) {
            Some(Shortcut::FocusSearch) => {
                // First mounted widget with a search box takes the shortcut
                if event.default_prevented() {
                    return;
                }
                if let Some(search) = &handle.borrow().view.search {
                    event.prevent_default();
                    let _ = search.focus();
                    search.select();
                }
            }
            Some(Shortcut::ClearSearch) => handle.borrow_mut().clear_search(),
            None => {}
        }
    })
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
