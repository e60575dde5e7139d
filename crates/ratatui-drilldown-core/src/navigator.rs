//! Drill-down navigator over a [`PageRegistry`].
//!
//! The navigator shows one level of the page hierarchy in a side panel and the selected page in a
//! content panel:
//!
//! ```text
//! ┌──────────────────┬───────────────────────────┐
//! │ ‹ Back           │                           │
//! │ Stateless Buttons│   render_page(selected)   │
//! │ Stateful Buttons │                           │
//! └──────────────────┴───────────────────────────┘
//! ```
//!
//! Rendering is immediate-mode: every call to [`Navigator::render`] recomputes the visible entries
//! with [`path_filter::filter`] and hands the selected index to the page callback. Clicks come back
//! from the host as [`NavAction`]s which the app feeds into [`Navigator::apply`].

use crate::host::Host;
use crate::host::Visual;
use crate::input::InputEvent;
use crate::input::MouseEventKind;
use crate::path_filter;
use crate::path_filter::FilteredEntry;
use crate::registry::PagePath;
use crate::registry::PageRegistry;
use crate::render;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;

/// Messages emitted by the side panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// A leaf was clicked; carries its registry index.
    Select(usize),
    /// A category was clicked; carries its caption.
    Enter(String),
    Back,
}

/// Everything the navigator mutates: the drill path and the selected page.
///
/// The two fields change together in response to one click, so hosts that deliver events from
/// several threads must lock the whole state, not the fields individually.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigatorState {
    drill_path: Vec<String>,
    selected: usize,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drill_path(&self) -> &[String] {
        &self.drill_path
    }

    pub fn depth(&self) -> usize {
        self.drill_path.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        tracing::debug!(%segment, depth = self.drill_path.len() + 1, "enter category");
        self.drill_path.push(segment);
    }

    /// Leaves the current category. Popping the root is a no-op.
    pub fn pop(&mut self) -> Option<String> {
        let popped = self.drill_path.pop();
        match &popped {
            Some(segment) => {
                tracing::debug!(%segment, depth = self.drill_path.len(), "leave category")
            }
            None => tracing::trace!("back at root ignored"),
        }
        popped
    }

    /// Not validated against the registry: an out-of-range index is passed on to the page
    /// callback as is.
    pub fn select(&mut self, index: usize) {
        tracing::debug!(index, "select page");
        self.selected = index;
    }

    /// Applies a click and reports whether anything changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Select(index) => {
                let changed = self.selected != index;
                self.select(index);
                changed
            }
            NavAction::Enter(segment) => {
                self.push(segment);
                true
            }
            NavAction::Back => self.pop().is_some(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Columns taken by the side panel, border included.
    pub panel_width: u16,
    pub back_label: String,
    /// Appended to category captions.
    pub category_marker: String,
    pub show_border: bool,
    pub show_scrollbar: bool,
    /// Shows the drill path as a muted header row above the entries.
    pub show_header: bool,
    /// Header text at the root level.
    pub root_label: String,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            panel_width: 24,
            back_label: "‹ Back".to_string(),
            category_marker: "›".to_string(),
            show_border: true,
            show_scrollbar: true,
            show_header: false,
            root_label: "Pages".to_string(),
        }
    }
}

type Observer = Box<dyn FnMut(&NavigatorState)>;

pub struct Navigator {
    registry: PageRegistry,
    state: NavigatorState,
    options: NavigatorOptions,
    scroll: ViewportState,
    list_area: Rect,
    observers: Vec<Observer>,
}

impl Navigator {
    pub fn new(registry: PageRegistry) -> Self {
        Self::with_options(registry, NavigatorOptions::default())
    }

    pub fn with_options(registry: PageRegistry, options: NavigatorOptions) -> Self {
        Self {
            registry,
            state: NavigatorState::new(),
            options,
            scroll: ViewportState::default(),
            list_area: Rect::default(),
            observers: Vec::new(),
        }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn drill_path(&self) -> &[String] {
        self.state.drill_path()
    }

    pub fn selected(&self) -> usize {
        self.state.selected()
    }

    pub fn selected_page(&self) -> Option<&PagePath> {
        self.registry.get(self.state.selected())
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: NavigatorOptions) {
        self.options = options;
    }

    pub fn scroll(&self) -> &ViewportState {
        &self.scroll
    }

    /// Entries of the current level, recomputed on every call.
    pub fn entries(&self) -> Vec<FilteredEntry> {
        path_filter::filter(self.state.drill_path(), &self.registry)
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&NavigatorState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies a click from the side panel and reports whether the state changed.
    ///
    /// `Enter` is ignored unless the category is offered at the current level, so the drill path
    /// always stays a prefix of some page even when a click arrives against a stale frame.
    pub fn apply(&mut self, action: NavAction) -> bool {
        if let NavAction::Enter(segment) = &action {
            let offered = self.entries().iter().any(
                |e| matches!(e, FilteredEntry::Category { caption } if caption == segment),
            );
            if !offered {
                tracing::trace!(%segment, "category not offered at this level");
                return false;
            }
        }

        let path_changes = !matches!(action, NavAction::Select(_));
        let changed = self.state.apply(action);
        if !changed {
            return false;
        }
        if path_changes {
            self.scroll.to_top();
        }
        for observer in &mut self.observers {
            observer(&self.state);
        }
        true
    }

    /// Scrolls the side panel with the mouse wheel. Returns `true` if a redraw is needed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let Some(m) = event.as_mouse() else {
            return false;
        };
        if !self.list_area.contains(m.position()) {
            return false;
        }
        let before = self.scroll.y;
        match m.kind {
            MouseEventKind::ScrollUp => self.scroll.scroll_y_by(-1),
            MouseEventKind::ScrollDown => self.scroll.scroll_y_by(1),
            _ => return false,
        }
        before != self.scroll.y
    }

    /// Draws the side panel and the selected page.
    ///
    /// `render_page` receives the selected index and the content area every frame; the area is
    /// cleared beforehand so nothing from a previously selected page survives.
    pub fn render<M, H, F>(&mut self, area: Rect, host: &mut H, theme: &Theme, render_page: F)
    where
        M: From<NavAction>,
        H: Host<M>,
        F: FnOnce(usize, Rect, &mut H),
    {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let panel_w = self.options.panel_width.min(area.width);
        let panel = Rect::new(area.x, area.y, panel_w, area.height);
        let content = Rect::new(
            area.x + panel_w,
            area.y,
            area.width - panel_w,
            area.height,
        );

        self.render_panel(panel, host, theme);

        Clear.render(content, host.buffer_mut());
        if !content.is_empty() {
            render_page(self.state.selected(), content, host);
        }
    }

    fn render_panel<M, H>(&mut self, panel: Rect, host: &mut H, theme: &Theme)
    where
        M: From<NavAction>,
        H: Host<M>,
    {
        let mut inner = panel;
        if self.options.show_border {
            let block = Block::default()
                .borders(Borders::RIGHT)
                .border_style(theme.panel_border);
            inner = block.inner(panel);
            block.render(panel, host.buffer_mut());
        }
        if inner.is_empty() {
            self.list_area = Rect::default();
            return;
        }

        let mut rows = inner;
        if self.options.show_header {
            let header = take_row(&mut rows);
            host.container(
                header,
                &Visual::new(self.header_line())
                    .styled(theme.text_muted)
                    .padded(1),
            );
        }
        if self.state.depth() > 0 && !rows.is_empty() {
            let back = take_row(&mut rows);
            host.clickable(
                back,
                &Visual::new(self.options.back_label.clone())
                    .styled(theme.back)
                    .padded(1),
                M::from(NavAction::Back),
            );
        }

        let entries = self.entries();
        self.scroll.set_viewport(rows.height);
        self.scroll.set_content(entries.len() as u32);

        let (list, scrollbar) =
            if self.options.show_scrollbar && self.scroll.is_scrollable() && rows.width >= 2 {
                (
                    Rect::new(rows.x, rows.y, rows.width - 1, rows.height),
                    Some(Rect::new(rows.x + rows.width - 1, rows.y, 1, rows.height)),
                )
            } else {
                (rows, None)
            };
        self.list_area = rows;

        let start = self.scroll.y as usize;
        for (row, entry) in entries
            .into_iter()
            .skip(start)
            .take(list.height as usize)
            .enumerate()
        {
            let row_area = Rect::new(list.x, list.y + row as u16, list.width, 1);
            match entry {
                FilteredEntry::Leaf { caption, index } => {
                    let style = if index == self.state.selected() {
                        theme.item_active
                    } else {
                        theme.item
                    };
                    host.clickable(
                        row_area,
                        &Visual::new(caption).styled(style).padded(1),
                        M::from(NavAction::Select(index)),
                    );
                }
                FilteredEntry::Category { caption } => {
                    let line = Line::from(vec![
                        Span::raw(caption.clone()),
                        Span::raw(" "),
                        Span::styled(self.options.category_marker.clone(), theme.text_muted),
                    ]);
                    host.clickable(
                        row_area,
                        &Visual::new(line).styled(theme.category).padded(1),
                        M::from(NavAction::Enter(caption)),
                    );
                }
            }
        }

        if let Some(sb) = scrollbar {
            render::render_scrollbar(sb, host.buffer_mut(), &self.scroll, theme.text_muted);
        }
    }

    fn header_line(&self) -> String {
        if self.state.depth() == 0 {
            self.options.root_label.clone()
        } else {
            self.state.drill_path().join(" / ")
        }
    }
}

fn take_row(area: &mut Rect) -> Rect {
    let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
    area.y += row.height;
    area.height -= row.height;
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseEvent;
    use crate::render::row_text;
    use crate::surface::HitMap;
    use crate::surface::Surface;
    use ratatui::buffer::Buffer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn gallery() -> PageRegistry {
        PageRegistry::new([
            vec!["Home"],
            vec!["Foundation", "Stateless Buttons"],
            vec!["Foundation", "Stateful Buttons"],
        ])
        .unwrap()
    }

    fn plain_options() -> NavigatorOptions {
        NavigatorOptions {
            panel_width: 20,
            show_border: false,
            ..Default::default()
        }
    }

    fn draw(nav: &mut Navigator, hits: &mut HitMap<NavAction>) -> Buffer {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let mut surface = Surface::new(&mut buf, hits);
        nav.render(area, &mut surface, &Theme::default(), |index, area, host| {
            // One row so the label lands on the first line instead of being centred.
            let first = Rect::new(area.x, area.y, area.width, 1);
            host.container(first, &Visual::new(format!("page {index}")));
        });
        buf
    }

    #[test]
    fn initial_state_is_root_with_first_page() {
        let nav = Navigator::new(gallery());
        assert!(nav.drill_path().is_empty());
        assert_eq!(nav.selected(), 0);
        assert_eq!(nav.selected_page().unwrap().title(), "Home");
    }

    #[test]
    fn enter_then_back_restores_entries() {
        let mut nav = Navigator::new(gallery());
        let before = nav.entries();

        assert!(nav.apply(NavAction::Enter("Foundation".into())));
        assert_eq!(nav.drill_path(), ["Foundation"]);
        assert_eq!(nav.entries().len(), 2);

        assert!(nav.apply(NavAction::Back));
        assert!(nav.drill_path().is_empty());
        assert_eq!(nav.entries(), before);
    }

    #[test]
    fn select_keeps_drill_path() {
        let mut nav = Navigator::new(gallery());
        nav.apply(NavAction::Enter("Foundation".into()));
        assert!(nav.apply(NavAction::Select(2)));
        assert_eq!(nav.selected(), 2);
        assert_eq!(nav.drill_path(), ["Foundation"]);

        // Selecting is independent of the level currently shown.
        nav.apply(NavAction::Back);
        assert_eq!(nav.selected(), 2);
        assert!(!nav.apply(NavAction::Select(2)));
    }

    #[test]
    fn back_at_root_is_noop() {
        let mut state = NavigatorState::new();
        assert_eq!(state.pop(), None);
        assert!(!state.apply(NavAction::Back));
        assert!(state.drill_path().is_empty());
    }

    #[test]
    fn enter_requires_offered_category() {
        let mut nav = Navigator::new(gallery());
        assert!(!nav.apply(NavAction::Enter("Home".into())));
        assert!(!nav.apply(NavAction::Enter("Missing".into())));
        assert!(nav.drill_path().is_empty());

        nav.apply(NavAction::Enter("Foundation".into()));
        assert!(!nav.apply(NavAction::Enter("Foundation".into())));
        assert_eq!(nav.drill_path(), ["Foundation"]);
    }

    #[test]
    fn observers_run_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut nav = Navigator::new(gallery());
        let sink = seen.clone();
        nav.subscribe(move |s| sink.borrow_mut().push((s.depth(), s.selected())));

        nav.apply(NavAction::Select(0));
        nav.apply(NavAction::Back);
        nav.apply(NavAction::Enter("Foundation".into()));
        nav.apply(NavAction::Select(1));
        nav.apply(NavAction::Back);

        assert_eq!(*seen.borrow(), vec![(1, 0), (1, 1), (0, 1)]);
    }

    #[test]
    fn root_panel_has_no_back_control() {
        let mut nav = Navigator::with_options(gallery(), plain_options());
        let mut hits = HitMap::new();
        let buf = draw(&mut nav, &mut hits);
        let area = buf.area;

        assert!(row_text(&buf, area, 0).starts_with(" Home"));
        assert!(row_text(&buf, area, 1).starts_with(" Foundation ›"));
        assert!(row_text(&buf, area, 0).contains("page 0"));
        assert!(hits.regions().all(|(_, m)| *m != NavAction::Back));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn clicks_drive_navigation() {
        let mut nav = Navigator::with_options(gallery(), plain_options());
        let mut hits = HitMap::new();
        draw(&mut nav, &mut hits);

        let action = hits.resolve(&MouseEvent::click(3, 1)).unwrap();
        assert_eq!(action, NavAction::Enter("Foundation".into()));
        nav.apply(action);

        let buf = draw(&mut nav, &mut hits);
        assert!(row_text(&buf, buf.area, 0).starts_with(" ‹ Back"));
        assert!(row_text(&buf, buf.area, 1).starts_with(" Stateless Buttons"));
        assert!(row_text(&buf, buf.area, 2).starts_with(" Stateful Buttons"));

        let action = hits.resolve(&MouseEvent::click(3, 2)).unwrap();
        assert_eq!(action, NavAction::Select(2));
        nav.apply(action);

        let buf = draw(&mut nav, &mut hits);
        assert!(row_text(&buf, buf.area, 0).contains("page 2"));
        assert_eq!(buf[(1, 2)].style(), Theme::default().item_active);

        nav.apply(hits.resolve(&MouseEvent::click(0, 0)).unwrap());
        assert!(nav.drill_path().is_empty());
    }

    #[test]
    fn content_is_cleared_between_pages() {
        let mut nav = Navigator::with_options(gallery(), plain_options());
        let mut hits: HitMap<NavAction> = HitMap::new();
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        {
            let mut surface = Surface::new(&mut buf, &mut hits);
            nav.render(area, &mut surface, &Theme::default(), |_, area, host| {
                host.container(area, &Visual::new("a long first page"));
            });
        }
        nav.apply(NavAction::Select(1));
        {
            let mut surface = Surface::new(&mut buf, &mut hits);
            nav.render(area, &mut surface, &Theme::default(), |_, _, _| {});
        }
        assert_eq!(row_text(&buf, Rect::new(20, 0, 20, 2), 0).trim(), "");
    }

    #[test]
    fn page_gets_the_full_content_area() {
        let mut nav = Navigator::with_options(gallery(), plain_options());
        let mut hits: HitMap<NavAction> = HitMap::new();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let mut seen = None;
        nav.render(
            area,
            &mut Surface::new(&mut buf, &mut hits),
            &Theme::default(),
            |index, content, host| {
                seen = Some((index, content));
                host.container(content, &Visual::new("body"));
            },
        );
        assert_eq!(seen, Some((0, Rect::new(20, 0, 20, 4))));
        // Single-line visuals are centred vertically in taller regions.
        assert!(row_text(&buf, area, 1).contains("body"));
        assert!(!row_text(&buf, area, 0).contains("body"));
    }

    #[test]
    fn header_shows_drill_path() {
        let mut nav = Navigator::with_options(
            gallery(),
            NavigatorOptions {
                show_header: true,
                ..plain_options()
            },
        );
        let mut hits = HitMap::new();
        let buf = draw(&mut nav, &mut hits);
        assert!(row_text(&buf, buf.area, 0).starts_with(" Pages"));

        nav.apply(NavAction::Enter("Foundation".into()));
        let buf = draw(&mut nav, &mut hits);
        assert!(row_text(&buf, buf.area, 0).starts_with(" Foundation"));
        assert!(row_text(&buf, buf.area, 1).starts_with(" ‹ Back"));
    }

    #[test]
    fn wheel_scrolls_long_lists() {
        let pages: Vec<Vec<String>> = (0..10).map(|i| vec![format!("Page {i}")]).collect();
        let mut nav = Navigator::with_options(PageRegistry::new(pages).unwrap(), plain_options());
        let mut hits = HitMap::new();
        draw(&mut nav, &mut hits);

        let down = InputEvent::Mouse(MouseEvent::new(1, 1, MouseEventKind::ScrollDown));
        assert!(nav.handle_event(&down));
        let buf = draw(&mut nav, &mut hits);
        assert!(row_text(&buf, buf.area, 0).starts_with(" Page 1"));

        let outside = InputEvent::Mouse(MouseEvent::new(30, 1, MouseEventKind::ScrollDown));
        assert!(!nav.handle_event(&outside));
    }

    #[test]
    fn empty_registry_renders_page_zero() {
        let mut nav = Navigator::with_options(PageRegistry::default(), plain_options());
        let mut hits = HitMap::new();
        let buf = draw(&mut nav, &mut hits);
        assert!(hits.is_empty());
        assert!(row_text(&buf, buf.area, 0).contains("page 0"));
        assert_eq!(nav.selected_page(), None);
    }
}
