//! Drill-down page navigation and a small widget set for ratatui.
//!
//! This is the facade crate: it re-exports `ratatui-drilldown-core` and adds [`widgets`], thin
//! stateless components (buttons, toggles, text field, combo box, slider, progress bar,
//! breadcrumbs, tabs) drawn through the same [`host::Host`] capabilities as the navigator.
//!
//! ## Event flow
//!
//! 1. Draw: create a [`surface::Surface`] over the frame buffer and your [`surface::HitMap`],
//!    then render the [`navigator::Navigator`] and any widgets. Each clickable region is recorded
//!    with the message you supplied.
//! 2. Input: resolve pointer events with [`surface::HitMap::resolve`] and update your state from
//!    the returned message. Navigation messages go to [`navigator::Navigator::apply`].
//! 3. Draw again.
//!
//! Your message type only needs `From<NavAction>` to host a navigator:
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui_drilldown::host::{Host, Visual};
//! use ratatui_drilldown::input::MouseEvent;
//! use ratatui_drilldown::navigator::{NavAction, Navigator};
//! use ratatui_drilldown::registry::PageRegistry;
//! use ratatui_drilldown::surface::{HitMap, Surface};
//! use ratatui_drilldown::theme::Theme;
//!
//! #[derive(Clone)]
//! enum Msg {
//!     Nav(NavAction),
//! }
//!
//! impl From<NavAction> for Msg {
//!     fn from(a: NavAction) -> Self {
//!         Msg::Nav(a)
//!     }
//! }
//!
//! let registry = PageRegistry::new([vec!["Home"], vec!["Foundation", "Buttons"]]).unwrap();
//! let mut nav = Navigator::new(registry);
//! let mut hits = HitMap::new();
//! let area = Rect::new(0, 0, 60, 10);
//! let mut buf = Buffer::empty(area);
//!
//! nav.render(area, &mut Surface::new(&mut buf, &mut hits), &Theme::default(), |page, area, host| {
//!     host.container(area, &Visual::new(format!("page {page}")));
//! });
//!
//! if let Some(Msg::Nav(action)) = hits.resolve(&MouseEvent::click(2, 1)) {
//!     nav.apply(action);
//! }
//! assert_eq!(nav.drill_path(), ["Foundation"]);
//! ```
pub use ratatui_drilldown_core::config;
pub use ratatui_drilldown_core::host;
pub use ratatui_drilldown_core::input;
pub use ratatui_drilldown_core::navigator;
pub use ratatui_drilldown_core::path_filter;
pub use ratatui_drilldown_core::registry;
pub use ratatui_drilldown_core::render;
pub use ratatui_drilldown_core::surface;
pub use ratatui_drilldown_core::theme;
pub use ratatui_drilldown_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_drilldown_core::crossterm_input;

pub mod widgets;
