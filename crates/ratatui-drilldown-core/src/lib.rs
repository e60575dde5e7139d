//! `ratatui-drilldown-core` provides the navigation core behind `ratatui-drilldown`.
//!
//! A flat list of pages, each identified by a multi-segment path, is presented as a drill-down
//! tree: the side panel shows the pages and groups of one level, clicking a group descends into it,
//! a back control ascends, and clicking a page selects it for the content panel.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: all components run on the main thread.
//! - Components never handle clicks themselves. They describe clickable regions to a
//!   [`host::Host`] together with a message; the app maps the message back onto its state.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-drilldown`, which also ships a small set
//! of stateless widgets. Useful entry points here:
//! - [`registry::PageRegistry`]: validated, immutable list of page paths.
//! - [`path_filter::filter`]: the entries visible at one level.
//! - [`navigator::Navigator`]: side panel + content panel with drill-down state.
//! - [`surface::Surface`] / [`surface::HitMap`]: the ratatui host and its click resolution.
//! - [`config::Config`]: TOML configuration for layout, colors and pages.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod config;
pub mod host;
pub mod input;
pub mod navigator;
pub mod path_filter;
pub mod registry;
pub mod render;
pub mod surface;
pub mod viewport;
