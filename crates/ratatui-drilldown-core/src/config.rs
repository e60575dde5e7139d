//! TOML configuration for navigator layout and theme colors.
//!
//! ```toml
//! pages = ["Home", "Foundation/Stateless Buttons"]
//!
//! [navigator]
//! panel-width = 28
//! back-label = "‹ Back"
//! show-header = true
//!
//! [theme]
//! accent = "cyan"
//! item-active-fg = "black"
//! item-active-bg = "#c0c0c0"
//! ```
//!
//! Every key is optional; missing keys keep their defaults. Colors accept anything ratatui's
//! `Color::from_str` does (names, `#rrggbb`, indexed numbers).

use crate::navigator::NavigatorOptions;
use crate::registry::PageRegistry;
use crate::registry::RegistryError;
use crate::theme::Theme;
use ratatui::style::Color;
use ratatui::style::Style;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {value:?} for theme.{key}")]
    InvalidColor { key: &'static str, value: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub navigator: NavigatorConfig,
    pub theme: ThemeConfig,
    /// Slash-separated page paths, see [`PageRegistry::parse`].
    pub pages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NavigatorConfig {
    pub panel_width: u16,
    pub back_label: String,
    pub category_marker: String,
    pub show_border: bool,
    pub show_scrollbar: bool,
    pub show_header: bool,
    pub root_label: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorOptions::default().into()
    }
}

impl From<NavigatorOptions> for NavigatorConfig {
    fn from(o: NavigatorOptions) -> Self {
        Self {
            panel_width: o.panel_width,
            back_label: o.back_label,
            category_marker: o.category_marker,
            show_border: o.show_border,
            show_scrollbar: o.show_scrollbar,
            show_header: o.show_header,
            root_label: o.root_label,
        }
    }
}

impl From<NavigatorConfig> for NavigatorOptions {
    fn from(c: NavigatorConfig) -> Self {
        Self {
            panel_width: c.panel_width,
            back_label: c.back_label,
            category_marker: c.category_marker,
            show_border: c.show_border,
            show_scrollbar: c.show_scrollbar,
            show_header: c.show_header,
            root_label: c.root_label,
        }
    }
}

/// Color overrides applied on top of [`Theme::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ThemeConfig {
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub item_active_fg: Option<String>,
    pub item_active_bg: Option<String>,
    pub category: Option<String>,
    pub border: Option<String>,
    pub surface_fg: Option<String>,
    pub surface_bg: Option<String>,
    pub outline: Option<String>,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();
        patch_fg(&mut theme.text_primary, "text", &self.text)?;
        patch_fg(&mut theme.item, "text", &self.text)?;
        patch_fg(&mut theme.text_muted, "muted", &self.muted)?;
        patch_fg(&mut theme.back, "muted", &self.muted)?;
        patch_fg(&mut theme.accent, "accent", &self.accent)?;
        patch_fg(&mut theme.item_active, "item-active-fg", &self.item_active_fg)?;
        patch_bg(&mut theme.item_active, "item-active-bg", &self.item_active_bg)?;
        patch_fg(&mut theme.category, "category", &self.category)?;
        patch_fg(&mut theme.panel_border, "border", &self.border)?;
        patch_fg(&mut theme.surface, "surface-fg", &self.surface_fg)?;
        patch_bg(&mut theme.surface, "surface-bg", &self.surface_bg)?;
        patch_fg(&mut theme.outline, "outline", &self.outline)?;
        Ok(theme)
    }
}

fn parse_color(key: &'static str, value: &Option<String>) -> Result<Option<Color>, ConfigError> {
    value
        .as_deref()
        .map(|v| {
            Color::from_str(v.trim()).map_err(|_| ConfigError::InvalidColor {
                key,
                value: v.to_string(),
            })
        })
        .transpose()
}

fn patch_fg(
    style: &mut Style,
    key: &'static str,
    value: &Option<String>,
) -> Result<(), ConfigError> {
    if let Some(c) = parse_color(key, value)? {
        *style = style.fg(c);
    }
    Ok(())
}

fn patch_bg(
    style: &mut Style,
    key: &'static str,
    value: &Option<String>,
) -> Result<(), ConfigError> {
    if let Some(c) = parse_color(key, value)? {
        *style = style.bg(c);
    }
    Ok(())
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        // Fail on bad colors at load time rather than on first draw.
        config.theme.to_theme()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), pages = config.pages.len(), "config loaded");
        Ok(config)
    }

    pub fn navigator_options(&self) -> NavigatorOptions {
        self.navigator.clone().into()
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.theme.to_theme()
    }

    pub fn registry(&self) -> Result<PageRegistry, ConfigError> {
        Ok(PageRegistry::parse(&self.pages)?)
    }
}
