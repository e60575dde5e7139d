use ratatui::style::Style;

/// Styles handed to the host together with every visual.
///
/// Components never hardcode colors: the navigator and the widgets pick one of these styles and
/// pass it along inside the [`crate::host::Visual`] they emit.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    /// Leaf entry whose index equals the selected page.
    pub item_active: Style,
    pub item: Style,
    pub category: Style,
    pub back: Style,
    pub panel_border: Style,
    /// Filled surfaces: buttons, field backgrounds, slider knob.
    pub surface: Style,
    /// Outlined surfaces and inactive track/indicator colors.
    pub outline: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            item_active: Style::default().black().on_gray().bold(),
            item: Style::default(),
            category: Style::default().bold(),
            back: Style::default().dark_gray(),
            panel_border: Style::default().dark_gray(),
            surface: Style::default().black().on_gray(),
            outline: Style::default().gray(),
        }
    }
}
