//! Widget gallery driven by the drill-down navigator.
//!
//! ```text
//! cargo run -p ratatui-drilldown --example gallery --features crossterm [config.toml]
//! RUST_LOG=ratatui_drilldown_core=debug ... # logs go to ./gallery.log
//! ```
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui_drilldown::config::Config;
use ratatui_drilldown::crossterm_input::input_event_from_crossterm;
use ratatui_drilldown::host::Host;
use ratatui_drilldown::host::Visual;
use ratatui_drilldown::input::InputEvent;
use ratatui_drilldown::input::KeyCode;
use ratatui_drilldown::navigator::NavAction;
use ratatui_drilldown::navigator::Navigator;
use ratatui_drilldown::navigator::NavigatorOptions;
use ratatui_drilldown::registry::PageRegistry;
use ratatui_drilldown::surface::HitMap;
use ratatui_drilldown::surface::Surface;
use ratatui_drilldown::theme::Theme;
use ratatui_drilldown::widgets::BreadcrumbBar;
use ratatui_drilldown::widgets::Button;
use ratatui_drilldown::widgets::ComboButton;
use ratatui_drilldown::widgets::HintDot;
use ratatui_drilldown::widgets::ProgressBar;
use ratatui_drilldown::widgets::Slider;
use ratatui_drilldown::widgets::TabView;
use ratatui_drilldown::widgets::TextField;
use ratatui_drilldown::widgets::ToggleButton;
use ratatui_drilldown::widgets::ToggleState;
use ratatui_drilldown::widgets::text_field;
use std::io;
use std::time::Duration;

const PAGES: &[&str] = &[
    "Home",
    "Foundation/Stateless Buttons",
    "Foundation/Stateful Buttons",
    "Foundation/Inputs/Text Fields",
    "Foundation/Inputs/Sliders",
    "Feedback/Progress",
    "Layout/Tabs",
];

#[derive(Clone, Debug)]
enum Msg {
    Nav(NavAction),
    Crumb(usize),
    Toggle,
    Focus(usize),
    ComboToggle,
    ComboPick(usize),
    Ratio(f32),
    Tab(usize),
    Noop,
}

impl From<NavAction> for Msg {
    fn from(a: NavAction) -> Self {
        Msg::Nav(a)
    }
}

/// Widget values shown on the pages. The widgets themselves are stateless.
struct Showcase {
    sel: bool,
    texts: [String; 2],
    focused: Option<usize>,
    items: Vec<String>,
    combo: usize,
    combo_open: bool,
    ratio: f32,
    tabs: Vec<String>,
    tab: usize,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            sel: false,
            texts: [String::new(), String::new()],
            focused: None,
            items: (0..=10).map(|i| format!("Item {i}")).collect(),
            combo: 0,
            combo_open: false,
            ratio: 0.0,
            tabs: ["one", "two", "three"].map(String::from).to_vec(),
            tab: 0,
        }
    }
}

struct App {
    nav: Navigator,
    ui: Showcase,
    theme: Theme,
    hits: HitMap<Msg>,
}

fn main() -> io::Result<()> {
    let log_dir = std::env::current_dir()?;
    let (writer, _guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, "gallery.log"));
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut app = load_app(std::env::args().nth(1))?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn load_app(config_path: Option<String>) -> io::Result<App> {
    let config = match config_path {
        Some(path) => Config::load(path).map_err(io::Error::other)?,
        None => Config::default(),
    };
    let registry = if config.pages.is_empty() {
        PageRegistry::parse(PAGES).map_err(io::Error::other)?
    } else {
        config.registry().map_err(io::Error::other)?
    };
    let theme = config.theme().map_err(io::Error::other)?;
    let options = if config.pages.is_empty() {
        NavigatorOptions {
            show_header: true,
            ..config.navigator_options()
        }
    } else {
        config.navigator_options()
    };

    let mut nav = Navigator::with_options(registry, options);
    nav.subscribe(|state| {
        tracing::info!(
            path = ?state.drill_path(),
            selected = state.selected(),
            "navigator changed"
        );
    });

    Ok(App {
        nav,
        ui: Showcase::default(),
        theme,
        hits: HitMap::new(),
    })
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f.area(), f.buffer_mut(), app))?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };

        match &ev {
            InputEvent::Key(key) if app.ui.focused.is_none() && key.code == KeyCode::Char('q') => {
                return Ok(());
            }
            InputEvent::Key(key) if key.code == KeyCode::Esc => {
                if app.ui.focused.take().is_none() {
                    return Ok(());
                }
            }
            InputEvent::Key(_) | InputEvent::Paste(_) => {
                if let Some(i) = app.ui.focused {
                    text_field::edit(&mut app.ui.texts[i], &ev);
                }
            }
            InputEvent::Mouse(_) => {
                if app.nav.handle_event(&ev) {
                    continue;
                }
                if let Some(msg) = app.hits.resolve_event(&ev) {
                    update(app, msg);
                }
            }
        }
    }
}

fn update(app: &mut App, msg: Msg) {
    let ui = &mut app.ui;
    match msg {
        Msg::Nav(action) => {
            ui.focused = None;
            ui.combo_open = false;
            app.nav.apply(action);
        }
        Msg::Crumb(depth) => {
            while app.nav.drill_path().len() > depth {
                app.nav.apply(NavAction::Back);
            }
        }
        Msg::Toggle => ui.sel = !ui.sel,
        Msg::Focus(i) => ui.focused = Some(i),
        Msg::ComboToggle => ui.combo_open = !ui.combo_open,
        Msg::ComboPick(i) => {
            ui.combo = i;
            ui.combo_open = false;
        }
        Msg::Ratio(r) => ui.ratio = r,
        Msg::Tab(i) => ui.tab = i,
        Msg::Noop => {}
    }
}

fn draw(area: Rect, buf: &mut ratatui::buffer::Buffer, app: &mut App) {
    let App {
        nav,
        ui,
        theme,
        hits,
    } = app;
    let theme: &Theme = theme;
    let [main, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let mut crumbs = vec!["Pages".to_string()];
    crumbs.extend(nav.drill_path().iter().cloned());

    let mut host = Surface::new(buf, hits);
    nav.render(main, &mut host, theme, |page, area, host| {
        ui.render_page(page, area, host, theme);
    });
    BreadcrumbBar::new(&crumbs, Msg::Crumb).render(status, &mut host, theme);
}

impl Showcase {
    fn render_page(&self, page: usize, area: Rect, host: &mut Surface<'_, Msg>, theme: &Theme) {
        let area = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
        let rows = Layout::vertical([Constraint::Length(1); 16]).split(area);
        let row = |i: usize| rows.get(i).copied().unwrap_or_default();

        match page {
            0 => {
                let rest = Button::new("Button", Msg::Noop).render(row(0), host, theme);
                let outline = Button::new("Button", Msg::Noop).outline();
                let rest = skip(outline.render(rest, host, theme));
                HintDot::new(self.sel, Color::Red, "Hint").render(rest, host, theme);
                TextField::new(&self.texts[0], self.focused == Some(0), Msg::Focus(0))
                    .placeholder("type here")
                    .render(row(2), host, theme);
                ToggleButton::radio("Radio", self.sel, Msg::Toggle).render(row(4), host, theme);
                ToggleButton::check("Check", self.sel, Msg::Toggle).render(row(5), host, theme);
                let tri = if self.sel {
                    ToggleState::Indeterminate
                } else {
                    ToggleState::Off
                };
                ToggleButton::tristate("Check", tri, Msg::Toggle).render(row(6), host, theme);
                Slider::new(self.ratio, Msg::Ratio).render(width(row(8), 30), host, theme);
                ProgressBar::new(self.ratio).render(width(row(9), 30), host, theme);
                let tabs_area = Rect::new(area.x, row(11).y, area.width, 2);
                TabView::new(&self.tabs, self.tab, Msg::Tab).render(
                    tabs_area,
                    host,
                    theme,
                    |tab, body, host| {
                        host.container(body, &Visual::new(format!("Content of tab {}", tab + 1)));
                    },
                );
                // Drawn last so the open list paints over the rows below.
                let combo = ComboButton::new(
                    &self.items,
                    self.combo,
                    self.combo_open,
                    Msg::ComboToggle,
                    Msg::ComboPick,
                );
                let h = combo.height();
                combo.render(Rect::new(row(13).x, row(13).y, area.width, h), host, theme);
            }
            1 => {
                let rest = skip(Button::new("Save", Msg::Noop).render(row(0), host, theme));
                let outline = Button::new("Cancel", Msg::Noop).outline();
                let rest = skip(outline.render(rest, host, theme));
                Button::new("Apply", Msg::Noop).render(rest, host, theme);
            }
            2 => {
                ToggleButton::radio("Radio", self.sel, Msg::Toggle).render(row(0), host, theme);
                ToggleButton::check("Check", self.sel, Msg::Toggle).render(row(1), host, theme);
                let rest = Button::new("Toggle", Msg::Toggle).render(row(3), host, theme);
                HintDot::new(self.sel, Color::Green, "On").render(skip(rest), host, theme);
            }
            3 => {
                for (i, text) in self.texts.iter().enumerate() {
                    TextField::new(text, self.focused == Some(i), Msg::Focus(i))
                        .placeholder("click to type")
                        .render(width(row(i * 2), 30), host, theme);
                }
            }
            4 => {
                Slider::new(self.ratio, Msg::Ratio).render(width(row(0), 40), host, theme);
                host.container(row(1), &Visual::new(format!("{:.0}%", self.ratio * 100.0)));
            }
            5 => {
                ProgressBar::new(self.ratio).render(width(row(0), 40), host, theme);
                ProgressBar::new(1.0 - self.ratio).render(width(row(2), 40), host, theme);
            }
            6 => {
                TabView::new(&self.tabs, self.tab, Msg::Tab).render(
                    area,
                    host,
                    theme,
                    |tab, body, host| {
                        host.container(body, &Visual::new(format!("This is tab {}", tab + 1)));
                    },
                );
            }
            other => {
                host.container(
                    row(0),
                    &Visual::new(format!("No page at index {other}")).styled(theme.text_muted),
                );
            }
        }
    }
}

fn skip(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y,
        area.width.saturating_sub(1),
        area.height,
    )
}

fn width(area: Rect, w: u16) -> Rect {
    Rect::new(area.x, area.y, area.width.min(w), area.height)
}
