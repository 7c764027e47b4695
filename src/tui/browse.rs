//! Interactive skill browser TUI using ratatui.
//!
//! Search box, category pills, a cards/cloud view toggle and the empty state
//! with its clear action. All filtering goes through [`SkillsBrowser`]; this
//! module only maps keys to its mutators and draws what it derives.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::debug;

use crate::browser::{
    ColorBand, IconProvider, ProficiencyTable, SkillsBrowser, ViewMode, VisibleCategory,
    empty_state_message, skill_count_label,
};
use crate::error::{FolioError, Result};

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

/// TUI application state.
pub struct BrowseTui {
    browser: SkillsBrowser,
    proficiency: ProficiencyTable,
    featured: Vec<String>,
    icons: Box<dyn IconProvider>,
    /// Whether the search box has focus
    search_focused: bool,
    show_help: bool,
    status_message: Option<String>,
    /// Rows (cards) or lines (cloud) scrolled past
    scroll: u16,
    /// Browser revision the scroll offset belongs to
    seen_revision: u64,
}

impl BrowseTui {
    #[must_use]
    pub fn new(
        browser: SkillsBrowser,
        proficiency: ProficiencyTable,
        featured: Vec<String>,
        icons: Box<dyn IconProvider>,
    ) -> Self {
        let seen_revision = browser.revision();
        Self {
            browser,
            proficiency,
            featured,
            icons,
            search_focused: false,
            show_help: false,
            status_message: None,
            scroll: 0,
            seen_revision,
        }
    }

    #[must_use]
    pub const fn browser(&self) -> &SkillsBrowser {
        &self.browser
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code, key.modifiers) == Action::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        if self.browser.revision() != self.seen_revision {
            self.seen_revision = self.browser.revision();
            self.scroll = 0;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Search bar
                Constraint::Length(1), // Category pills + view toggle
                Constraint::Length(1), // Featured skills
                Constraint::Min(5),    // Results
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_search_bar(f, chunks[1]);
        f.render_widget(Paragraph::new(self.controls_line()), chunks[2]);
        f.render_widget(Paragraph::new(self.featured_line()), chunks[3]);
        self.draw_results(f, chunks[4]);
        self.draw_help_bar(f, chunks[5]);

        if self.show_help {
            Self::draw_help_overlay(f);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let catalog = self.browser.catalog();
        let status = self
            .status_message
            .as_ref()
            .map(|m| format!(" | {m}"))
            .unwrap_or_default();

        let title = Line::from(vec![
            Span::styled("skillfolio", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | {} skills in {} categories ({} shown){}",
                catalog.total_skills(),
                catalog.len(),
                self.browser.visible_skill_count(),
                status
            )),
        ]);

        f.render_widget(
            Paragraph::new(title).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }

    fn draw_search_bar(&self, f: &mut Frame, area: Rect) {
        let query = &self.browser.state().search_query;
        let border_style = if self.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let search_text = if self.search_focused {
            format!("{query}_")
        } else if query.is_empty() {
            "Type / to search skills (e.g. Docker, AWS, Python...)".to_string()
        } else {
            query.clone()
        };

        let paragraph = Paragraph::new(search_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Search "),
            )
            .style(if query.is_empty() && !self.search_focused {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            });

        f.render_widget(paragraph, area);
    }

    /// Category pills followed by the view toggle.
    fn controls_line(&self) -> Line<'static> {
        let active = &self.browser.state().active_category;
        let mut spans = Vec::new();
        for option in self.browser.catalog().filter_options() {
            let style = if option == *active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", option.label()), style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw("  "));
        for mode in [ViewMode::Cards, ViewMode::Cloud] {
            let label = if mode == ViewMode::Cards { "Cards" } else { "Cloud" };
            let style = if mode == self.browser.view_mode() {
                Style::default().fg(Color::Black).bg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("[{label}]"), style));
        }
        Line::from(spans)
    }

    fn featured_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "Featured: ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        for skill in &self.featured {
            spans.push(Span::styled(
                format!("* {skill}  "),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn draw_results(&self, f: &mut Frame, area: Rect) {
        if self.browser.is_empty() {
            self.draw_empty_state(f, area);
            return;
        }
        match self.browser.view_mode() {
            ViewMode::Cards => self.draw_cards(f, area),
            ViewMode::Cloud => self.draw_cloud(f, area),
        }
    }

    fn draw_cards(&self, f: &mut Frame, area: Rect) {
        let columns = card_columns(area.width);
        let visible = self.browser.visible();
        let rows: Vec<&[VisibleCategory]> = visible.chunks(usize::from(columns)).collect();

        let mut y = area.y;
        for row in rows.iter().skip(usize::from(self.scroll)) {
            let tallest = row.iter().map(|g| g.skills.len()).max().unwrap_or(0);
            let wanted = u16::try_from(tallest + 3).unwrap_or(u16::MAX);
            let remaining = area.bottom().saturating_sub(y);
            if remaining < 3 {
                break;
            }
            let height = wanted.min(remaining);
            let row_area = Rect::new(area.x, y, area.width, height);

            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, u32::from(columns));
                    usize::from(columns)
                ])
                .split(row_area);

            for (group, cell) in row.iter().zip(cells.iter()) {
                f.render_widget(self.card(group), *cell);
            }
            y = y.saturating_add(height);
        }
    }

    fn card(&self, group: &VisibleCategory) -> Paragraph<'static> {
        let mut lines = vec![Line::from(Span::styled(
            skill_count_label(group.skills.len()),
            Style::default().fg(Color::DarkGray),
        ))];
        for skill in &group.skills {
            let mut spans = vec![Span::raw(format!("  {skill}"))];
            if self.proficiency.is_starred(skill) {
                spans.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(format!(
                    " {} {} ",
                    self.icons.resolve(&group.icon),
                    group.category
                )),
        )
    }

    fn draw_cloud(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.cloud_line())
            .block(Block::default().borders(Borders::ALL).title(" Skill Cloud "))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, area);
    }

    /// Every visible skill on one wrapped line, styled by proficiency band.
    fn cloud_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for entry in self.browser.cloud() {
            let style = band_style(self.proficiency.color_band(&entry.skill));
            spans.push(Span::styled(entry.skill.clone(), style));
            if self.proficiency.is_starred(&entry.skill) {
                spans.push(Span::styled("*", Style::default().fg(Color::Yellow)));
            }
            spans.push(Span::raw("   "));
        }
        Line::from(spans)
    }

    fn draw_empty_state(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                empty_state_message(self.browser.state()),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[x] Clear Search",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = if self.search_focused {
            "type to filter  Enter/Esc: done  Backspace: delete"
        } else {
            "/: search  Tab/→ ←: category  v: toggle view  x: clear  j/k: scroll  ?: help  q: quit"
        };

        f.render_widget(
            Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn draw_help_overlay(f: &mut Frame) {
        let area = f.area();

        let help_width = 56.min(area.width.saturating_sub(4));
        let help_height = 18.min(area.height.saturating_sub(4));
        let x = (area.width - help_width) / 2;
        let y = (area.height - help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Filtering:"),
            Line::from("  /            Focus search box"),
            Line::from("  Tab / Right  Next category"),
            Line::from("  S-Tab / Left Previous category"),
            Line::from("  x / Esc      Clear search and category"),
            Line::from(""),
            Line::from("View:"),
            Line::from("  v            Toggle cards / cloud"),
            Line::from("  c / o        Cards / cloud"),
            Line::from("  j k g        Scroll down / up / top"),
            Line::from(""),
            Line::from("Press ? or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, help_area);
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Action::Continue;
        }

        if self.search_focused {
            self.handle_search_key(key);
            return Action::Continue;
        }

        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('/') => {
                self.search_focused = true;
                self.status_message = None;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Right => self.browser.cycle_category(true),
            KeyCode::BackTab | KeyCode::Left => self.browser.cycle_category(false),
            KeyCode::Char('v') => self.browser.toggle_view_mode(),
            KeyCode::Char('c') => self.browser.set_view_mode(ViewMode::Cards),
            KeyCode::Char('o') => self.browser.set_view_mode(ViewMode::Cloud),
            KeyCode::Char('x') | KeyCode::Esc => {
                if !self.browser.state().is_unfiltered() {
                    self.browser.reset();
                    self.status_message = Some("Search cleared".to_string());
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        Action::Continue
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_focused = false;
                let query = &self.browser.state().search_query;
                self.status_message = if query.is_empty() {
                    None
                } else {
                    Some(format!(
                        "{} matches for \"{query}\"",
                        self.browser.visible_skill_count()
                    ))
                };
            }
            KeyCode::Char(c) => self.browser.push_query_char(c),
            KeyCode::Backspace => self.browser.pop_query_char(),
            _ => {}
        }
    }
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the browse TUI until the user quits.
pub fn run_browse_tui(app: BrowseTui) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(FolioError::Terminal(
            "browse requires an interactive terminal; use `skillfolio skills` instead".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    debug!(target: "tui", "browse session started");
    app.run(&mut terminal)
}

/// Cards per row for a given width.
const fn card_columns(width: u16) -> u16 {
    if width >= 96 {
        3
    } else if width >= 60 {
        2
    } else {
        1
    }
}

fn band_style(band: ColorBand) -> Style {
    match band {
        ColorBand::High => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ColorBand::Mid => Style::default().fg(Color::Blue),
        ColorBand::Low => Style::default().fg(Color::Magenta),
    }
}
