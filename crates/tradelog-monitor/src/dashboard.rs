//! Journal dashboard using ratatui.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};
use tradelog_config::{Language, Theme};
use tradelog_core::{Journal, TradeMode};
use tradelog_stats::{profit_loss, JournalStats};

use crate::{Palette, Translations};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Dashboard state. Owns the journal for the session.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub journal: Journal,
    pub language: Language,
    pub theme: Theme,
    /// Text typed into the input line
    pub input: String,
    /// Last warning shown to the user
    pub warning: Option<String>,
    /// Waiting for y/n after a clear-history request
    pub confirm_clear: bool,
}

impl DashboardState {
    /// Create state for a loaded journal.
    pub fn new(journal: Journal, language: Language, theme: Theme) -> Self {
        Self {
            journal,
            language,
            theme,
            input: String::new(),
            warning: None,
            confirm_clear: false,
        }
    }

    fn translations(&self) -> &'static Translations {
        Translations::get(self.language)
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }

        if self.confirm_clear {
            self.confirm_clear = false;
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.journal.clear();
                self.warning = None;
                info!(mode = %self.journal.mode, "history cleared from dashboard");
            }
            return Control::Continue;
        }

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::F(2) => self.language = self.language.toggle(),
            KeyCode::F(3) => self.theme = self.theme.toggle(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.confirm_clear = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }

        Control::Continue
    }

    /// Record the input line as a new trade.
    pub fn submit(&mut self) {
        match self.journal.record_input(&self.input) {
            Ok(outcome) => {
                info!(outcome, trades = self.journal.len(), "recorded trade");
                self.input.clear();
                self.warning = None;
            }
            Err(e) => {
                warn!(input = %self.input, error = %e, "rejected trade entry");
                self.warning = Some(self.translations().entry_error(&e));
            }
        }
    }
}

/// TUI Dashboard.
pub struct Dashboard {
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard until the user quits.
    pub fn run(&self, state: &mut DashboardState) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, state);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut DashboardState,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f, state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if state.handle_key(key) == Control::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Draw one frame.
    pub fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let t = Translations::get(state.language);
        let palette = Palette::for_theme(state.theme);
        let stats = JournalStats::compute(&state.journal);

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            frame.area(),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Body
                Constraint::Length(3), // Status
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 5),
                Constraint::Ratio(3, 5),
                Constraint::Ratio(1, 5),
            ])
            .split(rows[1]);

        self.render_title(frame, rows[0], state, t, &palette);
        self.render_trades(frame, columns[0], state, t, &palette);
        self.render_chart(frame, columns[1], &stats, t, &palette);
        self.render_side(frame, columns[2], state, &stats, t, &palette);
        self.render_status(frame, rows[2], state, t, &palette);
    }

    fn render_title(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        t: &Translations,
        palette: &Palette,
    ) {
        let title = Paragraph::new(Line::from(vec![Span::styled(
            t.title(state.journal.mode),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn render_trades(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        t: &Translations,
        palette: &Palette,
    ) {
        let mode = state.journal.mode;
        let items: Vec<ListItem> = state
            .journal
            .outcomes()
            .iter()
            .enumerate()
            .map(|(i, &outcome)| {
                let signed = match mode {
                    TradeMode::Standard => outcome,
                    TradeMode::RiskReward => {
                        profit_loss(outcome, state.journal.risk_settings().risk_per_trade)
                    }
                };
                ListItem::new(t.trade_item(mode, i + 1, outcome))
                    .style(Style::default().fg(palette.signed(signed)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(t.trade_record),
        );
        frame.render_widget(list, area);
    }

    fn render_chart(
        &self,
        frame: &mut Frame,
        area: Rect,
        stats: &JournalStats,
        t: &Translations,
        palette: &Palette,
    ) {
        // Trades are numbered from 1 on the x axis
        let points: Vec<(f64, f64)> = stats
            .display_curve()
            .into_iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as f64, v))
            .collect();

        let x_max = points.len().max(1) as f64;
        let (y_min, y_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
                (lo.min(v), hi.max(v))
            });
        let (y_lower, y_upper) = if points.is_empty() {
            (0.0, 1.0)
        } else {
            let range = y_max - y_min;
            let pad = if range > 0.0 { range * 0.05 } else { y_max.abs().max(1.0) * 0.05 };
            (y_min - pad, y_max + pad)
        };

        let datasets = vec![Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.accent))
            .data(&points)];

        let x_labels = vec![
            Span::raw("1"),
            Span::raw(format!("{}", x_max as usize)),
        ];
        let y_labels = vec![
            Span::raw(format!("{:.2}", y_lower)),
            Span::raw(format!("{:.2}", (y_lower + y_upper) / 2.0)),
            Span::raw(format!("{:.2}", y_upper)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(t.chart_title(stats.mode))
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(t.x_label, Style::default().fg(palette.muted)))
                    .style(Style::default().fg(palette.muted))
                    .bounds([1.0, x_max.max(2.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        t.y_label(stats.mode),
                        Style::default().fg(palette.muted),
                    ))
                    .style(Style::default().fg(palette.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_side(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        stats: &JournalStats,
        t: &Translations,
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(6)])
            .split(area);

        let input = Paragraph::new(vec![
            Line::from(t.prompt(state.journal.mode)),
            Line::from(Span::styled(
                format!("> {}", state.input),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(t.submit));
        frame.render_widget(input, chunks[0]);

        let headline_colour = match stats.mode {
            TradeMode::Standard => palette.signed(stats.headline),
            TradeMode::RiskReward => {
                palette.signed(stats.headline - state.journal.risk_settings().initial_capital)
            }
        };
        let lines: Vec<Line> = t
            .metric_lines(stats)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    Style::default().fg(headline_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        let metrics = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(metrics, chunks[1]);
    }

    fn render_status(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        t: &Translations,
        palette: &Palette,
    ) {
        let line = if state.confirm_clear {
            Line::from(Span::styled(
                format!("{}: {} (y/N)", t.clear_history, t.confirm_clear_history),
                Style::default().fg(palette.negative).add_modifier(Modifier::BOLD),
            ))
        } else if let Some(warning) = &state.warning {
            Line::from(Span::styled(
                warning.as_str(),
                Style::default().fg(palette.negative),
            ))
        } else {
            Line::from(Span::styled(t.key_hints, Style::default().fg(palette.muted)))
        };

        let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use tradelog_core::RiskSettings;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            state.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn standard_state() -> DashboardState {
        DashboardState::new(Journal::standard(), Language::English, Theme::Light)
    }

    #[test]
    fn test_submit_records_percent() {
        let mut state = standard_state();
        type_text(&mut state, "5");
        assert_eq!(state.handle_key(press(KeyCode::Enter)), Control::Continue);

        assert_eq!(state.journal.len(), 1);
        assert!((state.journal.outcomes()[0] - 0.05).abs() < 1e-12);
        assert!(state.input.is_empty());
        assert!(state.warning.is_none());
    }

    #[test]
    fn test_invalid_input_warns_and_keeps_text() {
        let mut state = standard_state();
        type_text(&mut state, "abc");
        state.handle_key(press(KeyCode::Enter));

        assert!(state.journal.is_empty());
        assert_eq!(state.input, "abc");
        assert_eq!(
            state.warning.as_deref(),
            Some("Input Error: Please enter a valid number.")
        );
    }

    #[test]
    fn test_negative_multiple_warning() {
        let journal = Journal::risk_reward(RiskSettings::default());
        let mut state = DashboardState::new(journal, Language::English, Theme::Dark);
        type_text(&mut state, "-2");
        state.handle_key(press(KeyCode::Enter));

        assert!(state.journal.is_empty());
        assert_eq!(
            state.warning.as_deref(),
            Some("Input Error: Risk-reward ratio cannot be negative.")
        );
    }

    #[test]
    fn test_backspace_and_toggles() {
        let mut state = standard_state();
        type_text(&mut state, "12");
        state.handle_key(press(KeyCode::Backspace));
        assert_eq!(state.input, "1");

        state.handle_key(press(KeyCode::F(2)));
        assert_eq!(state.language, Language::Chinese);
        state.handle_key(press(KeyCode::F(3)));
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut state = DashboardState::new(
            Journal::standard().with_returns(vec![0.1, 0.2]),
            Language::English,
            Theme::Light,
        );
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);

        state.handle_key(ctrl_l);
        assert!(state.confirm_clear);
        state.handle_key(press(KeyCode::Char('n')));
        assert!(!state.confirm_clear);
        assert_eq!(state.journal.len(), 2);

        state.handle_key(ctrl_l);
        state.handle_key(press(KeyCode::Char('y')));
        assert!(state.journal.is_empty());
        // Confirmation keys are not typed into the input
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = standard_state();
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Control::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(ctrl_c), Control::Quit);
    }

    #[test]
    fn test_renders_empty_and_filled_journals() {
        let dashboard = Dashboard::default();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();

        let empty = standard_state();
        terminal.draw(|f| dashboard.ui(f, &empty)).unwrap();

        let settings = RiskSettings::new(1000.0, 100.0).unwrap();
        let filled = DashboardState::new(
            Journal::risk_reward(settings).with_returns(vec![2.0, 0.0, 3.0, 1.0]),
            Language::Chinese,
            Theme::Dark,
        );
        terminal.draw(|f| dashboard.ui(f, &filled)).unwrap();

        let flat = DashboardState::new(
            Journal::standard().with_returns(vec![0.0, 0.0]),
            Language::English,
            Theme::Light,
        );
        terminal.draw(|f| dashboard.ui(f, &flat)).unwrap();
    }
}
