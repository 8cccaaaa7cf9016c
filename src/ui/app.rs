//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap,
    },
    Frame,
};

use crate::haven::{Haven, NoticeKind, Screen};
use crate::quiz::{QUESTION_COUNT, MAX_ANSWER};
use crate::storage::all_milestones;
use crate::ui::widgets::{centered_rect, circle_radius, format_clock, CIRCLE_BASE};

/// Soft accent colors
const ACCENT: Color = Color::Rgb(170, 140, 220);
const ACCENT_DIM: Color = Color::Rgb(110, 90, 150);
const CALM_GREEN: Color = Color::Rgb(120, 190, 140);
const WARM_RED: Color = Color::Rgb(220, 110, 110);

/// Truncate a string to fit within max_len characters, adding "…" if truncated
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = text.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

/// Main UI application
pub struct App {
    /// Cursor in the meditation track list
    track_cursor: usize,
    /// Cursor over quiz questions
    question_cursor: usize,
    /// Cursor in the diary entry list
    entry_cursor: usize,
    /// Whether the diary editor has focus
    diary_editing: bool,
    /// Draft text for a new diary entry
    draft: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            track_cursor: 0,
            question_cursor: 0,
            entry_cursor: 0,
            diary_editing: false,
            draft: String::new(),
        }
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle keyboard input, returns true if the app should quit
    pub fn handle_input(&mut self, key: KeyEvent, haven: &mut Haven) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        // The diary editor captures everything while it has focus
        if self.diary_editing && haven.screen() == Screen::Diary {
            self.handle_editor_input(key, haven);
            return Ok(false);
        }

        // Screen switching
        match key.code {
            KeyCode::Tab => {
                haven.set_screen(haven.screen().next());
                return Ok(false);
            }
            KeyCode::BackTab => {
                haven.set_screen(haven.screen().prev());
                return Ok(false);
            }
            KeyCode::Char('q') => {
                haven.quit();
                return Ok(false);
            }
            // Digits jump between screens, except on the quiz where they answer
            KeyCode::Char(c @ '1'..='5') if haven.screen() != Screen::Quiz => {
                let index = c as usize - '1' as usize;
                if let Some(screen) = Screen::ALL.get(index) {
                    haven.set_screen(*screen);
                }
                return Ok(false);
            }
            _ => {}
        }

        match haven.screen() {
            Screen::Home => self.handle_home_input(key, haven),
            Screen::Meditate => self.handle_meditate_input(key, haven),
            Screen::Breathe => self.handle_breathe_input(key, haven),
            Screen::Quiz => self.handle_quiz_input(key, haven),
            Screen::Diary => self.handle_diary_input(key, haven),
        }
        Ok(false)
    }

    fn handle_home_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        match key.code {
            KeyCode::Char('m') => haven.set_screen(Screen::Meditate),
            KeyCode::Char('b') => haven.set_screen(Screen::Breathe),
            KeyCode::Char('a') => haven.set_screen(Screen::Quiz),
            KeyCode::Char('d') => haven.set_screen(Screen::Diary),
            _ => {}
        }
    }

    fn handle_meditate_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        let track_count = haven.library().tracks.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.track_cursor = self.track_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if track_count > 0 && self.track_cursor < track_count - 1 {
                    self.track_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                haven.toggle_meditation(self.track_cursor);
            }
            KeyCode::Char('s') | KeyCode::Esc => {
                if let Some(session) = haven.meditation().session() {
                    let track = session.track;
                    haven.toggle_meditation(track);
                }
            }
            _ => {}
        }
    }

    fn handle_breathe_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => haven.toggle_breathing(),
            KeyCode::Esc => {
                if haven.breathing().is_active() {
                    haven.toggle_breathing();
                }
            }
            _ => {}
        }
    }

    fn handle_quiz_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        // After a submission only a retake changes anything
        if haven.quiz().result().is_some() {
            if key.code == KeyCode::Char('r') {
                haven.retake_quiz();
                self.question_cursor = 0;
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.question_cursor = self.question_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.question_cursor + 1 < QUESTION_COUNT {
                    self.question_cursor += 1;
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                let score = c as u8 - b'1';
                haven.answer_quiz(self.question_cursor, score);
                // Move on to the next question
                if self.question_cursor + 1 < QUESTION_COUNT {
                    self.question_cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                let current = haven.quiz().answer_for(self.question_cursor);
                let score = current.map_or(0, |s| s.saturating_sub(1));
                haven.answer_quiz(self.question_cursor, score);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let current = haven.quiz().answer_for(self.question_cursor);
                let score = current.map_or(0, |s| (s + 1).min(MAX_ANSWER));
                haven.answer_quiz(self.question_cursor, score);
            }
            KeyCode::Enter => {
                haven.submit_quiz();
            }
            KeyCode::Char('r') => {
                haven.retake_quiz();
                self.question_cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_diary_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        let entry_count = haven.journal().len();
        match key.code {
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.diary_editing = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.entry_cursor = self.entry_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if entry_count > 0 && self.entry_cursor < entry_count - 1 {
                    self.entry_cursor += 1;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(entry) = haven.journal().entries().get(self.entry_cursor) {
                    let id = entry.id.clone();
                    haven.delete_entry(&id);
                    let remaining = haven.journal().len();
                    if remaining > 0 && self.entry_cursor >= remaining {
                        self.entry_cursor = remaining - 1;
                    }
                }
            }
            _ => {}
        }
    }

    /// Text input while the diary editor has focus
    fn handle_editor_input(&mut self, key: KeyEvent, haven: &mut Haven) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if haven.compose_entry(&self.draft) {
                    self.draft.clear();
                    self.diary_editing = false;
                    self.entry_cursor = 0;
                }
            }
            KeyCode::Esc => {
                self.diary_editing = false;
            }
            KeyCode::Enter => {
                self.draft.push('\n');
            }
            KeyCode::Backspace => {
                self.draft.pop();
            }
            KeyCode::Char(c) => {
                self.draft.push(c);
            }
            _ => {}
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render(&self, frame: &mut Frame, haven: &Haven) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_tab_bar(frame, haven, chunks[0]);

        match haven.screen() {
            Screen::Home => self.render_home(frame, haven, chunks[1]),
            Screen::Meditate => self.render_meditate(frame, haven, chunks[1]),
            Screen::Breathe => self.render_breathe(frame, haven, chunks[1]),
            Screen::Quiz => self.render_quiz(frame, haven, chunks[1]),
            Screen::Diary => self.render_diary(frame, haven, chunks[1]),
        }

        self.render_footer(frame, haven, chunks[2]);
        self.render_notices(frame, haven);
    }

    fn render_tab_bar(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let titles: Vec<Line> = Screen::ALL
            .iter()
            .map(|s| Line::from(s.title()))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Stillhaven ")
                    .border_style(Style::default().fg(ACCENT_DIM)),
            )
            .select(haven.screen().index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

        frame.render_widget(tabs, area);
    }

    fn render_home(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let welcome = vec![
            Line::from(Span::styled(
                "Welcome to Stillhaven",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("A personal space for managing stress and caring for your mind."),
            Line::from("Everything you write stays on this device."),
        ];
        let welcome_para = Paragraph::new(welcome)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(welcome_para, chunks[0]);

        // Stats on the left, milestones on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let stats = &haven.profile().stats;
        let stat_lines = vec![
            Line::from(""),
            stat_line("Diary entries written", stats.entries_written),
            stat_line("Sessions completed", stats.sessions_completed),
            stat_line(
                "Minutes of meditation",
                (stats.meditation_seconds / 60) as u32,
            ),
            stat_line("Breathing cycles", stats.breathing_cycles),
            stat_line("Assessments taken", stats.quizzes_taken),
        ];
        let stats_para = Paragraph::new(stat_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Practice "),
        );
        frame.render_widget(stats_para, columns[0]);

        let mut milestone_lines = vec![Line::from("")];
        for milestone in all_milestones() {
            let unlocked = haven.profile().has_milestone(milestone.id);
            let (mark, style) = if unlocked {
                ("✓", Style::default().fg(CALM_GREEN))
            } else {
                ("·", Style::default().fg(Color::DarkGray))
            };
            milestone_lines.push(Line::from(vec![
                Span::styled(format!(" {} ", mark), style),
                Span::styled(milestone.name, style),
                Span::styled(
                    format!(" — {}", milestone.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        let milestones_para = Paragraph::new(milestone_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Milestones "),
        );
        frame.render_widget(milestones_para, columns[1]);

        if haven.profile().settings.show_tips {
            let tip = Paragraph::new(Line::from(vec![
                Span::styled("Tip: ", Style::default().fg(ACCENT)),
                Span::styled(haven.tip(), Style::default().fg(Color::Gray)),
            ]))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
            frame.render_widget(tip, chunks[2]);
        }
    }

    fn render_meditate(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(area);

        // Track list
        let mut lines = vec![Line::from("")];
        for (i, track) in haven.library().tracks.tracks.iter().enumerate() {
            let selected = i == self.track_cursor;
            let running = haven.meditation().is_running(i);
            let prefix = if selected { "► " } else { "  " };
            let marker = if running { " ▶ running" } else { "" };

            let title_style = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(
                    prefix,
                    if selected {
                        Style::default().fg(ACCENT)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(format!("{:<20}", track.title), title_style),
                Span::styled(
                    format!("{:>3} min", track.minutes()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(marker, Style::default().fg(CALM_GREEN)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", track.description),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Meditations for calm "),
        );
        frame.render_widget(list, chunks[0]);

        // Active session panel
        let session_block = Block::default()
            .borders(Borders::ALL)
            .title(" Session ");
        if let (Some(session), Some(track)) = (haven.meditation().session(), haven.session_track())
        {
            let inner = session_block.inner(chunks[1]);
            frame.render_widget(session_block, chunks[1]);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(inner);

            let header = Paragraph::new(Line::from(vec![
                Span::styled(
                    track.title.as_str(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "   {} / {}",
                        format_clock(session.elapsed),
                        format_clock(session.duration_secs)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            frame.render_widget(header, rows[0]);

            let guidance = Paragraph::new(Span::styled(
                track.guidance.as_str(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(guidance, rows[1]);

            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(ACCENT).bg(Color::Rgb(40, 35, 55)))
                .ratio(session.progress())
                .label(format!("{} left", format_clock(session.remaining_secs())));
            frame.render_widget(gauge, rows[3]);
        } else {
            let idle = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No session running. Pick a track and press Enter.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(session_block)
            .alignment(Alignment::Center);
            frame.render_widget(idle, chunks[1]);
        }
    }

    fn render_breathe(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        // The breathing circle
        let breathing = haven.breathing();
        let radius = breathing
            .phase()
            .map_or(CIRCLE_BASE, |p| circle_radius(p, breathing.phase_progress()));
        let cue = breathing.phase().map_or("Press Space to begin", |p| p.cue());
        let circle_color = if breathing.is_active() { ACCENT } else { ACCENT_DIM };

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Breathe ")
                    .title_bottom(Line::from(format!(" {} ", cue)).centered()),
            )
            .x_bounds([-40.0, 40.0])
            .y_bounds([-40.0, 40.0])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: circle_color,
                });
            });
        frame.render_widget(canvas, chunks[0]);

        // Relaxation exercise cards
        let mut lines = vec![Line::from("")];
        for exercise in &haven.library().exercises.exercises {
            lines.push(Line::from(Span::styled(
                exercise.title.as_str(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                exercise.description.as_str(),
                Style::default().fg(Color::Gray),
            )));
            for step in &exercise.steps {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", step),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
        }
        let cards = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Relaxation techniques "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(cards, chunks[1]);
    }

    fn render_quiz(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        if let Some(result) = haven.quiz().result() {
            self.render_quiz_result(frame, area, result);
            return;
        }

        let quiz = haven.quiz();
        let bank = &haven.library().questions;

        let mut lines = vec![Line::from("")];
        for (i, question) in bank.questions.iter().enumerate() {
            let selected = i == self.question_cursor;
            let answer = quiz.answer_for(i);
            let prefix = if selected { "► " } else { "  " };

            let prompt_style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    prefix,
                    if selected {
                        Style::default().fg(ACCENT)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(format!("{}. {}", question.id, question.prompt), prompt_style),
            ]));

            // Option row for the highlighted question; a summary elsewhere
            if selected {
                let mut spans = vec![Span::raw("     ")];
                for (j, option) in question.options.iter().enumerate() {
                    let chosen = answer == Some(j as u8);
                    let style = if chosen {
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    spans.push(Span::styled(format!("[{}] {}", j + 1, option), style));
                    spans.push(Span::raw("  "));
                }
                lines.push(Line::from(spans));
            } else if let Some(score) = answer {
                let label = question
                    .options
                    .get(score as usize)
                    .map(String::as_str)
                    .unwrap_or("?");
                lines.push(Line::from(Span::styled(
                    format!("     {}", label),
                    Style::default().fg(CALM_GREEN),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "     not answered",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
        }

        let status = if quiz.is_complete() {
            Span::styled(
                "All questions answered — press Enter to see your result",
                Style::default().fg(CALM_GREEN),
            )
        } else {
            Span::styled(
                format!("{} of {} answered", quiz.answered_count(), bank.len()),
                Style::default().fg(Color::Gray),
            )
        };
        lines.push(Line::from(status));

        let para = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Stress self-assessment "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(para, area);
    }

    fn render_quiz_result(&self, frame: &mut Frame, area: Rect, result: crate::quiz::StressResult) {
        let band_color = match result.band {
            crate::quiz::StressBand::Low => CALM_GREEN,
            crate::quiz::StressBand::Moderate => Color::Rgb(200, 190, 120),
            crate::quiz::StressBand::Elevated => Color::Rgb(220, 160, 90),
            crate::quiz::StressBand::High => WARM_RED,
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your result",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{}%", result.percent),
                    Style::default().fg(band_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" — ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} stress", result.band.name()),
                    Style::default().fg(band_color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(result.band.advice(), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "[R] Retake the assessment",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let popup = centered_rect(70, 60, area);
        let para = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Stress self-assessment ")
                    .border_style(Style::default().fg(band_color)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, popup);
        frame.render_widget(para, popup);
    }

    fn render_diary(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(6)])
            .split(area);

        // Editor
        let editor_style = if self.diary_editing {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(ACCENT_DIM)
        };
        let editor_title = if self.diary_editing {
            " New entry (Ctrl+S save, Esc done) "
        } else {
            " New entry (press E to write) "
        };

        let mut draft_text = if self.draft.is_empty() && !self.diary_editing {
            "How are you feeling today? Write your thoughts down...".to_string()
        } else {
            self.draft.clone()
        };
        if self.diary_editing {
            draft_text.push('▌');
        }
        let draft_style = if self.draft.is_empty() && !self.diary_editing {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let editor = Paragraph::new(draft_text)
            .style(draft_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(editor_title)
                    .border_style(editor_style),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(editor, chunks[0]);

        // Entry list
        let journal = haven.journal();
        if journal.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No entries yet. Start your diary!",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).title(" Your entries "))
            .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let width = chunks[1].width.saturating_sub(6) as usize;
        let mut lines = Vec::new();
        for (i, entry) in journal.entries().iter().enumerate() {
            let selected = i == self.entry_cursor && !self.diary_editing;
            let prefix = if selected { "► " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(
                    prefix,
                    if selected {
                        Style::default().fg(ACCENT)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(entry.date.as_str(), Style::default().fg(ACCENT_DIM)),
            ]));

            let preview = entry.content.lines().next().unwrap_or("");
            let content_style = if selected {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("    {}", truncate_text(preview, width)),
                content_style,
            )));
            lines.push(Line::from(""));
        }

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Your entries ({}) ", journal.len())),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn render_footer(&self, frame: &mut Frame, haven: &Haven, area: Rect) {
        let hints = if self.diary_editing {
            "Type to write · Enter newline · Ctrl+S save · Esc done"
        } else {
            match haven.screen() {
                Screen::Home => "Tab/1-5 switch screens · M/B/A/D jump · Q quit",
                Screen::Meditate => "↑↓ select · Enter start/stop · S stop · Tab switch · Q quit",
                Screen::Breathe => "Space start/stop · Tab switch · Q quit",
                Screen::Quiz => "↑↓ question · 1-5 answer · Enter submit · R retake · Tab switch",
                Screen::Diary => "E write · ↑↓ select · D delete · Tab switch · Q quit",
            }
        };

        let footer = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    /// Transient notices, stacked bottom-right above the footer
    fn render_notices(&self, frame: &mut Frame, haven: &Haven) {
        let notices = haven.notices();
        if notices.is_empty() {
            return;
        }

        let area = frame.area();
        for (i, notice) in notices.iter().rev().enumerate() {
            let width = (notice.text.chars().count() as u16 + 4).min(area.width);
            let y = area
                .height
                .saturating_sub(3)
                .saturating_sub(i as u16);
            if y == 0 {
                break;
            }
            let rect = Rect {
                x: area.width.saturating_sub(width + 1),
                y,
                width,
                height: 1,
            };

            let color = match notice.kind {
                NoticeKind::Success => CALM_GREEN,
                NoticeKind::Error => WARM_RED,
                NoticeKind::Info => ACCENT,
            };
            let para = Paragraph::new(Span::styled(
                format!(" {} ", notice.text),
                Style::default().fg(Color::Black).bg(color),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(Clear, rect);
            frame.render_widget(para, rect);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A labelled statistic line for the home screen
fn stat_line(label: &str, value: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<24}", label), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer line", 8), "a longe…");
        assert_eq!(truncate_text("xy", 1), "…");
    }
}
