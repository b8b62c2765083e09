use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{RoundPhase, RoundState, Screen};
use crate::session::Snapshot;

pub struct Renderer {
    columns: usize,
}

impl Renderer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        match snapshot.screen {
            Screen::Game => self.render_game(frame, snapshot),
            Screen::Settings => self.render_settings(frame, snapshot),
        }
    }

    fn render_game(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let round = &snapshot.round;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Holes
                Constraint::Length(3), // Round status
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot), chunks[0]);
        frame.render_widget(self.render_grid(round), chunks[1]);
        frame.render_widget(self.render_status(round), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_stats(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.round.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Time: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.round.remaining_seconds.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" Wack-A-Mole ")
                .title_alignment(Alignment::Center),
        )
    }

    fn render_grid(&self, round: &RoundState) -> Paragraph<'_> {
        let mut lines = vec![Line::from("")];
        let cells: Vec<usize> = (0..round.grid_size).collect();

        for row in cells.chunks(self.columns) {
            let mut spans = Vec::new();

            for &cell in row {
                let hole = if round.is_mole_visible(cell) {
                    Span::styled(
                        format!("({}) M ", cell + 1),
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if round.round_active {
                    Span::styled(format!("({})   ", cell + 1), Style::default().fg(Color::Gray))
                } else {
                    Span::styled(
                        format!("({})   ", cell + 1),
                        Style::default().fg(Color::DarkGray),
                    )
                };

                spans.push(hole);
            }

            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            )
            .alignment(Alignment::Center)
    }

    fn render_status(&self, round: &RoundState) -> Paragraph<'_> {
        let mut text = Vec::new();

        if round.phase() == RoundPhase::Over {
            text.push(Line::from(vec![
                Span::styled(
                    "Game over! ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Final score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    round.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            text.push(Line::from(""));
        }

        text.push(Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(format!(" to {}", start_label(round.phase()).to_lowercase())),
        ]));

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("1-9", Style::default().fg(Color::Cyan)),
            Span::raw(" to whack | "),
            Span::styled("O", Style::default().fg(Color::Cyan)),
            Span::raw(" settings | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_settings(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Settings",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to reset the high score", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to go back", Style::default().fg(Color::Gray)),
            ]),
        ];

        let settings = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Settings "),
        );
        frame.render_widget(settings, frame.area());
    }
}

/// Label of the round button: "Start" before the first round, "Restart" after
pub fn start_label(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Fresh => "Start",
        RoundPhase::Running | RoundPhase::Over => "Restart",
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(3)
    }
}
