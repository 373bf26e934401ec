//! TUI rendering with ratatui
//!
//! Clue boxes, guess rows and the autocomplete list for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::CLUE_ORDER;
use crate::output::formatters::feedback_cell;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Clues and guesses
            Constraint::Percentage(40), // Suggestions and messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::WinCelebration {
        render_win_overlay(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌍 COUNTRDLE - Guess the Country")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Clue progress
            Constraint::Length(10), // Clue boxes
            Constraint::Min(4),     // Guesses
        ])
        .split(area);

    render_clue_progress(f, app, chunks[0]);
    render_clues(f, app, chunks[1]);
    render_guesses(f, app, chunks[2]);
}

fn render_clue_progress(f: &mut Frame, app: &App, area: Rect) {
    let revealed = app.session.revealed_clues().len();
    let total = CLUE_ORDER.len();
    let percent = u16::try_from(revealed * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Clues Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{revealed}/{total}"));

    f.render_widget(gauge, area);
}

/// Two rows of four boxes, one per clue category
fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row, categories) in rows.iter().zip(CLUE_ORDER.chunks(4)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row);

        for (cell, &category) in cells.iter().zip(categories) {
            let value = app.session.clue_value(category);
            let (style, border) = if value.is_hidden() {
                (Style::default().fg(Color::DarkGray), Color::DarkGray)
            } else {
                (
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Color::Yellow,
                )
            };

            let clue = Paragraph::new(value.to_string())
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(format!(" {category} "))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(border)),
                );
            f.render_widget(clue, *cell);
        }
    }
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let guessed = app.session.guessed_countries();
    let items: Vec<ListItem> = guessed
        .iter()
        .enumerate()
        .rev()
        .map(|(i, country)| {
            let feedback = app.session.feedback_for(country);
            let color = if feedback.is_some() {
                Color::Yellow
            } else {
                Color::Green
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{:<30}", country.to_string())),
                Span::styled(feedback_cell(feedback), Style::default().fg(color)),
            ]))
        })
        .collect();

    let guesses = List::new(items).block(
        Block::default()
            .title(format!(" Guesses ({}) ", guessed.len()))
            .borders(Borders::ALL),
    );

    f.render_widget(guesses, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Suggestions
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.input_mode == InputMode::WinCelebration {
        Vec::new()
    } else {
        app.suggestions()
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let style = if app.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(country.to_string()).style(style)
            })
            .collect()
    };

    let suggestions = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(suggestions, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Guess a Country | Enter to submit, Tab to complete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let tries = Paragraph::new(format!("Tries: {}", app.session.tries())).alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average_text = app
        .stats
        .average_tries()
        .map_or_else(|| "Avg Tries: -".to_string(), |avg| format!("Avg Tries: {avg:.1}"));
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | ↑/↓: Select | Tab: Complete",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_win_overlay(f: &mut Frame, app: &App) {
    let Some(target) = app.session.revealed_target() else {
        return;
    };
    let tries = app.session.tries();
    let area = centered_rect(50, 9, f.area());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🥳 You guessed it! 🥳",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            target.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "in {tries} {}",
            if tries == 1 { "try" } else { "tries" }
        )),
        Line::from(""),
        Line::from(Span::styled(
            "n: Play again   q: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{france, germany};
    use crate::game::GameSession;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_on_france() -> App {
        let mut session = GameSession::with_seed(1);
        session
            .start_with_target(vec![france(), germany()], "French Republic")
            .unwrap();
        App::new(session)
    }

    #[test]
    fn hidden_clues_show_placeholder() {
        let screen = render(&app_on_france());
        assert!(screen.contains("551,695"));
        assert!(screen.contains("Population"));
        assert!(!screen.contains("67,391,582"));
    }

    #[test]
    fn miss_shows_next_clue_and_guess_row() {
        let mut app = app_on_france();
        app.input_buffer = "Germany".to_string();
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("67,391,582"));
        assert!(screen.contains("Germany"));
        assert!(screen.contains("SW"));
    }

    #[test]
    fn win_shows_overlay() {
        let mut app = app_on_france();
        app.input_buffer = "France".to_string();
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("You guessed it!"));
        assert!(screen.contains("in 1 try"));
    }
}
