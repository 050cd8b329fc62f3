use crate::config::UiConfig;
use crate::game::{GameOutcome, GameSession, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
    ui: &UiConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board (+ history panel)
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);

    if ui.show_history {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(28)])
            .split(chunks[1]);
        render_board(frame, session, selected_column, ui, main[0]);
        render_history(frame, session, ui, main[1]);
    } else {
        render_board(frame, session, selected_column, ui, chunks[1]);
    }

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (status, color) = match session.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} wins!", player.name()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Draw — board is full".to_string(), Color::Gray),
        None => {
            let player = session.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
    };

    let score = format!(
        "  |  Red {} · {} Yellow",
        session.wins(Player::Red),
        session.wins(Player::Yellow)
    );

    let header = Paragraph::new(status + &score)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    ui: &UiConfig,
    area: Rect,
) {
    let winning_play = if ui.highlight_win {
        session.winning_play()
    } else {
        None
    };
    super::board_widget::render_board(frame, session.board(), selected_column, winning_play, area);
}

fn render_history(frame: &mut Frame, session: &GameSession, ui: &UiConfig, area: Rect) {
    let history = session.move_history();
    let skipped = history.len().saturating_sub(ui.history_limit);

    let mut lines: Vec<Line> = Vec::new();
    if skipped > 0 {
        lines.push(Line::from(Span::styled(
            format!("… {} earlier", skipped),
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, entry) in history.iter().enumerate().skip(skipped) {
        lines.push(Line::from(format!("{:2}. {}", i + 1, entry)));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(panel, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 1-7: Select  |  Enter: Drop  |  R: New Game  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}
