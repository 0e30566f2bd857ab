//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use noughts_core::{Mark, Position, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Scores
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Noughts - you are {} vs {}",
        app.human_mark(),
        app.opponent_name()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let scores = app.scoreboard();
    let human = app.human_mark();
    let score_line = format!(
        "You: {}  {}: {}  Draws: {}",
        scores.wins(human),
        app.opponent_name(),
        scores.wins(human.opponent()),
        scores.draws()
    );
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Center),
        chunks[3],
    );

    let help = Paragraph::new(format!(
        "arrows + enter or 1-9: move | r: new game | t: {} first next | q: quit",
        app.first_player().toggle().label()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let in_line = app.highlight().is_some_and(|line| line.contains(&pos));
    let style = if in_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.is_human_turn() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-row cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirstPlayer;
    use crate::orchestrator::GameEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_marks_and_scores() {
        let mut app = App::new(FirstPlayer::Human, "minimax");
        app.handle_event(GameEvent::MoveMade {
            player: "You".to_string(),
            mark: Mark::X,
            position: Position::Center,
        });
        let text = screen_text(&app);
        assert!(text.contains(" X "));
        assert!(text.contains("you are X vs minimax"));
        assert!(text.contains("Draws: 0"));
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut app = App::new(FirstPlayer::Human, "minimax");
        let moves = [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ];
        for (mark, index) in moves {
            app.handle_event(GameEvent::MoveMade {
                player: "p".to_string(),
                mark,
                position: Position::from_index(index).unwrap(),
            });
        }
        let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        app.handle_event(GameEvent::GameOver {
            status: noughts_core::GameStatus::Won(Mark::X),
            line: Some(line),
        });

        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let green = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
            .count();
        assert_eq!(green, 3);
    }
}
