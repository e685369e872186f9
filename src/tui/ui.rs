//! Stateless UI rendering for five-in-a-row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use crate::games::gomoku::{BOARD_SIZE, History, Square, rules};
use crate::settings::Palette;

/// Width of the bordered board: three columns per cell.
const BOARD_WIDTH: u16 = (BOARD_SIZE * 3) as u16 + 2;
const BOARD_HEIGHT: u16 = BOARD_SIZE as u16 + 2;

const HELP: &str = "arrows/hjkl move  enter place  [ ] step  tab list  r restart  q quit";

/// Renders the whole screen: board, move list, status and key help.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board + move list
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let title = Paragraph::new("Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if app.show_history() {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        draw_board(frame, panes[0], app, palette);
        draw_move_list(frame, panes[1], app);
    } else {
        draw_board(frame, chunks[1], app, palette);
    }

    let status = Paragraph::new(app.history().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let history = app.history();
    let board = history.current();
    let winning = rules::winning_line(board).map(|(_, line)| line);
    let show_cursor = app.focus() == Focus::Board;

    let lines: Vec<Line> = board
        .rows()
        .enumerate()
        .map(|(row, squares)| {
            let spans: Vec<Span> = squares
                .iter()
                .enumerate()
                .map(|(col, square)| {
                    let index = row * BOARD_SIZE + col;
                    let mut style = match square {
                        Square::Empty => Style::default().fg(Color::DarkGray),
                        Square::Occupied(player) => Style::default()
                            .fg(palette.color(*player))
                            .add_modifier(Modifier::BOLD),
                    };
                    if winning.is_some_and(|line| line.contains(&index)) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    if show_cursor && app.cursor().to_index() == index {
                        style = style.bg(Color::White).fg(Color::Black);
                    }
                    Span::styled(cell_text(*square), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Move {}", history.pointer()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_text(square: Square) -> String {
    match square {
        Square::Empty => " · ".to_string(),
        Square::Occupied(player) => format!(" {} ", player.symbol()),
    }
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.history();
    let focused = app.focus() == Focus::MoveList;

    let lines: Vec<Line> = (0..history.len())
        .map(|n| move_line(history, n, n == app.selected() && focused))
        .collect();

    let anchor = if focused { app.selected() } else { history.pointer() };
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = u16::try_from(anchor.saturating_sub(visible - 1)).unwrap_or(u16::MAX);

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("History");
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((offset, 0)),
        area,
    );
}

fn move_line(history: &History, n: usize, highlighted: bool) -> Line<'static> {
    let current = n == history.pointer();
    let marker = if current { "> " } else { "  " };

    let mut label_style = Style::default();
    if current {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    if highlighted {
        label_style = label_style.bg(Color::White).fg(Color::Black);
    }

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(History::description(n), label_style),
    ];
    if let Some(mov) = history.placement(n) {
        spans.push(Span::styled(
            format!("  {} {}", mov.player(), mov.position()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
