//! Stateless rendering of a [`GameView`].

use crate::games::tictactoe::{Mark, Position};
use crate::view::{CellView, GameView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const MARK_X: Color = Color::Rgb(0x2D, 0xF8, 0xF5);
const MARK_O: Color = Color::Rgb(0xFB, 0x98, 0xFE);
const WIN_BG: Color = Color::Rgb(0xFF, 0xFF, 0xC9);
const CURRENT_BG: Color = Color::Rgb(0xC5, 0xFF, 0xEA);

/// Draws the header, board, status and move list.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position, selected_step: usize) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(11),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("You know the game. Pick one of the cells to start!"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, header);

    let [board_area, info_area] =
        Layout::horizontal([Constraint::Length(27), Constraint::Min(24)]).areas(body);
    draw_board(frame, board_area, view, cursor);
    draw_info(frame, info_area, view, selected_step);

    let help = Paragraph::new(
        "arrows/1-9 move  enter place  [ ] history  g jump  home start  n new  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, footer);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let lines: Vec<Line> = view
        .cells()
        .chunks(3)
        .enumerate()
        .flat_map(|(row, cells)| {
            let mut spans = Vec::new();
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                spans.push(cell_span(cell, *cell.index() == cursor.to_index()));
            }
            let mut rows = vec![Line::from(spans)];
            if row < 2 {
                rows.push(Line::styled(
                    "───────┼───────┼───────",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            rows
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board, area);
}

fn cell_span(cell: &CellView, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match cell.mark() {
        None => ("       ".to_string(), Style::default()),
        Some(Mark::X) => ("   X   ".to_string(), Style::default().fg(MARK_X)),
        Some(Mark::O) => ("   O   ".to_string(), Style::default().fg(MARK_O)),
    };
    style = style.add_modifier(Modifier::BOLD);
    if *cell.winning() {
        style = style.bg(WIN_BG);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView, selected_step: usize) {
    let [status_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.step() == selected_step { "> " } else { "  " };
            let style = if *entry.current() {
                Style::default().fg(Color::Black).bg(CURRENT_BG)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format!("{}{}", marker, entry.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(list, list_area);
}
