use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_runtime::{Theme, ViewState};
use tictactoe_types::{Cell, GameStatus, Position};

use crate::presentation::view_models::{cell_symbol, loading_label, status_line};

const KEY_HELP: &str = "arrows/hjkl move  enter place  n new game  r refresh  t theme  q quit";

struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    x: Color,
    o: Color,
    cursor: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                x: Color::Blue,
                o: Color::Red,
                cursor: Color::Yellow,
                error: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                x: Color::Cyan,
                o: Color::Magenta,
                cursor: Color::Yellow,
                error: Color::LightRed,
            },
        }
    }
}

pub(crate) fn draw(f: &mut Frame, state: &ViewState, cursor: Position) {
    let palette = Palette::for_theme(state.theme);
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(f, chunks[0], state, &palette);
    render_board(f, chunks[1], state, cursor, &palette);
    render_status(f, chunks[2], state, &palette);
    render_error(f, chunks[3], state, &palette);
    render_footer(f, chunks[4], &palette);
}

fn render_header(f: &mut Frame, area: Rect, state: &ViewState, palette: &Palette) {
    let game = if state.game.game_id.is_empty() {
        "no game".to_string()
    } else {
        format!("game {}", state.game.game_id)
    };
    let title = Line::from(vec![
        Span::styled(
            "Tic Tac Toe",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}  {} theme", game, state.theme),
            Style::default().fg(palette.muted),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, state: &ViewState, cursor: Position, palette: &Palette) {
    let separator = Span::styled("│", Style::default().fg(palette.muted));
    let mut lines = Vec::with_capacity(5);

    for (r, row) in state.game.board.rows().iter().enumerate() {
        if r > 0 {
            lines.push(Line::styled(
                "───┼───┼───",
                Style::default().fg(palette.muted),
            ));
        }
        let mut spans = Vec::with_capacity(5);
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                spans.push(separator.clone());
            }
            let selected = cursor.row() == r && cursor.col() == c;
            spans.push(cell_span(*cell, selected, palette));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn cell_span(cell: Cell, selected: bool, palette: &Palette) -> Span<'static> {
    let symbol = if cell.is_empty() { " " } else { cell_symbol(cell) };
    let mut style = match cell {
        Cell::X => Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        Cell::O => Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        Cell::Empty => Style::default(),
    };
    if selected {
        style = style.bg(palette.cursor).add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {} ", symbol), style)
}

fn render_status(f: &mut Frame, area: Rect, state: &ViewState, palette: &Palette) {
    let mut lines = vec![Line::styled(
        status_line(&state.game),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(action) = state.loading {
        lines.push(Line::styled(
            loading_label(action),
            Style::default().fg(palette.muted),
        ));
    } else if matches!(
        state.game.status,
        GameStatus::Idle | GameStatus::Finished | GameStatus::Error
    ) {
        lines.push(Line::styled(
            "Press n to start a new game",
            Style::default().fg(palette.muted),
        ));
    }
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_error(f: &mut Frame, area: Rect, state: &ViewState, palette: &Palette) {
    let Some(error) = &state.error else {
        return;
    };
    let error = Paragraph::new(Line::styled(
        error.as_str(),
        Style::default().fg(palette.error),
    ))
    .alignment(Alignment::Center);
    f.render_widget(error, area);
}

fn render_footer(f: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.muted)),
        );
    f.render_widget(footer, area);
}
