//! Order form rendering

use crate::app::App;
use crate::state::{ActiveField, BraceColor, LegSide};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the order form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Brace Fitting Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Color
            Constraint::Length(3),             // Leg
            Constraint::Length(3),             // Upper leg size
            Constraint::Length(3),             // Lower leg size
            Constraint::Length(1),             // Error line
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let focus = app.state.active_field;
    let order = &app.state.order;

    draw_choice_row(
        frame,
        chunks[0],
        "Color",
        &[
            ("Graphite", order.color == BraceColor::Graphite),
            ("Navy", order.color == BraceColor::Navy),
        ],
        focus == ActiveField::Color,
    );

    draw_choice_row(
        frame,
        chunks[1],
        "Leg",
        &[
            ("Left", order.leg == LegSide::Left),
            ("Right", order.leg == LegSide::Right),
        ],
        focus == ActiveField::Leg,
    );

    draw_size_row(
        frame,
        chunks[2],
        "Upper leg length (inches)",
        &order.size_upper,
        focus == ActiveField::SizeUpper,
    );

    draw_size_row(
        frame,
        chunks[3],
        "Lower leg length (inches)",
        &order.size_lower,
        focus == ActiveField::SizeLower,
    );

    if app.state.status.has_error() {
        let error = Paragraph::new(app.state.status.error.as_str())
            .style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[4]);
    }

    let submit_label = if app.state.status.fetching {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        chunks[5],
        submit_label,
        focus == ActiveField::Submit,
        !app.state.status.fetching,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": select  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

/// Draw a radio row: each option gets a selection marker, the chosen one is
/// highlighted.
fn draw_choice_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, bool)],
    is_active: bool,
) {
    let border_color = if is_active { Color::Cyan } else { Color::DarkGray };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (name, selected)) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let marker = if *selected { "(●) " } else { "( ) " };
        let style = if *selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{marker}{name}"), style));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a measurement input row with a trailing cursor when focused
fn draw_size_row(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(content.block(block), area);
}
