//! Counter screen rendering

use crate::view_models::CounterViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(vm: &CounterViewModel, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_panel(vm, chunks[0], f);
    render_counter(vm, chunks[1], f);

    let hint = Paragraph::new(vm.hint.as_str()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[2]);
}

fn render_panel(vm: &CounterViewModel, area: Rect, f: &mut Frame) {
    let block = Block::default().title(" Timer ").borders(Borders::ALL);
    let time = Paragraph::new(vm.time.as_str())
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(time, area);
}

fn render_counter(vm: &CounterViewModel, area: Rect, f: &mut Frame) {
    let style = if vm.at_limit {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default().title(" Counter ").borders(Borders::ALL);
    let counter = Paragraph::new(vec![
        Line::styled(vm.counter.as_str(), style),
        Line::from("[-]   [+]"),
    ])
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(counter, area);
}
