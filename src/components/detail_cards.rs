use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherReport;
use crate::theme;

/// Rows taken by the card row: border + label + value + border.
pub const CARD_HEIGHT: u16 = 4;

/// Row of four secondary measurements under the main reading
pub struct DetailCards;

pub struct DetailCardsProps<'a> {
    pub report: &'a WeatherReport,
    pub accent: Color,
}

impl Component<Action> for DetailCards {
    type Props<'a> = DetailCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let cards = theme::details(props.report);
        let columns = Layout::horizontal([Constraint::Fill(1); 4])
            .spacing(1)
            .split(area);

        for (detail, column) in cards.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(props.accent));
            let lines = vec![
                Line::from(vec![Span::styled(
                    format!("{} {}", detail.icon, detail.label),
                    Style::default().fg(Color::Gray),
                )])
                .centered(),
                Line::from(vec![Span::styled(
                    detail.value.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )])
                .centered(),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *column);
        }
    }
}
