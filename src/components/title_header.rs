use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::theme::Backdrop;

pub const TITLE: &str = "Atmosphere";
pub const SUBTITLE: &str = "YOUR PERSONAL WEATHER COMPANION";

/// App banner: FIGlet title filled with the current backdrop, plus subtitle
pub struct TitleHeader;

pub struct TitleHeaderProps {
    pub backdrop: Backdrop,
}

impl Component<Action> for TitleHeader {
    type Props<'a> = TitleHeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet title, artbox picks the font that fits
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(props.backdrop.fill());
        frame.render_widget(ArtBox::new(&renderer, TITLE), chunks[0]);

        let (_, end) = props.backdrop.colors();
        let subtitle = Line::from(vec![Span::styled(
            SUBTITLE,
            Style::default().fg(end).add_modifier(Modifier::DIM),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
