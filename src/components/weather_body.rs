use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::detail_cards::CARD_HEIGHT;
use super::{Component, DetailCards, DetailCardsProps};
use crate::action::Action;
use crate::state::{AppState, WeatherReport};
use crate::theme;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Tallest font in the stack (terminus).
const TEMP_CAP: u16 = 6;

/// Panel under the search bar: exactly one of loading, error, result or hint
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
    /// Date shown on the result panel
    pub today: NaiveDate,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Loading => render_loading(frame, area, props.state.tick_count),
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(report) => {
                render_ready(frame, area, props.state, report, props.today)
            }
            WeatherView::Empty => render_hint(frame, area),
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let frame_idx = tick_count as usize % SPINNER.len();
    let msg = Line::from(vec![
        Span::styled(SPINNER[frame_idx], Style::default().fg(Color::Cyan)),
        Span::styled(" Loading...", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let [message, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                format!("{ERROR_ICON} {error}"),
                Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
            )])
            .centered(),
        ),
        message,
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Try another city",
                Style::default().fg(Color::DarkGray),
            )])
            .centered(),
        ),
        hint,
    );
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), line);
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &WeatherReport,
    today: NaiveDate,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),           // Place
        Constraint::Length(1),           // Date
        Constraint::Length(1),           // Spacer
        Constraint::Length(1),           // Condition glyph
        Constraint::Max(TEMP_CAP),       // Temperature
        Constraint::Length(1),           // Description
        Constraint::Length(1),           // Spacer
        Constraint::Length(CARD_HEIGHT), // Details
    ])
    .flex(Flex::Center)
    .split(area);

    let (start, end) = state.backdrop().colors();

    let place = Line::from(vec![Span::styled(
        report.place(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )])
    .centered();
    frame.render_widget(Paragraph::new(place), chunks[0]);

    let date = Line::from(vec![Span::styled(
        theme::format_date(today),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(date), chunks[1]);

    frame.render_widget(Paragraph::new(Line::from(report.icon()).centered()), chunks[3]);

    let temp_text = format!("{}°", theme::round_temperature(report.temperature_c));
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(state.backdrop().fill());
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[4]);

    let desc = Line::from(vec![Span::styled(
        theme::capitalize_words(&report.condition_description),
        Style::default().fg(end),
    )])
    .centered();
    frame.render_widget(Paragraph::new(desc), chunks[5]);

    let mut cards = DetailCards;
    cards.render(
        frame,
        chunks[7],
        DetailCardsProps {
            report,
            accent: start,
        },
    );
}

enum WeatherView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a WeatherReport),
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.is_refreshing {
            return WeatherView::Loading;
        }
        match &state.weather {
            DataResource::Loading => WeatherView::Loading,
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(report) => WeatherView::Ready(report),
            DataResource::Empty => WeatherView::Empty,
        }
    }
}
