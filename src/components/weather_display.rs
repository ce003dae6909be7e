use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::title_header::TITLE;
use super::{
    Component, SearchBar, SearchBarProps, TitleHeader, TitleHeaderProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Title art (up to 6 rows) plus subtitle.
const HEADER_HEIGHT: u16 = 7;
const SEARCH_HEIGHT: u16 = 3;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub today: NaiveDate,
    pub is_focused: bool,
}

/// The whole screen: framed banner, search bar and weather panel
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c');
            if ctrl_c || key.code == KeyCode::Esc {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    value: &props.state.city_input,
                    is_focused: true,
                    on_change: Action::InputChange,
                    on_submit: Action::InputSubmit,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let [framed, help] = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .areas(area);

        let backdrop = props.state.backdrop();
        let (start, end) = backdrop.colors();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(start))
            .title(
                Line::from(vec![Span::styled(
                    format!(" {TITLE} "),
                    Style::default().fg(end).add_modifier(Modifier::BOLD),
                )])
                .centered(),
            );
        let inner = block.inner(framed);
        frame.render_widget(block, framed);

        let [header, search, body] = Layout::vertical([
            Constraint::Max(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(1),
        ])
        .areas(inner);

        let mut title = TitleHeader;
        title.render(frame, header, TitleHeaderProps { backdrop });

        self.search.render(
            frame,
            search,
            SearchBarProps {
                value: &props.state.city_input,
                is_focused: props.is_focused,
                on_change: Action::InputChange,
                on_submit: Action::InputSubmit,
            },
        );

        let mut weather = WeatherBody;
        weather.render(
            frame,
            body,
            WeatherBodyProps {
                state: props.state,
                today: props.today,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            help,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
