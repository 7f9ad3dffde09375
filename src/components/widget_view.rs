use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for WidgetView - read-only view of state
pub struct WidgetViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Output region plus key hints; owns the main-view keys
#[derive(Default)]
pub struct WidgetView;

impl Component<Action> for WidgetView {
    type Props<'a> = WidgetViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::SearchFocus),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::SearchRefresh),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WidgetViewProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Output region
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut card = WeatherCard;
        card.render(frame, chunks[0], WeatherCardProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
