use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::card::{CardView, LOADING_MESSAGE, OutputView};
use crate::sprites::{self, SPRITE_HEIGHT};
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Rows besides icon and temperature: blank, condition, blank, three stats.
const CARD_FIXED: u16 = 6;
/// Tallest font in the stack
const TEMP_CAP: u16 = 6;

/// The output region: loading placeholder, weather card, or error
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match OutputView::from_state(props.state) {
            OutputView::Empty => render_hint(frame, area),
            OutputView::Loading => render_message(frame, area, LOADING_MESSAGE, Color::DarkGray),
            OutputView::Error(message) => render_error(frame, area, &message),
            OutputView::Card(card) => {
                let celsius = props
                    .state
                    .snapshot
                    .as_ref()
                    .map(|s| s.temperature_celsius)
                    .unwrap_or_default();
                render_card(frame, area, &card, celsius);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, celsius: f64) {
    let with_sprite = area.height >= SPRITE_HEIGHT + CARD_FIXED + 1;
    let icon_h = if with_sprite { SPRITE_HEIGHT } else { 1 };
    let temp_cap = area.height.saturating_sub(icon_h + CARD_FIXED).clamp(1, TEMP_CAP);

    let chunks = Layout::vertical([
        Constraint::Length(icon_h),
        Constraint::Max(temp_cap),
        Constraint::Length(1), // blank
        Constraint::Length(1), // condition
        Constraint::Length(1), // blank
        Constraint::Length(3), // stats
    ])
    .flex(Flex::Center)
    .split(area);

    if with_sprite {
        frame.render_widget(
            Paragraph::new(sprites::sprite(card.icon)).alignment(Alignment::Center),
            chunks[0],
        );
    } else {
        let emoji = Line::from(sprites::emoji(card.icon)).centered();
        frame.render_widget(Paragraph::new(emoji), chunks[0]);
    }

    let temp_text = format!("{}{}", card.temperature, card.unit.symbol());
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(celsius));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[1]);

    let condition = Line::from(vec![Span::styled(
        card.condition,
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[3]);

    let stats: Vec<Line> = card
        .stats()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:>13} "), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{value:<8}"), Style::default().fg(Color::White).bold()),
            ])
            .centered()
        })
        .collect();
    frame.render_widget(Paragraph::new(stats), chunks[5]);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let msg = Line::from(vec![Span::styled(message, Style::default().fg(color))]).centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a location", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
