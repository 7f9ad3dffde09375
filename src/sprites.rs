//! Terminal icon art per icon category
//!
//! Each icon is one or two layers of plain text; spaces are transparent, and
//! later layers draw over earlier ones.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::codes::IconCategory;

/// Rows every icon occupies
pub const SPRITE_HEIGHT: u16 = 5;

mod art {
    pub const SUN: &str = "    \\   /    \n     .-.     \n  ― (   ) ―  \n     `-'     \n    /   \\    ";

    pub const SMALL_SUN: &str = "  \\  /       \n_ /\"\"        \n  \\_         \n  /          \n             ";
    pub const SMALL_CLOUD: &str = "             \n      .-.    \n     (   ).  \n    (___(__) \n             ";

    pub const BACK_CLOUD: &str = "   .--.      \n  (    ).    \n             \n             \n             ";
    pub const FRONT_CLOUD: &str = "             \n      .--.   \n   .-(    ). \n  (___.__)__)\n             ";

    pub const RAIN_CLOUD: &str = "     .-.     \n    (   ).   \n   (___(__)  \n             \n             ";
    pub const RAIN_DROPS: &str = "             \n             \n             \n    ‚'‚'‚'   \n    ‚'‚'‚'   ";
}

struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let rows = layer_lines.iter().map(Vec::len).max().unwrap_or(0);
    let cols = layer_lines
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let lines = (0..rows)
        .map(|row| {
            let spans = (0..cols)
                .map(|col| {
                    let top = layers
                        .iter()
                        .zip(&layer_lines)
                        .rev()
                        .find_map(|(layer, lines)| {
                            let ch = *lines.get(row)?.get(col)?;
                            (ch != ' ').then_some((ch, layer.color))
                        });
                    let (ch, color) = top.unwrap_or((' ', Color::Reset));
                    Span::styled(ch.to_string(), Style::default().fg(color))
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

/// Coloured art for an icon category
pub fn sprite(icon: IconCategory) -> Text<'static> {
    let layers = match icon {
        IconCategory::Clear => vec![SpriteLayer {
            content: art::SUN,
            color: Color::Yellow,
        }],
        IconCategory::PartlyCloudy => vec![
            SpriteLayer {
                content: art::SMALL_SUN,
                color: Color::Yellow,
            },
            SpriteLayer {
                content: art::SMALL_CLOUD,
                color: Color::Rgb(135, 206, 235),
            },
        ],
        IconCategory::Overcast => vec![SpriteLayer {
            content: art::FRONT_CLOUD,
            color: Color::Rgb(135, 206, 235),
        }],
        IconCategory::Rain => vec![
            SpriteLayer {
                content: art::RAIN_CLOUD,
                color: Color::Rgb(135, 206, 235),
            },
            SpriteLayer {
                content: art::RAIN_DROPS,
                color: Color::Rgb(74, 144, 226),
            },
        ],
        IconCategory::Cloudy => vec![
            SpriteLayer {
                content: art::BACK_CLOUD,
                color: Color::Yellow,
            },
            SpriteLayer {
                content: art::FRONT_CLOUD,
                color: Color::Rgb(170, 170, 185),
            },
        ],
    };

    composite_layers(&layers)
}

/// Single-glyph fallback for cramped terminals
pub fn emoji(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Clear => "\u{2600}\u{fe0f}",
        IconCategory::PartlyCloudy => "\u{26c5}",
        IconCategory::Overcast => "\u{2601}\u{fe0f}",
        IconCategory::Rain => "\u{1f327}\u{fe0f}",
        IconCategory::Cloudy => "\u{1f325}\u{fe0f}",
    }
}
