pub mod search_bar;
pub mod weather_card;
pub mod widget_view;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_card::{ERROR_ICON, WeatherCard, WeatherCardProps};
pub use widget_view::{WidgetView, WidgetViewProps};
