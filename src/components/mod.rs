pub mod detail_cards;
pub mod search_bar;
pub mod title_header;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_cards::{DetailCards, DetailCardsProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use title_header::{TitleHeader, TitleHeaderProps};
pub use weather_body::{ERROR_ICON, WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
