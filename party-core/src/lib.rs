pub mod countdown;
pub mod events;
pub mod ranking;
pub mod round_engine;
pub mod theme_deck;

// Re-export main components
pub use countdown::*;
pub use events::*;
pub use ranking::*;
pub use round_engine::*;
pub use theme_deck::*;
