pub mod app;
pub mod color;
pub mod context;
pub mod error;
pub mod font;
pub mod grid;
pub mod input;
pub mod key;
pub mod layout;
pub mod runner;

pub use app::GridApp;
pub use color::Color;
pub use context::{Context, DrawCommand};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use input::Input;
pub use key::Key;
pub use layout::Layout;
pub use runner::{RunState, Runner};
