pub mod collection;
pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod format;
pub mod palette;
pub mod shade;
pub mod store;

pub use collection::{CyclicSelector, OrderedList};
pub use color::{ColorValue, Space};
pub use config::AppConfig;
pub use contrast::Foreground;
pub use error::Error;
pub use format::Format;
pub use palette::{PaletteService, PaletteSnapshot, PaletteState, PaletteTable};
pub use store::{PersistentBinding, Store};
