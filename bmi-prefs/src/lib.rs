pub mod store;
pub mod theme;

pub use store::{Error, MockPreferenceStore, PreferenceStore, Preferences, RonFileStore};
pub use theme::ThemeStore;
