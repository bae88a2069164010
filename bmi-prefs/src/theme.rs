use bmi_model::Theme;
use log::{debug, info, warn};

use crate::store::{Error, PreferenceStore, Preferences};

type Subscriber = Box<dyn Fn(Theme) + Send + Sync>;

/// Owns the current theme and keeps it in sync with the preference store.
///
/// Lifecycle: [`ThemeStore::init`] resolves the starting theme, [`set`] and
/// [`toggle`] persist and broadcast every change, [`teardown`] drops the
/// subscribers and hands back the final theme.
///
/// [`set`]: ThemeStore::set
/// [`toggle`]: ThemeStore::toggle
/// [`teardown`]: ThemeStore::teardown
pub struct ThemeStore {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    subscribers: Vec<Subscriber>,
}

impl ThemeStore {
    /// Starts from the saved theme, then the system preference, then dark.
    pub fn init(store: Box<dyn PreferenceStore>, system_theme: Option<Theme>) -> Self {
        let saved = match store.load() {
            Ok(preferences) => preferences.map(|p| p.theme),
            Err(e) => {
                warn!("Ignoring saved preferences: {}", e);
                None
            }
        };
        let theme = saved.or(system_theme).unwrap_or_default();
        info!("Using {} theme", theme);

        Self {
            store,
            theme,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Registers a callback. It is called right away with the current theme
    /// and again after every change.
    pub fn subscribe(&mut self, subscriber: impl Fn(Theme) + Send + Sync + 'static) {
        subscriber(self.theme);
        self.subscribers.push(Box::new(subscriber));
    }

    /// The theme only changes once it has been saved.
    pub fn set(&mut self, theme: Theme) -> Result<(), Error> {
        self.store.save(&Preferences::new(theme))?;
        self.theme = theme;
        self.subscribers
            .iter()
            .for_each(|subscriber| subscriber(theme));
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Theme, Error> {
        let next = self.theme.toggle();
        self.set(next)?;
        Ok(next)
    }

    pub fn teardown(self) -> Theme {
        debug!("Releasing {} theme subscribers", self.subscribers.len());
        self.theme
    }
}
