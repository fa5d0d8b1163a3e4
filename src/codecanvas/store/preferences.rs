use super::backend::KvBackend;
use super::THEME_KEY;
use crate::error::{CanvasError, Result};
use crate::model::Theme;
use log::{debug, warn};

/// The persisted theme slot, cached in memory after the first read.
pub struct PreferenceStore<B: KvBackend> {
    backend: B,
    theme: Theme,
}

impl<B: KvBackend> PreferenceStore<B> {
    /// Reads the theme once; an absent or unreadable slot means `dark`.
    pub fn open(backend: B) -> Self {
        let theme = match backend.get(THEME_KEY) {
            Ok(Some(raw)) => parse_theme(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("could not read theme preference: {}", e);
                Theme::default()
            }
        };
        Self { backend, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Persists any value, known or not, then updates the cache.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let raw = serde_json::to_string(theme.as_str()).map_err(CanvasError::Serialization)?;
        self.backend.set(THEME_KEY, &raw)?;
        debug!("theme set to {}", theme);
        self.theme = theme;
        Ok(())
    }
}

/// The slot holds a JSON string; a bare word written by hand is taken as is.
fn parse_theme(raw: &str) -> Theme {
    let value = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.trim().to_string());
    if value.is_empty() {
        Theme::default()
    } else {
        Theme::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn defaults_to_dark() {
        let prefs = PreferenceStore::open(MemBackend::new());
        assert_eq!(prefs.theme(), &Theme::Dark);
    }

    #[test]
    fn light_survives_restart() {
        let backend = MemBackend::new();
        let mut prefs = PreferenceStore::open(backend.clone());
        prefs.set_theme(Theme::Light).unwrap();

        let reloaded = PreferenceStore::open(backend);
        assert_eq!(reloaded.theme(), &Theme::Light);
        assert_eq!(reloaded.theme().as_str(), "light");
    }

    #[test]
    fn accepts_unknown_values() {
        let backend = MemBackend::new();
        let mut prefs = PreferenceStore::open(backend.clone());
        prefs.set_theme(Theme::from("sepia")).unwrap();

        let reloaded = PreferenceStore::open(backend);
        assert_eq!(reloaded.theme().as_str(), "sepia");
    }

    #[test]
    fn bare_word_slot_is_accepted() {
        let backend = MemBackend::new();
        backend.put_raw(THEME_KEY, "light");
        let prefs = PreferenceStore::open(backend);
        assert_eq!(prefs.theme(), &Theme::Light);
    }

    #[test]
    fn failed_write_keeps_cached_theme() {
        let backend = MemBackend::new();
        let mut prefs = PreferenceStore::open(backend.clone());
        backend.set_simulate_write_error(true);

        assert!(prefs.set_theme(Theme::Light).is_err());
        assert_eq!(prefs.theme(), &Theme::Dark);
    }
}
