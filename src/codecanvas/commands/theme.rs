use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::{KvBackend, PreferenceStore};

pub fn get<B: KvBackend>(prefs: &PreferenceStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_theme(prefs.theme().clone()))
}

pub fn set<B: KvBackend>(prefs: &mut PreferenceStore<B>, theme: Theme) -> Result<CmdResult> {
    prefs.set_theme(theme.clone())?;
    let mut result = CmdResult::default().with_theme(theme.clone());
    if matches!(theme, Theme::Other(_)) {
        result.add_message(CmdMessage::warning(format!(
            "Theme set to {} (not a built-in theme, shown as light)",
            theme
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    }
    Ok(result)
}
