use crate::commands::{CmdMessage, CmdResult};
use crate::config::CanvasConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    Set(String, String),
}

pub fn run(config: &mut CanvasConfig, data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::Set(key, value) => {
            let mut next = config.clone();
            next.set(&key, &value)?;
            next.save(data_dir)?;
            *config = next;

            let mut result = CmdResult::default().with_config(config.clone());
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}
