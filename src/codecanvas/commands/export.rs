use crate::codec;
use crate::commands::{CmdMessage, CmdResult, ExportFile};
use crate::error::{CanvasError, Result};
use crate::store::{ItemStore, KvBackend};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

pub fn run<B: KvBackend>(
    store: &ItemStore<B>,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::warning("No items to export"));
        return Ok(result);
    }

    let document = codec::encode(store.list(), now)?;
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(CanvasError::Io)?;
    }
    let path = dir.join(codec::export_filename(now));
    fs::write(&path, document).map_err(CanvasError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} items to {}",
        store.len(),
        path.display()
    )));
    result.export = Some(ExportFile {
        path,
        item_count: store.len(),
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Item, Template};
    use crate::store::MemBackend;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn empty_store_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = ItemStore::open(MemBackend::new()).unwrap();
        let result = run(&store, dir.path(), Utc::now()).unwrap();

        assert!(result.export.is_none());
        assert!(result.has_problems());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_dated_document() {
        let dir = TempDir::new().unwrap();
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store
            .add(Item::new(1, "a".into(), "b".into(), Template::Code, Color::Green))
            .unwrap();

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let result = run(&store, &dir.path().join("out"), now).unwrap();
        let export = result.export.unwrap();

        assert_eq!(export.item_count, 1);
        assert!(export.path.ends_with("out/codecanvas-export-2024-06-01.json"));
        let text = fs::read_to_string(&export.path).unwrap();
        assert_eq!(codec::decode(&text).unwrap(), store.list());
    }
}
