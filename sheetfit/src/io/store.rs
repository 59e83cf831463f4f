//! Key/value persistence rooted at a directory, one file per key.
//!
//! Writes are atomic: the value is written to a `.tmp` file, synced and renamed over the old one,
//! so an interrupted write never leaves a half-written value behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::entities::{Catalog, SheetFormat};
use crate::error::{CalcError, CalcResult};
use crate::io::export::export_format;
use crate::io::ext_repr::ExtSheetFormat;
use crate::io::import::{import_custom_format, import_format};
use crate::io::theme::Theme;

/// Key under which the user defined sheet formats are stored
pub const CUSTOM_FORMATS_KEY: &str = "custom_formats";
/// Key under which the display theme is stored
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens the store at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> CalcResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CalcError::io("create store directory", root.display().to_string(), e))?;
        Ok(Store { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Value stored under `key`, `None` if nothing was stored yet
    pub fn read(&self, key: &str) -> CalcResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CalcError::io("read", path.display().to_string(), e)),
        }
    }

    /// Replaces the value under `key`. On failure the old value is kept and no temp file is left behind.
    pub fn write(&self, key: &str, value: &str) -> CalcResult<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        let result = write_synced(&tmp_path, value).and_then(|()| {
            fs::rename(&tmp_path, &path)
                .map_err(|e| CalcError::io("rename to final", path.display().to_string(), e))
        });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}

fn write_synced(path: &Path, value: &str) -> CalcResult<()> {
    let mut file = File::create(path)
        .map_err(|e| CalcError::io("create temp file", path.display().to_string(), e))?;
    file.write_all(value.as_bytes())
        .map_err(|e| CalcError::io("write temp file", path.display().to_string(), e))?;
    file.sync_all()
        .map_err(|e| CalcError::io("sync temp file", path.display().to_string(), e))
}

/// Loads the persisted custom formats.
/// Fails with [`CalcError::PersistedCatalogCorrupt`] if the stored data cannot be parsed or holds invalid dimensions.
pub fn try_load_custom_formats(store: &Store) -> CalcResult<Vec<SheetFormat>> {
    let Some(raw) = store.read(CUSTOM_FORMATS_KEY)? else {
        return Ok(vec![]);
    };
    let corrupt = |reason: String| CalcError::PersistedCatalogCorrupt {
        key: CUSTOM_FORMATS_KEY.to_string(),
        reason,
    };
    let ext_formats: Vec<ExtSheetFormat> =
        serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;
    ext_formats
        .iter()
        .map(|f| import_format(f).map_err(|e| corrupt(e.to_string())))
        .collect()
}

/// Loads the persisted custom formats. Corrupt data is logged and ignored.
pub fn load_custom_formats(store: &Store) -> Vec<SheetFormat> {
    match try_load_custom_formats(store) {
        Ok(formats) => formats,
        Err(e) => {
            error!("[STORE] could not load custom formats, using built-in formats only: {e}");
            vec![]
        }
    }
}

/// Built-in formats followed by the persisted custom formats
pub fn load_catalog(store: &Store) -> Catalog {
    let catalog = Catalog::with_custom(load_custom_formats(store));
    info!(
        "[STORE] catalog loaded: {} built-in, {} custom formats",
        catalog.builtin_formats().len(),
        catalog.custom_formats().len()
    );
    catalog
}

pub fn save_custom_formats(store: &Store, formats: &[SheetFormat]) -> CalcResult<()> {
    let ext_formats = formats.iter().map(export_format).collect::<Vec<_>>();
    let json = serde_json::to_string_pretty(&ext_formats)?;
    store.write(CUSTOM_FORMATS_KEY, &json)
}

/// Creates a custom format from raw user input, appends it to `catalog` and persists the custom formats.
///
/// Invalid dimensions leave the catalog untouched. A failed write is logged, the format is still
/// added to the in-memory catalog.
pub fn add_custom_format(store: &Store, catalog: &mut Catalog, a: &str, b: &str) -> CalcResult<SheetFormat> {
    let format = import_custom_format(a, b)?;
    catalog.push_custom(format.clone());

    match save_custom_formats(store, catalog.custom_formats()) {
        Ok(()) => info!("[STORE] custom format saved: {}", format.name()),
        Err(e) => error!("[STORE] could not save custom format {}: {e}", format.name()),
    }
    Ok(format)
}

/// Persisted theme, [`Theme::Light`] if none (or an unknown one) was stored
pub fn load_theme(store: &Store) -> Theme {
    match store.read(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            warn!("[STORE] ignoring stored theme: {e}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!("[STORE] could not read theme: {e}");
            Theme::default()
        }
    }
}

pub fn save_theme(store: &Store, theme: Theme) -> CalcResult<()> {
    store.write(THEME_KEY, &theme.to_string())
}
