use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PopupAppManifest {
    app_id: String,
    title: String,
    glyph: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PopupCatalogManifest {
    catalog_id: String,
    display_name: String,
    apps: Vec<PopupAppManifest>,
}

#[derive(Debug, Clone, Deserialize)]
struct PopupManifestFile {
    schema_version: u32,
    catalogs: Vec<PopupCatalogManifest>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("popup_apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: PopupManifestFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "popup catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen_apps = BTreeSet::new();
    for catalog in &manifest.catalogs {
        for app in &catalog.apps {
            if !seen_apps.insert(app.app_id.clone()) {
                panic!("duplicate popup app id `{}` in {}", app.app_id, path.display());
            }
            if app.width <= 0 || app.height <= 0 {
                panic!(
                    "popup app `{}` must have positive geometry, found {}x{}",
                    app.app_id, app.width, app.height
                );
            }
        }
    }

    let json =
        serde_json::to_string_pretty(&manifest.catalogs).expect("serialize popup app catalog");
    let generated = format!(
        "/// Build-time generated popup app catalog JSON.\n\
pub const POPUP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("popup_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
