use crate::Scaler;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Flat PNG sizes shipped with the browser extension.
pub const EXTENSION_PNG_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Resolutions embedded in the desktop client's ICO bundle.
pub const CLIENT_ICO_SIZES: [u32; 4] = [16, 32, 48, 256];

pub fn extension_icons_dir(root: &Path) -> PathBuf {
    root.join("extension").join("public").join("icons")
}

pub fn client_ico_path(root: &Path) -> PathBuf {
    root.join("local-client").join("assets").join("client.ico")
}

pub fn write_extension_icons(scaler: &Scaler, root: &Path) -> Result<()> {
    let dir = extension_icons_dir(root);
    for size in EXTENSION_PNG_SIZES {
        let path = dir.join(format!("icon{}.png", size));
        scaler.write_png(&path, size)?;
        tracing::info!("wrote {}", path.display());
    }
    Ok(())
}

pub fn write_client_ico(scaler: &Scaler, root: &Path) -> Result<()> {
    let path = client_ico_path(root);
    scaler.write_ico(&path, &CLIENT_ICO_SIZES)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
