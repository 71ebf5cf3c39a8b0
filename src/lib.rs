use anyhow::Result;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader, RgbaImage};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub mod layout;

/// Name of the source image expected at the project root when `--src` is not
/// given.
pub const DEFAULT_SOURCE: &str = "VideoWithYou.png";

/// A source raster decoded once and resized on demand.
///
/// The image is normalized to 8-bit RGBA at load time so every resize
/// operates on the same 4-channel representation regardless of the source
/// file's original mode.
pub struct Scaler {
    img: RgbaImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("source image not found: {}", path.display());
        }
        let img = ImageReader::open(path)?.decode()?.to_rgba8();
        Ok(Self { img })
    }

    /// Resizes to `size`x`size` with Lanczos and writes a PNG, creating
    /// missing parent directories. Overwrites silently.
    pub fn write_png<P: AsRef<Path>>(&self, path: P, size: u32) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image::imageops::resize(&self.img, size, size, FilterType::Lanczos3)
            .save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Writes a multi-resolution ICO containing one frame per entry in
    /// `sizes`, creating missing parent directories.
    ///
    /// Frames are resampled here with a triangle filter rather than reusing
    /// the Lanczos path, matching the prior generator where the ICO encoder
    /// did its own resampling.
    pub fn write_ico<P: AsRef<Path>>(&self, path: P, sizes: &[u32]) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut dir = IconDir::new(ResourceType::Icon);
        for &size in sizes {
            let frame = image::imageops::resize(&self.img, size, size, FilterType::Triangle);
            let image = IconImage::from_rgba_data(size, size, frame.into_raw());
            dir.add_entry(IconDirEntry::encode(&image)?);
        }
        let file = std::fs::File::create(path)?;
        dir.write(BufWriter::new(file))?;
        Ok(())
    }
}

/// Runs the whole pipeline: load the source image, write the extension PNG
/// set and the client ICO under `root`.
pub fn generate(root: &Path, src: Option<&Path>) -> Result<()> {
    let src: PathBuf = match src {
        Some(src) => src.to_path_buf(),
        None => root.join(DEFAULT_SOURCE),
    };
    let scaler = Scaler::open(&src)?;
    layout::write_extension_icons(&scaler, root)?;
    layout::write_client_ico(&scaler, root)?;
    Ok(())
}
