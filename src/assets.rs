//! Font and image loading
//!
//! Every asset is loaded once at start-up. A missing or corrupt file is
//! logged and replaced by a placeholder; the game keeps running.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use png::{ColorType, Decoder, Transformations};
use serde::{Deserialize, Serialize};

/// Errors raised while reading a single asset
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode PNG {}: {source}", path.display())]
    Png {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
    #[error("unsupported PNG color type {color_type:?} in {}", path.display())]
    UnsupportedColor { path: PathBuf, color_type: ColorType },
    #[error("failed to parse font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: ttf_parser::FaceParsingError,
    },
}

/// Where the game looks for its assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub font: PathBuf,
    pub sky: PathBuf,
    pub planes: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            font: PathBuf::from("assets/fonts/ariblk.ttf"),
            sky: PathBuf::from("assets/images/sky.png"),
            planes: PathBuf::from("assets/images/planes.png"),
        }
    }
}

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    /// Row-major, 4 bytes per pixel
    pub rgba: Vec<u8>,
}

impl Image {
    /// 1×1 opaque white
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }
}

/// Raw font file, validated on load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    pub data: Vec<u8>,
    pub family: Option<String>,
}

impl Font {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Everything loaded at start-up
#[derive(Debug, Clone)]
pub struct Assets {
    pub font: Font,
    pub sky: Image,
    pub planes: Image,
}

impl Assets {
    /// Load all assets, substituting placeholders for anything that fails
    pub fn load(paths: &AssetPaths) -> Self {
        let font = load_font(&paths.font).unwrap_or_else(|err| {
            log::error!("problem loading font: {}", err);
            Font::default()
        });
        let sky = load_image_or_placeholder(&paths.sky, "sky");
        let planes = load_image_or_placeholder(&paths.planes, "planes");

        Self { font, sky, planes }
    }
}

fn load_image_or_placeholder(path: &Path, what: &str) -> Image {
    match load_image(path) {
        Ok(image) => {
            log::info!("Loaded {} image {}x{}", what, image.width, image.height);
            image
        }
        Err(err) => {
            log::error!("problem loading {} image: {}", what, err);
            Image::placeholder()
        }
    }
}

/// Decode a PNG file into RGBA8
pub fn load_image(path: &Path) -> Result<Image, AssetError> {
    let file = File::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let png_err = |source| AssetError::Png {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = Decoder::new(BufReader::new(file));
    decoder.set_transformations(Transformations::normalize_to_color8());

    let mut reader = decoder.read_info().map_err(png_err)?;
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).map_err(png_err)?;
    data.truncate(info.buffer_size());

    let rgba = match info.color_type {
        ColorType::Rgba => data,
        ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        color_type => {
            return Err(AssetError::UnsupportedColor {
                path: path.to_path_buf(),
                color_type,
            });
        }
    };

    Ok(Image {
        width: info.width,
        height: info.height,
        rgba,
    })
}

/// Read a TrueType/OpenType font and check it parses
pub fn load_font(path: &Path) -> Result<Font, AssetError> {
    let data = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let face = ttf_parser::Face::parse(&data, 0).map_err(|source| AssetError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    let family = face
        .names()
        .into_iter()
        .find(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
        .and_then(|name| name.to_string());
    log::info!("Loaded font {:?} ({} glyphs)", family, face.number_of_glyphs());

    Ok(Font { data, family })
}
