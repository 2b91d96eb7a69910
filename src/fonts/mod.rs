//! Font resolution for the summary document.
//!
//! `genpdf` embeds TrueType fonts, so a usable regular/bold/italic/bold-italic
//! family must be found on disk before rendering.  Resolution order:
//!
//! 1. the directory named by the `APP_SUMMARY_FONTS_DIR` environment variable,
//! 2. the bundled `assets/fonts` directory next to the crate manifest,
//! 3. the system DejaVu Sans directory shipped by most Linux distributions.
//!
//! Directories from (1) and (2) must follow the `<Family>-Regular.ttf` naming
//! convention expected by [`genpdf::fonts::from_files`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Environment variable that overrides the font search directory.
pub const FONTS_DIR_ENV: &str = "APP_SUMMARY_FONTS_DIR";

/// Family names probed in override and bundled directories, in order.
const CANDIDATE_FAMILIES: &[&str] = &["LiberationSans", "Roboto", "DejaVuSans"];

const SYSTEM_DEJAVU_DIR: &str = "/usr/share/fonts/truetype/dejavu";

const DEJAVU_FILES: [&str; 4] = [
    "DejaVuSans.ttf",
    "DejaVuSans-Bold.ttf",
    "DejaVuSans-Oblique.ttf",
    "DejaVuSans-BoldOblique.ttf",
];

fn bundled_font_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn override_font_directory() -> Option<PathBuf> {
    std::env::var_os(FONTS_DIR_ENV).map(PathBuf::from)
}

fn family_from_directory(directory: &Path) -> Option<FontFamily<FontData>> {
    if !directory.is_dir() {
        return None;
    }

    for family in CANDIDATE_FAMILIES {
        if let Ok(loaded) = fonts::from_files(directory, family, None) {
            log::debug!(
                "loaded font family '{}' from {}",
                family,
                directory.display()
            );
            return Some(loaded);
        }
    }

    None
}

fn load_font_data(path: &Path) -> Result<FontData, Error> {
    let data = fs::read(path).map_err(|err| {
        Error::new(
            format!("Failed to read font file {}", path.display()),
            err,
        )
    })?;
    FontData::new(data, None)
}

/// Loads DejaVu Sans from the system font directory, which does not follow the
/// `<Family>-Regular.ttf` convention and therefore needs explicit file names.
fn system_dejavu_family() -> Option<FontFamily<FontData>> {
    let directory = Path::new(SYSTEM_DEJAVU_DIR);
    let mut loaded = Vec::with_capacity(DEJAVU_FILES.len());
    for name in DEJAVU_FILES {
        let path = directory.join(name);
        match load_font_data(&path) {
            Ok(data) => loaded.push(data),
            Err(err) => {
                log::debug!("skipping system DejaVu fonts: {}", err);
                return None;
            }
        }
    }

    let mut fonts = loaded.into_iter();
    Some(FontFamily {
        regular: fonts.next()?,
        bold: fonts.next()?,
        italic: fonts.next()?,
        bold_italic: fonts.next()?,
    })
}

/// Resolves the font family used for the summary document.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    if let Some(directory) = override_font_directory() {
        if let Some(family) = family_from_directory(&directory) {
            return Ok(family);
        }
        return Err(Error::new(
            format!(
                "No usable font family ({}) found in {} (from {})",
                CANDIDATE_FAMILIES.join(", "),
                directory.display(),
                FONTS_DIR_ENV
            ),
            io::Error::new(io::ErrorKind::NotFound, "font directory unusable"),
        ));
    }

    if let Some(family) = family_from_directory(&bundled_font_directory()) {
        return Ok(family);
    }

    if let Some(family) = system_dejavu_family() {
        return Ok(family);
    }

    Err(Error::new(
        format!(
            "No fonts found: set {} or place a TrueType family under {} \
             (see assets/fonts/README.md)",
            FONTS_DIR_ENV,
            bundled_font_directory().display()
        ),
        io::Error::new(io::ErrorKind::NotFound, "no font family available"),
    ))
}

/// Indicates whether a font family can be resolved without rendering anything.
pub fn default_fonts_available() -> bool {
    default_font_family().is_ok()
}
