use config::{File, FileFormat};
use petals::Page;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Page file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Unsupported page format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Failed to parse page: {0}")]
    Parse(#[from] config::ConfigError),
}

fn format_for(path: &Path) -> Result<FileFormat, DocumentError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        _ => Err(DocumentError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Reads a page description (TOML or JSON, by extension).
pub fn load_page(path: &Path) -> Result<Page, DocumentError> {
    if !path.is_file() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    let format = format_for(path)?;

    let page = config::Config::builder()
        .add_source(File::from(path).format(format))
        .build()?
        .try_deserialize()?;

    log::debug!("Loaded page from {}", path.display());
    Ok(page)
}

pub fn parse_page(source: &str, format: FileFormat) -> Result<Page, DocumentError> {
    Ok(config::Config::builder()
        .add_source(File::from_str(source, format))
        .build()?
        .try_deserialize()?)
}
