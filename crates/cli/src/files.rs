use anyhow::{bail, Context, Result};
use pointser::{DecodeCfg, Format, PointVariant};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Map a file extension to its format.
pub fn format_for_extension(ext: &str) -> Option<Format> {
    match ext.to_ascii_lowercase().as_str() {
        "bin" => Some(Format::Binary),
        "soap" => Some(Format::Soap),
        "xml" => Some(Format::Xml),
        "json" => Some(Format::Json),
        "yaml" | "yml" => Some(Format::Yaml),
        "myml" => Some(Format::Custom),
        _ => None,
    }
}

/// Explicit `--format` wins; otherwise infer from the path's extension.
pub fn resolve_format(path: &Path, explicit: Option<&str>) -> Result<Format> {
    if let Some(name) = explicit {
        return Ok(name.parse()?);
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        bail!(
            "cannot infer a format for {} (no extension); pass --format",
            path.display()
        );
    };
    match format_for_extension(ext) {
        Some(format) => Ok(format),
        None => bail!("unknown extension `.{ext}` for {}; pass --format", path.display()),
    }
}

pub fn load(path: &Path, format: Format, cfg: DecodeCfg) -> Result<Vec<PointVariant>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let points = pointser::read_from(format, &mut BufReader::new(file), cfg)
        .with_context(|| format!("reading {} as {format}", path.display()))?;
    Ok(points)
}

pub fn save(path: &Path, format: Format, points: &[PointVariant]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    pointser::write_to(format, points, &mut BufWriter::new(file))
        .with_context(|| format!("writing {} as {format}", path.display()))?;
    Ok(())
}
