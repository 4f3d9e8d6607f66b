//! Layered-circle diagram rendering
//!
//! A ring of base circles, one top circle above the ring, and a straight
//! line from the top circle to every base circle, written out as a PNG.

mod color;
mod layout;
mod render;

pub use color::parse_color;
pub use layout::{Circle, DiagramLayout, Line, Point, CANVAS_SIZE};
pub use render::{rasterize, Palette};

use crate::config::DiagramSettings;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory, relative to the working directory, that `draw` writes into
pub const DIAGRAM_DIR: &str = "diagrams";

/// Parameters of one diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSpec {
    pub base_circle_count: usize,
    pub base_circle_color: String,
    pub top_circle_color: String,
    pub line_color: String,
    pub line_width: u32,
    /// File stem of the output image
    pub output_name: String,
}

impl DiagramSpec {
    /// Spec using the configured defaults
    pub fn new(output_name: impl Into<String>, defaults: &DiagramSettings) -> Self {
        Self {
            base_circle_count: defaults.base_circle_count,
            base_circle_color: defaults.base_circle_color.clone(),
            top_circle_color: defaults.top_circle_color.clone(),
            line_color: defaults.line_color.clone(),
            line_width: defaults.line_width,
            output_name: output_name.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_circle_count == 0 {
            return Err(Error::Config(
                "base_circle_count must be at least 1".to_string(),
            ));
        }
        if self.line_width == 0 {
            return Err(Error::Config("line_width must be at least 1".to_string()));
        }
        let name = self.output_name.trim();
        if name.is_empty() {
            return Err(Error::Config("output_name must not be empty".to_string()));
        }
        if name.contains(&['/', '\\'][..]) || name == "." || name == ".." {
            return Err(Error::Config(format!(
                "output_name must be a plain file name, got {:?}",
                self.output_name
            )));
        }
        Ok(())
    }

    fn file_name(&self) -> String {
        if self.output_name.ends_with(".png") {
            self.output_name.clone()
        } else {
            format!("{}.png", self.output_name)
        }
    }
}

/// Render into `diagrams/` under the working directory
pub fn draw(spec: &DiagramSpec) -> Result<PathBuf> {
    draw_in(DIAGRAM_DIR, spec)
}

/// Render into `dir`, creating it if needed, and return the image path
pub fn draw_in(dir: impl AsRef<Path>, spec: &DiagramSpec) -> Result<PathBuf> {
    spec.validate()?;

    let palette = Palette {
        base: parse_color(&spec.base_circle_color)?,
        top: parse_color(&spec.top_circle_color)?,
        line: parse_color(&spec.line_color)?,
        line_width: spec.line_width,
    };

    let layout = DiagramLayout::compute(spec.base_circle_count);
    let img = rasterize(&layout, &palette);

    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let path = dir.join(spec.file_name());
    img.save_with_format(&path, image::ImageFormat::Png)
        .map_err(|e| Error::Render(format!("failed to write {}: {}", path.display(), e)))?;

    info!(
        "Drew {} base circles to {}",
        spec.base_circle_count,
        path.display()
    );
    Ok(path)
}
