use std::path::PathBuf;

use image::{Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::grid::{Grid, Point};

/// Colors used for the exported frames.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub alive: Rgb<u8>,
    pub dead: Rgb<u8>,
    pub target_empty: Rgb<u8>,
    pub target_occupied: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Rgb([190, 190, 190]),
            dead: Rgb([43, 43, 43]),
            target_empty: Rgb([0, 0, 0]),
            target_occupied: Rgb([255, 255, 255]),
        }
    }
}

/// Writes one 24-bit BMP per generation into a directory, named `0000.bmp`,
/// `0001.bmp`, ...
///
/// Purely observational: nothing here feeds back into the simulation.
#[derive(Clone, Debug)]
pub struct FrameExporter {
    dir: PathBuf,
    magnification: u32,
    palette: Palette,
}

impl FrameExporter {
    pub const DEFAULT_MAGNIFICATION: u32 = 10;

    pub fn new(dir: impl Into<PathBuf>, magnification: u32) -> Self {
        Self {
            dir: dir.into(),
            magnification: magnification.max(1),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn frame_path(&self, generation: u32) -> PathBuf {
        self.dir.join(format!("{:04}.bmp", generation))
    }

    /// Renders the interior, each cell as a `magnification`-sized square.
    ///
    /// Fails with [`Error::Argument`] when the image side overflows `u32`.
    pub fn render(&self, grid: &Grid, target: Point) -> Result<RgbImage> {
        let side = u32::try_from(grid.size())
            .ok()
            .and_then(|n| n.checked_mul(self.magnification))
            .ok_or_else(|| {
                Error::Argument(format!(
                    "magnification {} is too large for a {}x{} grid",
                    self.magnification,
                    grid.size(),
                    grid.size()
                ))
            })?;
        Ok(RgbImage::from_fn(side, side, |px, py| {
            let row = (py / self.magnification) as usize + Grid::BORDER;
            let col = (px / self.magnification) as usize + Grid::BORDER;
            let alive = grid.cell_at(row, col);
            match (Point::new(col, row) == target, alive) {
                (true, true) => self.palette.target_occupied,
                (true, false) => self.palette.target_empty,
                (false, true) => self.palette.alive,
                (false, false) => self.palette.dead,
            }
        }))
    }

    pub fn export(&self, grid: &Grid, target: Point, generation: u32) -> Result<PathBuf> {
        let path = self.frame_path(generation);
        self.render(grid, target)?
            .save_with_format(&path, image::ImageFormat::Bmp)
            .map_err(|source| Error::FrameExport {
                path: path.clone(),
                source,
            })?;
        log::trace!("frame {} written to {}", generation, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_palette() {
        let exporter = FrameExporter::new("unused", 2);
        let grid = Grid::from_cells(4, [(1, 1), (2, 3)]);
        let img = exporter.render(&grid, Point::new(3, 2)).unwrap();
        let p = Palette::default();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(0, 0), p.alive);
        assert_eq!(*img.get_pixel(1, 1), p.alive);
        assert_eq!(*img.get_pixel(2, 0), p.dead);
        // target cell (x=3, y=2) is alive
        assert_eq!(*img.get_pixel(4, 2), p.target_occupied);
        assert_eq!(*img.get_pixel(5, 3), p.target_occupied);

        let img = exporter.render(&Grid::new(4), Point::new(3, 2)).unwrap();
        assert_eq!(*img.get_pixel(4, 2), p.target_empty);
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette {
            alive: Rgb([255, 0, 0]),
            dead: Rgb([0, 0, 255]),
            ..Palette::default()
        };
        let exporter = FrameExporter::new("unused", 1).with_palette(palette);
        let grid = Grid::from_cells(3, [(2, 2)]);
        let img = exporter.render(&grid, Point::new(3, 3)).unwrap();
        assert_eq!(*img.get_pixel(1, 1), palette.alive);
        assert_eq!(*img.get_pixel(0, 0), palette.dead);
        assert_eq!(*img.get_pixel(2, 2), palette.target_empty);
    }

    #[test]
    fn test_oversized_magnification_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path(), u32::MAX);
        let grid = Grid::from_cells(4, [(1, 1)]);
        let err = exporter.render(&grid, Point::new(1, 1)).unwrap_err();
        assert!(matches!(err, Error::Argument(_)));

        let err = exporter.export(&grid, Point::new(1, 1), 0).unwrap_err();
        assert!(matches!(err, Error::Argument(_)));
        assert!(!exporter.frame_path(0).exists());
    }

    #[test]
    fn test_export_writes_bmp() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path(), 3);
        let grid = Grid::from_cells(5, [(2, 2), (2, 3), (2, 4)]);
        let path = exporter.export(&grid, Point::new(5, 5), 7).unwrap();
        assert_eq!(path, dir.path().join("0007.bmp"));

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"BM");
        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (15, 15));
        assert_eq!(*img.get_pixel(4, 4), Palette::default().alive);
        assert_eq!(*img.get_pixel(0, 0), Palette::default().dead);
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FrameExporter::new(dir.path().join("missing"), 1);
        let err = exporter.export(&Grid::new(3), Point::new(1, 1), 0).unwrap_err();
        assert!(matches!(err, Error::FrameExport { .. }));
    }
}
