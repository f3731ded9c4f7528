//! The **Film** collects 2D points on a raster, either to print them
//! as a letter grid or to write them out as an 8-bit grayscale image.

// std
use std::path::Path;
// others
use tracing::info;
// halton
use crate::core::error::{HaltonError, Result};
use crate::core::halton::Float;

const LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub struct Film {
    pub width: u32,
    pub height: u32,
    /// Hits per pixel, row by row
    hits: Vec<u32>,
    /// Label of the last point placed in each pixel
    labels: Vec<Option<char>>,
    points_added: usize,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Result<Film> {
        if width == 0 || height == 0 {
            return Err(HaltonError::InvalidArgument(format!(
                "film resolution {}x{} has no pixels",
                width, height
            )));
        }
        let area: usize = width as usize * height as usize;
        Ok(Film {
            width,
            height,
            hits: vec![0_u32; area],
            labels: vec![None; area],
            points_added: 0,
        })
    }
    fn pixel_offset(&self, p: &[Float]) -> Result<usize> {
        if p.len() < 2 {
            return Err(HaltonError::InvalidArgument(format!(
                "a film needs 2D points, got {} coordinate(s)",
                p.len()
            )));
        }
        let x: u32 = std::cmp::min((p[0] * self.width as Float) as u32, self.width - 1);
        let y: u32 = std::cmp::min((p[1] * self.height as Float) as u32, self.height - 1);
        Ok(y as usize * self.width as usize + x as usize)
    }
    /// Place a point; only its first two coordinates are used. Later
    /// points replace the label of earlier ones in the same pixel.
    pub fn add_point(&mut self, p: &[Float]) -> Result<()> {
        let offset: usize = self.pixel_offset(p)?;
        self.hits[offset] = self.hits[offset].saturating_add(1);
        self.labels[offset] = Some(LABELS.chars().nth(self.points_added).unwrap_or('*'));
        self.points_added += 1;
        Ok(())
    }
    /// Hits of pixel (`x`, `y`), `None` outside the raster.
    pub fn hits(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.hits
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
    /// One line per row, labelled pixels show the letter of their point
    /// (A-Z, then a-z, then `*`), empty ones a dot.
    pub fn to_ascii(&self) -> String {
        self.labels
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|label| label.unwrap_or('.').to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
    /// Write the hit counts as a grayscale image, the busiest pixel
    /// white. The format follows the file extension.
    pub fn write_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let max_hits: u32 = self.hits.iter().copied().max().unwrap_or(0);
        let buffer: Vec<u8> = self
            .hits
            .iter()
            .map(|h| {
                if max_hits == 0 {
                    0_u8
                } else {
                    ((*h as Float / max_hits as Float) * 255.0 as Float).round() as u8
                }
            })
            .collect();
        info!(
            "Writing image {:?} with {} point(s) on {}x{} pixels",
            path.as_ref(),
            self.points_added,
            self.width,
            self.height
        );
        image::save_buffer(
            path,
            &buffer,
            self.width,
            self.height,
            image::ColorType::L8,
        )?;
        Ok(())
    }
}
