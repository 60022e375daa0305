//! Tiled parallel rendering.
//!
//! The image is cut into square tiles ("buckets") of `bucket_size` pixels.
//! Tiles are rendered independently on the rayon pool, center first, and
//! copied into one buffer afterwards. Each pixel goes through the same
//! [`render_pixel`] call as in the serial loop, so both renderers produce
//! identical buffers.

use std::time::Instant;

use lumen_core::CameraBasis;
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::renderer::{prepare, render_pixel, ImageBuffer, RenderConfig};
use crate::scene::Scene;
use lumen_math::Color;

/// Tile edge used when no size is configured.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// One tile of the output raster.
///
/// Edge tiles are clipped to the image, so `width` and `height` may be
/// smaller than the configured bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub row: u32,
    pub column: u32,
    pub width: u32,
    pub height: u32,
    /// Position in render order (0 renders first)
    pub index: usize,
}

impl Bucket {
    pub fn new(row: u32, column: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            row,
            column,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from the tile's midpoint to `(row, column)`.
    fn distance_squared(&self, row: f32, column: f32) -> f32 {
        let mid_row = self.row as f32 + self.height as f32 * 0.5;
        let mid_column = self.column as f32 + self.width as f32 * 0.5;
        (mid_row - row).powi(2) + (mid_column - column).powi(2)
    }
}

/// Tile a `height` x `width` raster, ordered outward from the image center.
///
/// `bucket_size` must be positive.
pub fn generate_buckets(height: u32, width: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size as usize;
    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step)
        .flat_map(move |row| {
            (0..width).step_by(step).map(move |column| {
                Bucket::new(
                    row,
                    column,
                    bucket_size.min(width - column),
                    bucket_size.min(height - row),
                    0,
                )
            })
        })
        .collect();

    let (center_row, center_column) = (height as f32 * 0.5, width as f32 * 0.5);
    // Stable: equidistant tiles stay in raster order
    buckets.sort_by(|a, b| {
        a.distance_squared(center_row, center_column)
            .total_cmp(&b.distance_squared(center_row, center_column))
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }
    buckets
}

/// Render the pixels of one tile, row-major within the tile.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    basis: &CameraBasis,
    height: u32,
    width: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    let rows = bucket.row..bucket.row + bucket.height;
    rows.flat_map(move |row| {
        (bucket.column..bucket.column + bucket.width)
            .map(move |column| render_pixel(scene, basis, row, column, height, width, config))
    })
    .collect()
}

/// A rendered tile waiting to be gathered into the image.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Row-major within the tile
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the tile into its place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let width = self.bucket.width as usize;
        for (local_row, line) in self.pixels.chunks_exact(width).enumerate() {
            let row = self.bucket.row + local_row as u32;
            for (local_column, color) in line.iter().enumerate() {
                image.set(row, self.bucket.column + local_column as u32, *color);
            }
        }
    }
}

/// Render the entire scene with buckets distributed over the rayon thread pool.
pub fn render_parallel(
    scene: &Scene,
    height: u32,
    width: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    if config.bucket_size == 0 {
        return Err(RenderError::InvalidBucketSize);
    }
    let basis = prepare(scene, height, width, config)?;
    let start = Instant::now();

    let buckets = generate_buckets(height, width, config.bucket_size);
    log::debug!(
        "Rendering {} buckets of up to {}px on {} threads",
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, scene, &basis, height, width, config);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!(
        "Rendered {}x{} ({} buckets) in {:?}",
        width,
        height,
        results.len(),
        start.elapsed()
    );
    Ok(image)
}
