//! Row-banded parallel rendering.
//!
//! The image is partitioned into contiguous row bands, one per worker
//! thread. Each worker owns a disjoint mutable slice of the framebuffer,
//! so no synchronization is needed on the pixels; the scene is shared
//! read-only. All workers are spawned once per render and joined before
//! the caller may encode the image.

use std::ops::Range;
use std::thread;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::{render_pixel, Color, ImageBuffer, RenderConfig, Scene};

/// Worker count used when the machine will not report its parallelism.
pub const DEFAULT_WORKERS: usize = 4;

/// Worker-pool failures. Both are fatal to the render; a half-finished
/// image is never returned as success.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to spawn render worker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("render worker panicked")]
    Join,
}

/// Number of render workers: one per hardware thread when known.
pub fn worker_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_WORKERS)
}

/// Contiguous row ranges covering `[0, height)` exactly, one per worker.
///
/// Band k of n is `[k*height/n, (k+1)*height/n)` with integer division, so
/// shares differ by at most one row and nothing is skipped or repeated.
pub fn row_bands(height: u32, workers: usize) -> Vec<Range<u32>> {
    let workers = workers.max(1) as u64;
    let height = u64::from(height);

    (0..workers)
        .map(|k| {
            let start = (k * height / workers) as u32;
            let end = ((k + 1) * height / workers) as u32;
            start..end
        })
        .collect()
}

/// Render the scene into `image`, one OS thread per row band.
pub fn render(
    scene: &Scene,
    config: &RenderConfig,
    image: &mut ImageBuffer,
) -> Result<(), RenderError> {
    let width = image.width;
    let height = image.height;
    let workers = worker_count();
    let bands = row_bands(height, workers);
    debug!("rendering {width}x{height} across {workers} workers");

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut rest = image.pixels.as_mut_slice();

        for band in bands {
            let rows = (band.end - band.start) as usize;
            let (slice, tail) = rest.split_at_mut(rows * width as usize);
            rest = tail;

            let handle = thread::Builder::new()
                .name(format!("render-rows-{}-{}", band.start, band.end))
                .spawn_scoped(scope, move || {
                    render_band(scene, config, band, width, height, slice)
                })?;
            handles.push(handle);
        }

        for handle in handles {
            handle.join().map_err(|_| RenderError::Join)?;
        }
        Ok(())
    })
}

/// Worker body: render every pixel of one row band into its slice.
fn render_band(
    scene: &Scene,
    config: &RenderConfig,
    band: Range<u32>,
    width: u32,
    height: u32,
    slice: &mut [Color],
) {
    // Per-worker generator; sharing one across threads would race
    let mut rng = StdRng::from_entropy();

    for (row, y) in band.enumerate() {
        for x in 0..width {
            let color = render_pixel(scene, config, x, y, width, height, &mut rng);
            slice[row * width as usize + x as usize] = color;
        }
    }
}
