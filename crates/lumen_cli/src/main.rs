//! lumen - offline ray tracer.
//!
//! Renders an OBJ scene to a BMP image: `lumen SCENE.obj OUTPUT.bmp
//! [--normals] [--distances]`.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use lumen_core::load_obj;
use lumen_renderer::{
    color_from_rgb8, focal_distance_from_fov, render, worker_count, Camera, Color, DVec3,
    ImageBuffer, Light, RenderConfig, RenderMode, Scene,
};

/// Output resolution in pixels.
const IMAGE_WIDTH: u32 = 1000;
const IMAGE_HEIGHT: u32 = 1000;

/// Exit codes for the failure taxonomy: every failure is terminal.
const EXIT_FAILURE: i32 = 1;
const EXIT_SCENE_LOAD: i32 = 41;
const EXIT_RENDER_WORKER: i32 = 42;

#[derive(Debug, Parser)]
#[command(name = "lumen", about = "Offline CPU ray tracer")]
struct Cli {
    /// Wavefront OBJ scene to render
    scene: PathBuf,

    /// Output image path (BMP)
    output: PathBuf,

    /// Visualize surface normals instead of shading
    #[arg(long, overrides_with = "distances")]
    normals: bool,

    /// Visualize hit distances as a grayscale depth map
    #[arg(long, overrides_with = "normals")]
    distances: bool,
}

impl Cli {
    fn mode(&self) -> RenderMode {
        if self.normals {
            RenderMode::Normals
        } else if self.distances {
            RenderMode::Distances
        } else {
            RenderMode::Shaded
        }
    }
}

/// Camera and lighting for OBJ scenes.
///
/// The models point down -Z with +Y up, so the camera sits above and in
/// front, looking down at the origin.
fn obj_scene(aspect_ratio: f64) -> Scene {
    let width = 7.0;
    let camera = Camera {
        center: DVec3::new(-0.5, 2.0, 2.0),
        forward: DVec3::new(0.5, -1.0, -2.0).normalize(),
        up: DVec3::Y,
        width,
        height: width / aspect_ratio,
        focal_distance: focal_distance_from_fov(width, 40.0),
    };
    let light = Light::new(
        DVec3::new(-1.0, -1.0, -1.0),
        color_from_rgb8(255, 255, 255),
        5.0,
    );
    Scene::new(camera, light)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; only real usage errors
            // are failures
            let failed = err.use_stderr();
            let _ = err.print();
            process::exit(if failed { EXIT_FAILURE } else { 0 });
        }
    };

    let mut image = ImageBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT);
    image.clear(Color::ZERO);

    let aspect_ratio = f64::from(IMAGE_WIDTH) / f64::from(IMAGE_HEIGHT);
    let mut scene = obj_scene(aspect_ratio);

    if let Err(err) = load_obj(&mut scene, &cli.scene) {
        log::error!("failed to load {}: {err}", cli.scene.display());
        process::exit(EXIT_SCENE_LOAD);
    }
    log::info!(
        "loaded {} objects from {}",
        scene.object_count(),
        cli.scene.display()
    );

    let config = RenderConfig {
        mode: cli.mode(),
        ..RenderConfig::default()
    };

    let start = Instant::now();
    if let Err(err) = render(&scene, &config, &mut image) {
        log::error!("render failed: {err}");
        process::exit(EXIT_RENDER_WORKER);
    }
    log::info!(
        "rendered {IMAGE_WIDTH}x{IMAGE_HEIGHT} on {} workers in {:.2?}",
        worker_count(),
        start.elapsed()
    );

    if let Err(err) = image::save_buffer_with_format(
        &cli.output,
        &image.to_rgb8(),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        image::ColorType::Rgb8,
        image::ImageFormat::Bmp,
    ) {
        log::error!("failed to write {}: {err}", cli.output.display());
        process::exit(EXIT_FAILURE);
    }
    log::info!("wrote {}", cli.output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_positionals_fail() {
        assert!(Cli::try_parse_from(["lumen"]).is_err());
        assert!(Cli::try_parse_from(["lumen", "scene.obj"]).is_err());
    }

    #[test]
    fn test_default_mode_is_shaded() {
        let cli = Cli::try_parse_from(["lumen", "scene.obj", "out.bmp"]).unwrap();
        assert_eq!(cli.mode(), RenderMode::Shaded);
    }

    #[test]
    fn test_last_mode_flag_wins() {
        let cli =
            Cli::try_parse_from(["lumen", "scene.obj", "out.bmp", "--normals", "--distances"])
                .unwrap();
        assert_eq!(cli.mode(), RenderMode::Distances);

        let cli =
            Cli::try_parse_from(["lumen", "scene.obj", "out.bmp", "--distances", "--normals"])
                .unwrap();
        assert_eq!(cli.mode(), RenderMode::Normals);
    }

    #[test]
    fn test_obj_scene_camera_is_normalized() {
        let scene = obj_scene(1.0);
        assert!((scene.camera.forward.length() - 1.0).abs() < 1e-12);
        assert!((scene.light.direction.length() - 1.0).abs() < 1e-12);
        assert!(scene.camera.focal_distance > 0.0);
    }
}
