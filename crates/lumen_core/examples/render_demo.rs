//! Render the built-in demo scene.
//!
//! Renders the three-sphere demo scene and saves it as demo.bmp.

use lumen_core::demo_scene;
use lumen_renderer::{render, Color, ImageBuffer, RenderConfig};

fn main() {
    let width = 400;
    let height = 400;

    let scene = demo_scene(f64::from(width) / f64::from(height));
    println!("Scene holds {} objects", scene.object_count());

    let mut image = ImageBuffer::new(width, height);
    image.clear(Color::ZERO);

    let config = RenderConfig::default();
    let start = std::time::Instant::now();
    render(&scene, &config, &mut image).expect("render workers failed");
    println!("Rendered {}x{} in {:?}", width, height, start.elapsed());

    let filename = "demo.bmp";
    image::save_buffer_with_format(
        filename,
        &image.to_rgb8(),
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Bmp,
    )
    .expect("failed to save image");
    println!("Saved to {filename}");
}
