//! Wavefront OBJ scene loading.
//!
//! Geometry is accumulated while the file parses and committed to the scene
//! only once the whole load has succeeded, so a failed load never leaves
//! partial geometry behind.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use lumen_math::DVec3;
use lumen_renderer::{Color, Material, Object, Phong, Scene, Triangle};

/// Errors that can occur while loading an OBJ scene file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ parse error: {0}")]
    Parse(#[from] tobj::LoadError),

    #[error("no geometry found in OBJ file")]
    NoGeometry,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Load an OBJ file into the scene.
///
/// Material libraries are resolved relative to the OBJ file's directory.
pub fn load_obj(scene: &mut Scene, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let base_dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

    let (models, materials) = tobj::load_obj_buf(&mut reader, &load_options(), |mtl_path| {
        tobj::load_mtl(base_dir.join(mtl_path))
    })?;

    populate(scene, &models, materials)
}

/// Load OBJ data from an in-memory reader.
///
/// Material library references cannot be resolved without a directory, so
/// every mesh gets the default material.
pub fn load_obj_reader(scene: &mut Scene, reader: &mut impl BufRead) -> Result<(), LoadError> {
    let (models, materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        tobj::load_mtl_buf(&mut io::Cursor::new(&b""[..]))
    })?;

    populate(scene, &models, materials)
}

/// Map an MTL material onto the Phong model: diffuse color plus shininess,
/// with the stock coefficients for everything the format does not carry.
fn phong_from_mtl(material: &tobj::Material) -> Phong {
    let [r, g, b] = material.diffuse;
    let mut phong = Phong::new(Color::new(f64::from(r), f64::from(g), f64::from(b)));
    if material.shininess > 0.0 {
        phong.specular_n = f64::from(material.shininess);
    }
    phong
}

fn vertex(mesh: &tobj::Mesh, index: u32) -> DVec3 {
    let i = index as usize * 3;
    DVec3::new(
        f64::from(mesh.positions[i]),
        f64::from(mesh.positions[i + 1]),
        f64::from(mesh.positions[i + 2]),
    )
}

fn populate(
    scene: &mut Scene,
    models: &[tobj::Model],
    materials: Result<Vec<tobj::Material>, tobj::LoadError>,
) -> Result<(), LoadError> {
    // A broken material library degrades to default materials rather than
    // failing the whole load
    let materials = materials.unwrap_or_else(|err| {
        log::warn!("ignoring material library: {err}");
        Vec::new()
    });

    let palette: Vec<Arc<dyn Material>> = materials
        .iter()
        .map(|m| Arc::new(phong_from_mtl(m)) as Arc<dyn Material>)
        .collect();
    let fallback: Arc<dyn Material> = Arc::new(Phong::default());

    let mut objects: Vec<Box<dyn Object>> = Vec::new();
    let mut degenerate = 0usize;

    for model in models {
        let mesh = &model.mesh;
        let material = mesh
            .material_id
            .and_then(|id| palette.get(id))
            .unwrap_or(&fallback);

        for tri in mesh.indices.chunks_exact(3) {
            let vertices = [vertex(mesh, tri[0]), vertex(mesh, tri[1]), vertex(mesh, tri[2])];
            let [v0, v1, v2] = vertices;
            // A zero-area triangle has no plane normal to shade with
            if (v1 - v0).cross(v2 - v0).length_squared() == 0.0 {
                degenerate += 1;
                continue;
            }
            objects.push(Box::new(Triangle::new(vertices, material.clone())));
        }
    }

    if degenerate > 0 {
        log::warn!("skipped {degenerate} degenerate triangles");
    }
    if objects.is_empty() {
        return Err(LoadError::NoGeometry);
    }

    log::info!("loaded {} triangles from {} meshes", objects.len(), models.len());
    scene.extend_objects(objects);
    Ok(())
}
