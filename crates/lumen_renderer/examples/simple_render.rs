//! Simple Phong render example.
//!
//! Renders a few spheres on a floor and saves the result as a PNG.

use lumen_renderer::{
    render_parallel, Attenuation, Camera, Color, Light, Material, Plane, Pygment, RenderConfig,
    Scene, SceneObject, Sphere, Vec3,
};

fn main() {
    env_logger::init();

    println!("Lumen Phong Renderer - Simple Example");
    println!("=====================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let (width, height) = (800, 450);
    let config = RenderConfig::default();

    println!("Rendering {}x{}...", width, height);
    let start = std::time::Instant::now();
    let image = render_parallel(&scene, height, width, &config).expect("Failed to render scene");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image
        .to_rgb_image()
        .save(filename)
        .expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = Camera::new(
        Vec3::new(0.0, 1.5, 7.0), // eye
        Vec3::new(0.0, 0.5, 0.0), // target
        Vec3::new(0.0, 1.0, 0.0), // up
    )
    .with_fovy_degrees(45.0);

    let mut scene = Scene::new(camera);

    // Ground
    scene.add_object(SceneObject::new(
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
        Material::new(0.1, 0.8, 0.0, 1.0),
        Pygment::solid(Color::new(0.5, 0.5, 0.5)),
    ));

    // Three spheres
    scene.add_object(SceneObject::new(
        Sphere::new(Vec3::new(-2.2, 0.0, 0.0), 1.0),
        Material::new(0.1, 0.7, 0.3, 20.0),
        Pygment::solid(Color::new(0.8, 0.2, 0.2)),
    ));
    scene.add_object(SceneObject::new(
        Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0),
        Material::new(0.1, 0.6, 0.8, 120.0),
        Pygment::solid(Color::new(0.2, 0.7, 0.3)),
    ));
    scene.add_object(SceneObject::new(
        Sphere::new(Vec3::new(2.2, 0.0, 0.0), 1.0),
        Material::new(0.1, 0.9, 0.1, 5.0),
        Pygment::solid(Color::new(0.2, 0.3, 0.9)),
    ));

    scene.add_light(
        Light::new(Vec3::new(-6.0, 8.0, 6.0))
            .with_attenuation(Attenuation::new(1.0, 0.01, 0.001)),
    );
    scene.add_light(Light::new(Vec3::new(6.0, 4.0, 4.0)).with_color(Color::splat(0.4)));

    scene
}
