//! Predefined worlds with the camera framing each one was composed for.

use crate::rtnextweek::*;

const SKY: Color = Color::new(0.70, 0.80, 1.00);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneKind {
    Random,
    TwoSpheres,
    TwoPerlinSpheres,
    SimpleLight,
    CornellBox,
}

pub struct Scene {
    pub world: HittableList,
    pub camera: CameraSettings,
    pub background: Color,
}

impl Scene {
    /// Build `kind`. `aspect_ratio` is the image's; the Cornell box
    /// ignores it and stays square.
    pub fn build(kind: SceneKind, aspect_ratio: f64, rng: &mut dyn RngCore) -> Self {
        match kind {
            SceneKind::Random => random_scene(aspect_ratio, rng),
            SceneKind::TwoSpheres => two_spheres(aspect_ratio),
            SceneKind::TwoPerlinSpheres => two_perlin_spheres(aspect_ratio, rng),
            SceneKind::SimpleLight => simple_light(aspect_ratio, rng),
            SceneKind::CornellBox => cornell_box(),
        }
    }
}

fn distant_view(aspect_ratio: f64, aperture: f64) -> CameraSettings {
    CameraSettings {
        look_from: Point3::new(13.0, 2.0, 3.0),
        look_at: Point3::zero(),
        vup: Vec3::new(0.0, 1.0, 0.0),
        vfov: 20.0,
        aspect_ratio,
        aperture,
        focus_dist: 10.0,
        time0: 0.0,
        time1: 1.0,
    }
}

fn checker() -> Arc<dyn Texture> {
    Arc::new(CheckerTexture::from_colors(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ))
}

fn random_scene(aspect_ratio: f64, rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();

    let ground_material: Arc<dyn Material> = Arc::new(Lambertian::new(checker()));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                0.2,
                b as f64 + 0.9 * random_f64(rng),
            );

            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = Color::random(rng) * Color::random(rng);
                let center2 = center + Vec3::new(0.0, random_f64_range(rng, 0.0, 0.5), 0.0);
                world.add(Arc::new(MovingSphere::new(
                    center,
                    center2,
                    0.0,
                    1.0,
                    0.2,
                    Arc::new(Lambertian::from_color(albedo)),
                )));
            } else if choose_mat < 0.95 {
                let albedo = Color::random_range(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                world.add(Arc::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                let radius = random_f64_range(rng, 0.1, 0.9);
                world.add(Arc::new(Sphere::new(center, radius, Arc::clone(&glass))));
            }
        }
    }

    world.add(Arc::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass)));
    world.add(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    Scene {
        world,
        camera: distant_view(aspect_ratio, 0.1),
        background: SKY,
    }
}

fn two_spheres(aspect_ratio: f64) -> Scene {
    let mut world = HittableList::new();
    let checker_material: Arc<dyn Material> = Arc::new(Lambertian::new(checker()));

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -10.0, 0.0),
        10.0,
        Arc::clone(&checker_material),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 10.0, 0.0),
        10.0,
        checker_material,
    )));

    Scene {
        world,
        camera: distant_view(aspect_ratio, 0.0),
        background: SKY,
    }
}

fn perlin_pair(rng: &mut dyn RngCore) -> HittableList {
    let pertext: Arc<dyn Material> =
        Arc::new(Lambertian::new(Arc::new(NoiseTexture::with_default_scale(rng))));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::clone(&pertext),
    )));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 2.0, 0.0), 2.0, pertext)));
    world
}

fn two_perlin_spheres(aspect_ratio: f64, rng: &mut dyn RngCore) -> Scene {
    Scene {
        world: perlin_pair(rng),
        camera: distant_view(aspect_ratio, 0.0),
        background: SKY,
    }
}

fn simple_light(aspect_ratio: f64, rng: &mut dyn RngCore) -> Scene {
    let mut world = perlin_pair(rng);
    let difflight: Arc<dyn Material> =
        Arc::new(DiffuseLight::from_color(Color::new(4.0, 4.0, 4.0)));
    world.add(Arc::new(AaRect::xy((3.0, 5.0), (1.0, 3.0), -2.0, difflight)));

    Scene {
        world,
        camera: CameraSettings {
            look_from: Point3::new(26.0, 3.0, 6.0),
            look_at: Point3::new(0.0, 2.0, 0.0),
            ..distant_view(aspect_ratio, 0.0)
        },
        background: Color::zero(),
    }
}

fn cornell_box() -> Scene {
    let mut world = HittableList::new();

    let red: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::new(15.0, 15.0, 15.0)));

    let wall = (0.0, 555.0);
    world.add(Arc::new(AaRect::yz(wall, wall, 555.0, green)));
    world.add(Arc::new(AaRect::yz(wall, wall, 0.0, red)));
    world.add(Arc::new(AaRect::xz((213.0, 343.0), (227.0, 332.0), 554.0, light)));
    world.add(Arc::new(AaRect::xz(wall, wall, 0.0, Arc::clone(&white))));
    world.add(Arc::new(AaRect::xz(wall, wall, 555.0, Arc::clone(&white))));
    world.add(Arc::new(AaRect::xy(wall, wall, 555.0, Arc::clone(&white))));

    let tall: Arc<dyn Hittable> = Arc::new(Cuboid::new(
        Point3::zero(),
        Point3::new(165.0, 330.0, 165.0),
        Arc::clone(&white),
    ));
    let tall = Arc::new(Rotate::about_y(tall, 15.0));
    world.add(Arc::new(Translate::new(tall, Vec3::new(265.0, 0.0, 295.0))));

    let short: Arc<dyn Hittable> = Arc::new(Cuboid::new(
        Point3::zero(),
        Point3::new(165.0, 165.0, 165.0),
        white,
    ));
    let short = Arc::new(Rotate::about_y(short, -18.0));
    world.add(Arc::new(Translate::new(short, Vec3::new(130.0, 0.0, 65.0))));

    Scene {
        world,
        camera: CameraSettings {
            look_from: Point3::new(278.0, 278.0, -800.0),
            look_at: Point3::new(278.0, 278.0, 0.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 40.0,
            aspect_ratio: 1.0,
            aperture: 0.0,
            focus_dist: 10.0,
            time0: 0.0,
            time1: 1.0,
        },
        background: Color::zero(),
    }
}
