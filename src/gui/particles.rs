use eframe::egui::{
    self,
    Painter,
    Pos2,
    Rect,
    Stroke,
};
use rand::{
    rng,
    Rng,
};

use super::theme::{
    blend_colors,
    Theme,
};

const PARTICLE_COUNT: usize = 150;
const SHAPE_COUNT: usize = 20;
const FIELD_EXTENT: f32 = 7.5;
const SHAPE_EXTENT: f32 = 10.0;

// Camera sits at z = 5 over the hero and eases back to 8 as the hero
// scrolls away.
const BASE_CAMERA: f32 = 5.0;
const CAMERA_SCROLL_RANGE: f32 = 3.0;
const NEAR_PLANE: f32 = 0.5;

/// One drifting point of the golden dust field.
struct Particle {
    home: [f32; 3],
    tint: f32, // gold..copper lerp position
    size: f32,
}

/// A floating wireframe polyhedron.
struct WireShape {
    center: [f32; 3],
    vertices: Vec<[f32; 3]>,
    edges: Vec<(usize, usize)>,
}

/// The decorative backdrop: randomly seeded once at startup, then animated
/// purely as a function of the frame clock and scroll position. Holds no
/// business state and is dropped with the app.
pub struct ParticleField {
    particles: Vec<Particle>,
    shapes: Vec<WireShape>,
}

impl ParticleField {
    pub fn new() -> Self {
        let mut rng = rng();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                home: [
                    rng.random_range(-FIELD_EXTENT..FIELD_EXTENT),
                    rng.random_range(-FIELD_EXTENT..FIELD_EXTENT),
                    rng.random_range(-FIELD_EXTENT..FIELD_EXTENT),
                ],
                tint: rng.random::<f32>(),
                size: rng.random_range(0.012..0.035),
            })
            .collect();

        let solids = [
            scaled_solid(octahedron_vertices(), 0.25),
            scaled_solid(tetrahedron_vertices(), 0.20),
            scaled_solid(icosahedron_vertices(), 0.15),
        ];

        let shapes = (0..SHAPE_COUNT)
            .map(|_| {
                let (vertices, edges) = solids[rng.random_range(0..solids.len())].clone();
                WireShape {
                    center: [
                        rng.random_range(-SHAPE_EXTENT..SHAPE_EXTENT),
                        rng.random_range(-SHAPE_EXTENT..SHAPE_EXTENT),
                        rng.random_range(-SHAPE_EXTENT..SHAPE_EXTENT),
                    ],
                    vertices,
                    edges,
                }
            })
            .collect();

        Self { particles, shapes }
    }

    /// Paint one frame into `rect`. `scroll_progress` is how far the hero has
    /// been scrolled away, in 0..=1.
    pub fn paint(
        &self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        theme: &Theme,
        scroll_progress: f32,
    ) {
        let time = ctx.input(|i| i.time) as f32;
        let center = rect.center();
        let focal = rect.height() * 0.65;
        let camera = BASE_CAMERA + CAMERA_SCROLL_RANGE * scroll_progress;

        let gold = theme.gold(ctx);
        let copper = theme.copper(ctx);

        // Slow ambient turn, plus the scroll-scrubbed extra rotation of the
        // whole field.
        let field_yaw = time * 0.06 + scroll_progress * 3.0 * std::f32::consts::PI;
        let field_pitch = time * 0.03;

        for particle in &self.particles {
            let world = rotate_y(rotate_x(particle.home, field_pitch), field_yaw);
            if let Some((screen, depth_scale)) = project(world, camera, focal, center) {
                let color = blend_colors(gold, copper, particle.tint).gamma_multiply(0.5);
                let radius = (particle.size * depth_scale).clamp(0.7, 4.0);
                painter.circle_filled(screen, radius, color);
            }
        }

        let wire = Stroke::new(1.0, gold.gamma_multiply(0.3));
        for (index, shape) in self.shapes.iter().enumerate() {
            let i = index as f32;
            let pitch = time * (0.6 + 0.06 * i);
            let yaw = time * (0.48 + 0.048 * i);
            let bob = (time + i).sin() * 0.12;

            for &(a, b) in &shape.edges {
                let mut endpoints = [Pos2::ZERO; 2];
                let mut on_screen = true;
                for (slot, &vertex) in [a, b].iter().enumerate() {
                    let local = rotate_y(rotate_x(shape.vertices[vertex], pitch), yaw);
                    let world = [
                        shape.center[0] + local[0],
                        shape.center[1] + bob + local[1],
                        shape.center[2] + local[2],
                    ];
                    match project(world, camera, focal, center) {
                        Some((screen, _)) => endpoints[slot] = screen,
                        None => {
                            on_screen = false;
                            break;
                        }
                    }
                }
                if on_screen {
                    painter.line_segment(endpoints, wire);
                }
            }
        }
    }
}

fn rotate_x(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [p[0], p[1] * cos - p[2] * sin, p[1] * sin + p[2] * cos]
}

fn rotate_y(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [p[0] * cos + p[2] * sin, p[1], -p[0] * sin + p[2] * cos]
}

/// Perspective projection onto the screen plane. Returns the screen point and
/// the depth scale factor, or `None` behind the near plane.
fn project(p: [f32; 3], camera: f32, focal: f32, center: Pos2) -> Option<(Pos2, f32)> {
    let depth = camera - p[2];
    if depth < NEAR_PLANE {
        return None;
    }
    let scale = focal / depth;
    Some((Pos2::new(center.x + p[0] * scale, center.y - p[1] * scale), scale))
}

fn scaled_solid(vertices: Vec<[f32; 3]>, scale: f32) -> (Vec<[f32; 3]>, Vec<(usize, usize)>) {
    let edges = edges_for(&vertices);
    let vertices = vertices
        .into_iter()
        .map(|v| [v[0] * scale, v[1] * scale, v[2] * scale])
        .collect();
    (vertices, edges)
}

/// Connect every vertex pair at the solid's minimum pair distance. For the
/// regular solids used here that is exactly the edge set.
fn edges_for(vertices: &[[f32; 3]]) -> Vec<(usize, usize)> {
    let distance = |a: [f32; 3], b: [f32; 3]| {
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        let dz = a[2] - b[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    };

    let mut shortest = f32::INFINITY;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            shortest = shortest.min(distance(vertices[i], vertices[j]));
        }
    }

    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if distance(vertices[i], vertices[j]) <= shortest * 1.05 {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn octahedron_vertices() -> Vec<[f32; 3]> {
    vec![
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]
}

fn tetrahedron_vertices() -> Vec<[f32; 3]> {
    vec![[1.0, 1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0]]
}

fn icosahedron_vertices() -> Vec<[f32; 3]> {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut vertices = Vec::with_capacity(12);
    for &a in &[-1.0, 1.0] {
        for &b in &[-phi, phi] {
            vertices.push([0.0, a, b]);
            vertices.push([a, b, 0.0]);
            vertices.push([b, 0.0, a]);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_has_fixed_population() {
        let field = ParticleField::new();
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        assert_eq!(field.shapes.len(), SHAPE_COUNT);
    }

    #[test]
    fn solids_have_the_right_edge_counts() {
        assert_eq!(edges_for(&octahedron_vertices()).len(), 12);
        assert_eq!(edges_for(&tetrahedron_vertices()).len(), 6);
        assert_eq!(edges_for(&icosahedron_vertices()).len(), 30);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let center = Pos2::new(400.0, 300.0);
        assert!(project([0.0, 0.0, 10.0], 5.0, 500.0, center).is_none());
        assert!(project([0.0, 0.0, 0.0], 5.0, 500.0, center).is_some());
    }

    #[test]
    fn projection_is_centered_and_scales_with_depth() {
        let center = Pos2::new(400.0, 300.0);
        let (screen, scale) = project([0.0, 0.0, 0.0], 5.0, 500.0, center).unwrap();
        assert_eq!(screen, center);
        assert!((scale - 100.0).abs() < f32::EPSILON);

        let (_, nearer) = project([0.0, 0.0, 2.5], 5.0, 500.0, center).unwrap();
        assert!(nearer > scale, "nearer points project larger");
    }
}
