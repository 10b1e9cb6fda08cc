use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) albedo: [f32; 3],
}

impl Vertex {
    pub(crate) const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const GUNMETAL: [f32; 3] = [0.08, 0.08, 0.09];
const STEEL: [f32; 3] = [0.35, 0.35, 0.38];
const WALNUT: [f32; 3] = [0.22, 0.09, 0.04];

// Stand-in proportions; one unit here is a quarter of a model unit.
const UNIT: f32 = 0.25;

fn push_box(out: &mut Vec<Vertex>, center: Vec3, half: Vec3, albedo: [f32; 3]) {
    let c = center * UNIT;
    let h = half * UNIT;
    // (normal, tangent u, tangent v) per face
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| {
            let p = c + (n + u * su + v * sv) * h;
            Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                albedo,
            }
        };
        let (a, b, cc, d) = (
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        );
        out.extend_from_slice(&[a, b, cc, a, cc, d]);
    }
}

/// Procedural stand-in for the showcased weapon, centred on the origin and
/// pointing along +X.
pub(crate) fn build_showcase_mesh() -> Vec<Vertex> {
    let mut v = Vec::with_capacity(36 * 12);
    // receiver and top rail
    push_box(&mut v, Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.9, 0.12, 0.07), GUNMETAL);
    push_box(&mut v, Vec3::new(0.0, 0.15, 0.0), Vec3::new(0.7, 0.03, 0.03), STEEL);
    // barrel with cooling fins
    push_box(&mut v, Vec3::new(1.4, 0.03, 0.0), Vec3::new(0.5, 0.035, 0.035), STEEL);
    for i in 0..4 {
        let x = 1.05 + i as f32 * 0.12;
        push_box(&mut v, Vec3::new(x, 0.03, 0.0), Vec3::new(0.025, 0.06, 0.06), GUNMETAL);
    }
    // stock, grips, drum magazine
    push_box(&mut v, Vec3::new(-1.3, -0.05, 0.0), Vec3::new(0.45, 0.12, 0.06), WALNUT);
    push_box(&mut v, Vec3::new(-0.3, -0.3, 0.0), Vec3::new(0.06, 0.2, 0.05), WALNUT);
    push_box(&mut v, Vec3::new(0.6, -0.25, 0.0), Vec3::new(0.05, 0.15, 0.05), WALNUT);
    push_box(&mut v, Vec3::new(0.15, -0.3, 0.0), Vec3::new(0.25, 0.25, 0.08), GUNMETAL);
    v
}
