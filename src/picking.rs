use glam::{Mat4, Vec3, Vec4};

/// Perspective camera looking at the origin from `eye`.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar);
        let view = Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y);
        proj * view
    }

    /// World-space ray through pixel (`sx`, `sy`) of a `width` x `height`
    /// surface. Returns `(origin, direction)`.
    pub fn screen_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let w = width.max(1.0);
        let h = height.max(1.0);
        let ndc_x = (2.0 * sx / w) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / h);
        let inv = self.view_proj(w / h).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Whether a click at `pixel` lands on the object's bounding sphere.
pub fn hits_object(
    camera: &CameraRig,
    size: (f32, f32),
    pixel: (f32, f32),
    center: Vec3,
    radius: f32,
) -> bool {
    let (ro, rd) = camera.screen_ray(size.0, size.1, pixel.0, pixel.1);
    ray_sphere(ro, rd, center, radius).is_some()
}
