use std::f64::consts::PI;

use glam::DVec3;

use super::rng::UniformSource;

/// Canonical frame normal: samplers draw around +z.
pub const UP: DVec3 = DVec3::Z;

/// Hemisphere sampling strategies.
///
/// Every sampler draws directions around +z (`z >= 0`, unit length) and
/// reports the probability density of the drawn direction with respect to
/// solid angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HemisphereSampler {
    /// Constant density over the hemisphere.
    Uniform,
    /// Density proportional to `cos θ` (Lambertian).
    CosineWeighted,
    /// Density proportional to `cos^(n+1) θ` for exponent `n`.
    BlinnPhong { exponent: f64 },
}

impl HemisphereSampler {
    /// Label used for this sampler's collection in a sample file.
    pub fn label(&self) -> String {
        match self {
            HemisphereSampler::Uniform => "UniformSampleDir".to_string(),
            HemisphereSampler::CosineWeighted => "CosineWeightedSampleDir".to_string(),
            HemisphereSampler::BlinnPhong { exponent } => {
                format!("BlinnPhongSampleDir {exponent}")
            }
        }
    }

    /// Draw one direction and its density.
    pub fn sample(&self, source: &mut impl UniformSource) -> (DVec3, f64) {
        let [u0, u1] = source.next_2d();
        let cos_theta = match *self {
            HemisphereSampler::Uniform => u0,
            HemisphereSampler::CosineWeighted => u0.sqrt(),
            HemisphereSampler::BlinnPhong { exponent } => u0.powf(1.0 / (exponent + 2.0)),
        };
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let (sin_phi, cos_phi) = (2.0 * PI * u1).sin_cos();

        let dir = DVec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
        (dir, self.density(cos_theta))
    }

    /// Density of `dir` for a hemisphere oriented along `normal`.
    pub fn pdf(&self, dir: DVec3, normal: DVec3) -> f64 {
        let cos_theta = dir.normalize_or_zero().dot(normal.normalize_or_zero());
        if cos_theta < 0.0 {
            return 0.0;
        }
        self.density(cos_theta)
    }

    fn density(&self, cos_theta: f64) -> f64 {
        match *self {
            HemisphereSampler::Uniform => 1.0 / (2.0 * PI),
            HemisphereSampler::CosineWeighted => cos_theta / PI,
            HemisphereSampler::BlinnPhong { exponent } => {
                (exponent + 2.0) / (2.0 * PI) * cos_theta.powf(exponent + 1.0)
            }
        }
    }
}

/// Mirror `dir` about the plane with normal `normal`.
pub fn reflect(dir: DVec3, normal: DVec3) -> DVec3 {
    let n = normal.normalize_or_zero();
    dir - 2.0 * dir.dot(n) * n
}

/// Rotate a direction drawn around +z so that +z maps onto `axis`.
pub fn align_to(local: DVec3, axis: DVec3) -> DVec3 {
    let w = axis.normalize_or_zero();
    let (u, v) = w.any_orthonormal_pair();
    u * local.x + v * local.y + w * local.z
}
