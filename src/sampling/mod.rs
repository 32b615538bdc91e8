/// Hemisphere samplers used to produce sample files for the viewer.
///
/// ```text
///   SimpleRng ──► HemisphereSampler ──► align_to(lobe axis) ──► samples.json
/// ```
///
/// Diffuse strategies are drawn around the surface normal (+z); specular
/// lobes are drawn around the mirror of the incoming direction.

pub mod rng;
pub mod sphere;

pub use rng::{SimpleRng, UniformSource};
pub use sphere::{align_to, reflect, HemisphereSampler, UP};

use glam::DVec3;

use crate::data::model::Point3;

/// Axis the sampler's lobe is centred on for light arriving along `incoming`.
pub fn lobe_axis(sampler: &HemisphereSampler, incoming: DVec3) -> DVec3 {
    match sampler {
        HemisphereSampler::BlinnPhong { .. } => reflect(incoming.normalize_or_zero(), UP),
        _ => UP,
    }
}

/// Draw `count` directions from each sampler, keeping sampler order.
pub fn generate(
    samplers: &[HemisphereSampler],
    count: usize,
    incoming: DVec3,
    source: &mut impl UniformSource,
) -> Vec<(String, Vec<Point3>)> {
    samplers
        .iter()
        .map(|sampler| {
            let axis = lobe_axis(sampler, incoming);
            let points = (0..count)
                .map(|_| Point3::from(align_to(sampler.sample(&mut *source).0, axis)))
                .collect();
            (sampler.label(), points)
        })
        .collect()
}
