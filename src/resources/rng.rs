use bevy_ecs::prelude::Resource;

/// Random source for simulated scene data (visitor counts).
///
/// Seed it in tests to get repeatable values.
#[derive(Resource, Clone, Debug)]
pub struct SceneRng(pub fastrand::Rng);

impl Default for SceneRng {
    fn default() -> Self {
        SceneRng(fastrand::Rng::new())
    }
}

impl SceneRng {
    pub fn with_seed(seed: u64) -> Self {
        SceneRng(fastrand::Rng::with_seed(seed))
    }
}
