pub mod api;
pub mod components;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::host::{FieldRunner, PoseSink};
pub use components::pose::ParticleState;
pub use core::clock::{Clock, ManualClock, MonotonicClock};
pub use core::math::{cap_magnitude, lerp, lerp_vec2, wrap_angle};
pub use core::rng::Rng;
pub use systems::animator::Animator;
pub use systems::field::{Field, FieldConfig};
