//! Host-facing adapter. Rendering lives outside this crate; a host
//! implements `PoseSink` and lets a `FieldRunner` drive the per-frame
//! loop against whatever clock it injects.

use crate::components::pose::ParticleState;
use crate::core::clock::Clock;
use crate::systems::field::Field;

/// The contract a rendering host fulfills: receive one pose per
/// particle per frame, in stable index order.
pub trait PoseSink {
    fn accept(&mut self, index: usize, pose: &ParticleState);
}

/// Closures work directly as sinks.
impl<F: FnMut(usize, &ParticleState)> PoseSink for F {
    fn accept(&mut self, index: usize, pose: &ParticleState) {
        self(index, pose)
    }
}

/// Wires a field to a clock and runs the frame loop: sample every
/// pose, deliver them to the sink, then retire finished legs.
pub struct FieldRunner<C: Clock> {
    field: Field,
    clock: C,
    poses: Vec<ParticleState>,
}

impl<C: Clock> FieldRunner<C> {
    pub fn new(field: Field, clock: C) -> Self {
        let poses = Vec::with_capacity(field.len());
        FieldRunner {
            field,
            clock,
            poses,
        }
    }

    /// Run one frame. Returns the timestamp the poses were sampled at.
    pub fn frame(&mut self, sink: &mut impl PoseSink) -> f64 {
        let now = self.clock.now();
        self.field.tick_into(now, &mut self.poses);
        for (i, pose) in self.poses.iter().enumerate() {
            sink.accept(i, pose);
        }
        self.field.advance(now);
        now
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
