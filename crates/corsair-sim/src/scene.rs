//! Render-scene collaborator interface.
//!
//! The simulation core reflects entity creation and destruction into an
//! external render graph through this trait. It never depends on the
//! scene's internal representation; transforms travel in the snapshot.

use corsair_core::enums::EntityKind;
use corsair_core::types::RenderId;

/// Membership operations on the host's render graph. Both operations
/// must be idempotent: adding a present id or removing an absent one
/// is a no-op.
pub trait RenderScene {
    /// Register a renderable for a newly spawned entity.
    fn add(&mut self, id: RenderId, kind: EntityKind);

    /// Drop the renderable for a despawned entity.
    fn remove(&mut self, id: RenderId);
}

/// Scene that discards all calls, for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullScene;

impl RenderScene for NullScene {
    fn add(&mut self, _id: RenderId, _kind: EntityKind) {}

    fn remove(&mut self, _id: RenderId) {}
}
