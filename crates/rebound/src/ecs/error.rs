use thiserror::Error;

use super::component::ComponentKind;
use super::entity::EntityId;

/// Errors raised by the component store.
///
/// Both variants point at a malformed scene setup rather than a transient
/// condition, so nothing retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    /// A system looked up a sibling component the entity doesn't have.
    #[error("entity \"{entity}\" has no component of kind {kind}")]
    MissingComponent { entity: EntityId, kind: ComponentKind },

    /// Setup tried to attach a second component of the same kind.
    #[error("entity \"{entity}\" already has a component of kind {kind}")]
    DuplicateComponent { entity: EntityId, kind: ComponentKind },
}
