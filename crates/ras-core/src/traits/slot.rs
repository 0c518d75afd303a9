use crate::errors::RasResult;

/// A single named durable location holding the serialized collection.
///
/// Writes are all-or-nothing: after an error the slot still holds the
/// previous payload.
pub trait ICollectionSlot {
    /// Name of the slot.
    fn name(&self) -> &str;

    /// Current payload, or `None` when nothing has been written yet.
    fn read(&self) -> RasResult<Option<String>>;

    /// Replace the payload.
    fn write(&self, payload: &str) -> RasResult<()>;
}
