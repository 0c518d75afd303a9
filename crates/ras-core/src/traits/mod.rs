mod slot;

pub use slot::ICollectionSlot;
