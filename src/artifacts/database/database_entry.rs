use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// A single tree entry as stored in the object database: the content address
/// of the referenced object plus its mode.
///
/// Entries are compared for "same content" by address equality only; the
/// referenced content is never read.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DatabaseEntry {
    oid: ObjectId,
    mode: EntryMode,
}

impl DatabaseEntry {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }
}
