use anyhow::Result;
use std::io::BufRead;

/// Objects parsed from their on-disk body (after the `<type> <size>\0`
/// header has been consumed).
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}
