//! Serde support for [`Color`].
//!
//! The value types in [`space`](crate::space) derive their serde impls. A
//! [`Color`] serializes as its canonical Oklch representation, so that any
//! color survives a round trip through serialization without loss, no matter
//! which space it was constructed in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::space::Oklch;
use crate::Color;

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_oklch().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Oklch::deserialize(deserializer).map(Color::new)
    }
}
