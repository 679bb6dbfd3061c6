//! Serialization as a plain sequence of the live elements.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::vector::SimpleVector;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SimpleVector::from)
    }
}
