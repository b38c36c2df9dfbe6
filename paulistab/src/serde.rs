use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::pauli::SparsePauli;

impl Serialize for SparsePauli {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SparsePauli {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string
            .parse()
            .map_err(|_| de::Error::custom("failed to parse SparsePauli"))
    }
}
