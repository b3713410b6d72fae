use super::Angle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as decimal degrees, the unit catalogs and JSON consumers expect.
impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let deg = f64::deserialize(d)?;
        Ok(Angle::from_degrees(deg))
    }
}
