//! Serde support: an `SV` serializes as its concrete value and is validated
//! on the way back in.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::check::enforce;
use crate::class::Validates;
use crate::policy::{Boundary, CheckPolicy};
use crate::value::SV;

impl<S, C> Serialize for SV<S, C>
where
    C: Serialize,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        self.cv().serialize(serializer)
    }
}

impl<'de, S, C> Deserialize<'de> for SV<S, C>
where
    S: Validates<C>,
    C: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cv = C::deserialize(deserializer)?;
        enforce::<S, C>(&cv, CheckPolicy::VerifyOrThrow, Boundary::Deserialize)
            .map_err(D::Error::custom)?;
        Ok(SV::new_unchecked(cv))
    }
}
