//! Capability traits used to query species and reaction properties.

mod properties;

pub use properties::*;

/// Every property a process unit needs from its provider.
///
/// This trait is automatically implemented for any type that implements all
/// of the required capability traits.
pub trait PropertyProvider:
    HasMolarMass + HasHeatCapacity + HasHeatOfVaporization + HasHeatOfReaction
{
}

impl<T> PropertyProvider for T where
    T: HasMolarMass + HasHeatCapacity + HasHeatOfVaporization + HasHeatOfReaction
{
}
