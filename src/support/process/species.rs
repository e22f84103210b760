use std::fmt;

use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};

/// Chemical elements tracked by element balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Carbon,
    Hydrogen,
    Oxygen,
    Nitrogen,
}

impl Element {
    pub const ALL: [Element; 4] = [
        Element::Carbon,
        Element::Hydrogen,
        Element::Oxygen,
        Element::Nitrogen,
    ];

    /// Standard atomic weight in g/mol.
    #[must_use]
    pub fn atomic_weight(self) -> f64 {
        match self {
            Element::Carbon => 12.011,
            Element::Hydrogen => 1.008,
            Element::Oxygen => 15.999,
            Element::Nitrogen => 14.007,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Carbon => "C",
            Element::Hydrogen => "H",
            Element::Oxygen => "O",
            Element::Nitrogen => "N",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Elemental composition of one mole of a species.
///
/// Counts may be fractional, which is how lumped species such as biomass are
/// written on a C-mole basis (e.g., `CH1.8O0.5`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formula {
    pub carbon: f64,
    pub hydrogen: f64,
    pub oxygen: f64,
    pub nitrogen: f64,
}

impl Formula {
    /// Creates a formula without nitrogen.
    #[must_use]
    pub const fn cho(carbon: f64, hydrogen: f64, oxygen: f64) -> Self {
        Self {
            carbon,
            hydrogen,
            oxygen,
            nitrogen: 0.0,
        }
    }

    /// Returns the number of atoms of `element` per mole.
    #[must_use]
    pub fn count(&self, element: Element) -> f64 {
        match element {
            Element::Carbon => self.carbon,
            Element::Hydrogen => self.hydrogen,
            Element::Oxygen => self.oxygen,
            Element::Nitrogen => self.nitrogen,
        }
    }

    /// Molar mass derived from standard atomic weights.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        let grams: f64 = Element::ALL
            .iter()
            .map(|&element| self.count(element) * element.atomic_weight())
            .sum();
        MolarMass::new::<gram_per_mole>(grams)
    }
}

/// Thermodynamic phase of a stream or of a species at process conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Liquid broth, including dissolved solutes and suspended cells.
    Liquid,
    /// Gas or vapor.
    Gas,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Liquid => f.write_str("liquid"),
            Phase::Gas => f.write_str("gas"),
        }
    }
}

/// Chemical species handled by the lactic acid process units.
///
/// The declaration order is the stream ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    /// Water (H₂O), the solvent.
    Water,
    /// Glucose (C₆H₁₂O₆), the fermentable substrate.
    Glucose,
    /// Lactic acid (C₃H₆O₃), the product.
    LacticAcid,
    /// Ethanol (C₂H₅OH), a competing fermentation product.
    Ethanol,
    /// Cell mass, lumped as the nitrogen-free C-mole `CH1.8O0.5`.
    Biomass,
    /// Carbon dioxide (CO₂), leaves the fermenter as off-gas.
    CarbonDioxide,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Water,
        Species::Glucose,
        Species::LacticAcid,
        Species::Ethanol,
        Species::Biomass,
        Species::CarbonDioxide,
    ];

    #[must_use]
    pub fn formula(self) -> Formula {
        match self {
            Species::Water => Formula::cho(0.0, 2.0, 1.0),
            Species::Glucose => Formula::cho(6.0, 12.0, 6.0),
            Species::LacticAcid => Formula::cho(3.0, 6.0, 3.0),
            Species::Ethanol => Formula::cho(2.0, 6.0, 1.0),
            Species::Biomass => Formula::cho(1.0, 1.8, 0.5),
            Species::CarbonDioxide => Formula::cho(1.0, 0.0, 2.0),
        }
    }

    /// Phase the species occupies in a fermentation broth.
    ///
    /// Only carbon dioxide disengages as gas; everything else stays dissolved
    /// or suspended in the liquid.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            Species::CarbonDioxide => Phase::Gas,
            _ => Phase::Liquid,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Water => "Water",
            Species::Glucose => "Glucose",
            Species::LacticAcid => "LacticAcid",
            Species::Ethanol => "Ethanol",
            Species::Biomass => "Biomass",
            Species::CarbonDioxide => "CarbonDioxide",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
