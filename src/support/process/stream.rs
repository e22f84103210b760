use std::collections::BTreeMap;

use uom::{
    ConstZero,
    si::f64::{MassRate, Pressure, ThermodynamicTemperature},
};

use super::{Phase, ProcessError, Species};

/// A material stream: species mass flows plus thermodynamic state.
///
/// Flows are kept in a [`BTreeMap`] keyed by [`Species`], so iteration order
/// is fixed by the species declaration order and evaluations are
/// reproducible.
///
/// A stream is a value. Units read their inlet by reference and return new
/// outlet streams; nothing mutates a stream after it is built.
///
/// # Example
///
/// ```
/// use twine_bioprocess::support::process::{Species, Stream};
/// use uom::si::{
///     f64::{MassRate, Pressure, ThermodynamicTemperature},
///     mass_rate::kilogram_per_second,
///     pressure::atmosphere,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let feed = Stream::liquid(
///     ThermodynamicTemperature::new::<degree_celsius>(37.0),
///     Pressure::new::<atmosphere>(1.0),
/// )
/// .with_mass_flow(Species::Glucose, MassRate::new::<kilogram_per_second>(0.2))
/// .with_mass_flow(Species::Water, MassRate::new::<kilogram_per_second>(0.8));
///
/// assert!((feed.mass_fraction(Species::Glucose).unwrap() - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    flows: BTreeMap<Species, MassRate>,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub phase: Phase,
}

impl Stream {
    /// Creates an empty stream in the given state.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, phase: Phase) -> Self {
        Self {
            flows: BTreeMap::new(),
            temperature,
            pressure,
            phase,
        }
    }

    /// Creates an empty liquid stream.
    #[must_use]
    pub fn liquid(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self::new(temperature, pressure, Phase::Liquid)
    }

    pub(crate) fn from_flows(
        flows: BTreeMap<Species, MassRate>,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Self {
        Self {
            flows,
            temperature,
            pressure,
            phase,
        }
    }

    /// Returns a new stream with the mass flow of `species` set to `mass_rate`.
    #[must_use]
    pub fn with_mass_flow(mut self, species: Species, mass_rate: MassRate) -> Self {
        self.flows.insert(species, mass_rate);
        self
    }

    /// Returns a new stream with the given temperature.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new stream with the given pressure.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Mass flow of `species`, or zero if the stream does not carry it.
    #[must_use]
    pub fn mass_flow(&self, species: Species) -> MassRate {
        self.flows.get(&species).copied().unwrap_or(MassRate::ZERO)
    }

    /// Iterates over species and their mass flows in species order.
    pub fn flows(&self) -> impl Iterator<Item = (Species, MassRate)> + '_ {
        self.flows.iter().map(|(&species, &mass_rate)| (species, mass_rate))
    }

    pub(crate) fn flow_map(&self) -> &BTreeMap<Species, MassRate> {
        &self.flows
    }

    /// Total mass flow over all species.
    #[must_use]
    pub fn total_mass_flow(&self) -> MassRate {
        self.flows.values().fold(MassRate::ZERO, |total, &m| total + m)
    }

    /// Mass fraction of `species`, or `None` for a stream with no flow.
    #[must_use]
    pub fn mass_fraction(&self, species: Species) -> Option<f64> {
        let total = self.total_mass_flow();
        if total > MassRate::ZERO {
            Some((self.mass_flow(species) / total).value)
        } else {
            None
        }
    }

    /// True if no species has a positive flow.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.values().all(|&m| m <= MassRate::ZERO)
    }

    /// Checks that this stream can be fed to a liquid-phase unit.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidFeed`] if any flow is negative or
    /// non-finite, if temperature or pressure is non-finite or non-positive,
    /// or if the stream is not liquid.
    pub fn validate_feed(&self) -> Result<(), ProcessError> {
        for (species, mass_rate) in self.flows() {
            if !mass_rate.value.is_finite() {
                return Err(ProcessError::invalid_feed(format!(
                    "{species} flow is not finite: {mass_rate:?}"
                )));
            }
            if mass_rate < MassRate::ZERO {
                return Err(ProcessError::invalid_feed(format!(
                    "{species} flow is negative: {mass_rate:?}"
                )));
            }
        }

        let temperature = self.temperature.value;
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(ProcessError::invalid_feed(format!(
                "temperature must be finite and positive: {:?}",
                self.temperature
            )));
        }

        let pressure = self.pressure.value;
        if !pressure.is_finite() || pressure <= 0.0 {
            return Err(ProcessError::invalid_feed(format!(
                "pressure must be finite and positive: {:?}",
                self.pressure
            )));
        }

        if self.phase != Phase::Liquid {
            return Err(ProcessError::invalid_feed(format!(
                "expected a liquid feed, got {}",
                self.phase
            )));
        }

        Ok(())
    }

    /// Splits `flows` into liquid and gas streams by each species' phase.
    ///
    /// Both streams share the given temperature and pressure.
    pub(crate) fn split_by_phase(
        flows: BTreeMap<Species, MassRate>,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> (Self, Self) {
        let (gas, liquid): (BTreeMap<_, _>, BTreeMap<_, _>) = flows
            .into_iter()
            .partition(|(species, _)| species.phase() == Phase::Gas);

        (
            Self::from_flows(liquid, temperature, pressure, Phase::Liquid),
            Self::from_flows(gas, temperature, pressure, Phase::Gas),
        )
    }
}
