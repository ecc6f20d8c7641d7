use std::io::{self, Write};

use osc_core::{PhysicalParameters, State};
use serde::{Deserialize, Serialize};

use crate::energy::{energy, EnergyBreakdown};

/// Header line of the plain-text table, without the trailing newline.
pub const TABLE_HEADER: &str = "# t x1 v1 x2 v2 E_kin E_pot E_tot";

/// One sample of the trajectory: time, state and derived energies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesRecord {
    /// Simulated time at which the state was sampled.
    pub t: f64,
    /// Sampled state.
    pub state: State,
    /// Energies derived from `state`.
    pub energy: EnergyBreakdown,
}

impl TimeSeriesRecord {
    /// Samples `state` at time `t`, deriving its energies.
    pub fn sample(t: f64, state: State, params: &PhysicalParameters) -> Self {
        Self {
            t,
            state,
            energy: energy(&state, params),
        }
    }

    /// Fields in table column order.
    pub fn columns(&self) -> [f64; 8] {
        [
            self.t,
            self.state.x1,
            self.state.v1,
            self.state.x2,
            self.state.v2,
            self.energy.kinetic,
            self.energy.potential,
            self.energy.total,
        ]
    }
}

/// Deviation of the total energy from its initial value across samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyDrift {
    /// Total energy of the first record.
    pub initial: f64,
    /// Total energy of the last record.
    pub last: f64,
    /// Largest `|E_tot - E_tot(0)|` over all records.
    pub max_abs: f64,
    /// `max_abs / |E_tot(0)|`, or zero when the initial energy vanishes.
    pub max_relative: f64,
}

impl EnergyDrift {
    /// Returns an empty drift descriptor.
    pub fn empty() -> Self {
        Self {
            initial: 0.0,
            last: 0.0,
            max_abs: 0.0,
            max_relative: 0.0,
        }
    }

    /// Summarises the total-energy history of `records`.
    pub fn from_records(records: &[TimeSeriesRecord]) -> Self {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Self::empty();
        };
        let initial = first.energy.total;
        let max_abs = records
            .iter()
            .map(|record| (record.energy.total - initial).abs())
            .fold(0.0, f64::max);
        let max_relative = if initial != 0.0 {
            max_abs / initial.abs()
        } else {
            0.0
        };
        Self {
            initial,
            last: last.energy.total,
            max_abs,
            max_relative,
        }
    }
}

/// Writes the header and one line per record, each field with five decimals.
pub fn write_table<W: Write>(records: &[TimeSeriesRecord], mut out: W) -> io::Result<()> {
    writeln!(out, "{TABLE_HEADER}")?;
    for record in records {
        let [t, x1, v1, x2, v2, e_kin, e_pot, e_tot] = record.columns();
        writeln!(
            out,
            "{t:.5} {x1:.5} {v1:.5} {x2:.5} {v2:.5} {e_kin:.5} {e_pot:.5} {e_tot:.5}"
        )?;
    }
    out.flush()
}
