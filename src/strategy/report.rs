//! Result of a single strategy run.

use crate::device::Device;
use crate::stock::Stock;
use serde::Serialize;

/// Pile sizes at a point of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseYield {
    pub a0: usize,
    pub a1: usize,
    pub s0: usize,
    pub s1: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub strategy: &'static str,
    pub stabilizer_level: u32,
    pub starting_devices: usize,

    /// Piles after phase 1
    pub phase1: PhaseYield,
    /// Piles after the last phase
    pub final_yield: PhaseYield,

    pub b_left: Stock,
    pub a_left: Stock,
    /// S-rank devices banked over the run, 0-star ones first
    pub s_obtained: Stock,

    /// Base device still being built when a phase ran out of inputs
    pub phase1_unfinished: Option<Device>,
    pub phase2_unfinished: Option<Device>,

    pub b_used: usize,
    pub combinations: usize,
    /// B-rank devices used per S-rank device obtained
    pub efficiency: Option<f64>,
}

/// Devices consumed per device produced, `None` when nothing was produced.
pub fn efficiency(consumed: usize, produced: usize) -> Option<f64> {
    if produced == 0 {
        None
    } else {
        Some(consumed as f64 / produced as f64)
    }
}

impl RunReport {
    pub fn s_total(&self) -> usize {
        self.final_yield.s0 + self.final_yield.s1
    }

    /// Starred S devices obtained during phase 2.
    pub fn s1_phase2(&self) -> usize {
        self.final_yield.s1 - self.phase1.s1
    }

    /// Every device still around at the end of the run, output or not.
    pub fn devices_remaining(&self) -> usize {
        self.b_left.len()
            + self.a_left.len()
            + self.s_total()
            + self.phase1_unfinished.iter().count()
            + self.phase2_unfinished.iter().count()
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("Results phase 1\n");
        report.push_str("---------------\n");
        report.push_str(&format!(
            "A-rank 0-star devices obtained: {}\n",
            self.phase1.a0
        ));
        report.push_str(&format!(
            "A-rank 1-star devices obtained: {}\n",
            self.phase1.a1
        ));
        report.push_str(&format!(
            "S-rank 1-star devices obtained: {}\n\n",
            self.phase1.s1
        ));
        report.push_str("B-rank devices left:\n");
        report.push_str(&self.b_left.show());
        report.push('\n');
        if let Some(device) = &self.phase1_unfinished {
            report.push_str(&format!("Unfinished base: {}\n", device));
        }
        report.push('\n');

        report.push_str("Results phase 2\n");
        report.push_str("---------------\n");
        report.push_str(&format!(
            "S-rank 0-star devices obtained: {}\n",
            self.final_yield.s0
        ));
        report.push_str(&format!(
            "S-rank 1-star devices obtained: {} (total: {})\n\n",
            self.s1_phase2(),
            self.final_yield.s1
        ));
        report.push_str("A-rank devices left:\n");
        report.push_str(&self.a_left.show());
        report.push('\n');
        if let Some(device) = &self.phase2_unfinished {
            report.push_str(&format!("Unfinished base: {}\n", device));
        }
        report.push('\n');

        report.push_str("Statistics\n");
        report.push_str("----------\n");
        report.push_str(&format!("B-rank devices used: {}\n", self.b_used));
        report.push_str(&format!(
            "Total combinations done: {}\n",
            self.combinations
        ));
        match self.efficiency {
            Some(ratio) => report.push_str(&format!(
                "Average number of B-rank devices to get an S-rank device: {:.2}\n",
                ratio
            )),
            None => report.push_str(
                "Average number of B-rank devices to get an S-rank device: n/a (no S-rank device)\n",
            ),
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
