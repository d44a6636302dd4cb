//! Aggregated simulation report.

use super::config::SimConfig;
use crate::stabilizer::Stabilizer;
use crate::strategy::RunReport;
use serde::Serialize;

/// Aggregated results from one or more strategy runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub strategy: &'static str,
    pub stabilizer_level: u32,
    pub starting_devices: usize,
    pub num_runs: u32,

    // Totals across runs
    pub total_combinations: usize,
    pub total_b_used: usize,
    pub total_s_rank: usize,
    pub runs_without_s_rank: u32,

    // Averages per run
    pub avg_combinations: f64,
    pub avg_b_used: f64,
    pub avg_s0: f64,
    pub avg_s1: f64,
    pub avg_s_rank: f64,

    /// Pooled B-rank devices used per S-rank device, over every run
    pub efficiency: Option<f64>,
    pub min_efficiency: Option<f64>,
    pub max_efficiency: Option<f64>,

    #[serde(skip)]
    pub run_reports: Vec<RunReport>,
}

impl SimReport {
    pub fn from_runs(config: &SimConfig, stabilizer: &Stabilizer, runs: Vec<RunReport>) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        let total_combinations: usize = runs.iter().map(|r| r.combinations).sum();
        let total_b_used: usize = runs.iter().map(|r| r.b_used).sum();
        let total_s_rank: usize = runs.iter().map(|r| r.s_total()).sum();
        let runs_without_s_rank = runs.iter().filter(|r| r.s_total() == 0).count() as u32;

        let avg_s0 = runs.iter().map(|r| r.final_yield.s0 as f64).sum::<f64>() / n;
        let avg_s1 = runs.iter().map(|r| r.final_yield.s1 as f64).sum::<f64>() / n;

        let per_run: Vec<f64> = runs.iter().filter_map(|r| r.efficiency).collect();
        let min_efficiency = per_run.iter().copied().reduce(f64::min);
        let max_efficiency = per_run.iter().copied().reduce(f64::max);

        Self {
            strategy: config.strategy.name(),
            stabilizer_level: stabilizer.level(),
            starting_devices: config.starting_devices,
            num_runs,
            total_combinations,
            total_b_used,
            total_s_rank,
            runs_without_s_rank,
            avg_combinations: total_combinations as f64 / n,
            avg_b_used: total_b_used as f64 / n,
            avg_s0,
            avg_s1,
            avg_s_rank: total_s_rank as f64 / n,
            efficiency: crate::strategy::report::efficiency(total_b_used, total_s_rank),
            min_efficiency,
            max_efficiency,
            run_reports: runs,
        }
    }

    /// Header printed before a run starts.
    pub fn header(config: &SimConfig, stabilizer: &Stabilizer) -> String {
        format!(
            "Running \"{}\" strategy\nWith {} and {} B-rank devices\n",
            config.strategy.name(),
            stabilizer,
            config.starting_devices
        )
    }

    /// Text report. A single run prints its full breakdown; several runs
    /// print the aggregate.
    pub fn to_text(&self) -> String {
        if let [single] = self.run_reports.as_slice() {
            return single.to_text();
        }

        let mut report = String::new();
        report.push_str(&format!("Aggregate over {} runs\n", self.num_runs));
        report.push_str("--------------------------\n");
        report.push_str(&format!(
            "Avg combinations done:          {:.1}\n",
            self.avg_combinations
        ));
        report.push_str(&format!(
            "Avg B-rank devices used:        {:.1}\n",
            self.avg_b_used
        ));
        report.push_str(&format!(
            "Avg S-rank 0-star obtained:     {:.2}\n",
            self.avg_s0
        ));
        report.push_str(&format!(
            "Avg S-rank 1-star obtained:     {:.2}\n",
            self.avg_s1
        ));
        report.push_str(&format!(
            "Avg S-rank devices obtained:    {:.2}\n",
            self.avg_s_rank
        ));
        report.push_str(&format!(
            "Runs without any S-rank device: {}\n\n",
            self.runs_without_s_rank
        ));

        report.push_str("Statistics\n");
        report.push_str("----------\n");
        report.push_str(&format!(
            "Average number of B-rank devices to get an S-rank device: {}\n",
            fmt_ratio(self.efficiency)
        ));
        report.push_str(&format!(
            "Best run: {}   Worst run: {}\n",
            fmt_ratio(self.min_efficiency),
            fmt_ratio(self.max_efficiency)
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn fmt_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}", r),
        None => "n/a".to_string(),
    }
}
