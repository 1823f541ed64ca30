//! Simulation report generation.

use crate::core::constants::TICKS_PER_SECOND;
use crate::game::{CrashCause, Scene};
use serde::Serialize;

/// Statistics for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    /// Ticks spent in Play, as counted by the game.
    pub play_ticks: u64,
    pub flaps: u64,
    pub pipes_spawned: u32,
    /// None if the run hit the tick limit.
    pub crash: Option<CrashCause>,
    /// Last frame of the run.
    pub final_scene: Option<Scene>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub best_score: u32,
    pub avg_ticks: f64,
    pub avg_flaps: f64,
    pub avg_pipes_spawned: f64,

    // Crash causes
    pub pipe_crashes: u32,
    pub floor_crashes: u32,
    pub ceiling_crashes: u32,

    /// Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let count_cause = |cause: CrashCause| {
            runs.iter().filter(|r| r.crash == Some(cause)).count() as u32
        };
        let pipe_crashes = count_cause(CrashCause::Pipe);
        let floor_crashes = count_cause(CrashCause::Floor);
        let ceiling_crashes = count_cause(CrashCause::Ceiling);
        let runs_crashed = pipe_crashes + floor_crashes + ceiling_crashes;

        Self {
            num_runs,
            runs_crashed,
            runs_timed_out: num_runs - runs_crashed,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.play_ticks as f64).sum::<f64>() / divisor,
            avg_flaps: runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor,
            avg_pipes_spawned: runs.iter().map(|r| r.pipes_spawned as f64).sum::<f64>()
                / divisor,
            pipe_crashes,
            floor_crashes,
            ceiling_crashes,
            run_stats: runs,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.2}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.best_score));
        report.push_str(&format!(
            "  Avg Survival:        {:.1}s ({:.0} ticks)\n",
            self.avg_ticks / TICKS_PER_SECOND as f64,
            self.avg_ticks
        ));
        report.push_str(&format!("  Avg Flaps:           {:.1}\n", self.avg_flaps));
        report.push_str(&format!(
            "  Avg Pipes Spawned:   {:.1}\n\n",
            self.avg_pipes_spawned
        ));

        report.push_str("── CRASHES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Pipe:                {}\n", self.pipe_crashes));
        report.push_str(&format!("  Floor:               {}\n", self.floor_crashes));
        report.push_str(&format!("  Ceiling:             {}\n", self.ceiling_crashes));

        report
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, crash: Option<CrashCause>) -> RunStats {
        RunStats {
            score,
            ticks,
            play_ticks: ticks,
            flaps: 10,
            pipes_spawned: score + 1,
            crash,
            final_scene: None,
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, 600, Some(CrashCause::Pipe)),
            run(6, 1200, Some(CrashCause::Floor)),
            run(10, 1800, None),
        ]);

        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_crashed, 2);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.best_score, 10);
        assert!((report.avg_score - 6.0).abs() < 1e-9);
        assert!((report.avg_ticks - 1200.0).abs() < 1e-9);
        assert!((report.avg_pipes_spawned - 7.0).abs() < 1e-9);
        assert_eq!(report.pipe_crashes, 1);
        assert_eq!(report.floor_crashes, 1);
        assert_eq!(report.ceiling_crashes, 0);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.best_score, 0);
        assert_eq!(report.avg_score, 0.0);
    }

    #[test]
    fn test_text_and_json_output() {
        let report = SimReport::from_runs(vec![run(3, 900, Some(CrashCause::Ceiling))]);

        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("Best Score:          3"));
        assert!(text.contains("15.0s"));
        assert!(text.contains("Avg Pipes Spawned:   4.0"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["best_score"], 3);
        assert_eq!(json["ceiling_crashes"], 1);
        assert_eq!(json["run_stats"][0]["crash"], "Ceiling");
    }
}
