use serde::Serialize;

use super::OverheadModel;

/// Largest proof count tabulated for each prover family.
pub const MAX_PROOFS: u64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProverKind {
    /// One Wesolowski proof after `pietrzak_rounds` halving rounds.
    Hybrid { pietrzak_rounds: u64 },
    /// `proofs` Wesolowski proofs over consecutive segments.
    Iterated { proofs: u64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverheadRow {
    pub prover: ProverKind,
    pub proof_size_bytes: f64,
    /// Work left after the delay ends, as a percentage of T.
    pub overhead_percent: f64,
}

/// Proof size and overhead of every hybrid and iterated prover with up to
/// [`MAX_PROOFS`] group elements.
pub fn overhead_table(model: &OverheadModel, steps: u64) -> Vec<OverheadRow> {
    let params = model.params();
    let modulus = params.modulus_length as f64;
    let security = params.security_level as f64;
    let percent = |cost: u64| 100.0 * cost as f64 / steps as f64;

    let mut rows = Vec::with_capacity(2 * MAX_PROOFS as usize);
    for n in 1..=MAX_PROOFS {
        let rounds = n - 1;
        rows.push(OverheadRow {
            prover: ProverKind::Hybrid {
                pietrzak_rounds: rounds,
            },
            proof_size_bytes: n as f64 * modulus / 8.0,
            overhead_percent: percent(model.optimize_hybrid(steps, rounds)),
        });
    }
    for n in 1..=MAX_PROOFS {
        let plan = model.optimize_iterated(steps, n as usize);
        rows.push(OverheadRow {
            prover: ProverKind::Iterated { proofs: n },
            proof_size_bytes: (n as f64 * modulus + (n - 1) as f64 * 2.0 * security) / 8.0,
            overhead_percent: percent(plan.cost),
        });
    }
    rows
}

impl ProverKind {
    pub fn label(&self) -> String {
        match self {
            ProverKind::Hybrid { pietrzak_rounds } => {
                format!("hybrid, {} Pietrzak rounds", pietrzak_rounds)
            }
            ProverKind::Iterated { proofs } => format!("{}-iterated", proofs),
        }
    }
}

pub fn format_table(steps: u64, model: &OverheadModel, rows: &[OverheadRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("T = {}\n", steps));
    out.push_str(&format!("{}\n\n", model.params().describe()));
    out.push_str(&format!(
        "{:<28} {:>12} {:>12}\n",
        "Prover", "proof size", "overhead"
    ));
    out.push_str(&"-".repeat(54));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<28} {:>10} B {:>11.4}%\n",
            row.prover.label(),
            row.proof_size_bytes,
            row.overhead_percent
        ));
    }
    out
}
