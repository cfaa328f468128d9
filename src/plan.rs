//! JSON replay plans.
//!
//! A plan names a starting seed and a sequence of `generate`/`reseed`
//! steps.  Running a plan yields the emitted field elements (as decimal
//! strings) and the final seed, which makes a chain reproducible from a
//! single file:
//!
//! ```json
//! {
//!   "seed": "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b",
//!   "steps": [
//!     { "op": "generate", "method": "sha256", "count": 2 },
//!     { "op": "reseed", "seed": "0x0101010101010101010101010101010101010101010101010101010101010101" },
//!     { "op": "generate", "method": "keccak256" }
//!   ]
//! }
//! ```

use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CsprngError;
use crate::hash::{seed_from_hex, seed_to_hex, HashBackend, HashMethod};
use crate::prng::SeededGenerator;

fn one() -> usize {
    1
}

/// A single operation in a replay plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanStep {
    /// Advance the chain `count` times with `method`.
    Generate {
        /// Primitive used for every advance in this step.
        method: HashMethod,
        /// Number of outputs to draw.
        #[serde(default = "one")]
        count: usize,
    },
    /// Restart the chain from a hex-encoded seed.
    Reseed {
        /// Hex-encoded 32-byte seed.
        seed: String,
    },
}

/// Starting seed plus the steps to replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPlan {
    /// Hex-encoded 32-byte starting seed.
    pub seed: String,
    /// Operations applied in order.
    #[serde(default)]
    pub steps: Vec<PlanStep>,
}

/// Result of replaying a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOutput {
    /// Every emitted field element, in decimal.
    pub outputs: Vec<String>,
    /// Hex-encoded seed after the last step.
    pub final_seed: String,
}

impl GenerationPlan {
    /// Parses a plan from JSON.
    pub fn from_json(text: &str) -> Result<Self, CsprngError> {
        serde_json::from_str(text).map_err(|e| CsprngError::PlanDecode(e.to_string()))
    }

    /// Serializes the plan as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CsprngError> {
        serde_json::to_string_pretty(self).map_err(|e| CsprngError::PlanDecode(e.to_string()))
    }

    /// Replays the plan on a fresh generator with the standard backend.
    pub fn run<F: PrimeField>(&self) -> Result<PlanOutput, CsprngError> {
        let mut generator = SeededGenerator::<F>::new(seed_from_hex(&self.seed)?);
        self.run_steps(&mut generator)
    }

    /// Replays the plan on `generator`, reseeding it with the plan's seed first.
    pub fn run_on<F: PrimeField, H: HashBackend>(
        &self,
        generator: &mut SeededGenerator<F, H>,
    ) -> Result<PlanOutput, CsprngError> {
        generator.reseed(seed_from_hex(&self.seed)?);
        self.run_steps(generator)
    }

    fn run_steps<F: PrimeField, H: HashBackend>(
        &self,
        generator: &mut SeededGenerator<F, H>,
    ) -> Result<PlanOutput, CsprngError> {
        debug!(steps = self.steps.len(), "replaying generation plan");
        let mut outputs = Vec::new();
        for step in &self.steps {
            match step {
                PlanStep::Generate { method, count } => {
                    for value in generator.generate_many(*method, *count)? {
                        outputs.push(value.to_string());
                    }
                }
                PlanStep::Reseed { seed } => generator.reseed(seed_from_hex(seed)?),
            }
        }
        Ok(PlanOutput {
            outputs,
            final_seed: seed_to_hex(generator.seed()),
        })
    }
}
