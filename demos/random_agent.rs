//! Plays episodes with a uniformly random policy on each environment variant.
//!
//! Set `RUST_LOG=bjenv=debug` to see individual episodes.

use std::time::{SystemTime, UNIX_EPOCH};

use bjenv::{BlackjackEnv, EnvOptions, StepError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const EPISODES: usize = 10_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut policy = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let variants = [
        ("hit-stand", EnvOptions::hit_stand()),
        ("double-down", EnvOptions::double_down()),
        ("counting-shoe", EnvOptions::counting_shoe()),
    ];

    for (name, options) in variants {
        let mut env = match BlackjackEnv::new(options.with_natural(true), seed) {
            Ok(env) => env,
            Err(err) => {
                warn!(variant = name, %err, "invalid options");
                continue;
            }
        };

        match play(&mut env, &mut policy) {
            Ok(total) => {
                #[expect(clippy::cast_precision_loss, reason = "episode count fits in f64")]
                let mean = total / EPISODES as f64;
                info!(variant = name, episodes = EPISODES, mean_reward = mean, "finished");
            }
            Err(err) => warn!(variant = name, %err, "episode failed"),
        }
    }
}

fn play(env: &mut BlackjackEnv, policy: &mut ChaCha8Rng) -> Result<f64, StepError> {
    let actions = env.action_space().n;
    let mut total = 0.0;

    for _ in 0..EPISODES {
        env.reset()?;
        loop {
            let step = env.step(policy.random_range(0..actions))?;
            if step.done {
                total += step.reward;
                break;
            }
        }
    }

    Ok(total)
}
