use crate::THINK_MAX_MS;
use crate::THINK_MIN_MS;
use crate::engine::Stage;
use rand::Rng;
use std::time::Duration;

/// Window the bot's simulated thinking time is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thinking {
    pub min: Duration,
    pub max: Duration,
}

impl Default for Thinking {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(THINK_MIN_MS),
            max: Duration::from_millis(THINK_MAX_MS),
        }
    }
}

impl Thinking {
    pub fn instant() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }
    /// Uniform over `[min, max)`, or `min` if the window is empty.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        match self.max > self.min {
            true => rng.random_range(self.min..self.max),
            false => self.min,
        }
    }
}

/// Pause before each cascade stage so a front end can show its effect.
/// Pacing only; stages resolve the same way with or without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo {
    pub burn: Duration,
    pub verdict: Duration,
    pub sighted: Duration,
    pub blind: Duration,
}

impl Default for Tempo {
    fn default() -> Self {
        Self {
            burn: Duration::from_millis(600),
            verdict: Duration::from_millis(1),
            sighted: Duration::from_millis(98),
            blind: Duration::from_millis(300),
        }
    }
}

impl Tempo {
    pub fn instant() -> Self {
        Self {
            burn: Duration::ZERO,
            verdict: Duration::ZERO,
            sighted: Duration::ZERO,
            blind: Duration::ZERO,
        }
    }
    pub fn beat(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Burn => self.burn,
            Stage::Win | Stage::Loss => self.verdict,
            Stage::Sighted => self.sighted,
            Stage::HumanMiss | Stage::BotMiss | Stage::Blind => self.blind,
        }
    }
}

/// Everything a room needs to open.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub seed: u64,
    pub thinking: Thinking,
    /// `None` resolves the cascade without pausing.
    pub tempo: Option<Tempo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            thinking: Thinking::default(),
            tempo: Some(Tempo::default()),
        }
    }
}

impl Config {
    /// No thinking, no pacing.
    pub fn instant(seed: u64) -> Self {
        Self {
            seed,
            thinking: Thinking::instant(),
            tempo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn default_thinking_window() {
        let thinking = Thinking::default();
        assert_eq!(thinking.min, Duration::from_millis(450));
        assert_eq!(thinking.max, Duration::from_millis(750));
    }

    #[test]
    fn samples_stay_in_window() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let thinking = Thinking::default();
        for _ in 0..256 {
            let d = thinking.sample(rng);
            assert!(d >= thinking.min && d < thinking.max);
        }
    }

    #[test]
    fn instant_is_zero() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Thinking::instant().sample(rng), Duration::ZERO);
        assert!(Stage::all().all(|s| Tempo::instant().beat(s) == Duration::ZERO));
    }

    #[test]
    fn tempo_beats() {
        let tempo = Tempo::default();
        assert_eq!(tempo.beat(Stage::Burn), Duration::from_millis(600));
        assert_eq!(tempo.beat(Stage::Loss), Duration::from_millis(1));
        assert_eq!(tempo.beat(Stage::BotMiss), Duration::from_millis(300));
    }
}
