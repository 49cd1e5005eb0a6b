use rand::{rngs::SmallRng, Rng, SeedableRng};

/// How a block moves in when it is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    FadeUp,
    FromLeft,
    FromRight,
    Fade,
    ScaleIn,
}

pub const DEFAULT_DURATION_MS: u32 = 500;
const EASE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

impl Entrance {
    fn offset(&self) -> &'static str {
        match self {
            Self::FadeUp => "translate3d(0, 20px, 0)",
            Self::FromLeft => "translate3d(-40px, 0, 0)",
            Self::FromRight => "translate3d(40px, 0, 0)",
            Self::Fade => "none",
            Self::ScaleIn => "scale(0.8)",
        }
    }

    pub fn hidden_style(&self) -> String {
        format!("opacity: 0; transform: {}", self.offset())
    }

    pub fn shown_style(&self, duration_ms: u32, delay_ms: u32) -> String {
        format!(
            "opacity: 1; transform: none; transition: opacity {duration_ms}ms {EASE} {delay_ms}ms, transform {duration_ms}ms {EASE} {delay_ms}ms"
        )
    }
}

/// Delay of the `index`-th child in a staggered group.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms.saturating_add(step_ms.saturating_mul(index as u32))
}

/// One floating dot in the hero background, coordinates in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "--from-x: {:.0}px; --from-y: {:.0}px; --to-x: {:.0}px; --to-y: {:.0}px; animation-duration: {:.1}s",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_s
        )
    }
}

/// Seeded so the server-rendered markup matches what the client hydrates.
pub fn particles(count: usize, seed: u64, width: f64, height: f64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            from: (rng.random_range(0.0..width), rng.random_range(0.0..height)),
            to: (rng.random_range(0.0..width), rng.random_range(0.0..height)),
            duration_s: rng.random_range(10.0..30.0),
        })
        .collect()
}
