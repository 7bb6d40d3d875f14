use rand::Rng;

use crate::gadget::application::ports::outgoing::RandomSource;

/// Thread-local RNG, used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible draws for tests.
#[cfg(test)]
pub struct SeededRandom {
    rng: std::sync::Mutex<rand::rngs::StdRng>,
}

#[cfg(test)]
impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: std::sync::Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

#[cfg(test)]
impl RandomSource for SeededRandom {
    fn index(&self, upper: usize) -> usize {
        self.rng.lock().unwrap().gen_range(0..upper)
    }

    fn unit(&self) -> f64 {
        self.rng.lock().unwrap().gen::<f64>()
    }
}
