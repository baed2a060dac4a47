//! Seeded 2D gradient noise with fractal (multi-octave) summation.
//!
//! The field is defined by a 256-entry permutation table shuffled once from the
//! world seed. Corner gradients are the four diagonals `(±1, ±1)`, and corner
//! contributions are blended with the quintic fade curve so the field has
//! continuous first and second derivatives across cell boundaries.

use rand::seq::SliceRandom;

use crate::seed::stream_rng;

/// Number of distinct entries in the permutation table.
pub const PERMUTATION_SIZE: usize = 256;

/// Deterministic 2D gradient noise field.
///
/// Immutable after construction: two fields built from the same seed hold
/// bit-identical permutation tables and return identical samples.
#[derive(Clone)]
pub struct NoiseField {
    seed: u64,
    /// The shuffled permutation, repeated twice so corner hashes never wrap.
    perm: [u8; PERMUTATION_SIZE * 2],
}

impl NoiseField {
    /// Build a noise field from a world seed.
    ///
    /// The permutation of `0..=255` is produced by a Fisher–Yates shuffle
    /// driven by the seed's `"permutation"` RNG stream.
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=u8::MAX).collect();
        let mut rng = stream_rng(seed, "permutation");
        table.shuffle(&mut rng);

        let mut perm = [0u8; PERMUTATION_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i % PERMUTATION_SIZE];
        }

        Self { seed, perm }
    }

    /// The seed this field was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The doubled permutation table (read-only).
    pub fn permutation(&self) -> &[u8; PERMUTATION_SIZE * 2] {
        &self.perm
    }

    /// Sample single-octave noise at `(x, z)`.
    ///
    /// Output is roughly in `[-1, 1]` but is not clamped.
    pub fn noise_2d(&self, x: f64, z: f64) -> f64 {
        let xf = x.floor();
        let zf = z.floor();
        let cx = (xf as i64 & 255) as usize;
        let cz = (zf as i64 & 255) as usize;

        let x = x - xf;
        let z = z - zf;
        let u = fade(x);
        let v = fade(z);

        let p = &self.perm;
        let a = p[cx] as usize + cz;
        let b = p[cx + 1] as usize + cz;
        let aa = p[a];
        let ab = p[a + 1];
        let ba = p[b];
        let bb = p[b + 1];

        lerp(
            v,
            lerp(u, grad(aa, x, z), grad(ba, x - 1.0, z)),
            lerp(u, grad(ab, x, z - 1.0), grad(bb, x - 1.0, z - 1.0)),
        )
    }

    /// Sample fractal noise: `octaves` layers at doubling frequency, each
    /// weighted by `persistence^i`, normalized by the total weight.
    ///
    /// Zero octaves yields `0.0`.
    pub fn fractal_2d(&self, x: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.noise_2d(x * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        if max_value == 0.0 {
            return 0.0;
        }
        total / max_value
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl noise::NoiseFn<f64, 2> for NoiseField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.noise_2d(point[0], point[1])
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the corner gradient selected by the hash's two low bits
/// with the offset `(x, z)`. Bit 0 flips the x sign, bit 1 flips the z sign.
#[inline]
fn grad(hash: u8, x: f64, z: f64) -> f64 {
    let gx = if hash & 1 == 0 { x } else { -x };
    let gz = if hash & 2 == 0 { z } else { -z };
    gx + gz
}
