//! Cosmetic plate wear: dust, scratches, bolt rust and a slight tilt.
//!
//! Wear is drawn from its own RNG and only feeds inline styles; it never
//! touches the roller.

use plate_core::PlateString;
use rand::Rng;

pub const MAX_ROTATION_DEG: f32 = 1.5;
pub const MAX_HUE_SHIFT_DEG: f32 = 8.0;
pub const MAX_SPECKS: usize = 12;
pub const MAX_SCRATCHES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speck {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scratch {
    pub x_pct: f32,
    pub y_pct: f32,
    pub length_pct: f32,
    pub angle_deg: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoltWear {
    /// 0 is a clean bolt, 1 fully rusted.
    pub rust: f32,
    pub angle_deg: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlateWear {
    pub rotation_deg: f32,
    pub hue_shift_deg: f32,
    pub specks: Vec<Speck>,
    pub scratches: Vec<Scratch>,
    pub bolts: [BoltWear; 2],
}

impl PlateWear {
    /// No wear at all; used while the roll is spinning.
    #[must_use]
    pub const fn pristine() -> Self {
        Self {
            rotation_deg: 0.0,
            hue_shift_deg: 0.0,
            specks: Vec::new(),
            scratches: Vec::new(),
            bolts: [BoltWear {
                rust: 0.0,
                angle_deg: 0.0,
            }; 2],
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let speck_count = rng.gen_range(0..=MAX_SPECKS);
        let specks = (0..speck_count)
            .map(|_| Speck {
                x_pct: rng.gen_range(0.0..100.0),
                y_pct: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(1.0..3.5),
                opacity: rng.gen_range(0.15..0.5),
            })
            .collect();
        let scratch_count = rng.gen_range(0..=MAX_SCRATCHES);
        let scratches = (0..scratch_count)
            .map(|_| Scratch {
                x_pct: rng.gen_range(0.0..90.0),
                y_pct: rng.gen_range(5.0..95.0),
                length_pct: rng.gen_range(4.0..18.0),
                angle_deg: rng.gen_range(-35.0..35.0),
                opacity: rng.gen_range(0.1..0.35),
            })
            .collect();
        let mut bolt = || BoltWear {
            rust: rng.gen_range(0.0..1.0),
            angle_deg: rng.gen_range(0.0..180.0),
        };
        let bolts = [bolt(), bolt()];
        Self {
            rotation_deg: rng.gen_range(-MAX_ROTATION_DEG..=MAX_ROTATION_DEG),
            hue_shift_deg: rng.gen_range(-MAX_HUE_SHIFT_DEG..=MAX_HUE_SHIFT_DEG),
            specks,
            scratches,
            bolts,
        }
    }

    #[must_use]
    pub fn plate_style(&self) -> String {
        format!(
            "transform: rotate({:.2}deg); filter: hue-rotate({:.1}deg);",
            self.rotation_deg, self.hue_shift_deg
        )
    }
}

impl Speck {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; width: {:.1}px; height: {:.1}px; opacity: {:.2};",
            self.x_pct, self.y_pct, self.size_px, self.size_px, self.opacity
        )
    }
}

impl Scratch {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; width: {:.1}%; transform: rotate({:.1}deg); opacity: {:.2};",
            self.x_pct, self.y_pct, self.length_pct, self.angle_deg, self.opacity
        )
    }
}

impl BoltWear {
    #[must_use]
    pub fn style(&self) -> String {
        // Mix steel grey toward rust brown.
        let r = lerp(160.0, 139.0, self.rust);
        let g = lerp(160.0, 69.0, self.rust);
        let b = lerp(165.0, 19.0, self.rust);
        format!(
            "background-color: rgb({r:.0}, {g:.0}, {b:.0}); transform: rotate({:.0}deg);",
            self.angle_deg
        )
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (to - from).mul_add(t.clamp(0.0, 1.0), from)
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Decorative region number in `1..=199`, stable for a given plate.
#[must_use]
pub fn region_for(plate: &PlateString) -> u16 {
    let text = plate.to_string();
    let bucket = fnv1a64(text.as_bytes()) % 199;
    u16::try_from(bucket).map_or(1, |b| b + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn random_wear_stays_in_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..500 {
            let wear = PlateWear::random(&mut rng);
            assert!(wear.rotation_deg.abs() <= MAX_ROTATION_DEG);
            assert!(wear.hue_shift_deg.abs() <= MAX_HUE_SHIFT_DEG);
            assert!(wear.specks.len() <= MAX_SPECKS);
            assert!(wear.scratches.len() <= MAX_SCRATCHES);
            assert!(wear.bolts.iter().all(|b| (0.0..1.0).contains(&b.rust)));
        }
    }

    #[test]
    fn pristine_wear_has_no_marks() {
        let wear = PlateWear::pristine();
        assert!(wear.specks.is_empty());
        assert!(wear.scratches.is_empty());
        assert_eq!(
            wear.plate_style(),
            "transform: rotate(0.00deg); filter: hue-rotate(0.0deg);"
        );
    }

    #[test]
    fn region_is_stable_and_in_range() {
        let plate: PlateString = "А777АА".parse().unwrap();
        assert_eq!(region_for(&plate), region_for(&plate));
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..1_000 {
            let region = region_for(&plate_core::generate_plate(&mut rng));
            assert!((1..=199).contains(&region));
        }
    }

    #[test]
    fn bolt_colour_moves_toward_rust() {
        let clean = BoltWear {
            rust: 0.0,
            angle_deg: 0.0,
        };
        let rusty = BoltWear {
            rust: 1.0,
            angle_deg: 0.0,
        };
        assert!(clean.style().contains("rgb(160, 160, 165)"));
        assert!(rusty.style().contains("rgb(139, 69, 19)"));
    }
}
