//! Property checks over generated buffers.
//!
//! Buffers come from a fixed-seed xorshift generator so failures reproduce.

use approx::assert_relative_eq;
use pixbright_compute::{Capabilities, PackedPixel, Processor};

struct XorShift(u64);

impl XorShift {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 16) as u32
    }

    fn pixels(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_u32()).collect()
    }

    fn floats(&mut self, len: usize) -> Vec<f32> {
        (0..len)
            .map(|_| (self.next_u32() % 20_000) as f32 / 100.0 - 100.0)
            .collect()
    }
}

const DELTAS: [i32; 14] = [
    i32::MIN, -1000, -256, -255, -200, -64, -1, 1, 64, 200, 255, 256, 1000, i32::MAX,
];

/// Processor with the vector engine, or `None` on a target without SIMD.
fn processor() -> Option<Processor> {
    let proc = Processor::builder()
        .capabilities(Capabilities::detect())
        .warn_on_remainder(false)
        .build()
        .unwrap();
    proc.is_acceleration_supported().then_some(proc)
}

#[test]
fn prop_vector_equals_scalar() {
    let Some(proc) = processor() else { return };
    let mut rng = XorShift(0x9E3779B97F4A7C15);

    for len in [0usize, 4, 8, 64, 1024] {
        let original = rng.pixels(len);
        for delta in DELTAS {
            let mut scalar = original.clone();
            let mut vector = original.clone();
            proc.brightness(&mut scalar, delta);
            proc.brightness_accelerated(&mut vector, delta).unwrap();
            assert_eq!(vector, scalar, "len {} delta {}", len, delta);
        }
    }
}

#[test]
fn prop_alpha_invariant() {
    let Some(proc) = processor() else { return };
    let mut rng = XorShift(42);
    let original = rng.pixels(256);

    for delta in DELTAS {
        let mut scalar = original.clone();
        let mut vector = original.clone();
        proc.brightness(&mut scalar, delta);
        proc.brightness_accelerated(&mut vector, delta).unwrap();

        for ((o, s), v) in original.iter().zip(&scalar).zip(&vector) {
            assert_eq!(PackedPixel(*o).a(), PackedPixel(*s).a());
            assert_eq!(PackedPixel(*o).a(), PackedPixel(*v).a());
        }
    }
}

#[test]
fn prop_zero_delta_identity() {
    let Some(proc) = processor() else { return };
    let original = XorShift(7).pixels(128);

    let mut scalar = original.clone();
    let mut vector = original.clone();
    proc.brightness(&mut scalar, 0);
    proc.brightness_accelerated(&mut vector, 0).unwrap();

    assert_eq!(scalar, original);
    assert_eq!(vector, original);
}

#[test]
fn prop_inverse_delta_restores() {
    let Some(proc) = processor() else { return };
    let mut rng = XorShift(1234);

    for delta in [1, 5, 31, 64, 100] {
        // keep channels inside [delta, 255 - delta] so nothing saturates
        let span = (256 - 2 * delta) as u32;
        let original: Vec<u32> = (0..64)
            .map(|_| {
                let c = |rng: &mut XorShift| (rng.next_u32() % span) as u8 + delta as u8;
                let a = rng.next_u32() as u8;
                PackedPixel::from_argb(a, c(&mut rng), c(&mut rng), c(&mut rng)).to_u32()
            })
            .collect();

        let mut scalar = original.clone();
        proc.brightness(&mut scalar, delta);
        proc.brightness(&mut scalar, -delta);
        assert_eq!(scalar, original, "scalar delta {}", delta);

        let mut vector = original.clone();
        proc.brightness_accelerated(&mut vector, delta).unwrap();
        proc.brightness_accelerated(&mut vector, -delta).unwrap();
        assert_eq!(vector, original, "vector delta {}", delta);
    }
}

#[test]
fn prop_vector_leaves_tail() {
    let Some(proc) = processor() else { return };
    let mut rng = XorShift(99);

    for len in [1usize, 2, 3, 5, 7, 13] {
        let original = rng.pixels(len);
        let mut vector = original.clone();
        proc.brightness_accelerated(&mut vector, 50).unwrap();

        let full = len / 4 * 4;
        assert_eq!(&vector[full..], &original[full..], "len {}", len);

        let mut expected = original[..full].to_vec();
        proc.brightness(&mut expected, 50);
        assert_eq!(&vector[..full], &expected[..]);
    }
}

#[test]
fn prop_scale_matches_elementwise() {
    let Some(proc) = processor() else { return };
    let mut rng = XorShift(2024);

    for multiplier in [-3.0f32, -1.0, 0.0, 0.5, 2.5, 1e3] {
        let original = rng.floats(64);
        let mut values = original.clone();
        proc.scale(&mut values, multiplier).unwrap();

        for (got, orig) in values.iter().zip(&original) {
            assert_relative_eq!(*got, orig * multiplier);
        }
    }
}

#[test]
fn prop_scale_by_one_is_identity() {
    let Some(proc) = processor() else { return };
    let original = XorShift(5).floats(128);
    let mut values = original.clone();
    proc.scale(&mut values, 1.0).unwrap();
    assert_eq!(values, original);
}
