use rand::Rng;
use sdl2::pixels::Color;

pub trait ColorInterpolationExt<T> {
    fn lerp(&self, other: &T, p: f64) -> T;
}

impl ColorInterpolationExt<Color> for Color {
    fn lerp(&self, other: &Color, p: f64) -> Color {
        assert!((0f64..=1f64).contains(&p), "lerp p lives in [0, 1]");

        // interpolate a channel, with `p` weighing `self`
        let f = |a: u8, b: u8| ((a as f64) * p + (b as f64) * (1f64 - p)).round() as u8;

        Color {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: f(self.a, other.a),
        }
    }
}

pub trait ColorRandomExt {
    /// A uniformly random color with full alpha.
    fn random_opaque<R: Rng>(rng: &mut R) -> Self;
}

impl ColorRandomExt for Color {
    fn random_opaque<R: Rng>(rng: &mut R) -> Self {
        Color::RGBA(
            rng.gen_range(0..=u8::MAX),
            rng.gen_range(0..=u8::MAX),
            rng.gen_range(0..=u8::MAX),
            u8::MAX,
        )
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sdl2::pixels::Color;

    use super::ColorInterpolationExt;
    use super::ColorRandomExt;

    #[test]
    fn lerp_endpoints() {
        let black = Color::RGBA(0, 0, 0, 255);
        let white = Color::RGBA(255, 255, 255, 255);

        assert_eq!(white.lerp(&black, 1f64), white);
        assert_eq!(white.lerp(&black, 0f64), black);
    }

    #[test]
    fn random_colors_are_opaque() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..32 {
            assert_eq!(Color::random_opaque(&mut rng).a, u8::MAX);
        }
    }
}
