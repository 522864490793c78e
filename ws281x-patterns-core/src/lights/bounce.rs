//! A short rainbow that slides to one end of the strip, then back.
use core::time::Duration;

use super::{FrameSource, Pixel, clear};

/// red, orange, yellow, green, light blue, blue, purple, pink. all dim
pub const PALETTE: [Pixel; 8] = [
    Pixel::packed(0x0020_0000),
    Pixel::packed(0x0020_1000),
    Pixel::packed(0x0020_2000),
    Pixel::packed(0x0000_2000),
    Pixel::packed(0x0000_2020),
    Pixel::packed(0x0000_0020),
    Pixel::packed(0x0010_0010),
    Pixel::packed(0x0020_0010),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceState {
    /// index of the first palette color
    pub head: usize,
    pub rising: bool,
}

impl Default for BounceState {
    fn default() -> Self {
        Self {
            head: 0,
            rising: true,
        }
    }
}

impl BounceState {
    /// Move one step along a strip of `len` leds.
    ///
    /// The edges are checked against the head *before* it moves, so the step that reaches an edge is immediately followed by a step back.
    pub fn advance(&mut self, len: usize) {
        // `head + PALETTE.len() >= len - 1` without underflowing on an empty strip
        if self.head + PALETTE.len() + 1 >= len {
            self.rising = false;
        }
        if self.head < 1 {
            self.rising = true;
        }

        if self.rising {
            self.head += 1;
        } else {
            // not rising means the head was at least 1
            self.head -= 1;
        }
    }
}

/// The strip needs at least `PALETTE.len() + 1` leds. Shorter strips get a truncated cluster.
#[derive(Debug, Default, Clone)]
pub struct Bounce {
    state: BounceState,
}

impl Bounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BounceState {
        self.state
    }
}

impl FrameSource for Bounce {
    fn name(&self) -> &'static str {
        "bounce"
    }

    fn frame_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / 60)
    }

    fn next_frame(&mut self, frame: &mut [Pixel]) {
        self.state.advance(frame.len());

        clear(frame);

        for (x, color) in frame.iter_mut().skip(self.state.head).zip(PALETTE) {
            *x = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 150;

    fn lit(frame: &[Pixel]) -> Vec<usize> {
        frame
            .iter()
            .enumerate()
            .filter(|(_, x)| !x.is_black())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_sixty_fps() {
        assert_eq!(Bounce::new().frame_period(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_first_frame() {
        let mut bounce = Bounce::new();
        let mut frame = [Pixel::WHITE; N];

        bounce.next_frame(&mut frame);

        assert_eq!(bounce.state(), BounceState { head: 1, rising: true });
        assert!(frame[0].is_black());
        assert_eq!(frame[1..9], PALETTE);
        assert!(frame[9..].iter().all(|x| x.is_black()));
    }

    #[test]
    fn test_palette_order() {
        let (red, pink) = (PALETTE[0], PALETTE[7]);

        assert_eq!((red.red(), red.green(), red.blue()), (0x20, 0, 0));
        assert_eq!(pink.to_packed(), 0x0020_0010);
        assert!(PALETTE.iter().all(|x| !x.is_black()));
    }

    #[test_log::test]
    fn test_round_trip() {
        let mut bounce = Bounce::new();
        let mut frame = [Pixel::BLACK; N];

        for _ in 0..141 {
            bounce.next_frame(&mut frame);
        }

        assert_eq!(bounce.state(), BounceState { head: 141, rising: true });
        assert_eq!(lit(&frame), (141..149).collect::<Vec<_>>());

        // 141 + 8 >= 149 so this tick turns around
        bounce.next_frame(&mut frame);
        assert_eq!(bounce.state(), BounceState { head: 140, rising: false });

        bounce.next_frame(&mut frame);
        assert_eq!(bounce.state(), BounceState { head: 139, rising: false });

        // all the way back down
        for _ in 0..139 {
            bounce.next_frame(&mut frame);
        }
        assert_eq!(bounce.state(), BounceState { head: 0, rising: false });
        assert_eq!(frame[0..8], PALETTE);

        bounce.next_frame(&mut frame);
        assert_eq!(bounce.state(), BounceState { head: 1, rising: true });
    }

    #[test]
    fn test_flips_only_at_the_edges() {
        let mut state = BounceState::default();
        let mut flips = 0;

        for _ in 0..1_000 {
            let before = state;

            state.advance(N);

            if state.rising != before.rising {
                flips += 1;

                if before.rising {
                    assert_eq!(before.head, N - 1 - PALETTE.len());
                } else {
                    assert_eq!(before.head, 0);
                }
            }
        }

        // 141 ticks up, then 141 ticks down
        assert_eq!(flips, 1_000 / 141);
    }

    #[test]
    fn test_cluster_stays_on_the_strip() {
        for len in PALETTE.len() + 1..=64 {
            let mut bounce = Bounce::new();
            let mut frame = vec![Pixel::BLACK; len];

            for tick in 0..500 {
                bounce.next_frame(&mut frame);

                let head = bounce.state().head;

                assert!(head + PALETTE.len() <= len, "len {len} tick {tick}");
                assert_eq!(lit(&frame), (head..head + PALETTE.len()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_short_strip_does_not_panic() {
        for len in 0..=PALETTE.len() {
            let mut bounce = Bounce::new();
            let mut frame = vec![Pixel::BLACK; len];

            for _ in 0..20 {
                bounce.next_frame(&mut frame);
            }
        }
    }
}
