//! Pixel-art bitmaps for the actor and obstacles.
//!
//! Each `#` is one sprite pixel of `SPRITE_PIXEL_SIZE` game units.

use crate::runner::{ObstacleKind, Posture};

pub struct PixelSprite {
    pub rows: &'static [&'static str],
}

impl PixelSprite {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// (column, row) of every filled pixel.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == '#')
                .map(move |(col, _)| (col, row))
        })
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

// ── Actor ───────────────────────────────────────────────────────────

pub const ACTOR_STANDING: PixelSprite = PixelSprite::new(&[
    "....######",
    "...#######",
    "..########",
    ".#########",
    ".#########",
    ".########.",
    "..######..",
    "..#..#....",
    "..#..#....",
    "..#..#....",
]);

pub const ACTOR_LOWERED: PixelSprite = PixelSprite::new(&[
    "....######",
    "...#######",
    "..########",
    ".#########",
    "#########.",
]);

// ── Obstacles ───────────────────────────────────────────────────────

pub const CACTUS: PixelSprite = PixelSprite::new(&[
    "..##..",
    ".####.",
    "######",
    ".####.",
    ".####.",
    ".####.",
    ".####.",
]);

pub const BIRD: PixelSprite = PixelSprite::new(&[
    "...##.",
    "..####",
    "######",
    "..##..",
    ".#..#.",
]);

pub fn actor_sprite(posture: Posture) -> &'static PixelSprite {
    match posture {
        Posture::Upright => &ACTOR_STANDING,
        Posture::Lowered => &ACTOR_LOWERED,
    }
}

pub fn obstacle_sprite(kind: ObstacleKind) -> &'static PixelSprite {
    match kind {
        ObstacleKind::Cactus => &CACTUS,
        ObstacleKind::Bird => &BIRD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SPRITE_PIXEL_SIZE;
    use crate::runner::{Actor, Stance};

    #[test]
    fn test_sprite_dimensions() {
        assert_eq!((ACTOR_STANDING.width(), ACTOR_STANDING.height()), (10, 10));
        assert_eq!((ACTOR_LOWERED.width(), ACTOR_LOWERED.height()), (10, 5));
        assert_eq!((CACTUS.width(), CACTUS.height()), (6, 7));
        assert_eq!((BIRD.width(), BIRD.height()), (6, 5));
    }

    #[test]
    fn test_actor_sprites_match_hitbox() {
        let mut actor = Actor::default();
        for stance in [Stance::Standing, Stance::Lowered] {
            actor.stance = stance;
            let sprite = actor_sprite(stance.posture());
            assert!(
                (sprite.width() as f64 * SPRITE_PIXEL_SIZE - actor.width()).abs() < f64::EPSILON
            );
            assert!(
                (sprite.height() as f64 * SPRITE_PIXEL_SIZE - actor.height()).abs()
                    < f64::EPSILON
            );
        }
    }

    #[test]
    fn test_filled_pixels() {
        let sprite = PixelSprite::new(&["#.", ".#"]);
        let filled: Vec<_> = sprite.filled().collect();
        assert_eq!(filled, vec![(0, 0), (1, 1)]);
    }
}
