//! Random integers and glyph selection.

use std::borrow::Cow;

use rand::{Rng, rngs::OsRng};

/// First printable ASCII code (`!`).
const FIRST_PRINTABLE: u8 = 33;

/// Number of printable ASCII codes, `!` through `~`.
const PRINTABLE_COUNT: u32 = 94;

/// Source of uniformly distributed integers.
///
/// Any `FnMut(u32) -> u32` closure is a source, which keeps the renderer and
/// driver deterministic under test.
pub trait RandomSource {
    /// An integer in `[0, max)`. Returns `0` when `max` is `0`.
    fn random_int(&mut self, max: u32) -> u32;
}

impl<F> RandomSource for F
where
    F: FnMut(u32) -> u32,
{
    fn random_int(&mut self, max: u32) -> u32 {
        if max == 0 { 0 } else { self(max) }
    }
}

/// Randomness drawn from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn random_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        OsRng.gen_range(0..max)
    }
}

/// Pick a glyph from `tile_set`, or a printable ASCII character when the set
/// is missing or empty.
pub fn random_character<'a, R>(tile_set: Option<&'a [String]>, random: &mut R) -> Cow<'a, str>
where
    R: RandomSource + ?Sized,
{
    match tile_set {
        Some(tiles) if !tiles.is_empty() => {
            let index = random.random_int(tiles.len() as u32) as usize;
            // A misbehaving source falls back to the first tile.
            let tile = tiles.get(index).or_else(|| tiles.first());
            Cow::Borrowed(tile.map(String::as_str).unwrap_or_default())
        }
        _ => {
            let offset = random.random_int(PRINTABLE_COUNT) % PRINTABLE_COUNT;
            Cow::Owned(char::from(FIRST_PRINTABLE + offset as u8).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(chars: &[&str]) -> Vec<String> {
        chars.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_closure_source() {
        let mut source = |max: u32| 123_456_789 % max;
        assert_eq!(source.random_int(10), 9);
        assert_eq!(source.random_int(20), 9);
        assert_eq!(source.random_int(0), 0);
    }

    #[test]
    fn test_os_random_in_range() {
        let mut source = OsRandom;
        for max in [1, 2, 3, 10, 94, 1000] {
            for _ in 0..200 {
                assert!(source.random_int(max) < max);
            }
        }
        assert_eq!(source.random_int(0), 0);
    }

    #[test]
    fn test_os_random_covers_small_range() {
        let mut source = OsRandom;
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[source.random_int(4) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_character_from_tile_set() {
        let set = tiles(&["A", "B", "C"]);
        let mut source = |max: u32| 1 % max;
        assert_eq!(random_character(Some(set.as_slice()), &mut source), "B");
    }

    #[test]
    fn test_character_out_of_range_falls_back() {
        let set = tiles(&["A"]);
        let mut source = |_max: u32| 999u32;
        assert_eq!(random_character(Some(set.as_slice()), &mut source), "A");
    }

    #[test]
    fn test_character_ascii_fallback() {
        let empty: Vec<String> = Vec::new();
        let mut source = |max: u32| 50 % max;
        for glyph in [
            random_character(None, &mut source),
            random_character(Some(empty.as_slice()), &mut source),
        ] {
            let mut chars = glyph.chars();
            let ch = chars.next().expect("one character");
            assert!(chars.next().is_none());
            assert!(('!'..='~').contains(&ch));
        }
    }

    #[test]
    fn test_character_ascii_bounds() {
        let mut low = |_max: u32| 0u32;
        let mut high = |max: u32| max - 1;
        assert_eq!(random_character(None, &mut low), "!");
        assert_eq!(random_character(None, &mut high), "~");
    }
}
