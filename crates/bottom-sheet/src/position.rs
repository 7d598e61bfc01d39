/// Snap level of the sheet, each carrying the container-relative height the
/// sheet occupied when the level was last set or refreshed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetPosition {
    /// Fully expanded, up to the top indentation.
    Up(f32),
    /// Halfway between collapsed and the container top.
    Middle(f32),
    /// Collapsed; only the shift stays visible.
    Down(f32),
}

/// Payload-free view of [`SheetPosition`], ordered from collapsed to expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SheetLevel {
    Down,
    Middle,
    Up,
}

impl SheetPosition {
    /// Same level with a new height payload.
    pub fn update_height(self, height: f32) -> Self {
        match self {
            SheetPosition::Up(_) => SheetPosition::Up(height),
            SheetPosition::Middle(_) => SheetPosition::Middle(height),
            SheetPosition::Down(_) => SheetPosition::Down(height),
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, SheetPosition::Up(_))
    }

    pub fn is_middle(&self) -> bool {
        matches!(self, SheetPosition::Middle(_))
    }

    pub fn is_down(&self) -> bool {
        matches!(self, SheetPosition::Down(_))
    }

    pub fn height(&self) -> f32 {
        match *self {
            SheetPosition::Up(height)
            | SheetPosition::Middle(height)
            | SheetPosition::Down(height) => height,
        }
    }

    pub fn level(&self) -> SheetLevel {
        match self {
            SheetPosition::Up(_) => SheetLevel::Up,
            SheetPosition::Middle(_) => SheetLevel::Middle,
            SheetPosition::Down(_) => SheetLevel::Down,
        }
    }
}

impl Default for SheetPosition {
    fn default() -> Self {
        SheetPosition::Down(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_height_keeps_variant() {
        assert_eq!(SheetPosition::Up(10.0).update_height(950.0), SheetPosition::Up(950.0));
        assert_eq!(
            SheetPosition::Middle(1.0).update_height(444.0),
            SheetPosition::Middle(444.0)
        );
        assert_eq!(SheetPosition::Down(0.0).update_height(88.0), SheetPosition::Down(88.0));
    }

    #[test]
    fn predicates_match_exactly_one_variant() {
        for position in [
            SheetPosition::Up(1.0),
            SheetPosition::Middle(1.0),
            SheetPosition::Down(1.0),
        ] {
            let hits = [position.is_up(), position.is_middle(), position.is_down()]
                .iter()
                .filter(|hit| **hit)
                .count();
            assert_eq!(hits, 1, "{position:?}");
            assert_eq!(position.height(), 1.0);
        }
    }

    #[test]
    fn levels_are_ordered_from_collapsed() {
        assert!(SheetLevel::Down < SheetLevel::Middle);
        assert!(SheetLevel::Middle < SheetLevel::Up);
        assert_eq!(SheetPosition::Middle(5.0).level(), SheetLevel::Middle);
        assert_eq!(SheetPosition::default(), SheetPosition::Down(0.0));
    }
}
