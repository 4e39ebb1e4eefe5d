use common::shapes::Rectangle;

/// Child slot of a split node. The discriminant is the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Quadrant> {
        Quadrant::ALL.get(index).copied()
    }
}

/// How strictly a rectangle must fit a quadrant to be pushed into it.
///
/// `Loose` checks both edges against the midpoint for the top and left
/// halves but only the near edge for the bottom and right halves, so a
/// rectangle that starts past a midpoint and runs off the far side of the
/// node still lands in the bottom/right child. `Strict` also requires the
/// far edge to stay inside the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    #[default]
    Loose,
    Strict,
}

/// The single quadrant of `bounds` that holds `rect`, or `None` when `rect`
/// straddles a midpoint.
///
/// Midpoints use the unrounded half extents of `bounds`.
#[inline]
pub fn classify(bounds: &Rectangle, rect: &Rectangle, mode: Classification) -> Option<Quadrant> {
    let v_mid = bounds.x + bounds.width / 2.0;
    let h_mid = bounds.y + bounds.height / 2.0;

    let top = rect.y < h_mid && rect.y + rect.height < h_mid;
    let left = rect.x < v_mid && rect.x + rect.width < v_mid;
    let (bottom, right) = match mode {
        Classification::Loose => (rect.y > h_mid, rect.x > v_mid),
        Classification::Strict => (
            rect.y > h_mid && rect.y + rect.height < bounds.y + bounds.height,
            rect.x > v_mid && rect.x + rect.width < bounds.x + bounds.width,
        ),
    };

    match (left, right, top, bottom) {
        (true, _, true, _) => Some(Quadrant::TopLeft),
        (true, _, _, true) => Some(Quadrant::BottomLeft),
        (_, true, true, _) => Some(Quadrant::TopRight),
        (_, true, _, true) => Some(Quadrant::BottomRight),
        _ => None,
    }
}
