use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a point placed on the canvas.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<PointId>` to be pointer-optimized, which the
///   session uses for "start/end not set"
///
/// A `PointId` is the point's 0-based position in the session's point list and
/// stays valid until the session is cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(NonZeroU32);

impl PointId {
    /// Id for the point at list position `slot`, or `None` when `slot` has
    /// no representable id (`u32::MAX` and above).
    pub fn for_slot(slot: usize) -> Option<Self> {
        let raw = u32::try_from(slot).ok()?.checked_add(1)?;
        NonZeroU32::new(raw).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a slot into adjacency and traversal arrays.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointId({})", self.index())
    }
}

/// Points are shown 1-based on the canvas, so `Display` matches the label.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let id = PointId::for_slot(i).unwrap();
            assert_eq!(id.index() as usize, i);
            assert_eq!(id.slot(), i);
        }
    }

    #[test]
    fn for_slot_stops_below_u32_max() {
        assert_eq!(PointId::for_slot(0).map(PointId::index), Some(0));
        let last = u32::MAX as usize - 1;
        assert_eq!(PointId::for_slot(last).map(PointId::slot), Some(last));
        assert_eq!(PointId::for_slot(u32::MAX as usize), None);
        assert_eq!(PointId::for_slot(usize::MAX), None);
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<PointId>(),
            core::mem::size_of::<Option<PointId>>()
        );
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(PointId::for_slot(0).unwrap().to_string(), "#1");
        assert_eq!(format!("{:?}", PointId::for_slot(4).unwrap()), "PointId(4)");
    }
}
