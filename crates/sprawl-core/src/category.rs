//! Land-use categories and the [`CategorySet`] bitset.

use crate::error::GridError;
use std::fmt;

/// The land-use category held by a single grid cell.
///
/// Categories are mutually exclusive: every cell holds exactly one.
/// The discriminant is the wire code exchanged with grid producers and
/// renderers (`0..=7`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LandUse {
    /// Undeveloped land (code 0).
    #[default]
    Empty = 0,
    /// Low-density housing (code 1).
    ResidentialLow = 1,
    /// High-density housing (code 2).
    ResidentialHigh = 2,
    /// Shops and offices (code 3).
    Commercial = 3,
    /// Factories and warehouses (code 4).
    Industrial = 4,
    /// Parks and green space (code 5).
    Park = 5,
    /// Rivers and lakes (code 6). Never overwritten by a rule.
    Water = 6,
    /// Road network (code 7). Never overwritten by a rule.
    Road = 7,
}

impl LandUse {
    /// Number of categories.
    pub const COUNT: usize = 8;

    /// All categories in code order.
    pub const ALL: [LandUse; Self::COUNT] = [
        LandUse::Empty,
        LandUse::ResidentialLow,
        LandUse::ResidentialHigh,
        LandUse::Commercial,
        LandUse::Industrial,
        LandUse::Park,
        LandUse::Water,
        LandUse::Road,
    ];

    /// The numeric code of this category.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric code, returning `None` outside `0..=7`.
    pub const fn from_code(code: u8) -> Option<LandUse> {
        match code {
            0 => Some(LandUse::Empty),
            1 => Some(LandUse::ResidentialLow),
            2 => Some(LandUse::ResidentialHigh),
            3 => Some(LandUse::Commercial),
            4 => Some(LandUse::Industrial),
            5 => Some(LandUse::Park),
            6 => Some(LandUse::Water),
            7 => Some(LandUse::Road),
            _ => None,
        }
    }

    /// Human-readable label for legends and statistics.
    pub const fn label(self) -> &'static str {
        match self {
            LandUse::Empty => "Empty",
            LandUse::ResidentialLow => "Residential-Low",
            LandUse::ResidentialHigh => "Residential-High",
            LandUse::Commercial => "Commercial",
            LandUse::Industrial => "Industrial",
            LandUse::Park => "Park",
            LandUse::Water => "Water",
            LandUse::Road => "Road",
        }
    }

    /// Whether this is one of the two residential categories.
    pub const fn is_residential(self) -> bool {
        matches!(self, LandUse::ResidentialLow | LandUse::ResidentialHigh)
    }

    /// Whether this category is fixed by the initializer (Water, Road).
    pub const fn is_protected(self) -> bool {
        matches!(self, LandUse::Water | LandUse::Road)
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<LandUse> for u8 {
    fn from(value: LandUse) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for LandUse {
    type Error = GridError;

    /// Decode a code with no position context; the error reports `(0, 0)`.
    /// Grid ingestion uses [`LandGrid::from_codes`](crate::LandGrid::from_codes),
    /// which reports the offending cell.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        LandUse::from_code(code).ok_or(GridError::InvalidCategory {
            row: 0,
            col: 0,
            code,
        })
    }
}

/// A set of land-use categories, stored as an 8-bit mask.
///
/// Membership is a single bit test, so a cell whose category is in the
/// set is counted once no matter how many members could describe it.
/// Multi-value neighbour counting relies on this: a neighbour is never
/// counted twice even if categories were ever extended to overlapping
/// flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CategorySet {
    bits: u8,
}

impl CategorySet {
    /// Residential-Low and Residential-High.
    pub const RESIDENTIAL: CategorySet = CategorySet::empty()
        .with(LandUse::ResidentialLow)
        .with(LandUse::ResidentialHigh);

    /// Water and Road.
    pub const PROTECTED: CategorySet = CategorySet::empty()
        .with(LandUse::Water)
        .with(LandUse::Road);

    /// Create an empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// A set holding a single category.
    pub const fn single(category: LandUse) -> Self {
        Self::empty().with(category)
    }

    /// Return a copy of the set with `category` added.
    pub const fn with(self, category: LandUse) -> Self {
        Self {
            bits: self.bits | (1u8 << category.code()),
        }
    }

    /// Insert a category into the set.
    pub fn insert(&mut self, category: LandUse) {
        self.bits |= 1u8 << category.code();
    }

    /// Check whether the set contains a category.
    pub const fn contains(&self, category: LandUse) -> bool {
        self.bits & (1u8 << category.code()) != 0
    }

    /// Return the union of two sets.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the set holds no categories.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of categories in the set.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over member categories in code order.
    pub fn iter(&self) -> impl Iterator<Item = LandUse> + '_ {
        LandUse::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<LandUse> for CategorySet {
    fn from_iter<I: IntoIterator<Item = LandUse>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<LandUse> for CategorySet {
    fn from(category: LandUse) -> Self {
        Self::single(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_round_trip() {
        for (i, category) in LandUse::ALL.iter().enumerate() {
            assert_eq!(category.code() as usize, i);
            assert_eq!(LandUse::from_code(i as u8), Some(*category));
        }
    }

    #[test]
    fn out_of_range_code_rejected() {
        assert_eq!(LandUse::from_code(8), None);
        assert!(matches!(
            LandUse::try_from(200),
            Err(GridError::InvalidCategory { code: 200, .. })
        ));
    }

    #[test]
    fn residential_and_protected() {
        assert!(LandUse::ResidentialLow.is_residential());
        assert!(LandUse::ResidentialHigh.is_residential());
        assert!(!LandUse::Commercial.is_residential());
        assert!(LandUse::Water.is_protected());
        assert!(LandUse::Road.is_protected());
        assert!(!LandUse::Park.is_protected());
    }

    #[test]
    fn residential_set_members() {
        let set = CategorySet::RESIDENTIAL;
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![LandUse::ResidentialLow, LandUse::ResidentialHigh]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(LandUse::ResidentialHigh.to_string(), "Residential-High");
    }

    fn arb_land_use() -> impl Strategy<Value = LandUse> {
        (0u8..8).prop_map(|c| LandUse::from_code(c).unwrap())
    }

    proptest! {
        #[test]
        fn insert_then_contains(categories in prop::collection::vec(arb_land_use(), 0..10)) {
            let set: CategorySet = categories.iter().copied().collect();
            for c in &categories {
                prop_assert!(set.contains(*c));
            }
            prop_assert_eq!(set.len(), set.iter().count());
        }

        #[test]
        fn union_contains_both(a in arb_land_use(), b in arb_land_use()) {
            let set = CategorySet::single(a).union(CategorySet::single(b));
            prop_assert!(set.contains(a));
            prop_assert!(set.contains(b));
        }
    }
}
