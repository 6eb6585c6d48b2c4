//! Elemental type tags.

/// Elemental type of a combatant or a move.
///
/// Element affects:
/// - Enemy move preference (effective moves are weighted up)
/// - Nothing else: damage ignores elements
///
/// Advantage cycle: Water → Insect → Ground → Water.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Element {
    /// No affinity; neutral against everything.
    #[default]
    Normal,
    Water,
    Ground,
    Insect,
}

impl Element {
    pub const ADVANTAGE: f32 = 1.5;
    pub const DISADVANTAGE: f32 = 0.5;
    pub const NEUTRAL: f32 = 1.0;

    /// The element this one is strong against, if any.
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Water => Some(Element::Insect),
            Element::Insect => Some(Element::Ground),
            Element::Ground => Some(Element::Water),
            Element::Normal => None,
        }
    }

    /// Multiplier for an attack of this element against `defender`.
    pub fn modifier_against(self, defender: Element) -> f32 {
        if self.beats() == Some(defender) {
            Self::ADVANTAGE
        } else if defender.beats() == Some(self) {
            Self::DISADVANTAGE
        } else {
            Self::NEUTRAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn advantage_cycle() {
        assert_eq!(Element::Water.modifier_against(Element::Insect), 1.5);
        assert_eq!(Element::Insect.modifier_against(Element::Ground), 1.5);
        assert_eq!(Element::Ground.modifier_against(Element::Water), 1.5);

        assert_eq!(Element::Insect.modifier_against(Element::Water), 0.5);
        assert_eq!(Element::Ground.modifier_against(Element::Insect), 0.5);
        assert_eq!(Element::Water.modifier_against(Element::Ground), 0.5);
    }

    #[test]
    fn pairs_are_reciprocal_or_neutral() {
        for a in Element::iter() {
            for b in Element::iter() {
                let pair = (a.modifier_against(b), b.modifier_against(a));
                assert!(
                    pair == (1.5, 0.5) || pair == (0.5, 1.5) || pair == (1.0, 1.0),
                    "{a} vs {b} gave {pair:?}"
                );
            }
        }
    }

    #[test]
    fn normal_and_same_type_are_neutral() {
        for e in Element::iter() {
            assert_eq!(e.modifier_against(e), 1.0);
            assert_eq!(Element::Normal.modifier_against(e), 1.0);
            assert_eq!(e.modifier_against(Element::Normal), 1.0);
        }
    }

    #[test]
    fn parses_type_tags() {
        assert_eq!("Water".parse::<Element>().unwrap(), Element::Water);
        assert_eq!("insect".parse::<Element>().unwrap(), Element::Insect);
        assert!("Fire".parse::<Element>().is_err());
    }
}
