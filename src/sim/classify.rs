//! Contact classification
//!
//! Folds raw world contacts into the two meanings gameplay cares about:
//! passing a gate or touching something solid.

use serde::{Deserialize, Serialize};

use super::body::Category;
use super::world::Contact;

/// Gameplay meaning of a reported contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactClass {
    /// The player crossed a gate.
    Scoring,
    /// The player touched a column or the ground.
    Lethal,
}

/// Classify a reported contact.
///
/// Total over everything the world reports: a gate on either side means a
/// scoring pass, anything else is a player/solid hit. Inert pairs never get
/// this far (see [`super::body::reported`]).
pub fn classify(contact: &Contact) -> ContactClass {
    if contact.a_category == Category::Gate || contact.b_category == Category::Gate {
        ContactClass::Scoring
    } else {
        ContactClass::Lethal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(a: Category, b: Category) -> Contact {
        Contact {
            a: 0,
            b: 1,
            a_category: a,
            b_category: b,
        }
    }

    #[test]
    fn test_gate_contact_scores_either_side() {
        assert_eq!(
            classify(&contact(Category::Player, Category::Gate)),
            ContactClass::Scoring
        );
        assert_eq!(
            classify(&contact(Category::Gate, Category::Player)),
            ContactClass::Scoring
        );
    }

    #[test]
    fn test_solid_contact_is_lethal() {
        assert_eq!(
            classify(&contact(Category::Player, Category::Solid)),
            ContactClass::Lethal
        );
        assert_eq!(
            classify(&contact(Category::Solid, Category::Player)),
            ContactClass::Lethal
        );
    }
}
