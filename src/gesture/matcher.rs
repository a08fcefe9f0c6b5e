use super::{
    direction::{
        DirectionSet, DOWNISH, DOWN_LEFTISH, DOWN_RIGHTISH, LEFTISH, RIGHTISH, UPISH, UP_RIGHTISH,
    },
    types::{Direction, Letter},
};


/// One row of the pattern table: a sequence of exactly `slots.len()`
/// directions whose i-th element belongs to `slots[i]`.
#[derive(Clone, Copy, Debug)]
pub struct PatternRule {
    pub letter: Letter,
    pub slots: &'static [DirectionSet],
}

impl PatternRule {
    pub fn matches(&self, directions: &[Direction]) -> bool {
        directions.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(directions)
                .all(|(slot, direction)| slot.contains(*direction))
    }
}

const fn rule(letter: Letter, slots: &'static [DirectionSet]) -> PatternRule {
    PatternRule { letter, slots }
}

const UP_AND_RIGHT: DirectionSet = UPISH.intersect(UP_RIGHTISH);
const UP_AND_LEFT: DirectionSet = UPISH.intersect(LEFTISH);
const UP_RIGHT_DIAGONAL: DirectionSet = UPISH.intersect(RIGHTISH);
const DOWN_AND_RIGHT: DirectionSet = DOWNISH.intersect(DOWN_RIGHTISH);
const DOWN_LEFT_DIAGONAL: DirectionSet = DOWNISH.intersect(LEFTISH);
const DOWN_RIGHT_DIAGONAL: DirectionSet = DOWNISH.intersect(RIGHTISH);
const HORIZONTALISH: DirectionSet = LEFTISH.union(RIGHTISH);

/// Evaluated top to bottom; the first matching row wins. Several rows overlap
/// on diagonal inputs, so reordering changes which letter is reported.
pub static PATTERN_TABLE: [PatternRule; 13] = [
    rule(Letter::A, &[UP_AND_RIGHT, DOWN_AND_RIGHT]),
    rule(Letter::V, &[UP_AND_LEFT, DOWN_LEFT_DIAGONAL]),
    rule(Letter::V, &[DOWN_RIGHT_DIAGONAL, UP_RIGHT_DIAGONAL]),
    rule(Letter::C, &[DOWN_LEFTISH, DOWN_RIGHT_DIAGONAL]),
    rule(Letter::C, &[DOWN_LEFT_DIAGONAL, DOWN_RIGHTISH]),
    rule(Letter::L, &[DOWNISH, RIGHTISH]),
    rule(Letter::Z, &[RIGHTISH, DOWN_LEFTISH, RIGHTISH]),
    rule(Letter::S, &[HORIZONTALISH, DOWN_RIGHTISH, HORIZONTALISH]),
    rule(Letter::N, &[UPISH, DOWN_RIGHTISH.union(DOWNISH), UPISH]),
    rule(Letter::C, &[LEFTISH, DOWNISH, RIGHTISH]),
    rule(Letter::M, &[UPISH, DOWNISH, UPISH, DOWNISH]),
    rule(Letter::M, &[UPISH, DOWN_RIGHTISH, UPISH, DOWN_RIGHTISH]),
    rule(Letter::W, &[DOWNISH, UPISH, DOWNISH, UPISH]),
];

/// Index into [`PATTERN_TABLE`] of the first rule matching `directions`.
pub fn first_matching_rule(directions: &[Direction]) -> Option<usize> {
    PATTERN_TABLE
        .iter()
        .position(|rule| rule.matches(directions))
}

pub fn match_sequence(directions: &[Direction]) -> Option<Letter> {
    first_matching_rule(directions).map(|idx| PATTERN_TABLE[idx].letter)
}
