use crate::outcome::Outcome;
use crate::sign::HandSign;

pub fn shape_score(sign: HandSign) -> i64 {
    match sign {
        HandSign::Rock => 1,
        HandSign::Paper => 2,
        HandSign::Scissors => 3,
        HandSign::Unknown => 0,
    }
}

fn outcome_for_me(me: HandSign, them: HandSign) -> Outcome {
    match (me, them) {
        // Two unrecognized signs still compare equal.
        (HandSign::Unknown, HandSign::Unknown) => Outcome::Draw,
        (HandSign::Unknown, _) | (_, HandSign::Unknown) => Outcome::Unknown,
        _ if me == them => Outcome::Draw,
        _ if me.beats(them) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

pub fn outcome_score(opponent: HandSign, me: HandSign) -> i64 {
    outcome_for_me(me, opponent).score()
}

pub fn round_score(opponent: HandSign, me: HandSign) -> i64 {
    outcome_score(opponent, me) + shape_score(me)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNS: [HandSign; 3] = [HandSign::Rock, HandSign::Paper, HandSign::Scissors];

    #[test]
    fn shape_scores() {
        assert_eq!(shape_score(HandSign::Rock), 1);
        assert_eq!(shape_score(HandSign::Paper), 2);
        assert_eq!(shape_score(HandSign::Scissors), 3);
        assert_eq!(shape_score(HandSign::Unknown), 0);
    }

    #[test]
    fn outcome_scores() {
        assert_eq!(outcome_score(HandSign::Rock, HandSign::Paper), 6);
        assert_eq!(outcome_score(HandSign::Paper, HandSign::Scissors), 6);
        assert_eq!(outcome_score(HandSign::Scissors, HandSign::Rock), 6);
        assert_eq!(outcome_score(HandSign::Paper, HandSign::Rock), 0);
        assert_eq!(outcome_score(HandSign::Rock, HandSign::Rock), 3);
    }

    #[test]
    fn outcome_score_is_antisymmetric() {
        for a in SIGNS {
            assert_eq!(outcome_score(a, a), 3);
            for b in SIGNS {
                if outcome_score(a, b) == 6 {
                    assert_eq!(outcome_score(b, a), 0);
                }
                if a != b {
                    assert_eq!(outcome_score(a, b) + outcome_score(b, a), 6);
                }
            }
        }
    }

    #[test]
    fn valid_rounds_score_between_one_and_nine() {
        for a in SIGNS {
            for b in SIGNS {
                assert!([1, 2, 3].contains(&shape_score(b)));
                assert!([0, 3, 6].contains(&outcome_score(a, b)));
                assert!((1..=9).contains(&round_score(a, b)));
            }
        }
    }

    #[test]
    fn unknown_signs() {
        assert_eq!(round_score(HandSign::Unknown, HandSign::Paper), 2);
        assert_eq!(round_score(HandSign::Rock, HandSign::Unknown), 0);
        assert_eq!(round_score(HandSign::Unknown, HandSign::Unknown), 3);
    }
}
