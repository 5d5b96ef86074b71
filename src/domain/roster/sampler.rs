//! Local mock-participant synthesis.
//!
//! Answers are sampled independently per question from the question's type;
//! no model is involved. The RNG is a parameter so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::event::{Participant, Question, QuestionType};
use crate::domain::foundation::BatchStamp;

/// Display names handed out in order; reused with a numeric suffix once exhausted.
pub const NAME_POOL: [&str; 20] = [
    "Alex Rivera",
    "Jordan Lee",
    "Taylor Smith",
    "Morgan Chen",
    "Casey Kim",
    "Riley Patel",
    "Jamie Wilson",
    "Quinn Davis",
    "Avery Johnson",
    "Peyton Brown",
    "Sam Garcia",
    "Pat Martinez",
    "Drew Robinson",
    "Skyler White",
    "Reese Clark",
    "Cameron Lewis",
    "Dakota Hall",
    "Eden Scott",
    "Finley Young",
    "Gray Adams",
];

/// Theme-neutral personality statements used for open-text answers.
pub const GENERIC_TEXT_ANSWERS: [&str; 8] = [
    "I trust my instincts and prefer to act immediately rather than over-plan.",
    "I analyze the situation logically and need to understand the mechanics before moving.",
    "I focus on protecting the team and ensuring everyone stays together.",
    "I am ambitious and willing to take high risks to achieve the ultimate goal.",
    "I prefer diplomacy and negotiation to resolve conflicts.",
    "I am independent and often prefer to work on my own tasks.",
    "I value tradition, structure, and following the established code.",
    "I am curious and always looking for creative, unconventional solutions.",
];

/// Id prefix for synthesized participants.
pub const PARTICIPANT_ID_PREFIX: &str = "p";

/// Name for the `index`-th participant of a batch.
pub fn participant_name(index: usize) -> String {
    let base = NAME_POOL[index % NAME_POOL.len()];
    if index >= NAME_POOL.len() {
        format!("{} {}", base, index)
    } else {
        base.to_string()
    }
}

/// Samples one answer for `question`.
pub fn sample_answer<R: Rng + ?Sized>(rng: &mut R, question: &Question) -> String {
    match question.question_type {
        QuestionType::Scale => rng.gen_range(1..=10).to_string(),
        QuestionType::Boolean => {
            let answer = if rng.gen_bool(0.5) { "Yes" } else { "No" };
            answer.to_string()
        }
        QuestionType::Choice | QuestionType::Text => {
            let pick = match question.choice_options() {
                Some(options) => options.choose(rng).map(String::as_str),
                None => GENERIC_TEXT_ANSWERS.choose(rng).copied(),
            };
            pick.unwrap_or_default().to_string()
        }
    }
}

/// Builds `count` participants answering every question in `questions`.
pub fn synthesize_participants<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    questions: &[Question],
    stamp: BatchStamp,
) -> Vec<Participant> {
    (0..count)
        .map(|index| {
            let answers = questions
                .iter()
                .map(|q| (q.id.clone(), sample_answer(rng, q)))
                .collect();
            Participant {
                id: stamp.item_id(PARTICIPANT_ID_PREFIX, index),
                name: participant_name(index),
                answers,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashSet};

    fn mixed_questions() -> Vec<Question> {
        vec![
            Question::new("q-0", "Energy level?", QuestionType::Scale),
            Question::new("q-1", "Remote?", QuestionType::Boolean),
            Question::new("q-2", "Role?", QuestionType::Choice).with_options(["Hacker", "Designer", "Pitcher"]),
            Question::new("q-3", "Describe yourself", QuestionType::Text),
            Question::new("q-4", "Pick one", QuestionType::Choice),
        ]
    }

    #[test]
    fn names_cycle_with_suffix_after_pool() {
        assert_eq!(participant_name(0), "Alex Rivera");
        assert_eq!(participant_name(19), "Gray Adams");
        assert_eq!(participant_name(20), "Alex Rivera 20");
        assert_eq!(participant_name(41), "Jordan Lee 41");
    }

    #[test]
    fn choice_without_options_falls_back_to_generic_text() {
        let mut rng = StdRng::seed_from_u64(7);
        let question = Question::new("q", "Pick", QuestionType::Choice);
        for _ in 0..20 {
            let answer = sample_answer(&mut rng, &question);
            assert!(GENERIC_TEXT_ANSWERS.contains(&answer.as_str()));
        }
    }

    #[test]
    fn empty_question_list_yields_participants_without_answers() {
        let mut rng = StdRng::seed_from_u64(1);
        let people = synthesize_participants(&mut rng, 3, &[], BatchStamp::from_millis(5));
        assert_eq!(people.len(), 3);
        assert!(people.iter().all(|p| p.answers.is_empty()));
        assert_eq!(people[2].id, "p-2-5");
    }

    #[test]
    fn two_batches_never_share_ids() {
        let mut rng = StdRng::seed_from_u64(3);
        let questions = mixed_questions();
        let mut all = synthesize_participants(&mut rng, 12, &questions, BatchStamp::next());
        all.extend(synthesize_participants(&mut rng, 12, &questions, BatchStamp::next()));
        let ids: HashSet<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 24);
    }

    proptest! {
        #[test]
        fn every_participant_answers_exactly_the_questions(count in 1usize..60, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = mixed_questions();
            let people = synthesize_participants(&mut rng, count, &questions, BatchStamp::from_millis(1));

            prop_assert_eq!(people.len(), count);
            let expected: BTreeSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            for person in &people {
                let keys: BTreeSet<&str> = person.answers.keys().map(String::as_str).collect();
                prop_assert_eq!(&keys, &expected);
            }
        }

        #[test]
        fn scale_answers_are_integers_from_one_to_ten(seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = Question::new("s", "Scale", QuestionType::Scale);
            let value: i64 = sample_answer(&mut rng, &question).parse().unwrap();
            prop_assert!((1..=10).contains(&value));
        }

        #[test]
        fn boolean_answers_are_yes_or_no(seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = Question::new("b", "Bool", QuestionType::Boolean);
            let answer = sample_answer(&mut rng, &question);
            prop_assert!(answer == "Yes" || answer == "No");
        }

        #[test]
        fn choice_answers_come_from_declared_options(
            options in proptest::collection::vec("[a-z]{1,8}", 1..6),
            seed: u64,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = Question::new("c", "Choice", QuestionType::Choice).with_options(options.clone());
            let answer = sample_answer(&mut rng, &question);
            prop_assert!(options.contains(&answer));
        }
    }
}
