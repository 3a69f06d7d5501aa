// src/scoring.rs

use std::collections::HashMap;

use crate::bank::QuestionBank;
use crate::config::{LIKERT_MAX, LIKERT_MIN};
use crate::models::question::{Question, TraitDomain};
use crate::models::report::TraitResult;

/// Inverts the Likert polarity of a reverse-scored item, so that a
/// higher transformed value always means "more of the trait".
/// With the 1..5 scale this is `6 - v`; 3 is its fixed point.
pub const fn reverse(value: u8) -> u8 {
    LIKERT_MIN + LIKERT_MAX - value
}

/// Computes one `TraitResult` per distinct domain in the question
/// list, in first-appearance order.
///
/// `answers` maps 0-based question index to the raw chosen value.
/// Reverse-scored items contribute `6 - v`; each domain's mean is
/// rounded to two decimals. A domain with no answered items reports
/// the sentinel average 0, which no real 1..5 mean can produce.
///
/// Pure function: same inputs, same output, no state touched.
pub fn score(questions: &[Question], answers: &HashMap<usize, u8>) -> Vec<TraitResult> {
    let mut order: Vec<TraitDomain> = Vec::new();
    let mut sums: HashMap<TraitDomain, (u32, u32)> = HashMap::new();

    for (index, question) in questions.iter().enumerate() {
        if !order.contains(&question.domain) {
            order.push(question.domain);
        }
        if let Some(&raw) = answers.get(&index) {
            let value = if question.reverse_scored {
                reverse(raw)
            } else {
                raw
            };
            let entry = sums.entry(question.domain).or_insert((0, 0));
            entry.0 += u32::from(value);
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|domain| {
            let average = match sums.get(&domain) {
                Some(&(sum, count)) if count > 0 => round2(f64::from(sum) / f64::from(count)),
                _ => 0.0,
            };
            TraitResult {
                domain,
                label: domain.label().to_string(),
                score: average,
                percent: round2(average * 20.0),
                description: QuestionBank::description(domain).to_string(),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(bank: &QuestionBank, value: u8) -> HashMap<usize, u8> {
        (0..bank.len()).map(|i| (i, value)).collect()
    }

    #[test]
    fn one_result_per_domain_in_first_appearance_order() {
        let bank = QuestionBank::big_five();
        let results = score(bank.questions(), &answer_all(&bank, 4));
        let domains: Vec<TraitDomain> = results.iter().map(|r| r.domain).collect();
        assert_eq!(domains, bank.domains());
    }

    #[test]
    fn neutral_answers_are_a_fixed_point_of_reversal() {
        // 6 - 3 = 3, so all-neutral input must average 3.00 everywhere
        // regardless of the reverse flags.
        let bank = QuestionBank::big_five();
        let results = score(bank.questions(), &answer_all(&bank, 3));
        assert_eq!(results.len(), 5);
        for result in results {
            assert_eq!(result.score, 3.0);
            assert_eq!(result.percent, 60.0);
        }
    }

    #[test]
    fn reverse_scored_items_contribute_the_inverted_value() {
        let bank = QuestionBank::big_five();
        // Item id=1 ("Tends to be quiet.", reversed) at index 0 and
        // item id=6 (non-reversed) at index 5 are both Extraversion.
        let answers: HashMap<usize, u8> = [(0, 1), (5, 5)].into_iter().collect();
        let results = score(bank.questions(), &answers);

        let extraversion = results
            .iter()
            .find(|r| r.domain == TraitDomain::Extraversion)
            .unwrap();
        // Reversed contribution is 6 - 1 = 5, so (5 + 5) / 2 = 5.00.
        assert_eq!(extraversion.score, 5.0);
        assert_eq!(extraversion.percent, 100.0);
    }

    #[test]
    fn unanswered_domains_report_the_sentinel_zero() {
        let bank = QuestionBank::big_five();
        let answers: HashMap<usize, u8> = [(0, 4)].into_iter().collect();
        let results = score(bank.questions(), &answers);

        for result in &results {
            if result.domain == TraitDomain::Extraversion {
                assert!(result.score >= 1.0);
            } else {
                assert_eq!(result.score, 0.0);
                assert_eq!(result.percent, 0.0);
            }
        }
    }

    #[test]
    fn empty_answer_set_yields_all_sentinels() {
        let bank = QuestionBank::big_five();
        let results = score(bank.questions(), &HashMap::new());
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn averages_are_rounded_to_two_decimals() {
        let bank = QuestionBank::big_five();
        // Two Agreeableness items (indexes 1 and 6): 4 and reversed 5 -> 1.
        // Mean of {4, 1} = 2.5; three items {4, 1, 5} -> 10/3 = 3.33.
        let answers: HashMap<usize, u8> = [(1, 4), (6, 5), (11, 5)].into_iter().collect();
        let results = score(bank.questions(), &answers);
        let agreeableness = results
            .iter()
            .find(|r| r.domain == TraitDomain::Agreeableness)
            .unwrap();
        assert_eq!(agreeableness.score, 3.33);
    }

    #[test]
    fn scoring_is_idempotent() {
        let bank = QuestionBank::big_five();
        let answers = answer_all(&bank, 2);
        let first = score(bank.questions(), &answers);
        let second = score(bank.questions(), &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn results_carry_labels_and_descriptions() {
        let bank = QuestionBank::big_five();
        let results = score(bank.questions(), &answer_all(&bank, 3));
        let negative = results
            .iter()
            .find(|r| r.domain == TraitDomain::NegativeEmotionality)
            .unwrap();
        assert_eq!(negative.label, "Negative Emotionality");
        assert!(negative.description.contains("emotional sensitivity"));
    }
}
