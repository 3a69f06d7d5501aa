// src/bank.rs

use crate::models::question::{Question, TraitDomain};

use TraitDomain::{
    Agreeableness, Conscientiousness, Extraversion, NegativeEmotionality, OpenMindedness,
};

/// Ordered, immutable inventory of questions plus the per-domain
/// description texts. Built once from a static table at startup and
/// only ever read after that.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

fn item(id: i64, text: &str, reverse_scored: bool, domain: TraitDomain) -> Question {
    Question {
        id,
        text: text.to_string(),
        reverse_scored,
        domain,
    }
}

impl QuestionBank {
    /// The 30-item Big Five inventory, in presentation order.
    pub fn big_five() -> Self {
        let questions = vec![
            item(1, "Tends to be quiet.", true, Extraversion),
            item(2, "Is compassionate, has a soft heart.", false, Agreeableness),
            item(3, "Tends to be disorganized.", true, Conscientiousness),
            item(4, "Worries a lot.", false, NegativeEmotionality),
            item(5, "Is fascinated by art, music, or literature.", false, OpenMindedness),
            item(6, "Is dominant, acts as a leader.", false, Extraversion),
            item(7, "Is sometimes rude to others.", true, Agreeableness),
            item(8, "Has difficulty getting started on tasks.", true, Conscientiousness),
            item(9, "Tends to feel depressed, blue.", false, NegativeEmotionality),
            item(10, "Has little interest in abstract ideas.", true, OpenMindedness),
            item(11, "Is full of energy.", false, Extraversion),
            item(12, "Assumes the best about people.", false, Agreeableness),
            item(13, "Is reliable, can always be counted on.", false, Conscientiousness),
            item(14, "Is emotionally stable, not easily upset.", true, NegativeEmotionality),
            item(15, "Is original, comes up with new ideas.", false, OpenMindedness),
            item(16, "Is outgoing, sociable.", false, Extraversion),
            item(17, "Can be cold and uncaring.", true, Agreeableness),
            item(18, "Keeps things neat and tidy.", false, Conscientiousness),
            item(19, "Is relaxed, handles stress well.", true, NegativeEmotionality),
            item(20, "Has few artistic interests.", true, OpenMindedness),
            item(21, "Prefers to have others take charge.", true, Extraversion),
            item(22, "Is respectful, treats others with respect.", false, Agreeableness),
            item(23, "Is persistent, works until the task is finished.", false, Conscientiousness),
            item(24, "Feels secure, comfortable with self.", true, NegativeEmotionality),
            item(25, "Is complex, a deep thinker.", false, OpenMindedness),
            item(26, "Is less active than other people.", true, Extraversion),
            item(27, "Tends to find fault with others.", true, Agreeableness),
            item(28, "Can be somewhat careless.", true, Conscientiousness),
            item(29, "Is temperamental, gets emotional easily.", false, NegativeEmotionality),
            item(30, "Has little creativity.", true, OpenMindedness),
        ];
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct domains in first-appearance order, so result ordering
    /// stays data-driven rather than hard-coded to five traits.
    pub fn domains(&self) -> Vec<TraitDomain> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.domain) {
                seen.push(q.domain);
            }
        }
        seen
    }

    pub fn description(domain: TraitDomain) -> &'static str {
        match domain {
            Extraversion => {
                "Extraversion represents your energy and enthusiasm in social situations."
            }
            Agreeableness => "Agreeableness reflects how you interact with and treat others.",
            Conscientiousness => {
                "Conscientiousness shows your organization and responsibility levels."
            }
            NegativeEmotionality => {
                "Negative Emotionality indicates your emotional sensitivity and stability."
            }
            OpenMindedness => "Open-Mindedness reflects your curiosity and creativity.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bank_has_thirty_items_with_unique_ordered_ids() {
        let bank = QuestionBank::big_five();
        assert_eq!(bank.len(), 30);

        let ids: HashSet<i64> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 30);

        for (i, q) in bank.questions().iter().enumerate() {
            assert_eq!(q.id, i as i64 + 1);
        }
    }

    #[test]
    fn domains_come_back_in_first_appearance_order() {
        let bank = QuestionBank::big_five();
        assert_eq!(
            bank.domains(),
            vec![
                Extraversion,
                Agreeableness,
                Conscientiousness,
                NegativeEmotionality,
                OpenMindedness,
            ]
        );
    }

    #[test]
    fn every_domain_has_six_items() {
        let bank = QuestionBank::big_five();
        for domain in bank.domains() {
            let count = bank
                .questions()
                .iter()
                .filter(|q| q.domain == domain)
                .count();
            assert_eq!(count, 6);
        }
    }
}
