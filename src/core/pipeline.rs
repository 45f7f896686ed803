//! The rewrite pipeline: a fixed, ordered sequence of stages.
//!
//! Later stages assume the normal forms produced by earlier ones
//! (idioms see "you are", not "you're"; the bare pronoun rule sees only
//! the "you" no earlier rule claimed), so the order is part of the
//! contract and cannot be configured.

use regex::Captures;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::core::case::{preserve_case, CaseTemplate};
use crate::core::lexicon::{
    ARCHAIC_VERBS, CONTRACTIONS, FLAVOR_WORDS, POSSESSIVES, PREPOSITIONS, THIRD_PERSON_SUBJECTS,
    VERB_IDIOMS,
};
use crate::core::rule::{Replacement, RewriteRule};
use crate::core::verb::conjugate_third_person;

/// Identifies a stage; variants are listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Contractions,
    PrepositionalObjects,
    Possessives,
    VerbIdioms,
    Pronouns,
    ArchaicVerbs,
    FlavorWords,
    EthHeuristic,
}

impl StageId {
    pub const ALL: [StageId; 8] = [
        Self::Contractions,
        Self::PrepositionalObjects,
        Self::Possessives,
        Self::VerbIdioms,
        Self::Pronouns,
        Self::ArchaicVerbs,
        Self::FlavorWords,
        Self::EthHeuristic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Contractions => "contractions",
            Self::PrepositionalObjects => "prepositional_objects",
            Self::Possessives => "possessives",
            Self::VerbIdioms => "verb_idioms",
            Self::Pronouns => "pronouns",
            Self::ArchaicVerbs => "archaic_verbs",
            Self::FlavorWords => "flavor_words",
            Self::EthHeuristic => "eth_heuristic",
        }
    }
}

/// One named rewrite step: its rules run in order over the whole text.
#[derive(Debug)]
pub struct Stage {
    id: StageId,
    rules: Vec<RewriteRule>,
}

impl Stage {
    pub fn id(&self) -> StageId {
        self.id
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&out) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(s) => s,
            };
            out = rewritten;
        }
        out
    }
}

/// Output of a single stage, as recorded by [`Pipeline::trace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTrace {
    pub stage: StageId,
    pub output: String,
}

/// The ordered stage sequence.
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

static STANDARD: LazyLock<Pipeline> = LazyLock::new(Pipeline::build);

impl Pipeline {
    /// The process-wide pipeline, compiled on first use.
    pub fn standard() -> &'static Pipeline {
        &STANDARD
    }

    fn build() -> Pipeline {
        let stages = StageId::ALL
            .iter()
            .map(|&id| Stage {
                id,
                rules: rules_for(id),
            })
            .collect();
        Pipeline { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, id: StageId) -> &Stage {
        // `build` creates exactly one stage per id, in `StageId::ALL` order.
        &self.stages[id as usize]
    }

    /// Run every stage in order.
    pub fn run(&self, text: &str) -> String {
        let mut out = text.to_string();
        for stage in &self.stages {
            let next = stage.apply(&out);
            if next != out {
                tracing::trace!(stage = stage.id.name(), output = %next, "stage rewrote text");
            }
            out = next;
        }
        out
    }

    /// Run every stage, keeping each intermediate result.
    pub fn trace(&self, text: &str) -> Vec<StageTrace> {
        let mut current = text.to_string();
        let mut traces = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            current = stage.apply(&current);
            traces.push(StageTrace {
                stage: stage.id,
                output: current.clone(),
            });
        }
        traces
    }
}

fn rules_for(id: StageId) -> Vec<RewriteRule> {
    match id {
        StageId::Contractions => literal_words(CONTRACTIONS),
        StageId::PrepositionalObjects => vec![prepositional_object_rule()],
        StageId::Possessives => possessive_rules(),
        StageId::VerbIdioms => VERB_IDIOMS
            .iter()
            .map(|&(phrase, rendered)| idiom_rule(phrase, rendered))
            .collect(),
        StageId::Pronouns => vec![RewriteRule::word("you", Replacement::Cased("thou"))],
        StageId::ArchaicVerbs => literal_words(ARCHAIC_VERBS),
        StageId::FlavorWords => literal_words(FLAVOR_WORDS),
        StageId::EthHeuristic => vec![eth_rule()],
    }
}

/// Lexical swaps are written as listed, whatever the casing of the match.
fn literal_words(table: &[(&str, &'static str)]) -> Vec<RewriteRule> {
    table
        .iter()
        .map(|&(word, replacement)| RewriteRule::word(word, Replacement::Literal(replacement)))
        .collect()
}

/// `<preposition> you` → `<preposition> thee`. The preposition is kept as
/// typed; "thee" takes the casing of the matched "you".
fn prepositional_object_rule() -> RewriteRule {
    let alternation = PREPOSITIONS.join("|");
    RewriteRule::computed(
        &format!(r"(?i)\b({alternation}) (you)\b"),
        |caps: &Captures<'_>| format!("{} {}", &caps[1], preserve_case(&caps[2], "thee")),
    )
}

/// "thine" before a vowel or "h", then the plain possessive forms.
fn possessive_rules() -> Vec<RewriteRule> {
    let mut rules = vec![RewriteRule::computed(
        r"(?i)\byour\s+([aeiouh])",
        |caps: &Captures<'_>| format!("thine {}", &caps[1]),
    )];
    rules.extend(literal_words(POSSESSIVES));
    rules
}

/// A two-word second-person phrase rendered as its archaic pair.
///
/// An all-uppercase match is rendered all-uppercase. Otherwise "thou"
/// inherits the casing of the matched "you" and the verb is lowercase.
fn idiom_rule(phrase: &'static str, rendered: &'static str) -> RewriteRule {
    let words: Vec<&str> = phrase.split(' ').collect();
    let source = format!(
        r"(?i)\b({}) ({})\b",
        regex::escape(words[0]),
        regex::escape(words[1])
    );
    RewriteRule::computed(&source, move |caps: &Captures<'_>| {
        let whole = CaseTemplate::of(&caps[0]);
        phrase
            .split(' ')
            .zip(rendered.split(' '))
            .enumerate()
            .map(|(i, (word, out))| {
                if whole == CaseTemplate::Upper {
                    CaseTemplate::Upper.apply(out)
                } else if word == "you" {
                    preserve_case(&caps[i + 1], out)
                } else {
                    out.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// `(he|she|it) <verb>` → `<subject> <verb>eth`, via the conjugation
/// heuristic. Subject and verb are rejoined with a single space.
fn eth_rule() -> RewriteRule {
    let subjects = THIRD_PERSON_SUBJECTS.join("|");
    RewriteRule::computed(
        &format!(r"(?i)\b({subjects})\s+([a-z]{{3,}})\b"),
        |caps: &Captures<'_>| {
            let subject = &caps[1];
            let verb = &caps[2];
            match conjugate_third_person(verb) {
                Some(conjugated) => format!("{subject} {conjugated}"),
                None => format!("{subject} {verb}"),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(id: StageId) -> &'static Stage {
        Pipeline::standard().stage(id)
    }

    #[test]
    fn stages_follow_declared_order() {
        let ids: Vec<StageId> = Pipeline::standard().stages().iter().map(|s| s.id()).collect();
        assert_eq!(ids, StageId::ALL.to_vec());
        for id in StageId::ALL {
            assert_eq!(stage(id).id(), id);
        }
    }

    #[test]
    fn every_rule_compiles() {
        // A fresh build compiles every table-driven pattern again.
        let pipeline = Pipeline::build();
        let rules: usize = pipeline.stages().iter().map(|s| s.rules().len()).sum();
        let expected = CONTRACTIONS.len()
            + 1
            + (POSSESSIVES.len() + 1)
            + VERB_IDIOMS.len()
            + 1
            + ARCHAIC_VERBS.len()
            + FLAVOR_WORDS.len()
            + 1;
        assert_eq!(rules, expected);
    }

    #[test]
    fn stage_rule_counts() {
        assert_eq!(stage(StageId::Contractions).rules().len(), CONTRACTIONS.len());
        assert_eq!(stage(StageId::Possessives).rules().len(), POSSESSIVES.len() + 1);
        assert_eq!(stage(StageId::VerbIdioms).rules().len(), VERB_IDIOMS.len());
        let prepositions = &stage(StageId::PrepositionalObjects).rules()[0];
        assert!(prepositions.source().contains("|among)"));
    }

    #[test]
    fn contractions_expand() {
        let s = stage(StageId::Contractions);
        assert_eq!(s.apply("I'm sure you'll see"), "I am sure you will see");
        assert_eq!(s.apply("DON'T, You've, can't"), "do not, you have, cannot");
        assert_eq!(s.apply("i've, i'm"), "I have, I am");
    }

    #[test]
    fn prepositional_objects() {
        let s = stage(StageId::PrepositionalObjects);
        assert_eq!(s.apply("I gave it to you"), "I gave it to thee");
        assert_eq!(s.apply("For you, with You"), "For thee, with Thee");
        assert_eq!(s.apply("TO YOU"), "TO THEE");
        // "about" contains "out" but only whole prepositions match.
        assert_eq!(s.apply("about you"), "about thee");
        assert_eq!(s.apply("you to"), "you to");
    }

    #[test]
    fn possessive_elision_before_vowel_or_h() {
        let s = stage(StageId::Possessives);
        assert_eq!(s.apply("your apple"), "thine apple");
        assert_eq!(s.apply("your honour"), "thine honour");
        assert_eq!(s.apply("your book"), "thy book");
        assert_eq!(s.apply("Your   egg"), "thine egg");
        assert_eq!(s.apply("YOUR horse"), "thine horse");
    }

    #[test]
    fn possessive_plain_forms() {
        let s = stage(StageId::Possessives);
        assert_eq!(s.apply("it is yours"), "it is thine");
        assert_eq!(s.apply("know yourself"), "know thyself");
        assert_eq!(s.apply("Your book"), "thy book");
        assert_eq!(s.apply("YOURSELF"), "thyself");
    }

    #[test]
    fn idioms_carry_pronoun_case() {
        let s = stage(StageId::VerbIdioms);
        assert_eq!(s.apply("You are happy"), "Thou art happy");
        assert_eq!(s.apply("Are you happy?"), "art thou happy?");
        assert_eq!(s.apply("YOU ARE HAPPY"), "THOU ART HAPPY");
        assert_eq!(s.apply("Do You know"), "dost Thou know");
    }

    #[test]
    fn idioms_apply_in_table_order() {
        let s = stage(StageId::VerbIdioms);
        // "do you" is listed before "you do".
        assert_eq!(s.apply("do you do"), "dost thou do");
        assert_eq!(s.apply("must you go"), "must thou go");
        assert_eq!(s.apply("you have won"), "thou hast won");
    }

    #[test]
    fn bare_pronoun() {
        let s = stage(StageId::Pronouns);
        assert_eq!(s.apply("you and You and YOU"), "thou and Thou and THOU");
        assert_eq!(s.apply("young yours"), "young yours");
    }

    #[test]
    fn archaic_verbs() {
        let s = stage(StageId::ArchaicVerbs);
        assert_eq!(s.apply("She has it, he does"), "She hath it, he doth");
        assert_eq!(s.apply("HAS Does"), "hath doth");
        assert_eq!(s.apply("doeth"), "doth");
    }

    #[test]
    fn flavor_words() {
        let s = stage(StageId::FlavorWords);
        assert_eq!(s.apply("Hello friend"), "hail good sir");
        assert_eq!(s.apply("VERY"), "right");
        assert_eq!(s.apply("really very"), "verily right");
        assert_eq!(s.apply("Goodbye"), "fare thee well");
        assert_eq!(s.apply("hi, history"), "hail, history");
    }

    #[test]
    fn eth_heuristic() {
        let s = stage(StageId::EthHeuristic);
        assert_eq!(s.apply("she runs fast"), "she runeth fast");
        assert_eq!(s.apply("he is tall"), "he is tall");
        assert_eq!(s.apply("it goes"), "it goeth");
        assert_eq!(s.apply("He  walks"), "He walketh");
        assert_eq!(s.apply("she was here"), "she was here");
        assert_eq!(s.apply("he runneth"), "he runneth");
    }

    #[test]
    fn eth_heuristic_needs_whole_ascii_word() {
        let s = stage(StageId::EthHeuristic);
        // Too short, and a non-ASCII tail keeps the word from matching.
        assert_eq!(s.apply("he go"), "he go");
        assert_eq!(s.apply("she cafés"), "she cafés");
        assert_eq!(s.apply("the cat sits"), "the cat sits");
    }

    #[test]
    fn trace_records_every_stage() {
        let traces = Pipeline::standard().trace("Are you well, friend?");
        assert_eq!(traces.len(), StageId::ALL.len());
        assert_eq!(traces[StageId::VerbIdioms as usize].output, "art thou well, friend?");
        assert_eq!(traces.last().unwrap().output, "art thou well, good sir?");
    }

    #[test]
    fn run_matches_last_trace() {
        let text = "Hello, you! Are you sure he knows your uncle?";
        let traces = Pipeline::standard().trace(text);
        assert_eq!(Pipeline::standard().run(text), traces.last().unwrap().output);
    }

    #[test]
    fn empty_input_is_noop() {
        assert_eq!(Pipeline::standard().run(""), "");
        for s in Pipeline::standard().stages() {
            assert_eq!(s.apply(""), "");
        }
    }

    #[test]
    fn stage_names_are_snake_case() {
        for id in StageId::ALL {
            assert_eq!(id.name(), id.name().to_lowercase());
        }
    }
}
