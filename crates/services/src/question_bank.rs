use std::collections::VecDeque;

use rand::rng;
use rand::seq::SliceRandom;

use mockview_core::model::{Difficulty, Employer};

const OPENERS: &[&str] = &[
    "Tell me about yourself and what drew you to this role.",
    "Walk me through a project you are proud of.",
];

const EASY: &[&str] = &[
    "How would you reverse a string in place?",
    "What is the difference between a stack and a queue?",
    "How do you find duplicates in an array?",
    "Describe a time you had to learn something quickly.",
];

const MEDIUM: &[&str] = &[
    "How would you detect a cycle in a linked list?",
    "Design a rate limiter for a public API.",
    "Explain how a hash map handles collisions.",
    "Tell me about a disagreement with a teammate and how you resolved it.",
    "How would you merge overlapping intervals?",
];

const HARD: &[&str] = &[
    "Design a distributed key-value store with tunable consistency.",
    "How would you find the median of a data stream?",
    "Walk me through designing a news feed for millions of users.",
    "Describe the hardest production incident you debugged.",
    "How would you implement an LRU cache with O(1) operations?",
];

const CLOSER: &str = "Thanks. Do you have any questions for me?";

/// Interview questions for one session, consumed front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionQueue {
    remaining: VecDeque<String>,
}

impl QuestionQueue {
    #[must_use]
    pub fn next_question(&mut self) -> Option<String> {
        self.remaining.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Mocked question catalogue.
#[derive(Clone, Copy, Debug)]
pub struct QuestionBank {
    shuffle: bool,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Questions for an interview: an opener, the level's questions, a closer.
    #[must_use]
    pub fn queue_for(&self, employer: &Employer, difficulty: Difficulty) -> QuestionQueue {
        let opener = match difficulty {
            Difficulty::Easy => OPENERS[0],
            Difficulty::Medium | Difficulty::Hard => OPENERS[1],
        };
        let mut body: Vec<&str> = match difficulty {
            Difficulty::Easy => EASY.to_vec(),
            Difficulty::Medium => MEDIUM.to_vec(),
            Difficulty::Hard => HARD.to_vec(),
        };
        if self.shuffle {
            let mut rng = rng();
            body.as_mut_slice().shuffle(&mut rng);
        }

        let mut remaining = VecDeque::with_capacity(body.len() + 2);
        remaining.push_back(format!("Welcome to your {} interview. {opener}", employer.name));
        remaining.extend(body.into_iter().map(str::to_string));
        remaining.push_back(CLOSER.to_string());
        QuestionQueue { remaining }
    }
}
