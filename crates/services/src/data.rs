//! Static catalogues shipped with the app.

use mockview_core::model::{
    Difficulty, Employer, JobCategory, JobId, JobPosting, Modality, Problem, ProblemId,
};

pub static EMPLOYERS: &[Employer] = &[
    Employer {
        slug: "google",
        name: "Google",
        default_difficulty: Difficulty::Hard,
        default_duration_minutes: 45,
        default_modality: Modality::Video,
    },
    Employer {
        slug: "amazon",
        name: "Amazon",
        default_difficulty: Difficulty::Medium,
        default_duration_minutes: 60,
        default_modality: Modality::Video,
    },
    Employer {
        slug: "meta",
        name: "Meta",
        default_difficulty: Difficulty::Medium,
        default_duration_minutes: 45,
        default_modality: Modality::Audio,
    },
    Employer {
        slug: "stripe",
        name: "Stripe",
        default_difficulty: Difficulty::Medium,
        default_duration_minutes: 30,
        default_modality: Modality::Chat,
    },
    Employer {
        slug: "startup",
        name: "Early-stage startup",
        default_difficulty: Difficulty::Easy,
        default_duration_minutes: 30,
        default_modality: Modality::Chat,
    },
];

#[must_use]
pub fn employer_by_slug(slug: &str) -> Option<&'static Employer> {
    EMPLOYERS.iter().find(|employer| employer.slug == slug)
}

macro_rules! problem {
    ($n:literal, $title:literal, $difficulty:ident, [$($tag:literal),*], $content:literal) => {
        Problem {
            id: ProblemId::new($n),
            number: $n,
            title: $title,
            difficulty: Difficulty::$difficulty,
            tags: &[$($tag),*],
            content: $content,
        }
    };
}

pub static PROBLEMS: &[Problem] = &[
    problem!(1, "Two Sum", Easy, ["array", "hash-table"],
        "Given an array of integers `nums` and an integer `target`, return the indices of the two numbers that add up to `target`.\n\n**Example**\n\n```\nnums = [2, 7, 11, 15], target = 9\n=> [0, 1]\n```"),
    problem!(2, "Add Two Numbers", Medium, ["linked-list", "math"],
        "Two non-empty linked lists store digits in reverse order. Return their sum as a linked list."),
    problem!(3, "Longest Substring Without Repeating Characters", Medium, ["string", "sliding-window"],
        "Find the length of the longest substring of `s` without repeating characters."),
    problem!(4, "Median of Two Sorted Arrays", Hard, ["array", "binary-search"],
        "Return the median of two sorted arrays in `O(log(m + n))` time."),
    problem!(5, "Longest Palindromic Substring", Medium, ["string", "dynamic-programming"],
        "Return the longest palindromic substring of `s`."),
    problem!(6, "Valid Parentheses", Easy, ["string", "stack"],
        "Decide whether a string of brackets `()[]{}` is balanced."),
    problem!(7, "Merge Two Sorted Lists", Easy, ["linked-list"],
        "Merge two sorted linked lists and return the head of the merged list."),
    problem!(8, "Container With Most Water", Medium, ["array", "two-pointers"],
        "Pick two lines that, together with the x-axis, hold the most water."),
    problem!(9, "3Sum", Medium, ["array", "two-pointers"],
        "Return every unique triplet in `nums` that sums to zero."),
    problem!(10, "Regular Expression Matching", Hard, ["string", "dynamic-programming"],
        "Implement matching with support for `.` and `*`."),
    problem!(11, "Merge Intervals", Medium, ["array", "sorting"],
        "Merge all overlapping intervals and return the non-overlapping result."),
    problem!(12, "Climbing Stairs", Easy, ["dynamic-programming", "math"],
        "Count the distinct ways to climb `n` stairs taking one or two steps at a time."),
    problem!(13, "Best Time to Buy and Sell Stock", Easy, ["array", "greedy"],
        "Find the maximum profit from one buy and one later sell."),
    problem!(14, "Number of Islands", Medium, ["graph", "breadth-first-search"],
        "Count the islands in a grid of `'1'` (land) and `'0'` (water)."),
    problem!(15, "Course Schedule", Medium, ["graph", "topological-sort"],
        "Decide whether all courses can be finished given prerequisite pairs."),
    problem!(16, "LRU Cache", Medium, ["design", "hash-table", "linked-list"],
        "Design a cache with `get` and `put` in `O(1)` that evicts the least recently used key."),
    problem!(17, "Trapping Rain Water", Hard, ["array", "two-pointers", "stack"],
        "Compute how much water an elevation map traps after raining."),
    problem!(18, "Binary Tree Level Order Traversal", Medium, ["tree", "breadth-first-search"],
        "Return the values of a binary tree level by level."),
    problem!(19, "Maximum Depth of Binary Tree", Easy, ["tree", "depth-first-search"],
        "Return the number of nodes on the longest root-to-leaf path."),
    problem!(20, "Word Ladder", Hard, ["graph", "breadth-first-search", "string"],
        "Find the length of the shortest transformation sequence from `beginWord` to `endWord`."),
    problem!(21, "Kth Largest Element in an Array", Medium, ["array", "heap"],
        "Return the `k`th largest element without fully sorting."),
    problem!(22, "Invert Binary Tree", Easy, ["tree", "depth-first-search"],
        "Mirror a binary tree and return its root."),
    problem!(23, "Merge k Sorted Lists", Hard, ["linked-list", "heap"],
        "Merge `k` sorted linked lists into one sorted list."),
    problem!(24, "Coin Change", Medium, ["dynamic-programming"],
        "Return the fewest coins needed to make up `amount`, or `-1`."),
    problem!(25, "Serialize and Deserialize Binary Tree", Hard, ["tree", "design"],
        "Design an encoding of a binary tree to a string and back."),
];

#[must_use]
pub fn problem_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = PROBLEMS
        .iter()
        .flat_map(|problem| problem.tags.iter().copied())
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

macro_rules! job {
    ($id:literal, $title:literal, $company:literal, $location:literal, $category:ident, [$($tag:literal),*]) => {
        JobPosting {
            id: JobId::new($id),
            title: $title,
            company: $company,
            location: $location,
            category: JobCategory::$category,
            tags: &[$($tag),*],
        }
    };
}

pub static JOBS: &[JobPosting] = &[
    job!(1, "Senior Backend Engineer", "Northwind", "Remote", Engineering, ["rust", "postgres"]),
    job!(2, "Frontend Engineer", "Contoso", "Berlin", Engineering, ["typescript", "react"]),
    job!(3, "Data Scientist", "Fabrikam", "London", Data, ["python", "statistics"]),
    job!(4, "Product Designer", "Tailspin", "Remote", Design, ["figma", "research"]),
    job!(5, "Staff Platform Engineer", "Northwind", "New York", Engineering, ["kubernetes", "go"]),
    job!(6, "Analytics Engineer", "Litware", "Remote", Data, ["sql", "dbt"]),
    job!(7, "Product Manager, Growth", "Contoso", "Berlin", Product, ["experimentation"]),
    job!(8, "Machine Learning Engineer", "Fabrikam", "London", Data, ["python", "pytorch"]),
    job!(9, "Mobile Engineer", "Tailspin", "Toronto", Engineering, ["swift", "kotlin"]),
    job!(10, "UX Researcher", "Litware", "New York", Design, ["research", "interviews"]),
    job!(11, "Site Reliability Engineer", "Adventure Works", "Remote", Engineering, ["linux", "observability"]),
    job!(12, "Technical Product Manager", "Northwind", "Toronto", Product, ["apis", "roadmaps"]),
];

#[must_use]
pub fn job_locations() -> Vec<&'static str> {
    let mut locations: Vec<&'static str> = JOBS.iter().map(|job| job.location).collect();
    locations.sort_unstable();
    locations.dedup();
    locations
}
