//! Structural segmentation of a job description into role, must-have,
//! good-to-have and qualification sections.
//!
//! Every field is an ordered list of rules. The role title takes the first
//! rule that matches; the text fields concatenate every body captured by
//! every rule, in rule order and then document order.

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_ROLE: &str = "Unknown";
pub const MAX_ROLE_CHARS: usize = 255;
pub const MAX_SECTION_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    pub role_title: String,
    pub must_have: String,
    pub good_to_have: String,
    pub qualifications: String,
}

/// A section header followed by a body that runs until the first terminator
/// phrase or the end of the text.
struct SectionRule {
    /// Group 1 holds the optional separator after the header keyword
    header: Regex,
    terminators: &'static [&'static str],
}

impl SectionRule {
    fn new(keywords: &str, terminators: &'static [&'static str]) -> Result<Self> {
        Ok(Self {
            header: Regex::new(&format!(r"(?:{})([:\-]?\s*)", keywords))?,
            terminators,
        })
    }

    /// All non-overlapping bodies, left to right
    fn capture_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut bodies = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.header.captures_at(text, pos) else {
                break;
            };
            let (Some(whole), Some(separator)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            match self.body_start(text, separator.start(), separator.end()) {
                Some(start) => {
                    let end = self.body_end(text, start);
                    bodies.push(&text[start..end]);
                    pos = end;
                }
                None => pos = next_char_boundary(text, whole.start()),
            }
        }

        bodies
    }

    /// The body must hold at least one character. At the very end of the
    /// text the last separator character is handed to the body instead.
    fn body_start(&self, text: &str, separator_start: usize, separator_end: usize) -> Option<usize> {
        if separator_end < text.len() {
            return Some(separator_end);
        }
        text[separator_start..separator_end]
            .char_indices()
            .next_back()
            .map(|(offset, _)| separator_start + offset)
    }

    /// Smallest end that leaves a non-empty body followed by a terminator
    fn body_end(&self, text: &str, start: usize) -> usize {
        text[start..]
            .char_indices()
            .skip(1)
            .map(|(offset, _)| start + offset)
            .find(|&i| self.terminates_at(text, i))
            .unwrap_or(text.len())
    }

    fn terminates_at(&self, text: &str, i: usize) -> bool {
        let rest = &text[i..];
        // end of text also matches just before a single trailing newline
        rest == "\n" || self.terminators.iter().any(|t| rest.starts_with(t))
    }
}

pub struct JdParser {
    role_patterns: Vec<Regex>,
    must_have: Vec<SectionRule>,
    good_to_have: Vec<SectionRule>,
    qualifications: Vec<SectionRule>,
}

const MUST_HAVE_END: &[&str] = &["good to have", "preferred", "qualifications"];
const GOOD_TO_HAVE_END: &[&str] = &["qualifications"];
const QUALIFICATIONS_END: &[&str] = &["experience"];

impl JdParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            role_patterns: vec![
                Regex::new(r"(?im)(?:job title|role|position|title)[:\-]?\s*(.+?)(?:\n|$)")?,
                Regex::new(r"(?im)(?:looking for|hiring)[:\-]?\s*(.+?)(?:\n|$)")?,
            ],
            must_have: vec![
                SectionRule::new("must have|required|essential", MUST_HAVE_END)?,
                SectionRule::new("requirements", MUST_HAVE_END)?,
            ],
            good_to_have: vec![
                SectionRule::new("good to have|preferred|nice to have|plus", GOOD_TO_HAVE_END)?,
                SectionRule::new("bonus", GOOD_TO_HAVE_END)?,
            ],
            qualifications: vec![
                SectionRule::new("qualification|degree|education", QUALIFICATIONS_END)?,
                SectionRule::new("bachelor|master|phd|degree", QUALIFICATIONS_END)?,
            ],
        })
    }

    pub fn parse(&self, text: &str) -> ParsedJobDescription {
        let text = text.to_lowercase();

        ParsedJobDescription {
            role_title: self.role_title(&text),
            must_have: join_sections(&self.must_have, &text),
            good_to_have: join_sections(&self.good_to_have, &text),
            qualifications: join_sections(&self.qualifications, &text),
        }
    }

    fn role_title(&self, text: &str) -> String {
        let role = self
            .role_patterns
            .iter()
            .find_map(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .unwrap_or("");

        if role.is_empty() {
            UNKNOWN_ROLE.to_string()
        } else {
            truncate_chars(role, MAX_ROLE_CHARS)
        }
    }
}

fn join_sections(rules: &[SectionRule], text: &str) -> String {
    let bodies: Vec<&str> = rules.iter().flat_map(|rule| rule.capture_all(text)).collect();
    truncate_chars(bodies.join(" ").trim(), MAX_SECTION_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn next_char_boundary(text: &str, i: usize) -> usize {
    text[i..].chars().next().map_or(text.len() + 1, |c| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> JdParser {
        JdParser::new().unwrap()
    }

    #[test]
    fn test_structured_description() {
        let jd = "Job Title: Senior Backend Engineer\n\
                  Must have: Python, Django, REST APIs\n\
                  Preferred: Docker, AWS\n\
                  Qualifications: B.Tech in Computer Science\n\
                  Experience: 3+ years";
        let parsed = parser().parse(jd);

        assert_eq!(parsed.role_title, "senior backend engineer");
        assert_eq!(parsed.must_have, "python, django, rest apis");
        assert_eq!(parsed.good_to_have, "docker, aws");
        // "qualification" matches inside "qualifications", leaving the trailing "s:"
        assert_eq!(parsed.qualifications, "s: b.tech in computer science");
    }

    #[test]
    fn test_no_recognizable_headers() {
        let parsed = parser().parse("We build great software together.");

        assert_eq!(parsed.role_title, "Unknown");
        assert_eq!(parsed.must_have, "");
        assert_eq!(parsed.good_to_have, "");
        assert_eq!(parsed.qualifications, "");
    }

    #[test]
    fn test_empty_text() {
        let parsed = parser().parse("");
        assert_eq!(parsed.role_title, "Unknown");
        assert!(parsed.must_have.is_empty());
    }

    #[test]
    fn test_role_from_hiring_line_and_requirements_rule() {
        let jd = "We are hiring: Data Analyst\nRequirements: SQL, Excel\nBonus: Tableau";
        let parsed = parser().parse(jd);

        assert_eq!(parsed.role_title, "data analyst");
        assert_eq!(parsed.must_have, "sql, excel\nbonus: tableau");
        assert_eq!(parsed.good_to_have, "tableau");
        assert_eq!(parsed.qualifications, "");
    }

    #[test]
    fn test_multiple_must_have_bodies_are_joined() {
        let jd = "Required: Rust\nPreferred: Go\nEssential - Linux\nGood to have: Nix";
        let parsed = parser().parse(jd);

        assert_eq!(parsed.must_have, "rust\n - linux");
        // the first body runs to the end, swallowing the later header
        assert_eq!(parsed.good_to_have, "go\nessential - linux\ngood to have: nix");
    }

    #[test]
    fn test_qualifications_stop_at_experience() {
        let jd = "Education: Bachelor of Engineering\nExperience with Kafka";
        let parsed = parser().parse(jd);

        assert_eq!(parsed.qualifications, "bachelor of engineering\n of engineering");
    }

    #[test]
    fn test_header_at_end_of_text() {
        let parsed = parser().parse("Skills required:");
        assert_eq!(parsed.must_have, ":");
    }

    #[test]
    fn test_truncation() {
        let long_role = format!("Role: {}", "x".repeat(400));
        let long_section = format!("Must have: {}", "y".repeat(3000));
        let parsed = parser().parse(&format!("{}\n{}", long_role, long_section));

        assert_eq!(parsed.role_title.chars().count(), MAX_ROLE_CHARS);
        assert_eq!(parsed.must_have.chars().count(), MAX_SECTION_CHARS);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let p = parser();
        let jd = "Position: ML Engineer\nMust have: TensorFlow";
        assert_eq!(p.parse(jd), p.parse(jd));
    }
}
