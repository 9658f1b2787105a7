//! Rule-based feature extraction: skills, years of experience, location

use crate::config::{ExtractionConfig, DEFAULT_REFERENCE_YEAR};
use crate::error::Result;
use crate::processing::keywords::KeywordSet;
use crate::processing::vocabulary::{CITY_TABLE, LOCATION_NOT_SPECIFIED, SKILL_VOCABULARY};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Experience claims outside (0, 50) are treated as noise such as phone numbers
const MAX_PLAUSIBLE_YEARS: u32 = 50;

/// Features derived from a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFeatures {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub location: String,
}

pub struct FeatureExtractor {
    skills: KeywordSet,
    cities: KeywordSet,
    experience_patterns: Vec<Regex>,
    date_range: Regex,
    reference_year: i32,
}

impl FeatureExtractor {
    pub fn new() -> Result<Self> {
        Self::with_reference_year(DEFAULT_REFERENCE_YEAR)
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::with_reference_year(config.reference_year)
    }

    pub fn with_reference_year(reference_year: i32) -> Result<Self> {
        let skill_keywords: Vec<&str> = SKILL_VOCABULARY.iter().map(|(k, _)| *k).collect();
        let city_keywords: Vec<&str> = CITY_TABLE.iter().map(|(k, _)| *k).collect();

        let experience_patterns = vec![
            Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s+(?:of\s+)?(?:experience|exp)")?,
            Regex::new(r"experience[:\s]+(\d+)\+?\s*(?:years?|yrs?)")?,
            Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s+in")?,
        ];
        let date_range = Regex::new(r"(20\d{2})\s*[-–]\s*(present|current|20\d{2})")?;

        Ok(Self {
            skills: KeywordSet::new(&skill_keywords)?,
            cities: KeywordSet::new(&city_keywords)?,
            experience_patterns,
            date_range,
            reference_year,
        })
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn vocabulary_size(&self) -> usize {
        self.skills.len()
    }

    /// Canonical skill names in vocabulary order, deduplicated
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();

        for id in self.skills.whole_word_matches(&text_lower) {
            let canonical = SKILL_VOCABULARY[id].1;
            if !found.iter().any(|s| s == canonical) {
                found.push(canonical.to_string());
            }
        }

        found
    }

    /// Largest plausible years-of-experience signal, 0 when none is stated
    pub fn extract_experience_years(&self, text: &str) -> u32 {
        let text_lower = text.to_lowercase();
        let mut years_found: Vec<u32> = Vec::new();

        for pattern in &self.experience_patterns {
            years_found.extend(
                pattern
                    .captures_iter(&text_lower)
                    .filter_map(|cap| cap.get(1)?.as_str().parse::<u32>().ok())
                    .filter(|&years| is_plausible(years)),
            );
        }

        for cap in self.date_range.captures_iter(&text_lower) {
            if let Some(years) = self.range_span(&cap[1], &cap[2]) {
                years_found.push(years);
            }
        }

        years_found.into_iter().max().unwrap_or(0)
    }

    fn range_span(&self, start: &str, end: &str) -> Option<u32> {
        let start: i32 = start.parse().ok()?;
        let end: i32 = match end {
            "present" | "current" => self.reference_year,
            year => year.parse().ok()?,
        };

        u32::try_from(end - start).ok().filter(|&years| is_plausible(years))
    }

    /// Canonical region of the first city keyword found, in table order
    pub fn extract_location(&self, text: &str) -> String {
        let text_lower = text.to_lowercase();

        self.cities
            .whole_word_matches(&text_lower)
            .into_iter()
            .next()
            .map(|id| CITY_TABLE[id].1)
            .unwrap_or(LOCATION_NOT_SPECIFIED)
            .to_string()
    }

    pub fn extract_features(&self, text: &str) -> DocumentFeatures {
        DocumentFeatures {
            skills: self.extract_skills(text),
            experience_years: self.extract_experience_years(text),
            location: self.extract_location(text),
        }
    }
}

fn is_plausible(years: u32) -> bool {
    years > 0 && years < MAX_PLAUSIBLE_YEARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new().unwrap()
    }

    #[test]
    fn test_extract_skills_basic() {
        let skills = extractor().extract_skills("I use Python and React daily");
        assert_eq!(skills, vec!["Python", "React"]);
    }

    #[test]
    fn test_extract_skills_none() {
        assert!(extractor().extract_skills("Enjoys hiking and cooking").is_empty());
        assert!(extractor().extract_skills("").is_empty());
    }

    #[test]
    fn test_extract_skills_respects_word_boundaries() {
        let skills = extractor().extract_skills("JavaScript on GitHub, some Vuex");
        assert_eq!(skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_extract_skills_punctuated_and_multiword() {
        let skills = extractor().extract_skills("C++ and C# developer; Machine Learning with TensorFlow");
        assert_eq!(skills, vec!["C++", "C#", "Machine Learning", "TensorFlow"]);
    }

    #[test]
    fn test_extract_skills_deduplicates_aliases() {
        let skills = extractor().extract_skills("Node.js (a.k.a. nodejs) and SQL, MySQL");
        assert_eq!(skills, vec!["Node.js", "MySQL", "SQL"]);
    }

    #[test]
    fn test_experience_direct_phrases() {
        let ex = extractor();
        assert_eq!(ex.extract_experience_years("5+ years of experience in backend"), 5);
        assert_eq!(ex.extract_experience_years("Experience: 7 years"), 7);
        assert_eq!(ex.extract_experience_years("3 yrs in fintech"), 3);
        assert_eq!(ex.extract_experience_years("2 years exp, later 4 years of experience"), 4);
    }

    #[test]
    fn test_experience_discards_noise() {
        let ex = extractor();
        assert_eq!(ex.extract_experience_years("0 years of experience"), 0);
        assert_eq!(ex.extract_experience_years("98765 years of experience"), 0);
        assert_eq!(ex.extract_experience_years("99999999999999999999 years of experience"), 0);
    }

    #[test]
    fn test_experience_date_ranges() {
        let ex = extractor();
        assert_eq!(ex.extract_experience_years("2019 - present"), 6);
        assert_eq!(ex.extract_experience_years("Acme Corp 2016–2020"), 4);
        assert_eq!(ex.extract_experience_years("2021 - current, 2010 - 2012"), 4);
        assert_eq!(ex.extract_experience_years("2022 - 2022"), 0);
        assert_eq!(ex.extract_experience_years("2024 - 2020"), 0);
    }

    #[test]
    fn test_experience_reference_year_is_configurable() {
        let ex = FeatureExtractor::with_reference_year(2030).unwrap();
        assert_eq!(ex.reference_year(), 2030);
        assert_eq!(ex.extract_experience_years("2019 - Present"), 11);
    }

    #[test]
    fn test_experience_empty_text() {
        assert_eq!(extractor().extract_experience_years(""), 0);
    }

    #[test]
    fn test_experience_takes_maximum_across_sources() {
        let text = "3+ years of experience. Worked at Foo from 2015 - 2023.";
        assert_eq!(extractor().extract_experience_years(text), 8);
    }

    #[test]
    fn test_location() {
        let ex = extractor();
        assert_eq!(ex.extract_location("Based in Bengaluru"), "Bangalore");
        assert_eq!(ex.extract_location("Remote"), "Not specified");
        assert_eq!(ex.extract_location("Office in Gurgaon"), "Delhi NCR");
    }

    #[test]
    fn test_location_uses_table_order() {
        // Mumbai is mentioned first but Pune comes earlier in the table
        assert_eq!(extractor().extract_location("Mumbai or Pune"), "Pune");
    }

    #[test]
    fn test_location_requires_word_boundary() {
        assert_eq!(extractor().extract_location("Punekar Foods"), "Not specified");
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let ex = extractor();
        let text = "Senior Python dev, 6 years of experience, Hyderabad, 2018 - present";
        let first = ex.extract_features(text);
        let second = ex.extract_features(text);

        assert_eq!(first, second);
        assert_eq!(first.skills, vec!["Python"]);
        assert_eq!(first.experience_years, 7);
        assert_eq!(first.location, "Hyderabad");
    }
}
