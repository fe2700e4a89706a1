//! Keyword-based code challenge verifier
//!
//! Checks submitted code against a level's criteria. A criterion is met
//! when every one of its keywords appears in the lowercased submission;
//! the level passes when at least [`PASS_THRESHOLD`] percent of criteria
//! are met.

use crate::catalog::KeywordCriterion;

use super::PASS_THRESHOLD;

/// Result of a keyword check
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordVerdict {
    pub percent: u32,
    pub passed: bool,
    /// Labels of the criteria the submission did not meet
    pub missing: Vec<&'static str>,
}

/// Score submitted code against the level's criteria
pub fn check(code: &str, criteria: &[KeywordCriterion]) -> KeywordVerdict {
    if criteria.is_empty() {
        return KeywordVerdict {
            percent: 100,
            passed: true,
            missing: Vec::new(),
        };
    }

    let lowered = code.to_lowercase();
    let mut met = 0usize;
    let mut missing = Vec::new();
    for criterion in criteria {
        if criterion.keywords.iter().all(|kw| lowered.contains(kw)) {
            met += 1;
        } else {
            missing.push(criterion.label);
        }
    }

    let percent = (met as f64 / criteria.len() as f64 * 100.0).round() as u32;
    KeywordVerdict {
        percent,
        passed: percent >= PASS_THRESHOLD,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KeywordCriterion, REACT_NATIVE_LEVELS};

    fn criteria() -> Vec<KeywordCriterion> {
        vec![
            KeywordCriterion::new("Uses state", vec!["usestate"]),
            KeywordCriterion::new("Fetches data", vec!["fetch"]),
            KeywordCriterion::new("Handles errors", vec!["try", "catch"]),
        ]
    }

    #[test]
    fn test_all_criteria_met() {
        let code = "const [data, setData] = useState([]);\ntry { await fetch(url); } catch (e) {}";
        let verdict = check(code, &criteria());
        assert_eq!(verdict.percent, 100);
        assert!(verdict.passed);
        assert!(verdict.missing.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let verdict = check("USESTATE FETCH TRY CATCH", &criteria());
        assert_eq!(verdict.percent, 100);
    }

    #[test]
    fn test_partial_keywords_do_not_meet_criterion() {
        // "try" without "catch" leaves the error-handling criterion unmet
        let code = "useState(); fetch(url); try {}";
        let verdict = check(code, &criteria());
        assert_eq!(verdict.percent, 67);
        assert!(!verdict.passed);
        assert_eq!(verdict.missing, vec!["Handles errors"]);
    }

    #[test]
    fn test_api_integration_level_passes_with_full_solution() {
        let level = &REACT_NATIVE_LEVELS[2];
        let code = "const [users, setUsers] = useState([]);\n\
                    useEffect(() => {\n\
                      const load = async () => {\n\
                        try {\n\
                          const res = await fetch('https://api.example.com/users');\n\
                          setUsers(await res.json());\n\
                        } catch (err) {\n\
                          console.error(err);\n\
                        }\n\
                      };\n\
                      load();\n\
                    }, []);";
        let verdict = check(code, &level.criteria);
        assert_eq!(verdict.percent, 100);
        assert!(verdict.passed);
    }

    #[test]
    fn test_three_of_four_criteria_fails() {
        let criteria = vec![
            KeywordCriterion::new("A", vec!["alpha"]),
            KeywordCriterion::new("B", vec!["beta"]),
            KeywordCriterion::new("C", vec!["gamma"]),
            KeywordCriterion::new("D", vec!["delta"]),
        ];
        let verdict = check("alpha beta gamma", &criteria);
        assert_eq!(verdict.percent, 75);
        assert!(!verdict.passed);
    }
}
