//! Candidate name inference from resume text.

/// Maximum plausible length for a person's name on a resume's first line.
const MAX_NAME_LEN: usize = 50;

/// Best-effort heuristic: a resume usually opens with the candidate's name.
///
/// Takes the first non-empty trimmed line and accepts it only if it is
/// shorter than 50 characters and does not look like a document header
/// ("resume" / "curriculum vitae", matched case-insensitively).
pub fn infer_candidate_name(resume_text: &str) -> Option<&str> {
    let first = resume_text.lines().map(str::trim).find(|l| !l.is_empty())?;
    if first.chars().count() >= MAX_NAME_LEN {
        return None;
    }
    let lower = first.to_lowercase();
    if lower.contains("resume") || lower.contains("curriculum vitae") {
        return None;
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_nontrivial_line_is_accepted() {
        assert_eq!(
            infer_candidate_name("\n  \nJane Doe\nSoftware Engineer"),
            Some("Jane Doe")
        );
    }

    #[test]
    fn header_lines_are_rejected() {
        assert_eq!(infer_candidate_name("Resume of Jane Doe\nJane Doe"), None);
        assert_eq!(infer_candidate_name("CURRICULUM VITAE\nJane Doe"), None);
    }

    #[test]
    fn overlong_first_line_is_rejected() {
        let line = "A".repeat(50);
        assert_eq!(infer_candidate_name(&line), None);
        // 49 characters is still plausible as a name.
        let line = "B".repeat(49);
        assert_eq!(infer_candidate_name(&line).map(str::len), Some(49));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(infer_candidate_name(""), None);
        assert_eq!(infer_candidate_name("  \n\t\n"), None);
    }

    #[test]
    fn uppercase_name_is_accepted_as_is() {
        // Title-casing the sign-off is the generation service's job.
        assert_eq!(infer_candidate_name("JOHN SMITH\n..."), Some("JOHN SMITH"));
    }
}
