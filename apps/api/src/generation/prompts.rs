// All LLM prompt text for cover letter generation.

use crate::generation::CoverLetterRequest;

/// Fixed system instruction sent with every generation call.
/// The 135-word cap and the Title Case sign-off rule are part of the product
/// contract — do not soften them.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert HR professional and AI cover letter writer. Your task is to craft a concise, highly professional, and compelling cover letter that directly addresses the job description provided. \n\nCRITICAL RULES:\n1. STRICTLY adhere to the facts provided in the resume. Do NOT fabricate, exaggerate, or invent experiences, skills, or qualifications that are not explicitly present in the source text. If a specific skill is required by the JD but missing in the Resume, do not claim the candidate has it.\n2. The generated cover letter must be STRICTLY under 135 words.\n3. Maintain a formal, confident, and professional tone.\n4. Do not include placeholders for sender/recipient addresses. Start directly with the salutation (e.g., 'Dear Hiring Manager,').\n5. End the letter specifically with the closing 'Regards,' followed by the Candidate Name. The Candidate Name MUST be formatted in Title Case (e.g., 'John Doe') and NOT ALL CAPS, even if the resume uses uppercase. If the name is not explicitly provided in the inputs, you MUST extract it from the Resume Content. Do not use generic placeholders like \"A Job Applicant\".";

/// Substituted for a blank candidate name so the model derives the sign-off
/// from the resume instead of inventing a placeholder.
pub const NAME_NOT_PROVIDED: &str = "NOT PROVIDED. You MUST extract the candidate's full name \
from the Resume Content below for the sign-off.";

const NO_INSTRUCTIONS: &str = "No special instructions provided.";

/// Builds the user prompt: the four request fields verbatim inside labeled
/// delimited sections.
pub fn build_prompt(request: &CoverLetterRequest) -> String {
    let name_context = if request.candidate_name.trim().is_empty() {
        NAME_NOT_PROVIDED
    } else {
        request.candidate_name.as_str()
    };
    let instructions = if request.instructions.is_empty() {
        NO_INSTRUCTIONS
    } else {
        request.instructions.as_str()
    };

    format!(
        "\nJob Description (JD) content:\n---\n{jd}\n---\n\
        Candidate Resume Content:\n---\n{resume}\n---\n\
        Candidate Name Context:\n---\n{name_context}\n---\n\
        Additional Instructions (Keep this optional instruction brief and apply it strictly):\n---\n{instructions}\n---\n\
        Please generate the tailored cover letter now. Ensure the sign-off uses exactly \
        \"Regards,\" and the Candidate Name is in Title Case (not ALL CAPS).\n",
        jd = request.job_description,
        resume = request.resume_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_description: "We need a widget engineer.".to_string(),
            resume_text: "Jane Doe\nWidget experience.".to_string(),
            instructions: String::new(),
            candidate_name: String::new(),
        }
    }

    #[test]
    fn fields_embedded_verbatim() {
        let mut req = request();
        req.instructions = "Mention my relocation plans".to_string();
        req.candidate_name = "Jane Doe".to_string();

        let prompt = build_prompt(&req);
        assert!(prompt.contains("We need a widget engineer."));
        assert!(prompt.contains("Jane Doe\nWidget experience."));
        assert!(prompt.contains("Mention my relocation plans"));
        assert!(prompt.contains("Candidate Name Context:\n---\nJane Doe\n---"));
    }

    #[test]
    fn blank_name_substitutes_extraction_instruction() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains(NAME_NOT_PROVIDED));
    }

    #[test]
    fn whitespace_name_counts_as_blank() {
        let mut req = request();
        req.candidate_name = "   ".to_string();
        assert!(build_prompt(&req).contains(NAME_NOT_PROVIDED));
    }

    #[test]
    fn empty_instructions_fall_back() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("No special instructions provided."));
    }

    #[test]
    fn system_instruction_carries_the_hard_rules() {
        assert!(SYSTEM_INSTRUCTION.contains("under 135 words"));
        assert!(SYSTEM_INSTRUCTION.contains("'Regards,'"));
        assert!(SYSTEM_INSTRUCTION.contains("Title Case"));
    }
}
