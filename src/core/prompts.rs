use crate::domain::model::CodeType;

pub const ICD10_INSTRUCTION: &str = "\
You are a medical coding assistant.
Given a clinical note, respond ONLY with the appropriate ICD-10 diagnosis codes in this format:

- Code: <code>
- Description: <short description>

DO NOT include thoughts, reasoning, or internal thinking.
NO explanations, NO <think> tags.
Only return the final codes.
";

pub const CPT_INSTRUCTION: &str = "\
You are a medical coding assistant.
Given a clinical note, respond ONLY with the appropriate CPT procedure codes in this format:

- Code: <code>
- Description: <short description>

DO NOT include thoughts, reasoning, or internal thinking.
NO explanations, NO <think> tags.
Only return the final codes.
";

/// Used when no code type is selected.
pub const GENERAL_INSTRUCTION: &str = "\
You are a medical coding assistant.
Given a clinical note, respond ONLY with appropriate ICD-10 and CPT codes in this format:

- Code: <code>
- Description: <short description>

DO NOT include thoughts, reasoning, or internal thinking.
NO explanations, NO <think> tags.
Only return the final codes.
";

pub fn instruction_for(code_type: CodeType) -> &'static str {
    match code_type {
        CodeType::Icd10 => ICD10_INSTRUCTION,
        CodeType::Cpt => CPT_INSTRUCTION,
    }
}

/// Builds the enrichment instruction. The note and codes are embedded
/// verbatim; the codes are context for the model, not output.
pub fn enrichment_instruction(note: &str, codes: &str) -> String {
    format!(
        "You are a clinical documentation assistant.\n\
         Rewrite the clinical note and its medical codes below as one enriched clinical \
         statement in plain, human-readable language.\n\
         Describe each diagnosis and procedure in words. DO NOT include code numbers.\n\n\
         Clinical note:\n{}\n\nMedical codes:\n{}\n",
        note, codes
    )
}
