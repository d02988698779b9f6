// Shared prompt fragments.
// Each collaborator that needs LLM calls defines its own prompts.rs alongside it.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every extraction-style prompt.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    CRITICAL: Only report information that is present in the supplied text. \
    Do NOT infer, interpolate, or invent details. \
    Leave a field empty (\"\", 0, false or []) when the text does not support it.";
