/// Keyword extraction prompt. `{feedback}` is replaced with the serialized feedback document.
pub const KEYWORD_PROMPT_TEMPLATE: &str = "\
Based on this resume analysis, extract the most relevant job title and up to 5 key skills \
for a job search. Return a single, valid JSON object with this structure: \
{ \"title\": \"string\", \"skills\": [\"string\"] } \
Resume Analysis: {feedback}";
