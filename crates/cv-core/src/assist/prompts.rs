// Refinement prompt templates. All vendor prompts live here.

pub const CV_PARSE_SYSTEM: &str = "\
You are a precise resume data extractor. \
Parse raw resume text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Never invent data: a field with no evidence in the text stays an empty string.";

pub const CV_PARSE_PROMPT: &str = r#"Parse the following resume text into a structured JSON object.
The resume language is: {language}.

RESUME TEXT:
{cv_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "personal": {
    "firstName": "string", "lastName": "string", "email": "string",
    "phone": "string", "city": "string", "linkedin": "string"
  },
  "summary": "string",
  "skills": ["string"],
  "experience": [
    {
      "company": "string", "title": "string", "start_date": "string",
      "end_date": "string", "location": "string", "highlights": ["string"]
    }
  ],
  "education": [
    {
      "school": "string", "degree": "string", "field": "string",
      "start_date": "string", "end_date": "string", "details": "string"
    }
  ]
}

RULES:
1. Keep dates as they appear in the text ("2019", "jan 2021"); use "Present" for a current position.
2. Use empty strings and empty arrays for anything the text does not state.
3. Return ONLY the JSON object — nothing else, no code fences."#;

/// Fills the prompt template with the resume text and language hint.
pub fn build_prompt(cv_text: &str, language_hint: Option<&str>) -> String {
    CV_PARSE_PROMPT
        .replace("{language}", language_hint.unwrap_or("unknown (detect it)"))
        .replace("{cv_text}", cv_text)
}
