// All LLM prompt constants for the oracle boundary. The extraction prompts
// return the exact JSON shapes the Document Normalizer consumes; the
// normalizer treats them as untrusted either way.

/// System prompt for resume extraction — enforces JSON-only output.
pub const RESUME_EXTRACT_SYSTEM: &str =
    "You are an expert resume analyst. \
    Extract structured information from a resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_TEMPLATE: &str = r#"Extract structured information from the following resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {"name": "", "email": "", "phone": "", "location": ""},
  "skills": {
    "technical": ["React", "Node.js"],
    "soft": ["Communication"]
  },
  "experience": [
    {
      "title": "Software Engineer",
      "company": "Acme Corp",
      "startDate": "2020-01",
      "endDate": "2023-06",
      "description": "What the candidate did in the role"
    }
  ],
  "education": [
    {
      "institution": "State University",
      "degree": "Bachelor of Science",
      "field": "Computer Science",
      "startDate": "2014-09",
      "endDate": "2018-06"
    }
  ],
  "rawText": "the full resume text, unchanged"
}

Rules:
- Omit endDate (or use an empty string) for current positions.
- Dates as YYYY-MM or YYYY-MM-DD where the resume states them.
- Every skill exactly as written in the resume, one entry per skill.
- Use empty strings / empty arrays for anything the resume does not state.

RESUME:
{resume_text}"#;

/// System prompt for job description extraction — enforces JSON-only output.
pub const JOB_EXTRACT_SYSTEM: &str =
    "You are an expert job description analyst. \
    Extract structured information from a job posting. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job extraction prompt template. Replace `{job_text}` before sending.
pub const JOB_EXTRACT_TEMPLATE: &str = r#"Extract structured information from the following job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Senior Backend Engineer",
  "company": "Acme Corp",
  "location": "Remote",
  "description": "the role summary paragraph",
  "requiredSkills": ["Rust", "PostgreSQL"],
  "preferredSkills": ["Kubernetes"],
  "responsibilities": ["Design and ship backend services"],
  "benefits": ["Health insurance"],
  "rawText": "the full job description text, unchanged"
}

Rules:
- requiredSkills: explicit must-haves ("required", "must have", minimum years).
- preferredSkills: nice-to-haves ("preferred", "bonus", "a plus").
- Keep each skill exactly as written in the posting.
- Use empty strings / empty arrays for anything the posting does not state.

JOB DESCRIPTION:
{job_text}"#;

/// System prompt for the holistic compatibility judgment.
pub const JUDGE_SYSTEM: &str =
    "You are an expert recruiter judging how well a candidate fits a role. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Judgment prompt template. Replace `{resume_json}` and `{job_json}`.
pub const JUDGE_TEMPLATE: &str = r#"Judge how well the candidate fits the role, using only the structured documents below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overallPercentage": 72,
  "strengths": ["Deep experience with the core stack"],
  "improvementAreas": ["No production cloud experience"],
  "summary": "Two-sentence holistic assessment."
}

Rules:
- overallPercentage is an integer from 0 to 100.
- strengths / improvementAreas: 2-4 short, concrete bullet phrases each.
- Be honest; a weak fit should score low.

CANDIDATE (structured resume):
{resume_json}

ROLE (structured job description):
{job_json}"#;
