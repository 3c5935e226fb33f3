//! Prompt templates for the two AI-delegated tasks.

use chrono::NaiveDate;
use meditrack_core::models::{medication::MedicationResponse, profile::UserProfile};

/// Builds the drug-interaction analysis prompt from the active medication
/// list and the optional health profile.
///
/// Callers must only invoke this with a non-empty medication list; the
/// zero-medication case short-circuits before any prompt is built.
pub fn build_analysis_prompt(
    medications: &[MedicationResponse],
    profile: Option<&UserProfile>,
) -> String {
    let mut med_lines = Vec::with_capacity(medications.len());
    for med in medications {
        let mut line = format!("• {}", med.name);
        if !med.dose.is_empty() {
            line.push_str(&format!(" ({})", med.dose));
        }
        if !med.frequency.is_empty() {
            line.push_str(&format!(" - {}", med.frequency));
        }
        if !med.effect.is_empty() {
            line.push_str(&format!(" [effect: {}]", med.effect));
        }
        med_lines.push(line);
    }
    let medications_text = med_lines.join("\n");

    let profile_text = profile
        .map(render_profile)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No personal health data provided".to_string());

    format!(
        r#"You are a clinical pharmacist. Analyze the following medication regimen in detail for interactions:

**Current medications:**
{medications_text}

**Personal health data:**
{profile_text}

**Analysis required:**
1. Check for interactions between the medications
2. Analyze interactions between the medications and the listed diet/supplements
3. Assess medication risk against the personal medical history
4. Consider the impact of the special physiological conditions on these medications
5. Give concrete medication advice and precautions

**Reply format:**
Answer in bullet points, using exactly these sections:

### Analysis result

### Interactions found
(if any)

### Medication advice
(concrete suggestions)

### Precautions
(important reminders)

### When to see a doctor
(when to consult a physician)

Provide a professional, practical analysis without alarming the patient unnecessarily."#
    )
}

/// Renders the profile's set flags as grouped, comma-joined category lines.
fn render_profile(profile: &UserProfile) -> String {
    let mut sections = Vec::new();

    let diet = profile.diet_labels();
    if !diet.is_empty() {
        sections.push(format!("Dietary habits: {}", diet.join(", ")));
    }

    let supplements = profile.supplement_labels();
    if !supplements.is_empty() {
        sections.push(format!("Supplements/herbal: {}", supplements.join(", ")));
    }

    let history = profile.history_labels();
    if !history.is_empty() {
        sections.push(format!("Medical history: {}", history.join(", ")));
    }

    let conditions = profile.condition_labels();
    if !conditions.is_empty() {
        sections.push(format!("Special conditions: {}", conditions.join(", ")));
    }

    sections.join("\n")
}

/// Builds the prescription-recognition prompt for the vision endpoint.
///
/// The template fixes the field set, the frequency abbreviation mapping,
/// the default reminder-time scheme, and the exact JSON output contract.
pub fn build_recognition_prompt(user_timezone: &str, current_date: NaiveDate) -> String {
    format!(
        r#"You are a careful pharmacist assistant. Analyze the uploaded prescription or medication-bag photo and return structured medication data as pure JSON.

# Task:
1. **Identify every medication**: find all distinct medication items in the image.
2. **Extract key fields** for each medication:
    - `name`: the full brand or generic name.
    - `dose`: the amount per intake, e.g. "1 tablet" or "10mg".
    - `frequency`: how often to take it. Convert common medical abbreviations to plain phrasing:
        - QD -> "once daily"
        - BID -> "twice daily"
        - TID -> "three times daily"
        - QID -> "four times daily"
        - QOD -> "every other day"
        - HS -> "at bedtime"
        - PC -> append "(after meals)" to the frequency
        - AC -> append "(before meals)" to the frequency
3. **Infer supplementary fields**:
    - `effect`: the medication's main, most common effect, in a few words, e.g. "lowers blood pressure", "antibiotic", "pain relief".
    - `remind_times`: suggested reminder times derived from `frequency` and a normal daily routine, as an array of objects `[{{"hour": H, "minute": M}}]`:
        - "once daily": [{{"hour": 9, "minute": 0}}]
        - "twice daily": [{{"hour": 9, "minute": 0}}, {{"hour": 21, "minute": 0}}]
        - "three times daily": [{{"hour": 9, "minute": 0}}, {{"hour": 14, "minute": 0}}, {{"hour": 19, "minute": 0}}]
        - "at bedtime": [{{"hour": 22, "minute": 0}}]
    - `start_date`: default to today's date: `{current_date}`.
    - `end_date`: if the image states a day count or total quantity that determines an end date, compute and fill it in; otherwise use the empty string "".

# Output constraints (critical):
- Return a **pure JSON object** with no markdown tags, comments, or any non-JSON text.
- The root object must contain a single key `medications` whose value is an array.
- Each array element is one medication object with the keys `name`, `effect`, `dose`, `frequency`, `remind_times`, `start_date`, `end_date`.
- If no medication is recognized, or the image is unrelated, return `{{"medications": []}}`.
- If a field is absent or unreadable in the image, use the empty string "" (for strings) or the empty array [] (for `remind_times`); never null and never omit the key.

# User context:
- User timezone: `{user_timezone}`
- Today's date: `{current_date}`"#
    )
}
