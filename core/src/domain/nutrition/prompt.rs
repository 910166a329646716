pub const SYSTEM_INSTRUCTION: &str = "You are a nutrition assistant AI. Your job is to convert a user's meal description into structured, easy to understand results.";

/// Builds the instruction prompt sent alongside the optional meal image.
pub fn build_analysis_prompt(description: &str, has_image: bool) -> String {
    let subject = if has_image {
        "meal description and image"
    } else {
        "meal description"
    };

    format!(
        r#"Convert the following {subject} into structured nutritional results.
For each food, include:
- name
- quantity (in grams, cups, slices, or standard units)
- calories (integer, kcal)
- macros (protein, carbs, fat; in grams)
- confidence (0-1, how certain the estimate is)

Rules:
- Be precise, conservative, and clear.
- If a quantity is missing, estimate it from standard serving sizes.
- Handle multi-food sentences, mixed dishes, and cultural dishes.
- Normalize names to standard food terms (e.g. "white rice" rather than "rice").
- Prefer conservative calorie estimates over invented ones.
- For images, infer food type, cooking method and portion size from what is visible. Lower the confidence when lighting, angle or portion size is unclear. Do not list ingredients that cannot be identified visually.
- Return "foods" as the key, containing an array of food objects.

Meal: "{description}"
"#
    )
}
