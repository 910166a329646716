use serde_json::json;

/// Returns the response schema forcing the model to reply with a `NutritionResponse`.
pub fn get_nutrition_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "foods": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "quantity": { "type": "STRING" },
                        "calories": { "type": "NUMBER" },
                        "macros": {
                            "type": "OBJECT",
                            "properties": {
                                "protein": { "type": "NUMBER" },
                                "carbs": { "type": "NUMBER" },
                                "fat": { "type": "NUMBER" }
                            },
                            "required": ["protein", "carbs", "fat"]
                        },
                        "confidence": { "type": "NUMBER" }
                    },
                    "required": ["name", "quantity", "calories", "macros", "confidence"]
                }
            }
        },
        "required": ["foods"]
    })
}
