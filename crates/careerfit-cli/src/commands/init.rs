//! The `careerfit init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("careerfit.toml").exists() {
        println!("careerfit.toml already exists, skipping.");
    } else {
        std::fs::write("careerfit.toml", SAMPLE_CONFIG)?;
        println!("Created careerfit.toml");
    }

    std::fs::create_dir_all("responses")?;
    let example_path = Path::new("responses/example.json");
    if example_path.exists() {
        println!("responses/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_RESPONSES)?;
        println!("Created responses/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: careerfit validate --responses responses/example.json");
    println!("  2. Run: careerfit score --responses responses/example.json");
    println!("  3. Run: careerfit take  (to answer the questionnaire yourself)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# careerfit configuration

# Report format when --format is not given: text, json, markdown
default_format = "text"

# Refuse to score response files that fail validation
strict = false

# Where `score --save` and `take` write their files
output_dir = "./careerfit-results"
"#;

const EXAMPLE_RESPONSES: &str = r#"[
  { "questionId": "psych_001", "answer": 5, "timeSpent": 4100 },
  { "questionId": "psych_002", "answer": 4, "timeSpent": 3800 },
  { "questionId": "psych_003", "answer": 5, "timeSpent": 2900 },
  { "questionId": "psych_004", "answer": 4, "timeSpent": 3500 },
  { "questionId": "psych_005", "answer": 4, "timeSpent": 3100 },
  { "questionId": "psych_006", "answer": 5, "timeSpent": 2700 },
  { "questionId": "psych_007", "answer": 4, "timeSpent": 3300 },
  { "questionId": "psych_008", "answer": 5, "timeSpent": 2500 },
  { "questionId": "psych_009", "answer": 4, "timeSpent": 2600 },
  { "questionId": "apt_001", "answer": "162", "timeSpent": 21000 },
  { "questionId": "apt_002", "answer": "Some engineers might be creative", "timeSpent": 18000 },
  { "questionId": "apt_003", "answer": "4 units/hour", "timeSpent": 25000 },
  { "questionId": "apt_004", "answer": "64", "timeSpent": 30000 },
  { "questionId": "apt_005", "answer": "Station B, 20 units/hour", "timeSpent": 27000 },
  { "questionId": "know_001", "answer": "Inventory waste", "timeSpent": 9000 },
  { "questionId": "know_002", "answer": "SWOT Analysis", "timeSpent": 11000 },
  { "questionId": "wiscar_001", "answer": 4, "timeSpent": 3000 },
  { "questionId": "wiscar_002", "answer": 5, "timeSpent": 2800 },
  { "questionId": "wiscar_003", "answer": 80, "timeSpent": 4200 },
  { "questionId": "wiscar_004", "answer": 70, "timeSpent": 3900 },
  { "questionId": "wiscar_005", "answer": 3, "timeSpent": 3600 },
  { "questionId": "wiscar_006", "answer": 4, "timeSpent": 3400 },
  { "questionId": "wiscar_007", "answer": "Hexagon", "timeSpent": 8000 },
  { "questionId": "wiscar_008", "answer": 5, "timeSpent": 2900 },
  { "questionId": "wiscar_009", "answer": 4, "timeSpent": 3100 },
  { "questionId": "wiscar_010", "answer": "Very appealing - I would love this challenge", "timeSpent": 6000 },
  { "questionId": "wiscar_011", "answer": "Confident - I could learn and succeed at this", "timeSpent": 6500 }
]
"#;
