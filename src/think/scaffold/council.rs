//! Council: multi-perspective debate

pub const TITLE: &str = "Council Analysis";

const INSTRUCTIONS: &str = r#"
Analyze this problem from four perspectives. Each perspective MUST take a distinct position. Do not let them converge prematurely.

### Perspective 1: The Pragmatist
What's the fastest path to shipping? What's the simplest thing that works? What are we overcomplicating?

### Perspective 2: The Architect
What's the right abstraction? What will we regret in 6 months? Where does this fit in the bigger picture?

### Perspective 3: The Skeptic
What's wrong with all the above? Name at least one **deal-breaker**: a scenario where the proposed approaches fail badly, not just mild caveats. What are we not seeing?

### Perspective 4: The User Advocate
What does the end user actually need? Are we solving the right problem? What would a user complain about?

### Disagreements
Where do these perspectives conflict? Be specific and name the exact points of tension.

### Recommendation
Synthesize a recommendation that acknowledges the tensions. Don't pretend consensus exists if it doesn't.
"#;

pub fn generate(problem: &str, context: Option<&str>, memory: Option<&str>) -> String {
    super::assemble(TITLE, problem, context, memory, INSTRUCTIONS)
}
