//! Red team: how could this fail?

pub const TITLE: &str = "Failure Analysis";

const INSTRUCTIONS: &str = r#"
Identify how this could fail. Be concrete and specific, not generic.

### Failure Modes
List at least 5 specific failure modes or attack vectors. For each:
- **What fails:** Describe the specific failure
- **Worst case:** What happens if this isn't caught?
- **Mitigation:** How to prevent or detect it

### Deal-Breaker
Identify at least one scenario that would **block shipping entirely** if it occurred. Not a minor inconvenience, a real blocker.

### Risk Assessment
Overall narrative: how risky is this? What's the one thing we must get right above all else?
"#;

pub fn generate(problem: &str, context: Option<&str>, memory: Option<&str>) -> String {
    super::assemble(TITLE, problem, context, memory, INSTRUCTIONS)
}
