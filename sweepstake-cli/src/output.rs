/// Output formatting: text blocks and JSON.
use serde::Serialize;
use sweepstake_core::Assignments;

#[derive(Serialize)]
struct JsonEntry {
    name: String,
    count: usize,
    teams: Vec<String>,
}

#[derive(Serialize)]
struct JsonOutput {
    assignments: Vec<JsonEntry>,
    total_teams: usize,
}

/// Render assignments as text blocks, one per participant in input order:
/// `<name> (<count>):` followed by each team indented two spaces, blocks
/// separated by a blank line.
pub fn render_blocks(assignments: &Assignments) -> String {
    let mut out = String::new();
    for (name, teams) in assignments.iter() {
        out.push_str(&format!("{name} ({}):\n", teams.len()));
        for team in teams {
            out.push_str(&format!("  {team}\n"));
        }
        out.push('\n');
    }
    out
}

/// Print assignments as JSON.
pub fn print_json(assignments: &Assignments) {
    let output = JsonOutput {
        assignments: assignments
            .iter()
            .map(|(name, teams)| JsonEntry {
                name: name.to_string(),
                count: teams.len(),
                teams: teams.to_vec(),
            })
            .collect(),
        total_teams: assignments.total_assigned(),
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use sweepstake_core::Sweepstake;

    #[test]
    fn test_render_blocks_format() {
        let mut sweepstake = Sweepstake::new(
            vec!["A".to_string(), "B".to_string()],
            vec!["T1".to_string()],
        )
        .unwrap();
        sweepstake.assign_all(&mut SmallRng::seed_from_u64(1));

        let rendered = render_blocks(sweepstake.assignments());
        let blocks: Vec<&str> = rendered.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);

        // One participant got the single team, the other an empty block.
        assert!(rendered.contains("  T1\n"));
        assert!(rendered.contains("(1):\n"));
        assert!(rendered.contains("(0):\n"));
        assert!(rendered.starts_with("A ("));
    }

    #[test]
    fn test_render_blocks_empty_mapping() {
        let sweepstake = Sweepstake::new(vec![], vec![]).unwrap();
        assert_eq!(render_blocks(sweepstake.assignments()), "");
    }
}
