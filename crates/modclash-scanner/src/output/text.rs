//! Plain-text report formatter

use crate::collision::ConflictGroup;
use crate::inventory::Inventory;
use std::fmt::Write;

/// Render the human-readable conflict report
#[must_use]
pub fn to_text(inventory: &Inventory) -> String {
    let ext = &inventory.script_extension;
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Parsed {} .{ext} file(s) from {} mod(s):",
        inventory.script_count,
        inventory.packages.len()
    );

    let mut names = inventory.package_names();
    names.sort();
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(output, "{}) {name}", i + 1);
    }

    output.push('\n');
    push_section(
        &mut output,
        &format!("Duplicates overwriting VP .{ext}'s:"),
        &inventory.conflicts.certain,
    );

    output.push('\n');
    push_section(&mut output, "Other duplicates:", &inventory.conflicts.potential);

    output
}

fn push_section(output: &mut String, title: &str, groups: &[ConflictGroup]) {
    let _ = writeln!(output, "{title}");
    let _ = writeln!(output, "{}", "=".repeat(title.chars().count()));
    output.push('\n');

    let mut sorted: Vec<&ConflictGroup> = groups.iter().collect();
    sorted.sort_by(|a, b| a.script_name.cmp(&b.script_name));
    for group in sorted {
        push_group(output, group);
    }
}

fn push_group(output: &mut String, group: &ConflictGroup) {
    let _ = writeln!(
        output,
        "{} ({} mods)",
        group.script_name,
        group.members.len()
    );
    for member in &group.members {
        let tag = if member.baseline { " [baseline]" } else { "" };
        let _ = writeln!(
            output,
            "    {}{tag} -> {}",
            member.package,
            member.path.display()
        );
    }
}
