use super::*;

fn flatten(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_help_sections_cover_every_command() {
    let listed: Vec<&str> = HELP_SECTIONS
        .iter()
        .flat_map(|(_, names)| names.iter().copied())
        .collect();
    let mut registered = commands::canonical_names();
    let mut sorted = listed.clone();
    sorted.sort_unstable();
    registered.sort_unstable();
    assert_eq!(sorted, registered);
}

#[test]
fn test_help_lines_show_aliases_and_usage() {
    let text: Vec<String> = help_lines().iter().map(flatten).collect();
    assert!(text.iter().any(|l| l.contains(":add/:a <date> <amount> <category> <desc>")));
    assert!(text.iter().any(|l| l.contains(":delete/:rm") && l.contains("Delete the selected bill")));
    assert!(text.iter().any(|l| l == "Budget"));
    assert!(text.iter().any(|l| l == "Keys"));
}

#[test]
fn test_prompt_cursor_counts_chars() {
    let (_, cursor) = prompt_line(":", "add ₹");
    assert_eq!(cursor, Some(6));
}

#[test]
fn test_screen_hints_end_with_help() {
    for screen in Screen::all() {
        assert!(screen_hint(*screen).ends_with("? "));
    }
}
