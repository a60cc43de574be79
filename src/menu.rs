pub const TITLE: &str = "Autonomous Coding Agent Launcher";

const WIDE_RULE: usize = 50;
const NARROW_RULE: usize = 40;

/// What the user picked at the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainChoice {
    CreateNew,
    ContinueExisting,
    Quit,
    Invalid,
}

impl MainChoice {
    /// Interprets one line typed at the main menu. `"2"` only counts when
    /// there is something to continue.
    pub fn parse(input: &str, has_projects: bool) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1" => MainChoice::CreateNew,
            "2" if has_projects => MainChoice::ContinueExisting,
            "q" => MainChoice::Quit,
            _ => MainChoice::Invalid,
        }
    }
}

pub fn render_main_menu(projects: &[String]) -> String {
    let rule = "=".repeat(WIDE_RULE);
    let mut menu = format!("\n{rule}\n  {TITLE}\n{rule}\n\n[1] Create new project\n");
    if !projects.is_empty() {
        menu.push_str("[2] Continue existing project\n");
    }
    menu.push_str("[q] Quit\n\n");
    menu
}

pub fn render_project_list(projects: &[String]) -> String {
    let mut list = section_header("Existing Projects");
    for (i, project) in projects.iter().enumerate() {
        list.push_str(&format!("  [{}] {}\n", i + 1, project));
    }
    list.push_str("\n  [b] Back to main menu\n\n");
    list
}

pub fn render_new_project_header() -> String {
    format!(
        "{}\nEnter project name (e.g., my-awesome-app)\nLeave empty to cancel.\n\n",
        section_header("Create New Project")
    )
}

pub fn render_agent_banner(project: &str) -> String {
    format!(
        "\nStarting agent for project: {}\n{}\n",
        project,
        "-".repeat(WIDE_RULE)
    )
}

fn section_header(title: &str) -> String {
    let rule = "-".repeat(NARROW_RULE);
    format!("\n{rule}\n  {title}\n{rule}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_main_menu_without_projects() {
        let menu = render_main_menu(&[]);

        assert!(menu.contains("  Autonomous Coding Agent Launcher"));
        assert!(menu.contains("[1] Create new project"));
        assert!(menu.contains("[q] Quit"));
        assert!(!menu.contains("[2]"));
    }

    #[test]
    fn test_main_menu_with_projects() {
        let menu = render_main_menu(&names(&["alpha"]));
        assert!(menu.contains("[2] Continue existing project"));
    }

    #[test]
    fn test_main_menu_layout() {
        let rule = "=".repeat(50);
        let expected = format!(
            "\n{rule}\n  Autonomous Coding Agent Launcher\n{rule}\n\n[1] Create new project\n[q] Quit\n\n"
        );
        assert_eq!(render_main_menu(&[]), expected);
    }

    #[test]
    fn test_project_list_numbering() {
        let list = render_project_list(&names(&["alpha", "beta"]));

        assert!(list.contains("  Existing Projects"));
        assert!(list.contains("  [1] alpha\n  [2] beta\n"));
        assert!(list.ends_with("\n  [b] Back to main menu\n\n"));
    }

    #[test]
    fn test_new_project_header() {
        let header = render_new_project_header();
        assert!(header.contains("  Create New Project"));
        assert!(header.contains("Leave empty to cancel."));
    }

    #[test]
    fn test_agent_banner() {
        assert_eq!(
            render_agent_banner("demo"),
            format!("\nStarting agent for project: demo\n{}\n", "-".repeat(50))
        );
    }

    #[test]
    fn test_parse_main_choice() {
        assert_eq!(MainChoice::parse("1", false), MainChoice::CreateNew);
        assert_eq!(MainChoice::parse("  1 \n", true), MainChoice::CreateNew);
        assert_eq!(MainChoice::parse("2", true), MainChoice::ContinueExisting);
        assert_eq!(MainChoice::parse("q", false), MainChoice::Quit);
        assert_eq!(MainChoice::parse("Q", true), MainChoice::Quit);
    }

    #[test]
    fn test_continue_without_projects_is_invalid() {
        assert_eq!(MainChoice::parse("2", false), MainChoice::Invalid);
    }

    #[test]
    fn test_unknown_tokens_are_invalid() {
        for input in ["", "3", "quit", "b", "01", "1 2"] {
            assert_eq!(MainChoice::parse(input, true), MainChoice::Invalid, "{input:?}");
        }
    }
}
