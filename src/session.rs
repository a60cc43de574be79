//! The interactive control loop.
//!
//! ```text
//! MAIN --1--> NAME_ENTRY --accepted--> RUN_AGENT --> MAIN
//! MAIN --2--> PROJECT_SELECT --picked--> RUN_AGENT --> MAIN
//!                            --back----> MAIN
//! MAIN --q--> done
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::agent::{AgentOutcome, AgentRunner};
use crate::error::Result;
use crate::menu::{
    render_agent_banner, render_main_menu, render_new_project_header, render_project_list,
    MainChoice,
};
use crate::projects::list_projects;
use crate::prompt::{parse_selection, prompt_line, validate_project_name, NameEntry, Selection};

pub struct Launcher<R, W, A> {
    input: R,
    output: W,
    agent: A,
    projects_dir: PathBuf,
}

impl<R: BufRead, W: Write, A: AgentRunner> Launcher<R, W, A> {
    pub fn new(input: R, output: W, agent: A, projects_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            agent,
            projects_dir,
        }
    }

    /// Runs menus until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let projects = list_projects(&self.projects_dir)?;
            write!(self.output, "{}", render_main_menu(&projects))?;

            let Some(line) = prompt_line(&mut self.input, &mut self.output, "Select option: ")?
            else {
                debug!("input closed at main menu");
                break;
            };

            match MainChoice::parse(&line, !projects.is_empty()) {
                MainChoice::Quit => break,
                MainChoice::CreateNew => {
                    if let Some(name) = self.new_project()? {
                        self.launch(&name)?;
                    }
                }
                MainChoice::ContinueExisting => {
                    if let Some(name) = self.choose_project(&projects)? {
                        self.launch(&name)?;
                    }
                }
                MainChoice::Invalid => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks until the user picks a listed project or goes back.
    fn choose_project(&mut self, projects: &[String]) -> Result<Option<String>> {
        write!(self.output, "{}", render_project_list(projects))?;

        loop {
            let Some(line) =
                prompt_line(&mut self.input, &mut self.output, "Select project number: ")?
            else {
                return Ok(None);
            };

            match parse_selection(&line, projects.len()) {
                Selection::Project(index) => return Ok(Some(projects[index].clone())),
                Selection::Back => return Ok(None),
                Selection::OutOfRange => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}",
                    projects.len()
                )?,
                Selection::Invalid => writeln!(
                    self.output,
                    "Invalid input. Enter a number or 'b' to go back."
                )?,
            }
        }
    }

    /// Asks once for a new project name. A rejected name returns to the
    /// main menu rather than asking again.
    fn new_project(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", render_new_project_header())?;

        let Some(line) = prompt_line(&mut self.input, &mut self.output, "Project name: ")? else {
            return Ok(None);
        };

        match validate_project_name(&line) {
            NameEntry::Accepted(name) => Ok(Some(name)),
            NameEntry::Cancelled => Ok(None),
            NameEntry::Rejected(c) => {
                writeln!(self.output, "Invalid character '{c}' in project name")?;
                Ok(None)
            }
        }
    }

    fn launch(&mut self, project: &str) -> Result<()> {
        write!(self.output, "{}", render_agent_banner(project))?;
        self.output.flush()?;

        match self.agent.run(project)? {
            AgentOutcome::Interrupted => {
                writeln!(self.output, "\n\nAgent interrupted. Run again to resume.")?;
            }
            AgentOutcome::Exited(code) => {
                debug!(project, ?code, "agent exited");
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (R, W, A) {
        (self.input, self.output, self.agent)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
