//! Command-line front end. Results are printed to stdout as pretty JSON.

use crate::models::{ProjectListParams, ProjectStatus, RegisterRequest, TaskListParams, TaskStatus};
use crate::services::Session;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "verita", version, about = "Verita labeling platform client")]
pub struct Cli {
    /// Override the configured API base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist the issued tokens.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "VERITA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in with it.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "VERITA_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Forget the stored tokens.
    Logout,
    /// Restore the stored session and print the current user.
    Whoami,
    #[command(subcommand)]
    Projects(ProjectsCommand),
    #[command(subcommand)]
    Tasks(TasksCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    List {
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, value_parser = parse_enum::<ProjectStatus>)]
        status: Option<ProjectStatus>,
    },
    Get { project_id: String },
    Launch { project_id: String },
    Pause { project_id: String },
    Resume { project_id: String },
    Delete { project_id: String },
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    List {
        project_id: String,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, value_parser = parse_enum::<TaskStatus>)]
        status: Option<TaskStatus>,
        #[arg(long)]
        batch_id: Option<String>,
    },
    Get { task_id: String },
    Stats { project_id: String },
    /// Create tasks from a CSV file; columns other than `external_id` become task data.
    UploadCsv { project_id: String, file: PathBuf },
}

/// Parse a snake_case wire value (e.g. `needs_review`) into a model enum.
fn parse_enum<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown value '{}'", value))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(command: Command, session: &Session) -> anyhow::Result<()> {
    let client = session.client();

    match command {
        Command::Login { email, password } => print_json(&session.login(&email, &password).await?),
        Command::Register {
            email,
            username,
            password,
            full_name,
        } => {
            let request = RegisterRequest {
                email,
                username,
                password,
                full_name,
            };
            print_json(&session.register(&request).await?)
        }
        Command::Logout => session.logout().await.map_err(Into::into),
        Command::Whoami => {
            if !session.restore().await? {
                anyhow::bail!("Not logged in");
            }
            print_json(&session.state().await.user)
        }
        Command::Projects(command) => match command {
            ProjectsCommand::List {
                skip,
                limit,
                status,
            } => {
                let params = ProjectListParams {
                    skip,
                    limit,
                    status,
                };
                print_json(&client.get_projects(&params).await?)
            }
            ProjectsCommand::Get { project_id } => {
                print_json(&client.get_project(&project_id).await?)
            }
            ProjectsCommand::Launch { project_id } => {
                print_json(&client.launch_project(&project_id).await?)
            }
            ProjectsCommand::Pause { project_id } => {
                print_json(&client.pause_project(&project_id).await?)
            }
            ProjectsCommand::Resume { project_id } => {
                print_json(&client.resume_project(&project_id).await?)
            }
            ProjectsCommand::Delete { project_id } => {
                print_json(&client.delete_project(&project_id).await?)
            }
        },
        Command::Tasks(command) => match command {
            TasksCommand::List {
                project_id,
                skip,
                limit,
                status,
                batch_id,
            } => {
                let params = TaskListParams {
                    skip,
                    limit,
                    status,
                    batch_id,
                };
                print_json(&client.get_tasks(&project_id, &params).await?)
            }
            TasksCommand::Get { task_id } => print_json(&client.get_task(&task_id).await?),
            TasksCommand::Stats { project_id } => {
                print_json(&client.get_task_stats(&project_id).await?)
            }
            TasksCommand::UploadCsv { project_id, file } => {
                print_json(&client.upload_tasks_csv_file(&project_id, &file).await?)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_task_list_with_status() {
        let cli = Cli::parse_from([
            "verita",
            "tasks",
            "list",
            "p-1",
            "--status",
            "needs_review",
            "--limit",
            "5",
        ]);
        match cli.command {
            Command::Tasks(TasksCommand::List {
                project_id,
                status,
                limit,
                ..
            }) => {
                assert_eq!(project_id, "p-1");
                assert_eq!(status, Some(TaskStatus::NeedsReview));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = Cli::try_parse_from(["verita", "projects", "list", "--status", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_base_url() {
        let cli = Cli::parse_from(["verita", "whoami", "--base-url", "http://api.test"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
    }
}
