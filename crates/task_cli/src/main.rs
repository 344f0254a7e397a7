use clap::Parser;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use task_cli::cli::{Cli, Command};
use task_core::error::TaskError;
use task_core::model::{Status, Task};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Updated At")]
    updated_at: String,
}

fn task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        description: task.description.clone(),
        status: task.status.as_str(),
        updated_at: task.updated_at.clone(),
    }
}

fn print_tasks_plain(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }

    let mut table = Table::new(tasks.iter().map(task_row));
    table.with(Style::psql());
    println!("{table}");
}

fn task_json(task: &Task) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "description": task.description,
        "status": task.status.as_str(),
        "created_at": task.created_at,
        "updated_at": task.updated_at,
    })
}

fn print_tasks_json(tasks: &[Task]) {
    let payload: Vec<serde_json::Value> = tasks.iter().map(task_json).collect();
    println!("{}", serde_json::Value::Array(payload));
}

fn mark(json: bool, id: u64, status: Status) -> Result<(), TaskError> {
    let task = task_core::task_api::mark_status(id, status)?;
    if json {
        println!("{}", task_json(&task));
    } else {
        println!("Marked task {} as {}", task.id, task.status.as_str());
    }

    Ok(())
}

fn run_command(cli: Cli) -> Result<(), TaskError> {
    match cli.command {
        Command::Add { description } => {
            let task = task_core::task_api::add_task(&description)?;
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                println!("Added task: {} ({})", task.description, task.id);
            }
        }
        Command::Update { id, description } => {
            let task = task_core::task_api::update_task(id, &description)?;
            if cli.json {
                println!("{}", task_json(&task));
            } else {
                println!("Updated task: {} ({})", task.description, task.id);
            }
        }
        Command::Delete { id } => {
            let removed = task_core::task_api::delete_task(id)?;
            if cli.json {
                println!("{}", serde_json::json!({ "id": id, "deleted": removed }));
            } else if removed {
                println!("Deleted task {id}");
            } else {
                println!("No task with id {id}");
            }
        }
        Command::List { status } => {
            let filter = match status.as_deref() {
                Some(raw) => Some(Status::parse(raw)?),
                None => None,
            };
            let tasks = task_core::task_api::list_tasks(filter)?;
            if cli.json {
                print_tasks_json(&tasks);
            } else {
                print_tasks_plain(&tasks);
            }
        }
        Command::Mark { id, status } => {
            let status = Status::parse(&status)?;
            mark(cli.json, id, status)?;
        }
        Command::InProgress { id } => mark(cli.json, id, Status::InProgress)?,
        Command::Done { id } => mark(cli.json, id, Status::Done)?,
    }

    Ok(())
}

fn normalize_parse_error(err: clap::Error) -> TaskError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    TaskError::validation(message)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if !err.use_stderr() {
                // --help and --version render on stdout
                print!("{err}");
                return;
            }
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
