use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: task add "Buy milk"
    Add {
        description: String,
    },
    /// Update a task's description
    ///
    /// Example: task update 1 "Buy organic milk"
    Update {
        id: u64,
        description: String,
    },
    /// Delete a task
    ///
    /// Example: task delete 1
    Delete {
        id: u64,
    },
    /// List tasks, optionally filtered by status
    ///
    /// Example: task list
    /// Example: task list todo
    List {
        status: Option<String>,
    },
    /// Set a task's status (todo, in_progress or done)
    ///
    /// Example: task mark 1 done
    Mark {
        id: u64,
        status: String,
    },
    /// Mark a task as in progress
    ///
    /// Example: task in-progress 1
    InProgress {
        id: u64,
    },
    /// Mark a task as done
    ///
    /// Example: task done 1
    Done {
        id: u64,
    },
}
