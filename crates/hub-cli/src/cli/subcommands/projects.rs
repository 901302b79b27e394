use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project in planning.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        budget: f64,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: Option<String>,
    },
    /// Move a project to a new status.
    Transition { id: i64, status: String },
    /// Get a project by ID.
    Get { id: i64 },
    /// List projects.
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a project and all of its tasks.
    Delete { id: i64 },
}

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task to a project.
    Create {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// low, medium, or high.
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Move a task to a new status (todo, in_progress, done).
    Transition { id: i64, status: String },
    /// List tasks of a project, newest first.
    List {
        #[arg(long)]
        project: i64,
    },
    /// Delete a task.
    Delete { id: i64 },
}
