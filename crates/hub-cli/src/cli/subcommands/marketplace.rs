use clap::Subcommand;

/// Offer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OfferCommands {
    /// Create a draft offer.
    Create {
        #[arg(long)]
        employer: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: f64,
    },
    /// Edit a draft or published offer.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Publish a draft offer.
    Publish { id: i64 },
    /// Start a published offer without an application.
    Start { id: i64 },
    /// Complete an in-progress offer.
    Complete { id: i64 },
    /// Get an offer by ID.
    Get { id: i64 },
    /// List offers.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        employer: Option<i64>,
    },
    /// Delete an offer without applications.
    Delete { id: i64 },
}

/// Application commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ApplicationCommands {
    /// Apply to a published offer.
    Apply {
        #[arg(long)]
        offer: i64,
        #[arg(long)]
        applicant: i64,
        #[arg(long)]
        cover_letter: Option<String>,
    },
    /// Accept an application; its offer moves to in_progress.
    Accept { id: i64 },
    /// Reject an application.
    Reject { id: i64 },
    /// Get an application by ID.
    Get { id: i64 },
    /// List applications to one offer.
    List {
        #[arg(long)]
        offer: i64,
    },
}

/// Contract commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// Generate a contract for an accepted application.
    Generate {
        #[arg(long)]
        application: i64,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        terms: String,
    },
    /// Move a contract to a new status (signed, in_progress, completed, archived).
    Advance { id: i64, status: String },
    /// Get a contract by ID.
    Get { id: i64 },
    /// List contracts.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        payment_status: Option<String>,
    },
}

/// Payment commands. The money moves elsewhere; these record the outcome.
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentCommands {
    /// Record an authorization and its processor reference.
    Authorize {
        contract: i64,
        #[arg(long)]
        reference: String,
    },
    /// Record capture of an authorized payment.
    Capture { contract: i64 },
    /// Record a refund.
    Refund { contract: i64 },
}

/// Milestone commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MilestoneCommands {
    /// Add a milestone to a contract.
    Add {
        #[arg(long)]
        contract: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        amount: f64,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
    },
    /// Mark a milestone completed.
    Complete { id: i64 },
    /// List milestones of a contract.
    List {
        #[arg(long)]
        contract: i64,
    },
}
