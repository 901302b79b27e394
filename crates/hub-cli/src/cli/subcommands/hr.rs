use clap::Subcommand;

/// Leave request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LeaveCommands {
    /// Request leave.
    Request {
        #[arg(long)]
        employee: i64,
        /// annual, sick, unpaid, ...
        #[arg(long = "type")]
        leave_type: String,
        /// First day (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// Last day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        end: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Approve a pending request.
    Approve { id: i64 },
    /// Reject a pending request.
    Reject { id: i64 },
    /// List leave requests.
    List {
        #[arg(long)]
        employee: Option<i64>,
        #[arg(long)]
        status: Option<String>,
    },
}

/// Attendance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttendanceCommands {
    /// Record one employee-day.
    Record {
        #[arg(long)]
        employee: i64,
        /// Day (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// Check-in time (HH:MM).
        #[arg(long)]
        check_in: Option<String>,
        /// Check-out time (HH:MM).
        #[arg(long)]
        check_out: Option<String>,
        /// present, absent, or late.
        #[arg(long, default_value = "present")]
        status: String,
    },
    /// Excuse an absent or late record.
    Excuse { id: i64 },
    /// List attendance records.
    List {
        #[arg(long)]
        employee: Option<i64>,
    },
}

/// Payroll commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PayrollCommands {
    /// Create a pending payroll for a period.
    Create {
        #[arg(long)]
        employee: i64,
        /// Period start (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// Period end (YYYY-MM-DD).
        #[arg(long)]
        end: String,
        #[arg(long)]
        base: f64,
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
    },
    /// Adjust a pending payroll.
    Adjust {
        id: i64,
        #[arg(long)]
        base: Option<f64>,
        #[arg(long)]
        bonus: Option<f64>,
        #[arg(long)]
        deductions: Option<f64>,
    },
    /// Mark a payroll paid.
    Pay { id: i64 },
    /// List payrolls.
    List {
        #[arg(long)]
        employee: Option<i64>,
        #[arg(long)]
        status: Option<String>,
    },
}
