use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "shift-calc")]
#[command(about = "Shift length, day counts, and pomodoro planning")]
#[command(long_about = "shift-calc - shift arithmetic from the command line

Times are HH:MM (24-hour), dates are YY/MM/DD. An end time earlier than
the start is read as the next day; an end date earlier than the start is
read as the next year.

EXAMPLES:
  shift-calc time 22:00 06:00              Overnight shift
  shift-calc time 09:00 17:00 --break 1:00 Gross and net hours
  shift-calc date 24/12/20 25/01/05        Days across new year
  shift-calc pomodoro 09:00 17:00 --break 1:00 --gtd 2")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Time between two clock times, with and without a break
    Time {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
        /// Break length (HH:MM)
        #[arg(short, long = "break", default_value = "0:00")]
        brk: String,
    },

    /// Days between two dates
    Date {
        /// Start date (YY/MM/DD)
        start: String,
        /// End date (YY/MM/DD)
        end: String,
    },

    /// Split a working window into 30-minute pomodoro units
    ///
    /// GTD count and ratios that do not parse fall back to their defaults
    /// (1, 0.85, 0.65) with a warning instead of failing.
    Pomodoro {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
        /// Break length (HH:MM)
        #[arg(short, long = "break", default_value = "0:00")]
        brk: String,
        /// Units reserved for GTD tasks
        #[arg(
            long,
            env = "SHIFT_CALC_GTD",
            default_value = "1",
            allow_hyphen_values = true
        )]
        gtd: String,
        /// Productive share of the work minutes
        #[arg(
            long,
            env = "SHIFT_CALC_EFFICIENCY",
            default_value = "0.85",
            allow_hyphen_values = true
        )]
        efficiency: String,
        /// Main-project share of post-GTD minutes
        #[arg(
            long = "main",
            env = "SHIFT_CALC_MAIN_RATIO",
            default_value = "0.65",
            allow_hyphen_values = true
        )]
        main_ratio: String,
    },
}
