//! Command-line configuration for the `puzzle_position` binary.
//!
//! Flags win over environment variables, which win over defaults.

pub const DEFAULT_LOG_FILTER: &str = "puzzle_position=info";

/// How many plies of the movetext to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlySelection {
    /// Apply exactly this many plies.
    Plies(usize),
    /// Zero-based index of the last move already played; applies one more.
    InitialPly(usize),
}

impl PlySelection {
    pub fn plies_to_apply(self) -> usize {
        match self {
            PlySelection::Plies(plies) => plies,
            PlySelection::InitialPly(initial_ply) => initial_ply.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `None` means "replay every move".
    pub ply: Option<PlySelection>,
    pub show_board: bool,
    pub log_filter: String,
    /// Movetext given on the command line; empty means read requests from stdin.
    pub movetext: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            ply: None,
            show_board: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            movetext: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load from the process arguments and environment.
    pub fn from_env() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args_and_env(&args, |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (without the program name) and an
    /// environment lookup.
    pub fn from_args_and_env(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let mut config = CliConfig::default();

        if let Some(ply) = env("PUZZLE_POSITION_PLY") {
            config.ply = Some(PlySelection::Plies(parse_count("PUZZLE_POSITION_PLY", &ply)?));
        }
        if let Some(board) = env("PUZZLE_POSITION_BOARD") {
            config.show_board = matches!(board.as_str(), "1" | "true" | "yes");
        }
        if let Some(filter) = env("RUST_LOG") {
            config.log_filter = filter;
        }

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--ply" => {
                    let value = iter.next().ok_or("--ply needs a value")?;
                    config.ply = Some(PlySelection::Plies(parse_count("--ply", value)?));
                }
                "--initial-ply" => {
                    let value = iter.next().ok_or("--initial-ply needs a value")?;
                    config.ply = Some(PlySelection::InitialPly(parse_count("--initial-ply", value)?));
                }
                "--board" => config.show_board = true,
                "--log-filter" => {
                    let value = iter.next().ok_or("--log-filter needs a value")?;
                    config.log_filter = value.clone();
                }
                other if other.starts_with("--") => {
                    return Err(format!("Unknown flag: {other}"));
                }
                _ => config.movetext.push(arg.clone()),
            }
        }

        Ok(config)
    }

    pub fn movetext(&self) -> Option<String> {
        (!self.movetext.is_empty()).then(|| self.movetext.join(" "))
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("Invalid value for {name}: {value}"))
}
