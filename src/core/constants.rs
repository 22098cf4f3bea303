// World dimensions (world units, y grows downward)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0;

// Avatar physics (units per tick, units per tick squared)
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = -10.0;

// Avatar geometry
pub const AVATAR_X: f64 = 100.0;
pub const AVATAR_WIDTH: f64 = 60.0;
pub const AVATAR_HEIGHT: f64 = 44.0;

// Pipe geometry and motion
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_SPEED: f64 = 5.0;
/// Minimum solid span kept above and below every gap.
pub const PIPE_MARGIN: u32 = 100;

// Difficulty ramp
pub const INITIAL_PIPE_GAP: u32 = 300;
pub const INITIAL_PIPE_DISTANCE: u32 = 300;
pub const MIN_PIPE_GAP: u32 = 100;
pub const MIN_PIPE_DISTANCE: u32 = 100;
pub const DIFFICULTY_INCREASE_INTERVAL_MS: u64 = 10_000;
pub const DIFFICULTY_INCREASE_AMOUNT: u32 = 10;

// Score board
pub const TOP_N_SCORES: usize = 5;

// Game timing
pub const TICK_RATE_HZ: u32 = 60;

// Files under ~/.flappy/
pub const DATA_DIR_NAME: &str = ".flappy";
pub const SCORE_HISTORY_FILE: &str = "score_history.txt";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
