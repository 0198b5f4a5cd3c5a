// Tick and timing
pub const REAL_TICK_INTERVAL_MS: u64 = 250;
pub const VIRTUAL_MS_PER_TICK: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;
pub const SPEED_PRESETS: [u32; 4] = [0, 1, 50, 500];

// Starting conditions (2075-04-12 06:00 UTC)
pub const START_YEAR: i32 = 2075;
pub const START_MONTH: u32 = 4;
pub const START_DAY: u32 = 12;
pub const START_HOUR: u32 = 6;
pub const STARTING_CASH: u64 = 250;
pub const STARTING_LIFESTYLE: u8 = 2;
pub const STARTING_GLOBAL_RADIATION: f64 = 15.0;
pub const STARTING_BOUNTIES: usize = 2;

// Terminal log
pub const LOG_CAPACITY: usize = 50;

// Character attributes and skills
pub const NUM_SPECIAL: usize = 7;
pub const NUM_SKILLS: usize = 6;
pub const MIN_ATTRIBUTE: u32 = 1;
pub const MAX_ATTRIBUTE: u32 = 10;
pub const MAX_SKILL: u32 = 100;
pub const SKILL_POINT_STEP: u32 = 5;

// Levels: LEVEL_THRESHOLDS[level] is the total XP needed to leave `level`
pub const LEVEL_THRESHOLDS: [u64; 16] = [
    0, 100, 300, 600, 1000, 1500, 2200, 3000, 4000, 5500, 7500, 10000, 15000, 22000, 30000, 50000,
];
pub const POINTS_EVERY_N_LEVELS: u32 = 5;

// Hacking
pub const BASE_HACK_SPEED: f64 = 0.05;
pub const INT_SPEED_FACTOR: f64 = 0.1;
pub const HACK_COMPLETE: f64 = 100.0;
pub const PHASE_FAIL_PROGRESS_PENALTY: f64 = 5.0;
pub const CRIT_FAIL_THRESHOLD: u32 = 25;
pub const FAIL_HEAT: f64 = 5.0;
pub const CRIT_FAIL_HEAT: f64 = 20.0;
pub const TECHNIQUE_EVENT_CHANCE: f64 = 0.1;
pub const LUCK_CRIT_FACTOR: f64 = 0.02;
pub const SPEECH_CASH_FACTOR: f64 = 0.01;
pub const CASH_PER_LEVEL: f64 = 20.0;
pub const CASH_PER_DIFFICULTY: f64 = 10.0;
pub const BASE_HACK_XP: f64 = 20.0;
pub const XP_PER_DIFFICULTY: f64 = 5.0;
pub const INT_XP_FACTOR: f64 = 0.05;
pub const SUCCESS_HEAT_RELIEF: f64 = 20.0;
pub const REPUTATION_PER_HACK: u32 = 1;
pub const MAX_REPUTATION: u32 = 1000;
pub const FAIL_TRACE: f64 = 1.0;
pub const CRIT_FAIL_TRACE: f64 = 5.0;
pub const TRACE_WARNING_LEVEL: f64 = 50.0;
pub const TRACE_WARNING_CHANCE: f64 = 0.2;
/// Share of cash seized when a corporation completes its trace
pub const TRACE_SEIZURE_FRACTION: f64 = 0.2;

// Heat and lockout
pub const MAX_HEAT: f64 = 100.0;
pub const AGILITY_HEAT_DECAY: f64 = 0.05;
pub const LOCKOUT_BASE_MS: i64 = 30_000;
pub const LOCKOUT_MIN_MS: i64 = 5_000;
pub const LOCKOUT_MS_PER_ENDURANCE: i64 = 2_000;

// Economy
pub const DAILY_RADIATION_DRIFT_CHANCE: f64 = 0.3;
pub const DAILY_RADIATION_DRIFT: f64 = 0.5;
pub const MARKET_FLUX_RANGE: f64 = 0.1;
pub const MIN_STOCK_PRICE: f64 = 1.0;
pub const INITIAL_STOCK_PRICE_MIN: f64 = 10.0;
pub const INITIAL_STOCK_PRICE_SPREAD: f64 = 200.0;
pub const TRACE_DECAY_PER_HOUR: f64 = 1.0;
pub const MAX_TRACE: f64 = 100.0;
pub const BASE_PERFORMANCE: f64 = 15.0;
pub const PERFORMANCE_PER_GRADE: f64 = 2.0;
pub const DEMOTION_THRESHOLD: f64 = 10.0;
pub const ECONOMY_SHIFT_CHANCE: f64 = 0.3;
pub const BASE_WAGE: f64 = 10.0;
pub const CHARISMA_WAGE_FACTOR: f64 = 0.05;
pub const MAX_JOB_GRADE: u32 = 10;
pub const BARTER_DISCOUNT_FACTOR: f64 = 0.01;
pub const SHARES_PER_LEVEL: u32 = 10;

// Bounties
pub const MAX_ACTIVE_BOUNTIES: usize = 3;
pub const BOUNTY_SPAWN_CHANCE: f64 = 0.3;
pub const BOUNTY_REWARD_PER_LEVEL: u64 = 100;
pub const BIG_BOUNTY_CHANCE: f64 = 0.2;
pub const BIG_BOUNTY_BONUS: u64 = 500;
pub const BOUNTY_REWARD_JITTER: f64 = 200.0;
pub const BOUNTY_MIN_DAYS: f64 = 1.0;
pub const BOUNTY_MAX_DAYS: f64 = 7.0;

// Radiation and mutations
pub const MAX_GLOBAL_RADIATION: f64 = 100.0;
pub const MAX_PLAYER_RADIATION: f64 = 1000.0;
pub const RADIATION_EXPOSURE_CHANCE: f64 = 0.5;
pub const RADIATION_EXPOSURE_DIVISOR: f64 = 10.0;
pub const MUTATION_RADIATION_STEP: f64 = 200.0;
pub const MUTATION_CHANCE: f64 = 0.5;

// Peers
pub const MAX_PEERS: usize = 8;
pub const PEER_SPAWN_CHANCE: f64 = 0.02;
pub const PEER_HEAT_CHANCE: f64 = 0.15;
pub const PEER_HEAT_GAIN: f64 = 8.0;
pub const PEER_HELP_THRESHOLD: f64 = 80.0;
pub const PEER_ACTIVITY_REFRESH_CHANCE: f64 = 0.05;
pub const PEER_AID_REWARD: u64 = 100;
pub const PEER_MAX_LEVEL: u32 = 20;
pub const PEER_MAX_START_HEAT: f64 = 30.0;

// Achievement thresholds
pub const MILLIONAIRE_CASH: u64 = 1_000_000;
pub const GHOST_LEVEL: u32 = 10;
pub const GLOWING_SEA_RADIATION: f64 = 50.0;
pub const MARKET_MOVER_SHARES: u32 = 100;

// Save file
pub const SAVE_HEADER_MAGIC: &str = "WIREFRAME1";
pub const SAVE_FILE_NAME: &str = "wireframe.sav";
