//! Simulation constants and tuning parameters.

/// Simulation tick rate (iterations per second).
pub const GAME_SPEED: u64 = 30;

/// Fraction of the speed value moved per tick.
pub const MOVE_PER_TICK: f64 = 0.02;

// --- World bounds ---

/// Default world width in blocks (28 * 64 = 1792 px).
pub const WORLD_X_WIDTH: i32 = 28;

/// Default world height in blocks (15 * 64 = 960 px).
pub const WORLD_Y_HEIGHT: i32 = 15;

/// Edge length of one block (tanks, rocks, bases).
pub const BLOCK_SIZE: i32 = 64;

/// Body radius of every tank-like object.
pub const BLOCK_RADIUS: i32 = BLOCK_SIZE / 2;

/// Diameter of a projectile.
pub const BALL_SIZE: i32 = 20;

/// Radius of a projectile. Also the minimum blast radius.
pub const BALL_RADIUS: i32 = BALL_SIZE / 2;

// --- Weapons ---

/// Ticks an exploded projectile stays in the world for the blast animation.
pub const SHOW_EXPLOSION_ITERATIONS: u32 = 10;

/// Cannon: fast, direct fire, collides with the first tank in its path.
pub const CANNON_RANGE: i32 = 338;
pub const CANNON_PREP_TIME: u64 = 800 * GAME_SPEED / 1000;
pub const CANNON_RELOAD_TIME: u64 = 3000 * GAME_SPEED / 1000;
pub const CANNON_PROJECTILE_SPEED: i32 = 600;
pub const CANNON_DAMAGE_FACTOR: f64 = 1.5;

/// Artillery: slow, indirect fire, explodes at the end of its flight.
pub const ARTILLERY_RANGE: i32 = 736;
pub const ARTILLERY_PREP_TIME: u64 = 8000 * GAME_SPEED / 1000;
pub const ARTILLERY_RELOAD_TIME: u64 = 6000 * GAME_SPEED / 1000;
pub const ARTILLERY_PROJECTILE_SPEED: i32 = 300;
pub const ARTILLERY_DAMAGE_FACTOR: f64 = 0.9;
pub const ARTILLERY_AOE_RADIUS: i32 = BLOCK_RADIUS * 7 / 4;

/// Rocket launcher: invested damage shortens the reload instead.
pub const ROCKETS_RANGE: i32 = 387;
pub const ROCKETS_PREP_TIME: u64 = 8000 * GAME_SPEED / 1000;
pub const ROCKETS_MIN_RELOAD_MS: i32 = 600;
pub const ROCKETS_MAX_RELOAD_MS: i32 = 2000;
pub const ROCKETS_MAX_DAMAGE: i32 = 20;
pub const ROCKETS_PROJECTILE_SPEED: i32 = 300;
pub const ROCKETS_AOE_RADIUS: i32 = BLOCK_RADIUS;

// --- Tank attributes ---

/// Rotation delay in ticks (~467 ms).
pub const TANK_ROTATION_DELAY: u64 = 467 * GAME_SPEED / 1000;

/// Total points split between armor, damage and speed.
pub const TANK_BUDGET: i32 = 100;

/// Minimum pre-bonus speed.
pub const TANK_MIN_SPEED: i32 = 25;
pub const TANK_MIN_ARMOR: i32 = 5;
pub const TANK_MAX_ARMOR: i32 = 55;
pub const TANK_MIN_DAMAGE: i32 = 15;
pub const TANK_MAX_DAMAGE: i32 = 70;

/// Health of a freshly built tank.
pub const TANK_START_HEALTH: i32 = 100;

/// Scale of the speed bonus `(speed - TANK_MIN_SPEED)^6 * factor`.
pub const TANK_SPEED_BONUS_FACTOR: f64 = 0.000_000_000_7;

/// Health assigned to a tank taken out of the world by damage or `remove`.
pub const HEALTH_REMOVED: i32 = -1;

// --- Headings (degrees, 0 = North, clockwise) ---

pub const NORTH: i32 = 0;
pub const NORTHEAST: i32 = 45;
pub const EAST: i32 = 90;
pub const SOUTHEAST: i32 = 135;
pub const SOUTH: i32 = 180;
pub const SOUTHWEST: i32 = 225;
pub const WEST: i32 = 270;
pub const NORTHWEST: i32 = 315;

/// Degrees turned by a single left/right command.
pub const ROTATION_STEP: i32 = 45;

// --- Economy ---

/// Price of a bought tank (equals the point budget).
pub const TANK_PRICE: f64 = TANK_BUDGET as f64;

/// Cash generated per tick by each base (100 per 2 minutes at 30 Hz).
pub const CASH_PER_TICK: f64 = 100.0 / 3600.0;

/// Spawn attempts around the home base before a purchase fails.
pub const SPAWN_ATTEMPTS: u32 = 1000;

/// Half edge of the spawn square around the base, in pixels.
pub const SPAWN_HALF_EXTENT: i32 = 2 * BLOCK_SIZE;

// --- Targeting ---

/// Tolerance for |dx| - |dy| when checking diagonal alignment.
pub const DIAGONAL_TOLERANCE: f64 = (BLOCK_RADIUS + BALL_RADIUS + 10) as f64;

/// First id handed out by a world. Ids are unique per world.
pub const FIRST_TANK_ID: u64 = 1235;
