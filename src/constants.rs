/// Timing, scene and rendering tuning constants.
///
/// These keep magic numbers out of the shell, scene and renderer so the
/// visual behavior can be read in one place.

// Splash / shell timing
pub const SPLASH_DELAY_MS: f64 = 2500.0;
pub const SPLASH_FADE_MS: i32 = 1000;
pub const TICK_THROTTLE_MS: f64 = 50.0;

// Camera
pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Core polyhedra
pub const INNER_RADIUS: f32 = 2.5;
pub const INNER_DETAIL: u32 = 0;
pub const OUTER_RADIUS: f32 = 3.2;
pub const OUTER_DETAIL: u32 = 1;

// Angular rates (radians per second of elapsed time)
pub const INNER_SPIN_X: f32 = 0.12;
pub const INNER_SPIN_Y: f32 = 0.18;
pub const OUTER_SPIN_Y: f32 = -0.10;
pub const OUTER_SPIN_Z: f32 = -0.06;

// Float wrapper around the core
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.3;
pub const FLOAT_INTENSITY: f32 = 0.5;

// Pointer parallax
pub const PARALLAX_DIVISOR: f32 = 12.0; // target = pointer * viewport / divisor
pub const PARALLAX_TILT: f32 = 0.1; // radians at the viewport edge
pub const POSITION_LERP: f32 = 0.04;
pub const ROTATION_LERP: f32 = 0.03;

// Dust field
pub const DUST_COUNT: usize = 1000;
pub const DUST_EXTENT: f32 = 40.0; // cube edge, centered on origin
pub const DUST_MAX_SCALE: f32 = 0.02;
pub const DUST_OPACITY: f32 = 0.15;

// Palette
pub const CLEAR_RGB: [f32; 3] = [0.0196, 0.0196, 0.0196]; // #050505
pub const GOLD_RGB: [f32; 3] = [0.831, 0.686, 0.216]; // #d4af37
pub const SHELL_OPACITY: f32 = 0.3;
pub const CORE_EMISSIVE: f32 = 0.1;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_INTENSITY: f32 = 50.0;
pub const FILL_LIGHT_POS: [f32; 3] = [-10.0, -5.0, 0.0];
pub const FILL_LIGHT_INTENSITY: f32 = 30.0;

// Surface quality
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;
pub const PERFORMANCE_MIN: f64 = 0.5;
pub const FRAME_BUDGET_SEC: f32 = 1.0 / 30.0;
pub const SLOW_FRAMES_TO_REGRESS: u32 = 3;
pub const REGRESS_DEBOUNCE_SEC: f32 = 0.2;

// Scroll layout
pub const SCROLL_DAMPING_SEC: f32 = 0.12;
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Remote assets and links
pub const PROFILE_IMAGE_URL: &str = "https://lh3.googleusercontent.com/d/1ZJqe8LnB8KUTg43KHd3CpiJ02x_wClKq";
pub const PROFILE_IMAGE_FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?q=80&w=1000&auto=format&fit=crop";
pub const SOCIAL_PROFILE_URL: &str = "https://www.facebook.com/profile.php?id=61583954032961";
