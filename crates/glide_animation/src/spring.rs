//! Spring physics animation
//!
//! RK4-integrated damped spring. Configurations are usually built from the
//! friction/tension pair that slider and animation configs expose, using the
//! origami conversion to physical stiffness and damping.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may come to rest
    pub rest_displacement_threshold: f32,
    /// Speed below which the spring may come to rest
    pub rest_speed_threshold: f32,
    /// Snap to the target instead of overshooting it
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
            overshoot_clamping: false,
        }
    }

    /// Build from origami-style tension and friction
    ///
    /// `stiffness = (tension - 30) * 3.62 + 194`,
    /// `damping = (friction - 8) * 3 + 25`, unit mass.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        let stiffness = (tension - 30.0) * 3.62 + 194.0;
        let damping = (friction - 8.0) * 3.0 + 25.0;
        Self::new(stiffness, damping, 1.0)
    }

    pub fn with_rest_thresholds(mut self, displacement: f32, speed: f32) -> Self {
        self.rest_displacement_threshold = displacement;
        self.rest_speed_threshold = speed;
        self
    }

    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    /// Friction 7, tension 100
    fn default() -> Self {
        Self::from_tension_friction(100.0, 7.0)
    }
}

/// Largest integration step, in seconds
const MAX_STEP: f32 = 1.0 / 240.0;

/// Longest frame gap simulated in one call, in seconds
const MAX_FRAME: f32 = 0.064;

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    start: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            start: initial,
        }
    }

    /// Start with an initial velocity (units per second)
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.start = self.value;
        self.target = target;
    }

    /// Check if the spring has settled (within thresholds of target)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_displacement_threshold
            && self.velocity.abs() <= self.config.rest_speed_threshold
    }

    fn has_overshot(&self) -> bool {
        if self.start < self.target {
            self.value > self.target
        } else if self.start > self.target {
            self.value < self.target
        } else {
            false
        }
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Long frames are capped and split into fixed substeps so a stalled
    /// host frame cannot destabilize the integration.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.integrate(h);
            remaining -= h;

            if self.config.overshoot_clamping && self.has_overshot() {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn integrate(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
