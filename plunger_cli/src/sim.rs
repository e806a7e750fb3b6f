use clap::{Args, ValueEnum};
use tsl1410r::{SensorIo, Tsl1410r, SENSOR_PIXEL_COUNT};
use utilities::{dark_profile, gradient_profile, shadow_profile, SimSensor};

#[derive(Args)]
pub struct SimConf {
    /// Simulated light profile cast on the array
    #[clap(long, value_enum, default_value_t)]
    pub profile: ProfileKind,

    /// Plunger position over its full travel, shadow profile only
    #[clap(long, value_parser = position_parser, default_value_t = 0.35)]
    pub position: f32,
}

fn position_parser(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| "not a number".to_string())?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err("position must be within 0.0..=1.0".to_string())
    }
}

#[derive(ValueEnum, Clone, Copy, Default)]
pub enum ProfileKind {
    /// Lit array with the plunger shadow edge at `--position`
    #[default]
    Shadow,
    /// Linear ramp from dark to bright, one step per pixel
    Gradient,
    /// Unlit sensor
    Dark,
}

impl ProfileKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ProfileKind::Shadow => "lit array with the plunger shadow edge at --position",
            ProfileKind::Gradient => "linear ramp from dark to bright, one step per pixel",
            ProfileKind::Dark => "unlit sensor, every pixel reads zero",
        }
    }
}

impl SimConf {
    pub fn open_sensor(&self) -> Tsl1410r<SimSensor> {
        let profile = match self.profile {
            ProfileKind::Shadow => shadow_profile(self.position),
            ProfileKind::Gradient => gradient_profile(),
            ProfileKind::Dark => dark_profile(),
        };
        SimSensor::new(profile).open_sensor()
    }

    /// Plunger position expressed as the state report's z axis, in pixels
    /// of travel along the array
    pub fn plunger_z(&self) -> i16 {
        (self.position.clamp(0.0, 1.0) * SENSOR_PIXEL_COUNT as f32) as i16
    }
}
