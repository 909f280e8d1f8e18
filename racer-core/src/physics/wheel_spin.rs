// Cosmetic roll angle shared by every wheel mesh. It only ever reads the
// integrator's speed and never feeds back into the simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelSpin {
    angle: f64,
}

impl WheelSpin {
    pub fn new() -> Self {
        WheelSpin { angle: 0.0 }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    // negative because forward travel rolls the wheels towards -z
    pub fn accumulate(&mut self, speed: f64, spin_rate: f64) -> f64 {
        self.angle += -speed * spin_rate;
        self.angle
    }
}
