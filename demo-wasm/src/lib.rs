use gardenwise::{GardenConfig, Simulation};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Demo {
    sim: Simulation<SmallRng>,
}

#[wasm_bindgen]
impl Demo {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<Demo, JsError> {
        let sim = Simulation::new(GardenConfig::default(), SmallRng::seed_from_u64(seed))
            .map_err(|err| JsError::new(&err.to_string()))?;
        Ok(Self { sim })
    }

    pub fn tick(&mut self) {
        self.sim.step();
    }

    pub fn run(&mut self, frames: u32) {
        self.sim.run(u64::from(frames));
    }

    /// Text frame for the page: one `KEY:values` record per line.
    pub fn render(&self) -> String {
        let garden = self.sim.garden();
        let robot = &garden.robot;
        let layout = &self.sim.config().layout;

        let mut out = String::new();
        out.push_str(&format!("FRAME:{}\n", self.sim.frame()));
        out.push_str(&format!("CANVAS:{},{}\n", layout.width, layout.height));
        out.push_str(&format!("CLOCK:{:.2}\n", garden.clock));
        out.push_str(&format!(
            "CHARGER:{:.0},{:.0}\n",
            garden.charging_station.x, garden.charging_station.y
        ));
        out.push_str(&format!(
            "WATER:{:.0},{:.0}\n",
            garden.water_station.x, garden.water_station.y
        ));
        out.push_str(&format!(
            "ROBOT:{:.1},{:.1},{:.3}\n",
            robot.position.x, robot.position.y, robot.theta
        ));
        out.push_str(&format!("ACTIVITY:{}\n", robot.activity));
        match robot.target {
            Some(id) => out.push_str(&format!("TARGET:{}\n", id.0)),
            None => out.push_str("TARGET:-\n"),
        }
        out.push_str(&format!("PLANTS:{}\n", garden.plants.len()));
        for plant in &garden.plants {
            out.push_str(&format!(
                "P:{:.0},{:.0},{:.1}\n",
                plant.position.x, plant.position.y, plant.thirst
            ));
        }
        out.push_str(&format!("HUD:{}\n", self.sim.hud()));
        out
    }

    /// Lets the page dry out a plant by hand.
    pub fn set_thirst(&mut self, index: usize, thirst: f32) {
        if !thirst.is_finite() {
            return;
        }
        if let Some(plant) = self.sim.garden_mut().plants.get_mut(index) {
            plant.thirst = thirst.clamp(0.0, 100.0);
        }
    }

    pub fn frame(&self) -> u64 {
        self.sim.frame()
    }
}
