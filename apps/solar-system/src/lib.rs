use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod builders;
pub mod controls;
pub mod game;
pub mod orbit;
pub mod registry;
use game::SolarSystem;

orrery_web::export_app!(SolarSystem, "solar-system", controls::bind);
