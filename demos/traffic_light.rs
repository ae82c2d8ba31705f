//! Traffic Light State Machine
//!
//! This example drives a cyclic machine from a fixed-step host loop.
//!
//! Key concepts:
//! - Handlers and guards resolved by name on a target
//! - Time deltas accumulated by `in_state` handlers
//! - One transition per tick, always ending with `in_state`
//!
//! Run with: cargo run --example traffic_light

use std::sync::Arc;
use tickfsm::builder::MachineBuilder;
use tickfsm::state_enum;
use tickfsm::target::{Dispatch, GuardFn, HandlerFn};
use tickfsm::Target;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

struct Intersection {
    phase_time: f64,
    cars_passed: u32,
    dispatch: Arc<Dispatch<Intersection>>,
}

impl Target for Intersection {
    fn handler(&self, name: &str) -> Option<HandlerFn<Self>> {
        self.dispatch.handler(name)
    }

    fn guard(&self, name: &str) -> Option<GuardFn<Self>> {
        self.dispatch.guard(name)
    }
}

fn reset_phase(intersection: &mut Intersection, _dt: f64) {
    intersection.phase_time = 0.0;
}

fn tick(intersection: &mut Intersection, dt: f64) {
    intersection.phase_time += dt;
}

fn dispatch() -> Dispatch<Intersection> {
    Dispatch::new()
        .on("on_entry_Red", reset_phase)
        .on("on_entry_Green", reset_phase)
        .on("on_entry_Yellow", reset_phase)
        .on("in_state_Red", tick)
        .on("in_state_Yellow", tick)
        .on("in_state_Green", |i: &mut Intersection, dt| {
            i.phase_time += dt;
            i.cars_passed += 1;
        })
        .check("check_red_elapsed", |i: &mut Intersection| i.phase_time >= 3.0)
        .check("check_green_elapsed", |i: &mut Intersection| i.phase_time >= 4.0)
        .check("check_yellow_elapsed", |i: &mut Intersection| i.phase_time >= 1.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let intersection = Intersection {
        phase_time: 0.0,
        cars_passed: 0,
        dispatch: Arc::new(dispatch()),
    };

    let mut machine = MachineBuilder::new(intersection)
        .initial(TrafficLight::Red)
        .add_transition(TrafficLight::Red, TrafficLight::Green, "red_elapsed")
        .add_transition(TrafficLight::Green, TrafficLight::Yellow, "green_elapsed")
        .add_transition(TrafficLight::Yellow, TrafficLight::Red, "yellow_elapsed")
        .build()?;

    let dt = 0.5;
    for step in 0..24 {
        machine.process(dt)?;
        println!(
            "tick {step:>2}: {:<8} phase_time={:.1}",
            machine.state().to_string(),
            machine.target().phase_time
        );
    }

    println!("\nCars passed on green: {}", machine.target().cars_passed);
    println!("Transitions fired: {}", machine.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
