//! Interactive fleet menu
//!
//! Thin caller layer around [`Fleet`]: it parses input, invokes core
//! operations and renders their results. Every core error is caught,
//! printed and the loop continues; the core itself never prints.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::container::SerialId;
use crate::error::{FleetError, Result};
use crate::fleet::Fleet;
use crate::output::{format_fleet, OutputFormat};

pub fn run_menu(format: OutputFormat) -> Result<()> {
    let mut rl =
        DefaultEditor::new().map_err(|e| FleetError::Io(std::io::Error::other(e)))?;
    let mut fleet = Fleet::new();

    println!("Stevedore v{} - Fleet Menu", env!("CARGO_PKG_VERSION"));
    println!("Choose 0 or press Ctrl-D to quit\n");

    loop {
        println!("{}", format_fleet(&fleet.describe(), &format));
        print_actions();

        let choice = match rl.readline("Choose an action: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        };
        if !choice.is_empty() {
            let _ = rl.add_history_entry(&choice);
        }

        let result = match choice.as_str() {
            "1" => add_vessel(&mut rl, &mut fleet),
            "2" => remove_vessel(&mut rl, &mut fleet),
            "3" => add_container(&mut rl, &mut fleet),
            "4" => remove_container(&mut rl, &mut fleet),
            "5" => load_container(&mut rl, &mut fleet),
            "6" => unload_container(&mut rl, &mut fleet),
            "7" => place_container(&mut rl, &mut fleet),
            "8" => remove_from_vessel(&mut rl, &mut fleet),
            "9" => transfer_container(&mut rl, &mut fleet),
            "0" | "q" | "quit" | "exit" => break,
            "" => continue,
            other => Err(FleetError::InvalidArgument(format!(
                "unknown action '{}'",
                other
            ))),
        };

        match result {
            Ok(message) => println!("{}\n", message),
            Err(e) => eprintln!("Error: {}\n", e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_actions() {
    println!(
        "Actions:\n\
         1. Add vessel\n\
         2. Scrap vessel (containers aboard become free)\n\
         3. Add container\n\
         4. Delete container (free only)\n\
         5. Load cargo into container\n\
         6. Unload container\n\
         7. Place container aboard vessel\n\
         8. Take container off vessel\n\
         9. Transfer container between vessels\n\
         0. Quit"
    );
}

fn add_vessel(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let name = prompt(rl, "Vessel name: ")?;
    let speed = prompt_f64(rl, "Cruise speed (knots): ")?;
    let max_containers = prompt_usize(rl, "Max containers: ")?;
    let max_mass_tons = prompt_f64(rl, "Max total cargo mass (tons): ")?;
    fleet.add_vessel(&name, speed, max_containers, max_mass_tons)?;
    Ok(format!("Added vessel '{}'.", name))
}

fn remove_vessel(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let name = prompt(rl, "Vessel name: ")?;
    let detached = fleet.remove_vessel(&name)?;
    Ok(format!(
        "Scrapped vessel '{}'; {} container(s) returned to the free pool.",
        name,
        detached.len()
    ))
}

fn add_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let capacity = prompt_f64(rl, "Max capacity (kg): ")?;
    let serial = fleet.new_container(capacity)?;
    Ok(format!("Added container {}.", serial))
}

fn remove_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let serial = prompt_serial(rl)?;
    fleet.remove_container(serial)?;
    Ok(format!("Deleted container {}.", serial))
}

fn load_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let serial = prompt_serial(rl)?;
    let amount = prompt_f64(rl, "Cargo mass to load (kg): ")?;
    fleet.load_container(serial, amount)?;
    let info = fleet.describe_container(serial)?;
    Ok(format!(
        "Loaded {} kg into {} (now {}/{} kg).",
        amount, serial, info.current_load_kg, info.max_capacity_kg
    ))
}

fn unload_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let serial = prompt_serial(rl)?;
    fleet.unload_container(serial)?;
    Ok(format!("Container {} unloaded.", serial))
}

fn place_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let name = prompt(rl, "Vessel name: ")?;
    let serial = prompt_serial(rl)?;
    fleet.place_container(serial, &name)?;
    Ok(format!("Container {} placed aboard '{}'.", serial, name))
}

fn remove_from_vessel(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    let name = prompt(rl, "Vessel name: ")?;
    let serial = prompt_serial(rl)?;
    fleet.remove_from_vessel(&name, serial)?;
    Ok(format!("Container {} taken off '{}'.", serial, name))
}

fn transfer_container(rl: &mut DefaultEditor, fleet: &mut Fleet) -> Result<String> {
    if fleet.vessels().len() < 2 {
        return Err(FleetError::InvalidArgument(
            "need at least two vessels to transfer".to_string(),
        ));
    }
    let source = prompt(rl, "Source vessel: ")?;
    let dest = prompt(rl, "Destination vessel: ")?;
    let serial = prompt_serial(rl)?;
    fleet.transfer_container(serial, &source, &dest)?;
    Ok(format!(
        "Container {} transferred from '{}' to '{}'.",
        serial, source, dest
    ))
}

fn prompt(rl: &mut DefaultEditor, message: &str) -> Result<String> {
    match rl.readline(message) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(
            FleetError::InvalidArgument("input cancelled".to_string()),
        ),
        Err(err) => Err(FleetError::Io(std::io::Error::other(err))),
    }
}

fn prompt_f64(rl: &mut DefaultEditor, message: &str) -> Result<f64> {
    let raw = prompt(rl, message)?;
    raw.parse::<f64>()
        .map_err(|_| FleetError::InvalidArgument(format!("'{}' is not a number", raw)))
}

fn prompt_usize(rl: &mut DefaultEditor, message: &str) -> Result<usize> {
    let raw = prompt(rl, message)?;
    raw.parse::<usize>()
        .map_err(|_| FleetError::InvalidArgument(format!("'{}' is not a whole number", raw)))
}

fn prompt_serial(rl: &mut DefaultEditor) -> Result<SerialId> {
    prompt(rl, "Container serial: ")?.parse()
}
