use anyhow::Result;
use colored::Colorize;
use person_api::Person;

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

fn field(label: &str, value: &str) {
    let value = if value.is_empty() { "-" } else { value };
    println!("  {:<12} {}", format!("{label}:").dimmed(), value);
}

pub fn person(id: u64, person: &Person, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(person)?);
        return Ok(());
    }

    header(&format!("#{id} {}", person.name));
    field("height", &person.height);
    field("mass", &person.mass);
    field("hair", &person.hair_color);
    field("born", &person.birth_year);
    field("gender", &person.gender);
    field("homeworld", &person.homeworld_url);
    field("films", &person.film_urls.len().to_string());
    field("vehicles", &person.vehicle_urls.len().to_string());
    field("starships", &person.starship_urls.len().to_string());
    Ok(())
}
