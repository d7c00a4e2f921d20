use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::assistant::Place,
    core::{battery::BatteryProfile, prediction::Prediction, weather::WeatherObservation},
    quantity::time::Hours,
};

pub const NEUTRAL_MESSAGE: &str = "Configure battery and allow location to see dashboard";
pub const LOCATING_STATUS: &str = "Locating…";

/// Runtime above which the situation is considered comfortable.
const COMFORTABLE_USAGE: Hours = Hours(5.0);

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_prediction_table(prediction: &Prediction) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Safe usage", "Battery", "Solar", "Effective", "Total", "Warning"]);
    table.add_row(vec![
        Cell::new(prediction.safe_usage)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if prediction.safe_usage > COMFORTABLE_USAGE { Color::Green } else { Color::Yellow }),
        Cell::new(prediction.available_energy).set_alignment(CellAlignment::Right),
        Cell::new(prediction.solar_gain)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
        Cell::new(prediction.effective_solar_gain).set_alignment(CellAlignment::Right),
        Cell::new(prediction.total_energy).set_alignment(CellAlignment::Right),
        prediction.warning.map_or_else(
            || Cell::new("None").fg(Color::Green),
            |warning| Cell::new(warning).fg(Color::Red),
        ),
    ]);
    table
}

pub fn build_weather_table(place_name: &str, weather: &WeatherObservation) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Solar", "Rain", "Temperature"]);
    table.add_row(vec![
        Cell::new(place_name),
        Cell::new(weather.solar_insolation).set_alignment(CellAlignment::Right),
        Cell::new(weather.precipitation)
            .set_alignment(CellAlignment::Right)
            .fg(if weather.is_raining() { Color::Red } else { Color::Reset }),
        Cell::new(weather.temperature).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_battery_table(battery: &BatteryProfile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Capacity", "Voltage", "Chemistry", "Available"]);
    table.add_row(vec![
        Cell::new(battery.capacity()).set_alignment(CellAlignment::Right),
        Cell::new(battery.voltage()).set_alignment(CellAlignment::Right),
        Cell::new(battery.chemistry()),
        Cell::new(battery.available_energy()).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_places_table(places: &[Place]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Place", "Link"]);
    for place in places {
        table.add_row(vec![
            Cell::new(&place.title),
            Cell::new(&place.uri).add_attribute(Attribute::Underlined),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::prediction::Warning, prelude::*, quantity::weather::Millimeters};

    #[test]
    fn prediction_table_ok() {
        let prediction = Prediction::new(
            &BatteryProfile::default(),
            &WeatherObservation::CLIMATOLOGICAL,
        );
        let table = build_prediction_table(&prediction).to_string();
        assert!(table.contains("32.7 h"), "{table}");
        assert!(table.contains("960 Wh"), "{table}");
        assert!(table.contains("None"), "{table}");
    }

    #[test]
    fn prediction_table_warning_ok() -> Result {
        let mut weather = WeatherObservation::CLIMATOLOGICAL;
        weather.precipitation = Millimeters(12.0);
        let prediction = Prediction::new(&BatteryProfile::default(), &weather);
        ensure!(prediction.warning == Some(Warning::HeavyRainNoSolar));
        let table = build_prediction_table(&prediction).to_string();
        assert!(table.contains("Heavy rain detected."), "{table}");
        Ok(())
    }
}
