use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::features::catalog::ItemCatalogClient;
use crate::features::geodata::GeoDataClient;
use crate::features::geolocation::GeolocationProbe;
use crate::features::registration::services::{
    DraftValidator, RegistrationSession, SubmissionAssembler,
};
use crate::modules::attachments;
use crate::shared::types::{Coordinate, FetchState};

/// Parse a "lat,lng" pin placement entered by the user
fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let (lat, lng) = input.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    Some(Coordinate::new(lat, lng))
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::Internal(format!("Prompt failed: {}", e))
}

/// Drive one registration form session from mount to submission.
///
/// The wizard mirrors the registration page: contact fields, address (map pin
/// plus cascading region/sub-region selects), category multi-select, optional
/// image, then the validated submit.
pub async fn run_form(
    config: &Config,
    geodata: &GeoDataClient,
    catalog_client: &ItemCatalogClient,
    probe: &GeolocationProbe,
    assembler: &SubmissionAssembler,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = RegistrationSession::new(&config.map);

    println!("Register a collection point\n");

    // Mount: the three independent fetches run concurrently
    let (regions, catalog, position) = tokio::join!(
        geodata.fetch_regions(),
        catalog_client.fetch_catalog(),
        probe.request_current_position()
    );
    session.mount(
        FetchState::from_result(regions),
        FetchState::from_result(catalog),
        FetchState::from_result(position),
    );

    // Contact data. Empty answers are allowed here; the validation gate
    // reports missing fields before anything is submitted.
    let name: String = Input::with_theme(&theme)
        .with_prompt("Entity name")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    session.set_name(name);

    let email: String = Input::with_theme(&theme)
        .with_prompt("E-mail")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    session.set_email(email);

    let whatsapp: String = Input::with_theme(&theme)
        .with_prompt("WhatsApp")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    session.set_whatsapp(whatsapp);

    // Address: map pin first, then the region cascade
    println!("\nSelect the address on the map");
    let center = session.map().center();
    println!(
        "  viewport: {}, {} (zoom {})",
        center.lat,
        center.lng,
        session.map().zoom()
    );
    println!("  tile:     {}", session.map().center_tile_url());
    place_pin(&theme, &mut session)?;

    select_region(&theme, &mut session, geodata).await?;

    // Category multi-select
    select_categories(&theme, &mut session)?;

    // Optional image attachment
    let image_path: String = Input::with_theme(&theme)
        .with_prompt("Image path (empty for none)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    if !image_path.trim().is_empty() {
        match attachments::load_image(Path::new(image_path.trim()), &config.attachment).await {
            Ok(image) => {
                session.attach_image(image);
                let keep = Confirm::with_theme(&theme)
                    .with_prompt("Keep this image attached?")
                    .default(true)
                    .interact()
                    .map_err(prompt_error)?;
                if !keep {
                    session.clear_image();
                }
            }
            Err(e) => println!("Image not attached: {}", e),
        }
    }

    // Summary + confirmation
    let pin = session.map().pin();
    println!("\nAbout to register:");
    println!("  name:       {}", session.contact().name);
    println!("  email:      {}", session.contact().email);
    println!("  whatsapp:   {}", session.contact().whatsapp);
    println!(
        "  address:    {} / {}",
        session.selected_region().unwrap_or("-"),
        session.selected_sub_region().unwrap_or("-")
    );
    println!("  pin:        {}, {}", pin.lat, pin.lng);
    println!("  categories: {}", session.selected_items().len());
    println!(
        "  image:      {}",
        session
            .image()
            .map(|i| i.file_name.as_str())
            .unwrap_or("none")
    );

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt("Submit registration?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;
    if !confirmed {
        println!("Registration cancelled");
        return Ok(());
    }

    // Validation gates submission: a failing draft never reaches the backend
    let draft = session.draft();
    if let Err(failures) = DraftValidator::check(&draft) {
        println!("\nInvalid fields:");
        for failure in failures {
            println!("  - {}", failure);
        }
        return Ok(());
    }

    session.begin_submit()?;
    match assembler.submit(&draft).await {
        Ok(()) => {
            session.finish();
            println!("\nCollection point registered!");
        }
        Err(e) => {
            session.fail(e.to_string());
            println!("\nSubmission failed: {}", e);
        }
    }

    Ok(())
}

/// Repeated pin placement; empty input keeps the current pin, last entry wins
fn place_pin(theme: &ColorfulTheme, session: &mut RegistrationSession) -> Result<()> {
    loop {
        let pin = session.map().pin();
        let input: String = Input::with_theme(theme)
            .with_prompt(format!(
                "Pin \"lat,lng\" (empty to keep {}, {})",
                pin.lat, pin.lng
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        if input.trim().is_empty() {
            return Ok(());
        }

        match parse_coordinate(&input) {
            Some(coord) => session.place_pin(coord),
            None => println!("Expected \"lat,lng\", e.g. -23.55, -46.63"),
        }
    }
}

/// Region select followed by the sub-region fetch keyed by the chosen region
async fn select_region(
    theme: &ColorfulTheme,
    session: &mut RegistrationSession,
    geodata: &GeoDataClient,
) -> Result<()> {
    let regions = match session.regions() {
        FetchState::Ready(regions) if !regions.is_empty() => regions.clone(),
        FetchState::Ready(_) => {
            println!("No regions available");
            return Ok(());
        }
        FetchState::Failed(reason) => {
            println!("Regions unavailable: {}", reason);
            return Ok(());
        }
        FetchState::Pending => {
            println!("Regions still loading");
            return Ok(());
        }
    };

    let index = Select::with_theme(theme)
        .with_prompt("Region")
        .items(&regions)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    session.select_region(regions[index].clone());

    // The sub-region fetch is only issued once a region is selected, and is
    // keyed by the region just chosen
    let region = regions[index].clone();
    let sub_regions = geodata.fetch_sub_regions(&region).await;
    session.set_sub_regions(FetchState::from_result(sub_regions));

    let sub_regions = match session.sub_regions() {
        FetchState::Ready(subs) if !subs.is_empty() => subs.clone(),
        FetchState::Ready(_) => {
            println!("No municipalities listed for {}", region);
            return Ok(());
        }
        FetchState::Failed(reason) => {
            println!("Municipalities unavailable: {}", reason);
            return Ok(());
        }
        FetchState::Pending => return Ok(()),
    };

    let index = Select::with_theme(theme)
        .with_prompt("Municipality")
        .items(&sub_regions)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    session.select_sub_region(sub_regions[index].clone());

    Ok(())
}

/// Category multi-select, reconciled through the session's toggle operation
fn select_categories(theme: &ColorfulTheme, session: &mut RegistrationSession) -> Result<()> {
    let items = match session.catalog() {
        FetchState::Ready(items) if !items.is_empty() => items.clone(),
        FetchState::Ready(_) => {
            println!("Category catalog is empty");
            return Ok(());
        }
        FetchState::Failed(reason) => {
            println!("Category catalog unavailable: {}", reason);
            return Ok(());
        }
        FetchState::Pending => {
            println!("Category catalog still loading");
            return Ok(());
        }
    };

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    let defaults: Vec<bool> = items
        .iter()
        .map(|i| session.is_item_selected(i.id))
        .collect();

    let chosen = MultiSelect::with_theme(theme)
        .with_prompt("Collection items (space toggles)")
        .items(&titles)
        .defaults(&defaults)
        .interact()
        .map_err(prompt_error)?;

    for (index, item) in items.iter().enumerate() {
        let wanted = chosen.contains(&index);
        if wanted != session.is_item_selected(item.id) {
            session.toggle_item(item.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_accepts_spaced_pairs() {
        assert_eq!(
            parse_coordinate("-23.55, -46.63"),
            Some(Coordinate::new(-23.55, -46.63))
        );
        assert_eq!(
            parse_coordinate("10,20"),
            Some(Coordinate::new(10.0, 20.0))
        );
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("10"), None);
        assert_eq!(parse_coordinate("a,b"), None);
        assert_eq!(parse_coordinate("10;20"), None);
    }
}
