use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::config::{init_data_dir, open_data_dir, Config};
use crate::entity::{validate_coordinates, Note, NoteDraft, NotePatch, DEFAULT_DESCRIPTION};
use crate::error::{NoteMapError, Result};
use crate::storage::FileBackend;
use crate::store::{NoteStore, SeedOutcome};

fn open_store(data_dir: &Path) -> Result<(NoteStore<FileBackend>, Config)> {
    let config = open_data_dir(data_dir)?;
    let store = NoteStore::new(Arc::new(FileBackend::new(data_dir)));
    Ok((store, config))
}

fn print_note_line(note: &Note) {
    println!(
        "  {} [{:.5}, {:.5}] {}",
        note.id, note.latitude, note.longitude, note.title
    );
}

fn print_note_detail(note: &Note) {
    println!("{}", note.title);
    println!("  id:          {}", note.id);
    println!("  position:    {:.6}, {:.6}", note.latitude, note.longitude);
    println!("  description: {}", note.description);
    if let Some(ref date) = note.date {
        println!("  date:        {}", date);
    }
    if let Some(ref image) = note.image_uri {
        println!("  image:       {}", image);
    }
}

pub fn handle_init(data_dir: &Path) -> Result<()> {
    init_data_dir(data_dir)?;
    println!("Initialized notemap data directory in {}", data_dir.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_add(
    data_dir: &Path,
    title: String,
    lat: f64,
    lon: f64,
    description: String,
    date: Option<String>,
    image: Option<String>,
    json: bool,
) -> Result<()> {
    let (store, config) = open_store(data_dir)?;

    let new_note = NoteDraft {
        title,
        description,
        date,
        image_uri: image,
        latitude: lat,
        longitude: lon,
    }
    .normalize()?;

    if config.seed_on_first_run {
        if let SeedOutcome::Seeded(samples) = store.seed_once(lat, lon).await? {
            if !json {
                println!("Added {} sample notes nearby", samples.len());
            }
        }
    }

    let note = store.create_note(new_note).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", note.id, note.title);
    }
    Ok(())
}

pub async fn handle_list(data_dir: &Path, json: bool) -> Result<()> {
    let (store, _) = open_store(data_dir)?;
    let notes = store.load_notes().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes ({}):\n", notes.len());
        for note in &notes {
            print_note_line(note);
        }
    }
    Ok(())
}

pub async fn handle_show(data_dir: &Path, id: String, json: bool) -> Result<()> {
    let (store, _) = open_store(data_dir)?;
    let note = store
        .get_note(&id)
        .await?
        .ok_or(NoteMapError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        print_note_detail(&note);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_update(
    data_dir: &Path,
    id: String,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    image: Option<String>,
    clear_image: bool,
    lat: Option<f64>,
    lon: Option<f64>,
    json: bool,
) -> Result<()> {
    let (store, _) = open_store(data_dir)?;

    let title = match title.map(|t| t.trim().to_string()) {
        Some(t) if t.is_empty() => {
            return Err(NoteMapError::InvalidNote("title is required".to_string()))
        }
        other => other,
    };
    let description = description.map(|d| match d.trim() {
        "" => DEFAULT_DESCRIPTION.to_string(),
        d => d.to_string(),
    });
    let date = match date.map(|d| d.trim().to_string()) {
        Some(d) if d.is_empty() => {
            return Err(NoteMapError::InvalidNote("date is required".to_string()))
        }
        other => other.map(Some),
    };
    validate_coordinates(lat.unwrap_or(0.0), lon.unwrap_or(0.0))?;

    let image_uri = if clear_image {
        Some(None)
    } else {
        image.map(Some)
    };

    let patch = NotePatch {
        title,
        description,
        latitude: lat,
        longitude: lon,
        date,
        image_uri,
    };

    if patch.is_empty() {
        return Err(NoteMapError::Usage("Nothing to update".to_string()));
    }

    let note = store.update_note(&id, patch).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note ({}) - {}", note.id, note.title);
    }
    Ok(())
}

pub async fn handle_delete(data_dir: &Path, id: String, force: bool) -> Result<()> {
    let (store, _) = open_store(data_dir)?;

    let Some(note) = store.get_note(&id).await? else {
        println!("No note with id {}", id);
        return Ok(());
    };

    if !force {
        eprintln!("Delete note ({}) - {}? [y/N] ", note.id, note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(NoteMapError::Usage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    match store.delete_note(&id).await? {
        Some(removed) => println!("Deleted note \"{}\"", removed.title),
        None => println!("No note with id {}", id),
    }
    Ok(())
}

pub async fn handle_seed(data_dir: &Path, lat: f64, lon: f64, json: bool) -> Result<()> {
    validate_coordinates(lat, lon)?;
    let (store, _) = open_store(data_dir)?;

    match store.seed_once(lat, lon).await? {
        SeedOutcome::Seeded(samples) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&samples)?);
            } else {
                println!("Added {} sample notes:\n", samples.len());
                for note in &samples {
                    print_note_line(note);
                }
            }
        }
        SeedOutcome::AlreadySeeded => {
            if json {
                println!("[]");
            } else {
                println!("Sample notes were already generated.");
            }
        }
    }
    Ok(())
}
