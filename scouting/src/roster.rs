//! Roster loading
//!
//! A roster is a CSV file with `name,role,price` columns. Rosters written for
//! the Spanish-language tooling (`Nombre,Rol,Precio` with `Ataque`/`Defensa`)
//! load as well.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, ScoutingError};
use crate::{Player, Role};

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(alias = "Nombre")]
    name: String,
    #[serde(alias = "Rol")]
    role: String,
    #[serde(alias = "Precio")]
    price: String,
}

pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let file = File::open(path).map_err(|source| ScoutingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let players = read_roster(file)?;
    info!(path = %path.display(), players = players.len(), "roster loaded");
    Ok(players)
}

pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<Player>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut players = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        let row: RosterRow = record.deserialize(Some(&headers))?;
        players.push(parse_row(row, line)?);
    }
    Ok(players)
}

fn parse_row(row: RosterRow, line: u64) -> Result<Player> {
    let role: Role = row
        .role
        .parse()
        .map_err(|_| ScoutingError::InvalidRole {
            line,
            role: row.role.clone(),
        })?;
    let price = match row.price.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => price,
        _ => {
            return Err(ScoutingError::InvalidPrice {
                line,
                value: row.price,
            });
        }
    };
    Ok(Player::new(row.name, role, price))
}
