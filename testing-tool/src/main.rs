use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use colored::*;
use serde::Deserialize;

/// Endpoints cuyas filas se cuentan después de un reinicio
const COUNTED_ENDPOINTS: &[&str] = &[
    "vehiculoEstados",
    "viajeEstados",
    "currencies",
    "tiposDeGasto",
    "choferes",
    "camiones",
    "acoplados",
    "viajes",
    "polizas",
    "gastos",
];

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResetStatus {
    in_progress: bool,
    started_at: Option<String>,
    finished_at: Option<String>,
    last_error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 CargoFlow Testing Tool".bright_blue().bold());
    println!("{}", "=========================".bright_blue());
    println!();

    let base_url = get_base_url()?;
    let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔄 Reiniciar base de datos y esperar");
        println!("2. 📊 Ver estado del reinicio");
        println!("3. 🔢 Contar filas por endpoint");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        let result = match choice.trim() {
            "1" => reset_and_wait(&client, &base_url).await,
            "2" => fetch_status(&client, &base_url).await.map(|s| print_status(&s)),
            "3" => print_counts(&client, &base_url).await,
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{} {}", "❌ Error:".bright_red().bold(), e);
        }
    }

    Ok(())
}

fn get_base_url() -> Result<String> {
    print!("{}", "URL del servidor [http://localhost:5001]: ".bright_yellow());
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    let url = url.trim().trim_end_matches('/');

    Ok(if url.is_empty() {
        "http://localhost:5001".to_string()
    } else {
        url.to_string()
    })
}

async fn reset_and_wait(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let response = client.post(format!("{}/api/reset", base_url)).send().await?;
    let status = response.status();
    let body: MessageResponse = response.json().await?;
    println!("{} {} {}", "📤 POST /api/reset ->".bright_blue(), status, body.message);

    for attempt in 1..=60 {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let current = fetch_status(client, base_url).await?;
        if !current.in_progress {
            print_status(&current);
            if current.last_error.is_none() {
                return print_counts(client, base_url).await;
            }
            return Ok(());
        }
        println!("{}", format!("⏳ Reinicio en curso ({})...", attempt).yellow());
    }

    bail!("el reinicio no terminó en 30 segundos")
}

async fn fetch_status(client: &reqwest::Client, base_url: &str) -> Result<ResetStatus> {
    let response = client.get(format!("{}/api/reset/status", base_url)).send().await?;
    Ok(response.error_for_status()?.json().await?)
}

fn print_status(status: &ResetStatus) {
    println!("{}", "📊 ESTADO DEL REINICIO".bright_cyan().bold());
    println!("   en curso:   {}", status.in_progress);
    println!("   iniciado:   {}", status.started_at.as_deref().unwrap_or("-"));
    println!("   finalizado: {}", status.finished_at.as_deref().unwrap_or("-"));
    match &status.last_error {
        Some(error) => println!("   error:      {}", error.bright_red()),
        None => println!("   error:      {}", "ninguno".bright_green()),
    }
}

async fn print_counts(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!("{}", "🔢 FILAS POR ENDPOINT".bright_cyan().bold());
    for endpoint in COUNTED_ENDPOINTS {
        let response = client.get(format!("{}/api/{}", base_url, endpoint)).send().await?;
        if !response.status().is_success() {
            println!("   {:<16} {}", endpoint, response.status().to_string().bright_red());
            continue;
        }
        let rows: Vec<serde_json::Value> = response.json().await?;
        println!("   {:<16} {}", endpoint, rows.len().to_string().bright_green());
    }
    Ok(())
}
