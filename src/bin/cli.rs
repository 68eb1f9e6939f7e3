//! Hospital Portal CLI
//!
//! Terminal front for the same service calls the web pages make:
//! - List doctors, appointments, patients and patient records
//! - Update an appointment
//! - Add a prescription
//! - Print the page fragments the browser would render (`--format html`)

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hospital_portal::config::{generate_default_config, Config};
use hospital_portal::controllers::{APPOINTMENT_ROWS, DOCTOR_GRID, PATIENT_RECORD_ROWS};
use hospital_portal::render::{appointment_row, doctor_card, patient_record_row};
use hospital_portal::{
    format_date, render_list, ApiClient, AppointmentUpdate, MemoryDom, Prescription,
    ReqwestTransport, Target,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hospital-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the hospital management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and HOSPITAL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    /// The HTML fragment the matching page renders
    Html,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List doctors
    Doctors,

    /// List appointments
    Appointments,

    /// Change an appointment's date and status
    UpdateAppointment {
        /// Appointment id
        id: String,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// New status, e.g. Confirmed
        #[arg(long)]
        status: String,
    },

    /// List patients
    Patients,

    /// List a patient's medical records
    Records {
        /// Patient id
        patient_id: String,
    },

    /// Add a prescription
    Prescribe {
        #[arg(long)]
        patient_id: String,
        #[arg(long)]
        medicine: String,
        #[arg(long)]
        dosage: String,
        #[arg(long)]
        instructions: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load_first(&Config::default_paths());
    init_logging(&loaded.config);
    loaded.log();
    let config = loaded.config;

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.api.base_url.clone());
    let transport = ReqwestTransport::new(config.api.request_timeout())?;
    let client = ApiClient::new(base_url, transport);
    tracing::debug!(base_url = %client.base_url(), "Using API");

    match cli.command {
        Commands::Doctors => {
            let doctors = client.fetch_doctors().await.context("Failed to fetch doctors")?;
            match cli.format {
                Format::Json => print_json(&doctors)?,
                Format::Html => print_fragment(DOCTOR_GRID, |dom| {
                    render_list(dom, DOCTOR_GRID, &doctors, doctor_card)
                })?,
                Format::Table => {
                    if doctors.is_empty() {
                        println!("No doctors found.");
                    } else {
                        println!("{:<28} {:<24} {}", "Name", "Specialization", "Experience");
                        println!("{}", "-".repeat(64));
                        for doctor in &doctors {
                            println!(
                                "{:<28} {:<24} {} years",
                                format!("Dr. {}", doctor.name),
                                doctor.specialization,
                                doctor.experience
                            );
                        }
                    }
                }
            }
        }

        Commands::Appointments => {
            let appointments = client
                .fetch_appointments()
                .await
                .context("Failed to fetch appointments")?;
            match cli.format {
                Format::Json => print_json(&appointments)?,
                Format::Html => print_fragment(APPOINTMENT_ROWS, |dom| {
                    render_list(dom, APPOINTMENT_ROWS, &appointments, appointment_row)
                })?,
                Format::Table => {
                    println!("{:<8} {:<10} {:<12} {}", "ID", "Patient", "Date", "Status");
                    println!("{}", "-".repeat(48));
                    for appointment in &appointments {
                        println!(
                            "{:<8} {:<10} {:<12} {}",
                            appointment.id,
                            appointment.patient_id,
                            format_date(&appointment.date),
                            appointment.status
                        );
                    }
                }
            }
        }

        Commands::UpdateAppointment { id, date, status } => {
            let update = AppointmentUpdate { date, status };
            let reply = client
                .update_appointment(&id, &update)
                .await
                .context("Failed to update appointment")?;
            match cli.format {
                Format::Table => println!(
                    "Appointment {} updated: {} on {}",
                    id,
                    update.status,
                    format_date(&update.date)
                ),
                _ => print_json(&reply)?,
            }
        }

        Commands::Patients => {
            let patients = client.fetch_patients().await.context("Failed to fetch patients")?;
            match cli.format {
                Format::Table => {
                    println!("{:<8} {:<24} {:<28} {}", "ID", "Name", "Email", "Phone");
                    println!("{}", "-".repeat(72));
                    for patient in &patients {
                        println!(
                            "{:<8} {:<24} {:<28} {}",
                            patient.id,
                            patient.name.as_deref().unwrap_or("-"),
                            patient.email.as_deref().unwrap_or("-"),
                            patient.phone.as_deref().unwrap_or("-")
                        );
                    }
                }
                _ => print_json(&patients)?,
            }
        }

        Commands::Records { patient_id } => {
            let records = client
                .fetch_patient_records(&patient_id)
                .await
                .with_context(|| format!("Failed to fetch records for patient {}", patient_id))?;
            match cli.format {
                Format::Json => print_json(&records)?,
                Format::Html => print_fragment(PATIENT_RECORD_ROWS, |dom| {
                    render_list(dom, PATIENT_RECORD_ROWS, &records, patient_record_row)
                })?,
                Format::Table => {
                    if records.is_empty() {
                        println!("No records for patient {}.", patient_id);
                    }
                    for record in &records {
                        println!(
                            "[{}] {} - {}",
                            record.date.as_deref().map(format_date).unwrap_or_default(),
                            record.diagnosis.as_deref().unwrap_or("-"),
                            record.notes.as_deref().unwrap_or("")
                        );
                    }
                }
            }
        }

        Commands::Prescribe {
            patient_id,
            medicine,
            dosage,
            instructions,
        } => {
            let prescription = Prescription {
                patient_id,
                medicine,
                dosage,
                instructions,
            };
            let created = client
                .add_prescription(&prescription)
                .await
                .context("Failed to add prescription")?;
            match cli.format {
                Format::Table => println!(
                    "Prescribed {} ({}) for patient {}",
                    prescription.medicine, prescription.dosage, prescription.patient_id
                ),
                _ => print_json(&created)?,
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let level = &config.logging.level;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(default_filter(level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Filter directives for the library and this binary at `level`
fn default_filter(level: &str) -> String {
    format!("hospital_portal={level},hospital_cli={level}")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render into a scratch document and print the container's markup
fn print_fragment<F>(target: Target<'_>, render: F) -> anyhow::Result<()>
where
    F: FnOnce(&MemoryDom) -> Result<(), hospital_portal::DomError>,
{
    let dom = MemoryDom::new().with_container(target);
    render(&dom)?;
    println!("{}", dom.inner_html(target).unwrap_or_default());
    Ok(())
}
