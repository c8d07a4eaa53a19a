//! `hms-admin` — terminal front end for the hospital administration API.
//!
//! One subcommand tree per entity, driving the headless view controllers
//! from `hms-views`: lists render through the collection pages (including
//! the joined appointment board) and mutations run through the edit forms,
//! so validation and per-field partial-failure reporting apply the same way
//! they would in any other front end.
//!
//! # Environment Variables
//! - `HMS_API_BASE_URL`: API base URL (default: `http://localhost:8080/api`)
//! - `HMS_REQUEST_TIMEOUT_SECS`: request timeout in seconds (default: 30)
//! - `HMS_TOKEN_FILE`: bearer-token file (default: `~/.config/hms-admin/token`)

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use hms_client::{
    AffiliatedWithApi, AppointmentApi, DepartmentApi, NurseApi, PatientApi, PhysicianApi,
    ProcedureApi, TrainedInApi, Transport,
};
use hms_core::config::{base_url_from_env_value, timeout_from_env_value};
use hms_core::{ClientConfig, FileTokenStore, Navigator, Position, Session};
use hms_views::forms::{
    AffiliationForm, AppointmentForm, CertificationForm, DepartmentForm, NurseForm, PatientForm,
    PhysicianForm, ProcedureForm,
};
use hms_views::pages::{
    AffiliationsPage, AppointmentsPage, CertificationsPage, DeleteStep, DepartmentRosterPage,
    DepartmentsPage,
};
use hms_views::{CollectionView, LoadState, Submission, TablePage};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hms-admin")]
#[command(about = "Hospital administration console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an API token obtained from the login service
    Login { token: String },
    /// Forget the stored API token
    Logout,
    /// Patient records
    #[command(subcommand)]
    Patient(PatientCmd),
    /// Physician records
    #[command(subcommand)]
    Physician(PhysicianCmd),
    /// Departments
    #[command(subcommand)]
    Department(DepartmentCmd),
    /// Nurse records
    #[command(subcommand)]
    Nurse(NurseCmd),
    /// Procedures
    #[command(subcommand)]
    Procedure(ProcedureCmd),
    /// Appointments
    #[command(subcommand)]
    Appointment(AppointmentCmd),
    /// Procedure certifications
    #[command(subcommand)]
    Certification(CertificationCmd),
    /// Physician-department affiliations
    #[command(subcommand)]
    Affiliation(AffiliationCmd),
}

#[derive(Subcommand)]
enum PatientCmd {
    /// List all patients
    List,
    /// Find one patient by SSN
    Find { ssn: u64 },
    /// Register a new patient
    Add {
        ssn: u64,
        name: String,
        address: String,
        phone: String,
        #[arg(long)]
        insurance_id: u64,
        /// Primary care physician (employee id)
        #[arg(long)]
        pcp: u64,
    },
    /// Update a patient's address
    SetAddress { ssn: u64, address: String },
    /// Update a patient's phone number
    SetPhone { ssn: u64, phone: String },
}

#[derive(Subcommand)]
enum PhysicianCmd {
    /// List all physicians
    List,
    /// Register a new physician
    Add {
        employee_id: u64,
        name: String,
        /// Head, Senior, Attending, Resident or Intern
        position: String,
        #[arg(long)]
        ssn: u64,
    },
    /// Update a physician's name
    SetName { employee_id: u64, name: String },
    /// Update a physician's position
    SetPosition { employee_id: u64, position: String },
    /// Update a physician's SSN
    SetSsn { employee_id: u64, ssn: u64 },
}

#[derive(Subcommand)]
enum DepartmentCmd {
    /// List all departments
    List,
    /// Create a department
    Add {
        department_id: u64,
        name: String,
        /// Head physician (employee id)
        #[arg(long)]
        head: Option<u64>,
    },
    /// Rename a department
    Rename { department_id: u64, name: String },
    /// Assign a department head
    SetHead { department_id: u64, head: u64 },
    /// Delete a department (two-step: re-run with --confirm)
    Delete {
        department_id: u64,
        #[arg(long)]
        confirm: bool,
    },
    /// List the physicians affiliated with a department
    Roster { department_id: u64 },
}

#[derive(Subcommand)]
enum NurseCmd {
    /// List all nurses
    List,
    /// Register a new nurse
    Add {
        employee_id: u64,
        name: String,
        position: String,
        #[arg(long)]
        registered: bool,
        #[arg(long)]
        ssn: u64,
    },
    /// Update a nurse's registration flag
    SetRegistered {
        employee_id: u64,
        /// `true` or `false`
        #[arg(action = clap::ArgAction::Set)]
        registered: bool,
    },
    /// Update a nurse's SSN
    SetSsn { employee_id: u64, ssn: u64 },
}

#[derive(Subcommand)]
enum ProcedureCmd {
    /// List all procedures
    List,
    /// Create a procedure
    Add { code: u64, name: String, cost: f64 },
    /// Rename a procedure
    Rename { code: u64, name: String },
    /// Update a procedure's cost
    SetCost { code: u64, cost: f64 },
}

#[derive(Subcommand)]
enum AppointmentCmd {
    /// List all appointments with resolved names
    List,
    /// Schedule an appointment
    Add {
        appointment_id: u64,
        /// Patient SSN
        patient: u64,
        /// Physician employee id
        physician: u64,
        /// Prep nurse employee id
        #[arg(long)]
        prep_nurse: Option<u64>,
        /// Start, RFC 3339 or `YYYY-MM-DDTHH:MM`
        start: String,
        /// End, RFC 3339 or `YYYY-MM-DDTHH:MM`
        end: String,
        room: String,
    },
    /// Move an appointment to another examination room
    SetRoom { appointment_id: u64, room: String },
}

#[derive(Subcommand)]
enum CertificationCmd {
    /// List a physician's certifications
    List { physician_id: u64 },
    /// Certify a physician for a procedure
    Add {
        physician_id: u64,
        procedure_id: u64,
        /// Certification date, `YYYY-MM-DD`
        certified: NaiveDate,
        /// Expiry date, `YYYY-MM-DD`
        expires: NaiveDate,
    },
    /// Extend a certification's expiry by whole years
    Extend {
        physician_id: u64,
        procedure_id: u64,
        #[arg(long, default_value_t = 2)]
        years: u32,
    },
}

#[derive(Subcommand)]
enum AffiliationCmd {
    /// List a physician's affiliations
    List { physician_id: u64 },
    /// Affiliate a physician with a department
    Add {
        physician_id: u64,
        department_id: u64,
        #[arg(long)]
        primary: bool,
    },
    /// Move a physician's primary affiliation to a department
    SetPrimary { physician_id: u64, department_id: u64 },
}

/// The terminal stand-in for the browser's `/login` redirect.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        eprintln!(
            "Session expired. Obtain a new token and run `hms-admin login <token>` (login page: {path})."
        );
    }
}

fn token_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("HMS_TOKEN_FILE") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home)
        .join(".config")
        .join("hms-admin")
        .join("token")
}

fn parse_timestamp(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .with_context(|| format!("invalid timestamp: {raw}"))?;
    Ok(naive.and_utc())
}

/// Render one collection view as an aligned table.
fn render_table<T>(
    view: &CollectionView<Vec<T>>,
    header: &str,
    empty: &str,
    row: impl Fn(&T) -> String,
) {
    match view.state() {
        LoadState::Loading => println!("Loading..."),
        LoadState::Failed(message) => println!("Error: {message}"),
        LoadState::Ready(rows) if rows.is_empty() => println!("{empty}"),
        LoadState::Ready(rows) => {
            println!("{header}");
            for r in rows {
                println!("{}", row(r));
            }
        }
    }
}

fn finish_submission(outcome: Submission) -> anyhow::Result<()> {
    match outcome {
        Submission::Completed => {
            println!("Done.");
            Ok(())
        }
        Submission::Rejected(err) => anyhow::bail!("validation failed: {err}"),
        Submission::Failed(report) => anyhow::bail!("{report}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hms_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url = base_url_from_env_value(std::env::var("HMS_API_BASE_URL").ok());
    let timeout = timeout_from_env_value(std::env::var("HMS_REQUEST_TIMEOUT_SECS").ok())?;
    let cfg = ClientConfig::new(base_url, timeout)?;
    tracing::debug!(base_url = cfg.base_url(), "resolved client configuration");

    let session = Arc::new(Session::new(
        Arc::new(FileTokenStore::new(token_file_path())),
        Arc::new(TerminalNavigator),
    ));
    let transport = Transport::new(&cfg, session.clone())?;

    match cli.command {
        Commands::Login { token } => {
            session.store_token(&token);
            println!("Token stored.");
        }
        Commands::Logout => {
            session.logout();
            println!("Token cleared.");
        }
        Commands::Patient(cmd) => patient_command(cmd, &transport).await?,
        Commands::Physician(cmd) => physician_command(cmd, &transport).await?,
        Commands::Department(cmd) => department_command(cmd, &transport).await?,
        Commands::Nurse(cmd) => nurse_command(cmd, &transport).await?,
        Commands::Procedure(cmd) => procedure_command(cmd, &transport).await?,
        Commands::Appointment(cmd) => appointment_command(cmd, &transport).await?,
        Commands::Certification(cmd) => certification_command(cmd, &transport).await?,
        Commands::Affiliation(cmd) => affiliation_command(cmd, &transport).await?,
    }

    Ok(())
}

async fn patient_command(cmd: PatientCmd, transport: &Transport) -> anyhow::Result<()> {
    match cmd {
        PatientCmd::List => {
            let mut page = TablePage::new();
            page.load_with(PatientApi::new(transport).list()).await;
            render_table(
                &page.view,
                &format!(
                    "{:<12} {:<25} {:<25} {:<14} {:<12} {:<6}",
                    "SSN", "Name", "Address", "Phone", "Insurance", "PCP"
                ),
                "No patients found.",
                |p| {
                    format!(
                        "{:<12} {:<25} {:<25} {:<14} {:<12} {:<6}",
                        p.ssn, p.name, p.address, p.phone, p.insurance_id, p.pcp
                    )
                },
            );
        }
        PatientCmd::Find { ssn } => {
            match PatientApi::new(transport).find_by_ssn(ssn).await? {
                Some(p) => println!(
                    "SSN: {}, Name: {}, Address: {}, Phone: {}, Insurance: {}, PCP: {}",
                    p.ssn, p.name, p.address, p.phone, p.insurance_id, p.pcp
                ),
                None => println!("No patient with SSN {ssn}."),
            }
        }
        PatientCmd::Add {
            ssn,
            name,
            address,
            phone,
            insurance_id,
            pcp,
        } => {
            let mut form = PatientForm::new();
            form.open_create();
            form.ssn = Some(ssn);
            form.name = name;
            form.address = address;
            form.phone = phone;
            form.insurance_id = Some(insurance_id);
            form.pcp = Some(pcp);
            finish_submission(form.submit(transport).await)?;
        }
        PatientCmd::SetAddress { ssn, address } => {
            let current = PatientApi::new(transport)
                .find_by_ssn(ssn)
                .await?
                .with_context(|| format!("no patient with SSN {ssn}"))?;
            let mut form = PatientForm::new();
            form.open_update(current);
            form.address = address;
            finish_submission(form.submit(transport).await)?;
        }
        PatientCmd::SetPhone { ssn, phone } => {
            let current = PatientApi::new(transport)
                .find_by_ssn(ssn)
                .await?
                .with_context(|| format!("no patient with SSN {ssn}"))?;
            let mut form = PatientForm::new();
            form.open_update(current);
            form.phone = phone;
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn physician_command(cmd: PhysicianCmd, transport: &Transport) -> anyhow::Result<()> {
    let api = PhysicianApi::new(transport);
    match cmd {
        PhysicianCmd::List => {
            let mut page = TablePage::new();
            page.load_with(api.list()).await;
            render_table(
                &page.view,
                &format!(
                    "{:<10} {:<25} {:<12} {:<12}",
                    "ID", "Name", "Position", "SSN"
                ),
                "No physicians found.",
                |p| {
                    format!(
                        "{:<10} {:<25} {:<12} {:<12}",
                        p.employee_id, p.name, p.position, p.ssn
                    )
                },
            );
        }
        PhysicianCmd::Add {
            employee_id,
            name,
            position,
            ssn,
        } => {
            let position: Position = position.parse()?;
            let mut form = PhysicianForm::new();
            form.open_create();
            form.employee_id = Some(employee_id);
            form.name = name;
            form.position = Some(position);
            form.ssn = Some(ssn);
            finish_submission(form.submit(transport).await)?;
        }
        PhysicianCmd::SetName { employee_id, name } => {
            let current = api.get(employee_id).await?;
            let mut form = PhysicianForm::new();
            form.open_update(current);
            form.name = name;
            finish_submission(form.submit(transport).await)?;
        }
        PhysicianCmd::SetPosition {
            employee_id,
            position,
        } => {
            let position: Position = position.parse()?;
            let current = api.get(employee_id).await?;
            let mut form = PhysicianForm::new();
            form.open_update(current);
            form.position = Some(position);
            finish_submission(form.submit(transport).await)?;
        }
        PhysicianCmd::SetSsn { employee_id, ssn } => {
            let current = api.get(employee_id).await?;
            let mut form = PhysicianForm::new();
            form.open_update(current);
            form.ssn = Some(ssn);
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn department_command(cmd: DepartmentCmd, transport: &Transport) -> anyhow::Result<()> {
    match cmd {
        DepartmentCmd::List => {
            let mut page = DepartmentsPage::new();
            page.load(transport).await;
            render_table(
                &page.view,
                &format!("{:<6} {:<25} {:<8}", "ID", "Name", "Head"),
                "No departments found.",
                |d| {
                    let head = d.head.map_or_else(|| "-".to_owned(), |h| h.to_string());
                    format!("{:<6} {:<25} {:<8}", d.department_id, d.name, head)
                },
            );
        }
        DepartmentCmd::Add {
            department_id,
            name,
            head,
        } => {
            let mut form = DepartmentForm::new();
            form.open_create();
            form.department_id = Some(department_id);
            form.name = name;
            form.head = head;
            finish_submission(form.submit(transport).await)?;
        }
        DepartmentCmd::Rename {
            department_id,
            name,
        } => {
            let current = DepartmentApi::new(transport).get(department_id).await?;
            let mut form = DepartmentForm::new();
            form.open_update(current);
            form.name = name;
            finish_submission(form.submit(transport).await)?;
        }
        DepartmentCmd::SetHead {
            department_id,
            head,
        } => {
            let current = DepartmentApi::new(transport).get(department_id).await?;
            let mut form = DepartmentForm::new();
            form.open_update(current);
            form.head = Some(head);
            finish_submission(form.submit(transport).await)?;
        }
        DepartmentCmd::Delete {
            department_id,
            confirm,
        } => {
            let mut page = DepartmentsPage::new();
            page.load(transport).await;
            page.request_delete(transport, department_id).await?; // arms
            if confirm {
                match page.request_delete(transport, department_id).await? {
                    DeleteStep::Deleted => println!("Department {department_id} deleted."),
                    DeleteStep::Armed => println!("Delete armed for department {department_id}."),
                }
            } else {
                println!(
                    "Delete armed for department {department_id}; re-run with --confirm to delete."
                );
            }
        }
        DepartmentCmd::Roster { department_id } => {
            let mut page = DepartmentRosterPage::new();
            page.select(transport, department_id).await;
            render_table(
                &page.view,
                &format!("{:<10} {:<25} {:<12}", "ID", "Name", "Position"),
                "No physicians affiliated with this department.",
                |p| format!("{:<10} {:<25} {:<12}", p.employee_id, p.name, p.position),
            );
        }
    }
    Ok(())
}

async fn nurse_command(cmd: NurseCmd, transport: &Transport) -> anyhow::Result<()> {
    let api = NurseApi::new(transport);
    match cmd {
        NurseCmd::List => {
            let mut page = TablePage::new();
            page.load_with(api.list()).await;
            render_table(
                &page.view,
                &format!(
                    "{:<10} {:<25} {:<15} {:<11} {:<12}",
                    "ID", "Name", "Position", "Registered", "SSN"
                ),
                "No nurses found.",
                |n| {
                    format!(
                        "{:<10} {:<25} {:<15} {:<11} {:<12}",
                        n.employee_id,
                        n.name,
                        n.position,
                        if n.registered { "yes" } else { "no" },
                        n.ssn
                    )
                },
            );
        }
        NurseCmd::Add {
            employee_id,
            name,
            position,
            registered,
            ssn,
        } => {
            let mut form = NurseForm::new();
            form.open_create();
            form.employee_id = Some(employee_id);
            form.name = name;
            form.position = position;
            form.registered = registered;
            form.ssn = Some(ssn);
            finish_submission(form.submit(transport).await)?;
        }
        NurseCmd::SetRegistered {
            employee_id,
            registered,
        } => {
            let current = api.get(employee_id).await?;
            let mut form = NurseForm::new();
            form.open_update(current);
            form.registered = registered;
            finish_submission(form.submit(transport).await)?;
        }
        NurseCmd::SetSsn { employee_id, ssn } => {
            let current = api.get(employee_id).await?;
            let mut form = NurseForm::new();
            form.open_update(current);
            form.ssn = Some(ssn);
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn procedure_command(cmd: ProcedureCmd, transport: &Transport) -> anyhow::Result<()> {
    let api = ProcedureApi::new(transport);
    match cmd {
        ProcedureCmd::List => {
            let mut page = TablePage::new();
            page.load_with(api.list()).await;
            render_table(
                &page.view,
                &format!("{:<8} {:<35} {:>12}", "Code", "Name", "Cost"),
                "No procedures found.",
                |p| format!("{:<8} {:<35} {:>12.2}", p.code, p.name, p.cost),
            );
        }
        ProcedureCmd::Add { code, name, cost } => {
            let mut form = ProcedureForm::new();
            form.open_create();
            form.code = Some(code);
            form.name = name;
            form.cost = Some(cost);
            finish_submission(form.submit(transport).await)?;
        }
        ProcedureCmd::Rename { code, name } => {
            let current = api
                .find_by_code(code)
                .await?
                .with_context(|| format!("no procedure with code {code}"))?;
            let mut form = ProcedureForm::new();
            form.open_update(current);
            form.name = name;
            finish_submission(form.submit(transport).await)?;
        }
        ProcedureCmd::SetCost { code, cost } => {
            let current = api
                .find_by_code(code)
                .await?
                .with_context(|| format!("no procedure with code {code}"))?;
            let mut form = ProcedureForm::new();
            form.open_update(current);
            form.cost = Some(cost);
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn appointment_command(cmd: AppointmentCmd, transport: &Transport) -> anyhow::Result<()> {
    match cmd {
        AppointmentCmd::List => {
            let mut page = AppointmentsPage::new();
            page.load(transport).await;
            render_table(
                &page.view,
                &format!(
                    "{:<10} {:<20} {:<20} {:<20} {:<17} {:<17} {:<6}",
                    "ID", "Patient", "Physician", "Prep Nurse", "Start", "End", "Room"
                ),
                "No appointments found.",
                |row| {
                    let dash = "-".to_owned();
                    format!(
                        "{:<10} {:<20} {:<20} {:<20} {:<17} {:<17} {:<6}",
                        row.appointment.appointment_id,
                        row.patient_name.as_ref().unwrap_or(&dash),
                        row.physician_name.as_ref().unwrap_or(&dash),
                        row.prep_nurse_name.as_ref().unwrap_or(&dash),
                        row.appointment.start.format("%Y-%m-%d %H:%M"),
                        row.appointment.end.format("%Y-%m-%d %H:%M"),
                        row.appointment.examination_room
                    )
                },
            );
        }
        AppointmentCmd::Add {
            appointment_id,
            patient,
            physician,
            prep_nurse,
            start,
            end,
            room,
        } => {
            let mut form = AppointmentForm::new();
            form.open_create();
            form.appointment_id = Some(appointment_id);
            form.patient = Some(patient);
            form.physician = Some(physician);
            form.prep_nurse = prep_nurse;
            form.start = Some(parse_timestamp(&start)?);
            form.end = Some(parse_timestamp(&end)?);
            form.examination_room = room;
            finish_submission(form.submit(transport).await)?;
        }
        AppointmentCmd::SetRoom {
            appointment_id,
            room,
        } => {
            let appointments = AppointmentApi::new(transport).list().await?;
            let current = appointments
                .into_iter()
                .find(|a| a.appointment_id == appointment_id)
                .with_context(|| format!("no appointment with id {appointment_id}"))?;
            let mut form = AppointmentForm::new();
            form.open_update(current);
            form.examination_room = room;
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn certification_command(cmd: CertificationCmd, transport: &Transport) -> anyhow::Result<()> {
    match cmd {
        CertificationCmd::List { physician_id } => {
            let mut page = CertificationsPage::new();
            page.select(transport, physician_id).await;
            render_table(
                &page.view,
                &format!(
                    "{:<10} {:<10} {:<12} {:<12}",
                    "Physician", "Procedure", "Certified", "Expires"
                ),
                "No certifications for this physician.",
                |c| {
                    format!(
                        "{:<10} {:<10} {:<12} {:<12}",
                        c.physician, c.treatment, c.certified, c.expires
                    )
                },
            );
        }
        CertificationCmd::Add {
            physician_id,
            procedure_id,
            certified,
            expires,
        } => {
            let mut form = CertificationForm::new();
            form.open_create();
            form.physician = Some(physician_id);
            form.treatment = Some(procedure_id);
            form.certified = Some(certified);
            form.expires = Some(expires);
            finish_submission(form.submit(transport).await)?;
        }
        CertificationCmd::Extend {
            physician_id,
            procedure_id,
            years,
        } => {
            let certifications = TrainedInApi::new(transport).by_physician(physician_id).await?;
            let current = certifications
                .into_iter()
                .find(|c| c.treatment == procedure_id)
                .with_context(|| {
                    format!("physician {physician_id} holds no certification for procedure {procedure_id}")
                })?;
            let mut form = CertificationForm::new();
            form.open_update(current);
            form.extend_by_years(years);
            finish_submission(form.submit(transport).await)?;
        }
    }
    Ok(())
}

async fn affiliation_command(cmd: AffiliationCmd, transport: &Transport) -> anyhow::Result<()> {
    let api = AffiliatedWithApi::new(transport);
    match cmd {
        AffiliationCmd::List { physician_id } => {
            let mut page = AffiliationsPage::new();
            page.select(transport, physician_id).await;
            render_table(
                &page.view,
                &format!("{:<6} {:<25} {:<8}", "Dept", "Name", "Primary"),
                "No affiliations for this physician.",
                |row| {
                    let dash = "-".to_owned();
                    format!(
                        "{:<6} {:<25} {:<8}",
                        row.affiliation.department,
                        row.department_name.as_ref().unwrap_or(&dash),
                        if row.affiliation.primary { "yes" } else { "no" }
                    )
                },
            );
        }
        AffiliationCmd::Add {
            physician_id,
            department_id,
            primary,
        } => {
            let existing = api.list().await?;
            let mut form = AffiliationForm::new();
            form.open_create();
            form.physician = Some(physician_id);
            form.department = Some(department_id);
            form.primary = primary;
            finish_submission(form.submit(transport, &existing).await)?;
        }
        AffiliationCmd::SetPrimary {
            physician_id,
            department_id,
        } => {
            api.set_primary(physician_id, department_id).await?;
            println!("Primary affiliation for physician {physician_id} moved to department {department_id}.");
        }
    }
    Ok(())
}
