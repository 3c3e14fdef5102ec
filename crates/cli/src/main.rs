//! Pawly CLI - command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pawly products list
//! pawly products show 7
//!
//! # Work the cart (persists across invocations)
//! pawly cart add 7 --quantity 2
//! pawly cart show
//! pawly checkout
//!
//! # Account
//! pawly account login -e owner@example.com -p secret
//! pawly account profile
//!
//! # Clinic
//! pawly clinic doctors
//! pawly clinic book --doctor-id 1 --owner "A. Owner" --pet Rex \
//!     --date 2026-09-14 --time 10:30 --reason "annual checkup"
//! ```
//!
//! Cart and session state live under the Pawly data directory
//! (`PAWLY_DATA_DIR`), so state survives between runs exactly like the
//! web client's local storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pawly")]
#[command(author, version, about = "Pawly pet-care storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart
    Checkout,
    /// Account and session management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Clinic doctors and appointment booking
    Clinic {
        #[command(subcommand)]
        action: ClinicAction,
    },
    /// Adoption listings
    Adopt {
        #[command(subcommand)]
        action: AdoptAction,
    },
    /// Blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },
    /// Back-office tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product id
        id: i64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: i64,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: i64,
    },
    /// Set the quantity for a product already in the cart
    SetQuantity {
        /// Product id
        id: i64,

        /// New quantity (values below 1 clamp to 1)
        quantity: u32,
    },
    /// Show the cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: pawly_core::Email,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Register a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: pawly_core::Email,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Show the current session, orders, and appointments
    Profile,
    /// Update profile fields on the current session
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum ClinicAction {
    /// List available doctors
    Doctors,
    /// Book an appointment
    Book {
        /// Doctor id
        #[arg(long)]
        doctor_id: i64,

        /// Owner name
        #[arg(long)]
        owner: String,

        /// Pet name
        #[arg(long)]
        pet: String,

        /// Visit date (e.g. 2026-09-14)
        #[arg(long)]
        date: String,

        /// Visit time slot (e.g. 10:30)
        #[arg(long)]
        time: String,

        /// Reason for the visit
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum AdoptAction {
    /// List adoption listings
    List,
    /// Show one listing
    Show {
        /// Pet id
        id: i64,
    },
    /// Apply to volunteer at the adoption center
    Volunteer {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Contact email
        #[arg(long)]
        email: pawly_core::Email,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Preferred area (e.g. "Dog Walking")
        #[arg(long)]
        interest: Option<String>,

        /// Relevant experience
        #[arg(long)]
        experience: Option<String>,

        /// Availability (e.g. "weekends")
        #[arg(long)]
        availability: Option<String>,
    },
}

#[derive(Subcommand)]
enum BlogAction {
    /// List blog posts
    List,
    /// Show one post
    Show {
        /// Post id
        id: i64,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show back-office dashboard counters
    Stats,
    /// Add a product to the catalog
    AddProduct {
        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g. 14.50)
        #[arg(long)]
        price: rust_decimal::Decimal,

        /// Product category
        #[arg(long)]
        category: Option<String>,

        /// Description text
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a product from the catalog
    RemoveProduct {
        /// Product id
        id: i64,
    },
    /// Add a doctor to the clinic roster
    AddDoctor {
        /// Display name
        #[arg(long)]
        name: String,

        /// Clinical specialization
        #[arg(long)]
        specialization: Option<String>,
    },
    /// Remove a doctor from the clinic roster
    RemoveDoctor {
        /// Doctor id
        id: i64,
    },
    /// List adoption listings awaiting approval
    Adoptions,
    /// Approve a pending adoption listing
    ApproveAdoption {
        /// Pet id
        id: i64,
    },
    /// List every booked appointment
    Appointments,
    /// Set the status of an appointment
    SetAppointmentStatus {
        /// Appointment id
        id: i64,

        /// New status (e.g. Confirmed, Completed, Cancelled)
        status: String,
    },
    /// Publish a blog post
    AddPost {
        /// Post title
        #[arg(long)]
        title: String,

        /// Post body
        #[arg(long)]
        content: String,

        /// Author display name
        #[arg(long)]
        author: Option<String>,

        /// Category label
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a blog post
    RemovePost {
        /// Post id
        id: i64,
    },
    /// List submitted volunteer applications
    Volunteers,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = commands::Context::load()?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List => commands::shop::list_products(&ctx).await?,
            ProductAction::Show { id } => commands::shop::show_product(&ctx, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => {
                commands::shop::cart_add(&mut ctx, id, quantity).await?;
            }
            CartAction::Remove { id } => commands::shop::cart_remove(&mut ctx, id),
            CartAction::SetQuantity { id, quantity } => {
                commands::shop::cart_set_quantity(&mut ctx, id, quantity);
            }
            CartAction::Show => commands::shop::cart_show(&ctx),
            CartAction::Clear => commands::shop::cart_clear(&mut ctx),
        },
        Commands::Checkout => commands::shop::checkout(&mut ctx).await?,
        Commands::Account { action } => match action {
            AccountAction::Login { email, password } => {
                commands::account::login(&mut ctx, &email, &password).await?;
            }
            AccountAction::Logout => commands::account::logout(&mut ctx),
            AccountAction::Register {
                name,
                email,
                password,
            } => commands::account::register(&ctx, name, email, password).await?,
            AccountAction::Profile => commands::account::profile(&mut ctx).await?,
            AccountAction::Update { name, phone } => {
                commands::account::update(&mut ctx, name, phone).await?;
            }
        },
        Commands::Clinic { action } => match action {
            ClinicAction::Doctors => commands::clinic::list_doctors(&ctx).await?,
            ClinicAction::Book {
                doctor_id,
                owner,
                pet,
                date,
                time,
                reason,
            } => {
                commands::clinic::book(&ctx, doctor_id, owner, pet, date, time, reason).await?;
            }
        },
        Commands::Adopt { action } => match action {
            AdoptAction::List => commands::content::list_pets(&ctx).await?,
            AdoptAction::Show { id } => commands::content::show_pet(&ctx, id).await?,
            AdoptAction::Volunteer {
                first_name,
                last_name,
                email,
                phone,
                interest,
                experience,
                availability,
            } => {
                let application = pawly_client::api::types::VolunteerApplication {
                    first_name,
                    last_name,
                    email: email.as_str().to_owned(),
                    phone,
                    interest,
                    experience,
                    availability,
                };
                commands::content::volunteer(&ctx, &application).await?;
            }
        },
        Commands::Blog { action } => match action {
            BlogAction::List => commands::content::list_posts(&ctx).await?,
            BlogAction::Show { id } => commands::content::show_post(&ctx, id).await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Stats => commands::admin::stats(&ctx).await?,
            AdminAction::AddProduct {
                name,
                price,
                category,
                description,
            } => {
                commands::admin::add_product(&ctx, name, price, category, description).await?;
            }
            AdminAction::RemoveProduct { id } => commands::admin::remove_product(&ctx, id).await?,
            AdminAction::AddDoctor {
                name,
                specialization,
            } => commands::admin::add_doctor(&ctx, name, specialization).await?,
            AdminAction::RemoveDoctor { id } => commands::admin::remove_doctor(&ctx, id).await?,
            AdminAction::Adoptions => commands::admin::pending_adoptions(&ctx).await?,
            AdminAction::ApproveAdoption { id } => {
                commands::admin::approve_adoption(&ctx, id).await?;
            }
            AdminAction::Appointments => commands::admin::all_appointments(&ctx).await?,
            AdminAction::SetAppointmentStatus { id, status } => {
                commands::admin::set_appointment_status(&ctx, id, &status).await?;
            }
            AdminAction::AddPost {
                title,
                content,
                author,
                category,
            } => commands::admin::add_post(&ctx, title, content, author, category).await?,
            AdminAction::RemovePost { id } => commands::admin::remove_post(&ctx, id).await?,
            AdminAction::Volunteers => commands::admin::volunteers(&ctx).await?,
        },
    }
    Ok(())
}
